pub mod grid;
pub mod search;

pub use grid::{Direction, Grid, ParseError};
pub use search::{lowest_cost, Outcome, RunLimits, SearchError, SearchStats};

use tabled::Tabled;

/// The two constraint variants of the puzzle. They share the engine and
/// nothing else; each solve owns its own frontier and cost table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Standard,
    Ultra,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Standard, Variant::Ultra];

    pub fn limits(self) -> RunLimits {
        match self {
            Variant::Standard => RunLimits::new(1, 3),
            Variant::Ultra => RunLimits::new(4, 10),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Variant::Standard => "I ",
            Variant::Ultra => "II",
        }
    }
}

pub fn solve(grid: &Grid, variant: Variant) -> Result<Outcome, SearchError> {
    search::search(grid, variant.limits())
}

/// One row of the `--stats` table.
#[derive(Tabled)]
pub struct VariantReport {
    pub variant: &'static str,
    pub min_run: u8,
    pub max_run: u8,
    pub popped: u64,
    pub pushed: u64,
    pub pruned: u64,
    pub cost: u32,
}

impl VariantReport {
    pub fn new(variant: Variant, outcome: &Outcome) -> Self {
        let limits = variant.limits();
        VariantReport {
            variant: variant.label(),
            min_run: limits.min,
            max_run: limits.max,
            popped: outcome.stats.popped,
            pushed: outcome.stats.pushed,
            pruned: outcome.stats.pruned,
            cost: outcome.cost,
        }
    }
}
