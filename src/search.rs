use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::grid::{Direction, Grid};

/// Bounds on how many consecutive steps a path may (and must) take in one
/// direction before turning or stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunLimits {
    pub min: u8,
    pub max: u8,
}

impl RunLimits {
    pub fn new(min: u8, max: u8) -> Self {
        assert!(min >= 1, "minimum run length must be at least 1");
        assert!(min <= max, "minimum run length must not exceed the maximum");
        RunLimits { min, max }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("no path to ({x}, {y}) honors runs of {min}..={max} steps")]
    NoPath { x: usize, y: usize, min: u8, max: u8 },

    #[error("gave up after {budget} expansions without reaching the goal")]
    BudgetExhausted { budget: u64 },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub popped: u64,
    pub pushed: u64,
    pub pruned: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub cost: u32,
    pub stats: SearchStats,
}

// A frontier entry: at (x, y) having just moved `run` consecutive steps in
// `dir`, about to take one more step in `dir`. Seeds carry run 0, which is
// why the very first move is exempt from the minimum-run rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Walker {
    cost: u32,
    x: usize,
    y: usize,
    dir: Direction,
    run: u8,
}

impl Ord for Walker {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on cost so BinaryHeap pops the cheapest walker first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| (self.x, self.y, self.dir, self.run).cmp(&(other.x, other.y, other.dir, other.run)))
    }
}

impl PartialOrd for Walker {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Lowest accumulated cost seen per (position, direction, run length) state.
struct BestCosts {
    width: usize,
    max_run: usize,
    costs: Vec<u32>,
}

impl BestCosts {
    fn new(width: usize, height: usize, max_run: u8) -> Self {
        let max_run = max_run as usize;
        BestCosts {
            width,
            max_run,
            costs: vec![u32::MAX; width * height * 4 * max_run],
        }
    }

    fn slot(&self, x: usize, y: usize, dir: Direction, run: u8) -> usize {
        debug_assert!(run >= 1 && run as usize <= self.max_run);
        ((y * self.width + x) * 4 + dir.index()) * self.max_run + run as usize - 1
    }

    // A walker arriving with a shorter run in the same direction has strictly
    // more freedom left, so the minimum over runs 1..=run is the bar a new
    // arrival has to beat.
    fn min_through(&self, x: usize, y: usize, dir: Direction, run: u8) -> u32 {
        (1..=run)
            .map(|r| self.costs[self.slot(x, y, dir, r)])
            .min()
            .unwrap_or(u32::MAX)
    }

    fn record(&mut self, x: usize, y: usize, dir: Direction, run: u8, cost: u32) {
        let slot = self.slot(x, y, dir, run);
        self.costs[slot] = cost;
    }

    fn best_at(&self, x: usize, y: usize, limits: RunLimits) -> Option<u32> {
        Direction::ALL
            .iter()
            .flat_map(|&dir| (limits.min..=limits.max).map(move |run| (dir, run)))
            .map(|(dir, run)| self.costs[self.slot(x, y, dir, run)])
            .filter(|&cost| cost != u32::MAX)
            .min()
    }
}

/// Minimum total entry cost of a legal path from (0, 0) to the far corner.
pub fn lowest_cost(grid: &Grid, limits: RunLimits) -> Result<u32, SearchError> {
    search(grid, limits).map(|outcome| outcome.cost)
}

pub fn search(grid: &Grid, limits: RunLimits) -> Result<Outcome, SearchError> {
    // Far beyond what any digit grid produces; only pathological inputs get
    // near it.
    let budget = (grid.width * grid.height * 4 * limits.max as usize) as u64 * 32 + 64;
    search_with_budget(grid, limits, budget)
}

fn search_with_budget(grid: &Grid, limits: RunLimits, budget: u64) -> Result<Outcome, SearchError> {
    let goal = (grid.width - 1, grid.height - 1);
    let mut stats = SearchStats::default();
    if goal == (0, 0) {
        // Nothing is entered, nothing is paid.
        return Ok(Outcome { cost: 0, stats });
    }

    let mut best = BestCosts::new(grid.width, grid.height, limits.max);
    let mut frontier = BinaryHeap::new();
    for dir in [Direction::Right, Direction::Down] {
        frontier.push(Walker {
            cost: 0,
            x: 0,
            y: 0,
            dir,
            run: 0,
        });
        stats.pushed += 1;
    }

    while let Some(walker) = frontier.pop() {
        stats.popped += 1;
        if stats.popped > budget {
            return Err(SearchError::BudgetExhausted { budget });
        }
        let Some((x, y)) = grid.step(walker.x, walker.y, walker.dir) else {
            continue;
        };
        let cost = walker.cost + grid.cost(x, y);
        let run = walker.run + 1;

        if cost >= best.min_through(x, y, walker.dir, run) {
            stats.pruned += 1;
            continue;
        }
        if run >= limits.min {
            best.record(x, y, walker.dir, run, cost);
            // The frontier is ordered by cost, so the first legal arrival is
            // already minimal.
            if (x, y) == goal {
                break;
            }
        }

        if run < limits.max {
            frontier.push(Walker {
                cost,
                x,
                y,
                dir: walker.dir,
                run,
            });
            stats.pushed += 1;
        }
        if run >= limits.min {
            for dir in walker.dir.perpendicular() {
                frontier.push(Walker {
                    cost,
                    x,
                    y,
                    dir,
                    run: 0,
                });
                stats.pushed += 1;
            }
        }
    }

    match best.best_at(goal.0, goal.1, limits) {
        Some(cost) => Ok(Outcome { cost, stats }),
        None => Err(SearchError::NoPath {
            x: goal.0,
            y: goal.1,
            min: limits.min,
            max: limits.max,
        }),
    }
}
