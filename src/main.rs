use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use tabled::Table;

use crucible_solver::{Grid, Variant, VariantReport};

#[derive(Parser)]
#[command(about = "Minimum heat loss across a digit grid, standard and ultra variants")]
struct Args {
    /// Puzzle input: one row of digit costs per line.
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Print frontier statistics after the answers.
    #[arg(long)]
    stats: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let grid = Grid::parse(&text)?;

    let mut reports = Vec::new();
    for variant in Variant::ALL {
        let outcome = crucible_solver::solve(&grid, variant)?;
        println!("Day 17 {}: {}", variant.label(), outcome.cost);
        reports.push(VariantReport::new(variant, &outcome));
    }
    if args.stats {
        println!("{}", Table::new(reports));
    }
    Ok(())
}
