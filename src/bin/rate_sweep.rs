//! Parallel sweep over a grid of calculator inputs
//!
//! Reads an optional JSON grid config, evaluates every combination, and
//! writes endpoint summaries as CSV for downstream comparison.

use clap::Parser;
use growth_model::growth::scenario::{run_sweep, SweepGrid};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "rate_sweep", about = "Sweep interest scenarios over an input grid")]
struct Args {
    /// JSON file describing the sweep grid; defaults span the calculator ranges
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output CSV path
    #[arg(long, default_value = "sweep_output.csv")]
    output: PathBuf,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let grid = match &args.config {
        Some(path) => {
            let file = File::open(path).expect("Failed to open sweep config");
            serde_json::from_reader(file).expect("Failed to parse sweep config")
        }
        None => SweepGrid::default(),
    };

    println!("Sweeping {} scenarios...", grid.cell_count());
    let start = Instant::now();

    let summaries = run_sweep(&grid).expect("Sweep failed");
    println!(
        "Evaluated {} scenarios in {:?}",
        summaries.len(),
        start.elapsed()
    );

    let mut wtr = csv::Writer::from_path(&args.output).expect("Failed to create output file");
    for row in &summaries {
        wtr.serialize(row).expect("Failed to write summary row");
    }
    wtr.flush().expect("Failed to flush output file");

    println!("Output written to {}", args.output.display());
}
