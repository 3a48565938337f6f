//! Single interest calculation report
//!
//! Prints simple vs. compound results for one parameter set and optionally
//! writes the per-year comparison series as CSV.

use clap::Parser;
use growth_model::{
    build_series, compound_future_value, compound_interest_earned, simple_future_value,
    simple_interest, CompoundingFrequency, LoanParameters,
};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "interest_report",
    about = "Simple vs. compound interest growth report"
)]
struct Args {
    /// Initial principal in dollars
    #[arg(long, default_value_t = 1_000.0)]
    principal: f64,

    /// Annual interest rate in percent
    #[arg(long, default_value_t = 5.0)]
    rate: f64,

    /// Duration in years
    #[arg(long, default_value_t = 10)]
    years: u32,

    /// Compounding frequency (Annually, Semi-annually, Quarterly, Monthly, Daily)
    #[arg(long, default_value = "Annually")]
    compounding: CompoundingFrequency,

    /// Write the per-year series to this CSV path
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let params = match LoanParameters::new(args.principal, args.rate, args.years, args.compounding)
    {
        Ok(params) => params,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    let t = f64::from(params.duration_years);
    let n = params.compounding.periods_per_year();

    let simple_earned = simple_interest(params.principal, params.rate_percent, t)
        .expect("validated parameters");
    let simple_fv = simple_future_value(params.principal, params.rate_percent, t)
        .expect("validated parameters");
    let compound_fv = compound_future_value(params.principal, params.rate_percent, t, n)
        .expect("validated parameters");
    let compound_earned = compound_interest_earned(params.principal, params.rate_percent, t, n)
        .expect("validated parameters");

    println!("Simple & Compound Interest Report");
    println!(
        "Generated {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "Principal: ${:.2}  Rate: {:.2}%  Duration: {} years  Compounding: {}",
        params.principal, params.rate_percent, params.duration_years, params.compounding
    );
    println!();
    println!("Simple Interest");
    println!("  Final Amount:   ${:>14.2}", simple_fv);
    println!("  Total Interest: ${:>14.2}", simple_earned);
    println!("Compound Interest");
    println!("  Final Amount:   ${:>14.2}", compound_fv);
    println!("  Total Interest: ${:>14.2}", compound_earned);

    let series = build_series(&params).expect("validated parameters");

    println!();
    println!("Year-by-year comparison");
    println!("{:<6} {:>14} {:>14}", "Year", "Simple", "Compound");
    for point in series.iter() {
        println!(
            "{:<6} {:>14.2} {:>14.2}",
            point.year, point.simple_value, point.compound_value
        );
    }

    if let Some(path) = &args.output {
        let mut wtr = csv::Writer::from_path(path).expect("Failed to create output file");
        for point in series.iter() {
            wtr.serialize(point).expect("Failed to write series row");
        }
        wtr.flush().expect("Failed to flush output file");
        log::info!("series written to {}", path.display());
        println!();
        println!("Series written to {}", path.display());
    }
}
