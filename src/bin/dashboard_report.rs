//! Filtered demographic report
//!
//! Loads a gapminder-style CSV, applies the year/country/continent filter,
//! and prints headline metrics plus the filtered table.

use anyhow::{anyhow, Context};
use clap::Parser;
use growth_model::demographics::{
    load_records, year_range, Continent, DashboardFilter, SummaryMetrics,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dashboard_report", about = "Demographic dashboard metrics")]
struct Args {
    /// Path to the dataset CSV
    #[arg(long)]
    data: PathBuf,

    /// Observation year to report on; defaults to the latest in the dataset
    #[arg(long)]
    year: Option<u32>,

    /// Countries to include (repeatable); all countries when omitted
    #[arg(long = "country")]
    countries: Vec<String>,

    /// Restrict to one continent
    #[arg(long)]
    continent: Option<Continent>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let records = load_records(&args.data)
        .map_err(|e| anyhow!("failed to load {}: {}", args.data.display(), e))?;
    log::info!("loaded {} records from {}", records.len(), args.data.display());

    let year = match args.year {
        Some(year) => year,
        None => {
            year_range(&records)
                .map(|(_, max)| max)
                .context("dataset contains no records")?
        }
    };

    let filter = DashboardFilter {
        year,
        countries: args.countries,
        continent: args.continent,
    };
    let selection = filter.apply(&records);
    let metrics = SummaryMetrics::from_records(&selection);

    println!("Global Data Report for {}", year);
    if let Some(continent) = filter.continent {
        println!("Continent: {}", continent);
    }
    println!();
    println!("Total Population:        {:>16.0}", metrics.total_population);
    println!(
        "Average Life Expectancy: {:>16.2}",
        metrics.avg_life_expectancy
    );
    println!("Average GDP per Capita:  ${:>15.0}", metrics.avg_gdp_per_cap);
    println!();

    println!(
        "{:<28} {:<10} {:>8} {:>14} {:>12}",
        "Country", "Continent", "LifeExp", "Population", "GdpPercap"
    );
    for r in &selection {
        println!(
            "{:<28} {:<10} {:>8.1} {:>14.0} {:>12.0}",
            r.country, r.continent, r.life_exp, r.pop, r.gdp_per_cap
        );
    }
    println!();
    println!("{} of {} records selected", selection.len(), records.len());

    Ok(())
}
