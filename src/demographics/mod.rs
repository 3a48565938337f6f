//! Demographic dataset filtering and summary metrics

mod data;
mod filter;
pub mod loader;

pub use data::{Continent, CountryYearRecord, ParseContinentError};
pub use filter::{distinct_countries, year_range, DashboardFilter, SummaryMetrics};
pub use loader::{load_records, load_records_from_reader};
