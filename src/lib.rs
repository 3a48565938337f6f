//! Growth Model - simple vs. compound interest engine with a dashboard core
//!
//! This library provides:
//! - Closed-form simple and compound interest calculations
//! - Per-year growth series for charting both trajectories side by side
//! - Parallel parameter sweeps across grids of calculator inputs
//! - Demographic dataset filtering and headline summary metrics

pub mod demographics;
pub mod growth;

// Re-export commonly used types
pub use demographics::{Continent, CountryYearRecord, DashboardFilter, SummaryMetrics};
pub use growth::{
    build_series, compound_future_value, compound_interest_earned, simple_future_value,
    simple_interest, CompoundingFrequency, GrowthPoint, GrowthSeries, InvalidArgument,
    LoanParameters,
};
