//! Interest growth engine for simple vs. compound comparisons

mod engine;
mod params;
pub mod scenario;

pub use engine::{
    build_series, compound_future_value, compound_interest_earned, simple_future_value,
    simple_interest, GrowthPoint, GrowthSeries,
};
pub use params::{CompoundingFrequency, InvalidArgument, LoanParameters, ParseFrequencyError};

// ============================================================================
// Calculator Input Ranges
// ============================================================================
// Bounds of the interactive inputs the calculator was designed around.
// The engine accepts anything in its valid domain; these constants seed
// default sweep grids and CLI defaults.

/// Smallest principal offered by the calculator inputs ($100)
pub const MIN_PRINCIPAL: f64 = 100.0;

/// Largest principal offered by the calculator inputs ($100,000)
pub const MAX_PRINCIPAL: f64 = 100_000.0;

/// Largest annual rate offered by the calculator inputs (20%)
pub const MAX_RATE_PERCENT: f64 = 20.0;

/// Longest duration offered by the calculator inputs (50 years)
pub const MAX_DURATION_YEARS: u32 = 50;
