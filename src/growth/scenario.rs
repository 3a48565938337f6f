//! Parameter sweeps over grids of calculator inputs
//!
//! The interactive calculator recomputes on every input change. This module
//! is the batch analogue: expand a grid of inputs into its cross product,
//! evaluate every cell in parallel, and summarize the endpoints.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{
    compound_future_value, simple_future_value, CompoundingFrequency, InvalidArgument,
    LoanParameters, MAX_DURATION_YEARS, MAX_PRINCIPAL, MAX_RATE_PERCENT, MIN_PRINCIPAL,
};

/// Grid of inputs to sweep
///
/// Every combination of the four axes is evaluated. Defaults span the
/// calculator's input ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepGrid {
    /// Principal amounts (dollars)
    #[serde(default = "default_principals")]
    pub principals: Vec<f64>,

    /// Annual rates (percent)
    #[serde(default = "default_rates")]
    pub rates: Vec<f64>,

    /// Durations (years)
    #[serde(default = "default_durations")]
    pub durations: Vec<u32>,

    /// Compounding frequencies
    #[serde(default = "default_compoundings")]
    pub compoundings: Vec<CompoundingFrequency>,
}

fn default_principals() -> Vec<f64> {
    vec![MIN_PRINCIPAL, 1_000.0, 10_000.0, MAX_PRINCIPAL]
}

fn default_rates() -> Vec<f64> {
    vec![0.1, 1.0, 2.5, 5.0, 10.0, MAX_RATE_PERCENT]
}

fn default_durations() -> Vec<u32> {
    vec![1, 5, 10, 25, MAX_DURATION_YEARS]
}

fn default_compoundings() -> Vec<CompoundingFrequency> {
    CompoundingFrequency::ALL.to_vec()
}

impl Default for SweepGrid {
    fn default() -> Self {
        Self {
            principals: default_principals(),
            rates: default_rates(),
            durations: default_durations(),
            compoundings: default_compoundings(),
        }
    }
}

impl SweepGrid {
    /// Total number of grid cells
    pub fn cell_count(&self) -> usize {
        self.principals.len() * self.rates.len() * self.durations.len() * self.compoundings.len()
    }

    /// Expand into the full cross product of validated parameter sets
    ///
    /// Axis order is principal, rate, duration, compounding; the output
    /// order is deterministic.
    pub fn expand(&self) -> Result<Vec<LoanParameters>, InvalidArgument> {
        let mut cells = Vec::with_capacity(self.cell_count());
        for &principal in &self.principals {
            for &rate_percent in &self.rates {
                for &duration_years in &self.durations {
                    for &compounding in &self.compoundings {
                        cells.push(LoanParameters::new(
                            principal,
                            rate_percent,
                            duration_years,
                            compounding,
                        )?);
                    }
                }
            }
        }
        log::debug!("expanded sweep grid into {} cells", cells.len());
        Ok(cells)
    }
}

/// Endpoint summary for one grid cell
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioSummary {
    pub principal: f64,
    pub rate_percent: f64,
    pub duration_years: u32,
    pub compounding: CompoundingFrequency,
    pub simple_future_value: f64,
    pub compound_future_value: f64,
    pub compound_interest_earned: f64,
}

impl ScenarioSummary {
    fn evaluate(params: &LoanParameters) -> Result<Self, InvalidArgument> {
        let t = f64::from(params.duration_years);
        let n = params.compounding.periods_per_year();
        let simple = simple_future_value(params.principal, params.rate_percent, t)?;
        let compound = compound_future_value(params.principal, params.rate_percent, t, n)?;
        Ok(Self {
            principal: params.principal,
            rate_percent: params.rate_percent,
            duration_years: params.duration_years,
            compounding: params.compounding,
            simple_future_value: simple,
            compound_future_value: compound,
            compound_interest_earned: compound - params.principal,
        })
    }
}

/// Evaluate every grid cell in parallel, preserving grid order
pub fn run_sweep(grid: &SweepGrid) -> Result<Vec<ScenarioSummary>, InvalidArgument> {
    let cells = grid.expand()?;
    cells.par_iter().map(ScenarioSummary::evaluate).collect()
}
