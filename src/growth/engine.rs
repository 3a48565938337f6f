//! Closed-form growth formulas and per-year series construction
//!
//! All arithmetic is double-precision with no internal rounding; formatting
//! for display is a presentation concern and lives in the binaries.

use serde::Serialize;

use super::params::{InvalidArgument, LoanParameters};

/// One year on the growth trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthPoint {
    /// Year since inception (1-indexed)
    pub year: u32,
    /// Future value under simple interest at end of this year
    pub simple_value: f64,
    /// Future value under compound interest at end of this year
    pub compound_value: f64,
}

/// Year-by-year trajectory, one point per year from 1 to the duration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthSeries {
    points: Vec<GrowthPoint>,
}

impl GrowthSeries {
    /// Number of points (equals the duration in years)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points ordered by ascending year
    pub fn points(&self) -> &[GrowthPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GrowthPoint> {
        self.points.iter()
    }

    /// Final point of the trajectory
    pub fn last(&self) -> Option<&GrowthPoint> {
        self.points.last()
    }
}

fn check_scalar_inputs(
    principal: f64,
    rate_percent: f64,
    years: f64,
) -> Result<(), InvalidArgument> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(InvalidArgument::new(
            "principal",
            "a positive finite amount",
            principal,
        ));
    }
    if !rate_percent.is_finite() || rate_percent < 0.0 {
        return Err(InvalidArgument::new(
            "rate_percent",
            "a non-negative finite percentage",
            rate_percent,
        ));
    }
    if !years.is_finite() || years < 0.0 {
        return Err(InvalidArgument::new(
            "years",
            "a non-negative finite number of years",
            years,
        ));
    }
    Ok(())
}

/// Interest earned under simple (linear) growth: `P * (r/100) * t`
pub fn simple_interest(
    principal: f64,
    rate_percent: f64,
    years: f64,
) -> Result<f64, InvalidArgument> {
    check_scalar_inputs(principal, rate_percent, years)?;
    Ok(principal * (rate_percent / 100.0) * years)
}

/// Future value under simple interest: `P + P * (r/100) * t`
pub fn simple_future_value(
    principal: f64,
    rate_percent: f64,
    years: f64,
) -> Result<f64, InvalidArgument> {
    Ok(principal + simple_interest(principal, rate_percent, years)?)
}

/// Future value under discrete compounding: `P * (1 + (r/100)/n)^(n*t)`
///
/// The base `1 + (r/100)/n` is strictly positive for any non-negative rate,
/// so the real-valued power is always defined.
pub fn compound_future_value(
    principal: f64,
    rate_percent: f64,
    years: f64,
    periods_per_year: u32,
) -> Result<f64, InvalidArgument> {
    check_scalar_inputs(principal, rate_percent, years)?;
    if periods_per_year == 0 {
        return Err(InvalidArgument::new(
            "periods_per_year",
            "a positive integer",
            0.0,
        ));
    }
    let n = f64::from(periods_per_year);
    Ok(principal * (1.0 + (rate_percent / 100.0) / n).powf(n * years))
}

/// Interest earned under discrete compounding: compound FV minus principal
pub fn compound_interest_earned(
    principal: f64,
    rate_percent: f64,
    years: f64,
    periods_per_year: u32,
) -> Result<f64, InvalidArgument> {
    Ok(compound_future_value(principal, rate_percent, years, periods_per_year)? - principal)
}

/// Build the full per-year trajectory for a parameter set
///
/// Validates the parameters up front and fails wholesale; no partial
/// series is ever produced. Years run 1..=duration, ascending, with no
/// gaps or duplicates.
pub fn build_series(params: &LoanParameters) -> Result<GrowthSeries, InvalidArgument> {
    params.validate()?;

    let n = params.compounding.periods_per_year();
    let mut points = Vec::with_capacity(params.duration_years as usize);
    for year in 1..=params.duration_years {
        let t = f64::from(year);
        points.push(GrowthPoint {
            year,
            simple_value: simple_future_value(params.principal, params.rate_percent, t)?,
            compound_value: compound_future_value(params.principal, params.rate_percent, t, n)?,
        });
    }

    log::debug!(
        "built growth series: P={}, r={}%, {} years, {}",
        params.principal,
        params.rate_percent,
        params.duration_years,
        params.compounding
    );
    Ok(GrowthSeries { points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::CompoundingFrequency;
    use approx::assert_relative_eq;

    #[test]
    fn test_simple_interest_scenario() {
        // P=1000, r=5%, t=10 years: interest 500, final 1500
        let interest = simple_interest(1000.0, 5.0, 10.0).unwrap();
        assert_relative_eq!(interest, 500.0, max_relative = 1e-12);

        let fv = simple_future_value(1000.0, 5.0, 10.0).unwrap();
        assert_relative_eq!(fv, 1500.0, max_relative = 1e-12);
    }

    #[test]
    fn test_compound_annual_scenario() {
        // P=1000, r=5%, t=10, annual: 1000 * 1.05^10 = 1628.894627...
        let fv = compound_future_value(1000.0, 5.0, 10.0, 1).unwrap();
        assert_relative_eq!(fv, 1628.894626777442, max_relative = 1e-12);

        let earned = compound_interest_earned(1000.0, 5.0, 10.0, 1).unwrap();
        assert_relative_eq!(earned, 628.894626777442, max_relative = 1e-12);
    }

    #[test]
    fn test_compound_monthly_scenario() {
        // P=1000, r=5%, t=1, monthly: 1000 * (1 + 0.05/12)^12 = 1051.16...
        let fv = compound_future_value(1000.0, 5.0, 1.0, 12).unwrap();
        assert!((fv - 1051.16).abs() < 0.01);
    }

    #[test]
    fn test_zero_rate_no_growth() {
        // r=0: simple equals compound equals principal at every horizon
        let simple = simple_future_value(100.0, 0.0, 50.0).unwrap();
        let compound = compound_future_value(100.0, 0.0, 50.0, 365).unwrap();
        assert_relative_eq!(simple, 100.0);
        assert_relative_eq!(compound, 100.0);
    }

    #[test]
    fn test_boundary_at_year_zero() {
        // At t=0 both future values equal the principal
        assert_relative_eq!(simple_future_value(1234.5, 7.5, 0.0).unwrap(), 1234.5);
        assert_relative_eq!(
            compound_future_value(1234.5, 7.5, 0.0, 12).unwrap(),
            1234.5
        );
    }

    #[test]
    fn test_compound_dominates_simple() {
        // Compounding dominates or ties simple interest for any r >= 0
        for &rate in &[0.0, 0.1, 5.0, 20.0] {
            for &n in &[1u32, 2, 4, 12, 365] {
                for year in 0..=50 {
                    let t = f64::from(year);
                    let simple = simple_future_value(1000.0, rate, t).unwrap();
                    let compound = compound_future_value(1000.0, rate, t, n).unwrap();
                    assert!(
                        compound >= simple - 1e-9,
                        "compound {} < simple {} at r={}, n={}, t={}",
                        compound,
                        simple,
                        rate,
                        n,
                        t
                    );
                }
            }
        }
    }

    #[test]
    fn test_monotone_in_time() {
        let mut prev_simple = 0.0;
        let mut prev_compound = 0.0;
        for year in 0..=50 {
            let t = f64::from(year);
            let simple = simple_future_value(1000.0, 5.0, t).unwrap();
            let compound = compound_future_value(1000.0, 5.0, t, 4).unwrap();
            assert!(simple >= prev_simple);
            assert!(compound >= prev_compound);
            prev_simple = simple;
            prev_compound = compound;
        }
    }

    #[test]
    fn test_invalid_scalar_inputs() {
        assert!(simple_interest(0.0, 5.0, 10.0).is_err());
        assert!(simple_interest(-1.0, 5.0, 10.0).is_err());
        assert!(simple_interest(1000.0, -1.0, 10.0).is_err());
        assert!(simple_interest(1000.0, 5.0, -1.0).is_err());

        let err = compound_future_value(1000.0, 5.0, 10.0, 0).unwrap_err();
        assert_eq!(err.param, "periods_per_year");
    }

    #[test]
    fn test_build_series_shape() {
        let params = LoanParameters::new(1000.0, 5.0, 10, CompoundingFrequency::Annual).unwrap();
        let series = build_series(&params).unwrap();

        // Exactly duration_years points, years 1..=10 ascending
        assert_eq!(series.len(), 10);
        for (i, point) in series.iter().enumerate() {
            assert_eq!(point.year, i as u32 + 1);
        }

        // Endpoints match the scalar formulas
        let last = series.last().unwrap();
        assert_relative_eq!(last.simple_value, 1500.0, max_relative = 1e-12);
        assert_relative_eq!(last.compound_value, 1628.894626777442, max_relative = 1e-12);
    }

    #[test]
    fn test_build_series_rejects_invalid_params() {
        // Wholesale failure: no series is produced for invalid inputs
        let zero_duration = LoanParameters {
            principal: 1000.0,
            rate_percent: 5.0,
            duration_years: 0,
            compounding: CompoundingFrequency::Annual,
        };
        assert!(build_series(&zero_duration).is_err());

        let zero_principal = LoanParameters {
            principal: 0.0,
            rate_percent: 5.0,
            duration_years: 10,
            compounding: CompoundingFrequency::Annual,
        };
        assert!(build_series(&zero_principal).is_err());
    }
}
