//! Calculation inputs and input validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Invalid input to a growth calculation
///
/// Raised synchronously at the offending call; a failed call never
/// produces a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid argument `{param}`: must be {constraint}, got {value}")]
pub struct InvalidArgument {
    /// Name of the offending parameter
    pub param: &'static str,
    /// Constraint that was violated
    pub constraint: &'static str,
    /// Value as supplied by the caller
    pub value: f64,
}

impl InvalidArgument {
    pub(crate) fn new(param: &'static str, constraint: &'static str, value: f64) -> Self {
        Self {
            param,
            constraint,
            value,
        }
    }
}

/// How many times per year interest is applied
///
/// Modeled as a closed enumeration so that an invalid frequency is a
/// construction-time error rather than a runtime fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompoundingFrequency {
    Annual,
    SemiAnnual,
    Quarterly,
    Monthly,
    Daily,
}

impl CompoundingFrequency {
    /// All frequencies, in ascending period order
    pub const ALL: [CompoundingFrequency; 5] = [
        CompoundingFrequency::Annual,
        CompoundingFrequency::SemiAnnual,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Daily,
    ];

    /// Number of compounding periods per year
    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundingFrequency::Annual => 1,
            CompoundingFrequency::SemiAnnual => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Daily => 365,
        }
    }

    /// Human-readable label matching the calculator's selector
    pub fn label(self) -> &'static str {
        match self {
            CompoundingFrequency::Annual => "Annually",
            CompoundingFrequency::SemiAnnual => "Semi-annually",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Daily => "Daily",
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Unrecognized compounding frequency label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized compounding frequency `{0}` (expected Annually, Semi-annually, Quarterly, Monthly, or Daily)")]
pub struct ParseFrequencyError(pub String);

impl FromStr for CompoundingFrequency {
    type Err = ParseFrequencyError;

    /// Parse a selector label. Unknown labels are rejected outright;
    /// there is no lenient fallback to Daily.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "annually" | "annual" => Ok(CompoundingFrequency::Annual),
            "semi-annually" | "semi-annual" | "semiannually" | "semiannual" => {
                Ok(CompoundingFrequency::SemiAnnual)
            }
            "quarterly" => Ok(CompoundingFrequency::Quarterly),
            "monthly" => Ok(CompoundingFrequency::Monthly),
            "daily" => Ok(CompoundingFrequency::Daily),
            _ => Err(ParseFrequencyError(s.to_string())),
        }
    }
}

/// Immutable inputs for one growth calculation
///
/// Constructed fresh per calculation request; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Initial amount invested or borrowed (dollars)
    pub principal: f64,

    /// Annual nominal interest rate, in percent
    pub rate_percent: f64,

    /// Projection horizon in whole years
    pub duration_years: u32,

    /// Compounding frequency for the compound trajectory
    pub compounding: CompoundingFrequency,
}

impl LoanParameters {
    /// Create a validated parameter set
    pub fn new(
        principal: f64,
        rate_percent: f64,
        duration_years: u32,
        compounding: CompoundingFrequency,
    ) -> Result<Self, InvalidArgument> {
        let params = Self {
            principal,
            rate_percent,
            duration_years,
            compounding,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check all input constraints, reporting the first violation
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(InvalidArgument::new(
                "principal",
                "a positive finite amount",
                self.principal,
            ));
        }
        if !self.rate_percent.is_finite() || self.rate_percent < 0.0 {
            return Err(InvalidArgument::new(
                "rate_percent",
                "a non-negative finite percentage",
                self.rate_percent,
            ));
        }
        if self.duration_years == 0 {
            return Err(InvalidArgument::new(
                "duration_years",
                "at least one year",
                f64::from(self.duration_years),
            ));
        }
        Ok(())
    }
}
