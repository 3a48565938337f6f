//! Record types for the gapminder-style demographic dataset

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Continents present in the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continent {
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
}

impl Continent {
    /// All continents in dataset order
    pub const ALL: [Continent; 5] = [
        Continent::Africa,
        Continent::Americas,
        Continent::Asia,
        Continent::Europe,
        Continent::Oceania,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Americas => "Americas",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Unrecognized continent name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized continent `{0}`")]
pub struct ParseContinentError(pub String);

impl FromStr for Continent {
    type Err = ParseContinentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "africa" => Ok(Continent::Africa),
            "americas" => Ok(Continent::Americas),
            "asia" => Ok(Continent::Asia),
            "europe" => Ok(Continent::Europe),
            "oceania" => Ok(Continent::Oceania),
            _ => Err(ParseContinentError(s.to_string())),
        }
    }
}

/// One country-year observation
///
/// Field renames match the dataset's CSV headers
/// (`country,continent,year,lifeExp,pop,gdpPercap`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryYearRecord {
    pub country: String,
    pub continent: Continent,
    pub year: u32,

    /// Life expectancy at birth, in years
    #[serde(rename = "lifeExp")]
    pub life_exp: f64,

    /// Total population
    pub pop: f64,

    /// GDP per capita, inflation-adjusted dollars
    #[serde(rename = "gdpPercap")]
    pub gdp_per_cap: f64,
}
