//! Dashboard filter predicates and summary metrics

use super::data::{Continent, CountryYearRecord};

/// User-selected dashboard filter
///
/// Mirrors the dashboard controls: a year slider, a country multi-select,
/// and an optional continent restriction.
#[derive(Debug, Clone)]
pub struct DashboardFilter {
    /// Keep only observations from this year
    pub year: u32,

    /// Keep only these countries; an empty list keeps all countries
    pub countries: Vec<String>,

    /// Keep only this continent; `None` keeps all continents
    pub continent: Option<Continent>,
}

impl DashboardFilter {
    /// Filter on year only, all countries and continents
    pub fn for_year(year: u32) -> Self {
        Self {
            year,
            countries: Vec::new(),
            continent: None,
        }
    }

    /// Apply year, continent, and country membership predicates in order
    pub fn apply(&self, records: &[CountryYearRecord]) -> Vec<CountryYearRecord> {
        records
            .iter()
            .filter(|r| r.year == self.year)
            .filter(|r| self.continent.map_or(true, |c| r.continent == c))
            .filter(|r| self.countries.is_empty() || self.countries.iter().any(|c| c == &r.country))
            .cloned()
            .collect()
    }
}

/// Headline metrics over a filtered selection
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryMetrics {
    /// Sum of population across the selection
    pub total_population: f64,
    /// Mean life expectancy; 0 when the selection is empty
    pub avg_life_expectancy: f64,
    /// Mean GDP per capita; 0 when the selection is empty
    pub avg_gdp_per_cap: f64,
}

impl SummaryMetrics {
    pub fn from_records(records: &[CountryYearRecord]) -> Self {
        if records.is_empty() {
            return Self {
                total_population: 0.0,
                avg_life_expectancy: 0.0,
                avg_gdp_per_cap: 0.0,
            };
        }

        let n = records.len() as f64;
        let total_population: f64 = records.iter().map(|r| r.pop).sum();
        let avg_life_expectancy = records.iter().map(|r| r.life_exp).sum::<f64>() / n;
        let avg_gdp_per_cap = records.iter().map(|r| r.gdp_per_cap).sum::<f64>() / n;

        Self {
            total_population,
            avg_life_expectancy,
            avg_gdp_per_cap,
        }
    }
}

/// Min and max observation years in the dataset
pub fn year_range(records: &[CountryYearRecord]) -> Option<(u32, u32)> {
    let mut years = records.iter().map(|r| r.year);
    let first = years.next()?;
    let (min, max) = years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
    Some((min, max))
}

/// Country names present in the dataset, sorted and deduplicated
pub fn distinct_countries(records: &[CountryYearRecord]) -> Vec<String> {
    let mut names: Vec<String> = records.iter().map(|r| r.country.clone()).collect();
    names.sort();
    names.dedup();
    names
}
