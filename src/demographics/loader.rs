//! Dataset loading from CSV

use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::data::CountryYearRecord;

/// Load records from a CSV file with gapminder-style headers
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<CountryYearRecord>, Box<dyn Error>> {
    let file = File::open(path)?;
    load_records_from_reader(file)
}

/// Load records from any reader producing CSV with the expected headers
pub fn load_records_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<CountryYearRecord>, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for result in rdr.deserialize() {
        let record: CountryYearRecord = result?;
        records.push(record);
    }

    log::debug!("loaded {} dataset records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demographics::Continent;

    const SAMPLE_CSV: &str = "\
country,continent,year,lifeExp,pop,gdpPercap
Afghanistan,Asia,2007,43.828,31889923,974.5803384
Germany,Europe,2007,79.406,82400996,32170.37442
United States,Americas,2007,78.242,301139947,42951.65309
";

    #[test]
    fn test_load_from_reader() {
        let records = load_records_from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);

        let germany = &records[1];
        assert_eq!(germany.country, "Germany");
        assert_eq!(germany.continent, Continent::Europe);
        assert_eq!(germany.year, 2007);
        assert!((germany.life_exp - 79.406).abs() < 1e-9);
        assert!((germany.pop - 82_400_996.0).abs() < 0.5);
    }

    #[test]
    fn test_load_rejects_unknown_continent() {
        let bad = "\
country,continent,year,lifeExp,pop,gdpPercap
Nowhere,Atlantis,2007,50.0,1000,100.0
";
        assert!(load_records_from_reader(bad.as_bytes()).is_err());
    }

    #[test]
    fn test_load_empty_dataset() {
        let empty = "country,continent,year,lifeExp,pop,gdpPercap\n";
        let records = load_records_from_reader(empty.as_bytes()).unwrap();
        assert!(records.is_empty());
    }
}
