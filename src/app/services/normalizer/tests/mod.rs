//! Tests for the normalization stage

pub mod reference_tests;

use crate::app::models::{RawAthleteBio, RawNocRegion, RawPopulationRow, RawResult};

/// Create a staged biography row with a fully parseable born fragment
pub fn create_test_bio(athlete_id: &str, name: &str) -> RawAthleteBio {
    RawAthleteBio {
        athlete_id: athlete_id.to_string(),
        name: name.to_string(),
        sex: "M".to_string(),
        born: "1 April 1871 in Stockholm, Sverige (SWE)".to_string(),
        measurements: "180 cm / 75 kg".to_string(),
        country: "Sweden".to_string(),
        country_noc: "swe".to_string(),
    }
}

/// Create a staged result row with a fully parseable edition and pos
pub fn create_test_result(result_id: &str, athlete_id: &str) -> RawResult {
    RawResult {
        edition: "1912 Summer Olympics".to_string(),
        edition_id: "6".to_string(),
        country_noc: "swe".to_string(),
        sport: "Athletics".to_string(),
        event: "1500 metres".to_string(),
        result_id: result_id.to_string(),
        athlete: "Test Athlete".to_string(),
        athlete_id: athlete_id.to_string(),
        pos: "3".to_string(),
        medal: "Bronze".to_string(),
        is_team_sport: "False".to_string(),
    }
}

/// Create a staged NOC reference row
pub fn create_test_region(noc: &str, region: &str) -> RawNocRegion {
    RawNocRegion {
        noc: noc.to_string(),
        region: region.to_string(),
        notes: String::new(),
    }
}

/// Create a staged wide population row from (year, value) pairs
pub fn create_test_population(
    country: &str,
    code: &str,
    year_values: &[(&str, &str)],
) -> RawPopulationRow {
    RawPopulationRow {
        country: country.to_string(),
        country_code: code.to_string(),
        year_values: year_values
            .iter()
            .map(|(year, value)| (year.to_string(), value.to_string()))
            .collect(),
    }
}
