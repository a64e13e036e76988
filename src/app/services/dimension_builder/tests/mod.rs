//! Tests for the dimension rebuild service


use crate::app::models::{CleanAthlete, CleanAthleteGeo, CleanNocRegion, CleanResult, CleansedRecords};

/// Create a cleansed athlete with the given id and NOC
pub fn create_clean_athlete(athlete_id: i64, noc: &str) -> CleanAthlete {
    CleanAthlete {
        athlete_id: Some(athlete_id),
        name: Some(format!("Athlete {}", athlete_id)),
        sex: Some("F".to_string()),
        birth_date: None,
        birth_city: None,
        birth_region: None,
        birth_country_noc: None,
        height_cm: None,
        weight_kg: None,
        noc: Some(noc.to_string()),
    }
}

/// Create a cleansed result referencing the given keys
pub fn create_clean_result(
    result_id: i64,
    athlete_id: i64,
    edition_id: i64,
    sport: &str,
    event: &str,
    noc: &str,
) -> CleanResult {
    CleanResult {
        result_id: Some(result_id),
        athlete_id: Some(athlete_id),
        edition_id: Some(edition_id),
        edition: Some(format!("{} Summer Olympics", 1900 + edition_id)),
        year: Some(1900 + edition_id as i32),
        season: Some("Summer Olympics".to_string()),
        sport: Some(sport.to_string()),
        event: Some(event.to_string()),
        noc: Some(noc.to_string()),
        rank: Some(1),
        tie: Some(false),
        medal: None,
        team_event: Some(false),
    }
}

/// Create a cleansed geocoordinate enrichment record
pub fn create_clean_geo(athlete_id: i64, latitude: f64, longitude: f64) -> CleanAthleteGeo {
    CleanAthleteGeo {
        athlete_id: Some(athlete_id),
        latitude: Some(latitude),
        longitude: Some(longitude),
    }
}

/// Create a cleansed NOC reference record
pub fn create_clean_region(noc: &str, region: &str) -> CleanNocRegion {
    CleanNocRegion {
        noc: Some(noc.to_string()),
        region: Some(region.to_string()),
        notes: None,
    }
}

/// Create a small internally consistent cleansed record set
pub fn create_cleansed_records() -> CleansedRecords {
    CleansedRecords {
        athletes: vec![create_clean_athlete(1, "SWE"), create_clean_athlete(2, "NOR")],
        athlete_geos: vec![create_clean_geo(1, 59.33, 18.07)],
        noc_regions: vec![
            create_clean_region("SWE", "Sweden"),
            create_clean_region("NOR", "Norway"),
        ],
        populations: Vec::new(),
        results: vec![
            create_clean_result(10001, 1, 6, "Athletics", "1500 metres", "SWE"),
            create_clean_result(10002, 2, 6, "Athletics", "Marathon", "NOR"),
        ],
    }
}
