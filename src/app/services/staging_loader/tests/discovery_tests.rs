//! Tests for input file discovery

use super::{create_full_data_dir, write_fixture};
use crate::app::services::staging_loader::discover_inputs;
use tempfile::TempDir;

#[test]
fn test_discovers_all_five_inputs() {
    let dir = create_full_data_dir();
    let discovered = discover_inputs(dir.path()).unwrap();

    assert!(discovered.athlete_bio.is_some());
    assert!(discovered.athlete_geo.is_some());
    assert!(discovered.noc_region.is_some());
    assert!(discovered.population.is_some());
    assert!(discovered.result.is_some());
    assert_eq!(discovered.found_count(), 5);
}

#[test]
fn test_empty_directory_discovers_nothing() {
    let dir = TempDir::new().unwrap();
    let discovered = discover_inputs(dir.path()).unwrap();
    assert_eq!(discovered.found_count(), 0);
}

#[test]
fn test_bio_pattern_does_not_claim_enrichment_file() {
    let dir = TempDir::new().unwrap();
    write_fixture(
        dir.path(),
        "athlete_bio_locs.csv",
        "athlete_id,born_city,born_region,born_country,lat,lon\n",
    );

    let discovered = discover_inputs(dir.path()).unwrap();
    assert!(discovered.athlete_bio.is_none());
    assert!(discovered.athlete_geo.is_some());
}

#[test]
fn test_prefixed_export_names_resolve() {
    let dir = TempDir::new().unwrap();
    write_fixture(
        dir.path(),
        "2024-01_athlete_bio.csv",
        "athlete_id,name,sex,born,measurements,country,country_noc\n",
    );

    let discovered = discover_inputs(dir.path()).unwrap();
    assert!(discovered.athlete_bio.is_some());
}

#[test]
fn test_multiple_matches_pick_first_sorted() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "b_noc_regions.csv", "noc,region,notes\n");
    write_fixture(dir.path(), "a_noc_regions.csv", "noc,region,notes\n");

    let discovered = discover_inputs(dir.path()).unwrap();
    let chosen = discovered.noc_region.unwrap();
    assert!(chosen.ends_with("a_noc_regions.csv"));
}
