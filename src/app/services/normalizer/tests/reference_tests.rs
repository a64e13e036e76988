//! Tests for reference input normalization

use super::{create_test_population, create_test_region};
use crate::app::services::normalizer::reference::{normalize_noc_regions, reshape_populations};
use crate::app::services::normalizer::stats::NormalizationStats;

#[test]
fn test_region_codes_upper_cased() {
    let mut stats = NormalizationStats::new();
    let cleansed = normalize_noc_regions(vec![create_test_region("swe", "Sweden")], &mut stats);

    assert_eq!(cleansed[0].noc.as_deref(), Some("SWE"));
    assert_eq!(cleansed[0].region.as_deref(), Some("Sweden"));
    assert_eq!(cleansed[0].notes, None);
}

#[test]
fn test_population_reshape_long_form() {
    let raw = create_test_population(
        "Sweden",
        "swe",
        &[("1960", "7480000"), ("1961", "7520000")],
    );

    let mut stats = NormalizationStats::new();
    let long_rows = reshape_populations(vec![raw], &mut stats);

    assert_eq!(long_rows.len(), 2);
    assert_eq!(long_rows[0].year, 1960);
    assert_eq!(long_rows[0].population, 7480000);
    assert_eq!(long_rows[0].country_code.as_deref(), Some("SWE"));
    assert_eq!(long_rows[1].year, 1961);
    assert_eq!(stats.population_cells_reshaped, 2);
    assert_eq!(stats.population_cells_skipped, 0);
}

#[test]
fn test_population_skips_non_numeric_cells_only() {
    let raw = create_test_population(
        "Eritrea",
        "ERI",
        &[("1960", ""), ("1961", "n/a"), ("1962", "1420000")],
    );

    let mut stats = NormalizationStats::new();
    let long_rows = reshape_populations(vec![raw], &mut stats);

    // The row contributes its one parseable cell; the rest are skipped
    assert_eq!(long_rows.len(), 1);
    assert_eq!(long_rows[0].year, 1962);
    assert_eq!(stats.population_cells_reshaped, 1);
    assert_eq!(stats.population_cells_skipped, 2);
}

#[test]
fn test_population_year_range_follows_input() {
    let raw = create_test_population("Sweden", "SWE", &[("2024", "10590000")]);

    let long_rows = reshape_populations(vec![raw], &mut NormalizationStats::new());
    assert_eq!(long_rows.len(), 1);
    assert_eq!(long_rows[0].year, 2024);
}
