//! Application constants for the Olympedia processor
//!
//! This module contains input file patterns, placeholder tokens, warehouse
//! table names, and default values used throughout the pipeline.

// =============================================================================
// Staged Input Patterns
// =============================================================================

/// File pattern for the athlete biography input
pub const ATHLETE_BIO_PATTERN: &str = "*athlete_bio*.csv";

/// File pattern for the biography geocoordinate enrichment input
pub const ATHLETE_GEO_PATTERN: &str = "*athlete_bio_locs*.csv";

/// File pattern for the NOC-to-region reference input
pub const NOC_REGION_PATTERN: &str = "*noc_region*.csv";

/// File pattern for the country population-by-year reference input
pub const POPULATION_PATTERN: &str = "*populations*.csv";

/// File pattern for the competition result input
pub const RESULT_PATTERN: &str = "*athlete_event_results*.csv";

/// Staged input entity names, used in logs and error messages
pub mod entities {
    pub const ATHLETE_BIO: &str = "athlete_bio";
    pub const ATHLETE_GEO: &str = "athlete_bio_locs";
    pub const NOC_REGION: &str = "noc_regions";
    pub const POPULATION: &str = "populations";
    pub const RESULT: &str = "athlete_event_results";
}

// =============================================================================
// Normalization Constants
// =============================================================================

/// Placeholder token used in source location fragments for "unknown"
pub const LOCATION_PLACEHOLDER: &str = "?";

/// Separator artifacts that appear inside source name fields
pub const NAME_SEPARATOR_ARTIFACTS: &[char] = &['\u{2022}', '\u{00b7}'];

/// Height unit suffix in the combined measurements field
pub const HEIGHT_UNIT: &str = "cm";

/// Weight unit suffix in the combined measurements field
pub const WEIGHT_UNIT: &str = "kg";

// =============================================================================
// Warehouse Table Names
// =============================================================================

/// Output table names for dimensions, facts, and reference entities
pub mod tables {
    pub const DIM_ATHLETES: &str = "dim_athletes";
    pub const DIM_GAMES: &str = "dim_games";
    pub const DIM_EVENTS: &str = "dim_events";
    pub const DIM_COUNTRIES: &str = "dim_countries";
    pub const FACT_RESULTS: &str = "fact_results";
    pub const REF_POPULATIONS: &str = "ref_populations";
}

/// Output table names for the read-only aggregate views
pub mod views {
    pub const GAMES_PARTICIPATION: &str = "view_games_participation";
    pub const NATION_MEDALS: &str = "view_nation_medals";
    pub const TOP_ATHLETES: &str = "view_top_athletes";
    pub const SPORT_PARTICIPATION: &str = "view_sport_participation";
    pub const GLOBAL_SUMMARY: &str = "view_global_summary";
}

// =============================================================================
// Column Name Constants
// =============================================================================

/// Standard column names in the exported warehouse tables
pub mod columns {
    // Surrogate key columns
    pub const ATHLETE_SK: &str = "athlete_sk";
    pub const GAMES_SK: &str = "games_sk";
    pub const EVENT_SK: &str = "event_sk";
    pub const COUNTRY_SK: &str = "country_sk";

    // Natural key columns
    pub const ATHLETE_ID: &str = "athlete_id";
    pub const EDITION_ID: &str = "edition_id";
    pub const NOC: &str = "noc";
    pub const SPORT: &str = "sport";
    pub const EVENT: &str = "event";

    // Descriptive attribute columns
    pub const NAME: &str = "name";
    pub const SEX: &str = "sex";
    pub const BIRTH_DATE: &str = "birth_date";
    pub const BIRTH_CITY: &str = "birth_city";
    pub const BIRTH_REGION: &str = "birth_region";
    pub const BIRTH_COUNTRY_NOC: &str = "birth_country_noc";
    pub const HEIGHT_CM: &str = "height_cm";
    pub const WEIGHT_KG: &str = "weight_kg";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const EDITION: &str = "edition";
    pub const YEAR: &str = "year";
    pub const SEASON: &str = "season";
    pub const REGION: &str = "region";
    pub const NOTES: &str = "notes";

    // Fact outcome columns
    pub const RESULT_ID: &str = "result_id";
    pub const RANK: &str = "rank";
    pub const TIE: &str = "tie";
    pub const MEDAL: &str = "medal";
    pub const TEAM_EVENT: &str = "team_event";

    // Population reference columns
    pub const COUNTRY: &str = "country";
    pub const COUNTRY_CODE: &str = "country_code";
    pub const POPULATION: &str = "population";
}

// =============================================================================
// Default Configuration Values
// =============================================================================

/// Default data directory name (under the platform data dir)
pub const DEFAULT_DATA_DIR_NAME: &str = "olympedia";

/// Default warehouse output directory
pub const DEFAULT_OUTPUT_DIR: &str = "warehouse";

/// Minimum participants for a nation to appear in the medal-ratio view
pub const DEFAULT_MIN_NATION_PARTICIPANTS: usize = 30;

/// Row limit for the most-decorated-athletes view
pub const DEFAULT_TOP_ATHLETES_LIMIT: usize = 50;

/// Progress reporting update interval (number of processed records)
pub const PROGRESS_UPDATE_INTERVAL: usize = 1000;

// =============================================================================
// Helper Functions
// =============================================================================

/// Get the output filename for a warehouse table in the given format
pub fn table_filename(table: &str, extension: &str) -> String {
    format!("{}.{}", table, extension)
}

/// Check if a staged header column is a population year column (all digits)
pub fn is_year_column(column_name: &str) -> bool {
    column_name.len() == 4 && column_name.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_filenames() {
        assert_eq!(
            table_filename(tables::DIM_ATHLETES, "csv"),
            "dim_athletes.csv"
        );
        assert_eq!(
            table_filename(views::NATION_MEDALS, "parquet"),
            "view_nation_medals.parquet"
        );
    }

    #[test]
    fn test_year_column_detection() {
        assert!(is_year_column("1960"));
        assert!(is_year_column("2023"));
        assert!(!is_year_column("country"));
        assert!(!is_year_column("196"));
        assert!(!is_year_column("19600"));
        assert!(!is_year_column("19a0"));
    }
}
