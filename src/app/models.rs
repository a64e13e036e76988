//! Data models for the Olympedia pipeline
//!
//! This module contains the record structures for all three pipeline stages:
//! raw staged records (one per source row, untyped text), cleansed records
//! (typed attributes with explicit absent markers), and the star-schema
//! entities (dimensions with surrogate identities plus the central fact).

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Raw Staged Records (Bronze)
// =============================================================================

/// Raw athlete biography row, columns as close to source format as possible.
///
/// All fields are untyped text with no invariants; empty strings are
/// preserved exactly as staged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAthleteBio {
    pub athlete_id: String,
    pub name: String,
    pub sex: String,
    /// Free-form birth fragment, e.g. "1 April 1871 in Stockholm, Sverige (SWE)"
    pub born: String,
    /// Combined measurements fragment, e.g. "180 cm / 75 kg"
    pub measurements: String,
    pub country: String,
    pub country_noc: String,
}

/// Raw geocoordinate enrichment row for an athlete's birthplace
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAthleteGeo {
    pub athlete_id: String,
    pub born_city: String,
    pub born_region: String,
    pub born_country: String,
    pub latitude: String,
    pub longitude: String,
}

/// Raw NOC-to-region reference row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawNocRegion {
    pub noc: String,
    pub region: String,
    pub notes: String,
}

/// Raw population row in the source's wide one-column-per-year shape.
///
/// The year set is carried as (label, value) pairs taken from the input's
/// own header so the covered range is data-driven, not hard-coded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPopulationRow {
    pub country: String,
    pub country_code: String,
    pub year_values: Vec<(String, String)>,
}

/// Raw competition result row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawResult {
    /// Event period fragment, e.g. "1908 Summer Olympics"
    pub edition: String,
    pub edition_id: String,
    pub country_noc: String,
    pub sport: String,
    pub event: String,
    pub result_id: String,
    pub athlete: String,
    pub athlete_id: String,
    /// Rank fragment with optional tie marker, e.g. "=3", "7.0", "DNF"
    pub pos: String,
    pub medal: String,
    pub is_team_sport: String,
}

// =============================================================================
// Cleansed Records (Silver)
// =============================================================================

/// Cleansed athlete biography record.
///
/// Every attribute is either a valid typed value or `None`; an empty string
/// is never used to mean "no data".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanAthlete {
    /// Source-system athlete identifier (natural key); absent when the
    /// staged field was unparseable, which keeps the row without making it
    /// resolvable
    pub athlete_id: Option<i64>,

    /// Title-cased display name with separator artifacts collapsed
    pub name: Option<String>,

    /// Normalized sex code ("M"/"F")
    pub sex: Option<String>,

    /// Birth date resolved by the date parser's pattern precedence
    pub birth_date: Option<NaiveDate>,

    /// Birth city extracted from the born fragment
    pub birth_city: Option<String>,

    /// Birth region extracted from the born fragment
    pub birth_region: Option<String>,

    /// Birth country NOC extracted from the born fragment
    pub birth_country_noc: Option<String>,

    /// Height in centimeters from the measurements fragment
    pub height_cm: Option<f64>,

    /// Weight in kilograms from the measurements fragment
    pub weight_kg: Option<f64>,

    /// Upper-cased representing NOC
    pub noc: Option<String>,
}

/// Cleansed geocoordinate enrichment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanAthleteGeo {
    pub athlete_id: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Cleansed NOC-to-region reference record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanNocRegion {
    /// Upper-cased NOC code (natural key)
    pub noc: Option<String>,
    pub region: Option<String>,
    pub notes: Option<String>,
}

/// One (country, year, population) observation from the reshaped long form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationYear {
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub year: i32,
    pub population: i64,
}

/// Cleansed competition result record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanResult {
    /// Source-system result identifier; absent when unparseable
    pub result_id: Option<i64>,

    /// Athlete natural key; absent when the source field was unparseable
    pub athlete_id: Option<i64>,

    /// Games natural key; absent when the source field was unparseable
    pub edition_id: Option<i64>,

    /// Original event-period text, retained as a descriptive attribute
    pub edition: Option<String>,

    /// Leading 4-digit year split from the edition fragment
    pub year: Option<i32>,

    /// Trailing season/type label split from the edition fragment
    pub season: Option<String>,

    pub sport: Option<String>,
    pub event: Option<String>,

    /// Upper-cased representing NOC
    pub noc: Option<String>,

    /// Finishing rank parsed from the pos fragment
    pub rank: Option<i32>,

    /// Tie indicator: Some(true) for a "=" prefix, Some(false) for a plain
    /// numeric rank, None when the fragment held no numeric content at all
    pub tie: Option<bool>,

    /// Award tier, absent for non-medal results
    pub medal: Option<MedalTier>,

    pub team_event: Option<bool>,
}

/// The complete cleansed record set produced by the normalization stage
#[derive(Debug, Clone, Default)]
pub struct CleansedRecords {
    pub athletes: Vec<CleanAthlete>,
    pub athlete_geos: Vec<CleanAthleteGeo>,
    pub noc_regions: Vec<CleanNocRegion>,
    pub populations: Vec<PopulationYear>,
    pub results: Vec<CleanResult>,
}

// =============================================================================
// Dimension Entities (Gold)
// =============================================================================

/// Athlete dimension row (the fact's subject)
///
/// Sourced from the union of athlete ids seen in the biography and the
/// geocoordinate enrichment; attributes unresolved by either input stay
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimAthlete {
    /// Surrogate identity, dense and unique within one rebuild only
    pub athlete_sk: u32,

    /// Natural key
    pub athlete_id: i64,

    pub name: Option<String>,
    pub sex: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub birth_city: Option<String>,
    pub birth_region: Option<String>,
    pub birth_country_noc: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Games dimension row (the fact's event grouping)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimGames {
    pub games_sk: u32,

    /// Natural key
    pub edition_id: i64,

    pub edition: Option<String>,
    pub year: Option<i32>,
    pub season: Option<String>,
}

/// Event dimension row (the fact's optional specific event)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimEvent {
    pub event_sk: u32,

    /// Natural key, first component
    pub sport: String,

    /// Natural key, second component
    pub event: String,
}

/// Country dimension row (the fact's optional affiliation)
///
/// Built as the union of NOCs observed across biography, results, and the
/// reference input; rows with no reference attribution keep region absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimCountry {
    pub country_sk: u32,

    /// Natural key
    pub noc: String,

    pub region: Option<String>,
    pub notes: Option<String>,
}

/// The full rebuilt dimension set for one pipeline run
#[derive(Debug, Clone, Default)]
pub struct DimensionSet {
    pub athletes: Vec<DimAthlete>,
    pub games: Vec<DimGames>,
    pub events: Vec<DimEvent>,
    pub countries: Vec<DimCountry>,
}

impl DimensionSet {
    /// Total row count across all dimensions
    pub fn total_rows(&self) -> usize {
        self.athletes.len() + self.games.len() + self.events.len() + self.countries.len()
    }
}

// =============================================================================
// Fact Entity
// =============================================================================

/// One participation fact row, exactly one per cleansed result record.
///
/// The subject and event-grouping relationships are mandatory: `None` there
/// marks a genuine lookup failure that monitoring must surface. The event
/// and affiliation relationships are optional and `None` is a valid,
/// expected state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactResult {
    pub result_id: Option<i64>,

    /// Mandatory subject relationship
    pub athlete_sk: Option<u32>,

    /// Mandatory event-grouping relationship
    pub games_sk: Option<u32>,

    /// Optional specific-event relationship
    pub event_sk: Option<u32>,

    /// Optional affiliation relationship
    pub country_sk: Option<u32>,

    pub rank: Option<i32>,
    pub tie: Option<bool>,
    pub medal: Option<MedalTier>,
    pub team_event: Option<bool>,
}

impl FactResult {
    /// Check whether both mandatory relationships resolved
    pub fn has_mandatory_keys(&self) -> bool {
        self.athlete_sk.is_some() && self.games_sk.is_some()
    }
}

// =============================================================================
// Medal Tier Enumeration
// =============================================================================

/// Award tiers in descending order of precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MedalTier {
    Gold,
    Silver,
    Bronze,
}

impl MedalTier {
    /// All award tiers in precedence order
    pub fn all_values() -> [MedalTier; 3] {
        [MedalTier::Gold, MedalTier::Silver, MedalTier::Bronze]
    }

    /// Column-friendly label, also the accepted source spelling
    pub fn label(&self) -> &'static str {
        match self {
            MedalTier::Gold => "Gold",
            MedalTier::Silver => "Silver",
            MedalTier::Bronze => "Bronze",
        }
    }
}

impl FromStr for MedalTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gold" => Ok(MedalTier::Gold),
            "silver" => Ok(MedalTier::Silver),
            "bronze" => Ok(MedalTier::Bronze),
            _ => Err(Error::data_validation(format!(
                "Invalid medal tier '{}': must be Gold, Silver, or Bronze",
                s
            ))),
        }
    }
}

impl std::fmt::Display for MedalTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
