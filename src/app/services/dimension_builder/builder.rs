//! Dimension derivation and surrogate assignment
//!
//! Each dimension is the distinct set of natural keys observed across its
//! declared source inputs for this run. Dimensions sourced from more than
//! one input reconcile by union of natural keys, then left-attach
//! descriptive attributes from whichever input supplies them; a key present
//! in one input but not the other still produces a row with the unresolved
//! attributes absent.
//!
//! The previous dimension set is always fully replaced; nothing here diffs
//! against earlier runs.

use crate::app::models::{
    CleansedRecords, DimAthlete, DimCountry, DimEvent, DimGames, DimensionSet,
};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::key_map::KeyMap;

/// Per-rebuild lookup tables, handed to the fact builder and then discarded
#[derive(Debug, Clone, Default)]
pub struct DimensionLookups {
    pub athletes: KeyMap<i64>,
    pub games: KeyMap<i64>,
    pub events: KeyMap<(String, String)>,
    pub countries: KeyMap<String>,
}

/// Statistics for one dimension rebuild
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DimensionStats {
    pub athlete_rows: usize,
    pub games_rows: usize,
    pub event_rows: usize,
    pub country_rows: usize,
    /// Athlete rows contributed only by the geocoordinate enrichment
    pub athletes_geo_only: usize,
    /// Country rows with no reference attribution (region absent)
    pub countries_unattributed: usize,
    /// Wall-clock time for the rebuild
    pub elapsed: Duration,
}

impl DimensionStats {
    /// Total dimension row count
    pub fn total_rows(&self) -> usize {
        self.athlete_rows + self.games_rows + self.event_rows + self.country_rows
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Rebuilt {} dimension rows (athletes: {}, games: {}, events: {}, countries: {} of which {} unattributed)",
            self.total_rows(),
            self.athlete_rows,
            self.games_rows,
            self.event_rows,
            self.country_rows,
            self.countries_unattributed
        )
    }
}

/// Result of one dimension rebuild: the rows, the natural-key lookups for
/// fact resolution, and the rebuild statistics
#[derive(Debug, Clone, Default)]
pub struct DimensionBuild {
    pub dimensions: DimensionSet,
    pub lookups: DimensionLookups,
    pub stats: DimensionStats,
}

/// Dimension builder for one pipeline run
#[derive(Debug, Default)]
pub struct DimensionBuilder;

impl DimensionBuilder {
    /// Create a new dimension builder
    pub fn new() -> Self {
        Self
    }

    /// Derive all four dimensions from the cleansed record set, assigning
    /// fresh surrogate identities.
    pub fn build(&self, records: &CleansedRecords) -> DimensionBuild {
        let start = Instant::now();
        let mut build = DimensionBuild::default();

        self.build_athletes(records, &mut build);
        self.build_games(records, &mut build);
        self.build_events(records, &mut build);
        self.build_countries(records, &mut build);

        build.stats.athlete_rows = build.dimensions.athletes.len();
        build.stats.games_rows = build.dimensions.games.len();
        build.stats.event_rows = build.dimensions.events.len();
        build.stats.country_rows = build.dimensions.countries.len();
        build.stats.elapsed = start.elapsed();

        info!("{}", build.stats.summary());
        build
    }

    /// Athlete dimension: union of athlete ids across biography and
    /// geocoordinate enrichment, biography attributes first, coordinates
    /// left-attached where the enrichment supplies them
    fn build_athletes(&self, records: &CleansedRecords, build: &mut DimensionBuild) {
        let geo_by_id: HashMap<i64, (Option<f64>, Option<f64>)> = records
            .athlete_geos
            .iter()
            .filter_map(|geo| geo.athlete_id.map(|id| (id, (geo.latitude, geo.longitude))))
            .collect();

        for athlete in &records.athletes {
            let Some(athlete_id) = athlete.athlete_id else {
                continue;
            };
            if build.lookups.athletes.contains(&athlete_id) {
                continue;
            }
            let athlete_sk = build.lookups.athletes.assign(athlete_id);
            let (latitude, longitude) = geo_by_id
                .get(&athlete_id)
                .copied()
                .unwrap_or((None, None));

            build.dimensions.athletes.push(DimAthlete {
                athlete_sk,
                athlete_id,
                name: athlete.name.clone(),
                sex: athlete.sex.clone(),
                birth_date: athlete.birth_date,
                birth_city: athlete.birth_city.clone(),
                birth_region: athlete.birth_region.clone(),
                birth_country_noc: athlete.birth_country_noc.clone(),
                height_cm: athlete.height_cm,
                weight_kg: athlete.weight_kg,
                latitude,
                longitude,
            });
        }

        // Union: enrichment-only ids still produce a row, attributes absent
        for geo in &records.athlete_geos {
            let Some(athlete_id) = geo.athlete_id else {
                continue;
            };
            if build.lookups.athletes.contains(&athlete_id) {
                continue;
            }
            let athlete_sk = build.lookups.athletes.assign(athlete_id);
            build.stats.athletes_geo_only += 1;

            build.dimensions.athletes.push(DimAthlete {
                athlete_sk,
                athlete_id,
                name: None,
                sex: None,
                birth_date: None,
                birth_city: None,
                birth_region: None,
                birth_country_noc: None,
                height_cm: None,
                weight_kg: None,
                latitude: geo.latitude,
                longitude: geo.longitude,
            });
        }

        debug!(
            "Athlete dimension: {} rows ({} from enrichment only)",
            build.dimensions.athletes.len(),
            build.stats.athletes_geo_only
        );
    }

    /// Games dimension: distinct edition ids observed in the results,
    /// attributes taken from the first occurrence
    fn build_games(&self, records: &CleansedRecords, build: &mut DimensionBuild) {
        for result in &records.results {
            let Some(edition_id) = result.edition_id else {
                continue;
            };
            if build.lookups.games.contains(&edition_id) {
                continue;
            }
            let games_sk = build.lookups.games.assign(edition_id);

            build.dimensions.games.push(DimGames {
                games_sk,
                edition_id,
                edition: result.edition.clone(),
                year: result.year,
                season: result.season.clone(),
            });
        }
    }

    /// Event dimension: distinct (sport, event) pairs observed in the results
    fn build_events(&self, records: &CleansedRecords, build: &mut DimensionBuild) {
        for result in &records.results {
            let (Some(sport), Some(event)) = (&result.sport, &result.event) else {
                continue;
            };
            let key = (sport.clone(), event.clone());
            if build.lookups.events.contains(&key) {
                continue;
            }
            let event_sk = build.lookups.events.assign(key);

            build.dimensions.events.push(DimEvent {
                event_sk,
                sport: sport.clone(),
                event: event.clone(),
            });
        }
    }

    /// Country dimension: union of NOCs observed in biography, results, and
    /// the reference input, then left-attached region attribution from the
    /// reference. Keys missing from the reference still produce rows.
    fn build_countries(&self, records: &CleansedRecords, build: &mut DimensionBuild) {
        let attribution: HashMap<&str, (&Option<String>, &Option<String>)> = records
            .noc_regions
            .iter()
            .filter_map(|reference| {
                reference
                    .noc
                    .as_deref()
                    .map(|noc| (noc, (&reference.region, &reference.notes)))
            })
            .collect();

        let observed = records
            .athletes
            .iter()
            .filter_map(|athlete| athlete.noc.as_deref())
            .chain(records.results.iter().filter_map(|r| r.noc.as_deref()))
            .chain(records.noc_regions.iter().filter_map(|r| r.noc.as_deref()));

        for noc in observed {
            if build.lookups.countries.contains(&noc.to_string()) {
                continue;
            }
            let country_sk = build.lookups.countries.assign(noc.to_string());

            let (region, notes) = match attribution.get(noc) {
                Some((region, notes)) => ((*region).clone(), (*notes).clone()),
                None => {
                    build.stats.countries_unattributed += 1;
                    (None, None)
                }
            };

            build.dimensions.countries.push(DimCountry {
                country_sk,
                noc: noc.to_string(),
                region,
                notes,
            });
        }
    }
}
