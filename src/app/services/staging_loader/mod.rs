//! Staging loader for the raw Olympedia CSV inputs
//!
//! This module discovers the five staged input files in the data directory
//! and bulk-loads them into raw record sets, one row per source record with
//! columns kept as close to source format as possible. No parsing beyond
//! basic CSV structure happens here; field cleanup belongs to the
//! normalization stage.
//!
//! Missing optional enrichment inputs (geocoordinates, populations) load as
//! empty sets with a warning. Missing biography or result inputs are
//! stage-fatal: nothing downstream can be rebuilt without them.

use crate::app::models::{RawAthleteBio, RawAthleteGeo, RawNocRegion, RawPopulationRow, RawResult};
use crate::{Result, constants};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

pub mod discovery;
pub mod loader;

#[cfg(test)]
pub mod tests;

pub use discovery::{DiscoveredInputs, discover_inputs};

/// The complete raw staged record set for one pipeline run
#[derive(Debug, Clone, Default)]
pub struct StagedInputs {
    pub athlete_bios: Vec<RawAthleteBio>,
    pub athlete_geos: Vec<RawAthleteGeo>,
    pub noc_regions: Vec<RawNocRegion>,
    pub populations: Vec<RawPopulationRow>,
    pub results: Vec<RawResult>,
}

impl StagedInputs {
    /// Total staged row count across all five inputs
    pub fn total_rows(&self) -> usize {
        self.athlete_bios.len()
            + self.athlete_geos.len()
            + self.noc_regions.len()
            + self.populations.len()
            + self.results.len()
    }
}

/// Statistics for one staging load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadStats {
    /// Number of input files found and read
    pub files_loaded: usize,
    pub athlete_bio_rows: usize,
    pub athlete_geo_rows: usize,
    pub noc_region_rows: usize,
    pub population_rows: usize,
    pub result_rows: usize,
    /// Wall-clock time for the load
    pub elapsed: Duration,
}

impl LoadStats {
    /// Total staged row count
    pub fn total_rows(&self) -> usize {
        self.athlete_bio_rows
            + self.athlete_geo_rows
            + self.noc_region_rows
            + self.population_rows
            + self.result_rows
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Staged {} rows from {} files (bios: {}, geos: {}, regions: {}, populations: {}, results: {})",
            self.total_rows(),
            self.files_loaded,
            self.athlete_bio_rows,
            self.athlete_geo_rows,
            self.noc_region_rows,
            self.population_rows,
            self.result_rows
        )
    }
}

/// Staging loader bound to one data directory
#[derive(Debug, Clone)]
pub struct StagingLoader {
    data_dir: PathBuf,
}

impl StagingLoader {
    /// Create a loader for the given data directory
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Discover and load all staged inputs.
    ///
    /// Biography and result inputs are mandatory; the enrichment and
    /// reference inputs degrade to empty sets when absent.
    pub fn load(&self) -> Result<(StagedInputs, LoadStats)> {
        let start = Instant::now();
        let discovered = discover_inputs(&self.data_dir)?;

        let bio_path = discovered.athlete_bio.clone().ok_or_else(|| {
            crate::Error::missing_input(
                constants::entities::ATHLETE_BIO,
                constants::ATHLETE_BIO_PATTERN,
            )
        })?;
        let result_path = discovered.result.clone().ok_or_else(|| {
            crate::Error::missing_input(constants::entities::RESULT, constants::RESULT_PATTERN)
        })?;

        let athlete_bios = loader::load_athlete_bios(&bio_path)?;
        let results = loader::load_results(&result_path)?;

        let athlete_geos = match &discovered.athlete_geo {
            Some(path) => loader::load_athlete_geos(path)?,
            None => {
                warn!(
                    "No geocoordinate enrichment input found in {}; continuing without it",
                    self.data_dir.display()
                );
                Vec::new()
            }
        };

        let noc_regions = match &discovered.noc_region {
            Some(path) => loader::load_noc_regions(path)?,
            None => {
                warn!(
                    "No NOC region reference found in {}; country dimension will lack attribution",
                    self.data_dir.display()
                );
                Vec::new()
            }
        };

        let populations = match &discovered.population {
            Some(path) => loader::load_populations(path)?,
            None => {
                warn!(
                    "No population reference found in {}; continuing without it",
                    self.data_dir.display()
                );
                Vec::new()
            }
        };

        let stats = LoadStats {
            files_loaded: discovered.found_count(),
            athlete_bio_rows: athlete_bios.len(),
            athlete_geo_rows: athlete_geos.len(),
            noc_region_rows: noc_regions.len(),
            population_rows: populations.len(),
            result_rows: results.len(),
            elapsed: start.elapsed(),
        };

        info!("{}", stats.summary());

        Ok((
            StagedInputs {
                athlete_bios,
                athlete_geos,
                noc_regions,
                populations,
                results,
            },
            stats,
        ))
    }

    /// The data directory this loader reads from
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }
}
