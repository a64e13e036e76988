//! Input file discovery for the staging loader
//!
//! Locates the five staged CSV inputs in the data directory by glob file
//! pattern. Patterns match anywhere in the filename so dated exports like
//! `2024-01_athlete_bio.csv` resolve without configuration.

use crate::{Result, constants};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The set of input files located in one data directory; any entry may be
/// absent, and the loader decides which absences are fatal
#[derive(Debug, Clone, Default)]
pub struct DiscoveredInputs {
    pub athlete_bio: Option<PathBuf>,
    pub athlete_geo: Option<PathBuf>,
    pub noc_region: Option<PathBuf>,
    pub population: Option<PathBuf>,
    pub result: Option<PathBuf>,
}

impl DiscoveredInputs {
    /// Number of inputs that were found
    pub fn found_count(&self) -> usize {
        [
            self.athlete_bio.is_some(),
            self.athlete_geo.is_some(),
            self.noc_region.is_some(),
            self.population.is_some(),
            self.result.is_some(),
        ]
        .iter()
        .filter(|found| **found)
        .count()
    }
}

/// Discover all staged inputs in the given data directory
pub fn discover_inputs(data_dir: &Path) -> Result<DiscoveredInputs> {
    let geo_matches = matching_files(data_dir, constants::ATHLETE_GEO_PATTERN)?;

    // The biography pattern is a prefix of the enrichment pattern, so the
    // enrichment matches must be excluded from the biography candidates
    let bio_matches: Vec<PathBuf> = matching_files(data_dir, constants::ATHLETE_BIO_PATTERN)?
        .into_iter()
        .filter(|path| !geo_matches.contains(path))
        .collect();

    Ok(DiscoveredInputs {
        athlete_bio: pick_first(data_dir, constants::ATHLETE_BIO_PATTERN, bio_matches),
        athlete_geo: pick_first(data_dir, constants::ATHLETE_GEO_PATTERN, geo_matches),
        noc_region: pick_first(
            data_dir,
            constants::NOC_REGION_PATTERN,
            matching_files(data_dir, constants::NOC_REGION_PATTERN)?,
        ),
        population: pick_first(
            data_dir,
            constants::POPULATION_PATTERN,
            matching_files(data_dir, constants::POPULATION_PATTERN)?,
        ),
        result: pick_first(
            data_dir,
            constants::RESULT_PATTERN,
            matching_files(data_dir, constants::RESULT_PATTERN)?,
        ),
    })
}

/// All files matching a pattern in the data directory, sorted
fn matching_files(data_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let glob_pattern = data_dir.join(pattern);
    let glob_str = glob_pattern.to_string_lossy();

    let mut matches: Vec<PathBuf> = glob::glob(&glob_str)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    matches.sort();
    Ok(matches)
}

/// Pick the lexicographically first match; report the rest so repeated
/// exports resolve deterministically
fn pick_first(data_dir: &Path, pattern: &str, mut matches: Vec<PathBuf>) -> Option<PathBuf> {
    match matches.len() {
        0 => {
            debug!("No file matching '{}' in {}", pattern, data_dir.display());
            None
        }
        1 => Some(matches.remove(0)),
        n => {
            warn!(
                "{} files match '{}' in {}; using {}",
                n,
                pattern,
                data_dir.display(),
                matches[0].display()
            );
            Some(matches.remove(0))
        }
    }
}
