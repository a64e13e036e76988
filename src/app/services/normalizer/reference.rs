//! Reference input normalization
//!
//! Cleanses the NOC-region reference and reshapes the wide population table
//! to long (year, value) form. The reshaped year set comes from whatever
//! year columns the staging loader found in the input's own header, so the
//! covered range follows the data.

use crate::app::models::{CleanNocRegion, PopulationYear, RawNocRegion, RawPopulationRow};
use crate::app::services::text_normalizer::normalize_code;
use tracing::debug;

use super::stats::NormalizationStats;

/// Normalize the NOC-to-region reference rows
pub fn normalize_noc_regions(
    raw: Vec<RawNocRegion>,
    stats: &mut NormalizationStats,
) -> Vec<CleanNocRegion> {
    stats.regions_in = raw.len();

    raw.into_iter()
        .map(|row| CleanNocRegion {
            noc: normalize_code(&row.noc),
            region: non_empty(&row.region),
            notes: non_empty(&row.notes),
        })
        .collect()
}

/// Reshape the wide population rows to long (country, year, population)
/// observations. Cells without numeric content are skipped and counted;
/// the enclosing row contributes its remaining cells either way.
pub fn reshape_populations(
    raw: Vec<RawPopulationRow>,
    stats: &mut NormalizationStats,
) -> Vec<PopulationYear> {
    stats.population_rows_in = raw.len();

    let mut long_rows = Vec::new();
    for row in raw {
        let country = non_empty(&row.country);
        let country_code = normalize_code(&row.country_code);

        for (year_label, value) in &row.year_values {
            // Year labels were filtered to all-digit headers at load time
            let Ok(year) = year_label.parse::<i32>() else {
                stats.population_cells_skipped += 1;
                continue;
            };

            match value.trim().parse::<i64>() {
                Ok(population) => {
                    long_rows.push(PopulationYear {
                        country: country.clone(),
                        country_code: country_code.clone(),
                        year,
                        population,
                    });
                    stats.population_cells_reshaped += 1;
                }
                Err(_) => {
                    stats.population_cells_skipped += 1;
                }
            }
        }
    }

    debug!(
        "Population reshape: {} wide rows -> {} long rows ({} cells skipped)",
        stats.population_rows_in, long_rows.len(), stats.population_cells_skipped
    );

    long_rows
}

/// Trim a free-text field, mapping emptiness to absence
fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
