//! Statistics for the normalization stage
//!
//! Tracks input counts per staged entity and how often best-effort parsing
//! degraded a field to absent. A degraded field never removes a row, so the
//! output counts always equal the input counts; these statistics exist to
//! make the degradation visible.

use std::time::Duration;

/// Statistics for one normalization run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizationStats {
    // Input row counts (outputs are identical by construction)
    pub athletes_in: usize,
    pub geos_in: usize,
    pub regions_in: usize,
    pub population_rows_in: usize,
    pub results_in: usize,

    // Field degradation counters
    /// Biography rows whose birth fragment yielded no date
    pub birth_dates_absent: usize,
    /// Biography rows whose birth fragment yielded no location component
    pub birthplaces_absent: usize,
    /// Biography rows without a unit-qualified height
    pub heights_absent: usize,
    /// Biography rows without a unit-qualified weight
    pub weights_absent: usize,
    /// Result rows whose pos fragment held no numeric content
    pub ranks_absent: usize,
    /// Result rows whose event period failed the year/season split
    pub editions_unparsed: usize,
    /// Result rows carrying a recognized award tier
    pub medals_parsed: usize,

    // Population reshape counters
    /// Wide cells successfully reshaped to long (year, value) rows
    pub population_cells_reshaped: usize,
    /// Wide cells skipped for non-numeric content
    pub population_cells_skipped: usize,

    /// Wall-clock time for the stage
    pub elapsed: Duration,
}

impl NormalizationStats {
    /// Create new empty normalization statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total cleansed record count across entities
    pub fn total_records(&self) -> usize {
        self.athletes_in + self.geos_in + self.regions_in + self.results_in
            + self.population_cells_reshaped
    }

    /// Share of biography rows with a resolved birth date, as a percentage
    pub fn birth_date_rate(&self) -> f64 {
        if self.athletes_in == 0 {
            0.0
        } else {
            let resolved = self.athletes_in - self.birth_dates_absent;
            (resolved as f64 / self.athletes_in as f64) * 100.0
        }
    }

    /// Share of result rows with a parsed rank, as a percentage
    pub fn rank_rate(&self) -> f64 {
        if self.results_in == 0 {
            0.0
        } else {
            let resolved = self.results_in - self.ranks_absent;
            (resolved as f64 / self.results_in as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Normalized {} athletes ({:.1}% dated), {} results ({:.1}% ranked, {} medals), \
             {} regions, {} population cells ({} skipped)",
            self.athletes_in,
            self.birth_date_rate(),
            self.results_in,
            self.rank_rate(),
            self.medals_parsed,
            self.regions_in,
            self.population_cells_reshaped,
            self.population_cells_skipped
        )
    }
}
