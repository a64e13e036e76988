//! Normalization stage for staged Olympedia records
//!
//! This module is the Silver stage of the pipeline: it applies the text
//! normalization parsers plus simpler field cleanup (trimming, case
//! normalization, numeric extraction) to every staged row, producing one
//! cleansed record set per source entity.
//!
//! # Failure Semantics
//!
//! A record that fails one field's transformation is retained with that
//! field absent; no row is ever dropped by this stage. Degradation is
//! tracked in [`NormalizationStats`] so unusually lossy inputs are visible
//! in the run report without ever aborting a run.

use crate::app::models::CleansedRecords;
use crate::app::services::staging_loader::StagedInputs;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tracing::info;

pub mod athletes;
pub mod reference;
pub mod results;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use stats::NormalizationStats;

/// Normalization stage runner
#[derive(Debug, Default)]
pub struct NormalizationStage;

impl NormalizationStage {
    /// Create a new normalization stage
    pub fn new() -> Self {
        Self
    }

    /// Transform every staged record into its cleansed form.
    ///
    /// Output row counts equal input row counts for every entity except the
    /// population reshape, where one wide row fans out to one long row per
    /// parseable year cell.
    pub fn run(
        &self,
        staged: StagedInputs,
        show_progress: bool,
    ) -> (CleansedRecords, NormalizationStats) {
        let start = Instant::now();
        let mut stats = NormalizationStats::new();

        info!(
            "Starting normalization for {} staged rows",
            staged.total_rows()
        );

        let athlete_pb = progress_bar(
            show_progress,
            staged.athlete_bios.len() as u64,
            "Normalizing athlete biographies",
        );
        let athletes =
            athletes::normalize_athletes(staged.athlete_bios, &mut stats, athlete_pb.as_ref());
        if let Some(pb) = athlete_pb {
            pb.finish_with_message(format!("Athlete biographies: {}", athletes.len()));
        }

        let athlete_geos = athletes::normalize_athlete_geos(staged.athlete_geos, &mut stats);
        let noc_regions = reference::normalize_noc_regions(staged.noc_regions, &mut stats);
        let populations = reference::reshape_populations(staged.populations, &mut stats);

        let result_pb = progress_bar(
            show_progress,
            staged.results.len() as u64,
            "Normalizing competition results",
        );
        let results = results::normalize_results(staged.results, &mut stats, result_pb.as_ref());
        if let Some(pb) = result_pb {
            pb.finish_with_message(format!("Competition results: {}", results.len()));
        }

        stats.elapsed = start.elapsed();
        info!("{}", stats.summary());

        (
            CleansedRecords {
                athletes,
                athlete_geos,
                noc_regions,
                populations,
                results,
            },
            stats,
        )
    }
}

/// Create a progress bar for a normalization step when enabled
fn progress_bar(show_progress: bool, total: u64, operation: &str) -> Option<ProgressBar> {
    if !show_progress {
        return None;
    }

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(operation.to_string());
    Some(pb)
}
