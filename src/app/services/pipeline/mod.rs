//! Pipeline orchestration
//!
//! Sequences the full rebuild: staging load, normalization, dimension
//! rebuild, fact resolution, and warehouse export. Each stage fully
//! completes before the next starts, so the fact builder never sees a
//! partially rebuilt dimension set.
//!
//! The run is single-threaded and run-to-completion: a run either reaches
//! `Completed` or stops at `Failed`, leaving whatever the export wrote so
//! far to be corrected by the next successful run's full replacement.
//! Concurrent runs against one output directory must be serialized by the
//! caller; nothing here locks storage.

use crate::app::services::dimension_builder::{DimensionBuilder, DimensionStats};
use crate::app::services::fact_builder::{FactBuilder, FactStats};
use crate::app::services::normalizer::{NormalizationStage, NormalizationStats};
use crate::app::services::staging_loader::{LoadStats, StagingLoader};
use crate::app::services::warehouse_writer::{ExportStats, WarehouseWriter};
use crate::config::PipelineConfig;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Pipeline run states.
///
/// Transitions run strictly forward through the in-progress states;
/// `Failed` is reachable from any in-progress state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    NormalizingRaw,
    BuildingDimensions,
    BuildingFacts,
    Completed,
    Failed,
}

impl PipelineState {
    /// Check whether a transition to `next` is legal
    pub fn can_transition_to(self, next: PipelineState) -> bool {
        use PipelineState::*;
        matches!(
            (self, next),
            (Idle, NormalizingRaw)
                | (NormalizingRaw, BuildingDimensions)
                | (BuildingDimensions, BuildingFacts)
                | (BuildingFacts, Completed)
                | (NormalizingRaw, Failed)
                | (BuildingDimensions, Failed)
                | (BuildingFacts, Failed)
        )
    }

    /// Stage name for logs and error messages
    pub fn stage_name(self) -> &'static str {
        match self {
            PipelineState::Idle => "idle",
            PipelineState::NormalizingRaw => "normalizing-raw",
            PipelineState::BuildingDimensions => "building-dimensions",
            PipelineState::BuildingFacts => "building-facts",
            PipelineState::Completed => "completed",
            PipelineState::Failed => "failed",
        }
    }
}

impl std::fmt::Display for PipelineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.stage_name())
    }
}

/// Per-stage row counts, timings, and the final state of one run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub state: PipelineState,
    pub staging: LoadStats,
    pub normalization: NormalizationStats,
    pub dimensions: DimensionStats,
    pub facts: FactStats,
    pub export: ExportStats,
    pub total_elapsed: Duration,
}

impl PipelineReport {
    /// Multi-line run summary for the final report
    pub fn summary(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}\n{}",
            self.staging.summary(),
            self.normalization.summary(),
            self.dimensions.summary(),
            self.facts.summary(),
            self.export.summary()
        )
    }
}

/// Pipeline orchestrator for one configuration
#[derive(Debug, Clone)]
pub struct PipelineOrchestrator {
    config: PipelineConfig,
}

impl PipelineOrchestrator {
    /// Create an orchestrator for the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline to completion.
    ///
    /// Stage order is fixed: staging and normalization, then dimensions,
    /// then facts, then export. A stage-fatal error logs the failing stage
    /// and propagates after the state moves to `Failed`.
    pub async fn run(&self, show_progress: bool) -> Result<PipelineReport> {
        let start = Instant::now();
        let mut state = PipelineState::Idle;

        info!(
            "Starting pipeline run: {} -> {}",
            self.config.data_dir.display(),
            self.config.output_dir.display()
        );

        // Stage 1: staging load + normalization
        self.transition(&mut state, PipelineState::NormalizingRaw)?;
        let loader = StagingLoader::new(self.config.data_dir.clone());
        let (staged, staging_stats) = match loader.load() {
            Ok(loaded) => loaded,
            Err(e) => return Err(self.fail(&mut state, e)),
        };
        let (cleansed, normalization_stats) =
            NormalizationStage::new().run(staged, show_progress);

        // Stage 2: dimension rebuild (must fully complete before facts)
        self.transition(&mut state, PipelineState::BuildingDimensions)?;
        let dimension_build = DimensionBuilder::new().build(&cleansed);

        // Stage 3: fact resolution against the completed dimension set
        self.transition(&mut state, PipelineState::BuildingFacts)?;
        let fact_pb = fact_progress_bar(show_progress, cleansed.results.len() as u64);
        let fact_build =
            FactBuilder::new().build(&cleansed.results, &dimension_build.lookups, fact_pb.as_ref());
        if let Some(pb) = fact_pb {
            pb.finish_with_message(format!("Facts resolved: {}", fact_build.facts.len()));
        }

        // Export the rebuilt warehouse (still part of the facts stage from
        // the state machine's perspective; a failure here is stage-fatal)
        let writer = WarehouseWriter::new(self.config.output_dir.clone(), self.config.export.clone());
        let export_stats = match writer.write_warehouse(
            &dimension_build.dimensions,
            &fact_build.facts,
            &cleansed.populations,
            &self.config.views,
        ) {
            Ok(stats) => stats,
            Err(e) => return Err(self.fail(&mut state, e)),
        };

        self.transition(&mut state, PipelineState::Completed)?;
        let report = PipelineReport {
            state,
            staging: staging_stats,
            normalization: normalization_stats,
            dimensions: dimension_build.stats,
            facts: fact_build.stats,
            export: export_stats,
            total_elapsed: start.elapsed(),
        };

        info!(
            "Pipeline completed in {:.2}s",
            report.total_elapsed.as_secs_f64()
        );
        Ok(report)
    }

    /// The configuration this orchestrator runs with
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Advance the state machine, rejecting illegal transitions
    fn transition(&self, state: &mut PipelineState, next: PipelineState) -> Result<()> {
        if !state.can_transition_to(next) {
            return Err(Error::stage_failed(
                state.stage_name(),
                format!("illegal state transition to '{}'", next),
            ));
        }
        info!("Pipeline state: {} -> {}", state, next);
        *state = next;
        Ok(())
    }

    /// Record a stage failure, logging the failing stage before propagating
    fn fail(&self, state: &mut PipelineState, cause: Error) -> Error {
        error!("Pipeline stage '{}' failed: {}", state.stage_name(), cause);
        if state.can_transition_to(PipelineState::Failed) {
            *state = PipelineState::Failed;
        }
        cause
    }
}

/// Create a progress bar for fact resolution when enabled
fn fact_progress_bar(show_progress: bool, total: u64) -> Option<ProgressBar> {
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
    pb.set_message("Resolving facts".to_string());
    Some(pb)
}
