//! Configuration management for the pipeline.
//!
//! Provides configuration structures for input/output locations, export
//! format selection, and aggregate-view parameters, with builder-style
//! overrides layered on top of defaults by the CLI.

use crate::constants::{
    DEFAULT_DATA_DIR_NAME, DEFAULT_MIN_NATION_PARTICIPANTS, DEFAULT_OUTPUT_DIR,
    DEFAULT_TOP_ATHLETES_LIMIT,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Supported export formats for warehouse tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    /// Plain CSV output, one file per table
    Csv,
    /// Parquet output with Snappy compression
    Parquet,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Parquet => "parquet",
        }
    }
}

/// Warehouse export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output format for all exported tables
    pub format: ExportFormat,

    /// Write the read-only aggregate views alongside the star schema
    pub include_views: bool,

    /// Write the long-form population reference table
    pub include_populations: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_views: true,
            include_populations: true,
        }
    }
}

/// Parameters for the aggregate views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Minimum participant count for a nation to appear in the medal-ratio view
    pub min_nation_participants: usize,

    /// Row limit for the most-decorated-athletes view
    pub top_athletes_limit: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_nation_participants: DEFAULT_MIN_NATION_PARTICIPANTS,
            top_athletes_limit: DEFAULT_TOP_ATHLETES_LIMIT,
        }
    }
}

/// Global configuration for a pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory containing the five raw staged CSV inputs
    pub data_dir: PathBuf,

    /// Directory the rebuilt warehouse is written to
    pub output_dir: PathBuf,

    /// Export configuration
    pub export: ExportConfig,

    /// Aggregate view parameters
    pub views: ViewConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            export: ExportConfig::default(),
            views: ViewConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Create configuration with a custom data directory
    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        self.data_dir = data_dir;
        self
    }

    /// Create configuration with a custom output directory
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Create configuration with a custom export format
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.export.format = format;
        self
    }

    /// Disable aggregate view export
    pub fn without_views(mut self) -> Self {
        self.export.include_views = false;
        self
    }

    /// Disable population reference export
    pub fn without_populations(mut self) -> Self {
        self.export.include_populations = false;
        self
    }

    /// Set the minimum participant filter for the nation medal view
    pub fn with_min_nation_participants(mut self, min: usize) -> Self {
        self.views.min_nation_participants = min;
        self
    }

    /// Set the row limit for the most-decorated-athletes view
    pub fn with_top_athletes_limit(mut self, limit: usize) -> Self {
        self.views.top_athletes_limit = limit;
        self
    }

    /// Validate the configuration before running the pipeline
    pub fn validate(&self) -> crate::Result<()> {
        if !self.data_dir.exists() {
            return Err(crate::Error::configuration(format!(
                "Data directory does not exist: {}",
                self.data_dir.display()
            )));
        }

        if !self.data_dir.is_dir() {
            return Err(crate::Error::configuration(format!(
                "Data path is not a directory: {}",
                self.data_dir.display()
            )));
        }

        if self.views.top_athletes_limit == 0 {
            return Err(crate::Error::configuration(
                "Top athletes limit must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Default data directory: `<platform data dir>/olympedia`, falling back to
/// `./data` when the platform directory cannot be determined
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(DEFAULT_DATA_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("data"))
}
