//! Command-line argument definitions for the Olympedia processor
//!
//! This module defines the complete CLI interface using the clap derive API.
//! Argument values layer over [`PipelineConfig`] defaults, so every option
//! is optional on the command line.

use crate::config::{ExportFormat, PipelineConfig};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Olympedia pipeline processor
///
/// Rebuilds historical Olympic athlete and result CSV extracts into a
/// star-schema warehouse with aggregate views for analytical querying.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "olympedia-processor",
    version,
    about = "Rebuild Olympedia athlete/result CSV extracts into a star-schema warehouse",
    long_about = "Normalizes free-form Olympedia biography and result data (birth dates, \
                  birthplaces, measurements, ranks) and rebuilds it as a dimensional model: \
                  four dimensions, one fact table, and read-only aggregate views, exported \
                  as CSV or Parquet. Every run fully replaces the previous warehouse."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the full pipeline: normalize, rebuild dimensions and facts, export
    Process(ProcessArgs),
    /// Check integrity of a previously exported warehouse
    Validate(ValidateArgs),
}

/// Export format choice on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Plain CSV, one file per table
    Csv,
    /// Parquet with Snappy compression
    Parquet,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Parquet => ExportFormat::Parquet,
        }
    }
}

/// Arguments for the process command (main pipeline run)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Directory containing the five staged CSV inputs
    ///
    /// Expected files match *athlete_bio*, *athlete_bio_locs*, *noc_region*,
    /// *populations*, and *athlete_event_results*. If not specified,
    /// defaults to the platform data directory under "olympedia".
    #[arg(
        short = 'i',
        long = "data-dir",
        value_name = "PATH",
        help = "Directory containing the staged CSV inputs"
    )]
    pub data_dir: Option<PathBuf>,

    /// Output directory for the rebuilt warehouse
    ///
    /// Created if it does not exist. Previous table files are removed
    /// before writing. If not specified, defaults to ./warehouse
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for the rebuilt warehouse"
    )]
    pub output_dir: Option<PathBuf>,

    /// Export format for all warehouse tables
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "csv",
        help = "Export format for all warehouse tables"
    )]
    pub format: FormatArg,

    /// Skip the read-only aggregate views
    #[arg(long = "no-views", help = "Skip the aggregate views")]
    pub no_views: bool,

    /// Skip the long-form population reference table
    #[arg(long = "no-populations", help = "Skip the population reference table")]
    pub no_populations: bool,

    /// Minimum participants for a nation to appear in the medal-ratio view
    #[arg(
        long = "min-nation-participants",
        value_name = "N",
        help = "Minimum participants for the nation medal view"
    )]
    pub min_nation_participants: Option<usize>,

    /// Row limit for the most-decorated-athletes view
    #[arg(
        long = "top-athletes",
        value_name = "N",
        help = "Row limit for the most-decorated-athletes view"
    )]
    pub top_athletes: Option<usize>,

    /// List discovered inputs and planned outputs without writing anything
    #[arg(long = "dry-run", help = "Show what would be processed without writing")]
    pub dry_run: bool,

    /// Suppress progress bars and non-error output
    #[arg(short = 'q', long = "quiet", help = "Suppress progress and info output")]
    pub quiet: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count,
          help = "Increase logging verbosity")]
    pub verbose: u8,

    /// Disable progress bars without reducing log output
    #[arg(long = "no-progress", help = "Disable progress bars")]
    pub no_progress: bool,
}

impl ProcessArgs {
    /// Layer these arguments over the configuration defaults
    pub fn to_config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::default().with_format(self.format.into());

        if let Some(data_dir) = &self.data_dir {
            config = config.with_data_dir(data_dir.clone());
        }
        if let Some(output_dir) = &self.output_dir {
            config = config.with_output_dir(output_dir.clone());
        }
        if self.no_views {
            config = config.without_views();
        }
        if self.no_populations {
            config = config.without_populations();
        }
        if let Some(min) = self.min_nation_participants {
            config = config.with_min_nation_participants(min);
        }
        if let Some(limit) = self.top_athletes {
            config = config.with_top_athletes_limit(limit);
        }

        config
    }

    /// Whether progress bars should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress
    }

    /// Log level derived from the quiet/verbose flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Warehouse directory to validate
    ///
    /// Should contain the exported dimension and fact tables from a
    /// previous process run. If not specified, defaults to ./warehouse
    #[arg(
        short = 'w',
        long = "warehouse",
        value_name = "PATH",
        help = "Warehouse directory to validate"
    )]
    pub warehouse_dir: Option<PathBuf>,

    /// Suppress non-error output
    #[arg(short = 'q', long = "quiet", help = "Suppress info output")]
    pub quiet: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count,
          help = "Increase logging verbosity")]
    pub verbose: u8,
}

impl ValidateArgs {
    /// Warehouse directory, defaulting like the process command's output
    pub fn warehouse_dir(&self) -> PathBuf {
        self.warehouse_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(crate::constants::DEFAULT_OUTPUT_DIR))
    }

    /// Log level derived from the quiet/verbose flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}
