//! Olympedia Processor Library
//!
//! A Rust library for rebuilding historical Olympic athlete and result data
//! into a star-schema warehouse for analytical querying.
//!
//! This library provides tools for:
//! - Loading raw Olympedia-style CSV extracts into staged record sets
//! - Normalizing free-form biography text (birth dates, birth locations,
//!   body measurements) into typed values with explicit pattern precedence
//! - Rebuilding dimension entities with fresh surrogate identities per run
//! - Resolving fact rows against dimensions via natural-key lookups
//! - Writing dimension, fact, and aggregate-view tables as CSV or Parquet
//! - Comprehensive error handling and per-stage reporting

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod dimension_builder;
        pub mod fact_builder;
        pub mod normalizer;
        pub mod pipeline;
        pub mod staging_loader;
        pub mod text_normalizer;
        pub mod warehouse_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CleanAthlete, CleanResult, DimensionSet, FactResult, MedalTier};
pub use config::PipelineConfig;

/// Result type alias for the Olympedia processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for pipeline operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Warehouse export error
    #[error("Warehouse export error: {message}")]
    Export {
        message: String,
        #[source]
        source: polars::error::PolarsError,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Input file not found
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    /// A mandatory staged input is missing from the data directory
    #[error("Missing mandatory input '{entity}' (expected file matching '{pattern}')")]
    MissingInput { entity: String, pattern: String },

    /// A pipeline stage failed with an unrecoverable error
    #[error("Pipeline stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a warehouse export error
    pub fn export(message: impl Into<String>, source: polars::error::PolarsError) -> Self {
        Self::Export {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an input-not-found error
    pub fn input_not_found(path: impl Into<String>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create a missing-mandatory-input error
    pub fn missing_input(entity: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::MissingInput {
            entity: entity.into(),
            pattern: pattern.into(),
        }
    }

    /// Create a stage-failure error naming the failing pipeline stage
    pub fn stage_failed(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StageFailed {
            stage: stage.into(),
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<polars::error::PolarsError> for Error {
    fn from(error: polars::error::PolarsError) -> Self {
        Self::Export {
            message: "DataFrame operation failed".to_string(),
            source: error,
        }
    }
}

impl From<glob::PatternError> for Error {
    fn from(error: glob::PatternError) -> Self {
        Self::Configuration {
            message: format!("Invalid input file pattern: {}", error),
        }
    }
}
