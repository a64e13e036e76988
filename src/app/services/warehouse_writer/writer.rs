//! Warehouse table output
//!
//! Writes the star schema, population reference, and aggregate views to the
//! output directory. Existing table files are removed first so every run is
//! a full replacement; a partially written warehouse from an aborted run is
//! corrected by the next successful one.

use crate::app::models::{DimensionSet, FactResult, PopulationYear};
use crate::config::{ExportConfig, ExportFormat, ViewConfig};
use crate::constants::{table_filename, tables, views as view_names};
use crate::{Error, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::frames::WarehouseFrames;
use super::views::build_views;

/// Statistics for one warehouse export
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportStats {
    /// Star-schema and reference tables written
    pub tables_written: usize,
    /// Aggregate views written
    pub views_written: usize,
    /// Total rows across all written tables
    pub rows_written: usize,
    /// Wall-clock time for the export
    pub elapsed: Duration,
}

impl ExportStats {
    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Exported {} tables and {} views ({} rows)",
            self.tables_written, self.views_written, self.rows_written
        )
    }
}

/// Warehouse writer bound to one output directory
#[derive(Debug, Clone)]
pub struct WarehouseWriter {
    output_dir: PathBuf,
    config: ExportConfig,
}

impl WarehouseWriter {
    /// Create a writer for the given output directory
    pub fn new(output_dir: PathBuf, config: ExportConfig) -> Self {
        Self { output_dir, config }
    }

    /// Write the complete warehouse: truncate previous tables, then write
    /// dimensions, facts, the population reference, and the aggregate views.
    pub fn write_warehouse(
        &self,
        dimensions: &DimensionSet,
        facts: &[FactResult],
        populations: &[PopulationYear],
        view_config: &ViewConfig,
    ) -> Result<ExportStats> {
        let start = Instant::now();
        let mut stats = ExportStats::default();

        std::fs::create_dir_all(&self.output_dir).map_err(|e| {
            Error::io(
                format!("Failed to create output directory {}", self.output_dir.display()),
                e,
            )
        })?;
        self.truncate_existing()?;

        let frames = WarehouseFrames::build(dimensions, facts, populations)?;

        let mut star_tables = vec![
            (tables::DIM_ATHLETES, frames.athletes.clone()),
            (tables::DIM_GAMES, frames.games.clone()),
            (tables::DIM_EVENTS, frames.events.clone()),
            (tables::DIM_COUNTRIES, frames.countries.clone()),
            (tables::FACT_RESULTS, frames.facts.clone()),
        ];
        if self.config.include_populations {
            star_tables.push((tables::REF_POPULATIONS, frames.populations.clone()));
        }

        for (name, mut frame) in star_tables {
            stats.rows_written += frame.height();
            self.write_table(name, &mut frame)?;
            stats.tables_written += 1;
        }

        if self.config.include_views {
            for (name, mut frame) in build_views(&frames, view_config)? {
                stats.rows_written += frame.height();
                self.write_table(name, &mut frame)?;
                stats.views_written += 1;
            }
        }

        stats.elapsed = start.elapsed();
        info!("{} to {}", stats.summary(), self.output_dir.display());
        Ok(stats)
    }

    /// Remove previously written table files in both formats
    fn truncate_existing(&self) -> Result<()> {
        let all_tables = [
            tables::DIM_ATHLETES,
            tables::DIM_GAMES,
            tables::DIM_EVENTS,
            tables::DIM_COUNTRIES,
            tables::FACT_RESULTS,
            tables::REF_POPULATIONS,
            view_names::GAMES_PARTICIPATION,
            view_names::NATION_MEDALS,
            view_names::TOP_ATHLETES,
            view_names::SPORT_PARTICIPATION,
            view_names::GLOBAL_SUMMARY,
        ];

        for table in all_tables {
            for extension in ["csv", "parquet"] {
                let path = self.output_dir.join(table_filename(table, extension));
                if path.exists() {
                    std::fs::remove_file(&path).map_err(|e| {
                        Error::io(format!("Failed to truncate {}", path.display()), e)
                    })?;
                    debug!("Truncated {}", path.display());
                }
            }
        }
        Ok(())
    }

    /// Write one table in the configured format
    fn write_table(&self, name: &str, frame: &mut DataFrame) -> Result<PathBuf> {
        let path = self
            .output_dir
            .join(table_filename(name, self.config.format.extension()));

        match self.config.format {
            ExportFormat::Csv => write_csv(&path, frame)?,
            ExportFormat::Parquet => write_parquet(&path, frame)?,
        }

        debug!("Wrote {} rows to {}", frame.height(), path.display());
        Ok(path)
    }

    /// The output directory this writer targets
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

fn write_csv(path: &Path, frame: &mut DataFrame) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(frame)
        .map_err(|e| Error::export(format!("CSV write failed for {}", path.display()), e))?;
    Ok(())
}

fn write_parquet(path: &Path, frame: &mut DataFrame) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
    ParquetWriter::new(file)
        .with_compression(ParquetCompression::Snappy)
        .finish(frame)
        .map_err(|e| Error::export(format!("Parquet write failed for {}", path.display()), e))?;
    Ok(())
}
