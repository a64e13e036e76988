//! Tests for warehouse table output

use super::build_test_warehouse;
use crate::app::services::warehouse_writer::WarehouseWriter;
use crate::config::{ExportConfig, ExportFormat, ViewConfig};
use crate::constants::{table_filename, tables, views};
use std::fs;
use tempfile::TempDir;

fn csv_config() -> ExportConfig {
    ExportConfig {
        format: ExportFormat::Csv,
        include_views: true,
        include_populations: true,
    }
}

#[test]
fn test_writes_all_tables_and_views() {
    let dir = TempDir::new().unwrap();
    let (dimensions, facts, populations) = build_test_warehouse();

    let writer = WarehouseWriter::new(dir.path().to_path_buf(), csv_config());
    let stats = writer
        .write_warehouse(&dimensions, &facts, &populations, &ViewConfig::default())
        .unwrap();

    assert_eq!(stats.tables_written, 6);
    assert_eq!(stats.views_written, 5);

    for table in [
        tables::DIM_ATHLETES,
        tables::DIM_GAMES,
        tables::DIM_EVENTS,
        tables::DIM_COUNTRIES,
        tables::FACT_RESULTS,
        tables::REF_POPULATIONS,
        views::GLOBAL_SUMMARY,
    ] {
        assert!(
            dir.path().join(table_filename(table, "csv")).exists(),
            "missing table {}",
            table
        );
    }
}

#[test]
fn test_fact_row_count_preserved_in_output() {
    let dir = TempDir::new().unwrap();
    let (dimensions, facts, populations) = build_test_warehouse();

    let writer = WarehouseWriter::new(dir.path().to_path_buf(), csv_config());
    writer
        .write_warehouse(&dimensions, &facts, &populations, &ViewConfig::default())
        .unwrap();

    let content =
        fs::read_to_string(dir.path().join(table_filename(tables::FACT_RESULTS, "csv"))).unwrap();
    // Header plus one line per fact row
    assert_eq!(content.lines().count(), facts.len() + 1);
}

#[test]
fn test_parquet_output() {
    let dir = TempDir::new().unwrap();
    let (dimensions, facts, populations) = build_test_warehouse();

    let config = ExportConfig {
        format: ExportFormat::Parquet,
        include_views: false,
        include_populations: false,
    };
    let writer = WarehouseWriter::new(dir.path().to_path_buf(), config);
    let stats = writer
        .write_warehouse(&dimensions, &facts, &populations, &ViewConfig::default())
        .unwrap();

    assert_eq!(stats.tables_written, 5);
    assert_eq!(stats.views_written, 0);
    assert!(
        dir.path()
            .join(table_filename(tables::FACT_RESULTS, "parquet"))
            .exists()
    );
    assert!(
        !dir.path()
            .join(table_filename(tables::REF_POPULATIONS, "parquet"))
            .exists()
    );
}

#[test]
fn test_rerun_fully_replaces_previous_output() {
    let dir = TempDir::new().unwrap();
    let (dimensions, facts, populations) = build_test_warehouse();

    // First run in Parquet, second in CSV: the Parquet files must be
    // truncated so the warehouse never mixes generations
    let parquet_writer = WarehouseWriter::new(
        dir.path().to_path_buf(),
        ExportConfig {
            format: ExportFormat::Parquet,
            ..csv_config()
        },
    );
    parquet_writer
        .write_warehouse(&dimensions, &facts, &populations, &ViewConfig::default())
        .unwrap();

    let csv_writer = WarehouseWriter::new(dir.path().to_path_buf(), csv_config());
    csv_writer
        .write_warehouse(&dimensions, &facts, &populations, &ViewConfig::default())
        .unwrap();

    assert!(
        !dir.path()
            .join(table_filename(tables::FACT_RESULTS, "parquet"))
            .exists()
    );
    assert!(
        dir.path()
            .join(table_filename(tables::FACT_RESULTS, "csv"))
            .exists()
    );
}

#[test]
fn test_creates_output_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("warehouse").join("gold");
    let (dimensions, facts, populations) = build_test_warehouse();

    let writer = WarehouseWriter::new(nested.clone(), csv_config());
    writer
        .write_warehouse(&dimensions, &facts, &populations, &ViewConfig::default())
        .unwrap();

    assert!(nested.join(table_filename(tables::DIM_ATHLETES, "csv")).exists());
}
