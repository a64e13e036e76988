//! Validate command implementation
//!
//! Integrity checks over a previously exported warehouse: surrogate
//! uniqueness per dimension, referential consistency of every fact
//! relationship, and visibility of mandatory-relationship anomalies.
//! Anomalies are reported, not failures; dangling or duplicate surrogate
//! keys fail the run.

use super::shared::setup_logging;
use crate::cli::args::ValidateArgs;
use crate::constants::{columns, table_filename, tables};
use crate::{Error, Result};
use colored::Colorize;
use polars::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Validate command runner
pub async fn run_validate(args: ValidateArgs) -> Result<()> {
    setup_logging(args.log_level())?;

    let warehouse_dir = args.warehouse_dir();
    info!("Validating warehouse at {}", warehouse_dir.display());

    let athletes = read_table(&warehouse_dir, tables::DIM_ATHLETES)?;
    let games = read_table(&warehouse_dir, tables::DIM_GAMES)?;
    let events = read_table(&warehouse_dir, tables::DIM_EVENTS)?;
    let countries = read_table(&warehouse_dir, tables::DIM_COUNTRIES)?;
    let facts = read_table(&warehouse_dir, tables::FACT_RESULTS)?;

    let mut failures = Vec::new();

    // Surrogate identities must be unique and non-null within each dimension
    for (name, frame, key) in [
        (tables::DIM_ATHLETES, &athletes, columns::ATHLETE_SK),
        (tables::DIM_GAMES, &games, columns::GAMES_SK),
        (tables::DIM_EVENTS, &events, columns::EVENT_SK),
        (tables::DIM_COUNTRIES, &countries, columns::COUNTRY_SK),
    ] {
        check_surrogates(name, frame, key, &mut failures)?;
    }

    // Every resolved fact relationship must point at an existing row
    for (dimension, frame, key) in [
        (tables::DIM_ATHLETES, &athletes, columns::ATHLETE_SK),
        (tables::DIM_GAMES, &games, columns::GAMES_SK),
        (tables::DIM_EVENTS, &events, columns::EVENT_SK),
        (tables::DIM_COUNTRIES, &countries, columns::COUNTRY_SK),
    ] {
        check_references(&facts, dimension, frame, key, &mut failures)?;
    }

    // Mandatory-relationship anomalies are surfaced, not failed
    let missing_athletes = null_count(&facts, columns::ATHLETE_SK)?;
    let missing_games = null_count(&facts, columns::GAMES_SK)?;
    let absent_events = null_count(&facts, columns::EVENT_SK)?;
    let absent_countries = null_count(&facts, columns::COUNTRY_SK)?;

    if missing_athletes + missing_games > 0 {
        warn!(
            "{} fact rows with unresolved mandatory relationships ({} subject, {} grouping)",
            missing_athletes + missing_games,
            missing_athletes,
            missing_games
        );
    }

    if !args.quiet {
        println!();
        println!("{}", "Warehouse validation".bold());
        println!("  Fact rows:               {}", facts.height());
        println!(
            "  Dimension rows:          {}",
            athletes.height() + games.height() + events.height() + countries.height()
        );
        println!("  Mandatory anomalies:     {}", missing_athletes + missing_games);
        println!(
            "  Optional absences:       {} events, {} affiliations",
            absent_events, absent_countries
        );
        println!();
        if failures.is_empty() {
            println!("{}", "All integrity checks passed".green().bold());
        } else {
            for failure in &failures {
                println!("{} {}", "failed:".red().bold(), failure);
            }
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(Error::data_validation(format!(
            "{} integrity check(s) failed",
            failures.len()
        )))
    }
}

/// Read one warehouse table, accepting either export format
fn read_table(warehouse_dir: &Path, name: &str) -> Result<DataFrame> {
    let csv_path = warehouse_dir.join(table_filename(name, "csv"));
    let parquet_path = warehouse_dir.join(table_filename(name, "parquet"));

    if csv_path.exists() {
        let frame = LazyCsvReader::new(&csv_path)
            .with_has_header(true)
            .finish()?
            .collect()?;
        Ok(frame)
    } else if parquet_path.exists() {
        let frame =
            LazyFrame::scan_parquet(&parquet_path, ScanArgsParquet::default())?.collect()?;
        Ok(frame)
    } else {
        Err(Error::input_not_found(csv_path.display().to_string()))
    }
}

/// Surrogate key column as i64 values, format-independent
fn key_values(frame: &DataFrame, key: &str) -> Result<Vec<Option<i64>>> {
    let values = frame
        .column(key)?
        .cast(&DataType::Int64)?
        .i64()?
        .into_iter()
        .collect();
    Ok(values)
}

/// Null count of one column
fn null_count(frame: &DataFrame, column: &str) -> Result<usize> {
    Ok(frame.column(column)?.null_count())
}

/// Check surrogate uniqueness and non-nullness for one dimension
fn check_surrogates(
    name: &str,
    frame: &DataFrame,
    key: &str,
    failures: &mut Vec<String>,
) -> Result<()> {
    let values = key_values(frame, key)?;

    if values.iter().any(|value| value.is_none()) {
        failures.push(format!("{}: null surrogate identity", name));
    }

    let distinct: HashSet<_> = values.iter().flatten().collect();
    if distinct.len() != values.iter().flatten().count() {
        failures.push(format!("{}: duplicate surrogate identities", name));
    }

    info!("{}: {} rows, surrogates checked", name, frame.height());
    Ok(())
}

/// Check that every resolved fact key exists in its dimension
fn check_references(
    facts: &DataFrame,
    dimension: &str,
    frame: &DataFrame,
    key: &str,
    failures: &mut Vec<String>,
) -> Result<()> {
    let known: HashSet<i64> = key_values(frame, key)?.into_iter().flatten().collect();
    let dangling = key_values(facts, key)?
        .into_iter()
        .flatten()
        .filter(|value| !known.contains(value))
        .count();

    if dangling > 0 {
        failures.push(format!(
            "{} fact keys reference missing {} rows",
            dangling, dimension
        ));
    }
    Ok(())
}
