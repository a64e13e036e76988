//! CSV bulk loading for the staged inputs
//!
//! Each loader reads one input file into raw record structs, addressing
//! columns by header name so column order never matters. Missing columns
//! stage as empty strings; the normalization stage decides what empty
//! means. Structural CSV errors (unreadable file, malformed quoting) are
//! stage-fatal.

use crate::app::models::{RawAthleteBio, RawAthleteGeo, RawNocRegion, RawPopulationRow, RawResult};
use crate::{Error, Result, constants};
use csv::StringRecord;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Case-insensitive header-name to column-index mapping for one input file
struct HeaderMap {
    name_to_index: HashMap<String, usize>,
}

impl HeaderMap {
    fn from_headers(headers: &StringRecord) -> Self {
        let name_to_index = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.trim().to_ascii_lowercase(), index))
            .collect();
        Self { name_to_index }
    }

    /// Field value by column name, staged as-is; empty when the column is
    /// absent from this file
    fn field<'a>(&self, record: &'a StringRecord, name: &str) -> &'a str {
        self.name_to_index
            .get(name)
            .and_then(|&index| record.get(index))
            .unwrap_or("")
    }

    /// Header names that look like population year columns, with indices
    fn year_columns(&self) -> Vec<(String, usize)> {
        let mut columns: Vec<(String, usize)> = self
            .name_to_index
            .iter()
            .filter(|(name, _)| constants::is_year_column(name))
            .map(|(name, &index)| (name.clone(), index))
            .collect();
        columns.sort();
        columns
    }
}

/// Open a CSV reader for a staged input file
fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    if !path.exists() {
        return Err(Error::input_not_found(path.display().to_string()));
    }

    csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                "Failed to open staged input",
                Some(e),
            )
        })
}

/// Read every record of a staged file through a per-row constructor
fn load_records<T>(
    path: &Path,
    build: impl Fn(&HeaderMap, &StringRecord) -> T,
) -> Result<Vec<T>> {
    let mut reader = open_reader(path)?;
    let headers = reader
        .headers()
        .map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                "Failed to read header row",
                Some(e),
            )
        })?
        .clone();
    let mapping = HeaderMap::from_headers(&headers);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            Error::csv_parsing(path.display().to_string(), "Malformed CSV record", Some(e))
        })?;
        rows.push(build(&mapping, &record));
    }

    debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load the athlete biography input
pub fn load_athlete_bios(path: &Path) -> Result<Vec<RawAthleteBio>> {
    load_records(path, |mapping, record| RawAthleteBio {
        athlete_id: mapping.field(record, "athlete_id").to_string(),
        name: mapping.field(record, "name").to_string(),
        sex: mapping.field(record, "sex").to_string(),
        born: mapping.field(record, "born").to_string(),
        measurements: mapping.field(record, "measurements").to_string(),
        country: mapping.field(record, "country").to_string(),
        country_noc: mapping.field(record, "country_noc").to_string(),
    })
}

/// Load the geocoordinate enrichment input
pub fn load_athlete_geos(path: &Path) -> Result<Vec<RawAthleteGeo>> {
    load_records(path, |mapping, record| RawAthleteGeo {
        athlete_id: mapping.field(record, "athlete_id").to_string(),
        born_city: mapping.field(record, "born_city").to_string(),
        born_region: mapping.field(record, "born_region").to_string(),
        born_country: mapping.field(record, "born_country").to_string(),
        latitude: mapping.field(record, "lat").to_string(),
        longitude: mapping.field(record, "lon").to_string(),
    })
}

/// Load the NOC-to-region reference input
pub fn load_noc_regions(path: &Path) -> Result<Vec<RawNocRegion>> {
    load_records(path, |mapping, record| RawNocRegion {
        noc: mapping.field(record, "noc").to_string(),
        region: mapping.field(record, "region").to_string(),
        notes: mapping.field(record, "notes").to_string(),
    })
}

/// Load the population reference input, keeping its wide one-column-per-year
/// shape. The year set comes from the file's own header, so extending the
/// source range needs no code change.
pub fn load_populations(path: &Path) -> Result<Vec<RawPopulationRow>> {
    load_records(path, |mapping, record| {
        let year_values = mapping
            .year_columns()
            .into_iter()
            .map(|(year, index)| {
                let value = record.get(index).unwrap_or("").to_string();
                (year, value)
            })
            .collect();

        RawPopulationRow {
            country: mapping.field(record, "country").to_string(),
            country_code: mapping.field(record, "country_code").to_string(),
            year_values,
        }
    })
}

/// Load the competition result input
pub fn load_results(path: &Path) -> Result<Vec<RawResult>> {
    load_records(path, |mapping, record| RawResult {
        edition: mapping.field(record, "edition").to_string(),
        edition_id: mapping.field(record, "edition_id").to_string(),
        country_noc: mapping.field(record, "country_noc").to_string(),
        sport: mapping.field(record, "sport").to_string(),
        event: mapping.field(record, "event").to_string(),
        result_id: mapping.field(record, "result_id").to_string(),
        athlete: mapping.field(record, "athlete").to_string(),
        athlete_id: mapping.field(record, "athlete_id").to_string(),
        pos: mapping.field(record, "pos").to_string(),
        medal: mapping.field(record, "medal").to_string(),
        is_team_sport: mapping.field(record, "isteamsport").to_string(),
    })
}
