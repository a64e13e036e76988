//! Entity struct to DataFrame conversion
//!
//! Builds one DataFrame per warehouse table from the in-memory entity
//! vectors. Dates export as ISO-8601 strings and award tiers as their
//! labels, keeping the CSV and Parquet column sets identical.

use crate::app::models::{DimensionSet, FactResult, PopulationYear};
use crate::constants::columns;
use crate::Result;
use polars::prelude::*;

/// The full set of warehouse frames for one run
#[derive(Debug, Clone)]
pub struct WarehouseFrames {
    pub athletes: DataFrame,
    pub games: DataFrame,
    pub events: DataFrame,
    pub countries: DataFrame,
    pub facts: DataFrame,
    pub populations: DataFrame,
}

impl WarehouseFrames {
    /// Build all frames from the rebuilt entities
    pub fn build(
        dimensions: &DimensionSet,
        facts: &[FactResult],
        populations: &[PopulationYear],
    ) -> Result<Self> {
        Ok(Self {
            athletes: athletes_frame(dimensions)?,
            games: games_frame(dimensions)?,
            events: events_frame(dimensions)?,
            countries: countries_frame(dimensions)?,
            facts: facts_frame(facts)?,
            populations: populations_frame(populations)?,
        })
    }
}

/// Athlete dimension frame
pub fn athletes_frame(dimensions: &DimensionSet) -> Result<DataFrame> {
    let rows = &dimensions.athletes;
    let frame = df!(
        columns::ATHLETE_SK => rows.iter().map(|r| r.athlete_sk).collect::<Vec<u32>>(),
        columns::ATHLETE_ID => rows.iter().map(|r| r.athlete_id).collect::<Vec<i64>>(),
        columns::NAME => rows.iter().map(|r| r.name.clone()).collect::<Vec<Option<String>>>(),
        columns::SEX => rows.iter().map(|r| r.sex.clone()).collect::<Vec<Option<String>>>(),
        columns::BIRTH_DATE => rows
            .iter()
            .map(|r| r.birth_date.map(|d| d.to_string()))
            .collect::<Vec<Option<String>>>(),
        columns::BIRTH_CITY => rows.iter().map(|r| r.birth_city.clone()).collect::<Vec<Option<String>>>(),
        columns::BIRTH_REGION => rows.iter().map(|r| r.birth_region.clone()).collect::<Vec<Option<String>>>(),
        columns::BIRTH_COUNTRY_NOC => rows
            .iter()
            .map(|r| r.birth_country_noc.clone())
            .collect::<Vec<Option<String>>>(),
        columns::HEIGHT_CM => rows.iter().map(|r| r.height_cm).collect::<Vec<Option<f64>>>(),
        columns::WEIGHT_KG => rows.iter().map(|r| r.weight_kg).collect::<Vec<Option<f64>>>(),
        columns::LATITUDE => rows.iter().map(|r| r.latitude).collect::<Vec<Option<f64>>>(),
        columns::LONGITUDE => rows.iter().map(|r| r.longitude).collect::<Vec<Option<f64>>>(),
    )?;
    Ok(frame)
}

/// Games dimension frame
pub fn games_frame(dimensions: &DimensionSet) -> Result<DataFrame> {
    let rows = &dimensions.games;
    let frame = df!(
        columns::GAMES_SK => rows.iter().map(|r| r.games_sk).collect::<Vec<u32>>(),
        columns::EDITION_ID => rows.iter().map(|r| r.edition_id).collect::<Vec<i64>>(),
        columns::EDITION => rows.iter().map(|r| r.edition.clone()).collect::<Vec<Option<String>>>(),
        columns::YEAR => rows.iter().map(|r| r.year).collect::<Vec<Option<i32>>>(),
        columns::SEASON => rows.iter().map(|r| r.season.clone()).collect::<Vec<Option<String>>>(),
    )?;
    Ok(frame)
}

/// Event dimension frame
pub fn events_frame(dimensions: &DimensionSet) -> Result<DataFrame> {
    let rows = &dimensions.events;
    let frame = df!(
        columns::EVENT_SK => rows.iter().map(|r| r.event_sk).collect::<Vec<u32>>(),
        columns::SPORT => rows.iter().map(|r| r.sport.clone()).collect::<Vec<String>>(),
        columns::EVENT => rows.iter().map(|r| r.event.clone()).collect::<Vec<String>>(),
    )?;
    Ok(frame)
}

/// Country dimension frame
pub fn countries_frame(dimensions: &DimensionSet) -> Result<DataFrame> {
    let rows = &dimensions.countries;
    let frame = df!(
        columns::COUNTRY_SK => rows.iter().map(|r| r.country_sk).collect::<Vec<u32>>(),
        columns::NOC => rows.iter().map(|r| r.noc.clone()).collect::<Vec<String>>(),
        columns::REGION => rows.iter().map(|r| r.region.clone()).collect::<Vec<Option<String>>>(),
        columns::NOTES => rows.iter().map(|r| r.notes.clone()).collect::<Vec<Option<String>>>(),
    )?;
    Ok(frame)
}

/// Fact frame; the absent-relationship marker exports as a null key
pub fn facts_frame(facts: &[FactResult]) -> Result<DataFrame> {
    let frame = df!(
        columns::RESULT_ID => facts.iter().map(|f| f.result_id).collect::<Vec<Option<i64>>>(),
        columns::ATHLETE_SK => facts.iter().map(|f| f.athlete_sk).collect::<Vec<Option<u32>>>(),
        columns::GAMES_SK => facts.iter().map(|f| f.games_sk).collect::<Vec<Option<u32>>>(),
        columns::EVENT_SK => facts.iter().map(|f| f.event_sk).collect::<Vec<Option<u32>>>(),
        columns::COUNTRY_SK => facts.iter().map(|f| f.country_sk).collect::<Vec<Option<u32>>>(),
        columns::RANK => facts.iter().map(|f| f.rank).collect::<Vec<Option<i32>>>(),
        columns::TIE => facts.iter().map(|f| f.tie).collect::<Vec<Option<bool>>>(),
        columns::MEDAL => facts
            .iter()
            .map(|f| f.medal.map(|m| m.label().to_string()))
            .collect::<Vec<Option<String>>>(),
        columns::TEAM_EVENT => facts.iter().map(|f| f.team_event).collect::<Vec<Option<bool>>>(),
    )?;
    Ok(frame)
}

/// Long-form population reference frame
pub fn populations_frame(populations: &[PopulationYear]) -> Result<DataFrame> {
    let frame = df!(
        columns::COUNTRY => populations.iter().map(|p| p.country.clone()).collect::<Vec<Option<String>>>(),
        columns::COUNTRY_CODE => populations
            .iter()
            .map(|p| p.country_code.clone())
            .collect::<Vec<Option<String>>>(),
        columns::YEAR => populations.iter().map(|p| p.year).collect::<Vec<i32>>(),
        columns::POPULATION => populations.iter().map(|p| p.population).collect::<Vec<i64>>(),
    )?;
    Ok(frame)
}
