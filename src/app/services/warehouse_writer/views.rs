//! Read-only aggregate views over the star schema
//!
//! These views are consumers of the fact/dimension contracts, computed with
//! lazy queries over the warehouse frames and exported alongside them. Their
//! aggregation logic never feeds back into the pipeline.

use crate::app::models::MedalTier;
use crate::config::ViewConfig;
use crate::constants::{columns, views};
use crate::Result;
use polars::prelude::*;

use super::frames::WarehouseFrames;

/// Compute all aggregate views in export order
pub fn build_views(
    frames: &WarehouseFrames,
    config: &ViewConfig,
) -> Result<Vec<(&'static str, DataFrame)>> {
    Ok(vec![
        (views::GAMES_PARTICIPATION, games_participation(frames)?),
        (views::NATION_MEDALS, nation_medals(frames, config)?),
        (views::TOP_ATHLETES, top_athletes(frames, config)?),
        (views::SPORT_PARTICIPATION, sport_participation(frames)?),
        (views::GLOBAL_SUMMARY, global_summary(frames)?),
    ])
}

/// Per-games participation counts
fn games_participation(frames: &WarehouseFrames) -> Result<DataFrame> {
    let frame = frames
        .facts
        .clone()
        .lazy()
        .join(
            frames.games.clone().lazy(),
            [col(columns::GAMES_SK)],
            [col(columns::GAMES_SK)],
            JoinArgs::new(JoinType::Inner),
        )
        .group_by([
            col(columns::EDITION_ID),
            col(columns::EDITION),
            col(columns::YEAR),
            col(columns::SEASON),
        ])
        .agg([
            len().alias("entries"),
            col(columns::ATHLETE_SK).n_unique().alias("participants"),
        ])
        .sort([columns::YEAR], SortMultipleOptions::default())
        .collect()?;
    Ok(frame)
}

/// Per-nation medal totals and medal-per-participant ratio, restricted to
/// nations with at least the configured participant count
fn nation_medals(frames: &WarehouseFrames, config: &ViewConfig) -> Result<DataFrame> {
    let frame = frames
        .facts
        .clone()
        .lazy()
        .join(
            frames.countries.clone().lazy(),
            [col(columns::COUNTRY_SK)],
            [col(columns::COUNTRY_SK)],
            JoinArgs::new(JoinType::Inner),
        )
        .group_by([col(columns::NOC), col(columns::REGION)])
        .agg([
            col(columns::ATHLETE_SK).n_unique().alias("participants"),
            col(columns::MEDAL)
                .eq(lit(MedalTier::Gold.label()))
                .sum()
                .alias("gold_medals"),
            col(columns::MEDAL)
                .eq(lit(MedalTier::Silver.label()))
                .sum()
                .alias("silver_medals"),
            col(columns::MEDAL)
                .eq(lit(MedalTier::Bronze.label()))
                .sum()
                .alias("bronze_medals"),
            col(columns::MEDAL).is_not_null().sum().alias("total_medals"),
        ])
        .with_column(
            (col("total_medals").cast(DataType::Float64)
                / col("participants").cast(DataType::Float64))
            .alias("medals_per_participant"),
        )
        .filter(col("participants").gt_eq(lit(config.min_nation_participants as u32)))
        .sort(
            ["total_medals"],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .collect()?;
    Ok(frame)
}

/// All-time most-decorated individuals
fn top_athletes(frames: &WarehouseFrames, config: &ViewConfig) -> Result<DataFrame> {
    let frame = frames
        .facts
        .clone()
        .lazy()
        .filter(col(columns::MEDAL).is_not_null())
        .join(
            frames.athletes.clone().lazy(),
            [col(columns::ATHLETE_SK)],
            [col(columns::ATHLETE_SK)],
            JoinArgs::new(JoinType::Inner),
        )
        .group_by([col(columns::ATHLETE_ID), col(columns::NAME)])
        .agg([
            col(columns::MEDAL)
                .eq(lit(MedalTier::Gold.label()))
                .sum()
                .alias("gold_medals"),
            col(columns::MEDAL)
                .eq(lit(MedalTier::Silver.label()))
                .sum()
                .alias("silver_medals"),
            col(columns::MEDAL)
                .eq(lit(MedalTier::Bronze.label()))
                .sum()
                .alias("bronze_medals"),
            len().alias("total_medals"),
        ])
        .sort(
            ["total_medals", "gold_medals"],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .limit(config.top_athletes_limit as u32)
        .collect()?;
    Ok(frame)
}

/// Per-discipline participation counts
fn sport_participation(frames: &WarehouseFrames) -> Result<DataFrame> {
    let frame = frames
        .facts
        .clone()
        .lazy()
        .join(
            frames.events.clone().lazy(),
            [col(columns::EVENT_SK)],
            [col(columns::EVENT_SK)],
            JoinArgs::new(JoinType::Inner),
        )
        .group_by([col(columns::SPORT)])
        .agg([
            len().alias("entries"),
            col(columns::ATHLETE_SK).n_unique().alias("participants"),
            col(columns::EVENT).n_unique().alias("events"),
        ])
        .sort(
            ["entries"],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .collect()?;
    Ok(frame)
}

/// Single-row global summary of the rebuilt warehouse
fn global_summary(frames: &WarehouseFrames) -> Result<DataFrame> {
    let medal_column = frames.facts.column(columns::MEDAL)?;
    let total_medals = (medal_column.len() - medal_column.null_count()) as u64;

    let frame = df!(
        "total_facts" => [frames.facts.height() as u64],
        "total_athletes" => [frames.athletes.height() as u64],
        "total_games" => [frames.games.height() as u64],
        "total_events" => [frames.events.height() as u64],
        "total_countries" => [frames.countries.height() as u64],
        "total_medals" => [total_medals],
    )?;
    Ok(frame)
}
