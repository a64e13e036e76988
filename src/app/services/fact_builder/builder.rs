//! Fact row emission and natural-key resolution
//!
//! The resolution step never fans out and never drops: exactly one fact row
//! is produced per cleansed record, whatever the lookup outcomes.

use crate::app::models::{CleanResult, FactResult};
use crate::app::services::dimension_builder::DimensionLookups;
use indicatif::ProgressBar;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::stats::FactStats;

/// Result of one fact build
#[derive(Debug, Clone, Default)]
pub struct FactBuild {
    pub facts: Vec<FactResult>,
    pub stats: FactStats,
}

/// Fact builder for one pipeline run
#[derive(Debug, Default)]
pub struct FactBuilder;

impl FactBuilder {
    /// Create a new fact builder
    pub fn new() -> Self {
        Self
    }

    /// Resolve every cleansed record against the rebuilt dimensions.
    ///
    /// The lookups must come from the dimension rebuild of the same run;
    /// the orchestrator guarantees dimensions are complete before this
    /// runs.
    pub fn build(
        &self,
        records: &[CleanResult],
        lookups: &DimensionLookups,
        progress: Option<&ProgressBar>,
    ) -> FactBuild {
        let start = Instant::now();
        let mut stats = FactStats::new();
        stats.input_records = records.len();

        let mut facts = Vec::with_capacity(records.len());
        for record in records {
            facts.push(self.resolve_record(record, lookups, &mut stats));
            if let Some(pb) = progress {
                pb.inc(1);
            }
        }

        stats.facts_emitted = facts.len();
        stats.elapsed = start.elapsed();

        if stats.mandatory_anomalies() > 0 {
            warn!(
                "{} fact rows have unresolved mandatory relationships; \
                 upstream data integrity needs attention",
                stats.mandatory_anomalies()
            );
        }
        info!("{}", stats.summary());

        FactBuild { facts, stats }
    }

    /// Resolve one record into one fact row
    fn resolve_record(
        &self,
        record: &CleanResult,
        lookups: &DimensionLookups,
        stats: &mut FactStats,
    ) -> FactResult {
        // Mandatory subject relationship
        let athlete_sk = record
            .athlete_id
            .and_then(|id| lookups.athletes.get(&id));
        if athlete_sk.is_none() {
            stats.missing_athlete_keys += 1;
            debug!(
                "Result {:?}: athlete {:?} not found in subject dimension",
                record.result_id, record.athlete_id
            );
        }

        // Mandatory event-grouping relationship
        let games_sk = record.edition_id.and_then(|id| lookups.games.get(&id));
        if games_sk.is_none() {
            stats.missing_games_keys += 1;
            debug!(
                "Result {:?}: edition {:?} not found in games dimension",
                record.result_id, record.edition_id
            );
        }

        // Optional specific-event relationship (non-filtering lookup)
        let event_sk = match (&record.sport, &record.event) {
            (Some(sport), Some(event)) => {
                lookups.events.get(&(sport.clone(), event.clone()))
            }
            _ => None,
        };
        if event_sk.is_none() {
            stats.events_unresolved += 1;
        }

        // Optional affiliation relationship (non-filtering lookup)
        let country_sk = record
            .noc
            .as_ref()
            .and_then(|noc| lookups.countries.get(noc));
        if country_sk.is_none() {
            stats.countries_unresolved += 1;
        }

        FactResult {
            result_id: record.result_id,
            athlete_sk,
            games_sk,
            event_sk,
            country_sk,
            rank: record.rank,
            tie: record.tie,
            medal: record.medal,
            team_event: record.team_event,
        }
    }
}
