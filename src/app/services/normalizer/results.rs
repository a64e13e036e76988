//! Competition result normalization
//!
//! Cleanses the staged result rows: the event-period fragment splits into
//! year and season label, the pos fragment parses into rank and tie
//! indicator, medals map to award tiers, and the representing NOC is
//! upper-cased for downstream joins. Rows are never dropped here.

use crate::app::models::{CleanResult, RawResult};
use crate::app::services::text_normalizer::{
    normalize_code, parse_edition, parse_medal, parse_optional_flag, parse_optional_i64,
    parse_rank,
};
use indicatif::ProgressBar;

use super::stats::NormalizationStats;

/// Normalize staged result rows into cleansed participation records
pub fn normalize_results(
    raw: Vec<RawResult>,
    stats: &mut NormalizationStats,
    progress: Option<&ProgressBar>,
) -> Vec<CleanResult> {
    stats.results_in = raw.len();

    let mut cleansed = Vec::with_capacity(raw.len());
    for row in raw {
        let edition_parts = parse_edition(&row.edition);
        let rank_parts = parse_rank(&row.pos);
        let medal = parse_medal(&row.medal);

        if rank_parts.rank.is_none() {
            stats.ranks_absent += 1;
        }
        if edition_parts.year.is_none() {
            stats.editions_unparsed += 1;
        }
        if medal.is_some() {
            stats.medals_parsed += 1;
        }

        cleansed.push(CleanResult {
            result_id: parse_optional_i64(&row.result_id),
            athlete_id: parse_optional_i64(&row.athlete_id),
            edition_id: parse_optional_i64(&row.edition_id),
            edition: non_empty(&row.edition),
            year: edition_parts.year,
            season: edition_parts.season,
            sport: non_empty(&row.sport),
            event: non_empty(&row.event),
            noc: normalize_code(&row.country_noc),
            rank: rank_parts.rank,
            tie: rank_parts.tie,
            medal,
            team_event: parse_optional_flag(&row.is_team_sport),
        });

        if let Some(pb) = progress {
            pb.inc(1);
        }
    }

    cleansed
}

/// Trim a free-text field, mapping emptiness to absence
fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
