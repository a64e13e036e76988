//! Field parsing utilities for staged record cleanup
//!
//! This module provides the smaller single-field parsers used by the
//! normalization stage: unit-qualified measurements, rank fragments with
//! tie markers, event-period splitting, name cleanup, and code
//! normalization. Like the date and location parsers, every function here
//! is pure and degrades to an absent value rather than failing.

use crate::app::models::MedalTier;
use crate::constants::NAME_SEPARATOR_ARTIFACTS;
use regex::Regex;
use std::sync::LazyLock;

/// Number immediately preceding the height unit ("180 cm")
static HEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*cm\b").unwrap());

/// Number immediately preceding the weight unit ("75 kg")
static WEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*kg\b").unwrap());

/// Optional tie marker followed by a decimal rank ("=3", "7.0")
static RANK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(=?)\s*(\d+(?:\.\d+)?)").unwrap());

/// Leading 4-digit year plus trailing season/type label ("1908 Summer Olympics")
static EDITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{4})\s+(.+?)\s*$").unwrap());

/// Extract height in centimeters from a combined measurements fragment.
///
/// Only the number adjacent to the `cm` suffix is taken, so a combined
/// "180 cm / 75 kg" fragment never conflates height and weight. Returns
/// `None` when no unit-qualified number is present.
pub fn parse_height_cm(text: &str) -> Option<f64> {
    HEIGHT_RE
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

/// Extract weight in kilograms from a combined measurements fragment
pub fn parse_weight_kg(text: &str) -> Option<f64> {
    WEIGHT_RE
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

/// Result of parsing a rank/position fragment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankParse {
    /// Finishing rank; absent when the fragment held no numeric content
    pub rank: Option<i32>,

    /// Tie indicator. `Some(true)` for a "=" prefix, `Some(false)` for a
    /// plain numeric rank. `None` when no rank was parsed: a fragment with
    /// no numeric content makes no claim about tie status.
    pub tie: Option<bool>,
}

/// Parse a rank fragment with an optional leading tie marker.
///
/// `"=3"` yields rank 3 with tie true; `"7.0"` yields rank 7 with tie
/// false; `"DNF"` yields absent rank and absent tie.
pub fn parse_rank(text: &str) -> RankParse {
    match RANK_RE.captures(text) {
        Some(caps) => {
            let value: Option<f64> = caps[2].parse().ok();
            match value {
                Some(v) => RankParse {
                    rank: Some(v as i32),
                    tie: Some(!caps[1].is_empty()),
                },
                None => RankParse::default(),
            }
        }
        None => RankParse::default(),
    }
}

/// Result of splitting an event-period fragment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditionParse {
    /// Leading 4-digit year
    pub year: Option<i32>,

    /// Trailing season/type label, e.g. "Summer Olympics"
    pub season: Option<String>,
}

/// Split an event-period fragment into year and season label.
///
/// Unparseable fragments yield absent for both derived fields; the caller
/// retains the row either way.
pub fn parse_edition(text: &str) -> EditionParse {
    match EDITION_RE.captures(text) {
        Some(caps) => EditionParse {
            year: caps[1].parse().ok(),
            season: Some(caps[2].to_string()),
        },
        None => EditionParse::default(),
    }
}

/// Clean a free-text name field: trim, collapse separator artifacts and
/// repeated whitespace, and apply title-casing. Returns `None` for fields
/// that are empty after cleanup.
pub fn clean_name(text: &str) -> Option<String> {
    let replaced: String = text
        .chars()
        .map(|c| {
            if NAME_SEPARATOR_ARTIFACTS.contains(&c) {
                ' '
            } else {
                c
            }
        })
        .collect();

    let cleaned = replaced
        .split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ");

    if cleaned.is_empty() { None } else { Some(cleaned) }
}

/// Upper-case a reference identifier for consistent join keys.
/// Empty or whitespace-only input is absent, never an empty string.
pub fn normalize_code(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_ascii_uppercase())
    }
}

/// Parse a medal label into an award tier; anything unrecognized is absent
pub fn parse_medal(text: &str) -> Option<MedalTier> {
    text.parse().ok()
}

/// Parse an optional integer field; non-numeric text is absent
pub fn parse_optional_i64(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Parse an optional float field; non-numeric text is absent
pub fn parse_optional_f64(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

/// Parse an optional boolean flag ("True"/"False"/"1"/"0")
pub fn parse_optional_flag(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Title-case one whitespace-delimited word, restarting capitalization
/// after hyphens and apostrophes ("jean-françois" -> "Jean-François")
fn title_case_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut capitalize_next = true;
    for c in word.chars() {
        if capitalize_next && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.extend(c.to_lowercase());
        }
        if c == '-' || c == '\'' {
            capitalize_next = true;
        }
    }
    out
}
