//! Date parsing for free-form biography fragments
//!
//! Source biography fields carry dates in several shapes: "1 April 1871 in
//! Stockholm", "May 1881", "circa 1923", "(1926 or 1927)", or a bare "1879".
//! This parser resolves them through an ordered list of (pattern, extractor)
//! rules evaluated in fixed precedence; the first rule whose pattern matches
//! decides the outcome, even when it decides "absent".
//!
//! Precedence order:
//! 1. Ambiguous year range ("1926 or 1927") - resolved to absent, never guessed
//! 2. Day + month name + year - exact date
//! 3. Month name + year - day imputed as the 1st
//! 4. Approximate year marker ("circa", "ca.", "c.") - January 1 of that year
//! 5. Bare 4-digit year - January 1
//!
//! The approximate-year rule sits above the bare-year rule so a fragment
//! containing both a marker and a year resolves via the marker.

use chrono::NaiveDate;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Outcome of applying one rule to a text fragment.
///
/// `Resolved` means the rule's pattern matched and its verdict is final,
/// including a `Resolved(None)` verdict for patterns that match but cannot
/// safely produce a date. `NoMatch` passes evaluation to the next rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleOutcome {
    Resolved(Option<NaiveDate>),
    NoMatch,
}

/// A single precedence rule: a pattern and a pure extractor over its captures
struct DateRule {
    name: &'static str,
    pattern: Regex,
    extract: fn(&Captures) -> Option<NaiveDate>,
}

impl DateRule {
    fn apply(&self, text: &str) -> RuleOutcome {
        match self.pattern.captures(text) {
            Some(caps) => RuleOutcome::Resolved((self.extract)(&caps)),
            None => RuleOutcome::NoMatch,
        }
    }
}

const MONTH_NAMES: &str =
    "January|February|March|April|May|June|July|August|September|October|November|December";

static RULES: LazyLock<Vec<DateRule>> = LazyLock::new(|| {
    vec![
        DateRule {
            name: "ambiguous-year-range",
            pattern: Regex::new(r"(?i)\b(\d{4})\s+or\s+(\d{4})\b").unwrap(),
            extract: |_| None,
        },
        DateRule {
            name: "day-month-year",
            pattern: Regex::new(&format!(r"(?i)\b(\d{{1,2}})\s+({})\s+(\d{{4}})\b", MONTH_NAMES))
                .unwrap(),
            extract: |caps| {
                let day: u32 = caps[1].parse().ok()?;
                let month = month_number(&caps[2])?;
                let year: i32 = caps[3].parse().ok()?;
                NaiveDate::from_ymd_opt(year, month, day)
            },
        },
        DateRule {
            name: "month-year",
            pattern: Regex::new(&format!(r"(?i)\b({})\s+(\d{{4}})\b", MONTH_NAMES)).unwrap(),
            extract: |caps| {
                let month = month_number(&caps[1])?;
                let year: i32 = caps[2].parse().ok()?;
                NaiveDate::from_ymd_opt(year, month, 1)
            },
        },
        DateRule {
            name: "approximate-year",
            pattern: Regex::new(r"(?i)\b(?:circa|ca\.|c\.)\s*\(?\s*(\d{4})\b").unwrap(),
            extract: |caps| {
                let year: i32 = caps[1].parse().ok()?;
                NaiveDate::from_ymd_opt(year, 1, 1)
            },
        },
        DateRule {
            name: "bare-year",
            pattern: Regex::new(r"\b(\d{4})\b").unwrap(),
            extract: |caps| {
                let year: i32 = caps[1].parse().ok()?;
                NaiveDate::from_ymd_opt(year, 1, 1)
            },
        },
    ]
});

/// Parse a free-form date fragment into a calendar date.
///
/// Returns `None` for fragments that match no recognized pattern, that match
/// the ambiguous year-range pattern, or that match a pattern but name an
/// invalid calendar date (e.g. "30 February 1900"). Never panics or errors
/// regardless of input.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    for rule in RULES.iter() {
        match rule.apply(text) {
            RuleOutcome::Resolved(date) => {
                tracing::trace!("date fragment '{}' resolved by rule '{}'", text, rule.name);
                return date;
            }
            RuleOutcome::NoMatch => continue,
        }
    }
    None
}

/// Map a month name (case-insensitive) to its 1-based number
fn month_number(name: &str) -> Option<u32> {
    match name.to_ascii_lowercase().as_str() {
        "january" => Some(1),
        "february" => Some(2),
        "march" => Some(3),
        "april" => Some(4),
        "may" => Some(5),
        "june" => Some(6),
        "july" => Some(7),
        "august" => Some(8),
        "september" => Some(9),
        "october" => Some(10),
        "november" => Some(11),
        "december" => Some(12),
        _ => None,
    }
}
