//! Location parsing for "in City, Region (CODE)" birthplace fragments
//!
//! Biography fragments carry birthplaces as free text of the form
//! `"... in Stockholm, Sverige (SWE)"`, sometimes with trailing qualifiers
//! and sometimes with a lone "?" standing in for an unknown city or region.
//!
//! The country code is extracted independently of the city/region pair: a
//! fragment with a parseable code but an unparseable city still yields the
//! code. The city/region pair itself is coupled the way the source data is
//! written: a placeholder in either position voids both, so the literal
//! placeholder never leaks into output and a half-known pair is not
//! guessed at.

use crate::constants::LOCATION_PLACEHOLDER;
use regex::Regex;
use std::sync::LazyLock;

/// The (city, region, country-code) triplet extracted from one fragment.
///
/// Every component is independently optional; the literal placeholder token
/// never survives into an output field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationParts {
    pub city: Option<String>,
    pub region: Option<String>,
    pub country_code: Option<String>,
}

/// First 3-letter parenthesized token anywhere in the fragment
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([A-Z]{3})\)").unwrap());

/// Everything after the "in" anchor
static IN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bin\s+(.*)$").unwrap());

/// Parse a birthplace fragment into its (city, region, country-code) parts.
///
/// - City: substring after "in" and before the first comma
/// - Region: substring between the first comma and the trailing
///   parenthesized code
/// - Country code: the first `(XXX)` token found anywhere in the fragment,
///   extracted whether or not the city/region pair parses
///
/// All extracted text is trimmed before placeholder normalization. Pure
/// function; unrecognized fragments produce a triplet of absent parts.
pub fn parse_location(text: &str) -> LocationParts {
    let country_code = CODE_RE.captures(text).map(|caps| caps[1].to_string());

    let after_in = IN_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());

    let (city, region) = match after_in {
        Some(rest) => split_city_region(rest),
        None => (None, None),
    };

    LocationParts {
        city,
        region,
        country_code,
    }
}

/// Split the text after "in" into the (city, region) pair
fn split_city_region(rest: &str) -> (Option<String>, Option<String>) {
    match rest.find(',') {
        Some(idx) => {
            let city_raw = rest[..idx].trim();
            let tail = &rest[idx + 1..];
            let region_raw = tail.split('(').next().unwrap_or(tail).trim();

            // A placeholder in either position voids the pair
            if city_raw == LOCATION_PLACEHOLDER || region_raw == LOCATION_PLACEHOLDER {
                (None, None)
            } else {
                (non_empty(city_raw), non_empty(region_raw))
            }
        }
        None => {
            // No comma: the remainder is a bare city with no region
            let head = rest.split('(').next().unwrap_or(rest).trim();
            if head == LOCATION_PLACEHOLDER {
                (None, None)
            } else {
                (non_empty(head), None)
            }
        }
    }
}

/// Map an already-trimmed component to absence when empty
fn non_empty(trimmed: &str) -> Option<String> {
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
