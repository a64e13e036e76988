//! Text normalization parsers for free-form Olympedia fields
//!
//! This module converts the inconsistently formatted text fragments found in
//! the staged inputs into typed values. It is organized into three parsers:
//! - [`date_parser`] - birth/death date fragments with explicit pattern precedence
//! - [`location_parser`] - "in City, Region (CODE)" birthplace fragments
//! - [`field_parsers`] - measurements, ranks, event periods, names, codes
//!
//! # Failure Philosophy
//!
//! All parsers here are pure functions and never fail: text that matches no
//! recognized pattern degrades to an absent value. Ambiguous text that
//! matches a recognized "cannot safely resolve" pattern (a year range such
//! as "1926 or 1927") also resolves to absent, by policy rather than by
//! accident. Errors are reserved for the I/O layers, never for parsing.

pub mod date_parser;
pub mod field_parsers;
pub mod location_parser;

#[cfg(test)]
pub mod tests;

// Re-export the parser entry points for convenience
pub use date_parser::parse_date;
pub use field_parsers::{
    EditionParse, RankParse, clean_name, normalize_code, parse_edition, parse_height_cm,
    parse_medal, parse_optional_f64, parse_optional_flag, parse_optional_i64, parse_rank,
    parse_weight_kg,
};
pub use location_parser::{LocationParts, parse_location};
