//! Dimension rebuild service
//!
//! Derives the four dimension entities (athletes, games, events, countries)
//! from the cleansed record set on every run, assigning fresh surrogate
//! identities. The module is organized into:
//! - [`builder`] - per-dimension derivation and union-then-enrich policy
//! - [`key_map`] - the per-rebuild natural-key lookup tables
//!
//! Surrogate identities have no required stability across runs; consumers
//! resolve relationships via natural key, never by persisting surrogates.

pub mod builder;
pub mod key_map;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use builder::{DimensionBuild, DimensionBuilder, DimensionLookups, DimensionStats};
pub use key_map::KeyMap;
