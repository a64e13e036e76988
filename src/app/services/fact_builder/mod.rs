//! Fact resolution service
//!
//! Resolves every cleansed participation record against the freshly rebuilt
//! dimensions and emits exactly one fact row per input record. The module is
//! organized into:
//! - [`builder`] - natural-key resolution and fact emission
//! - [`stats`] - resolution statistics and anomaly counters
//!
//! Mandatory relationships (subject, event grouping) are expected to always
//! resolve; a failure there is an upstream data-integrity anomaly that is
//! counted and logged but never aborts the run. Optional relationships
//! (specific event, affiliation) resolve via non-filtering lookup and absent
//! is a valid, expected state.

pub mod builder;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use builder::{FactBuild, FactBuilder};
pub use stats::FactStats;
