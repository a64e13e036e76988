//! Statistics for fact resolution

use std::time::Duration;

/// Statistics for one fact build
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactStats {
    /// Number of cleansed participation records received
    pub input_records: usize,
    /// Number of fact rows emitted; always equals the input count
    pub facts_emitted: usize,

    /// Mandatory subject lookups that failed (data-integrity anomalies)
    pub missing_athlete_keys: usize,
    /// Mandatory event-grouping lookups that failed (data-integrity anomalies)
    pub missing_games_keys: usize,

    /// Optional specific-event relationships left absent
    pub events_unresolved: usize,
    /// Optional affiliation relationships left absent
    pub countries_unresolved: usize,

    /// Wall-clock time for the build
    pub elapsed: Duration,
}

impl FactStats {
    /// Create new empty fact statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total mandatory-relationship anomalies for monitoring
    pub fn mandatory_anomalies(&self) -> usize {
        self.missing_athlete_keys + self.missing_games_keys
    }

    /// Share of facts with both mandatory relationships resolved, as a
    /// percentage
    pub fn mandatory_resolution_rate(&self) -> f64 {
        if self.facts_emitted == 0 {
            100.0
        } else {
            let healthy = self.facts_emitted - self.mandatory_anomalies().min(self.facts_emitted);
            (healthy as f64 / self.facts_emitted as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Resolved {} facts from {} records ({:.1}% mandatory keys resolved, \
             {} subject anomalies, {} grouping anomalies, {} events unresolved, {} affiliations unresolved)",
            self.facts_emitted,
            self.input_records,
            self.mandatory_resolution_rate(),
            self.missing_athlete_keys,
            self.missing_games_keys,
            self.events_unresolved,
            self.countries_unresolved
        )
    }
}
