//! Search statistics collection and reporting.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Statistics for one complete search request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStatistics {
    /// Wall-clock time spent on the whole request.
    pub duration: Duration,

    /// Number of targets searched.
    pub targets_searched: usize,

    /// Number of targets that matched.
    pub matches_found: usize,

    /// Candidates examined across all targets: DP cells for sum, search
    /// nodes for product, pairs for difference and quotient.
    pub explored: u64,
}

impl SearchStatistics {
    /// Returns the fraction of targets that matched.
    pub fn hit_rate(&self) -> f64 {
        if self.targets_searched == 0 {
            0.0
        } else {
            self.matches_found as f64 / self.targets_searched as f64
        }
    }

    /// Returns the average candidates examined per target.
    pub fn avg_explored_per_target(&self) -> f64 {
        if self.targets_searched == 0 {
            0.0
        } else {
            self.explored as f64 / self.targets_searched as f64
        }
    }
}
