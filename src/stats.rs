// Per-user aggregate statistics.
//
// The stats store keeps a running average of every trust score a user has
// produced. This module only provides the update rule; callers own storage
// and must apply the update atomically (two concurrent read-modify-write
// cycles would lose one analysis).

use serde::{Deserialize, Serialize};

use crate::models::AnalysisResult;

/// Aggregate counters for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    /// Rounded mean of every trust score recorded so far.
    pub trust_score: u32,
    pub profiles_analyzed: u64,
    pub reports_submitted: u64,
}

impl UserStats {
    /// Fold a new analysis into the aggregate.
    pub fn record_analysis(&self, result: &AnalysisResult) -> UserStats {
        UserStats {
            trust_score: running_average(
                self.trust_score,
                self.profiles_analyzed,
                result.trust_score,
            ),
            profiles_analyzed: self.profiles_analyzed + 1,
            reports_submitted: self.reports_submitted,
        }
    }

    /// Count a submitted community report.
    pub fn record_report(&self) -> UserStats {
        UserStats {
            reports_submitted: self.reports_submitted + 1,
            ..*self
        }
    }
}

/// `round((old_avg * old_count + new_score) / (old_count + 1))`
pub fn running_average(old_avg: u32, old_count: u64, new_score: u8) -> u32 {
    let total = old_avg as f64 * old_count as f64 + new_score as f64;
    (total / (old_count as f64 + 1.0)).round() as u32
}
