//! Aggregated validation outcomes.

use rollcall_core::models::{IssueLevel, ValidationResult};
use serde::Serialize;

/// Running totals over every recorded validation result.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationMetrics {
    pub total_runs: u64,
    pub invalid_runs: u64,
    pub errors: u64,
    pub warnings: u64,
    pub infos: u64,
    pub fixes_applied: u64,
    pub mentions_seen: u64,
    pub placeholders_found: u64,
}

impl ValidationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one result into the totals.
    pub fn record(&mut self, result: &ValidationResult) {
        self.total_runs += 1;
        if !result.valid {
            self.invalid_runs += 1;
        }
        for issue in &result.issues {
            match issue.level {
                IssueLevel::Error => self.errors += 1,
                IssueLevel::Warning => self.warnings += 1,
                IssueLevel::Info => self.infos += 1,
            }
        }
        self.fixes_applied += result.fix_count() as u64;
        self.mentions_seen += result.summary.mentioned_in_nl as u64;
        self.placeholders_found += result.summary.placeholders_found as u64;
    }

    /// Share of runs that were invalid.
    pub fn invalid_rate(&self) -> f64 {
        if self.total_runs == 0 {
            return 0.0;
        }
        self.invalid_runs as f64 / self.total_runs as f64
    }

    /// Reset all metrics (useful for testing or periodic rotation).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
