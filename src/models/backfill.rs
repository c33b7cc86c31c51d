// file: src/models/backfill.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate result of one recurring-meeting backfill batch. Per-item
/// creation failures are counted and kept as messages instead of being
/// discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackfillOutcome {
    pub requested: usize,
    pub created: usize,
    pub failed: usize,
    pub errors: Vec<String>,
    pub run_at: DateTime<Utc>,
}

impl BackfillOutcome {
    pub fn new(requested: usize) -> Self {
        Self {
            requested,
            created: 0,
            failed: 0,
            errors: Vec::new(),
            run_at: Utc::now(),
        }
    }

    pub fn record_created(&mut self) {
        self.created += 1;
    }

    pub fn record_failure(&mut self, error: String) {
        self.failed += 1;
        self.errors.push(error);
    }

    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}
