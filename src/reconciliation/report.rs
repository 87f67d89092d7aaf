//! Run reports summarizing a reconciliation pass

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::*;

/// Summary of a single reconciliation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// Unique identifier for this run
    pub id: Uuid,
    /// When the run completed
    pub reconciled_at: NaiveDateTime,
    /// Number of present pending transactions examined
    pub pending_count: usize,
    /// Number of distinct completed identifiers derived from the processed groups
    pub completed_count: usize,
    /// Pending transactions with a completed counterpart, in input order
    pub matched: Vec<PendingTransaction>,
    /// Data-quality findings recorded during the run
    pub anomalies: Vec<Anomaly>,
}

impl ReconciliationReport {
    pub(crate) fn new(
        pending_count: usize,
        completed_count: usize,
        matched: Vec<PendingTransaction>,
        anomalies: Vec<Anomaly>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            reconciled_at: chrono::Utc::now().naive_utc(),
            pending_count,
            completed_count,
            matched,
            anomalies,
        }
    }

    /// Number of matched pending transactions
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// True if any data-quality finding was recorded during the run
    pub fn has_anomalies(&self) -> bool {
        !self.anomalies.is_empty()
    }

    /// One-line human-readable summary of the run
    pub fn summary(&self) -> String {
        format!(
            "Reconciliation {}: {} of {} pending matched against {} completed ids, {} anomalies",
            self.id,
            self.matched_count(),
            self.pending_count,
            self.completed_count,
            self.anomalies.len()
        )
    }
}
