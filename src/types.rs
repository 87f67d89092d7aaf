//! Core types and data structures for the reconciliation system

use serde::{Deserialize, Serialize};

/// Status text that marks a processed transaction as successfully completed
pub const DONE_STATUS: &str = "DONE";

/// A transaction awaiting confirmation of completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingTransaction {
    /// Numeric identifier for the transaction
    pub id: i64,
}

impl PendingTransaction {
    /// Create a new pending transaction
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

/// An externally reported transaction outcome
///
/// Upstream feeds are only partially trusted: both the identifier and the
/// status may be missing, and the identifier text is not guaranteed to be
/// numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedTransaction {
    /// Identifier text as reported upstream
    pub id: Option<String>,
    /// Reported outcome status
    pub status: Option<String>,
}

impl ProcessedTransaction {
    /// Create a new processed transaction
    pub fn new(id: Option<String>, status: Option<String>) -> Self {
        Self { id, status }
    }

    /// Create a processed transaction with both identifier and status present
    pub fn with_status(id: String, status: String) -> Self {
        Self {
            id: Some(id),
            status: Some(status),
        }
    }

    /// Parse the identifier text as a numeric identifier
    ///
    /// Absent, empty, or non-numeric identifier text yields `None`.
    pub fn numeric_id(&self) -> Option<i64> {
        match self.id.as_deref() {
            Some(text) if !text.is_empty() => text.parse().ok(),
            _ => None,
        }
    }
}

/// A batch of pending transactions; elements may be absent placeholders
pub type PendingBatch = Vec<Option<PendingTransaction>>;

/// A batch of processed transactions; elements may be absent placeholders
pub type ProcessedBatch = Vec<Option<ProcessedTransaction>>;

/// Processed batches grouped by upstream source; any group may be absent
pub type ProcessedGroups = Vec<Option<ProcessedBatch>>;

/// Data-quality findings encountered during a reconciliation run
///
/// Anomalies never fail a run. The offending record is excluded from
/// matching and the finding is reported to the configured observer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Anomaly {
    #[error("processed group is absent")]
    MissingGroup,
    #[error("processed transaction is absent")]
    MissingProcessedTransaction,
    #[error("pending transaction is absent")]
    MissingPendingTransaction,
    #[error("processed transaction has no identifier")]
    MissingIdentifier,
    #[error("processed transaction identifier is not numeric: {0}")]
    NonNumericIdentifier(String),
}
