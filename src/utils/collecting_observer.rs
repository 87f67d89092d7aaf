//! In-memory anomaly collector for testing and report capture

use std::sync::RwLock;

use crate::traits::AnomalyObserver;
use crate::types::Anomaly;

/// Observer that collects every recorded anomaly
///
/// Share an `Arc<CollectingObserver>` with the reconciler, then inspect the
/// collected findings once the run has been consumed.
#[derive(Debug)]
pub struct CollectingObserver {
    anomalies: RwLock<Vec<Anomaly>>,
}

impl CollectingObserver {
    /// Create a new empty collector
    pub fn new() -> Self {
        Self {
            anomalies: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of the anomalies recorded so far
    pub fn anomalies(&self) -> Vec<Anomaly> {
        self.anomalies.read().unwrap().clone()
    }

    /// True if no anomalies have been recorded
    pub fn is_empty(&self) -> bool {
        self.anomalies.read().unwrap().is_empty()
    }

    /// Clear all collected anomalies (useful for testing)
    pub fn clear(&self) {
        self.anomalies.write().unwrap().clear();
    }
}

impl Default for CollectingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnomalyObserver for CollectingObserver {
    fn record(&self, anomaly: &Anomaly) {
        self.anomalies.write().unwrap().push(anomaly.clone());
    }
}
