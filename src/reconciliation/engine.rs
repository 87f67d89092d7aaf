//! Reconciliation engine matching pending transactions against processed outcomes

use std::collections::HashSet;
use std::sync::Arc;

use crate::reconciliation::report::ReconciliationReport;
use crate::traits::*;
use crate::types::*;
use crate::utils::sequence::or_empty;
use crate::utils::CollectingObserver;

/// Engine for reconciling pending transactions against processed outcomes
///
/// Matching happens in two phases: the processed groups are flattened and
/// reduced to the set of identifiers whose status denotes completion, then
/// the pending batch is filtered to the transactions whose identifier is a
/// member of that set. Malformed or absent upstream data is excluded from
/// matching; the run itself never fails.
pub struct Reconciler {
    policy: Box<dyn CompletionPolicy>,
    observer: Arc<dyn AnomalyObserver>,
}

impl Reconciler {
    /// Create a reconciler with the default policy and a silent observer
    pub fn new() -> Self {
        Self {
            policy: Box::new(DoneStatusPolicy),
            observer: Arc::new(SilentAnomalies),
        }
    }

    /// Create a reconciler with a custom completion policy
    pub fn with_policy(policy: Box<dyn CompletionPolicy>) -> Self {
        Self {
            policy,
            observer: Arc::new(SilentAnomalies),
        }
    }

    /// Attach an anomaly observer
    pub fn observing(mut self, observer: Arc<dyn AnomalyObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Derive the set of identifiers representing completed work
    ///
    /// Flattens the processed groups, keeps the records whose status is
    /// present and accepted by the completion policy, and parses their
    /// identifier text as `i64`. Records with absent, empty, or non-numeric
    /// identifier text are excluded. Duplicate identifiers collapse.
    pub fn completed_ids(&self, processed: Option<ProcessedGroups>) -> HashSet<i64> {
        self.collect_completed(self.observer.as_ref(), processed)
    }

    /// Filter the pending batch down to the transactions with a completed
    /// processed counterpart
    ///
    /// The output preserves the relative order of the pending batch and is
    /// produced lazily; the processed groups are fully consumed before the
    /// first element is yielded. Absent inputs behave as empty and absent
    /// elements are skipped.
    pub fn reconcile(
        &self,
        pending: Option<PendingBatch>,
        processed: Option<ProcessedGroups>,
    ) -> impl Iterator<Item = PendingTransaction> {
        let completed = self.collect_completed(self.observer.as_ref(), processed);
        let observer = Arc::clone(&self.observer);
        or_empty(pending)
            .filter_map(move |slot| {
                if slot.is_none() {
                    observer.record(&Anomaly::MissingPendingTransaction);
                }
                slot
            })
            .filter(move |transaction| completed.contains(&transaction.id))
    }

    /// Reconcile and capture the run into a report
    ///
    /// The matched subset is identical to [`Reconciler::reconcile`]'s output
    /// for the same inputs. Anomalies for the run are gathered into the
    /// report instead of being forwarded to the configured observer.
    pub fn reconcile_with_report(
        &self,
        pending: Option<PendingBatch>,
        processed: Option<ProcessedGroups>,
    ) -> ReconciliationReport {
        let collector = CollectingObserver::new();
        let completed = self.collect_completed(&collector, processed);

        let mut pending_count = 0;
        let mut matched = Vec::new();
        for slot in or_empty(pending) {
            let Some(transaction) = slot else {
                collector.record(&Anomaly::MissingPendingTransaction);
                continue;
            };
            pending_count += 1;
            if completed.contains(&transaction.id) {
                matched.push(transaction);
            }
        }

        ReconciliationReport::new(pending_count, completed.len(), matched, collector.anomalies())
    }

    fn collect_completed(
        &self,
        observer: &dyn AnomalyObserver,
        processed: Option<ProcessedGroups>,
    ) -> HashSet<i64> {
        let mut completed = HashSet::new();
        for group in or_empty(processed) {
            let Some(group) = group else {
                observer.record(&Anomaly::MissingGroup);
                continue;
            };
            for slot in group {
                let Some(record) = slot else {
                    observer.record(&Anomaly::MissingProcessedTransaction);
                    continue;
                };
                let done = record
                    .status
                    .as_deref()
                    .is_some_and(|status| self.policy.is_complete(status));
                if !done {
                    continue;
                }
                match record.id.as_deref() {
                    None | Some("") => observer.record(&Anomaly::MissingIdentifier),
                    Some(text) => match text.parse::<i64>() {
                        Ok(id) => {
                            completed.insert(id);
                        }
                        Err(_) => {
                            observer.record(&Anomaly::NonNumericIdentifier(text.to_string()))
                        }
                    },
                }
            }
        }
        completed
    }
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new()
    }
}
