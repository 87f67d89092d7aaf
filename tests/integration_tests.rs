//! Integration tests for reconciliation-core

use std::sync::Arc;

use reconciliation_core::utils::CollectingObserver;
use reconciliation_core::{
    Anomaly, CompletionPolicy, PendingTransaction, ProcessedTransaction, Reconciler,
    ReconciliationReport,
};

fn done(id: &str) -> Option<ProcessedTransaction> {
    Some(ProcessedTransaction::with_status(
        id.to_string(),
        "DONE".to_string(),
    ))
}

#[test]
fn test_settlement_run_across_feeds() {
    let reconciler = Reconciler::new();

    // A day's pending batch, with one corrupt slot from the upstream export
    let pending = Some(vec![
        Some(PendingTransaction::new(1001)),
        Some(PendingTransaction::new(1002)),
        None,
        Some(PendingTransaction::new(1003)),
        Some(PendingTransaction::new(1004)),
    ]);

    // Feeds from three settlement providers; the second one is down
    let processed = Some(vec![
        Some(vec![
            done("1001"),
            Some(ProcessedTransaction::with_status(
                "1002".to_string(),
                "PENDING".to_string(),
            )),
        ]),
        None,
        Some(vec![done("1004"), done("7777"), None]),
    ]);

    let matched: Vec<PendingTransaction> = reconciler.reconcile(pending, processed).collect();

    assert_eq!(
        matched,
        vec![PendingTransaction::new(1001), PendingTransaction::new(1004)]
    );
}

#[test]
fn test_report_capture() {
    let reconciler = Reconciler::new();

    let pending = Some(vec![
        Some(PendingTransaction::new(2001)),
        Some(PendingTransaction::new(2002)),
        Some(PendingTransaction::new(2003)),
    ]);
    let processed = Some(vec![
        Some(vec![done("2001"), done("2003")]),
        Some(vec![done("ref-2004")]),
        Some(vec![Some(ProcessedTransaction::new(
            None,
            Some("DONE".to_string()),
        ))]),
    ]);

    let report = reconciler.reconcile_with_report(pending, processed);

    assert_eq!(report.pending_count, 3);
    assert_eq!(report.completed_count, 2);
    assert_eq!(report.matched_count(), 2);
    assert_eq!(
        report.matched,
        vec![PendingTransaction::new(2001), PendingTransaction::new(2003)]
    );
    assert!(report.has_anomalies());
    assert_eq!(
        report.anomalies,
        vec![
            Anomaly::NonNumericIdentifier("ref-2004".to_string()),
            Anomaly::MissingIdentifier,
        ]
    );

    let summary = report.summary();
    assert!(summary.contains("2 of 3 pending"));
    assert!(summary.contains("2 anomalies"));
}

#[test]
fn test_observer_does_not_change_matching() {
    let pending = Some(vec![
        Some(PendingTransaction::new(3001)),
        None,
        Some(PendingTransaction::new(3002)),
    ]);
    let processed = Some(vec![None, Some(vec![done("3002"), done("oops")])]);

    let silent = Reconciler::new();
    let collector = Arc::new(CollectingObserver::new());
    let observed = Reconciler::new().observing(collector.clone());

    let from_silent: Vec<PendingTransaction> = silent
        .reconcile(pending.clone(), processed.clone())
        .collect();
    let from_observed: Vec<PendingTransaction> = observed.reconcile(pending, processed).collect();

    assert_eq!(from_silent, from_observed);
    assert_eq!(
        collector.anomalies(),
        vec![
            Anomaly::MissingGroup,
            Anomaly::NonNumericIdentifier("oops".to_string()),
            Anomaly::MissingPendingTransaction,
        ]
    );

    collector.clear();
    assert!(collector.is_empty());
}

#[test]
fn test_custom_policy_end_to_end() {
    struct TerminalStatusPolicy;

    impl CompletionPolicy for TerminalStatusPolicy {
        fn is_complete(&self, status: &str) -> bool {
            status.eq_ignore_ascii_case("DONE") || status.eq_ignore_ascii_case("SETTLED")
        }
    }

    let reconciler = Reconciler::with_policy(Box::new(TerminalStatusPolicy));

    let pending = Some(vec![
        Some(PendingTransaction::new(4001)),
        Some(PendingTransaction::new(4002)),
        Some(PendingTransaction::new(4003)),
    ]);
    let processed = Some(vec![Some(vec![
        done("4001"),
        Some(ProcessedTransaction::with_status(
            "4002".to_string(),
            "settled".to_string(),
        )),
        Some(ProcessedTransaction::with_status(
            "4003".to_string(),
            "REJECTED".to_string(),
        )),
    ])]);

    let matched: Vec<i64> = reconciler
        .reconcile(pending, processed)
        .map(|transaction| transaction.id)
        .collect();

    assert_eq!(matched, vec![4001, 4002]);
}

#[test]
fn test_report_serialization_round_trip() {
    let reconciler = Reconciler::new();

    let pending = Some(vec![Some(PendingTransaction::new(5001))]);
    let processed = Some(vec![Some(vec![done("5001"), done("not-a-number")])]);

    let report = reconciler.reconcile_with_report(pending, processed);

    let json = serde_json::to_string(&report).unwrap();
    let restored: ReconciliationReport = serde_json::from_str(&json).unwrap();

    assert_eq!(report, restored);
}

#[test]
fn test_numeric_id_conversion() {
    let valid = ProcessedTransaction::with_status("42".to_string(), "DONE".to_string());
    assert_eq!(valid.numeric_id(), Some(42));

    let negative = ProcessedTransaction::with_status("-7".to_string(), "DONE".to_string());
    assert_eq!(negative.numeric_id(), Some(-7));

    let textual = ProcessedTransaction::with_status("INVALID".to_string(), "DONE".to_string());
    assert_eq!(textual.numeric_id(), None);

    let empty = ProcessedTransaction::with_status(String::new(), "DONE".to_string());
    assert_eq!(empty.numeric_id(), None);

    let absent = ProcessedTransaction::new(None, Some("DONE".to_string()));
    assert_eq!(absent.numeric_id(), None);
}
