//! Basic batch reconciliation example

use std::sync::Arc;

use reconciliation_core::utils::CollectingObserver;
use reconciliation_core::{PendingTransaction, ProcessedTransaction, Reconciler};

fn main() {
    println!("🔁 Reconciliation Core - Batch Reconciliation Example\n");

    // 1. The day's pending batch, as exported upstream. The export is not
    //    fully trusted: one slot is missing.
    println!("📥 Building pending batch...");
    let pending = Some(vec![
        Some(PendingTransaction::new(1001)),
        Some(PendingTransaction::new(1002)),
        None,
        Some(PendingTransaction::new(1003)),
        Some(PendingTransaction::new(1004)),
    ]);
    println!("  ✓ 4 pending transactions (1 absent slot)\n");

    // 2. Processed feeds from the settlement providers. One feed is down,
    //    one record carries a non-numeric reference.
    println!("📤 Gathering processed feeds...");
    let processed = Some(vec![
        Some(vec![
            Some(ProcessedTransaction::with_status(
                "1001".to_string(),
                "DONE".to_string(),
            )),
            Some(ProcessedTransaction::with_status(
                "1002".to_string(),
                "PENDING".to_string(),
            )),
        ]),
        None,
        Some(vec![
            Some(ProcessedTransaction::with_status(
                "1004".to_string(),
                "done".to_string(),
            )),
            Some(ProcessedTransaction::with_status(
                "ref-1003".to_string(),
                "DONE".to_string(),
            )),
        ]),
    ]);
    println!("  ✓ 3 feeds (1 absent)\n");

    // 3. Reconcile with an observer attached so the data-quality findings
    //    are visible alongside the matches.
    println!("⚖️  Reconciling...");
    let collector = Arc::new(CollectingObserver::new());
    let reconciler = Reconciler::new().observing(collector.clone());

    let matched: Vec<PendingTransaction> = reconciler.reconcile(pending.clone(), processed.clone()).collect();

    for transaction in &matched {
        println!("  ✓ Matched pending transaction {}", transaction.id);
    }
    for anomaly in collector.anomalies() {
        println!("  ⚠ {anomaly}");
    }
    println!();

    // 4. The same run, captured as a report.
    println!("📋 Capturing run report...");
    let report = reconciler.reconcile_with_report(pending, processed);
    println!("  {}", report.summary());
}
