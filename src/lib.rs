//! # Reconciliation Core
//!
//! A core library for reconciling pending transactions against processed
//! settlement records.
//!
//! ## Features
//!
//! - **Two-phase matching**: derive the completed-identifier set from the
//!   processed groups, then filter the pending batch by membership
//! - **Shape-tolerant inputs**: absent batches, absent groups, and absent
//!   elements all behave as if empty
//! - **Best-effort identifier parsing**: non-numeric identifier text excludes
//!   the record, it never fails the run
//! - **Policy injection**: pluggable completion policies (default:
//!   case-insensitive comparison against "DONE")
//! - **Observability hooks**: opt-in anomaly observers and run reports that
//!   never change what is matched
//!
//! ## Quick Start
//!
//! ```rust
//! use reconciliation_core::{PendingTransaction, ProcessedTransaction, Reconciler};
//!
//! let reconciler = Reconciler::new();
//!
//! let pending = Some(vec![
//!     Some(PendingTransaction::new(101)),
//!     Some(PendingTransaction::new(102)),
//! ]);
//! let processed = Some(vec![Some(vec![Some(ProcessedTransaction::with_status(
//!     "101".to_string(),
//!     "DONE".to_string(),
//! ))])]);
//!
//! let matched: Vec<PendingTransaction> = reconciler.reconcile(pending, processed).collect();
//! assert_eq!(matched, vec![PendingTransaction::new(101)]);
//! ```

pub mod reconciliation;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use reconciliation::*;
pub use traits::*;
pub use types::*;
