//! # Domain Layer - Balance Reconciler
//!
//! - `entities`: SignedAmount, ReconcilerConfig, ErrorKind
//! - `context`: ExecutionContext threaded through one reconciliation boundary
//! - `reconciler`: BalanceReconciler
//! - `errors`: BalanceError, LedgerError

pub mod context;
pub mod entities;
pub mod errors;
pub mod reconciler;

pub use context::*;
pub use entities::*;
pub use errors::*;
pub use reconciler::*;
