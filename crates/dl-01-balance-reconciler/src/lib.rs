//! # DL-01 Balance Reconciler
//!
//! One balance-mutation API for two account models.
//!
//! ## Purpose
//!
//! An EVM address that has an association with a native-chain address keeps
//! its balance on the native (bank) ledger. An address without one keeps an
//! EVM-only `u64` balance tracked here, backed by the pooled `evm` module
//! account on the native ledger. The reconciler routes every credit and debit
//! to the right side and keeps a conservation counter so that, once per
//! reconciliation boundary, the pool can be trimmed back to exactly what the
//! EVM-only balances require.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Zero amounts are no-ops | `domain/reconciler.rs` - `add_balance()` / `sub_balance()` |
//! | INVARIANT-2 | EVM-only balances never overflow `u64` | `domain/reconciler.rs` - `credit()` |
//! | INVARIANT-3 | Counter equals net EVM-only delta | `domain/reconciler.rs` - `credit()` / `debit()` |
//! | INVARIANT-4 | Counter never exceeds pooled balance | `domain/reconciler.rs` - `check_balance()` |
//! | INVARIANT-5 | No reconciliation after a recorded error | `domain/reconciler.rs` - `check_balance()` |
//! | INVARIANT-6 | Absent entry reads as zero, zero write deletes | `ports/outbound.rs` - `BalanceStore` |
//!
//! ## Error Classes
//!
//! | Class | Errors | Effect |
//! |-------|--------|--------|
//! | UserRecoverable | `InsufficientBalance`, `InvalidAmount` | transaction fails, state discarded |
//! | InternalInvariant | `Overflow`, `InsufficientModuleBalance`, `CounterOverflow` | logged with full context |
//! | ConsistencyFatal | `ConservationViolation` | block processing must halt |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  adapters/memory.rs - in-memory association index, native       │
//! │                       ledger and balance store                  │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ports/inbound.rs  - BalanceApi                                 │
//! │  ports/outbound.rs - AssociationIndex, NativeLedger,            │
//! │                      BalanceStore, DenomProvider                │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/reconciler.rs - BalanceReconciler                       │
//! │  domain/context.rs    - ExecutionContext (counter + first error)│
//! │  domain/entities.rs   - SignedAmount, ReconcilerConfig          │
//! │  domain/errors.rs     - BalanceError, LedgerError               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut ctx = ExecutionContext::new();
//! reconciler.sub_balance(&mut ctx, &sender, fee.into())?;
//! reconciler.add_balance(&mut ctx, &recipient, value.into())?;
//! let burned = reconciler.check_balance(&mut ctx)?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
