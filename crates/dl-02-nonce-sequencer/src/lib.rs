//! # DL-02 Pending Nonce Sequencer
//!
//! Next-nonce advice for transaction admission.
//!
//! ## Purpose
//!
//! Many transactions from one account may be in flight before any of them is
//! included. The sequencer tracks the nonces claimed by those pending
//! transactions, outside consensus state, and answers "which nonce should the
//! next transaction use" by scanning upward from the committed nonce for the
//! first free slot.
//!
//! ## Slot Lifecycle
//!
//! ```text
//!   add_pending_nonce          complete_pending_nonce
//!   ───────────────► CLAIMED ─────────────────────────► COMPLETED
//!                       │                                   │
//!                       │ expire_pending_nonce              │ committed nonce
//!                       ▼                                   ▼ moves past it
//!                     FREE ◄────────────────────────────── FREE
//! ```
//!
//! A completed slot stays taken so that completion never reopens a gap before
//! the committed nonce catches up. An expired slot is free immediately.
//! Completed slots below the committed nonce are dropped on the account's next
//! add, completion or pending query; `prune_committed()` sweeps accounts that
//! see none of those again.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Non-pending queries return the committed nonce | `domain/sequencer.rs` - `calculate_next_nonce()` |
//! | INVARIANT-2 | Result is the first untaken value >= committed nonce | `domain/account.rs` - `next_free()` |
//! | INVARIANT-3 | Unknown identifiers are no-ops | `domain/sequencer.rs` - `release()` |
//! | INVARIANT-4 | Unrelated accounts never contend on one lock | `domain/sequencer.rs` - sharded `DashMap` |
//! | INVARIANT-5 | Scan length is bounded | `domain/account.rs` - `next_free()` |
//! | INVARIANT-6 | A rejected add leaves existing records untouched | `domain/sequencer.rs` - `add_pending_nonce()` |
//! | INVARIANT-7 | A transaction identifier is held by at most one account once adds settle | `domain/sequencer.rs` - `detach()` |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  adapters/memory.rs - MemoryNonceStore (committed nonces)       │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ports/inbound.rs  - NonceSequencerApi                          │
//! │  ports/outbound.rs - CommittedNonceSource                       │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/sequencer.rs - PendingNonceSequencer                    │
//! │  domain/account.rs   - AccountNonces (per-account slots)        │
//! │  domain/entities.rs  - SequencerConfig                          │
//! │  domain/errors.rs    - SequencerError                           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
