//! # Dual-Ledger Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # criterion benchmarks per subsystem
//! └── src/integration/  # cross-crate flows
//!     ├── admission.rs  # sequencer under concurrent admission
//!     └── flows.rs      # execution → bridge → reconciliation
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p dl-tests integration::
//! cargo bench -p dl-tests
//! ```

pub mod integration;
