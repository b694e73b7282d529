//! Adapters layer for the balance reconciler.

pub mod memory;

pub use memory::{MemoryAssociationIndex, MemoryBalanceStore, MemoryNativeLedger};
