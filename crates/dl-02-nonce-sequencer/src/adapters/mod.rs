//! Adapters layer for the nonce sequencer.

pub mod memory;

pub use memory::MemoryNonceStore;
