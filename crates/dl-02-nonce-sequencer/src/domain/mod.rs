//! # Domain Layer - Nonce Sequencer
//!
//! - `account`: per-account claimed and completed slots
//! - `sequencer`: PendingNonceSequencer
//! - `entities`: SequencerConfig
//! - `errors`: SequencerError

pub mod account;
pub mod entities;
pub mod errors;
pub mod sequencer;

pub use account::*;
pub use entities::*;
pub use errors::*;
pub use sequencer::*;
