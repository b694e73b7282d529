//! Ports layer for the nonce sequencer.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
