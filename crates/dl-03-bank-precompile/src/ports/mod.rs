//! Ports layer for the bank precompile.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
