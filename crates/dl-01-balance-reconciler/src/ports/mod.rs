//! Ports layer for the balance reconciler.
//!
//! - Inbound (Driving) ports: API exposed to the state-transition driver
//! - Outbound (Driven) ports: association index, native ledger, balance store

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
