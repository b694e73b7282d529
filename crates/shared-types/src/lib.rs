//! # Shared Types Crate
//!
//! Value types used across the dual-ledger subsystems.
//!
//! ## Design Principles
//!
//! - **Two identities per account**: an EVM-side [`EvmAddress`] and, when an
//!   association exists, a native-chain [`NativeAddress`]. They are distinct
//!   types so that a native ledger call can never be handed an EVM address.
//! - **Full-width amounts**: every amount is a [`U256`]; narrowing happens only
//!   inside the subsystem that owns the narrower representation.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
