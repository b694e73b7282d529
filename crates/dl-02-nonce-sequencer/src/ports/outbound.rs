//! Outbound (Driven) ports for the nonce sequencer.

use crate::domain::EvmAddress;

/// Durable per-account state: the committed next-expected nonce.
///
/// Updated by block commit, never by the sequencer.
pub trait CommittedNonceSource: Send + Sync {
    /// Returns the committed nonce of `address` (zero if unknown).
    fn committed_nonce(&self, address: &EvmAddress) -> u64;
}
