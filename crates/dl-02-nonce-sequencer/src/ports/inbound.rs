//! # Inbound Port - NonceSequencerApi
//!
//! Driving port for the admission pipeline. Every method takes `&self`; the
//! implementation is shared across admission workers.

use crate::domain::{EvmAddress, SequencerError, TxKey};

/// Primary API for the pending nonce sequencer.
pub trait NonceSequencerApi: Send + Sync {
    /// Registers `nonce` as claimed by `tx` for `address`.
    ///
    /// Duplicate nonces are distinct records. Re-adding a known `tx` replaces
    /// its previous record, moving it if `address` differs. A rejected re-add
    /// leaves the previous record in place.
    ///
    /// # Errors
    /// - `AccountLimitReached`: the account already holds the configured
    ///   maximum of in-flight records
    fn add_pending_nonce(
        &self,
        tx: TxKey,
        address: EvmAddress,
        nonce: u64,
    ) -> Result<(), SequencerError>;

    /// The transaction was included. Its slot stays taken until the
    /// committed nonce passes it. Unknown identifiers are a no-op.
    fn complete_pending_nonce(&self, tx: &TxKey);

    /// The transaction was dropped. Its slot is free again. Unknown
    /// identifiers are a no-op.
    fn expire_pending_nonce(&self, tx: &TxKey);

    /// Next nonce for `address`.
    ///
    /// With `pending == false` this is the committed nonce. Otherwise it is the
    /// first untaken value at or above the committed nonce.
    ///
    /// # Errors
    /// - `ScanLimitExceeded`: the scan hit the configured step bound
    fn calculate_next_nonce(
        &self,
        address: &EvmAddress,
        pending: bool,
    ) -> Result<u64, SequencerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn NonceSequencerApi) {}
}
