//! Sequencer error types.

use super::entities::EvmAddress;
use thiserror::Error;

/// Admission-side sequencer errors. Removal never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequencerError {
    /// The scan from `base` hit `steps` consecutive taken slots.
    #[error("next nonce scan for {address} from {base} exceeded {steps} steps")]
    ScanLimitExceeded {
        address: EvmAddress,
        base: u64,
        steps: u64,
    },

    /// Account already holds the maximum number of in-flight records.
    #[error("account {address} has reached its pending nonce limit of {limit}")]
    AccountLimitReached { address: EvmAddress, limit: usize },
}
