//! Precompile error types.

use super::entities::EvmAddress;
use dl_01_balance_reconciler::BalanceError;
use thiserror::Error;

/// Bank precompile errors. All of them revert the calling frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrecompileError {
    #[error("input of {len} bytes is too short for a method selector")]
    InputTooShort { len: usize },

    #[error("unknown method selector 0x{}", hex::encode(.0))]
    UnknownMethod([u8; 4]),

    #[error("abi decode: {0}")]
    AbiDecode(String),

    #[error("invalid denom")]
    InvalidDenom,

    #[error("invalid addr {0}")]
    InvalidAddress(EvmAddress),

    #[error("address {0} does not have association")]
    MissingAssociation(EvmAddress),

    #[error("cannot call {method} from a static call")]
    WriteProtection { method: &'static str },

    #[error(transparent)]
    Bank(#[from] BalanceError),
}
