//! Reconciler error types.

use super::entities::{Denom, ErrorKind, EvmAddress, NativeAddress, U256};
use thiserror::Error;

/// Errors reported by the native ledger collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("insufficient funds: {address} holds {available}{denom}, needs {required}{denom}")]
    InsufficientFunds {
        address: NativeAddress,
        denom: Denom,
        required: U256,
        available: U256,
    },

    #[error("unknown module account: {0}")]
    UnknownModuleAccount(String),

    #[error("invalid coin: {0}")]
    InvalidCoin(String),
}

/// Errors from balance mutation and reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("crediting {amount} to {address} with an existing balance of {balance} would cause overflow")]
    Overflow {
        address: EvmAddress,
        balance: u64,
        amount: U256,
    },

    #[error("insufficient balance of {balance} in {address} for a {amount} subtraction")]
    InsufficientBalance {
        address: EvmAddress,
        balance: U256,
        amount: U256,
    },

    #[error("insufficient module balance to facilitate credit: module {module} holds {balance}, needs {amount}")]
    InsufficientModuleBalance {
        module: NativeAddress,
        balance: U256,
        amount: U256,
    },

    #[error("conservation counter {counter} overflows when applying {delta}")]
    CounterOverflow { counter: i128, delta: U256 },

    #[error("balance check failed: module balance {module_balance}, total unassociated balance {counter}")]
    ConservationViolation { module_balance: U256, counter: i128 },

    #[error("balance check refused: execution already recorded an error ({first})")]
    PriorExecutionError { first: String },

    #[error("native ledger: {0}")]
    Ledger(#[from] LedgerError),
}

impl BalanceError {
    /// Classifies the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidAmount(_) | Self::InsufficientBalance { .. } => {
                ErrorKind::UserRecoverable
            }
            Self::Ledger(LedgerError::InsufficientFunds { .. }) => ErrorKind::UserRecoverable,
            Self::ConservationViolation { .. } => ErrorKind::ConsistencyFatal,
            Self::Overflow { .. }
            | Self::InsufficientModuleBalance { .. }
            | Self::CounterOverflow { .. }
            | Self::PriorExecutionError { .. }
            | Self::Ledger(_) => ErrorKind::InternalInvariant,
        }
    }

    /// Returns true if the error must halt block processing.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.kind() == ErrorKind::ConsistencyFatal
    }
}
