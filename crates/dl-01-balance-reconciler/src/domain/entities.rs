//! Core domain entities for the balance reconciler.

use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

pub use shared_types::{Coin, Denom, EvmAddress, NativeAddress, U256};

/// A signed, full-width amount.
///
/// Zero is always stored as non-negative so that `-0 == 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct SignedAmount {
    negative: bool,
    magnitude: U256,
}

impl SignedAmount {
    pub const ZERO: Self = Self {
        negative: false,
        magnitude: U256([0; 4]),
    };

    pub fn positive(magnitude: U256) -> Self {
        Self {
            negative: false,
            magnitude,
        }
    }

    pub fn negative(magnitude: U256) -> Self {
        Self {
            negative: !magnitude.is_zero(),
            magnitude,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn magnitude(&self) -> U256 {
        self.magnitude
    }
}

impl Neg for SignedAmount {
    type Output = Self;

    fn neg(self) -> Self {
        if self.negative {
            Self::positive(self.magnitude)
        } else {
            Self::negative(self.magnitude)
        }
    }
}

impl PartialOrd for SignedAmount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SignedAmount {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
        }
    }
}

impl fmt::Display for SignedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}

impl From<U256> for SignedAmount {
    fn from(magnitude: U256) -> Self {
        Self::positive(magnitude)
    }
}

impl From<u64> for SignedAmount {
    fn from(value: u64) -> Self {
        Self::positive(U256::from(value))
    }
}

impl From<i64> for SignedAmount {
    fn from(value: i64) -> Self {
        Self::from(i128::from(value))
    }
}

impl From<i128> for SignedAmount {
    fn from(value: i128) -> Self {
        let magnitude = U256::from(value.unsigned_abs());
        if value < 0 {
            Self::negative(magnitude)
        } else {
            Self::positive(magnitude)
        }
    }
}

/// Error classification used for logging and metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Surfaced to the caller as a failed transaction.
    UserRecoverable,
    /// Bookkeeping bug upstream; the operation fails hard.
    InternalInvariant,
    /// Tokens appeared from nothing; block processing must halt.
    ConsistencyFatal,
}

impl ErrorKind {
    /// Metric label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserRecoverable => "user_recoverable",
            Self::InternalInvariant => "internal_invariant",
            Self::ConsistencyFatal => "consistency_fatal",
        }
    }
}

/// Reconciler configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReconcilerConfig {
    /// Denomination used for every EVM balance movement.
    pub base_denom: Denom,
    /// Name of the pooled module account on the native ledger.
    pub module_account: String,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            base_denom: Denom::new("unative"),
            module_account: "evm".to_string(),
        }
    }
}

impl ReconcilerConfig {
    /// Creates a config for testing.
    pub fn for_testing() -> Self {
        Self {
            base_denom: Denom::new("utest"),
            ..Default::default()
        }
    }
}
