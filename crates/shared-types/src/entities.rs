//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Identity**: [`EvmAddress`], [`NativeAddress`]
//! - **Value**: [`Denom`], [`Coin`], [`U256`]
//! - **Admission**: [`TxKey`]

use crate::errors::AddressError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

/// Length in bytes of both address kinds.
pub const ADDRESS_LENGTH: usize = 20;

fn parse_address_bytes(s: &str) -> Result<[u8; ADDRESS_LENGTH], AddressError> {
    let stripped = s.strip_prefix("0x").unwrap_or(s);
    let raw = hex::decode(stripped).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
    if raw.len() != ADDRESS_LENGTH {
        return Err(AddressError::InvalidLength {
            expected: ADDRESS_LENGTH,
            actual: raw.len(),
        });
    }
    let mut bytes = [0u8; ADDRESS_LENGTH];
    bytes.copy_from_slice(&raw);
    Ok(bytes)
}

macro_rules! address_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
        pub struct $name(pub [u8; ADDRESS_LENGTH]);

        impl $name {
            /// The all-zero address.
            pub const ZERO: Self = Self([0u8; ADDRESS_LENGTH]);

            /// Creates an address from a 20-byte array.
            #[must_use]
            pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
                Self(bytes)
            }

            /// Creates an address from a slice. Returns None if wrong length.
            #[must_use]
            pub fn from_slice(slice: &[u8]) -> Option<Self> {
                let bytes: [u8; ADDRESS_LENGTH] = slice.try_into().ok()?;
                Some(Self(bytes))
            }

            /// Returns the underlying bytes.
            #[must_use]
            pub const fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
                &self.0
            }

            /// Returns true if this is the zero address.
            #[must_use]
            pub fn is_zero(&self) -> bool {
                self.0 == [0u8; ADDRESS_LENGTH]
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(0x{})", stringify!($name), hex::encode(self.0))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl FromStr for $name {
            type Err = AddressError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_address_bytes(s).map(Self)
            }
        }

        impl From<[u8; ADDRESS_LENGTH]> for $name {
            fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; ADDRESS_LENGTH] {
            fn from(addr: $name) -> Self {
                addr.0
            }
        }
    };
}

address_type! {
    /// A 20-byte EVM-side account address.
    EvmAddress
}

address_type! {
    /// A 20-byte account address on the native (bank) ledger.
    ///
    /// Only reachable from an [`EvmAddress`] through an association lookup.
    NativeAddress
}

// =============================================================================
// VALUE
// =============================================================================

/// A token denomination on the native ledger (e.g. `"unative"`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Denom(String);

impl Denom {
    /// Creates a denomination. Emptiness is checked by the caller that cares.
    pub fn new(denom: impl Into<String>) -> Self {
        Self(denom.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Denom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Denom({:?})", self.0)
    }
}

impl fmt::Display for Denom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Denom {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Denom {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// An amount of a single denomination.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: Denom,
    pub amount: U256,
}

impl Coin {
    pub fn new(denom: impl Into<Denom>, amount: impl Into<U256>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

// =============================================================================
// ADMISSION
// =============================================================================

/// Opaque identifier of a pending transaction: the SHA-256 of its raw bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct TxKey(pub [u8; 32]);

impl TxKey {
    /// Derives the key from the raw transaction bytes.
    pub fn from_tx_bytes(tx: &[u8]) -> Self {
        use sha2::{Digest, Sha256};
        Self(Sha256::digest(tx).into())
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for TxKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxKey({})", hex::encode(&self.0[..6]))
    }
}

impl fmt::Display for TxKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}
