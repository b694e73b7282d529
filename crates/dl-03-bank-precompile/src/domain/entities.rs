//! Bank precompile entities.

use serde::Deserialize;
use std::fmt;

pub use shared_types::{Coin, Denom, EvmAddress, NativeAddress, U256};

/// Address the bank precompile is installed at.
pub const BANK_ADDRESS: EvmAddress = EvmAddress::new([
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x10, 0x01,
]);

/// The closed set of bank methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BankMethod {
    Send,
    Balance,
}

impl BankMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Send => "send",
            Self::Balance => "balance",
        }
    }

    /// True for state-mutating methods.
    pub fn is_transaction(&self) -> bool {
        match self {
            Self::Send => true,
            Self::Balance => false,
        }
    }
}

impl fmt::Display for BankMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Caller-side context of one precompile invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallContext {
    pub caller: EvmAddress,
    /// Set for `STATICCALL` frames.
    pub read_only: bool,
}

impl CallContext {
    pub fn new(caller: EvmAddress) -> Self {
        Self {
            caller,
            read_only: false,
        }
    }

    pub fn read_only(caller: EvmAddress) -> Self {
        Self {
            caller,
            read_only: true,
        }
    }
}

/// Precompile configuration: install address and gas schedule.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PrecompileConfig {
    pub address: EvmAddress,
    pub read_cost_flat: u64,
    pub read_cost_per_byte: u64,
    pub write_cost_flat: u64,
    pub write_cost_per_byte: u64,
}

impl Default for PrecompileConfig {
    fn default() -> Self {
        Self {
            address: BANK_ADDRESS,
            read_cost_flat: 1_000,
            read_cost_per_byte: 3,
            write_cost_flat: 2_000,
            write_cost_per_byte: 30,
        }
    }
}

impl PrecompileConfig {
    /// Creates a config for testing with round numbers.
    pub fn for_testing() -> Self {
        Self {
            read_cost_flat: 100,
            read_cost_per_byte: 1,
            write_cost_flat: 200,
            write_cost_per_byte: 10,
            ..Default::default()
        }
    }

    /// Flat and per-byte cost for `method`.
    pub fn schedule(&self, method: BankMethod) -> (u64, u64) {
        if method.is_transaction() {
            (self.write_cost_flat, self.write_cost_per_byte)
        } else {
            (self.read_cost_flat, self.read_cost_per_byte)
        }
    }
}
