//! ABI bindings for the bank interface.
//!
//! Decoding produces a closed [`BankCall`] with domain types; alloy types do
//! not leak past this module.

use super::entities::{BankMethod, Denom, EvmAddress, U256};
use super::errors::PrecompileError;
use alloy_primitives::{Address, U256 as AbiU256};
use alloy_sol_types::{sol, SolCall, SolInterface, SolValue};

sol! {
    /// Native-ledger bank operations callable from EVM code.
    interface IBank {
        /// Moves `amount` of `denom` between two associated accounts.
        function send(address from, address to, string denom, uint256 amount) external returns (bool success);

        /// Native balance of `denom` held by an associated account.
        function balance(address acc, string denom) external view returns (uint256 amount);
    }
}

/// A decoded bank call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BankCall {
    Send {
        from: EvmAddress,
        to: EvmAddress,
        denom: Denom,
        amount: U256,
    },
    Balance {
        account: EvmAddress,
        denom: Denom,
    },
}

impl BankCall {
    /// Decodes full call input (selector included).
    pub fn decode(input: &[u8]) -> Result<Self, PrecompileError> {
        let call = IBank::IBankCalls::abi_decode(input)
            .map_err(|e| PrecompileError::AbiDecode(e.to_string()))?;
        Ok(match call {
            IBank::IBankCalls::send(c) => Self::Send {
                from: to_evm_address(c.from),
                to: to_evm_address(c.to),
                denom: Denom::new(c.denom),
                amount: to_u256(c.amount),
            },
            IBank::IBankCalls::balance(c) => Self::Balance {
                account: to_evm_address(c.acc),
                denom: Denom::new(c.denom),
            },
        })
    }

    pub fn method(&self) -> BankMethod {
        match self {
            Self::Send { .. } => BankMethod::Send,
            Self::Balance { .. } => BankMethod::Balance,
        }
    }
}

/// Resolves a 4-byte selector to a bank method.
pub fn method_for_selector(selector: [u8; 4]) -> Option<BankMethod> {
    match selector {
        s if s == IBank::sendCall::SELECTOR => Some(BankMethod::Send),
        s if s == IBank::balanceCall::SELECTOR => Some(BankMethod::Balance),
        _ => None,
    }
}

pub fn encode_send_output(success: bool) -> Vec<u8> {
    success.abi_encode()
}

pub fn encode_balance_output(amount: U256) -> Vec<u8> {
    from_u256(amount).abi_encode()
}

fn to_evm_address(address: Address) -> EvmAddress {
    EvmAddress::new(address.into_array())
}

fn to_u256(value: AbiU256) -> U256 {
    U256::from_big_endian(&value.to_be_bytes::<32>())
}

fn from_u256(value: U256) -> AbiU256 {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    AbiU256::from_be_bytes(bytes)
}
