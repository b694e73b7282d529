//! # Bank Precompile
//!
//! Gas estimation and dispatch for the `IBank` interface.

use super::abi::{encode_balance_output, encode_send_output, method_for_selector, BankCall};
use super::entities::{BankMethod, CallContext, Coin, Denom, EvmAddress, NativeAddress, PrecompileConfig, U256};
use super::errors::PrecompileError;
use crate::ports::inbound::PrecompiledContract;
use crate::ports::outbound::BankKeeper;
use dl_telemetry::{metric_inc, BRIDGE_CALLS};
use tracing::{debug, info_span, warn};

/// Length of the method selector prefix.
pub const SELECTOR_LEN: usize = 4;

/// The bank precompile.
#[derive(Clone, Debug, Default)]
pub struct BankPrecompile {
    config: PrecompileConfig,
}

impl BankPrecompile {
    pub fn new(config: PrecompileConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PrecompileConfig {
        &self.config
    }

    fn selector(input: &[u8]) -> Option<[u8; 4]> {
        input.get(..SELECTOR_LEN)?.try_into().ok()
    }

    fn dispatch(
        &self,
        call: &CallContext,
        bank: &mut dyn BankKeeper,
        input: &[u8],
    ) -> Result<Vec<u8>, PrecompileError> {
        let selector = Self::selector(input).ok_or(PrecompileError::InputTooShort { len: input.len() })?;
        let method = method_for_selector(selector).ok_or(PrecompileError::UnknownMethod(selector))?;
        if method.is_transaction() && call.read_only {
            return Err(PrecompileError::WriteProtection {
                method: method.name(),
            });
        }

        match BankCall::decode(input)? {
            BankCall::Send {
                from,
                to,
                denom,
                amount,
            } => self.send(bank, from, to, denom, amount),
            BankCall::Balance { account, denom } => self.balance(bank, account, denom),
        }
    }

    fn send(
        &self,
        bank: &mut dyn BankKeeper,
        from: EvmAddress,
        to: EvmAddress,
        denom: Denom,
        amount: U256,
    ) -> Result<Vec<u8>, PrecompileError> {
        if denom.is_empty() {
            return Err(PrecompileError::InvalidDenom);
        }
        if amount.is_zero() {
            return Ok(encode_send_output(true));
        }

        let sender = resolve(bank, &from)?;
        let receiver = resolve(bank, &to)?;
        let coin = Coin { denom, amount };
        bank.send_coins(&sender, &receiver, &coin)?;

        debug!(from = %from, to = %to, coin = %coin, "Bank send executed");
        Ok(encode_send_output(true))
    }

    fn balance(
        &self,
        bank: &mut dyn BankKeeper,
        account: EvmAddress,
        denom: Denom,
    ) -> Result<Vec<u8>, PrecompileError> {
        let native = resolve(bank, &account)?;
        if denom.is_empty() {
            return Err(PrecompileError::InvalidDenom);
        }
        Ok(encode_balance_output(bank.balance(&native, &denom)))
    }
}

fn resolve(bank: &dyn BankKeeper, address: &EvmAddress) -> Result<NativeAddress, PrecompileError> {
    if address.is_zero() {
        return Err(PrecompileError::InvalidAddress(*address));
    }
    bank.resolve_native(address)
        .ok_or(PrecompileError::MissingAssociation(*address))
}

impl PrecompiledContract for BankPrecompile {
    fn address(&self) -> EvmAddress {
        self.config.address
    }

    fn required_gas(&self, input: &[u8]) -> u64 {
        let Some(method) = Self::selector(input).and_then(method_for_selector) else {
            return 0;
        };
        let (flat, per_byte) = self.config.schedule(method);
        let arg_len = (input.len() - SELECTOR_LEN) as u64;
        flat.saturating_add(per_byte.saturating_mul(arg_len))
    }

    fn run(
        &self,
        call: &CallContext,
        bank: &mut dyn BankKeeper,
        input: &[u8],
    ) -> Result<Vec<u8>, PrecompileError> {
        let span = info_span!("precompile", precompile = "bank", caller = %call.caller);
        let _guard = span.enter();

        let method = Self::selector(input)
            .and_then(method_for_selector)
            .map_or("unknown", |m: BankMethod| m.name());
        let result = self.dispatch(call, bank, input);

        match &result {
            Ok(_) => metric_inc!(BRIDGE_CALLS, &[method, "ok"]),
            Err(err) => {
                metric_inc!(BRIDGE_CALLS, &[method, "error"]);
                warn!(method, error = %err, "Bank precompile call reverted");
            }
        }
        result
    }
}
