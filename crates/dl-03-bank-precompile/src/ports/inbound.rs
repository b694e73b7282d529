//! # Inbound Port - PrecompiledContract
//!
//! Entry points consulted by the EVM interpreter.

use crate::domain::{CallContext, EvmAddress, PrecompileError};
use crate::ports::outbound::BankKeeper;

/// A precompiled contract backed by the native bank.
pub trait PrecompiledContract: Send + Sync {
    /// Install address.
    fn address(&self) -> EvmAddress;

    /// Minimum gas for `input`, consulted before execution. Never fails.
    fn required_gas(&self, input: &[u8]) -> u64;

    /// Executes the call and returns ABI-encoded output.
    ///
    /// # Errors
    /// Any error reverts the calling frame.
    fn run(
        &self,
        call: &CallContext,
        bank: &mut dyn BankKeeper,
        input: &[u8],
    ) -> Result<Vec<u8>, PrecompileError>;
}
