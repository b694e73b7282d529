//! # Inbound Port - BalanceApi
//!
//! Driving port used by the state-transition driver. `check_balance` runs
//! exactly once per reconciliation boundary, after every mutation of that
//! boundary has been applied.

use crate::domain::{BalanceError, EvmAddress, ExecutionContext, SignedAmount, U256};

/// Primary API for the balance reconciler.
pub trait BalanceApi {
    /// Credits `amount` (debits if negative). Zero is a no-op.
    ///
    /// # Errors
    /// - `InsufficientModuleBalance`: associated credit the pool cannot cover
    /// - `Overflow`: unassociated balance would exceed `u64::MAX`
    fn add_balance(
        &mut self,
        ctx: &mut ExecutionContext,
        address: &EvmAddress,
        amount: SignedAmount,
    ) -> Result<(), BalanceError>;

    /// Debits `amount` (credits if negative). Zero is a no-op.
    ///
    /// # Errors
    /// - `InsufficientBalance`: the address cannot cover the debit
    fn sub_balance(
        &mut self,
        ctx: &mut ExecutionContext,
        address: &EvmAddress,
        amount: SignedAmount,
    ) -> Result<(), BalanceError>;

    /// Current balance in the base denomination. Never fails.
    fn get_balance(&self, address: &EvmAddress) -> U256;

    /// Burns the pool surplus and resets the counter. Returns the amount burned.
    ///
    /// # Errors
    /// - `PriorExecutionError`: a mutation in `ctx` already failed
    /// - `ConservationViolation`: counter exceeds the pooled balance (fatal)
    fn check_balance(&mut self, ctx: &mut ExecutionContext) -> Result<U256, BalanceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn BalanceApi) {}
}
