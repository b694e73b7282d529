//! Outbound (Driven) ports for the bank precompile.

use crate::domain::{Coin, Denom, EvmAddress, NativeAddress, U256};
use dl_01_balance_reconciler::BalanceError;

/// Native bank access as seen by the precompile.
pub trait BankKeeper {
    /// Native identity of an EVM address, if associated.
    fn resolve_native(&self, address: &EvmAddress) -> Option<NativeAddress>;

    /// Transfers `coin` between native accounts.
    fn send_coins(
        &mut self,
        from: &NativeAddress,
        to: &NativeAddress,
        coin: &Coin,
    ) -> Result<(), BalanceError>;

    /// Balance of `denom` held at `address`.
    fn balance(&self, address: &NativeAddress, denom: &Denom) -> U256;
}
