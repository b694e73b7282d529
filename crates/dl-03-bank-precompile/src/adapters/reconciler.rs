//! Routes precompile bank access through the balance reconciler.

use crate::domain::{Coin, Denom, EvmAddress, NativeAddress, U256};
use crate::ports::outbound::BankKeeper;
use dl_01_balance_reconciler::{
    AssociationIndex, BalanceError, BalanceReconciler, BalanceStore, NativeLedger,
};

impl<A, L, S> BankKeeper for BalanceReconciler<A, L, S>
where
    A: AssociationIndex,
    L: NativeLedger,
    S: BalanceStore,
{
    fn resolve_native(&self, address: &EvmAddress) -> Option<NativeAddress> {
        BalanceReconciler::resolve_native(self, address)
    }

    fn send_coins(
        &mut self,
        from: &NativeAddress,
        to: &NativeAddress,
        coin: &Coin,
    ) -> Result<(), BalanceError> {
        BalanceReconciler::send_coins(self, from, to, coin)
    }

    fn balance(&self, address: &NativeAddress, denom: &Denom) -> U256 {
        self.native_balance(address, denom)
    }
}
