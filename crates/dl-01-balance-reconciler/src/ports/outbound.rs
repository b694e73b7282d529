//! Outbound (Driven) ports for the balance reconciler.
//!
//! These traits describe the collaborators the reconciler consumes. None of
//! them is owned here; the in-memory adapters exist for tests and tooling.

use crate::domain::{
    Coin, Denom, EvmAddress, LedgerError, NativeAddress, ReconcilerConfig, U256,
};

/// Read-only view of the EVM ↔ native address association.
pub trait AssociationIndex: Send + Sync {
    /// Returns the native address associated with `address`, if any.
    ///
    /// An address is "associated" iff this returns `Some`.
    fn lookup(&self, address: &EvmAddress) -> Option<NativeAddress>;
}

/// The authoritative native-asset ledger.
pub trait NativeLedger: Send + Sync {
    /// Resolves a module account name to its address.
    fn module_address(&self, module: &str) -> Result<NativeAddress, LedgerError>;

    /// Returns the balance of `denom` held at `address` (zero if none).
    fn balance(&self, address: &NativeAddress, denom: &Denom) -> U256;

    /// Returns true if `address` holds at least `coin`.
    fn has_at_least(&self, address: &NativeAddress, coin: &Coin) -> bool {
        self.balance(address, &coin.denom) >= coin.amount
    }

    /// Moves `coin` from `from` to `to`.
    ///
    /// # Errors
    /// - `InsufficientFunds` if `from` cannot cover the amount
    /// - `InvalidCoin` for an empty denomination
    fn transfer(
        &mut self,
        from: &NativeAddress,
        to: &NativeAddress,
        coin: &Coin,
    ) -> Result<(), LedgerError>;

    /// Burns `coin` from the named module account, reducing total supply.
    fn burn(&mut self, module: &str, coin: &Coin) -> Result<(), LedgerError>;
}

/// Durable per-account EVM-only balances.
///
/// INVARIANT: "no entry" and "entry with value zero" are equivalent. Writing
/// zero deletes the entry; reading an absent entry yields zero.
pub trait BalanceStore: Send + Sync {
    fn balance_entry(&self, address: &EvmAddress) -> u64;

    fn set_balance_entry(&mut self, address: &EvmAddress, value: u64);
}

/// Supplies the chain's base denomination.
pub trait DenomProvider: Send + Sync {
    fn base_denom(&self) -> Denom;
}

impl DenomProvider for ReconcilerConfig {
    fn base_denom(&self) -> Denom {
        self.base_denom.clone()
    }
}
