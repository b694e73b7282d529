//! In-memory collaborators.
//!
//! Used by tests, benches and local tooling. Every adapter is `Clone`, so the
//! whole reconciler state can be checkpointed and restored.

use crate::domain::{Coin, Denom, EvmAddress, LedgerError, NativeAddress, U256};
use crate::ports::outbound::{AssociationIndex, BalanceStore, NativeLedger};
use sha2::{Digest, Sha256};
use std::collections::HashMap;

// =============================================================================
// ASSOCIATION INDEX
// =============================================================================

/// Bidirectional EVM ↔ native address map.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssociationIndex {
    forward: HashMap<EvmAddress, NativeAddress>,
    reverse: HashMap<NativeAddress, EvmAddress>,
}

impl MemoryAssociationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an association, replacing any previous mapping of either side.
    pub fn associate(&mut self, evm: EvmAddress, native: NativeAddress) {
        if let Some(old) = self.forward.insert(evm, native) {
            self.reverse.remove(&old);
        }
        if let Some(old) = self.reverse.insert(native, evm) {
            if old != evm {
                self.forward.remove(&old);
            }
        }
    }

    /// Reverse lookup.
    pub fn evm_address(&self, native: &NativeAddress) -> Option<EvmAddress> {
        self.reverse.get(native).copied()
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

impl AssociationIndex for MemoryAssociationIndex {
    fn lookup(&self, address: &EvmAddress) -> Option<NativeAddress> {
        self.forward.get(address).copied()
    }
}

// =============================================================================
// NATIVE LEDGER
// =============================================================================

/// Multi-denomination bank ledger with named module accounts.
#[derive(Debug, Clone, Default)]
pub struct MemoryNativeLedger {
    balances: HashMap<(NativeAddress, Denom), U256>,
    modules: HashMap<String, NativeAddress>,
    supply: HashMap<Denom, U256>,
}

impl MemoryNativeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a module account. Its address is derived from the name.
    #[must_use]
    pub fn with_module(mut self, name: &str) -> Self {
        self.modules
            .insert(name.to_string(), derive_module_address(name));
        self
    }

    /// Creates `coin` at `address`, increasing total supply.
    pub fn mint(&mut self, address: &NativeAddress, coin: &Coin) -> Result<(), LedgerError> {
        let key = (*address, coin.denom.clone());
        let balance = self.checked_credit(&key, coin)?;
        let supply = self
            .total_supply(&coin.denom)
            .checked_add(coin.amount)
            .ok_or_else(|| LedgerError::InvalidCoin(format!("supply overflow minting {coin}")))?;
        self.set_balance(key, balance);
        self.supply.insert(coin.denom.clone(), supply);
        Ok(())
    }

    pub fn total_supply(&self, denom: &Denom) -> U256 {
        self.supply.get(denom).copied().unwrap_or_default()
    }

    fn checked_credit(
        &self,
        key: &(NativeAddress, Denom),
        coin: &Coin,
    ) -> Result<U256, LedgerError> {
        self.balances
            .get(key)
            .copied()
            .unwrap_or_default()
            .checked_add(coin.amount)
            .ok_or_else(|| LedgerError::InvalidCoin(format!("balance overflow crediting {coin}")))
    }

    /// Balance left at `address` after removing `coin`.
    fn checked_debit(&self, address: &NativeAddress, coin: &Coin) -> Result<U256, LedgerError> {
        if coin.denom.is_empty() {
            return Err(LedgerError::InvalidCoin(coin.to_string()));
        }
        let available = self.balance(address, &coin.denom);
        available
            .checked_sub(coin.amount)
            .ok_or_else(|| LedgerError::InsufficientFunds {
                address: *address,
                denom: coin.denom.clone(),
                required: coin.amount,
                available,
            })
    }

    fn set_balance(&mut self, key: (NativeAddress, Denom), value: U256) {
        if value.is_zero() {
            self.balances.remove(&key);
        } else {
            self.balances.insert(key, value);
        }
    }
}

fn derive_module_address(name: &str) -> NativeAddress {
    let digest = Sha256::digest(name.as_bytes());
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&digest[..20]);
    NativeAddress::new(bytes)
}

impl NativeLedger for MemoryNativeLedger {
    fn module_address(&self, module: &str) -> Result<NativeAddress, LedgerError> {
        self.modules
            .get(module)
            .copied()
            .ok_or_else(|| LedgerError::UnknownModuleAccount(module.to_string()))
    }

    fn balance(&self, address: &NativeAddress, denom: &Denom) -> U256 {
        self.balances
            .get(&(*address, denom.clone()))
            .copied()
            .unwrap_or_default()
    }

    fn transfer(
        &mut self,
        from: &NativeAddress,
        to: &NativeAddress,
        coin: &Coin,
    ) -> Result<(), LedgerError> {
        let remaining = self.checked_debit(from, coin)?;
        if from == to {
            return Ok(());
        }
        let key = (*to, coin.denom.clone());
        let credited = self.checked_credit(&key, coin)?;
        self.set_balance((*from, coin.denom.clone()), remaining);
        self.set_balance(key, credited);
        Ok(())
    }

    fn burn(&mut self, module: &str, coin: &Coin) -> Result<(), LedgerError> {
        let address = self.module_address(module)?;
        let remaining = self.checked_debit(&address, coin)?;
        self.set_balance((address, coin.denom.clone()), remaining);
        if let Some(supply) = self.supply.get_mut(&coin.denom) {
            *supply = supply.saturating_sub(coin.amount);
        }
        Ok(())
    }
}

// =============================================================================
// BALANCE STORE
// =============================================================================

/// Sparse EVM-only balance store.
#[derive(Debug, Clone, Default)]
pub struct MemoryBalanceStore {
    entries: HashMap<EvmAddress, u64>,
}

impl MemoryBalanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored (non-zero) entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all entries.
    pub fn total(&self) -> U256 {
        self.entries
            .values()
            .fold(U256::zero(), |acc, v| acc + U256::from(*v))
    }
}

impl BalanceStore for MemoryBalanceStore {
    fn balance_entry(&self, address: &EvmAddress) -> u64 {
        self.entries.get(address).copied().unwrap_or(0)
    }

    fn set_balance_entry(&mut self, address: &EvmAddress, value: u64) {
        if value == 0 {
            self.entries.remove(address);
        } else {
            self.entries.insert(*address, value);
        }
    }
}
