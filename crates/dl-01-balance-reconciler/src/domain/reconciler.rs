//! # Balance Reconciler
//!
//! Routes balance mutations to the native ledger (associated addresses) or to
//! the local EVM-only store (unassociated addresses), and reconciles the
//! pooled module account against the conservation counter.
//!
//! ## Routing
//!
//! | Address | Credit | Debit |
//! |---------|--------|-------|
//! | associated | module pool → native address | native address → module pool |
//! | unassociated | store += amount, counter += amount | store -= amount, counter -= amount |
//!
//! Every mutation result is recorded in the caller's [`ExecutionContext`];
//! `check_balance` refuses to run once an error has been recorded there.

use super::context::ExecutionContext;
use super::entities::{Coin, Denom, EvmAddress, NativeAddress, ReconcilerConfig, SignedAmount, U256};
use super::errors::{BalanceError, LedgerError};
use crate::ports::inbound::BalanceApi;
use crate::ports::outbound::{AssociationIndex, BalanceStore, DenomProvider, NativeLedger};
use dl_telemetry::{metric_inc, CONSERVATION_VIOLATIONS, RECONCILER_BURNED};
use tracing::{debug, error, info};

/// Dual-ledger balance reconciler.
///
/// Holds no locks. The surrounding state-transition driver serializes access
/// and owns rollback (by restoring the collaborators and the context).
#[derive(Debug, Clone)]
pub struct BalanceReconciler<A, L, S>
where
    A: AssociationIndex,
    L: NativeLedger,
    S: BalanceStore,
{
    config: ReconcilerConfig,
    associations: A,
    ledger: L,
    store: S,
}

impl<A, L, S> BalanceReconciler<A, L, S>
where
    A: AssociationIndex,
    L: NativeLedger,
    S: BalanceStore,
{
    pub fn new(config: ReconcilerConfig, associations: A, ledger: L, store: S) -> Self {
        Self {
            config,
            associations,
            ledger,
            store,
        }
    }

    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    pub fn associations(&self) -> &A {
        &self.associations
    }

    pub fn associations_mut(&mut self) -> &mut A {
        &mut self.associations
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the reconciler, returning its collaborators.
    pub fn into_parts(self) -> (A, L, S) {
        (self.associations, self.ledger, self.store)
    }

    /// Resolves the native identity of an EVM address.
    pub fn resolve_native(&self, address: &EvmAddress) -> Option<NativeAddress> {
        self.associations.lookup(address)
    }

    /// Native-ledger balance of an arbitrary denomination.
    pub fn native_balance(&self, address: &NativeAddress, denom: &Denom) -> U256 {
        self.ledger.balance(address, denom)
    }

    /// Direct native-to-native transfer of any denomination.
    ///
    /// Used by the bank precompile. Does not touch the conservation counter and
    /// is not recorded in an execution context.
    pub fn send_coins(
        &mut self,
        from: &NativeAddress,
        to: &NativeAddress,
        coin: &Coin,
    ) -> Result<(), BalanceError> {
        if coin.denom.is_empty() {
            return Err(BalanceError::InvalidAmount("empty denomination".into()));
        }
        if coin.is_zero() {
            return Ok(());
        }
        self.ledger.transfer(from, to, coin)?;
        Ok(())
    }

    /// Native address of the pooled module account.
    fn pool_address(&self) -> Result<NativeAddress, BalanceError> {
        self.ledger
            .module_address(&self.config.module_account)
            .map_err(|err| {
                error!(
                    module = %self.config.module_account,
                    error = %err,
                    "Module account unavailable"
                );
                err.into()
            })
    }

    fn base_coin(&self, amount: U256) -> Coin {
        Coin {
            denom: self.config.base_denom(),
            amount,
        }
    }

    // =========================================================================
    // CREDIT / DEBIT
    // =========================================================================

    fn credit(
        &mut self,
        ctx: &mut ExecutionContext,
        address: &EvmAddress,
        amount: U256,
    ) -> Result<(), BalanceError> {
        if let Some(native) = self.associations.lookup(address) {
            let module = self.pool_address()?;
            let coin = self.base_coin(amount);
            if !self.ledger.has_at_least(&module, &coin) {
                let balance = self.ledger.balance(&module, &coin.denom);
                error!(
                    evm_address = %address,
                    native_address = %native,
                    module = %module,
                    module_balance = %balance,
                    amount = %amount,
                    "Module pool cannot cover associated credit"
                );
                return Err(BalanceError::InsufficientModuleBalance {
                    module,
                    balance,
                    amount,
                });
            }
            return self
                .ledger
                .transfer(&module, &native, &coin)
                .map_err(|err| {
                    error!(
                        evm_address = %address,
                        native_address = %native,
                        module = %module,
                        amount = %amount,
                        error = %err,
                        "Module pool transfer failed"
                    );
                    err.into()
                });
        }

        let balance = self.store.balance_entry(address);
        if amount > U256::from(u64::MAX - balance) {
            error!(
                evm_address = %address,
                balance,
                amount = %amount,
                "Unassociated credit would overflow"
            );
            return Err(BalanceError::Overflow {
                address: *address,
                balance,
                amount,
            });
        }

        // Fits: amount <= u64::MAX - balance.
        let delta = amount.low_u64();
        let counter = ctx
            .checked_counter_add(i128::from(delta))
            .ok_or(BalanceError::CounterOverflow {
                counter: ctx.conservation_counter(),
                delta: amount,
            })?;
        self.store.set_balance_entry(address, balance + delta);
        ctx.set_counter(counter);
        Ok(())
    }

    fn debit(
        &mut self,
        ctx: &mut ExecutionContext,
        address: &EvmAddress,
        amount: U256,
    ) -> Result<(), BalanceError> {
        if let Some(native) = self.associations.lookup(address) {
            let module = self.pool_address()?;
            let coin = self.base_coin(amount);
            return self
                .ledger
                .transfer(&native, &module, &coin)
                .map_err(|err| match err {
                    LedgerError::InsufficientFunds { available, .. } => {
                        BalanceError::InsufficientBalance {
                            address: *address,
                            balance: available,
                            amount,
                        }
                    }
                    other => {
                        error!(
                            evm_address = %address,
                            native_address = %native,
                            module = %module,
                            amount = %amount,
                            error = %other,
                            "Transfer into module pool failed"
                        );
                        other.into()
                    }
                });
        }

        let balance = self.store.balance_entry(address);
        if amount > U256::from(balance) {
            debug!(
                evm_address = %address,
                balance,
                amount = %amount,
                "Insufficient unassociated balance"
            );
            return Err(BalanceError::InsufficientBalance {
                address: *address,
                balance: U256::from(balance),
                amount,
            });
        }

        let delta = amount.low_u64();
        let counter = ctx
            .checked_counter_add(-i128::from(delta))
            .ok_or(BalanceError::CounterOverflow {
                counter: ctx.conservation_counter(),
                delta: amount,
            })?;
        self.store.set_balance_entry(address, balance - delta);
        ctx.set_counter(counter);
        Ok(())
    }

    // =========================================================================
    // RECONCILIATION
    // =========================================================================

    fn reconcile(&mut self, ctx: &mut ExecutionContext) -> Result<U256, BalanceError> {
        let module = self.pool_address()?;
        let denom = self.config.base_denom();
        let module_balance = self.ledger.balance(&module, &denom);
        let counter = ctx.conservation_counter();
        let owed = U256::from(counter.unsigned_abs());

        let to_burn = if counter >= 0 {
            if owed > module_balance {
                metric_inc!(CONSERVATION_VIOLATIONS);
                error!(
                    module = %module,
                    module_balance = %module_balance,
                    counter,
                    "Conservation violated: unassociated balance exceeds module pool"
                );
                return Err(BalanceError::ConservationViolation {
                    module_balance,
                    counter,
                });
            }
            module_balance - owed
        } else {
            module_balance
                .checked_add(owed)
                .ok_or(BalanceError::CounterOverflow {
                    counter,
                    delta: module_balance,
                })?
        };

        if !to_burn.is_zero() {
            self.ledger.burn(&self.config.module_account, &Coin::new(denom, to_burn))?;
            RECONCILER_BURNED.inc_by(u256_to_f64(to_burn));
        }
        ctx.set_counter(0);

        info!(
            module_balance = %module_balance,
            counter,
            burned = %to_burn,
            "Balance reconciliation complete"
        );
        Ok(to_burn)
    }
}

impl<A, L, S> BalanceApi for BalanceReconciler<A, L, S>
where
    A: AssociationIndex,
    L: NativeLedger,
    S: BalanceStore,
{
    fn add_balance(
        &mut self,
        ctx: &mut ExecutionContext,
        address: &EvmAddress,
        amount: SignedAmount,
    ) -> Result<(), BalanceError> {
        if amount.is_zero() {
            return Ok(());
        }
        if amount.is_negative() {
            return self.sub_balance(ctx, address, -amount);
        }
        let result = self.credit(ctx, address, amount.magnitude());
        ctx.record(result)
    }

    fn sub_balance(
        &mut self,
        ctx: &mut ExecutionContext,
        address: &EvmAddress,
        amount: SignedAmount,
    ) -> Result<(), BalanceError> {
        if amount.is_zero() {
            return Ok(());
        }
        if amount.is_negative() {
            return self.add_balance(ctx, address, -amount);
        }
        let result = self.debit(ctx, address, amount.magnitude());
        ctx.record(result)
    }

    fn get_balance(&self, address: &EvmAddress) -> U256 {
        match self.associations.lookup(address) {
            Some(native) => self.ledger.balance(&native, &self.config.base_denom()),
            None => U256::from(self.store.balance_entry(address)),
        }
    }

    fn check_balance(&mut self, ctx: &mut ExecutionContext) -> Result<U256, BalanceError> {
        if let Some(first) = ctx.error() {
            return Err(BalanceError::PriorExecutionError {
                first: first.to_string(),
            });
        }
        let result = self.reconcile(ctx);
        ctx.record(result)
    }
}

fn u256_to_f64(value: U256) -> f64 {
    if value.bits() > 128 {
        u128::MAX as f64
    } else {
        value.low_u128() as f64
    }
}
