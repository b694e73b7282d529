//! # Pending Nonce Sequencer
//!
//! ## Locking
//!
//! - `accounts`: sharded map of per-account slots; an account is only read or
//!   mutated while its shard guard is held
//! - `index`: sharded map from transaction identifier to account
//!
//! Guards are taken in the order `accounts` → `index`. An `index` guard is
//! never held while acquiring an `accounts` guard.

use super::account::AccountNonces;
use super::entities::{EvmAddress, SequencerConfig, TxKey};
use super::errors::SequencerError;
use crate::ports::inbound::NonceSequencerApi;
use crate::ports::outbound::CommittedNonceSource;
use dashmap::DashMap;
use dl_telemetry::{metric_inc, SEQUENCER_PENDING_NONCES, SEQUENCER_SCAN_LIMIT_HITS};
use std::sync::Arc;
use tracing::{debug, warn};

/// How a pending record leaves the sequencer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Release {
    Complete,
    Expire,
}

/// Concurrent pending nonce tracker.
pub struct PendingNonceSequencer<N: CommittedNonceSource> {
    config: SequencerConfig,
    committed: Arc<N>,
    accounts: DashMap<EvmAddress, AccountNonces>,
    index: DashMap<TxKey, EvmAddress>,
}

impl<N: CommittedNonceSource> PendingNonceSequencer<N> {
    pub fn new(config: SequencerConfig, committed: Arc<N>) -> Self {
        Self {
            config,
            committed,
            accounts: DashMap::new(),
            index: DashMap::new(),
        }
    }

    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    /// The committed nonce source.
    pub fn committed(&self) -> &Arc<N> {
        &self.committed
    }

    /// In-flight records for `address`.
    pub fn pending_count(&self, address: &EvmAddress) -> usize {
        self.accounts
            .get(address)
            .map_or(0, |account| account.pending_len())
    }

    /// In-flight records across all accounts.
    pub fn total_pending(&self) -> usize {
        self.index.len()
    }

    /// Accounts holding in-flight records or completed slots.
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_tracked(&self, tx: &TxKey) -> bool {
        self.index.contains_key(tx)
    }

    /// Drops completed slots already passed by the committed nonce, across
    /// every account. Returns the number of accounts forgotten.
    ///
    /// Covers accounts whose nonce was committed after their last completion
    /// and which are never queried again.
    pub fn prune_committed(&self) -> usize {
        let before = self.accounts.len();
        self.accounts.retain(|address, account| {
            account.prune_completed_below(self.committed.committed_nonce(address));
            !account.is_empty()
        });
        let pruned = before.saturating_sub(self.accounts.len());
        if pruned > 0 {
            debug!(pruned, "Pruned committed accounts");
        }
        pruned
    }

    fn release(&self, tx: &TxKey, how: Release) {
        let Some(address) = self.index.get(tx).map(|entry| *entry.value()) else {
            return;
        };

        let empty = {
            let Some(mut account) = self.accounts.get_mut(&address) else {
                return;
            };
            let released = match how {
                Release::Complete => account.complete(tx),
                Release::Expire => account.remove(tx),
            };
            let Some(nonce) = released else {
                return;
            };
            if how == Release::Complete {
                account.prune_completed_below(self.committed.committed_nonce(&address));
            }
            self.index.remove_if(tx, |_, owner| *owner == address);
            SEQUENCER_PENDING_NONCES.dec();
            debug!(tx = %tx, address = %address, nonce, ?how, "Pending nonce released");
            account.is_empty()
        };

        if empty {
            self.accounts.remove_if(&address, |_, account| account.is_empty());
        }
    }

    /// Removes the record `tx` left under `previous` after it was re-added
    /// elsewhere. Skipped if `tx` has since been re-added to `previous`.
    fn detach(&self, tx: &TxKey, previous: EvmAddress) {
        let empty = {
            let Some(mut account) = self.accounts.get_mut(&previous) else {
                return;
            };
            let owner = self.index.get(tx).map(|entry| *entry.value());
            if owner == Some(previous) {
                return;
            }
            if let Some(nonce) = account.remove(tx) {
                SEQUENCER_PENDING_NONCES.dec();
                debug!(tx = %tx, address = %previous, nonce, "Pending nonce moved away");
            }
            account.is_empty()
        };

        if empty {
            self.accounts.remove_if(&previous, |_, account| account.is_empty());
        }
    }
}

impl<N: CommittedNonceSource> NonceSequencerApi for PendingNonceSequencer<N> {
    fn add_pending_nonce(
        &self,
        tx: TxKey,
        address: EvmAddress,
        nonce: u64,
    ) -> Result<(), SequencerError> {
        let previous = {
            let mut account = self.accounts.entry(address).or_default();
            account.prune_completed_below(self.committed.committed_nonce(&address));

            let limit = self.config.max_pending_per_account;
            if !account.contains(&tx) && account.pending_len() >= limit {
                let empty = account.is_empty();
                drop(account);
                if empty {
                    self.accounts.remove_if(&address, |_, account| account.is_empty());
                }
                warn!(address = %address, limit, "Pending nonce limit reached");
                return Err(SequencerError::AccountLimitReached { address, limit });
            }

            if account.insert(tx, nonce).is_none() {
                SEQUENCER_PENDING_NONCES.inc();
            }
            // Updated under the account guard; `detach` relies on it.
            self.index.insert(tx, address)
        };
        debug!(tx = %tx, address = %address, nonce, "Pending nonce added");

        if let Some(previous) = previous.filter(|previous| *previous != address) {
            self.detach(&tx, previous);
        }
        Ok(())
    }

    fn complete_pending_nonce(&self, tx: &TxKey) {
        self.release(tx, Release::Complete);
    }

    fn expire_pending_nonce(&self, tx: &TxKey) {
        self.release(tx, Release::Expire);
    }

    fn calculate_next_nonce(
        &self,
        address: &EvmAddress,
        pending: bool,
    ) -> Result<u64, SequencerError> {
        let base = self.committed.committed_nonce(address);
        if !pending {
            return Ok(base);
        }

        let (next, empty) = {
            let Some(mut account) = self.accounts.get_mut(address) else {
                return Ok(base);
            };
            account.prune_completed_below(base);
            (
                account.next_free(base, self.config.max_scan_steps),
                account.is_empty(),
            )
        };

        if empty {
            self.accounts.remove_if(address, |_, account| account.is_empty());
        }

        next.ok_or_else(|| {
            metric_inc!(SEQUENCER_SCAN_LIMIT_HITS);
            let steps = self.config.max_scan_steps;
            warn!(address = %address, base, steps, "Next nonce scan limit exceeded");
            SequencerError::ScanLimitExceeded {
                address: *address,
                base,
                steps,
            }
        })
    }
}
