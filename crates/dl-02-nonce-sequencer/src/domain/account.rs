//! Per-account pending nonce slots.

use super::entities::TxKey;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Claimed and completed nonce slots of one account.
///
/// INVARIANTS:
/// - `claimed[n]` equals the number of `records` holding `n`
/// - a nonce is taken iff it is claimed or completed
#[derive(Debug, Clone, Default)]
pub struct AccountNonces {
    /// In-flight records by transaction identifier.
    records: HashMap<TxKey, u64>,
    /// Multiplicity of each claimed nonce.
    claimed: BTreeMap<u64, usize>,
    /// Completed slots not yet passed by the committed nonce.
    completed: BTreeSet<u64>,
}

impl AccountNonces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of in-flight records.
    pub fn pending_len(&self) -> usize {
        self.records.len()
    }

    pub fn contains(&self, tx: &TxKey) -> bool {
        self.records.contains_key(tx)
    }

    /// True if the account holds neither in-flight records nor completed slots.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.completed.is_empty()
    }

    pub fn is_taken(&self, nonce: u64) -> bool {
        self.claimed.contains_key(&nonce) || self.completed.contains(&nonce)
    }

    /// Records `tx` at `nonce`, returning the nonce it previously held.
    pub fn insert(&mut self, tx: TxKey, nonce: u64) -> Option<u64> {
        let previous = self.records.insert(tx, nonce);
        if let Some(old) = previous {
            self.unclaim(old);
        }
        *self.claimed.entry(nonce).or_insert(0) += 1;
        previous
    }

    /// Drops the record of `tx`, freeing its slot.
    pub fn remove(&mut self, tx: &TxKey) -> Option<u64> {
        let nonce = self.records.remove(tx)?;
        self.unclaim(nonce);
        Some(nonce)
    }

    /// Drops the record of `tx` but keeps its slot taken.
    pub fn complete(&mut self, tx: &TxKey) -> Option<u64> {
        let nonce = self.remove(tx)?;
        self.completed.insert(nonce);
        Some(nonce)
    }

    /// Forgets completed slots below `base`.
    pub fn prune_completed_below(&mut self, base: u64) {
        self.completed = self.completed.split_off(&base);
    }

    /// First untaken nonce >= `base`, stepping over at most `max_steps` taken
    /// slots. Returns `None` when the bound is hit.
    pub fn next_free(&self, base: u64, max_steps: u64) -> Option<u64> {
        let mut candidate = base;
        let mut steps = 0u64;
        while self.is_taken(candidate) {
            if steps >= max_steps {
                return None;
            }
            candidate = candidate.checked_add(1)?;
            steps += 1;
        }
        Some(candidate)
    }

    fn unclaim(&mut self, nonce: u64) {
        if let Some(count) = self.claimed.get_mut(&nonce) {
            *count -= 1;
            if *count == 0 {
                self.claimed.remove(&nonce);
            }
        }
    }
}
