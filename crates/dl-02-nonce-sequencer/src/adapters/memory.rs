//! In-memory committed nonce store.

use crate::domain::EvmAddress;
use crate::ports::outbound::CommittedNonceSource;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Committed nonces behind a read-write lock. `set_nonce` models block commit.
#[derive(Debug, Default)]
pub struct MemoryNonceStore {
    nonces: RwLock<HashMap<EvmAddress, u64>>,
}

impl MemoryNonceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_nonce(&self, address: EvmAddress, nonce: u64) {
        self.nonces.write().insert(address, nonce);
    }
}

impl CommittedNonceSource for MemoryNonceStore {
    fn committed_nonce(&self, address: &EvmAddress) -> u64 {
        self.nonces.read().get(address).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_address_is_zero() {
        let store = MemoryNonceStore::new();
        assert_eq!(store.committed_nonce(&EvmAddress::new([1; 20])), 0);
    }

    #[test]
    fn test_set_nonce_overwrites() {
        let store = MemoryNonceStore::new();
        let addr = EvmAddress::new([1; 20]);
        store.set_nonce(addr, 5);
        store.set_nonce(addr, 6);
        assert_eq!(store.committed_nonce(&addr), 6);
    }
}
