//! # Admission Flows
//!
//! Many admission workers asking the sequencer for nonces while blocks commit.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use dl_02_nonce_sequencer::{
        EvmAddress, MemoryNonceStore, NonceSequencerApi, PendingNonceSequencer,
        SequencerConfig, SequencerError, TxKey,
    };
    use rand::seq::SliceRandom;

    type Sequencer = PendingNonceSequencer<MemoryNonceStore>;

    fn account(n: u8) -> EvmAddress {
        EvmAddress::new([n; 20])
    }

    fn tx_key(address: &EvmAddress, nonce: u64) -> TxKey {
        let mut raw = address.as_bytes().to_vec();
        raw.extend_from_slice(&nonce.to_be_bytes());
        TxKey::from_tx_bytes(&raw)
    }

    fn create_sequencer() -> Arc<Sequencer> {
        Arc::new(PendingNonceSequencer::new(
            SequencerConfig::default(),
            Arc::new(MemoryNonceStore::new()),
        ))
    }

    /// Includes every pending transaction of `address` below `up_to`.
    fn commit_block(seq: &Sequencer, address: EvmAddress, up_to: u64) {
        let base = seq.calculate_next_nonce(&address, false).unwrap();
        seq.committed().set_nonce(address, up_to);
        for nonce in base..up_to {
            seq.complete_pending_nonce(&tx_key(&address, nonce));
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_many_accounts_admit_concurrently() {
        let seq = create_sequencer();

        let handles: Vec<_> = (1u8..=16)
            .flat_map(|a| (0u64..64).map(move |nonce| (account(a), nonce)))
            .map(|(address, nonce)| {
                let seq = Arc::clone(&seq);
                tokio::spawn(async move {
                    seq.add_pending_nonce(tx_key(&address, nonce), address, nonce)
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(seq.total_pending(), 16 * 64);
        for a in 1u8..=16 {
            assert_eq!(seq.pending_count(&account(a)), 64);
            assert_eq!(seq.calculate_next_nonce(&account(a), true).unwrap(), 64);
        }
    }

    #[test]
    fn test_out_of_order_admission_converges() {
        let seq = create_sequencer();
        let address = account(1);
        let mut nonces: Vec<u64> = (0..100).collect();
        nonces.shuffle(&mut rand::thread_rng());

        for nonce in nonces {
            seq.add_pending_nonce(tx_key(&address, nonce), address, nonce)
                .unwrap();
        }

        assert_eq!(seq.calculate_next_nonce(&address, true).unwrap(), 100);
    }

    #[test]
    fn test_commit_cycle_advances_and_prunes() {
        let seq = create_sequencer();
        let address = account(2);
        for nonce in 0..10 {
            seq.add_pending_nonce(tx_key(&address, nonce), address, nonce)
                .unwrap();
        }

        commit_block(&seq, address, 6);

        assert_eq!(seq.calculate_next_nonce(&address, false).unwrap(), 6);
        assert_eq!(seq.calculate_next_nonce(&address, true).unwrap(), 10);
        assert_eq!(seq.pending_count(&address), 4);

        // Dropped transaction at 7 reopens its slot.
        seq.expire_pending_nonce(&tx_key(&address, 7));
        assert_eq!(seq.calculate_next_nonce(&address, true).unwrap(), 7);

        commit_block(&seq, address, 7);
        assert_eq!(seq.calculate_next_nonce(&address, true).unwrap(), 7);

        seq.add_pending_nonce(tx_key(&address, 7), address, 7).unwrap();
        commit_block(&seq, address, 10);
        assert_eq!(seq.total_pending(), 0);
        assert_eq!(seq.account_count(), 0);
    }

    #[test]
    fn test_scan_bound_rejects_admission_advice() {
        let seq = Arc::new(PendingNonceSequencer::new(
            SequencerConfig {
                max_scan_steps: 8,
                max_pending_per_account: 64,
            },
            Arc::new(MemoryNonceStore::new()),
        ));
        let address = account(3);
        for nonce in 0..9 {
            seq.add_pending_nonce(tx_key(&address, nonce), address, nonce)
                .unwrap();
        }

        assert!(matches!(
            seq.calculate_next_nonce(&address, true),
            Err(SequencerError::ScanLimitExceeded { .. })
        ));

        commit_block(&seq, address, 4);
        assert_eq!(seq.calculate_next_nonce(&address, true).unwrap(), 9);
    }
}
