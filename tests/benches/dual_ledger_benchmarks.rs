//! # Dual-Ledger Benchmarks
//!
//! | Subsystem | Operation | Target |
//! |-----------|-----------|--------|
//! | dl-01 Balance Reconciler | unassociated credit/debit pair | < 1µs |
//! | dl-02 Nonce Sequencer | next nonce over N pending | < 100µs at N = 4096 |
//! | dl-03 Bank Precompile | required gas + send dispatch | < 10µs |

use alloy_primitives::{Address, U256 as AbiU256};
use alloy_sol_types::SolCall;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;

use dl_01_balance_reconciler::{
    BalanceApi, BalanceReconciler, Coin, EvmAddress, ExecutionContext, MemoryAssociationIndex,
    MemoryBalanceStore, MemoryNativeLedger, NativeAddress, ReconcilerConfig,
};
use dl_02_nonce_sequencer::{
    MemoryNonceStore, NonceSequencerApi, PendingNonceSequencer, SequencerConfig, TxKey,
};
use dl_03_bank_precompile::{BankPrecompile, CallContext, IBank, PrecompiledContract};

// ============================================================================
// DL-01: Balance Reconciler
// ============================================================================

fn bench_reconciler(c: &mut Criterion) {
    let mut group = c.benchmark_group("dl-01-balance-reconciler");
    let holder = EvmAddress::new([0xB0; 20]);

    group.bench_function("unassociated_credit_debit", |b| {
        let mut reconciler = BalanceReconciler::new(
            ReconcilerConfig::default(),
            MemoryAssociationIndex::new(),
            MemoryNativeLedger::new().with_module("evm"),
            MemoryBalanceStore::new(),
        );
        let mut ctx = ExecutionContext::new();
        b.iter(|| {
            reconciler
                .add_balance(&mut ctx, &holder, black_box(25u64).into())
                .ok();
            reconciler
                .sub_balance(&mut ctx, &holder, black_box(25u64).into())
                .ok();
        })
    });

    group.finish();
}

// ============================================================================
// DL-02: Nonce Sequencer
// ============================================================================

fn bench_sequencer(c: &mut Criterion) {
    let mut group = c.benchmark_group("dl-02-nonce-sequencer");
    let address = EvmAddress::new([0x11; 20]);

    for pending in [16u64, 256, 4_096] {
        let seq = PendingNonceSequencer::new(
            SequencerConfig::default(),
            Arc::new(MemoryNonceStore::new()),
        );
        for nonce in 0..pending {
            seq.add_pending_nonce(TxKey::from_tx_bytes(&nonce.to_be_bytes()), address, nonce)
                .ok();
        }

        group.throughput(Throughput::Elements(pending));
        group.bench_with_input(
            BenchmarkId::new("calculate_next_nonce", pending),
            &seq,
            |b, seq| b.iter(|| black_box(seq.calculate_next_nonce(&address, true).ok())),
        );
    }

    group.finish();
}

// ============================================================================
// DL-03: Bank Precompile
// ============================================================================

fn bench_precompile(c: &mut Criterion) {
    let mut group = c.benchmark_group("dl-03-bank-precompile");
    let alice = EvmAddress::new([0xA1; 20]);
    let carol = EvmAddress::new([0xC1; 20]);
    let alice_native = NativeAddress::new([0x1A; 20]);

    let mut associations = MemoryAssociationIndex::new();
    associations.associate(alice, alice_native);
    associations.associate(carol, NativeAddress::new([0x1C; 20]));
    let mut ledger = MemoryNativeLedger::new().with_module("evm");
    ledger.mint(&alice_native, &Coin::new("uatom", u64::MAX)).unwrap();
    let mut reconciler = BalanceReconciler::new(
        ReconcilerConfig::default(),
        associations,
        ledger,
        MemoryBalanceStore::new(),
    );

    let precompile = BankPrecompile::default();
    let input = SolCall::abi_encode(&IBank::sendCall {
        from: Address::from(*alice.as_bytes()),
        to: Address::from(*carol.as_bytes()),
        denom: "uatom".into(),
        amount: AbiU256::from(1u64),
    });
    let call = CallContext::new(alice);

    group.bench_function("required_gas", |b| {
        b.iter(|| black_box(precompile.required_gas(black_box(&input))))
    });
    group.bench_function("run_send", |b| {
        b.iter(|| black_box(precompile.run(&call, &mut reconciler, &input).is_ok()))
    });

    group.finish();
}

criterion_group!(benches, bench_reconciler, bench_sequencer, bench_precompile);
criterion_main!(benches);
