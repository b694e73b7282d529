//! # Execution Flows
//!
//! A block driver exercising the reconciler and the bank precompile together:
//!
//! 1. **Value transfer**: associated → unassociated through the module pool
//! 2. **Bridge call**: precompile `send` between associated accounts
//! 3. **Rollback**: failed transaction restored from a checkpoint, block still
//!    reconciles
//! 4. **Fabrication**: an unbacked credit halts the block

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, U256 as AbiU256};
    use alloy_sol_types::{SolCall, SolValue};

    use dl_01_balance_reconciler::{
        BalanceApi, BalanceError, BalanceReconciler, Coin, Denom, ErrorKind, EvmAddress,
        ExecutionContext, MemoryAssociationIndex, MemoryBalanceStore, MemoryNativeLedger,
        NativeAddress, NativeLedger, ReconcilerConfig, SignedAmount, U256,
    };
    use dl_03_bank_precompile::{
        BankPrecompile, CallContext, IBank, PrecompileError, PrecompiledContract,
    };

    type Reconciler =
        BalanceReconciler<MemoryAssociationIndex, MemoryNativeLedger, MemoryBalanceStore>;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const ALICE: EvmAddress = EvmAddress::new([0xA1; 20]);
    const CAROL: EvmAddress = EvmAddress::new([0xC1; 20]);
    const BOB: EvmAddress = EvmAddress::new([0xB0; 20]);
    const ALICE_NATIVE: NativeAddress = NativeAddress::new([0x1A; 20]);
    const CAROL_NATIVE: NativeAddress = NativeAddress::new([0x1C; 20]);

    fn base() -> Denom {
        Denom::new("unative")
    }

    /// ALICE and CAROL are associated; BOB is EVM-only. ALICE holds 1000.
    fn create_chain() -> Reconciler {
        let config = ReconcilerConfig::default();
        let mut associations = MemoryAssociationIndex::new();
        associations.associate(ALICE, ALICE_NATIVE);
        associations.associate(CAROL, CAROL_NATIVE);
        let mut ledger = MemoryNativeLedger::new().with_module(&config.module_account);
        ledger.mint(&ALICE_NATIVE, &Coin::new(base(), 1_000u64)).unwrap();
        BalanceReconciler::new(config, associations, ledger, MemoryBalanceStore::new())
    }

    fn module_balance(chain: &Reconciler) -> U256 {
        let module = chain.ledger().module_address("evm").unwrap();
        chain.native_balance(&module, &base())
    }

    /// Applies a value transfer, restoring the checkpoint on failure.
    fn execute_transfer(
        chain: &mut Reconciler,
        ctx: &mut ExecutionContext,
        from: &EvmAddress,
        to: &EvmAddress,
        value: u64,
    ) -> Result<(), BalanceError> {
        let checkpoint = (chain.clone(), ctx.clone());
        let result = chain
            .sub_balance(ctx, from, value.into())
            .and_then(|()| chain.add_balance(ctx, to, value.into()));
        if result.is_err() {
            (*chain, *ctx) = checkpoint;
        }
        result
    }

    fn send_call(from: EvmAddress, to: EvmAddress, denom: &str, amount: u64) -> Vec<u8> {
        SolCall::abi_encode(&IBank::sendCall {
            from: Address::from(*from.as_bytes()),
            to: Address::from(*to.as_bytes()),
            denom: denom.into(),
            amount: AbiU256::from(amount),
        })
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[test]
    fn test_associated_to_unassociated_transfer_reconciles() {
        let mut chain = create_chain();
        let mut ctx = ExecutionContext::new();

        execute_transfer(&mut chain, &mut ctx, &ALICE, &BOB, 300).unwrap();

        assert_eq!(chain.get_balance(&ALICE), U256::from(700u64));
        assert_eq!(chain.get_balance(&BOB), U256::from(300u64));
        assert_eq!(module_balance(&chain), U256::from(300u64));
        assert_eq!(ctx.conservation_counter(), 300);

        let burned = chain.check_balance(&mut ctx).unwrap();
        assert_eq!(burned, U256::zero());
        assert_eq!(ctx.conservation_counter(), 0);
    }

    #[test]
    fn test_minted_surplus_is_burned() {
        let mut chain = create_chain();
        let mut ctx = ExecutionContext::new();
        let module = chain.ledger().module_address("evm").unwrap();

        execute_transfer(&mut chain, &mut ctx, &ALICE, &BOB, 100).unwrap();
        chain.ledger_mut().mint(&module, &Coin::new(base(), 40u64)).unwrap();

        assert_eq!(chain.check_balance(&mut ctx).unwrap(), U256::from(40u64));
        assert_eq!(module_balance(&chain), U256::from(100u64));
        assert_eq!(chain.ledger().total_supply(&base()), U256::from(1_000u64));
    }

    #[test]
    fn test_bridge_send_inside_block() {
        let mut chain = create_chain();
        let mut ctx = ExecutionContext::new();
        let precompile = BankPrecompile::default();

        execute_transfer(&mut chain, &mut ctx, &ALICE, &BOB, 200).unwrap();
        let out = precompile
            .run(
                &CallContext::new(ALICE),
                &mut chain,
                &send_call(ALICE, CAROL, "unative", 50),
            )
            .unwrap();

        assert!(bool::abi_decode(&out).unwrap());
        assert_eq!(chain.get_balance(&ALICE), U256::from(750u64));
        assert_eq!(chain.get_balance(&CAROL), U256::from(50u64));
        // Bridge transfers never touch the counter.
        assert_eq!(ctx.conservation_counter(), 200);
        assert_eq!(chain.check_balance(&mut ctx).unwrap(), U256::zero());
    }

    #[test]
    fn test_bridge_revert_leaves_block_reconcilable() {
        let mut chain = create_chain();
        let mut ctx = ExecutionContext::new();
        let precompile = BankPrecompile::default();

        let err = precompile
            .run(
                &CallContext::new(ALICE),
                &mut chain,
                &send_call(ALICE, BOB, "unative", 10),
            )
            .unwrap_err();

        assert_eq!(err, PrecompileError::MissingAssociation(BOB));
        assert_eq!(chain.get_balance(&ALICE), U256::from(1_000u64));
        assert!(chain.check_balance(&mut ctx).is_ok());
    }

    #[test]
    fn test_bridge_overdraft_surfaces_ledger_error() {
        let mut chain = create_chain();
        let precompile = BankPrecompile::default();

        let err = precompile
            .run(
                &CallContext::new(CAROL),
                &mut chain,
                &send_call(CAROL, ALICE, "unative", 1),
            )
            .unwrap_err();

        assert!(matches!(err, PrecompileError::Bank(BalanceError::Ledger(_))));
    }

    #[test]
    fn test_failed_transaction_is_rolled_back() {
        let mut chain = create_chain();
        let mut ctx = ExecutionContext::new();

        execute_transfer(&mut chain, &mut ctx, &ALICE, &BOB, 100).unwrap();
        let err = execute_transfer(&mut chain, &mut ctx, &BOB, &ALICE, 500).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UserRecoverable);
        assert!(!ctx.has_error());
        assert_eq!(chain.get_balance(&BOB), U256::from(100u64));
        assert_eq!(chain.check_balance(&mut ctx).unwrap(), U256::zero());
    }

    #[test]
    fn test_unrolled_error_blocks_reconciliation() {
        let mut chain = create_chain();
        let mut ctx = ExecutionContext::new();

        let _ = chain.sub_balance(&mut ctx, &BOB, 1u64.into());
        chain
            .add_balance(&mut ctx, &ALICE, SignedAmount::ZERO)
            .unwrap();

        assert!(matches!(
            chain.check_balance(&mut ctx),
            Err(BalanceError::PriorExecutionError { .. })
        ));
    }

    #[test]
    fn test_fabricated_credit_halts_block() {
        let mut chain = create_chain();
        let mut ctx = ExecutionContext::new();

        chain.add_balance(&mut ctx, &BOB, 10u64.into()).unwrap();
        let err = chain.check_balance(&mut ctx).unwrap_err();

        assert!(err.is_fatal());
        assert_eq!(err.kind(), ErrorKind::ConsistencyFatal);
        assert_eq!(ctx.error(), Some(&err));
    }

    #[test]
    fn test_pool_shortfall_on_associated_credit() {
        let mut chain = create_chain();
        let mut ctx = ExecutionContext::new();

        let err = chain.add_balance(&mut ctx, &CAROL, 1u64.into()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InternalInvariant);
        assert!(matches!(err, BalanceError::InsufficientModuleBalance { .. }));
    }
}
