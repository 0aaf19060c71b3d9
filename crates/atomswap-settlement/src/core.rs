//! Entry-point composition — the boundary external callers invoke.
//!
//! [`SettlementCore`] owns all mutable state (ledger, key registry, nonce
//! set, escrow store) exclusively; nothing outside mutates it except
//! through these entry points. Each invocation runs to completion as a
//! single atomic step under the host's transaction model: no suspension
//! points, no intra-call parallelism. Every method orders its fallible
//! checks before its first mutation, so any failure leaves state exactly
//! as it was — no partial debits, no partial escrow creation, no burned
//! nonces.

use atomswap_escrow::{check_cancellation, check_withdrawal, EscrowStore};
use atomswap_ledger::{validate_order, BalanceLedger, KeyRegistry, NonceSet};
use atomswap_types::constants::SIGNATURE_LEN;
use atomswap_types::{
    AccountId, AssetId, AtomswapError, CoreConfig, Direction, EscrowRecord, EscrowState, Hashlock,
    Payout, PublicKey, RefundRewardPolicy, Result, Settlement, SignedOrder, Timelocks, Timestamp,
    TransferMessage,
};

use crate::supply_conservation::SupplyConservation;

/// Host-supplied context of a single entry-point invocation.
#[derive(Debug, Clone)]
pub struct CallContext {
    /// The authenticated caller (the host chain's native caller identity).
    pub caller: AccountId,
    /// Block/wall time of the call, UNIX seconds.
    pub now: Timestamp,
    /// Native tokens attached to the call (safety deposits).
    pub attached_deposit: u128,
}

impl CallContext {
    #[must_use]
    pub fn new(caller: AccountId, now: Timestamp) -> Self {
        Self {
            caller,
            now,
            attached_deposit: 0,
        }
    }

    #[must_use]
    pub fn with_deposit(caller: AccountId, now: Timestamp, attached_deposit: u128) -> Self {
        Self {
            caller,
            now,
            attached_deposit,
        }
    }
}

/// The settlement core: deposit ledger + HTLC escrow engine.
pub struct SettlementCore {
    config: CoreConfig,
    ledger: BalanceLedger,
    registry: KeyRegistry,
    nonces: NonceSet,
    escrows: EscrowStore,
    supply: SupplyConservation,
}

impl SettlementCore {
    #[must_use]
    pub fn new(config: CoreConfig) -> Self {
        Self {
            config,
            ledger: BalanceLedger::new(),
            registry: KeyRegistry::new(),
            nonces: NonceSet::new(),
            escrows: EscrowStore::new(),
            supply: SupplyConservation::new(),
        }
    }

    // =====================================================================
    // Key registry
    // =====================================================================

    /// Register order-signing keys for the calling account. Idempotent.
    pub fn register_keys(&mut self, ctx: &CallContext, keys: &[PublicKey]) {
        self.registry.register(&ctx.caller, keys);
        tracing::info!(account = %ctx.caller, count = keys.len(), "keys registered");
    }

    /// Unregister order-signing keys for the calling account. Removing an
    /// absent key is a no-op; already-consumed orders stay consumed.
    pub fn unregister_keys(&mut self, ctx: &CallContext, keys: &[PublicKey]) {
        self.registry.unregister(&ctx.caller, keys);
    }

    /// Keys currently registered for an account.
    #[must_use]
    pub fn registered_keys(&self, account: &AccountId) -> Vec<PublicKey> {
        self.registry.list(account)
    }

    // =====================================================================
    // Inbound transfers (deposit / destination escrow)
    // =====================================================================

    /// Inbound-transfer hook. The host invokes this when an asset transfer
    /// arrives carrying metadata; `ctx.caller` is the transferring account
    /// and `amount` the transferred amount. Any error means the host must
    /// revert the transfer in full — nothing is ever partially credited.
    pub fn on_transfer(
        &mut self,
        ctx: &CallContext,
        asset: &AssetId,
        amount: u128,
        msg: &str,
    ) -> Result<()> {
        if amount == 0 {
            return Err(AtomswapError::ZeroAmount);
        }

        match TransferMessage::parse(msg)? {
            TransferMessage::Deposit => {
                self.ledger.credit(&ctx.caller, asset, amount);
                self.supply.record_deposit(asset, amount);
                tracing::info!(account = %ctx.caller, asset = %asset, amount, "deposit credited");
                Ok(())
            }
            TransferMessage::CreateDestinationEscrow {
                hashlock,
                beneficiary,
                amount: declared,
                timelocks,
            } => {
                if declared != amount {
                    return Err(AtomswapError::InvalidTransferPayload {
                        reason: format!(
                            "declared amount {declared} does not match transferred {amount}"
                        ),
                    });
                }
                timelocks.validate()?;
                self.escrows.ensure_vacant(hashlock)?;

                self.escrows.insert(EscrowRecord {
                    hashlock,
                    payer: ctx.caller.clone(),
                    payee: beneficiary,
                    asset: asset.clone(),
                    amount,
                    safety_deposit: 0,
                    direction: Direction::Destination,
                    timelocks: Timelocks::new(ctx.now, timelocks),
                    state: EscrowState::Locked,
                    revealed_secret: None,
                })?;
                self.supply.record_deposit(asset, amount);
                Ok(())
            }
        }
    }

    // =====================================================================
    // Source escrow creation
    // =====================================================================

    /// Lock a maker's pre-deposited funds against their signed order.
    /// Called by a resolver, who must attach a native safety deposit.
    ///
    /// # Errors
    /// `MissingSafetyDeposit`, any validator error (`UnauthorizedKey`,
    /// `InvalidSignature`, `NonceReused`, `InvalidTimelocks`),
    /// `HashlockCollision`, or `InsufficientBalance` — each aborting the
    /// whole call with no state change.
    pub fn initiate_source_escrow(
        &mut self,
        ctx: &CallContext,
        order: &SignedOrder,
        sig_nonce: u128,
        signature: &[u8; SIGNATURE_LEN],
        public_key: &PublicKey,
    ) -> Result<Hashlock> {
        if ctx.attached_deposit < self.config.min_safety_deposit {
            return Err(AtomswapError::MissingSafetyDeposit {
                attached: ctx.attached_deposit,
                required: self.config.min_safety_deposit,
            });
        }

        validate_order(
            order,
            sig_nonce,
            signature,
            public_key,
            &self.registry,
            &self.nonces,
        )?;
        self.escrows.ensure_vacant(order.hashlock)?;

        // Last fallible step before commit: the whole-amount debit.
        self.ledger
            .debit_available(&order.maker_id, &order.asset_id, order.amount)?;

        // Commit: consume the nonce and lock the escrow atomically with
        // the debit above (single-threaded per call).
        self.nonces.record(&order.maker_id, order.nonce);
        self.escrows.insert(EscrowRecord {
            hashlock: order.hashlock,
            payer: order.maker_id.clone(),
            payee: ctx.caller.clone(),
            asset: order.asset_id.clone(),
            amount: order.amount,
            safety_deposit: ctx.attached_deposit,
            direction: Direction::Source,
            timelocks: Timelocks::new(ctx.now, order.timelocks),
            state: EscrowState::Locked,
            revealed_secret: None,
        })?;
        Ok(order.hashlock)
    }

    // =====================================================================
    // Settlement: withdraw (claim) and cancel (refund)
    // =====================================================================

    /// Claim an escrow by revealing its secret.
    ///
    /// The record is located by SHA-256 of the secret. Before the public
    /// withdrawal delay only the designated payee may call; afterwards
    /// anyone may, paying out to the same payee. The revealed secret
    /// becomes permanently public — that is how the counterpart chain's
    /// resolver learns it.
    pub fn withdraw(&mut self, ctx: &CallContext, secret: &[u8]) -> Result<Settlement> {
        let hashlock = Hashlock::from_secret(secret);
        let record = self.escrows.get_mut(hashlock)?;
        if !record.is_locked() {
            return Err(AtomswapError::EscrowNotLocked {
                hashlock,
                state: record.state,
            });
        }

        let public_caller = ctx.caller != record.payee;
        check_withdrawal(&record.timelocks, record.direction, ctx.now, public_caller)?;
        record.mark_withdrawn(secret)?;

        let payee = record.payee.clone();
        let asset = record.asset.clone();
        let amount = record.amount;
        let safety_deposit = record.safety_deposit;
        let direction = record.direction;

        let payouts = match direction {
            Direction::Source => {
                // The maker's locked funds become the resolver's deposit;
                // the safety deposit goes back to the original resolver.
                self.ledger.credit(&payee, &asset, amount);
                vec![Payout::native(payee.clone(), safety_deposit)]
            }
            Direction::Destination => {
                self.supply.record_withdrawal(&asset, amount);
                vec![Payout::token(payee.clone(), asset.clone(), amount)]
            }
        };

        tracing::info!(
            hashlock = %hashlock,
            payee = %payee,
            caller = %ctx.caller,
            amount,
            secret = %hex::encode(secret),
            "escrow withdrawn, secret revealed"
        );

        Ok(Settlement {
            hashlock,
            payouts,
            secret: Some(secret.to_vec()),
        })
    }

    /// Refund an escrow after its cancellation delay.
    ///
    /// Before the public-cancellation delay only the payer may call (on
    /// the source side); afterwards anyone may, the payout still going to
    /// the original payer. The safety deposit of a source escrow goes to
    /// the triggering caller on a public cancel under the default policy,
    /// back to the resolver otherwise.
    pub fn cancel(&mut self, ctx: &CallContext, hashlock: Hashlock) -> Result<Settlement> {
        let record = self.escrows.get_mut(hashlock)?;
        if !record.is_locked() {
            return Err(AtomswapError::EscrowNotLocked {
                hashlock,
                state: record.state,
            });
        }

        let public_caller = ctx.caller != record.payer;
        check_cancellation(&record.timelocks, record.direction, ctx.now, public_caller)?;
        record.mark_refunded()?;

        let payer = record.payer.clone();
        let payee = record.payee.clone();
        let asset = record.asset.clone();
        let amount = record.amount;
        let safety_deposit = record.safety_deposit;
        let direction = record.direction;

        let payouts = match direction {
            Direction::Source => {
                self.ledger.credit(&payer, &asset, amount);
                let deposit_recipient =
                    if public_caller && self.config.refund_reward == RefundRewardPolicy::RewardTriggerer {
                        ctx.caller.clone()
                    } else {
                        // The resolver posted the collateral; a private
                        // (payer-triggered) cancel is not its failure to punish.
                        payee
                    };
                vec![Payout::native(deposit_recipient, safety_deposit)]
            }
            Direction::Destination => {
                self.supply.record_withdrawal(&asset, amount);
                vec![Payout::token(payer.clone(), asset.clone(), amount)]
            }
        };

        tracing::info!(
            hashlock = %hashlock,
            payer = %payer,
            caller = %ctx.caller,
            amount,
            "escrow refunded"
        );

        Ok(Settlement {
            hashlock,
            payouts,
            secret: None,
        })
    }

    // =====================================================================
    // Ledger withdrawal (outbound half of the transfer hook)
    // =====================================================================

    /// Withdraw available balance out of the internal ledger. Returns the
    /// outbound payout the host must execute.
    ///
    /// # Errors
    /// `ZeroAmount` or `InsufficientBalance`.
    pub fn withdraw_deposit(
        &mut self,
        ctx: &CallContext,
        asset: &AssetId,
        amount: u128,
    ) -> Result<Payout> {
        if amount == 0 {
            return Err(AtomswapError::ZeroAmount);
        }
        self.ledger.debit_available(&ctx.caller, asset, amount)?;
        self.supply.record_withdrawal(asset, amount);
        tracing::info!(account = %ctx.caller, asset = %asset, amount, "ledger withdrawal");
        Ok(Payout::token(ctx.caller.clone(), asset.clone(), amount))
    }

    // =====================================================================
    // Read-only views
    // =====================================================================

    /// Available balance for a (account, asset) pair.
    #[must_use]
    pub fn available_balance(&self, account: &AccountId, asset: &AssetId) -> u128 {
        self.ledger.available(account, asset)
    }

    /// Look up an escrow record by hashlock.
    #[must_use]
    pub fn escrow(&self, hashlock: Hashlock) -> Option<&EscrowRecord> {
        self.escrows.get(hashlock)
    }

    /// Number of escrow records, settled ones included.
    #[must_use]
    pub fn escrow_count(&self) -> usize {
        self.escrows.len()
    }

    /// Check supply conservation for an asset: ledger totals plus locked
    /// escrow amounts must equal net inflow.
    pub fn verify_supply(&self, asset: &AssetId) -> Result<()> {
        let held = self
            .ledger
            .total_held(asset)
            .saturating_add(self.escrows.total_locked(asset));
        self.supply.verify(asset, held)
    }
}

impl Default for SettlementCore {
    fn default() -> Self {
        Self::new(CoreConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};

    const DEPOSIT_MSG: &str = r#"{"type":"Deposit"}"#;

    fn usdc() -> AssetId {
        AssetId::new("usdc.token")
    }

    fn keypair(seed: u8) -> (SigningKey, PublicKey) {
        let sk = SigningKey::from_bytes(&[seed; 32]);
        let pk = PublicKey::from_bytes(sk.verifying_key().to_bytes());
        (sk, pk)
    }

    fn sign(order: &SignedOrder, sk: &SigningKey, sig_nonce: u128) -> [u8; 64] {
        sk.sign(&order.signing_payload(sig_nonce)).to_bytes()
    }

    /// Maker registers a key and deposits; returns everything a resolver
    /// needs to initiate the source escrow.
    fn funded_maker(core: &mut SettlementCore, deposit: u128) -> (SigningKey, PublicKey) {
        let (sk, pk) = keypair(1);
        let maker_ctx = CallContext::new(AccountId::new("maker"), 1_000);
        core.register_keys(&maker_ctx, &[pk]);
        core.on_transfer(&maker_ctx, &usdc(), deposit, DEPOSIT_MSG)
            .unwrap();
        (sk, pk)
    }

    #[test]
    fn deposit_credits_ledger() {
        let mut core = SettlementCore::default();
        let ctx = CallContext::new(AccountId::new("maker"), 1_000);
        core.on_transfer(&ctx, &usdc(), 100, DEPOSIT_MSG).unwrap();
        assert_eq!(core.available_balance(&ctx.caller, &usdc()), 100);
        core.verify_supply(&usdc()).unwrap();
    }

    #[test]
    fn zero_amount_transfer_rejected() {
        let mut core = SettlementCore::default();
        let ctx = CallContext::new(AccountId::new("maker"), 1_000);
        let err = core.on_transfer(&ctx, &usdc(), 0, DEPOSIT_MSG).unwrap_err();
        assert!(matches!(err, AtomswapError::ZeroAmount));
    }

    #[test]
    fn malformed_transfer_metadata_credits_nothing() {
        let mut core = SettlementCore::default();
        let ctx = CallContext::new(AccountId::new("maker"), 1_000);
        let err = core.on_transfer(&ctx, &usdc(), 100, "{}").unwrap_err();
        assert!(matches!(err, AtomswapError::InvalidTransferPayload { .. }));
        assert_eq!(core.available_balance(&ctx.caller, &usdc()), 0);
        core.verify_supply(&usdc()).unwrap();
    }

    #[test]
    fn source_escrow_requires_safety_deposit() {
        let mut core = SettlementCore::default();
        let (sk, pk) = funded_maker(&mut core, 100);
        let order = SignedOrder::dummy("maker", "usdc.token", 100, b"s1", 1);
        let sig = sign(&order, &sk, 5);

        let ctx = CallContext::new(AccountId::new("resolver"), 1_000);
        let err = core
            .initiate_source_escrow(&ctx, &order, 5, &sig, &pk)
            .unwrap_err();
        assert!(matches!(err, AtomswapError::MissingSafetyDeposit { .. }));
        // Nothing was debited or consumed.
        assert_eq!(core.available_balance(&order.maker_id, &usdc()), 100);
        let retry = CallContext::with_deposit(AccountId::new("resolver"), 1_000, 1_000);
        core.initiate_source_escrow(&retry, &order, 5, &sig, &pk)
            .unwrap();
    }

    #[test]
    fn insufficient_balance_burns_no_nonce() {
        let mut core = SettlementCore::default();
        let (sk, pk) = funded_maker(&mut core, 50);
        let order = SignedOrder::dummy("maker", "usdc.token", 100, b"s1", 1);
        let sig = sign(&order, &sk, 5);

        let ctx = CallContext::with_deposit(AccountId::new("resolver"), 1_000, 1_000);
        let err = core
            .initiate_source_escrow(&ctx, &order, 5, &sig, &pk)
            .unwrap_err();
        assert!(matches!(err, AtomswapError::InsufficientBalance { .. }));
        assert_eq!(core.escrow_count(), 0);

        // Top up and retry with the SAME order: the nonce must still be fresh.
        let maker_ctx = CallContext::new(AccountId::new("maker"), 1_001);
        core.on_transfer(&maker_ctx, &usdc(), 50, DEPOSIT_MSG).unwrap();
        core.initiate_source_escrow(&ctx, &order, 5, &sig, &pk)
            .unwrap();
        assert_eq!(core.available_balance(&order.maker_id, &usdc()), 0);
    }

    #[test]
    fn public_refund_rewards_triggerer_by_default() {
        let mut core = SettlementCore::default();
        let (sk, pk) = funded_maker(&mut core, 100);
        let order = SignedOrder::dummy("maker", "usdc.token", 100, b"s1", 1);
        let sig = sign(&order, &sk, 5);
        let ctx = CallContext::with_deposit(AccountId::new("resolver"), 1_000, 777);
        let hashlock = core
            .initiate_source_escrow(&ctx, &order, 5, &sig, &pk)
            .unwrap();

        // sample(): src_public_cancellation_delay = 900.
        let cleaner = CallContext::new(AccountId::new("cleanup.bot"), 1_000 + 900);
        let settlement = core.cancel(&cleaner, hashlock).unwrap();
        assert_eq!(
            settlement.payouts,
            vec![Payout::native(AccountId::new("cleanup.bot"), 777)]
        );
        assert_eq!(core.available_balance(&order.maker_id, &usdc()), 100);
    }

    #[test]
    fn return_to_resolver_policy_honored() {
        let config = CoreConfig {
            refund_reward: RefundRewardPolicy::ReturnToResolver,
            ..CoreConfig::default()
        };
        let mut core = SettlementCore::new(config);
        let (sk, pk) = funded_maker(&mut core, 100);
        let order = SignedOrder::dummy("maker", "usdc.token", 100, b"s1", 1);
        let sig = sign(&order, &sk, 5);
        let ctx = CallContext::with_deposit(AccountId::new("resolver"), 1_000, 777);
        let hashlock = core
            .initiate_source_escrow(&ctx, &order, 5, &sig, &pk)
            .unwrap();

        let cleaner = CallContext::new(AccountId::new("cleanup.bot"), 1_000 + 900);
        let settlement = core.cancel(&cleaner, hashlock).unwrap();
        assert_eq!(
            settlement.payouts,
            vec![Payout::native(AccountId::new("resolver"), 777)]
        );
    }

    #[test]
    fn private_refund_returns_deposit_to_resolver() {
        let mut core = SettlementCore::default();
        let (sk, pk) = funded_maker(&mut core, 100);
        let order = SignedOrder::dummy("maker", "usdc.token", 100, b"s1", 1);
        let sig = sign(&order, &sk, 5);
        let ctx = CallContext::with_deposit(AccountId::new("resolver"), 1_000, 777);
        let hashlock = core
            .initiate_source_escrow(&ctx, &order, 5, &sig, &pk)
            .unwrap();

        // sample(): src_cancellation_delay = 600; the maker is the payer.
        let maker_ctx = CallContext::new(AccountId::new("maker"), 1_000 + 600);
        let settlement = core.cancel(&maker_ctx, hashlock).unwrap();
        assert_eq!(
            settlement.payouts,
            vec![Payout::native(AccountId::new("resolver"), 777)]
        );
    }

    #[test]
    fn withdraw_deposit_debits_and_pays_out() {
        let mut core = SettlementCore::default();
        let ctx = CallContext::new(AccountId::new("maker"), 1_000);
        core.on_transfer(&ctx, &usdc(), 100, DEPOSIT_MSG).unwrap();

        let payout = core.withdraw_deposit(&ctx, &usdc(), 40).unwrap();
        assert_eq!(payout, Payout::token(ctx.caller.clone(), usdc(), 40));
        assert_eq!(core.available_balance(&ctx.caller, &usdc()), 60);
        core.verify_supply(&usdc()).unwrap();

        assert!(matches!(
            core.withdraw_deposit(&ctx, &usdc(), 0).unwrap_err(),
            AtomswapError::ZeroAmount
        ));
        assert!(matches!(
            core.withdraw_deposit(&ctx, &usdc(), 61).unwrap_err(),
            AtomswapError::InsufficientBalance { .. }
        ));
    }
}
