//! The set of live and settled escrows, keyed by hashlock.
//!
//! An explicit key-value store: uniqueness is an invariant enforced at
//! insertion, never discovered by iteration. Settled records are kept —
//! a withdrawn record is what keeps the revealed secret publicly visible,
//! and a terminal state is what makes the second settlement attempt fail.

use std::collections::HashMap;

use atomswap_types::{AssetId, AtomswapError, EscrowRecord, EscrowState, Hashlock, Result};

/// Hashlock-keyed escrow records.
#[derive(Debug, Default)]
pub struct EscrowStore {
    escrows: HashMap<Hashlock, EscrowRecord>,
}

impl EscrowStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail `HashlockCollision` if a record (in any state, either
    /// direction) already uses this hashlock.
    pub fn ensure_vacant(&self, hashlock: Hashlock) -> Result<()> {
        if self.escrows.contains_key(&hashlock) {
            return Err(AtomswapError::HashlockCollision(hashlock));
        }
        Ok(())
    }

    /// Insert a new record under its hashlock.
    ///
    /// # Errors
    /// Returns `HashlockCollision` if the hashlock is already in use.
    pub fn insert(&mut self, record: EscrowRecord) -> Result<()> {
        self.ensure_vacant(record.hashlock)?;
        tracing::info!(
            hashlock = %record.hashlock,
            direction = %record.direction,
            payer = %record.payer,
            payee = %record.payee,
            amount = record.amount,
            "escrow locked"
        );
        self.escrows.insert(record.hashlock, record);
        Ok(())
    }

    /// Look up a record by hashlock.
    #[must_use]
    pub fn get(&self, hashlock: Hashlock) -> Option<&EscrowRecord> {
        self.escrows.get(&hashlock)
    }

    /// Mutable lookup, failing `UnknownHashlock` if absent.
    pub fn get_mut(&mut self, hashlock: Hashlock) -> Result<&mut EscrowRecord> {
        self.escrows
            .get_mut(&hashlock)
            .ok_or(AtomswapError::UnknownHashlock(hashlock))
    }

    /// Number of records, settled ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.escrows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.escrows.is_empty()
    }

    /// Number of records still in `LOCKED` state.
    #[must_use]
    pub fn locked_count(&self) -> usize {
        self.escrows
            .values()
            .filter(|record| record.state == EscrowState::Locked)
            .count()
    }

    /// Sum of amounts still locked for an asset (for the
    /// supply-conservation check).
    #[must_use]
    pub fn total_locked(&self, asset: &AssetId) -> u128 {
        self.escrows
            .values()
            .filter(|record| record.state == EscrowState::Locked && record.asset == *asset)
            .map(|record| record.amount)
            .sum()
    }
}
