//! Per-maker set of consumed order nonces.
//!
//! Append-only: a nonce, once recorded, stays recorded for the life of the
//! deployment. The check happens inside [`validate_order`]; the record
//! happens in the entry point, after every other fallible step of the same
//! call has succeeded, so a failed call never burns a nonce.
//!
//! [`validate_order`]: crate::validator::validate_order

use std::collections::{HashMap, HashSet};

use atomswap_types::{AccountId, AtomswapError, Result};

/// Tracks consumed order nonces per maker.
#[derive(Debug, Default)]
pub struct NonceSet {
    used: HashMap<AccountId, HashSet<u128>>,
}

impl NonceSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this maker has already consumed `nonce`.
    #[must_use]
    pub fn is_used(&self, maker: &AccountId, nonce: u128) -> bool {
        self.used
            .get(maker)
            .is_some_and(|set| set.contains(&nonce))
    }

    /// Fail `NonceReused` if the nonce was already consumed.
    pub fn check(&self, maker: &AccountId, nonce: u128) -> Result<()> {
        if self.is_used(maker, nonce) {
            return Err(AtomswapError::NonceReused {
                maker: maker.clone(),
                nonce,
            });
        }
        Ok(())
    }

    /// Record a consumed nonce. Infallible by design: callers `check` first
    /// and only record once the whole call is committed.
    pub fn record(&mut self, maker: &AccountId, nonce: u128) {
        self.used.entry(maker.clone()).or_default().insert(nonce);
    }

    /// Total nonces consumed across all makers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.used.values().map(HashSet::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
