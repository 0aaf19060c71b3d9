//! Non-custodial internal balance ledger.
//!
//! Tracks per-(account, asset) available balances so makers can pre-fund
//! swaps without a pull-based allowance model. All mutations are atomic:
//! either the full operation succeeds or the balance is unchanged. Amounts
//! are `u128` in the asset's smallest unit; no floating point anywhere in
//! balance arithmetic.

use std::collections::HashMap;

use atomswap_types::{AccountId, AssetId, AtomswapError, Result};

/// Source of truth for available balances.
///
/// Escrow-locked amounts do not live here; they sit inside the escrow
/// records until settlement credits them back or pays them out.
#[derive(Debug, Default)]
pub struct BalanceLedger {
    /// Per-(account, asset) available balances. Entries are created on
    /// first deposit and only ever zeroed, never deleted.
    balances: HashMap<(AccountId, AssetId), u128>,
}

impl BalanceLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit available balance (deposit or refund).
    pub fn credit(&mut self, account: &AccountId, asset: &AssetId, amount: u128) {
        let entry = self
            .balances
            .entry((account.clone(), asset.clone()))
            .or_default();
        *entry = entry.saturating_add(amount);
    }

    /// Debit available balance, whole amount or nothing.
    ///
    /// # Errors
    /// Returns `InsufficientBalance` if `amount` exceeds the available
    /// balance; no partial amount is ever debited.
    pub fn debit_available(
        &mut self,
        account: &AccountId,
        asset: &AssetId,
        amount: u128,
    ) -> Result<()> {
        let available = self
            .balances
            .get_mut(&(account.clone(), asset.clone()))
            .ok_or(AtomswapError::InsufficientBalance {
                needed: amount,
                available: 0,
            })?;

        if *available < amount {
            return Err(AtomswapError::InsufficientBalance {
                needed: amount,
                available: *available,
            });
        }

        *available -= amount;
        Ok(())
    }

    /// Available balance for a (account, asset) pair; zero if never funded.
    #[must_use]
    pub fn available(&self, account: &AccountId, asset: &AssetId) -> u128 {
        self.balances
            .get(&(account.clone(), asset.clone()))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all accounts' available balance for an asset (for the
    /// supply-conservation check).
    #[must_use]
    pub fn total_held(&self, asset: &AssetId) -> u128 {
        self.balances
            .iter()
            .filter(|((_, a), _)| a == asset)
            .map(|(_, amount)| amount)
            .sum()
    }
}
