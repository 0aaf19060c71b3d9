//! Supply conservation invariant.
//!
//! Per asset: `ledger totals + locked escrow amounts == Σdeposits − Σwithdrawals`.
//!
//! This is a mathematical identity over every money flow through the
//! core, tracked independently of the ledger and store it audits. A
//! settlement bug that credits without debiting (or vice versa) cannot
//! produce a state where the identity holds.

use std::collections::HashMap;

use atomswap_types::{AssetId, AtomswapError, Result};

/// Tracks net inflow per asset and verifies it against actual state.
#[derive(Debug, Default)]
pub struct SupplyConservation {
    /// Asset → total transferred in (deposits + destination-escrow funding).
    total_deposits: HashMap<AssetId, u128>,
    /// Asset → total transferred out (ledger withdrawals + destination payouts).
    total_withdrawals: HashMap<AssetId, u128>,
}

impl SupplyConservation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an inbound transfer.
    pub fn record_deposit(&mut self, asset: &AssetId, amount: u128) {
        let entry = self.total_deposits.entry(asset.clone()).or_default();
        *entry = entry.saturating_add(amount);
    }

    /// Record an outbound transfer.
    pub fn record_withdrawal(&mut self, asset: &AssetId, amount: u128) {
        let entry = self.total_withdrawals.entry(asset.clone()).or_default();
        *entry = entry.saturating_add(amount);
    }

    /// Expected total held by the core for an asset.
    #[must_use]
    pub fn expected_total(&self, asset: &AssetId) -> u128 {
        let deposited = self.total_deposits.get(asset).copied().unwrap_or(0);
        let withdrawn = self.total_withdrawals.get(asset).copied().unwrap_or(0);
        deposited.saturating_sub(withdrawn)
    }

    /// Verify the invariant against the actual held total
    /// (ledger `total_held` + store `total_locked`).
    ///
    /// # Errors
    /// Returns `SupplyInvariantViolation` with the discrepancy if the
    /// identity does not hold.
    pub fn verify(&self, asset: &AssetId, actual: u128) -> Result<()> {
        let deposited = self.total_deposits.get(asset).copied().unwrap_or(0);
        let withdrawn = self.total_withdrawals.get(asset).copied().unwrap_or(0);
        let expected = deposited.checked_sub(withdrawn);

        if expected != Some(actual) {
            return Err(AtomswapError::SupplyInvariantViolation {
                reason: format!(
                    "asset {asset}: deposited {deposited} - withdrawn {withdrawn} != held {actual}"
                ),
            });
        }
        Ok(())
    }
}
