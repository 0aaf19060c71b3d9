//! Configuration for the settlement core.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Who receives the resolver's safety deposit when a refund is triggered
/// by someone other than the payer after the public-cancellation delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefundRewardPolicy {
    /// Pay the deposit to the account that triggered the refund. Keeps the
    /// cleanup incentive: third parties profit from finishing swaps the
    /// resolver abandoned.
    RewardTriggerer,
    /// Return the deposit to the resolver regardless of who triggered.
    ReturnToResolver,
}

impl Default for RefundRewardPolicy {
    fn default() -> Self {
        Self::RewardTriggerer
    }
}

/// Tunable policy knobs of a deployed core instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Safety-deposit payout rule on public refunds.
    pub refund_reward: RefundRewardPolicy,
    /// Minimum native safety deposit a resolver must attach when creating
    /// a source escrow.
    pub min_safety_deposit: u128,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            refund_reward: RefundRewardPolicy::default(),
            min_safety_deposit: constants::MIN_SAFETY_DEPOSIT,
        }
    }
}
