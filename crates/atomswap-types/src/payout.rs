//! Settlement outcomes and the external payouts they instruct.
//!
//! The core never performs transfers itself. Entry points that settle an
//! escrow return a [`Settlement`] listing the outbound [`Payout`]s the
//! host ledger must execute atomically with the call.

use serde::{Deserialize, Serialize};

use crate::{AccountId, AssetId, Hashlock};

/// What an outbound payout is denominated in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoutAsset {
    /// The chain's native token (safety-deposit collateral).
    Native,
    /// A fungible token.
    Token(AssetId),
}

/// One outbound transfer the host must execute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub recipient: AccountId,
    pub asset: PayoutAsset,
    pub amount: u128,
}

impl Payout {
    #[must_use]
    pub fn native(recipient: AccountId, amount: u128) -> Self {
        Self {
            recipient,
            asset: PayoutAsset::Native,
            amount,
        }
    }

    #[must_use]
    pub fn token(recipient: AccountId, asset: AssetId, amount: u128) -> Self {
        Self {
            recipient,
            asset: PayoutAsset::Token(asset),
            amount,
        }
    }
}

/// Result of settling an escrow (withdrawal or refund).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub hashlock: Hashlock,
    /// Outbound transfers for the host to execute. Internal ledger credits
    /// are already applied and do not appear here.
    pub payouts: Vec<Payout>,
    /// The revealed secret, on withdrawal. Permanently public from this
    /// point — the counterpart chain's resolver learns it from here.
    pub secret: Option<Vec<u8>>,
}
