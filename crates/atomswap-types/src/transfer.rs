//! Inbound-transfer metadata.
//!
//! A single transfer hook serves two purposes, distinguished by the JSON
//! metadata attached to the transfer. The purpose is decoded once at the
//! entry boundary into this closed enum; malformed or unrecognized
//! metadata fails `InvalidTransferPayload` and the host must revert the
//! whole transfer.

use serde::{Deserialize, Serialize};

use crate::{AccountId, AtomswapError, Hashlock, Result, TimelockDelays};

/// Decoded purpose of an inbound asset transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransferMessage {
    /// Credit the sender's internal balance; no escrow is created.
    Deposit,
    /// Create a destination-side escrow funded by this transfer. The
    /// resolver is spending its own funds, so no maker signature is
    /// required here — the maker's authorization for this flow happened
    /// on the counterpart chain.
    CreateDestinationEscrow {
        hashlock: Hashlock,
        /// Who may claim with the secret (the maker, for the direction
        /// where the maker claims on this chain).
        beneficiary: AccountId,
        /// Declared amount; must equal the transferred amount.
        amount: u128,
        timelocks: TimelockDelays,
    },
}

impl TransferMessage {
    /// Decode transfer metadata, mapping any JSON failure to
    /// `InvalidTransferPayload`.
    pub fn parse(msg: &str) -> Result<Self> {
        serde_json::from_str(msg).map_err(|e| AtomswapError::InvalidTransferPayload {
            reason: e.to_string(),
        })
    }
}
