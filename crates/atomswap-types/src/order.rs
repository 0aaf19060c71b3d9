//! The signed off-chain order a maker hands to a resolver.
//!
//! The order is immutable once signed; authenticity is established by an
//! ed25519 signature over the canonical byte encoding plus a signer-chosen
//! per-signature nonce. The *order* nonce is consumed on first successful
//! use on-chain; the *signature* nonce only makes each signed payload
//! unique. Transport replay and order replay are independent protections.

use serde::{Deserialize, Serialize};

use crate::{AccountId, AssetId, Hashlock, TimelockDelays};

/// A maker's signed intent to swap `amount` of `asset_id` under the given
/// hashlock and timelock schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedOrder {
    /// The maker whose deposit funds the source escrow.
    pub maker_id: AccountId,
    /// The asset being locked.
    pub asset_id: AssetId,
    /// Amount in the asset's smallest unit.
    pub amount: u128,
    /// SHA-256 digest of the swap secret.
    pub hashlock: Hashlock,
    /// The seven-delay schedule covering both chains.
    pub timelocks: TimelockDelays,
    /// Per-maker order nonce, consumed on first successful use.
    pub nonce: u128,
}

impl SignedOrder {
    /// Canonical fixed-schema binary encoding of the order.
    ///
    /// Both chains must reproduce this byte sequence exactly for signature
    /// portability. Layout, in order:
    ///
    /// | field       | encoding                          |
    /// |-------------|-----------------------------------|
    /// | `maker_id`  | u32 LE length + UTF-8 bytes       |
    /// | `asset_id`  | u32 LE length + UTF-8 bytes       |
    /// | `amount`    | u128 LE (16 bytes)                |
    /// | `hashlock`  | 32 raw bytes                      |
    /// | `timelocks` | seven u64 LE in declaration order |
    /// | `nonce`     | u128 LE (16 bytes)                |
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(160);
        buf.extend_from_slice(&(self.maker_id.0.len() as u32).to_le_bytes());
        buf.extend_from_slice(self.maker_id.0.as_bytes());
        buf.extend_from_slice(&(self.asset_id.0.len() as u32).to_le_bytes());
        buf.extend_from_slice(self.asset_id.0.as_bytes());
        buf.extend_from_slice(&self.amount.to_le_bytes());
        buf.extend_from_slice(self.hashlock.as_bytes());
        let t = &self.timelocks;
        for delay in [
            t.src_withdrawal_delay,
            t.src_public_withdrawal_delay,
            t.src_cancellation_delay,
            t.src_public_cancellation_delay,
            t.dst_withdrawal_delay,
            t.dst_public_withdrawal_delay,
            t.dst_cancellation_delay,
        ] {
            buf.extend_from_slice(&delay.to_le_bytes());
        }
        buf.extend_from_slice(&self.nonce.to_le_bytes());
        buf
    }

    /// The byte sequence the maker actually signs: the canonical order
    /// bytes followed by the per-signature nonce (u128 LE).
    #[must_use]
    pub fn signing_payload(&self, sig_nonce: u128) -> Vec<u8> {
        let mut payload = self.canonical_bytes();
        payload.extend_from_slice(&sig_nonce.to_le_bytes());
        payload
    }
}

/// Dummy order for tests. **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
impl SignedOrder {
    #[must_use]
    pub fn dummy(maker: &str, asset: &str, amount: u128, secret: &[u8], nonce: u128) -> Self {
        Self {
            maker_id: AccountId::new(maker),
            asset_id: AssetId::new(asset),
            amount,
            hashlock: Hashlock::from_secret(secret),
            timelocks: TimelockDelays::sample(),
            nonce,
        }
    }
}
