//! Identifiers used throughout the Atomswap settlement core.
//!
//! Accounts and assets are chain-native string identifiers; escrows are
//! keyed by their hashlock (SHA-256 digest of the swap secret); signing
//! keys are raw ed25519 public keys.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::constants::{HASHLOCK_LEN, PUBLIC_KEY_LEN};

/// UNIX timestamp in whole seconds.
pub type Timestamp = u64;

/// Current wall-clock time as UNIX seconds. Hosts embed this into the
/// call context of each entry-point invocation; tests inject fixed
/// values instead.
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn unix_now() -> Timestamp {
    chrono::Utc::now().timestamp().max(0) as u64
}

// ---------------------------------------------------------------------------
// AccountId
// ---------------------------------------------------------------------------

/// Chain-native account identifier (e.g., "maker.near", "0xabc...").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl AccountId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// AssetId
// ---------------------------------------------------------------------------

/// Identifier of a transferable asset — the token contract account for
/// fungible tokens. The chain's native token is not an `AssetId`; it only
/// appears as safety-deposit collateral (see `PayoutAsset::Native`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AssetId(pub String);

impl AssetId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// PublicKey
// ---------------------------------------------------------------------------

/// A raw ed25519 public key (32 bytes). Serialized as lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct PublicKey(pub [u8; PUBLIC_KEY_LEN]);

impl PublicKey {
    #[must_use]
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ed25519:{}", hex::encode(&self.0[..8]))
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes: [u8; PUBLIC_KEY_LEN] = hex::decode(&s)
            .map_err(serde::de::Error::custom)?
            .try_into()
            .map_err(|_| serde::de::Error::custom("public key must be 32 bytes"))?;
        Ok(Self(bytes))
    }
}

// ---------------------------------------------------------------------------
// Hashlock
// ---------------------------------------------------------------------------

/// SHA-256 digest of the swap secret. The unique key of an escrow record:
/// funds locked under a hashlock release only to whoever first reveals the
/// matching secret. Serialized as lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Hashlock(pub [u8; HASHLOCK_LEN]);

impl Hashlock {
    #[must_use]
    pub fn from_bytes(bytes: [u8; HASHLOCK_LEN]) -> Self {
        Self(bytes)
    }

    /// Compute the hashlock matching a secret.
    ///
    /// Both chains of a swap must use the same digest, so this is pinned to
    /// SHA-256 over the raw secret bytes.
    #[must_use]
    pub fn from_secret(secret: &[u8]) -> Self {
        let digest = Sha256::digest(secret);
        Self(digest.into())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; HASHLOCK_LEN] {
        &self.0
    }
}

impl fmt::Display for Hashlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hashlock:{}", hex::encode(&self.0[..8]))
    }
}

impl Serialize for Hashlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for Hashlock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes: [u8; HASHLOCK_LEN] = hex::decode(&s)
            .map_err(serde::de::Error::custom)?
            .try_into()
            .map_err(|_| serde::de::Error::custom("hashlock must be 32 bytes"))?;
        Ok(Self(bytes))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
