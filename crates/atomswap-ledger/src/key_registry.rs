//! Registry of order-signing keys per account.
//!
//! Maps an account to the set of ed25519 public keys currently authorized
//! to sign orders for it. Used only for order-signature verification; it
//! does not replace the host chain's native transaction authorization.
//! Registration affects which signatures the validator accepts from this
//! point forward — already-consumed orders are not retroactively
//! invalidated by unregistering a key.

use std::collections::{BTreeSet, HashMap};

use atomswap_types::{AccountId, PublicKey};

/// Account → set of authorized signing keys.
#[derive(Debug, Default)]
pub struct KeyRegistry {
    keys: HashMap<AccountId, BTreeSet<PublicKey>>,
}

impl KeyRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register keys for an account. Idempotent: registering a key that is
    /// already present is not an error.
    pub fn register(&mut self, account: &AccountId, keys: &[PublicKey]) {
        let entry = self.keys.entry(account.clone()).or_default();
        for key in keys {
            if entry.insert(*key) {
                tracing::debug!(account = %account, key = %key, "key registered");
            }
        }
    }

    /// Unregister keys for an account. Removing a key that is not present
    /// is a no-op.
    pub fn unregister(&mut self, account: &AccountId, keys: &[PublicKey]) {
        if let Some(entry) = self.keys.get_mut(account) {
            for key in keys {
                if entry.remove(key) {
                    tracing::debug!(account = %account, key = %key, "key unregistered");
                }
            }
        }
    }

    /// All keys currently registered for an account.
    #[must_use]
    pub fn list(&self, account: &AccountId) -> Vec<PublicKey> {
        self.keys
            .get(account)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Whether `key` is currently authorized for `account`.
    #[must_use]
    pub fn contains(&self, account: &AccountId, key: &PublicKey) -> bool {
        self.keys
            .get(account)
            .is_some_and(|set| set.contains(key))
    }
}
