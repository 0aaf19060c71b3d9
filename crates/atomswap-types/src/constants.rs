//! System-wide constants for the Atomswap settlement core.

/// Byte length of a hashlock (SHA-256 digest).
pub const HASHLOCK_LEN: usize = 32;

/// Byte length of an ed25519 public key.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Byte length of an ed25519 signature.
pub const SIGNATURE_LEN: usize = 64;

/// Minimum native safety deposit (smallest native unit) a resolver must
/// attach to a source escrow. Deployments raise this to make abandonment
/// economically meaningful.
pub const MIN_SAFETY_DEPOSIT: u128 = 1;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "Atomswap";
