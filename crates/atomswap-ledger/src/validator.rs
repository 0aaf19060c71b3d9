//! Signed-order validation — a pure gate.
//!
//! Each check is a hard precondition, applied in a fixed order:
//! registered key, signature, nonce freshness, timelock ordering. The
//! validator mutates nothing; the entry point records the nonce together
//! with the rest of the call's state transition, so there is no window
//! where an order validates twice (execution is single-threaded per call).

use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use atomswap_types::constants::SIGNATURE_LEN;
use atomswap_types::{AtomswapError, PublicKey, Result, SignedOrder};

use crate::{KeyRegistry, NonceSet};

/// Validate a signed order against the registry and nonce set.
///
/// # Errors
/// - `UnauthorizedKey` if `public_key` is not registered for the maker
/// - `InvalidSignature` if the ed25519 signature doesn't verify over the
///   order's signing payload
/// - `NonceReused` if the order nonce was already consumed by this maker
/// - `InvalidTimelocks` if the delay schedule violates the ordering
///   invariants
pub fn validate_order(
    order: &SignedOrder,
    sig_nonce: u128,
    signature: &[u8; SIGNATURE_LEN],
    public_key: &PublicKey,
    registry: &KeyRegistry,
    nonces: &NonceSet,
) -> Result<()> {
    // 1. The claimed key must be registered for the maker.
    if !registry.contains(&order.maker_id, public_key) {
        return Err(AtomswapError::UnauthorizedKey {
            account: order.maker_id.clone(),
            key_hex: hex::encode(public_key.as_bytes()),
        });
    }

    // 2. The signature must verify over the canonical payload.
    let verifying_key = VerifyingKey::from_bytes(public_key.as_bytes())
        .map_err(|_| AtomswapError::InvalidSignature)?;
    let signature = Signature::from_bytes(signature);
    verifying_key
        .verify(&order.signing_payload(sig_nonce), &signature)
        .map_err(|_| AtomswapError::InvalidSignature)?;

    // 3. The order nonce must be fresh for this maker.
    nonces.check(&order.maker_id, order.nonce)?;

    // 4. The timelock schedule must be well-ordered.
    order.timelocks.validate()?;

    Ok(())
}
