//! Error types for the Atomswap settlement core.
//!
//! All errors use the `AS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Authorization errors
//! - 2xx: Replay errors
//! - 3xx: Funds errors
//! - 4xx: Protocol-shape errors
//! - 5xx: Escrow-state errors
//! - 6xx: Timing errors
//! - 7xx: Invariant errors
//!
//! Every failure aborts the entire entry-point call with no partial effect;
//! nothing is retried inside the core. Callers receive a distinguishable
//! reason sufficient to decide their next action (a resolver seeing
//! `InsufficientBalance` knows not to retry until the maker tops up;
//! seeing `TooEarly` knows to wait).

use thiserror::Error;

use crate::{AccountId, EscrowState, Hashlock};

/// Central error enum for all Atomswap operations.
#[derive(Debug, Error)]
pub enum AtomswapError {
    // =================================================================
    // Authorization Errors (1xx)
    // =================================================================
    /// The claimed public key is not registered for the maker account.
    #[error("AS_ERR_100: Key {key_hex} not registered for account {account}")]
    UnauthorizedKey { account: AccountId, key_hex: String },

    /// The ed25519 signature over the canonical order bytes didn't verify.
    #[error("AS_ERR_101: Order signature verification failed")]
    InvalidSignature,

    // =================================================================
    // Replay Errors (2xx)
    // =================================================================
    /// The order nonce was already consumed for this maker.
    #[error("AS_ERR_200: Nonce {nonce} already used by maker {maker}")]
    NonceReused { maker: AccountId, nonce: u128 },

    // =================================================================
    // Funds Errors (3xx)
    // =================================================================
    /// Not enough available balance to perform the operation.
    #[error("AS_ERR_300: Insufficient available balance: need {needed}, have {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    /// The resolver did not attach the required native safety deposit.
    #[error("AS_ERR_301: Safety deposit {attached} below required minimum {required}")]
    MissingSafetyDeposit { attached: u128, required: u128 },

    /// Zero-amount transfers and withdrawals are rejected outright.
    #[error("AS_ERR_302: Amount must be positive")]
    ZeroAmount,

    // =================================================================
    // Protocol-shape Errors (4xx)
    // =================================================================
    /// The timelock schedule violates the ordering invariants.
    #[error("AS_ERR_400: Invalid timelocks: {reason}")]
    InvalidTimelocks { reason: String },

    /// The inbound-transfer metadata was malformed or unrecognized.
    /// The whole transfer must be reverted by the host.
    #[error("AS_ERR_401: Invalid transfer payload: {reason}")]
    InvalidTransferPayload { reason: String },

    /// An escrow with this hashlock already exists, in either direction.
    #[error("AS_ERR_402: Escrow already exists for {0}")]
    HashlockCollision(Hashlock),

    // =================================================================
    // Escrow-state Errors (5xx)
    // =================================================================
    /// No escrow record matches the given hashlock.
    #[error("AS_ERR_500: No escrow found for {0}")]
    UnknownHashlock(Hashlock),

    /// The escrow has already settled; terminal states are final.
    #[error("AS_ERR_501: Escrow {hashlock} is {state}, not LOCKED")]
    EscrowNotLocked {
        hashlock: Hashlock,
        state: EscrowState,
    },

    // =================================================================
    // Timing Errors (6xx)
    // =================================================================
    /// The relevant timelock window has not opened yet.
    #[error("AS_ERR_600: {window} window opens at {opens_at}, now {now}")]
    TooEarly {
        window: &'static str,
        opens_at: u64,
        now: u64,
    },

    /// The private withdrawal window has closed (cancellation phase began).
    #[error("AS_ERR_601: {window} window closed at {closed_at}, now {now}")]
    WindowClosed {
        window: &'static str,
        closed_at: u64,
        now: u64,
    },

    // =================================================================
    // Invariant Errors (7xx)
    // =================================================================
    /// Supply conservation invariant violated — critical safety alert.
    #[error("AS_ERR_700: Supply invariant violation: {reason}")]
    SupplyInvariantViolation { reason: String },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, AtomswapError>;
