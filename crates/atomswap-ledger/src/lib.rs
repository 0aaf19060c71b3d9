//! # atomswap-ledger
//!
//! **Funds & authorization plane**: the internal deposit ledger, the
//! order-signing key registry, consumed-nonce tracking, and the pure
//! signed-order validation gate.
//!
//! ## Architecture
//!
//! This crate sits between the entry points and the escrow store:
//! 1. **BalanceLedger**: per-(account, asset) available balances
//! 2. **KeyRegistry**: account → authorized ed25519 signing keys
//! 3. **NonceSet**: per-maker consumed order nonces (append-only)
//! 4. **validate_order**: the four-step order gate (key, signature,
//!    nonce, timelocks) — pure, mutates nothing
//!
//! ## Order Flow
//!
//! ```text
//! entry point → validate_order() → BalanceLedger.debit_available()
//!             → NonceSet.record() → EscrowStore.insert()
//! ```
//!
//! Every source escrow entering the store **must** have passed the gate.

pub mod balance_ledger;
pub mod key_registry;
pub mod nonce_set;
pub mod validator;

pub use balance_ledger::BalanceLedger;
pub use key_registry::KeyRegistry;
pub use nonce_set::NonceSet;
pub use validator::validate_order;
