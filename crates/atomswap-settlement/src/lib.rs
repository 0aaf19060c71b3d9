//! # atomswap-settlement
//!
//! **Entry-point plane**: composes the ledger, key registry, nonce set,
//! escrow store and timelock policy into [`SettlementCore`], the single
//! mutable surface external callers invoke.
//!
//! ## Architecture
//!
//! 1. **CallContext**: host-supplied caller identity, time, and attached
//!    native deposit for one invocation
//! 2. **SettlementCore**: the entry points — key management, the inbound
//!    transfer hook, source-escrow initiation, withdraw/cancel
//!    settlement, and ledger withdrawal
//! 3. **SupplyConservation**: independent per-asset audit of every money
//!    flow, checkable at any time via `verify_supply`
//!
//! Entry points are all-or-nothing: every fallible check runs before the
//! first mutation. Settlement effects are returned as [`Settlement`]
//! values (payout instructions plus the revealed secret); the core
//! performs no I/O itself.
//!
//! [`Settlement`]: atomswap_types::Settlement

pub mod core;
pub mod supply_conservation;

pub use crate::core::{CallContext, SettlementCore};
pub use crate::supply_conservation::SupplyConservation;
