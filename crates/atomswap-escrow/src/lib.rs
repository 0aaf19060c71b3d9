//! # atomswap-escrow
//!
//! **Escrow plane**: the hashlock-keyed store of escrow records and the
//! pure timelock policy that gates their transitions.
//!
//! ## Architecture
//!
//! 1. **EscrowStore**: `Hashlock → EscrowRecord`, uniqueness enforced at
//!    insertion; settled records are retained
//! 2. **policy**: pure window checks — `check_withdrawal` /
//!    `check_cancellation` over `(Timelocks, Direction, now, caller role)`
//!
//! The state machine itself (`Locked → Withdrawn | Refunded`) lives on
//! [`EscrowRecord`](atomswap_types::EscrowRecord); this crate decides
//! *when* a transition is legal and keeps the records findable.

pub mod policy;
pub mod store;

pub use policy::{check_cancellation, check_withdrawal};
pub use store::EscrowStore;
