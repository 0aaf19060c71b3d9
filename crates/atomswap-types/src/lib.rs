//! # atomswap-types
//!
//! Shared types, errors, and configuration for the **Atomswap**
//! cross-chain settlement core.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`], [`AssetId`], [`PublicKey`], [`Hashlock`], [`Timestamp`]
//! - **Order model**: [`SignedOrder`] and its canonical wire encoding
//! - **Timelocks**: [`TimelockDelays`], [`Timelocks`]
//! - **Escrow model**: [`EscrowRecord`], [`EscrowState`], [`Direction`]
//! - **Transfer metadata**: [`TransferMessage`]
//! - **Settlement effects**: [`Settlement`], [`Payout`], [`PayoutAsset`]
//! - **Configuration**: [`CoreConfig`], [`RefundRewardPolicy`]
//! - **Errors**: [`AtomswapError`] with `AS_ERR_` prefix codes
//! - **Constants**: byte widths and deposit minimums

pub mod config;
pub mod constants;
pub mod error;
pub mod escrow;
pub mod ids;
pub mod order;
pub mod payout;
pub mod timelocks;
pub mod transfer;

// Re-export all primary types at crate root for ergonomic imports:
//   use atomswap_types::{SignedOrder, EscrowRecord, Hashlock, ...};

pub use config::*;
pub use error::*;
pub use escrow::*;
pub use ids::*;
pub use order::*;
pub use payout::*;
pub use timelocks::*;
pub use transfer::*;

// Constants are accessed via `atomswap_types::constants::FOO`
// (not re-exported to avoid name collisions).
