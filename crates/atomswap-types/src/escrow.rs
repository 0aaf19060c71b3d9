//! Escrow record and its state machine.
//!
//! ```text
//!   ┌────────┐  secret reveal   ┌───────────┐
//!   │ LOCKED ├─────────────────▶│ WITHDRAWN │
//!   └───┬────┘                  └───────────┘
//!       │ timelock expiry
//!       ▼
//!   ┌──────────┐
//!   │ REFUNDED │
//!   └──────────┘
//! ```
//!
//! Both terminal states are final and irreversible; no record re-enters
//! `LOCKED`. This monotonicity is what prevents double-claim and
//! double-refund even under adversarial call ordering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{AccountId, AssetId, AtomswapError, Hashlock, Result, Timelocks};

/// Which chain of the swap this escrow lives on.
///
/// A source escrow holds the maker's pre-deposited funds for the resolver
/// to claim; a destination escrow holds the resolver's own funds for the
/// maker to claim. The direction selects the timelock schedule half and
/// the settlement effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Source,
    Destination,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "SRC"),
            Self::Destination => write!(f, "DST"),
        }
    }
}

/// The lifecycle state of an escrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EscrowState {
    /// Funds are locked under the hashlock.
    Locked,
    /// The secret was revealed and funds paid to the payee. **Irreversible.**
    Withdrawn,
    /// The timelock expired and funds returned to the payer. **Irreversible.**
    Refunded,
}

impl EscrowState {
    /// Can this escrow transition to the given target state?
    #[must_use]
    pub fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Locked, Self::Withdrawn | Self::Refunded)
        )
    }
}

impl fmt::Display for EscrowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locked => write!(f, "LOCKED"),
            Self::Withdrawn => write!(f, "WITHDRAWN"),
            Self::Refunded => write!(f, "REFUNDED"),
        }
    }
}

/// A single escrow: funds locked under a hashlock, waiting for the secret
/// or for the timelock to expire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscrowRecord {
    /// Unique key; SHA-256 digest of the swap secret.
    pub hashlock: Hashlock,
    /// Who funded the escrow: the maker (source) or the resolver (destination).
    pub payer: AccountId,
    /// Who may claim with the secret: the resolver (source) or the maker
    /// (destination).
    pub payee: AccountId,
    /// The locked asset.
    pub asset: AssetId,
    /// Locked amount, in the asset's smallest unit.
    pub amount: u128,
    /// Native-token collateral posted by the resolver alongside a source
    /// escrow. Returned on withdrawal; redirected on public refund to keep
    /// abandonment costly. Always zero on destination escrows.
    pub safety_deposit: u128,
    /// Which chain half of the swap this record represents.
    pub direction: Direction,
    /// Delay schedule bound to the creation time.
    pub timelocks: Timelocks,
    /// Lifecycle state.
    pub state: EscrowState,
    /// Set on withdrawal: the revealed secret, kept permanently visible so
    /// the counterpart chain's resolver can learn it.
    pub revealed_secret: Option<Vec<u8>>,
}

impl EscrowRecord {
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.state == EscrowState::Locked
    }

    /// Transition to `WITHDRAWN`, recording the revealed secret.
    ///
    /// # Errors
    /// Fails `EscrowNotLocked` if the record has already settled.
    pub fn mark_withdrawn(&mut self, secret: &[u8]) -> Result<()> {
        if !self.state.can_transition_to(EscrowState::Withdrawn) {
            return Err(AtomswapError::EscrowNotLocked {
                hashlock: self.hashlock,
                state: self.state,
            });
        }
        self.state = EscrowState::Withdrawn;
        self.revealed_secret = Some(secret.to_vec());
        Ok(())
    }

    /// Transition to `REFUNDED`.
    ///
    /// # Errors
    /// Fails `EscrowNotLocked` if the record has already settled.
    pub fn mark_refunded(&mut self) -> Result<()> {
        if !self.state.can_transition_to(EscrowState::Refunded) {
            return Err(AtomswapError::EscrowNotLocked {
                hashlock: self.hashlock,
                state: self.state,
            });
        }
        self.state = EscrowState::Refunded;
        Ok(())
    }
}
