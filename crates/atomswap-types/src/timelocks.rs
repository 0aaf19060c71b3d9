//! Timelock schedule for a swap.
//!
//! Seven delays (seconds, relative to escrow creation) describe four phases
//! on the source chain and three on the destination chain:
//!
//! ```text
//! SRC:  |-- withdrawal --|-- public withdrawal --|-- cancellation --|-- public cancellation -->
//! DST:  |-- withdrawal --|-- public withdrawal --|-- cancellation -->
//! ```
//!
//! Every destination delay must be strictly below its source counterpart,
//! so the claiming party on the destination chain always has a safety
//! margin before the source side can be cancelled back. This cross-chain
//! ordering is what makes the two-chain protocol atomic.

use serde::{Deserialize, Serialize};

use crate::{AtomswapError, Result, Timestamp};

/// The seven delay parameters of a swap, in seconds relative to the
/// escrow's creation time. Field order is part of the signed-order wire
/// format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelockDelays {
    // --- Source chain delays ---
    pub src_withdrawal_delay: u64,
    pub src_public_withdrawal_delay: u64,
    pub src_cancellation_delay: u64,
    pub src_public_cancellation_delay: u64,

    // --- Destination chain delays ---
    pub dst_withdrawal_delay: u64,
    pub dst_public_withdrawal_delay: u64,
    pub dst_cancellation_delay: u64,
}

impl TimelockDelays {
    /// Validate the ordering invariants of the schedule.
    ///
    /// Within each side the phases must be strictly increasing, and every
    /// destination delay must be strictly below its source counterpart.
    /// Must be called before any escrow is created from these delays.
    pub fn validate(&self) -> Result<()> {
        let fail = |reason: &str| {
            Err(AtomswapError::InvalidTimelocks {
                reason: reason.to_string(),
            })
        };

        // Source side: withdrawal < public withdrawal < cancellation < public cancellation.
        if self.src_withdrawal_delay >= self.src_public_withdrawal_delay {
            return fail("src: public withdrawal must start after private withdrawal");
        }
        if self.src_public_withdrawal_delay >= self.src_cancellation_delay {
            return fail("src: cancellation must start after public withdrawal");
        }
        if self.src_cancellation_delay >= self.src_public_cancellation_delay {
            return fail("src: public cancellation must start after private cancellation");
        }

        // Destination side: withdrawal < public withdrawal < cancellation.
        if self.dst_withdrawal_delay >= self.dst_public_withdrawal_delay {
            return fail("dst: public withdrawal must start after private withdrawal");
        }
        if self.dst_public_withdrawal_delay >= self.dst_cancellation_delay {
            return fail("dst: cancellation must start after public withdrawal");
        }

        // Cross-chain: each destination phase must open strictly before the
        // corresponding source phase, otherwise the destination claimant
        // loses its safety margin against a source-side cancel.
        if self.dst_withdrawal_delay >= self.src_withdrawal_delay {
            return fail("cross-chain: dst withdrawal must open before src withdrawal");
        }
        if self.dst_public_withdrawal_delay >= self.src_public_withdrawal_delay {
            return fail("cross-chain: dst public withdrawal must open before src public withdrawal");
        }
        if self.dst_cancellation_delay >= self.src_cancellation_delay {
            return fail("cross-chain: dst cancellation must open before src cancellation");
        }

        Ok(())
    }
}

/// A delay schedule bound to a concrete escrow creation time.
///
/// All window arithmetic is saturating `u64` seconds; timeouts are plain
/// comparisons against the host-supplied `now`, never timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timelocks {
    pub created_at: Timestamp,
    pub delays: TimelockDelays,
}

impl Timelocks {
    #[must_use]
    pub fn new(created_at: Timestamp, delays: TimelockDelays) -> Self {
        Self { created_at, delays }
    }

    #[must_use]
    pub fn src_withdrawal_opens_at(&self) -> Timestamp {
        self.created_at.saturating_add(self.delays.src_withdrawal_delay)
    }

    #[must_use]
    pub fn src_public_withdrawal_opens_at(&self) -> Timestamp {
        self.created_at
            .saturating_add(self.delays.src_public_withdrawal_delay)
    }

    #[must_use]
    pub fn src_cancellation_opens_at(&self) -> Timestamp {
        self.created_at
            .saturating_add(self.delays.src_cancellation_delay)
    }

    #[must_use]
    pub fn src_public_cancellation_opens_at(&self) -> Timestamp {
        self.created_at
            .saturating_add(self.delays.src_public_cancellation_delay)
    }

    #[must_use]
    pub fn dst_withdrawal_opens_at(&self) -> Timestamp {
        self.created_at.saturating_add(self.delays.dst_withdrawal_delay)
    }

    #[must_use]
    pub fn dst_public_withdrawal_opens_at(&self) -> Timestamp {
        self.created_at
            .saturating_add(self.delays.dst_public_withdrawal_delay)
    }

    #[must_use]
    pub fn dst_cancellation_opens_at(&self) -> Timestamp {
        self.created_at
            .saturating_add(self.delays.dst_cancellation_delay)
    }
}

/// A well-ordered schedule for tests and examples.
#[cfg(any(test, feature = "test-helpers"))]
impl TimelockDelays {
    #[must_use]
    pub fn sample() -> Self {
        Self {
            src_withdrawal_delay: 10,
            src_public_withdrawal_delay: 300,
            src_cancellation_delay: 600,
            src_public_cancellation_delay: 900,
            dst_withdrawal_delay: 5,
            dst_public_withdrawal_delay: 120,
            dst_cancellation_delay: 240,
        }
    }
}
