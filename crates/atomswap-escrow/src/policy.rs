//! Timelock policy — pure window gating.
//!
//! Decides, for a given instant, which transitions are legal for an
//! escrow. No state is read or written here; callers pass the escrow's
//! timelocks, its direction, the host-supplied `now`, and whether the
//! caller is acting in the public (non-designated) role.
//!
//! Window shape:
//! - **Withdrawal**: opens at the private delay for the payee, at the
//!   public delay for anyone else. The private variant closes when the
//!   cancellation phase begins; the public variant stays open — once a
//!   refund also becomes legal, whichever call executes first wins and
//!   the loser fails `EscrowNotLocked` on the already-settled record.
//! - **Cancellation**: source side opens at the private delay for the
//!   payer and at the public delay for anyone else. The destination
//!   schedule has no public-cancellation phase; once its cancellation
//!   delay elapses any caller may trigger the refund (payout still goes
//!   to the payer).

use atomswap_types::{AtomswapError, Direction, Result, Timelocks};

/// Gate a withdrawal (claim) attempt.
///
/// # Errors
/// - `TooEarly` if the relevant window has not opened
/// - `WindowClosed` if a private withdrawal lands after the cancellation
///   phase began
pub fn check_withdrawal(
    timelocks: &Timelocks,
    direction: Direction,
    now: u64,
    public_caller: bool,
) -> Result<()> {
    let (window, opens_at) = match (direction, public_caller) {
        (Direction::Source, false) => ("src withdrawal", timelocks.src_withdrawal_opens_at()),
        (Direction::Source, true) => (
            "src public withdrawal",
            timelocks.src_public_withdrawal_opens_at(),
        ),
        (Direction::Destination, false) => {
            ("dst withdrawal", timelocks.dst_withdrawal_opens_at())
        }
        (Direction::Destination, true) => (
            "dst public withdrawal",
            timelocks.dst_public_withdrawal_opens_at(),
        ),
    };

    if now < opens_at {
        return Err(AtomswapError::TooEarly {
            window,
            opens_at,
            now,
        });
    }

    if !public_caller {
        let closed_at = match direction {
            Direction::Source => timelocks.src_cancellation_opens_at(),
            Direction::Destination => timelocks.dst_cancellation_opens_at(),
        };
        if now >= closed_at {
            return Err(AtomswapError::WindowClosed {
                window,
                closed_at,
                now,
            });
        }
    }

    Ok(())
}

/// Gate a cancellation (refund) attempt.
///
/// # Errors
/// Returns `TooEarly` if the relevant cancellation window has not opened.
pub fn check_cancellation(
    timelocks: &Timelocks,
    direction: Direction,
    now: u64,
    public_caller: bool,
) -> Result<()> {
    let (window, opens_at) = match (direction, public_caller) {
        (Direction::Source, false) => ("src cancellation", timelocks.src_cancellation_opens_at()),
        (Direction::Source, true) => (
            "src public cancellation",
            timelocks.src_public_cancellation_opens_at(),
        ),
        // The destination schedule has a single cancellation phase.
        (Direction::Destination, _) => {
            ("dst cancellation", timelocks.dst_cancellation_opens_at())
        }
    };

    if now < opens_at {
        return Err(AtomswapError::TooEarly {
            window,
            opens_at,
            now,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomswap_types::TimelockDelays;

    // sample(): src 10/300/600/900, dst 5/120/240, created_at = 1000.
    fn timelocks() -> Timelocks {
        Timelocks::new(1_000, TimelockDelays::sample())
    }

    #[test]
    fn src_private_withdrawal_window() {
        let t = timelocks();
        let err = check_withdrawal(&t, Direction::Source, 1_009, false).unwrap_err();
        assert!(matches!(err, AtomswapError::TooEarly { opens_at: 1_010, .. }));

        assert!(check_withdrawal(&t, Direction::Source, 1_010, false).is_ok());
        assert!(check_withdrawal(&t, Direction::Source, 1_599, false).is_ok());

        let err = check_withdrawal(&t, Direction::Source, 1_600, false).unwrap_err();
        assert!(matches!(err, AtomswapError::WindowClosed { closed_at: 1_600, .. }));
    }

    #[test]
    fn src_public_withdrawal_opens_later_never_closes() {
        let t = timelocks();
        let err = check_withdrawal(&t, Direction::Source, 1_299, true).unwrap_err();
        assert!(matches!(err, AtomswapError::TooEarly { opens_at: 1_300, .. }));

        assert!(check_withdrawal(&t, Direction::Source, 1_300, true).is_ok());
        // Past cancellation start the public window stays open; first
        // executed call wins against the refund.
        assert!(check_withdrawal(&t, Direction::Source, 2_000, true).is_ok());
    }

    #[test]
    fn dst_private_withdrawal_window() {
        let t = timelocks();
        assert!(check_withdrawal(&t, Direction::Destination, 1_004, false).is_err());
        assert!(check_withdrawal(&t, Direction::Destination, 1_005, false).is_ok());
        assert!(check_withdrawal(&t, Direction::Destination, 1_239, false).is_ok());
        assert!(matches!(
            check_withdrawal(&t, Direction::Destination, 1_240, false).unwrap_err(),
            AtomswapError::WindowClosed { .. }
        ));
    }

    #[test]
    fn dst_public_withdrawal_gate() {
        let t = timelocks();
        let err = check_withdrawal(&t, Direction::Destination, 1_119, true).unwrap_err();
        assert!(matches!(err, AtomswapError::TooEarly { opens_at: 1_120, .. }));
        assert!(check_withdrawal(&t, Direction::Destination, 1_120, true).is_ok());
    }

    #[test]
    fn src_cancellation_windows() {
        let t = timelocks();
        // Payer must wait for the private delay.
        assert!(matches!(
            check_cancellation(&t, Direction::Source, 1_599, false).unwrap_err(),
            AtomswapError::TooEarly { opens_at: 1_600, .. }
        ));
        assert!(check_cancellation(&t, Direction::Source, 1_600, false).is_ok());

        // Third parties must wait for the public delay.
        assert!(matches!(
            check_cancellation(&t, Direction::Source, 1_899, true).unwrap_err(),
            AtomswapError::TooEarly { opens_at: 1_900, .. }
        ));
        assert!(check_cancellation(&t, Direction::Source, 1_900, true).is_ok());
    }

    #[test]
    fn dst_cancellation_ignores_caller_role() {
        let t = timelocks();
        assert!(check_cancellation(&t, Direction::Destination, 1_239, false).is_err());
        assert!(check_cancellation(&t, Direction::Destination, 1_240, false).is_ok());
        // Same bound for public callers: dst has no public phase.
        assert!(check_cancellation(&t, Direction::Destination, 1_240, true).is_ok());
    }

    #[test]
    fn boundaries_are_inclusive_open() {
        // Windows open at exactly created_at + delay.
        let t = timelocks();
        assert!(check_withdrawal(&t, Direction::Source, 1_010, false).is_ok());
        assert!(check_cancellation(&t, Direction::Source, 1_600, false).is_ok());
    }
}
