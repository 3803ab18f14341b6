//! Deadline-bounded completion polling
//!
//! The peripheral raises TWINT when the current bus operation finishes. The
//! guard spins on that flag with no backoff and gives up once the
//! transaction deadline has been reached, so a stuck bus becomes a reported
//! fault instead of a silent hang. The caller is never preempted during a
//! transfer, which is what makes a pure spin acceptable.

use twibus_hal::{is_before, Clock, TwiRegisters};

use super::transaction::TransactionState;
use crate::safety::TwiError;

/// Absolute tick by which a transaction must finish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Deadline(u32);

impl Deadline {
    /// Deadline `us` microseconds from now
    pub fn after<C: Clock>(clock: &C, us: u32) -> Self {
        Self(clock.now().wrapping_add(clock.ticks_from_us(us)))
    }

    /// Deadline at an absolute tick
    pub const fn at(tick: u32) -> Self {
        Self(tick)
    }

    /// Absolute tick
    pub const fn tick(self) -> u32 {
        self.0
    }

    /// Whether `now` is at or past the deadline
    pub const fn has_passed(self, now: u32) -> bool {
        !is_before(now, self.0)
    }
}

/// Spin until the hardware flags completion
///
/// `pending` is the transaction state being entered; it is reported in the
/// timeout error.
pub fn wait<R, C>(
    regs: &R,
    clock: &C,
    deadline: Deadline,
    pending: TransactionState,
) -> Result<(), TwiError>
where
    R: TwiRegisters,
    C: Clock,
{
    loop {
        if regs.is_complete() {
            return Ok(());
        }
        let now = clock.now();
        if deadline.has_passed(now) {
            warn!("i2c wait expired at {} (deadline {})", now, deadline.tick());
            return Err(TwiError::Timeout(pending));
        }
    }
}
