//! Driver settings
//!
//! The bus always runs in standard mode. Only the system clock (needed for
//! the divisor) and the per-transaction time budget are configurable.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed SCL frequency in Hz
pub const BUS_FREQUENCY_HZ: u32 = 100_000;

/// Default per-transaction time budget (5 ms)
pub const DEFAULT_TIMEOUT_US: u32 = 5_000;

/// Two-wire driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TwiConfig {
    /// CPU clock feeding the TWI peripheral, in Hz
    pub clock_hz: u32,
    /// Budget for a whole transaction, in microseconds
    pub timeout_us: u32,
}

impl TwiConfig {
    /// Configuration for a CPU clock, with the default time budget
    pub const fn new(clock_hz: u32) -> Self {
        Self {
            clock_hz,
            timeout_us: DEFAULT_TIMEOUT_US,
        }
    }

    /// Override the transaction time budget
    pub const fn with_timeout_us(self, timeout_us: u32) -> Self {
        Self { timeout_us, ..self }
    }

    /// TWBR value for [`BUS_FREQUENCY_HZ`] with a prescaler of 1
    pub const fn bit_rate_divisor(&self) -> u8 {
        bit_rate_divisor(self.clock_hz)
    }
}

/// Compute TWBR for a 100 kHz bus
///
/// SCL = clock / (16 + 2 * TWBR), so TWBR = (clock / SCL - 16) / 2.
/// Clocks too slow for 100 kHz give 0; clocks too fast saturate at 255.
pub const fn bit_rate_divisor(clock_hz: u32) -> u8 {
    let divisor = (clock_hz / BUS_FREQUENCY_HZ).saturating_sub(16) / 2;
    if divisor > u8::MAX as u32 {
        u8::MAX
    } else {
        divisor as u8
    }
}
