//! Bus pin table
//!
//! Each supported MCU family routes the TWI peripheral to a fixed pair of
//! port lines. The table is a `const fn` so a chip backend can resolve its
//! entry at compile time.

use twibus_hal::GpioPin;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Supported MCU families, grouped by TWI pin routing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum McuFamily {
    /// atmega168, atmega328, atmega328p
    Atmega328,
    /// atmega644p, atmega1284p
    Atmega1284,
    /// at90usb1286, at90usb646, atmega32u4, atmega1280, atmega2560
    Atmega2560,
}

/// Clock and data line assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusPins {
    /// Clock line
    pub scl: GpioPin,
    /// Data line
    pub sda: GpioPin,
}

/// Look up the TWI lines for `family`
pub const fn bus_pins(family: McuFamily) -> BusPins {
    match family {
        McuFamily::Atmega328 => BusPins {
            scl: GpioPin::new('C', 5),
            sda: GpioPin::new('C', 4),
        },
        McuFamily::Atmega1284 => BusPins {
            scl: GpioPin::new('C', 0),
            sda: GpioPin::new('C', 1),
        },
        McuFamily::Atmega2560 => BusPins {
            scl: GpioPin::new('D', 0),
            sda: GpioPin::new('D', 1),
        },
    }
}
