//! Build-time TWI pin selection
//!
//! The chip feature picks the family; the pin pair is resolved from the
//! core pin table at compile time.

use twibus_core::config::{bus_pins, BusPins, McuFamily};

use crate::gpio::PortRegisters;

#[cfg(any(feature = "atmega168", feature = "atmega328", feature = "atmega328p"))]
pub const FAMILY: McuFamily = McuFamily::Atmega328;

#[cfg(any(feature = "atmega644p", feature = "atmega1284p"))]
pub const FAMILY: McuFamily = McuFamily::Atmega1284;

#[cfg(any(
    feature = "at90usb1286",
    feature = "at90usb646",
    feature = "atmega32u4",
    feature = "atmega1280",
    feature = "atmega2560"
))]
pub const FAMILY: McuFamily = McuFamily::Atmega2560;

#[cfg(not(any(
    feature = "atmega168",
    feature = "atmega328",
    feature = "atmega328p",
    feature = "atmega644p",
    feature = "atmega1284p",
    feature = "at90usb1286",
    feature = "at90usb646",
    feature = "atmega32u4",
    feature = "atmega1280",
    feature = "atmega2560"
)))]
compile_error!("twibus-hal-avr: enable exactly one chip feature (e.g. `atmega328p`)");

/// SCL/SDA lines for the selected chip
pub const BUS_PINS: BusPins = bus_pins(FAMILY);

// `AvrPins` only reaches ports A-G; anything else would leave the lines unconfigured.
const _: () = assert!(
    PortRegisters::for_pin(BUS_PINS.scl).is_some()
        && PortRegisters::for_pin(BUS_PINS.sda).is_some(),
    "TWI pins must be on ports A-G"
);
