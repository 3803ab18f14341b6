//! AVR-specific HAL for the twibus driver
//!
//! This crate provides the memory-mapped register backend for the TWI
//! peripheral found on the classic ATmega and AT90USB parts:
//!
//! - ATmega168/328/328P
//! - ATmega644P/1284P
//! - AT90USB646/1286, ATmega32U4, ATmega1280/2560
//!
//! # Features
//!
//! One chip feature (`atmega328p`, `atmega2560`, ...) must be enabled. It
//! selects the SCL/SDA pin pair at compile time.
//!
//! - `defmt` - Enable debug formatting support
//!
//! # Usage
//!
//! The tick source comes from the firmware scheduler. Everything else is
//! provided here:
//!
//! ```ignore
//! let mut twi = unsafe { twibus_hal_avr::controller(clock, TwiConfig::new(16_000_000)) };
//! let mut halt = twibus_hal_avr::Halt;
//! let mut bus = twi.fail_stop(&mut halt);
//! let eeprom = bus.setup(0, 100_000, 0x50);
//! bus.write(eeprom, &[0x00, 0x00, 0x42]);
//! ```

#![no_std]

pub mod gpio;
pub mod pins;
pub mod shutdown;
pub mod twi;

use twibus_core::{TwiConfig, TwiController};
use twibus_hal::Clock;

pub use gpio::AvrPins;
pub use pins::{BUS_PINS, FAMILY};
pub use shutdown::Halt;
pub use twi::AvrTwi;

/// Controller over the on-chip TWI peripheral
pub type AvrTwiController<C> = TwiController<AvrTwi, AvrPins, C>;

/// Build the controller for this chip
///
/// # Safety
///
/// Must be called at most once. The returned controller assumes exclusive
/// ownership of the TWI registers and of read-modify-write access to the
/// SCL/SDA port registers.
pub unsafe fn controller<C: Clock>(clock: C, config: TwiConfig) -> AvrTwiController<C> {
    TwiController::new(AvrTwi::steal(), AvrPins::steal(), clock, config, BUS_PINS)
}
