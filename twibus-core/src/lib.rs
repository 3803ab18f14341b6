//! Board-agnostic two-wire (I2C) master driver
//!
//! This crate contains all driver logic that does not depend on a specific
//! chip:
//!
//! - Pin table and bus configuration
//! - Idempotent bus bring-up and clock divisor programming
//! - Deadline-bounded polling of the hardware completion flag
//! - Start/address/payload/stop transaction sequencing
//! - Fault taxonomy and the fail-stop wrapper used by production callers
//!
//! # Usage
//!
//! ```ignore
//! let mut twi = TwiController::new(regs, pins, clock, TwiConfig::new(16_000_000), BUS_PINS);
//! let handle = twi.setup(0, 100_000, 0x50)?;
//! twi.write(handle, &[0x00, 0x10, 0xAB])?;
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod safety;
pub mod twi;

pub use config::{BusPins, McuFamily, TwiConfig};
pub use safety::{ErrorKind, FailStop, TwiError};
pub use twi::{BusHandle, TransactionState, TwiController};
