//! twibus Hardware Abstraction Layer
//!
//! This crate defines the hardware seams the two-wire driver is written
//! against. Chip-specific HALs (AVR, or a simulated register block in host
//! tests) implement them, so the driver logic in `twibus-core` never touches
//! a register address directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Command dispatcher (firmware, tests)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  twibus-core (controller, engine)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  twibus-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  twibus-hal-  │
//!             │      avr      │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`twi::TwiRegisters`] - TWI control/status/data/bit-rate registers
//! - [`gpio::PinSetup`] - Digital line direction and level
//! - [`timer::Clock`] - Monotonic tick source
//! - [`shutdown::Shutdown`] - Fail-stop halt channel
//! - [`i2c::I2cBus`] - Handle-based I2C master operations

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod shutdown;
pub mod timer;
pub mod twi;

// Re-export key traits at crate root for convenience
pub use gpio::{GpioPin, PinSetup};
pub use i2c::I2cBus;
pub use shutdown::Shutdown;
pub use timer::{is_before, Clock};
pub use twi::{TwiRegisters, TwiStatus};
