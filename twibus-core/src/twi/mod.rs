//! Two-wire master driver
//!
//! Layered leaf-first:
//!
//! - [`init`] - one-time bring-up and divisor programming
//! - [`deadline`] - bounded spin on the completion flag
//! - [`transaction`] - start/address/payload/stop sequencing
//! - [`controller`] - device setup and the public write/read entry points
//! - `bus` - [`twibus_hal::I2cBus`] and `embedded-hal` front-ends

mod bus;
pub mod controller;
pub mod deadline;
pub mod init;
pub mod transaction;

#[cfg(test)]
pub(crate) mod mock;

pub use controller::{BusHandle, TwiController};
pub use deadline::Deadline;
pub use transaction::{TransactionEngine, TransactionState};
