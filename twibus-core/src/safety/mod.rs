//! Fault handling
//!
//! Every driver fault is fatal to the controller. The driver API reports
//! faults as [`TwiError`] values; [`FailStop`] turns them into a halt through
//! the environment's shutdown channel.

pub mod error;
pub mod failstop;

pub use error::{ErrorKind, TwiError};
pub use failstop::FailStop;
