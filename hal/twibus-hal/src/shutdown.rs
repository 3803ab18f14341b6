//! Fail-stop channel
//!
//! Firmware in this family does not recover from bus faults locally. A fault
//! is reported once, with a human-readable reason, and the control loop stops
//! until an external supervisor restarts it.

/// Process-wide halt primitive
pub trait Shutdown {
    /// Stop the controller with `reason`. Never returns.
    fn shutdown(&mut self, reason: &'static str) -> !;
}
