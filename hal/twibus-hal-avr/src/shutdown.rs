//! Halting fault handler
//!
//! Stops the control loop in place. Interrupt handlers keep running, so a
//! watchdog or host link supervisor can still observe the halt and reset the
//! board.

use twibus_hal::Shutdown;

/// Spin forever after reporting the reason
#[derive(Debug, Default)]
pub struct Halt;

impl Shutdown for Halt {
    fn shutdown(&mut self, reason: &'static str) -> ! {
        #[cfg(feature = "defmt")]
        defmt::error!("shutdown: {=str}", reason);
        #[cfg(not(feature = "defmt"))]
        let _ = reason;

        loop {
            core::hint::spin_loop();
        }
    }
}
