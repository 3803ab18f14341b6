//! Fail-stop front-end
//!
//! Production callers go through [`FailStop`]: operations return plain
//! values, and any fault is logged and handed to the environment's
//! [`Shutdown`] channel, which never returns. Host tests use the
//! `Result`-returning API directly, or a `Shutdown` that panics.

use twibus_hal::i2c::I2cConfig;
use twibus_hal::{I2cBus, Shutdown};

use super::error::TwiError;

/// Bus wrapper that halts on the first fault
pub struct FailStop<'a, B, S> {
    bus: &'a mut B,
    shutdown: &'a mut S,
}

impl<'a, B, S> FailStop<'a, B, S>
where
    B: I2cBus<Error = TwiError>,
    S: Shutdown,
{
    /// Wrap `bus`, routing faults to `shutdown`
    pub fn new(bus: &'a mut B, shutdown: &'a mut S) -> Self {
        Self { bus, shutdown }
    }

    /// Bind a device on `bus`; `rate` is passed through unchanged
    pub fn setup(&mut self, bus: u32, rate: u32, address: u8) -> B::Handle {
        let result = self
            .bus
            .setup(bus, I2cConfig::with_frequency(rate), address);
        self.check(result)
    }

    /// Write `data` to the device
    pub fn write(&mut self, handle: B::Handle, data: &[u8]) {
        let result = self.bus.write(handle, data);
        self.check(result)
    }

    /// Read `buf.len()` bytes from `register`
    pub fn read(&mut self, handle: B::Handle, register: &[u8], buf: &mut [u8]) {
        let result = self.bus.read(handle, register, buf);
        self.check(result)
    }

    fn check<T>(&mut self, result: Result<T, TwiError>) -> T {
        match result {
            Ok(value) => value,
            Err(err) => {
                error!("i2c fault: {}", err);
                self.shutdown.shutdown(err.reason())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{bus_pins, McuFamily, TwiConfig};
    use crate::twi::mock::{MockClock, MockPins, MockTwi};
    use crate::twi::TwiController;

    struct PanicShutdown;

    impl Shutdown for PanicShutdown {
        fn shutdown(&mut self, reason: &'static str) -> ! {
            panic!("shutdown: {}", reason)
        }
    }

    fn controller(twi: MockTwi) -> TwiController<MockTwi, MockPins, MockClock> {
        TwiController::new(
            twi,
            MockPins::default(),
            MockClock::new(0),
            TwiConfig::new(16_000_000),
            bus_pins(McuFamily::Atmega328),
        )
    }

    #[test]
    fn test_success_path_returns_values() {
        let mut twi = controller(MockTwi::new());
        let mut shutdown = PanicShutdown;
        let mut bus = twi.fail_stop(&mut shutdown);

        let handle = bus.setup(0, 100_000, 0x50);
        bus.write(handle, &[0x00, 0x01]);
        bus.write(handle, &[]);

        let (regs, _, _) = twi.release();
        assert_eq!(regs.data_bytes().as_slice(), &[0xA0, 0x00, 0x01, 0xA0]);
    }

    #[test]
    #[should_panic(expected = "shutdown: Unsupported i2c bus")]
    fn test_unsupported_bus_halts() {
        let mut twi = controller(MockTwi::new());
        let mut shutdown = PanicShutdown;
        twi.fail_stop(&mut shutdown).setup(1, 100_000, 0x50);
    }

    #[test]
    #[should_panic(expected = "shutdown: Invalid i2c address")]
    fn test_invalid_address_halts() {
        let mut twi = controller(MockTwi::new());
        let mut shutdown = PanicShutdown;
        twi.fail_stop(&mut shutdown).setup(0, 100_000, 0x80);
    }

    #[test]
    #[should_panic(expected = "shutdown: Failed to send i2c start")]
    fn test_bad_start_halts() {
        let mut regs = MockTwi::new();
        regs.start_status = 0x38;
        let mut twi = controller(regs);
        let mut shutdown = PanicShutdown;
        let mut bus = twi.fail_stop(&mut shutdown);

        let handle = bus.setup(0, 100_000, 0x50);
        bus.write(handle, &[0x01]);
    }

    #[test]
    #[should_panic(expected = "shutdown: i2c timeout")]
    fn test_timeout_halts() {
        let mut twi = controller(MockTwi::hung());
        let mut shutdown = PanicShutdown;
        let mut bus = twi.fail_stop(&mut shutdown);

        let handle = bus.setup(0, 100_000, 0x50);
        bus.write(handle, &[0x01]);
    }

    #[test]
    #[should_panic(expected = "shutdown: i2c read not supported")]
    fn test_zero_length_read_halts() {
        let mut twi = controller(MockTwi::new());
        let mut shutdown = PanicShutdown;
        let mut bus = twi.fail_stop(&mut shutdown);

        let handle = bus.setup(0, 100_000, 0x50);
        bus.read(handle, &[], &mut []);
    }
}
