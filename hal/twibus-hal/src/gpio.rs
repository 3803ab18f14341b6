//! GPIO pin abstractions
//!
//! Pins are identified by port letter and bit number, packed into a single
//! byte as `(port - 'A') * 8 + bit`. AVR ports have eight lines each, so the
//! packed value maps directly onto the DDRx/PORTx register bank.

/// GPIO pin identifier (port letter + bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioPin(u8);

impl GpioPin {
    /// Create a pin from a port letter (`'A'..='L'`) and bit number (0-7)
    ///
    /// # Panics
    ///
    /// Panics if the port letter or bit is out of range. In a `const`
    /// context this is a compile error.
    pub const fn new(port: char, bit: u8) -> Self {
        assert!(port >= 'A' && port <= 'L', "GPIO port must be 'A'..='L'");
        assert!(bit < 8, "GPIO bit must be 0-7");
        Self((port as u8 - b'A') * 8 + bit)
    }

    /// Port index, 0 for port A
    pub const fn port_index(self) -> u8 {
        self.0 / 8
    }

    /// Port letter
    pub const fn port(self) -> char {
        (b'A' + self.port_index()) as char
    }

    /// Bit number within the port
    pub const fn bit(self) -> u8 {
        self.0 % 8
    }

    /// Single-bit mask for this pin in its port registers
    pub const fn mask(self) -> u8 {
        1 << self.bit()
    }
}

/// Line direction/level control used during bus bring-up
///
/// Implementations handle the actual hardware register manipulation for the
/// specific chip.
pub trait PinSetup {
    /// Configure `pin` as an output and drive it to `high`
    ///
    /// On AVR, an output that is driven high while the TWI peripheral owns
    /// the line leaves the internal pull-up enabled.
    fn setup_output(&mut self, pin: GpioPin, high: bool);
}
