//! GPIO port access for AVR
//!
//! Ports A through G use consecutive PINx/DDRx/PORTx triplets starting at
//! data-space address 0x20. Both TWI pin pairs live in that range.

use core::ptr::{read_volatile, write_volatile};

use twibus_hal::{GpioPin, PinSetup};

/// Data-space address of PINA
const PORT_BASE: usize = 0x20;

/// Highest port reachable through the low I/O triplets (G)
const MAX_LOW_PORT: u8 = 6;

/// Port register addresses for a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortRegisters {
    /// Data direction register
    pub ddr: usize,
    /// Output/pull-up register
    pub port: usize,
}

impl PortRegisters {
    /// Resolve the DDRx/PORTx pair for `pin`, or `None` for ports above G
    pub const fn for_pin(pin: GpioPin) -> Option<Self> {
        let index = pin.port_index();
        if index > MAX_LOW_PORT {
            return None;
        }
        let pin_reg = PORT_BASE + 3 * index as usize;
        Some(Self {
            ddr: pin_reg + 1,
            port: pin_reg + 2,
        })
    }
}

/// Direct port register driver
///
/// Uses read-modify-write on the port registers without masking interrupts;
/// the caller runs bring-up from the main loop, not from an ISR.
pub struct AvrPins {
    _private: (),
}

impl AvrPins {
    /// Claim port register access
    ///
    /// # Safety
    ///
    /// No interrupt handler may modify the DDR/PORT registers of the TWI
    /// pins while [`PinSetup::setup_output`] runs.
    pub const unsafe fn steal() -> Self {
        Self { _private: () }
    }
}

impl PinSetup for AvrPins {
    fn setup_output(&mut self, pin: GpioPin, high: bool) {
        let Some(regs) = PortRegisters::for_pin(pin) else {
            return;
        };
        let mask = pin.mask();
        let ddr = regs.ddr as *mut u8;
        let port = regs.port as *mut u8;

        // SAFETY: addresses come from the port table for ports A-G
        unsafe {
            // Level first so the line never drives low when switched to output
            let level = read_volatile(port);
            write_volatile(port, if high { level | mask } else { level & !mask });
            write_volatile(ddr, read_volatile(ddr) | mask);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_c_registers() {
        let regs = PortRegisters::for_pin(GpioPin::new('C', 5)).unwrap();
        assert_eq!(regs.ddr, 0x27);
        assert_eq!(regs.port, 0x28);
    }

    #[test]
    fn test_port_d_registers() {
        let regs = PortRegisters::for_pin(GpioPin::new('D', 0)).unwrap();
        assert_eq!(regs.ddr, 0x2A);
        assert_eq!(regs.port, 0x2B);
    }

    #[test]
    fn test_high_ports_unmapped() {
        assert_eq!(PortRegisters::for_pin(GpioPin::new('H', 0)), None);
    }
}
