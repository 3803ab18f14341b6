//! TWI register block
//!
//! The TWI registers sit at the same data-space addresses on every
//! supported part.

use core::ptr::{read_volatile, write_volatile};

use twibus_hal::TwiRegisters;

const TWBR: *mut u8 = 0xB8 as *mut u8;
const TWSR: *mut u8 = 0xB9 as *mut u8;
const TWDR: *mut u8 = 0xBB as *mut u8;
const TWCR: *mut u8 = 0xBC as *mut u8;

/// On-chip TWI peripheral
pub struct AvrTwi {
    _private: (),
}

impl AvrTwi {
    /// Claim the peripheral
    ///
    /// # Safety
    ///
    /// Only one `AvrTwi` may exist, and nothing else may write the TWI
    /// registers while it does.
    pub const unsafe fn steal() -> Self {
        Self { _private: () }
    }
}

impl TwiRegisters for AvrTwi {
    #[inline(always)]
    fn read_control(&self) -> u8 {
        // SAFETY: fixed MMIO address, valid on every supported part
        unsafe { read_volatile(TWCR) }
    }

    #[inline(always)]
    fn write_control(&mut self, value: u8) {
        // SAFETY: fixed MMIO address; `&mut self` is the only writer
        unsafe { write_volatile(TWCR, value) }
    }

    #[inline(always)]
    fn read_status(&self) -> u8 {
        // SAFETY: fixed MMIO address, valid on every supported part
        unsafe { read_volatile(TWSR) }
    }

    #[inline(always)]
    fn write_status(&mut self, value: u8) {
        // SAFETY: fixed MMIO address; `&mut self` is the only writer
        unsafe { write_volatile(TWSR, value) }
    }

    #[inline(always)]
    fn write_data(&mut self, value: u8) {
        // SAFETY: fixed MMIO address; `&mut self` is the only writer
        unsafe { write_volatile(TWDR, value) }
    }

    #[inline(always)]
    fn write_bit_rate(&mut self, value: u8) {
        // SAFETY: fixed MMIO address; `&mut self` is the only writer
        unsafe { write_volatile(TWBR, value) }
    }
}
