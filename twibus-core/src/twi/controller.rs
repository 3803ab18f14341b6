//! Bus controller and device handles
//!
//! The controller owns the single TWI register block, the pin driver and the
//! tick source. The surrounding system constructs exactly one and passes it
//! to every caller; `&mut self` on each operation guarantees only one
//! transaction is in flight.

use twibus_hal::i2c::MAX_ADDRESS;
use twibus_hal::{Clock, PinSetup, Shutdown, TwiRegisters};

use super::init;
use super::transaction::TransactionEngine;
use crate::config::{BusPins, TwiConfig, BUS_FREQUENCY_HZ};
use crate::safety::{FailStop, TwiError};

/// Device binding produced by [`TwiController::setup`]
///
/// Holds the device address already shifted into bits 7..1 of the address
/// byte. Only bus 0 exists, so the bus index is implicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusHandle {
    address: u8,
}

impl BusHandle {
    /// Address byte with the R/W bit clear
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Original 7-bit device address
    pub const fn device_address(&self) -> u8 {
        self.address >> 1
    }
}

/// Two-wire master controller
pub struct TwiController<R, P, C> {
    regs: R,
    pins: P,
    clock: C,
    config: TwiConfig,
    bus_pins: BusPins,
}

impl<R, P, C> TwiController<R, P, C>
where
    R: TwiRegisters,
    P: PinSetup,
    C: Clock,
{
    /// Take ownership of the bus hardware. Nothing is written until the
    /// first [`setup`](Self::setup).
    pub fn new(regs: R, pins: P, clock: C, config: TwiConfig, bus_pins: BusPins) -> Self {
        Self {
            regs,
            pins,
            clock,
            config,
            bus_pins,
        }
    }

    /// Driver configuration
    pub fn config(&self) -> &TwiConfig {
        &self.config
    }

    /// Whether the peripheral has been brought up
    pub fn is_enabled(&self) -> bool {
        self.regs.is_enabled()
    }

    /// Bring the bus up if it is not already enabled
    pub fn ensure_enabled(&mut self) {
        init::ensure_enabled(&mut self.regs, &mut self.pins, self.bus_pins, &self.config);
    }

    /// Bind a device
    ///
    /// `rate` is accepted for interface compatibility and ignored; the bus
    /// always runs at 100 kHz. Argument checks happen before any register
    /// access.
    pub fn setup(&mut self, bus: u32, rate: u32, address: u8) -> Result<BusHandle, TwiError> {
        if bus != 0 {
            return Err(TwiError::UnsupportedBus(bus));
        }
        if address > MAX_ADDRESS {
            return Err(TwiError::InvalidAddress(address));
        }
        if rate != BUS_FREQUENCY_HZ {
            debug!("i2c rate {} ignored, bus fixed at {}", rate, BUS_FREQUENCY_HZ);
        }

        self.ensure_enabled();

        Ok(BusHandle {
            address: address << 1,
        })
    }

    /// Write `data` to the device in one start..stop transaction
    pub fn write(&mut self, handle: BusHandle, data: &[u8]) -> Result<(), TwiError> {
        self.transmit(handle, data.iter().copied())
    }

    /// Register read. Not available on this peripheral.
    pub fn read(
        &mut self,
        _handle: BusHandle,
        _register: &[u8],
        _buf: &mut [u8],
    ) -> Result<(), TwiError> {
        Err(TwiError::ReadUnsupported)
    }

    /// Wrap the controller so every fault halts through `shutdown`
    pub fn fail_stop<'a, S: Shutdown>(&'a mut self, shutdown: &'a mut S) -> FailStop<'a, Self, S> {
        FailStop::new(self, shutdown)
    }

    /// Give the hardware back
    pub fn release(self) -> (R, P, C) {
        (self.regs, self.pins, self.clock)
    }

    pub(crate) fn transmit<I>(&mut self, handle: BusHandle, payload: I) -> Result<(), TwiError>
    where
        I: IntoIterator<Item = u8>,
    {
        trace!("i2c write to {}", handle.device_address());
        TransactionEngine::begin(&mut self.regs, &self.clock, self.config.timeout_us)
            .write(handle.address, payload)
    }
}
