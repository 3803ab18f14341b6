//! Trait front-ends for the controller
//!
//! - [`I2cBus`]: the handle-based surface the firmware command dispatcher uses
//! - [`embedded_hal::i2c::I2c`]: for off-the-shelf device drivers
//!
//! Consecutive write operations in an embedded-hal transaction are sent as
//! one start..stop sequence. Any read operation fails before the bus is
//! touched.

use embedded_hal::i2c::{self, Operation, SevenBitAddress};
use twibus_hal::i2c::I2cConfig;
use twibus_hal::{Clock, I2cBus, PinSetup, TwiRegisters};

use super::controller::{BusHandle, TwiController};
use crate::config::BUS_FREQUENCY_HZ;
use crate::safety::TwiError;

impl<R, P, C> I2cBus for TwiController<R, P, C>
where
    R: TwiRegisters,
    P: PinSetup,
    C: Clock,
{
    type Error = TwiError;
    type Handle = BusHandle;

    fn setup(&mut self, bus: u32, config: I2cConfig, address: u8) -> Result<BusHandle, TwiError> {
        TwiController::setup(self, bus, config.frequency, address)
    }

    fn write(&mut self, handle: BusHandle, data: &[u8]) -> Result<(), TwiError> {
        TwiController::write(self, handle, data)
    }

    fn read(&mut self, handle: BusHandle, register: &[u8], buf: &mut [u8]) -> Result<(), TwiError> {
        TwiController::read(self, handle, register, buf)
    }
}

impl<R, P, C> i2c::ErrorType for TwiController<R, P, C> {
    type Error = TwiError;
}

impl<R, P, C> i2c::I2c<SevenBitAddress> for TwiController<R, P, C>
where
    R: TwiRegisters,
    P: PinSetup,
    C: Clock,
{
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), TwiError> {
        if operations.iter().any(|op| matches!(op, Operation::Read(_))) {
            return Err(TwiError::ReadUnsupported);
        }

        let handle = TwiController::setup(self, 0, BUS_FREQUENCY_HZ, address)?;
        let payload = operations
            .iter()
            .filter_map(|op| match op {
                Operation::Write(bytes) => Some(bytes.iter().copied()),
                Operation::Read(_) => None,
            })
            .flatten();
        self.transmit(handle, payload)
    }
}
