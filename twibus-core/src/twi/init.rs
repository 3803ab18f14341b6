//! Bus bring-up
//!
//! Bring-up runs at most once per power cycle: once TWEN is set the
//! peripheral is left alone, whoever enabled it.

use twibus_hal::twi::control::TWEN;
use twibus_hal::{PinSetup, TwiRegisters};

use crate::config::{BusPins, TwiConfig, BUS_FREQUENCY_HZ};

/// Enable the peripheral at 100 kHz unless it is already enabled
pub fn ensure_enabled<R, P>(regs: &mut R, pins: &mut P, bus_pins: BusPins, config: &TwiConfig)
where
    R: TwiRegisters,
    P: PinSetup,
{
    if regs.is_enabled() {
        return;
    }

    // Idle-high lines with pull-ups
    pins.setup_output(bus_pins.sda, true);
    pins.setup_output(bus_pins.scl, true);

    regs.write_status(0);
    let divisor = config.bit_rate_divisor();
    regs.write_bit_rate(divisor);

    regs.write_control(TWEN);

    debug!(
        "i2c enabled: {} Hz from {} Hz clock, TWBR={}",
        BUS_FREQUENCY_HZ,
        config.clock_hz,
        divisor
    );
}
