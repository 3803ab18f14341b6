//! Two-wire interface register surface
//!
//! Models the AVR TWI peripheral as four registers:
//!
//! - TWCR (control): enable, start, stop, interrupt flag
//! - TWSR (status): status code in bits 7..3, prescaler in bits 1..0
//! - TWDR (data): byte in flight
//! - TWBR (bit rate): SCL divisor

/// TWCR bit positions
pub mod control {
    /// Interrupt flag. Set by hardware when the current operation completes;
    /// writing 1 clears it and starts the next operation.
    pub const TWINT: u8 = 1 << 7;
    /// Generate start condition
    pub const TWSTA: u8 = 1 << 5;
    /// Generate stop condition
    pub const TWSTO: u8 = 1 << 4;
    /// Peripheral enable
    pub const TWEN: u8 = 1 << 2;
}

/// TWI register block
///
/// Implementations perform the raw register access; all sequencing lives in
/// the driver.
pub trait TwiRegisters {
    /// Read TWCR
    fn read_control(&self) -> u8;

    /// Write TWCR
    fn write_control(&mut self, value: u8);

    /// Read TWSR
    fn read_status(&self) -> u8;

    /// Write TWSR (prescaler bits)
    fn write_status(&mut self, value: u8);

    /// Write TWDR
    fn write_data(&mut self, value: u8);

    /// Write TWBR
    fn write_bit_rate(&mut self, value: u8);

    /// Whether the peripheral enable bit is set
    fn is_enabled(&self) -> bool {
        self.read_control() & control::TWEN != 0
    }

    /// Whether the hardware has flagged the current operation complete
    fn is_complete(&self) -> bool {
        self.read_control() & control::TWINT != 0
    }
}

/// Master-mode status codes reported in TWSR
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TwiStatus {
    /// Start condition transmitted
    Start = 0x08,
    /// Repeated start condition transmitted
    RepeatedStart = 0x10,
    /// SLA+W transmitted, ACK received
    AddressWriteAck = 0x18,
    /// SLA+W transmitted, NACK received
    AddressWriteNack = 0x20,
    /// Data byte transmitted, ACK received
    DataWriteAck = 0x28,
    /// Data byte transmitted, NACK received
    DataWriteNack = 0x30,
    /// Arbitration lost
    ArbitrationLost = 0x38,
    /// SLA+R transmitted, ACK received
    AddressReadAck = 0x40,
    /// SLA+R transmitted, NACK received
    AddressReadNack = 0x48,
    /// Data byte received, ACK returned
    DataReadAck = 0x50,
    /// Data byte received, NACK returned
    DataReadNack = 0x58,
    /// No relevant state information (TWINT clear)
    NoInfo = 0xF8,
    /// Illegal start or stop condition
    BusError = 0x00,
}

impl TwiStatus {
    /// Whether a raw TWSR value confirms a start or repeated start
    ///
    /// The whole register is compared, so a value with prescaler bits set
    /// never matches.
    pub const fn is_start_code(value: u8) -> bool {
        value == Self::Start as u8 || value == Self::RepeatedStart as u8
    }
}
