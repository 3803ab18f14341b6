//! I2C bus abstractions
//!
//! Provides the handle-based master interface the command dispatcher drives.
//! A device is configured once with [`I2cBus::setup`], and the returned
//! handle is reused for every later transfer to that device.

/// Highest valid 7-bit device address
pub const MAX_ADDRESS: u8 = 0x7F;

/// I2C bus master
///
/// Mirrors the firmware command surface: `setup` binds a device address on a
/// bus, `write` sends a payload, `read` selects a register and reads back.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Per-device handle produced by [`setup`](Self::setup)
    type Handle: Copy;

    /// Bind a device on a bus
    ///
    /// # Arguments
    /// * `bus` - Bus index
    /// * `config` - Requested bus settings (implementations may ignore them)
    /// * `address` - 7-bit device address
    fn setup(&mut self, bus: u32, config: I2cConfig, address: u8)
        -> Result<Self::Handle, Self::Error>;

    /// Write `data` to the device in a single start..stop transaction
    fn write(&mut self, handle: Self::Handle, data: &[u8]) -> Result<(), Self::Error>;

    /// Write `register` then read `buf.len()` bytes (repeated start)
    fn read(
        &mut self,
        handle: Self::Handle,
        register: &[u8],
        buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };

    /// Request a specific frequency
    pub const fn with_frequency(frequency: u32) -> Self {
        Self { frequency }
    }
}
