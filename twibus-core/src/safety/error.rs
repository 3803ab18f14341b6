//! Driver fault taxonomy

use core::fmt;

use embedded_hal::i2c;

use crate::twi::TransactionState;

/// Fault category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// Bad setup arguments (bus index, address)
    Configuration,
    /// Hardware reported an unexpected bus state
    Protocol,
    /// Hardware did not complete an operation within the transaction budget
    Timeout,
    /// Operation not available on this hardware variant
    UnsupportedOperation,
}

/// Two-wire driver fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TwiError {
    /// Only bus 0 exists
    UnsupportedBus(u32),
    /// Device address does not fit in 7 bits
    InvalidAddress(u8),
    /// TWSR after a start request was not a start code (raw status attached)
    StartFailed(u8),
    /// Deadline passed while waiting in the given state
    Timeout(TransactionState),
    /// Reads are not implemented for this peripheral
    ReadUnsupported,
}

impl TwiError {
    /// Fault category
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedBus(_) | Self::InvalidAddress(_) => ErrorKind::Configuration,
            Self::StartFailed(_) => ErrorKind::Protocol,
            Self::Timeout(_) => ErrorKind::Timeout,
            Self::ReadUnsupported => ErrorKind::UnsupportedOperation,
        }
    }

    /// Shutdown reason reported to the fail-stop channel
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::UnsupportedBus(_) => "Unsupported i2c bus",
            Self::InvalidAddress(_) => "Invalid i2c address",
            Self::StartFailed(_) => "Failed to send i2c start",
            Self::Timeout(_) => "i2c timeout",
            Self::ReadUnsupported => "i2c read not supported",
        }
    }
}

impl fmt::Display for TwiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedBus(bus) => write!(f, "{} {}", self.reason(), bus),
            Self::InvalidAddress(addr) => write!(f, "{} {:#04x}", self.reason(), addr),
            Self::StartFailed(status) => write!(f, "{} (status {:#04x})", self.reason(), status),
            Self::Timeout(state) => write!(f, "{} ({:?})", self.reason(), state),
            Self::ReadUnsupported => f.write_str(self.reason()),
        }
    }
}

impl i2c::Error for TwiError {
    fn kind(&self) -> i2c::ErrorKind {
        match self {
            Self::StartFailed(_) => i2c::ErrorKind::Bus,
            _ => i2c::ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_taxonomy() {
        assert_eq!(TwiError::UnsupportedBus(1).kind(), ErrorKind::Configuration);
        assert_eq!(TwiError::InvalidAddress(0x80).kind(), ErrorKind::Configuration);
        assert_eq!(TwiError::StartFailed(0x38).kind(), ErrorKind::Protocol);
        assert_eq!(
            TwiError::Timeout(TransactionState::StartSent).kind(),
            ErrorKind::Timeout
        );
        assert_eq!(
            TwiError::ReadUnsupported.kind(),
            ErrorKind::UnsupportedOperation
        );
    }

    #[test]
    fn test_reasons() {
        assert_eq!(TwiError::UnsupportedBus(3).reason(), "Unsupported i2c bus");
        assert_eq!(TwiError::InvalidAddress(0x80).reason(), "Invalid i2c address");
        assert_eq!(TwiError::StartFailed(0).reason(), "Failed to send i2c start");
        assert_eq!(
            TwiError::Timeout(TransactionState::DataSent).reason(),
            "i2c timeout"
        );
        assert_eq!(TwiError::ReadUnsupported.reason(), "i2c read not supported");
    }

    #[test]
    fn test_embedded_hal_kind() {
        assert_eq!(
            i2c::Error::kind(&TwiError::StartFailed(0x38)),
            i2c::ErrorKind::Bus
        );
        assert_eq!(
            i2c::Error::kind(&TwiError::ReadUnsupported),
            i2c::ErrorKind::Other
        );
    }
}
