//! Error types for max14819-core
//!
//! This module provides a no_std compatible error type that can be used
//! throughout the crate.

use core::fmt;

/// Which address field of a command byte was out of range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    /// Chip address (0-3)
    Chip,
    /// 5-bit register address (0x00-0x1F)
    Register,
}

/// Core error type - no_std compatible, Copy for efficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    // Codec errors
    /// Chip or register address does not fit its bit field
    AddressOutOfRange {
        /// The field that overflowed
        field: AddressField,
        /// The rejected value
        value: u8,
    },

    // Register model errors
    /// Register address is not present in the register table
    UnknownRegister(u8),
    /// Bit position outside 0-7
    InvalidBitPosition(u8),
    /// Register table has a duplicate, missing or oversized address
    InvalidRegisterTable {
        /// Index in the table where validation failed
        index: usize,
    },

    // Bus errors
    /// The transport failed to exchange a frame
    TransportFailure,
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chip => write!(f, "chip address"),
            Self::Register => write!(f, "register address"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddressOutOfRange { field, value } => {
                let max = match field {
                    AddressField::Chip => crate::spi::CHIP_ADDRESS_MAX,
                    AddressField::Register => crate::spi::REGISTER_ADDRESS_MAX,
                };
                write!(f, "{} 0x{:02X} out of range (max 0x{:02X})", field, value, max)
            }
            Self::UnknownRegister(addr) => write!(f, "unknown register 0x{:02X}", addr),
            Self::InvalidBitPosition(pos) => {
                write!(f, "invalid bit position {} (must be 0-7)", pos)
            }
            Self::InvalidRegisterTable { index } => {
                write!(f, "invalid register table entry at index {}", index)
            }
            Self::TransportFailure => write!(f, "SPI transfer failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias using the core Error type
pub type Result<T> = core::result::Result<T, Error>;
