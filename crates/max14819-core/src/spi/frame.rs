//! Command frame encoding
//!
//! Command byte layout:
//!
//! ```text
//!   7   6   5   4   3   2   1   0
//! +---+-------+-------------------+
//! | R | chip  |  register address |
//! +---+-------+-------------------+
//! ```
//!
//! R is 1 for a read and 0 for a write. The chip address field is bits 6:5;
//! an address of 4 or more would spill into R, so encoding rejects it. The
//! second byte carries the value to write, or a placeholder on reads.

use crate::error::{AddressField, Error, Result};
use crate::register::RegisterValue;

/// Read/write discriminator set in the command byte for reads
pub const COMMAND_READ: u8 = 0x80;
/// Read/write discriminator for writes (bit 7 clear)
pub const COMMAND_WRITE: u8 = 0x00;
/// Position of the chip address field in the command byte
pub const CHIP_ADDRESS_SHIFT: u8 = 5;
/// Largest chip address that fits below the R bit
pub const CHIP_ADDRESS_MAX: u8 = 0x03;
/// Mask of the chip address field once shifted down
pub const CHIP_ADDRESS_MASK: u8 = CHIP_ADDRESS_MAX;
/// Largest register address (5 bits)
pub const REGISTER_ADDRESS_MAX: u8 = 0x1F;
/// Mask of the register address field
pub const REGISTER_ADDRESS_MASK: u8 = REGISTER_ADDRESS_MAX;
/// Size of one frame in bytes
pub const FRAME_LEN: usize = 2;

/// One command/data unit exchanged over the bus, in either direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommandFrame {
    /// Command byte (outgoing) or in-band status byte (incoming)
    pub command: u8,
    /// Data byte
    pub data: u8,
}

impl CommandFrame {
    /// Create a frame from its two bytes
    pub const fn new(command: u8, data: u8) -> Self {
        Self { command, data }
    }

    /// Bytes in transmission order
    pub const fn to_bytes(self) -> [u8; FRAME_LEN] {
        [self.command, self.data]
    }

    /// Build a frame from bytes in transmission order
    pub const fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Self::new(bytes[0], bytes[1])
    }

    /// Returns true if the command byte requests a read
    pub const fn is_read(&self) -> bool {
        self.command & COMMAND_READ != 0
    }

    /// Chip address field of the command byte
    pub const fn chip_address(&self) -> u8 {
        (self.command >> CHIP_ADDRESS_SHIFT) & CHIP_ADDRESS_MASK
    }

    /// Register address field of the command byte
    pub const fn register_address(&self) -> u8 {
        self.command & REGISTER_ADDRESS_MASK
    }
}

impl From<[u8; FRAME_LEN]> for CommandFrame {
    fn from(bytes: [u8; FRAME_LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<CommandFrame> for [u8; FRAME_LEN] {
    fn from(frame: CommandFrame) -> Self {
        frame.to_bytes()
    }
}

fn check_addresses(chip_address: u8, register_address: u8) -> Result<()> {
    if chip_address > CHIP_ADDRESS_MAX {
        return Err(Error::AddressOutOfRange {
            field: AddressField::Chip,
            value: chip_address,
        });
    }
    if register_address > REGISTER_ADDRESS_MAX {
        return Err(Error::AddressOutOfRange {
            field: AddressField::Register,
            value: register_address,
        });
    }
    Ok(())
}

fn command_byte(rw: u8, chip_address: u8, register_address: u8) -> u8 {
    rw | (chip_address << CHIP_ADDRESS_SHIFT) | register_address
}

/// Encode a register read
///
/// The data byte is a placeholder the chip ignores.
pub fn encode_read(chip_address: u8, register_address: u8) -> Result<CommandFrame> {
    check_addresses(chip_address, register_address)?;
    Ok(CommandFrame::new(
        command_byte(COMMAND_READ, chip_address, register_address),
        0x00,
    ))
}

/// Encode a register write
pub fn encode_write(
    chip_address: u8,
    register_address: u8,
    value: RegisterValue,
) -> Result<CommandFrame> {
    check_addresses(chip_address, register_address)?;
    Ok(CommandFrame::new(
        command_byte(COMMAND_WRITE, chip_address, register_address),
        value,
    ))
}

/// Extract the register value from a received frame
///
/// `frame` must be the frame received in the same exchange that sent the
/// command; its second byte is the addressed register's content.
pub fn decode_response(frame: CommandFrame) -> RegisterValue {
    frame.data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_differ_only_in_bit7() {
        for chip in 0..=CHIP_ADDRESS_MAX {
            for reg in 0..=REGISTER_ADDRESS_MAX {
                let rd = encode_read(chip, reg).unwrap();
                let wr = encode_write(chip, reg, 0xA5).unwrap();
                assert_eq!(rd.command & 0x80, 0x80);
                assert_eq!(wr.command & 0x80, 0x00);
                assert_eq!(rd.command & 0x7F, wr.command);
                assert_eq!(rd.data, 0x00);
                assert_eq!(wr.data, 0xA5);
                assert_eq!(rd.chip_address(), chip);
                assert_eq!(rd.register_address(), reg);
                assert!(rd.is_read());
                assert!(!wr.is_read());
            }
        }
    }

    #[test]
    fn test_known_frames() {
        assert_eq!(encode_read(0, 0x0E).unwrap().to_bytes(), [0x8E, 0x00]);
        assert_eq!(encode_write(1, 0x0F, 0x05).unwrap().to_bytes(), [0x2F, 0x05]);
        assert_eq!(encode_read(3, 0x1F).unwrap().command, 0xFF);
        assert_eq!(encode_write(3, 0x1F, 0).unwrap().command, 0x7F);
        assert_eq!(encode_write(0, 0x00, 0).unwrap().command, 0x00);
    }

    #[test]
    fn test_chip_field_ignores_r_bit() {
        for chip in 0..=CHIP_ADDRESS_MAX {
            let rd = CommandFrame::new(COMMAND_READ | (chip << CHIP_ADDRESS_SHIFT) | 0x06, 0);
            assert_eq!(rd.chip_address(), chip);
            assert_eq!(rd.register_address(), 0x06);
        }
        assert_eq!(CommandFrame::new(0x86, 0).chip_address(), 0);
        assert_eq!(CommandFrame::new(0xE0, 0).chip_address(), 3);
    }

    #[test]
    fn test_chip_address_colliding_with_r_bit_is_rejected() {
        for chip in (CHIP_ADDRESS_MAX + 1)..=7 {
            let expected = Error::AddressOutOfRange {
                field: AddressField::Chip,
                value: chip,
            };
            assert_eq!(encode_write(chip, 0x00, 0xA5).unwrap_err(), expected);
            assert_eq!(encode_read(chip, 0x00).unwrap_err(), expected);
        }
    }

    #[test]
    fn test_address_out_of_range() {
        assert_eq!(
            encode_read(8, 0x00).unwrap_err(),
            Error::AddressOutOfRange {
                field: AddressField::Chip,
                value: 8
            }
        );
        assert_eq!(
            encode_read(0, 0x20).unwrap_err(),
            Error::AddressOutOfRange {
                field: AddressField::Register,
                value: 0x20
            }
        );
        assert!(encode_write(0xFF, 0x00, 0).is_err());
        assert!(encode_write(0, 0xFF, 0).is_err());
    }

    #[test]
    fn test_decode_response_takes_second_byte() {
        let frame = CommandFrame::from([0x15, 0xA0]);
        assert_eq!(decode_response(frame), 0xA0);
        let bytes: [u8; 2] = frame.into();
        assert_eq!(bytes, [0x15, 0xA0]);
    }
}
