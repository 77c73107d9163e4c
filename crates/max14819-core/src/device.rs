//! Register access over a transport
//!
//! [`Max14819`] performs encode → transfer → decode for one chip on the
//! bus. Each method is a complete, independent exchange; there is no
//! session state beyond the in-band status of the last response.

use crate::error::{AddressField, Error, Result};
use crate::register::{RegisterDef, RegisterTable, RegisterValue, MAX14819_REGISTERS};
use crate::register::REGISTER_COUNT;
use crate::spi::{
    decode_bits, decode_response, decode_status, encode_read, encode_write, BitVector,
    InbandStatus, CHIP_ADDRESS_MAX,
};
use crate::transport::Transport;

/// Chip address selecting one of up to four chips on a shared bus
///
/// Only 0-3 are accepted: the field sits in bits 6:5 of the command byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ChipAddress(u8);

impl ChipAddress {
    /// Validate a chip address (0-3)
    pub const fn new(address: u8) -> Result<Self> {
        if address > CHIP_ADDRESS_MAX {
            return Err(Error::AddressOutOfRange {
                field: AddressField::Chip,
                value: address,
            });
        }
        Ok(Self(address))
    }

    /// The raw address
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ChipAddress {
    type Error = Error;

    fn try_from(address: u8) -> Result<Self> {
        Self::new(address)
    }
}

/// A register value together with its definition and decoded bits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterSnapshot {
    /// Register definition
    pub def: &'static RegisterDef,
    /// Raw value
    pub value: RegisterValue,
    /// Named bits of `value`
    pub bits: BitVector,
}

impl RegisterSnapshot {
    /// Decode `value` against `def`
    pub fn new(def: &'static RegisterDef, value: RegisterValue) -> Self {
        Self {
            def,
            value,
            bits: decode_bits(value, def),
        }
    }
}

/// Register access to one MAX14819 behind a transport
pub struct Max14819<T: Transport> {
    transport: T,
    chip: ChipAddress,
    table: RegisterTable,
    last_status: InbandStatus,
}

impl<T: Transport> Max14819<T> {
    /// Create a handle for the chip at `chip_address` (0-3)
    pub fn new(transport: T, chip_address: u8) -> Result<Self> {
        Ok(Self::with_chip(transport, ChipAddress::new(chip_address)?))
    }

    /// Create a handle for an already validated chip address
    pub fn with_chip(transport: T, chip: ChipAddress) -> Self {
        Self {
            transport,
            chip,
            table: MAX14819_REGISTERS,
            last_status: InbandStatus::empty(),
        }
    }

    /// Chip address used for every command
    pub fn chip_address(&self) -> ChipAddress {
        self.chip
    }

    /// Register table used to decode values
    pub fn table(&self) -> &RegisterTable {
        &self.table
    }

    /// In-band status returned by the most recent exchange
    pub fn last_status(&self) -> InbandStatus {
        self.last_status
    }

    /// Access the underlying transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give back the transport
    pub fn release(self) -> T {
        self.transport
    }

    /// Read the raw value of a register
    pub fn read(&mut self, address: u8) -> Result<RegisterValue> {
        let cmd = encode_read(self.chip.get(), address)?;
        let resp = self.transport.transfer(cmd)?;
        self.last_status = decode_status(resp);
        let value = decode_response(resp);
        log::trace!(
            "max14819[{}]: tx {:02X} {:02X} rx {:02X} {:02X}",
            self.chip.get(),
            cmd.command,
            cmd.data,
            resp.command,
            resp.data
        );
        log::debug!(
            "max14819[{}]: read 0x{:02X} -> 0x{:02X}",
            self.chip.get(),
            address,
            value
        );
        Ok(value)
    }

    /// Write a raw value to a register
    pub fn write(&mut self, address: u8, value: RegisterValue) -> Result<()> {
        let cmd = encode_write(self.chip.get(), address, value)?;
        let resp = self.transport.transfer(cmd)?;
        self.last_status = decode_status(resp);
        log::trace!(
            "max14819[{}]: tx {:02X} {:02X} rx {:02X} {:02X}",
            self.chip.get(),
            cmd.command,
            cmd.data,
            resp.command,
            resp.data
        );
        log::debug!(
            "max14819[{}]: write 0x{:02X} <- 0x{:02X}",
            self.chip.get(),
            address,
            value
        );
        Ok(())
    }

    /// Read a register and decode it into named bits
    pub fn read_register(&mut self, address: u8) -> Result<RegisterSnapshot> {
        let def = self.table.lookup(address)?;
        let value = self.read(address)?;
        Ok(RegisterSnapshot::new(def, value))
    }

    /// Read-modify-write: clear `clear` bits, then set `set` bits
    ///
    /// Returns the value written.
    pub fn modify(&mut self, address: u8, set: u8, clear: u8) -> Result<RegisterValue> {
        let old = self.read(address)?;
        let new = (old & !clear) | set;
        self.write(address, new)?;
        Ok(new)
    }

    /// Read every register in table order
    pub fn dump(&mut self) -> Result<heapless::Vec<RegisterSnapshot, REGISTER_COUNT>> {
        // A validated table never holds more than REGISTER_COUNT entries.
        let table = self.table;
        table
            .iter()
            .map(|def| -> Result<RegisterSnapshot> {
                let value = self.read(def.address)?;
                Ok(RegisterSnapshot::new(def, value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::{lookup, reg};
    use crate::spi::CommandFrame;

    /// Register file that answers each frame with the addressed content
    struct Echo {
        regs: [u8; 32],
        status: u8,
        sent: heapless::Vec<CommandFrame, 64>,
        fail: bool,
    }

    impl Echo {
        fn new() -> Self {
            Self {
                regs: [0; 32],
                status: 0,
                sent: heapless::Vec::new(),
                fail: false,
            }
        }
    }

    impl Transport for Echo {
        fn transfer(&mut self, frame: CommandFrame) -> Result<CommandFrame> {
            if self.fail {
                return Err(Error::TransportFailure);
            }
            self.sent.push(frame).unwrap();
            let idx = frame.register_address() as usize;
            if !frame.is_read() {
                self.regs[idx] = frame.data;
            }
            Ok(CommandFrame::new(self.status, self.regs[idx]))
        }
    }

    #[test]
    fn test_chip_address_validation() {
        assert!(ChipAddress::new(3).is_ok());
        assert_eq!(
            ChipAddress::try_from(4).unwrap_err(),
            Error::AddressOutOfRange {
                field: AddressField::Chip,
                value: 4
            }
        );
        assert!(ChipAddress::new(7).is_err());
        assert!(Max14819::new(Echo::new(), 8).is_err());
    }

    #[test]
    fn test_write_then_read_back_bits() {
        let mut chip = Max14819::new(Echo::new(), 0).unwrap();
        for v in [0x00u8, 0x01, 0x80, 0xA5, 0xFF] {
            chip.write(reg::CQ_CFG_A, v).unwrap();
            let snap = chip.read_register(reg::CQ_CFG_A).unwrap();
            assert_eq!(snap.value, v);
            for (pos, name) in lookup(reg::CQ_CFG_A).unwrap().bits.iter().enumerate() {
                assert_eq!(snap.bits.get(name), Some((v >> (7 - pos)) & 1 == 1));
            }
        }
    }

    #[test]
    fn test_frames_on_the_wire() {
        let mut echo = Echo::new();
        {
            let mut chip = Max14819::new(&mut echo, 1).unwrap();
            chip.write(reg::TRIGGER, 0x05).unwrap();
            chip.read(reg::LED_CTRL).unwrap();
        }
        assert_eq!(echo.sent[0].to_bytes(), [0x2F, 0x05]);
        assert_eq!(echo.sent[1].to_bytes(), [0xAE, 0x00]);
    }

    #[test]
    fn test_modify() {
        let mut chip = Max14819::new(Echo::new(), 0).unwrap();
        chip.write(reg::CQ_CTRL_A, 0b0010_0001).unwrap();
        let new = chip.modify(reg::CQ_CTRL_A, 0b0000_1100, 0b0000_0001).unwrap();
        assert_eq!(new, 0b0010_1100);
        assert_eq!(chip.read(reg::CQ_CTRL_A).unwrap(), 0b0010_1100);
    }

    #[test]
    fn test_dump_reads_every_register() {
        let mut echo = Echo::new();
        echo.regs[reg::REV_ID as usize] = 0x02;
        let mut chip = Max14819::new(echo, 3).unwrap();
        let regs = chip.dump().unwrap();
        assert_eq!(regs.len(), REGISTER_COUNT);
        assert_eq!(regs[31].def.name, "RevID");
        assert_eq!(regs[31].value, 0x02);
        assert_eq!(regs[31].bits.get("ID1"), Some(true));
        let echo = chip.release();
        assert_eq!(echo.sent.len(), REGISTER_COUNT);
        assert!(echo.sent.iter().all(|f| f.is_read() && f.chip_address() == 3));
    }

    #[test]
    fn test_status_and_errors() {
        let mut echo = Echo::new();
        echo.status = 0x12;
        let mut chip = Max14819::new(echo, 0).unwrap();
        chip.read(reg::STATUS).unwrap();
        assert!(chip.last_status().contains(InbandStatus::IRQ | InbandStatus::RERR_A));

        assert_eq!(
            chip.read(0x20).unwrap_err(),
            Error::AddressOutOfRange {
                field: AddressField::Register,
                value: 0x20
            }
        );
        assert_eq!(chip.read_register(0x20).unwrap_err(), Error::UnknownRegister(0x20));

        chip.transport_mut().fail = true;
        assert_eq!(chip.read(reg::STATUS).unwrap_err(), Error::TransportFailure);
        assert_eq!(chip.write(reg::STATUS, 0).unwrap_err(), Error::TransportFailure);
    }
}
