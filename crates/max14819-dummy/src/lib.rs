//! max14819-dummy - In-memory MAX14819 emulator for testing
//!
//! This crate provides a transport that emulates the register file of a
//! MAX14819 in memory. It's useful for testing and development without
//! real hardware.

#![cfg_attr(not(feature = "std"), no_std)]

use max14819_core::error::Result;
use max14819_core::register::{reg, REGISTERS, REGISTER_COUNT};
use max14819_core::spi::{CommandFrame, InbandStatus};
use max14819_core::Transport;

/// Configuration for the dummy chip
#[derive(Debug, Clone)]
pub struct DummyConfig {
    /// Chip address the emulated chip answers to (0-3)
    pub chip_address: u8,
    /// Silicon revision reported in the low nibble of RevID
    pub revision: u8,
    /// In-band status returned with every response
    pub status: InbandStatus,
}

impl Default for DummyConfig {
    fn default() -> Self {
        Self {
            chip_address: 0,
            revision: 0x02,
            status: InbandStatus::empty(),
        }
    }
}

/// Dummy MAX14819
///
/// Write frames store the data byte and echo it back; read frames return
/// the stored byte. Reserved bits always read as zero and RevID is read
/// only. Frames for other chip addresses get an all-zero response, as if
/// the chip was not selected.
pub struct DummyMax14819 {
    config: DummyConfig,
    regs: [u8; REGISTER_COUNT],
    transfers: usize,
    last_frame: Option<CommandFrame>,
}

impl DummyMax14819 {
    /// Create a new dummy chip with the given configuration
    pub fn new(config: DummyConfig) -> Self {
        let mut regs = [0u8; REGISTER_COUNT];
        regs[reg::REV_ID as usize] = config.revision & 0x0F;
        Self {
            config,
            regs,
            transfers: 0,
            last_frame: None,
        }
    }

    /// Create a new dummy chip at address 0 with default settings
    pub fn new_default() -> Self {
        Self::new(DummyConfig::default())
    }

    /// Create a dummy chip with pre-filled register contents
    ///
    /// RevID always reports `config.revision`, whatever `initial` holds.
    pub fn with_registers(config: DummyConfig, initial: &[u8]) -> Self {
        let mut chip = Self::new(config);
        let len = core::cmp::min(initial.len(), chip.regs.len());
        chip.regs[..len].copy_from_slice(&initial[..len]);
        chip.regs[reg::REV_ID as usize] = chip.config.revision & 0x0F;
        chip
    }

    /// Get the register contents
    pub fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.regs
    }

    /// Get mutable access to the register contents
    pub fn registers_mut(&mut self) -> &mut [u8; REGISTER_COUNT] {
        &mut self.regs
    }

    /// Set the in-band status returned with each response
    pub fn set_status(&mut self, status: InbandStatus) {
        self.config.status = status;
    }

    /// Number of frames exchanged so far
    pub fn transfers(&self) -> usize {
        self.transfers
    }

    /// The most recent frame received from the host
    pub fn last_frame(&self) -> Option<CommandFrame> {
        self.last_frame
    }

    /// Get the configuration
    pub fn config(&self) -> &DummyConfig {
        &self.config
    }

    fn handle_write(&mut self, address: u8, value: u8) {
        if address == reg::REV_ID {
            log::debug!("dummy: ignoring write to read-only RevID");
            return;
        }
        let def = &REGISTERS[address as usize];
        self.regs[address as usize] = value & def.writable_mask();
    }
}

impl Transport for DummyMax14819 {
    fn transfer(&mut self, frame: CommandFrame) -> Result<CommandFrame> {
        self.transfers += 1;
        self.last_frame = Some(frame);

        if frame.chip_address() != self.config.chip_address {
            log::trace!(
                "dummy: frame for chip {} ignored (we are {})",
                frame.chip_address(),
                self.config.chip_address
            );
            return Ok(CommandFrame::default());
        }

        let address = frame.register_address();
        if !frame.is_read() {
            self.handle_write(address, frame.data);
        }

        Ok(CommandFrame::new(
            self.config.status.bits(),
            self.regs[address as usize],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use max14819_core::register::lookup;
    use max14819_core::spi::{decode_bits, decode_response, encode_read, encode_write};
    use max14819_core::Max14819;

    #[test]
    fn test_write_decodes_to_written_bits() {
        let revision = DummyConfig::default().revision & 0x0F;
        let mut dummy = DummyMax14819::new_default();
        for r in 0..=reg::REV_ID {
            let def = lookup(r).unwrap();
            for v in 0..=u8::MAX {
                let resp = dummy.transfer(encode_write(0, r, v).unwrap()).unwrap();
                let bits = decode_bits(decode_response(resp), def);
                let named = def.bits.iter().filter(|n| **n != "-").count();
                assert_eq!(bits.len(), named, "{}", def.name);
                // RevID is read-only and keeps reporting the revision
                let expected = if r == reg::REV_ID { revision } else { v };
                for b in &bits {
                    assert_eq!(
                        b.set,
                        expected & (1 << b.bit) != 0,
                        "{} 0x{:02x} {}",
                        def.name,
                        v,
                        b.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_read_after_write_through_handle() {
        let mut chip = Max14819::new(DummyMax14819::new_default(), 0).unwrap();
        chip.write(reg::CQ_CTRL_A, 0x21).unwrap();
        assert_eq!(chip.read(reg::CQ_CTRL_A).unwrap(), 0x21);
        let dummy = chip.release();
        assert_eq!(dummy.registers()[reg::CQ_CTRL_A as usize], 0x21);
        assert_eq!(dummy.last_frame().unwrap().to_bytes(), [0x86, 0x00]);
    }

    #[test]
    fn test_prefill_keeps_revision() {
        let initial = [0xFFu8; REGISTER_COUNT];
        let dummy = DummyMax14819::with_registers(DummyConfig::default(), &initial);
        assert_eq!(dummy.registers()[reg::REV_ID as usize], 0x02);
        assert_eq!(dummy.registers()[reg::LED_CTRL as usize], 0xFF);
    }

    #[test]
    fn test_revision_is_read_only() {
        let mut dummy = DummyMax14819::new(DummyConfig {
            revision: 0x13,
            ..Default::default()
        });
        dummy.transfer(encode_write(0, reg::REV_ID, 0xFF).unwrap()).unwrap();
        let resp = dummy.transfer(encode_read(0, reg::REV_ID).unwrap()).unwrap();
        assert_eq!(decode_response(resp), 0x03);
    }

    #[test]
    fn test_other_chip_not_selected() {
        let mut dummy = DummyMax14819::new(DummyConfig {
            chip_address: 2,
            ..Default::default()
        });
        let resp = dummy.transfer(encode_write(1, reg::LED_CTRL, 0xFF).unwrap()).unwrap();
        assert_eq!(resp, CommandFrame::default());
        assert_eq!(dummy.registers()[reg::LED_CTRL as usize], 0);

        let mut chip = Max14819::new(&mut dummy, 2).unwrap();
        chip.write(reg::LED_CTRL, 0xA0).unwrap();
        assert_eq!(chip.read(reg::LED_CTRL).unwrap(), 0xA0);
        assert_eq!(dummy.transfers(), 3);
    }

    #[test]
    fn test_status_reported() {
        let mut dummy = DummyMax14819::new_default();
        dummy.set_status(InbandStatus::RRDY_B | InbandStatus::IRQ);
        let mut chip = Max14819::new(dummy, 0).unwrap();
        chip.read(reg::INTERRUPT).unwrap();
        assert_eq!(chip.last_status(), InbandStatus::RRDY_B | InbandStatus::IRQ);
    }

    #[test]
    fn test_dump_and_prefill() {
        let mut initial = [0u8; 4];
        initial[reg::INTERRUPT as usize] = 0x81;
        let dummy = DummyMax14819::with_registers(DummyConfig::default(), &initial);
        let mut chip = Max14819::new(dummy, 0).unwrap();
        let regs = chip.dump().unwrap();
        assert_eq!(regs[reg::INTERRUPT as usize].bits.get("StatusErr"), Some(true));
        assert_eq!(regs[reg::INTERRUPT as usize].bits.get("RxDataRdyA"), Some(true));
        assert_eq!(regs[reg::REV_ID as usize].value, 0x02);
        let dummy = chip.release();
        assert_eq!(
            dummy.last_frame().unwrap().to_bytes(),
            [0x80 | reg::REV_ID, 0x00]
        );
    }
}
