//! Register model type definitions

use crate::error::{Error, Result};
use crate::spi::REGISTER_ADDRESS_MAX;

/// Raw content of one 8-bit register
pub type RegisterValue = u8;

/// Number of bits in every register
pub const BITS_PER_REGISTER: usize = 8;

/// Name used for reserved/unused bits
pub const RESERVED_BIT: &str = "-";

/// Definition of a single register
///
/// `bits` is ordered most-significant bit first: `bits[0]` names bit 7 of
/// the register byte, `bits[7]` names bit 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterDef {
    /// 5-bit register address
    pub address: u8,
    /// Register name as used in the datasheet
    pub name: &'static str,
    /// Bit names, MSB first; `"-"` marks a reserved bit
    pub bits: [&'static str; BITS_PER_REGISTER],
}

impl RegisterDef {
    /// Create a new register definition
    pub const fn new(address: u8, name: &'static str, bits: [&'static str; 8]) -> Self {
        Self {
            address,
            name,
            bits,
        }
    }

    /// Name of the bit at `position` (0 = MSB, 7 = LSB)
    ///
    /// Reserved bits are returned as `"-"`; callers should treat that as
    /// "not a real signal" rather than an error.
    pub fn bit_name(&self, position: u8) -> Result<&'static str> {
        self.bits
            .get(position as usize)
            .copied()
            .ok_or(Error::InvalidBitPosition(position))
    }

    /// Check whether the bit at `position` is reserved
    pub fn is_reserved(&self, position: u8) -> Result<bool> {
        self.bit_name(position).map(is_reserved_name)
    }

    /// Single-bit mask of the named bit within the register byte
    ///
    /// Returns `None` for unknown names and for the reserved marker.
    pub fn mask_of(&self, bit: &str) -> Option<u8> {
        if is_reserved_name(bit) {
            return None;
        }
        self.bits
            .iter()
            .position(|name| name.eq_ignore_ascii_case(bit))
            .map(|pos| 0x80u8 >> pos)
    }

    /// Mask of all non-reserved bits
    pub fn writable_mask(&self) -> u8 {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, name)| !is_reserved_name(name))
            .fold(0, |mask, (pos, _)| mask | (0x80u8 >> pos))
    }
}

/// Check whether a bit name is the reserved marker
pub fn is_reserved_name(name: &str) -> bool {
    name == RESERVED_BIT
}

/// Validated, read-only view over a slice of register definitions
///
/// A valid table has at most 32 entries whose addresses equal their index,
/// so addresses are unique and contiguous starting at 0x00.
#[derive(Debug, Clone, Copy)]
pub struct RegisterTable {
    defs: &'static [RegisterDef],
}

impl RegisterTable {
    /// Validate `defs` and wrap it as a table
    pub fn new(defs: &'static [RegisterDef]) -> Result<Self> {
        match find_invalid_entry(defs) {
            Some(index) => Err(Error::InvalidRegisterTable { index }),
            None => Ok(Self { defs }),
        }
    }

    /// Wrap a table that has already been validated at compile time
    pub(crate) const fn new_unchecked(defs: &'static [RegisterDef]) -> Self {
        Self { defs }
    }

    /// Look up a register by address
    pub fn lookup(&self, address: u8) -> Result<&'static RegisterDef> {
        if address > REGISTER_ADDRESS_MAX {
            return Err(Error::UnknownRegister(address));
        }
        self.defs
            .get(address as usize)
            .ok_or(Error::UnknownRegister(address))
    }

    /// Find a register by name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Option<&'static RegisterDef> {
        self.defs.iter().find(|def| def.name.eq_ignore_ascii_case(name))
    }

    /// All definitions in address order
    pub fn iter(&self) -> core::slice::Iter<'static, RegisterDef> {
        self.defs.iter()
    }

    /// Number of registers in the table
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl IntoIterator for RegisterTable {
    type Item = &'static RegisterDef;
    type IntoIter = core::slice::Iter<'static, RegisterDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.defs.iter()
    }
}

/// Index of the first entry breaking the table invariants, if any
pub(crate) const fn find_invalid_entry(defs: &[RegisterDef]) -> Option<usize> {
    if defs.len() > REGISTER_ADDRESS_MAX as usize + 1 {
        return Some(REGISTER_ADDRESS_MAX as usize + 1);
    }
    let mut i = 0;
    while i < defs.len() {
        if defs[i].address as usize != i {
            return Some(i);
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    static SHORT: [RegisterDef; 2] = [
        RegisterDef::new(0x00, "First", ["A", "B", "C", "D", "-", "-", "G", "H"]),
        RegisterDef::new(0x01, "Second", ["-", "-", "-", "-", "-", "-", "-", "Z"]),
    ];

    static DUPLICATE: [RegisterDef; 2] = [
        RegisterDef::new(0x00, "First", ["-"; 8]),
        RegisterDef::new(0x00, "Again", ["-"; 8]),
    ];

    static GAP: [RegisterDef; 2] = [
        RegisterDef::new(0x00, "First", ["-"; 8]),
        RegisterDef::new(0x02, "Third", ["-"; 8]),
    ];

    #[test]
    fn test_table_validation() {
        assert!(RegisterTable::new(&SHORT).is_ok());
        assert_eq!(
            RegisterTable::new(&DUPLICATE).unwrap_err(),
            Error::InvalidRegisterTable { index: 1 }
        );
        assert_eq!(
            RegisterTable::new(&GAP).unwrap_err(),
            Error::InvalidRegisterTable { index: 1 }
        );
    }

    #[test]
    fn test_lookup_outside_short_table() {
        let table = RegisterTable::new(&SHORT).unwrap();
        assert_eq!(table.lookup(1).unwrap().name, "Second");
        assert_eq!(table.lookup(2).unwrap_err(), Error::UnknownRegister(2));
        assert_eq!(table.lookup(0x20).unwrap_err(), Error::UnknownRegister(0x20));
    }

    #[test]
    fn test_bit_name() {
        let def = &SHORT[0];
        assert_eq!(def.bit_name(0).unwrap(), "A");
        assert_eq!(def.bit_name(7).unwrap(), "H");
        assert_eq!(def.bit_name(4).unwrap(), RESERVED_BIT);
        assert!(def.is_reserved(5).unwrap());
        assert_eq!(def.bit_name(8).unwrap_err(), Error::InvalidBitPosition(8));
    }

    #[test]
    fn test_masks() {
        let def = &SHORT[0];
        assert_eq!(def.mask_of("A"), Some(0x80));
        assert_eq!(def.mask_of("h"), Some(0x01));
        assert_eq!(def.mask_of("-"), None);
        assert_eq!(def.mask_of("Q"), None);
        assert_eq!(def.writable_mask(), 0b1111_0011);
        assert_eq!(SHORT[1].writable_mask(), 0x01);
    }
}
