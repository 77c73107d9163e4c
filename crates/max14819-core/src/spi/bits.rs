//! Named bit decoding

use core::fmt;

use crate::register::{is_reserved_name, RegisterDef, RegisterValue, BITS_PER_REGISTER};

/// One named signal decoded from a register byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bit {
    /// Signal name from the register table
    pub name: &'static str,
    /// Bit number within the byte (7 = MSB, 0 = LSB)
    pub bit: u8,
    /// Whether the bit is set
    pub set: bool,
}

/// Named bits of one register value, MSB first
///
/// Reserved bits (`"-"`) are not included.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitVector {
    bits: heapless::Vec<Bit, BITS_PER_REGISTER>,
}

impl BitVector {
    /// Value of the named bit (case-insensitive), or `None` if the register
    /// has no such bit
    pub fn get(&self, name: &str) -> Option<bool> {
        self.bits
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name))
            .map(|b| b.set)
    }

    /// Iterate over the named bits, MSB first
    pub fn iter(&self) -> core::slice::Iter<'_, Bit> {
        self.bits.iter()
    }

    /// Number of named bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if the register has no named bits
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Names of the bits that are set, MSB first
    pub fn set_bits(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.bits.iter().filter(|b| b.set).map(|b| b.name)
    }
}

impl<'a> IntoIterator for &'a BitVector {
    type Item = &'a Bit;
    type IntoIter = core::slice::Iter<'a, Bit>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter()
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.bits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", b.name, b.set as u8)?;
        }
        Ok(())
    }
}

/// Split a register value into its named bits
///
/// Position `p` of `def.bits` maps to bit `7 - p` of `value`.
pub fn decode_bits(value: RegisterValue, def: &RegisterDef) -> BitVector {
    let bits = def
        .bits
        .iter()
        .enumerate()
        .filter(|(_, name)| !is_reserved_name(name))
        .map(|(pos, name)| {
            let bit = (BITS_PER_REGISTER - 1 - pos) as u8;
            Bit {
                name: *name,
                bit,
                set: (value >> bit) & 1 == 1,
            }
        })
        .collect();
    BitVector { bits }
}
