//! MAX14819 register model
//!
//! This module provides the declarative description of the 32 chip
//! registers: their addresses, names and the name of every bit. It is the
//! single source of truth used by the codec to turn raw bytes into named
//! signals.

pub mod reg;
mod table;
mod types;

pub use table::{bit_name, lookup, MAX14819_REGISTERS, REGISTERS, REGISTER_COUNT};
pub use types::*;
