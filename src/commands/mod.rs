//! CLI command implementations
//!
//! Register commands work on any `Transport`, so the same code drives the
//! dummy emulator and a real spidev bus.

mod list;
pub mod registers;

pub use list::{list_programmers, list_registers};
