//! max14819-core - Register model and SPI codec for the MAX14819
//!
//! The MAX14819 is a dual-channel IO-Link master transceiver controlled
//! through 32 byte-wide registers. Every register access is a single
//! 2-byte SPI exchange: a command byte (read flag, 3-bit chip address,
//! 5-bit register address) followed by a data byte.
//!
//! This crate provides:
//!
//! - the static register table with the name of every bit ([`register`])
//! - encoding of read/write command frames and decoding of responses
//!   ([`spi`])
//! - the [`Transport`] trait that a bus driver implements
//! - [`Max14819`], which ties the three together for register access
//!
//! It is `no_std` compatible and does not allocate.
//!
//! # Features
//!
//! - `std` - Enable standard library support (includes `alloc`)
//! - `alloc` - Enable `Box<dyn Transport>` support
//!
//! # Example
//!
//! ```ignore
//! use max14819_core::{register::reg, Max14819, Transport};
//!
//! fn show_leds<T: Transport>(bus: T) -> max14819_core::Result<()> {
//!     let mut chip = Max14819::new(bus, 0)?;
//!     let snapshot = chip.read_register(reg::LED_CTRL)?;
//!     println!("{}: 0x{:02X}. {}", snapshot.def.name, snapshot.value, snapshot.bits);
//!     Ok(())
//! }
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod device;
pub mod error;
pub mod register;
pub mod spi;
pub mod transport;

pub use device::{ChipAddress, Max14819, RegisterSnapshot};
pub use error::{Error, Result};
pub use register::{RegisterDef, RegisterTable, RegisterValue};
pub use spi::{BitVector, CommandFrame, InbandStatus};
pub use transport::Transport;
