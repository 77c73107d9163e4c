//! max14819-linux-spi - Linux spidev transport
//!
//! This crate exchanges MAX14819 command frames through the Linux
//! `/dev/spidevX.Y` character device interface.
//!
//! # Example
//!
//! ```no_run
//! use max14819_core::{register::reg, Max14819};
//! use max14819_linux_spi::{LinuxSpi, LinuxSpiConfig};
//!
//! // 4 MHz, mode 0
//! let config = LinuxSpiConfig::new("/dev/spidev0.0").with_speed(4_000_000);
//! let spi = LinuxSpi::open(&config)?;
//!
//! let mut chip = Max14819::new(spi, 0)?;
//! let rev = chip.read_register(reg::REV_ID)?;
//! println!("{}: 0x{:02X}", rev.def.name, rev.value);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Usage with the max14819 CLI
//!
//! ```bash
//! # Dump all registers using default settings
//! max14819 -p linux_spi:dev=/dev/spidev0.0 dump
//!
//! # Specify SPI speed in kHz
//! max14819 -p linux_spi:dev=/dev/spidev0.0,spispeed=1000 read LEDCntrl
//! ```
//!
//! # System Requirements
//!
//! - Linux kernel with spidev support enabled (`CONFIG_SPI_SPIDEV`)
//! - Read/write access to `/dev/spidevX.Y` device

pub mod device;
pub mod error;

// Re-exports
pub use device::{mode, parse_options, LinuxSpi, LinuxSpiConfig};
pub use error::{LinuxSpiError, Result};

/// Open a Linux SPI device and return a boxed Transport
///
/// This is a convenience function for use in the CLI programmer dispatch.
///
/// # Example Options
///
/// - `dev=/dev/spidev0.0` - Required: device path
/// - `spispeed=4000` - Optional: speed in kHz (default: 4000)
/// - `mode=0` - Optional: SPI mode 0-3 (default: 0)
pub fn open_linux_spi(
    options: &[(&str, &str)],
) -> std::result::Result<Box<dyn max14819_core::Transport>, Box<dyn std::error::Error>> {
    let config = parse_options(options)?;
    let spi = LinuxSpi::open(&config)?;
    Ok(Box::new(spi))
}
