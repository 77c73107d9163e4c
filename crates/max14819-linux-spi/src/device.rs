//! Linux SPI device implementation
//!
//! This module provides the `LinuxSpi` struct that implements the
//! `Transport` trait using Linux's spidev interface.

use crate::error::{LinuxSpiError, Result};

use max14819_core::error::{Error as CoreError, Result as CoreResult};
use max14819_core::spi::{CommandFrame, FRAME_LEN};
use max14819_core::Transport;

use std::fs::{File, OpenOptions};
use std::os::unix::io::AsRawFd;

/// Default SPI clock speed in Hz (4 MHz)
const DEFAULT_SPEED_HZ: u32 = 4_000_000;

/// Fastest SPI clock the MAX14819 accepts (24 MHz)
const MAX_SPEED_HZ: u32 = 24_000_000;

/// SPI mode constants
pub mod mode {
    /// SPI mode 0: CPOL=0, CPHA=0
    pub const MODE_0: u8 = 0;
    /// SPI mode 1: CPOL=0, CPHA=1
    pub const MODE_1: u8 = 1;
    /// SPI mode 2: CPOL=1, CPHA=0
    pub const MODE_2: u8 = 2;
    /// SPI mode 3: CPOL=1, CPHA=1
    pub const MODE_3: u8 = 3;
}

/// Linux spidev ioctl constants
mod ioctl {
    use nix::ioctl_write_ptr;

    // SPI ioctl magic number
    const SPI_IOC_MAGIC: u8 = b'k';

    // SPI ioctl type numbers
    const SPI_IOC_TYPE_MODE: u8 = 1;
    const SPI_IOC_TYPE_BITS_PER_WORD: u8 = 3;
    const SPI_IOC_TYPE_MAX_SPEED_HZ: u8 = 4;

    ioctl_write_ptr!(spi_ioc_wr_mode, SPI_IOC_MAGIC, SPI_IOC_TYPE_MODE, u8);
    ioctl_write_ptr!(
        spi_ioc_wr_bits_per_word,
        SPI_IOC_MAGIC,
        SPI_IOC_TYPE_BITS_PER_WORD,
        u8
    );
    ioctl_write_ptr!(
        spi_ioc_wr_max_speed_hz,
        SPI_IOC_MAGIC,
        SPI_IOC_TYPE_MAX_SPEED_HZ,
        u32
    );

    /// Size of spi_ioc_transfer struct
    pub const SPI_IOC_TRANSFER_SIZE: usize = 32;

    /// Calculate ioctl number for SPI_IOC_MESSAGE(n)
    pub fn spi_ioc_message(n: u8) -> libc::c_ulong {
        let size = (n as usize) * SPI_IOC_TRANSFER_SIZE;
        // _IOW(SPI_IOC_MAGIC, 0, char[size])
        ((1u32 << 30) | ((size as u32) << 16) | ((SPI_IOC_MAGIC as u32) << 8)) as libc::c_ulong
    }
}

/// SPI transfer structure for ioctl
/// This must match the kernel's struct spi_ioc_transfer layout
#[repr(C)]
#[derive(Debug, Default, Clone)]
struct SpiIocTransfer {
    tx_buf: u64,          // __u64 tx_buf
    rx_buf: u64,          // __u64 rx_buf
    len: u32,             // __u32 len
    speed_hz: u32,        // __u32 speed_hz
    delay_usecs: u16,     // __u16 delay_usecs
    bits_per_word: u8,    // __u8 bits_per_word
    cs_change: u8,        // __u8 cs_change
    tx_nbits: u8,         // __u8 tx_nbits
    rx_nbits: u8,         // __u8 rx_nbits
    word_delay_usecs: u8, // __u8 word_delay_usecs
    _pad: u8,             // padding
}

/// Configuration for opening a Linux SPI device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinuxSpiConfig {
    /// Device path (e.g., "/dev/spidev0.0")
    pub device: String,
    /// SPI clock speed in Hz (default: 4 MHz)
    pub speed_hz: u32,
    /// SPI mode (0-3, default: 0)
    pub mode: u8,
    /// Delay after each frame before chip select is released, in µs
    pub delay_us: u16,
}

impl Default for LinuxSpiConfig {
    fn default() -> Self {
        Self {
            device: String::new(),
            speed_hz: DEFAULT_SPEED_HZ,
            mode: mode::MODE_0,
            delay_us: 0,
        }
    }
}

impl LinuxSpiConfig {
    /// Create a new configuration with the given device path
    pub fn new(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            ..Default::default()
        }
    }

    /// Set the SPI clock speed in Hz
    pub fn with_speed(mut self, speed_hz: u32) -> Self {
        self.speed_hz = speed_hz;
        self
    }

    /// Set the SPI mode (0-3)
    pub fn with_mode(mut self, mode: u8) -> Self {
        self.mode = mode;
        self
    }

    /// Set the delay after each frame
    pub fn with_delay_us(mut self, delay_us: u16) -> Self {
        self.delay_us = delay_us;
        self
    }
}

/// MAX14819 transport over spidev
///
/// Each frame is one `SPI_IOC_MESSAGE(1)` full-duplex transfer of two
/// bytes with chip select held for the whole frame.
pub struct LinuxSpi {
    /// File handle for spidev device
    file: File,
    /// Current speed in Hz
    speed_hz: u32,
    /// Post-transfer delay in µs
    delay_us: u16,
}

impl LinuxSpi {
    /// Open a Linux SPI device with the given configuration
    pub fn open(config: &LinuxSpiConfig) -> Result<Self> {
        if config.device.is_empty() {
            return Err(LinuxSpiError::NoDevice);
        }

        log::debug!("linux_spi: Opening device {}", config.device);

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&config.device)
            .map_err(|e| LinuxSpiError::OpenFailed {
                path: config.device.clone(),
                source: e,
            })?;

        let fd = file.as_raw_fd();

        let mode = config.mode;
        unsafe {
            ioctl::spi_ioc_wr_mode(fd, &mode).map_err(|e| LinuxSpiError::SetModeFailed {
                mode,
                source: std::io::Error::from_raw_os_error(e as i32),
            })?;
        }

        // Frames are byte oriented
        let bits: u8 = 8;
        unsafe {
            ioctl::spi_ioc_wr_bits_per_word(fd, &bits).map_err(|e| {
                LinuxSpiError::SetBitsPerWordFailed {
                    bits,
                    source: std::io::Error::from_raw_os_error(e as i32),
                }
            })?;
        }

        let speed = config.speed_hz;
        unsafe {
            ioctl::spi_ioc_wr_max_speed_hz(fd, &speed).map_err(|e| {
                LinuxSpiError::SetSpeedFailed {
                    speed,
                    source: std::io::Error::from_raw_os_error(e as i32),
                }
            })?;
        }

        log::info!(
            "linux_spi: Opened {} (mode={}, speed={} kHz)",
            config.device,
            mode,
            speed / 1000
        );

        Ok(Self {
            file,
            speed_hz: speed,
            delay_us: config.delay_us,
        })
    }

    /// Open a device with default settings
    pub fn open_device(device: &str) -> Result<Self> {
        Self::open(&LinuxSpiConfig::new(device))
    }

    /// Clock `tx` out while clocking the same number of bytes into `rx`
    fn spi_transfer(&mut self, tx: &[u8; FRAME_LEN], rx: &mut [u8; FRAME_LEN]) -> Result<()> {
        let fd = self.file.as_raw_fd();

        let transfer = SpiIocTransfer {
            tx_buf: tx.as_ptr() as u64,
            rx_buf: rx.as_mut_ptr() as u64,
            len: FRAME_LEN as u32,
            speed_hz: self.speed_hz,
            delay_usecs: self.delay_us,
            bits_per_word: 8,
            ..Default::default()
        };

        let ret = unsafe {
            libc::ioctl(
                fd,
                ioctl::spi_ioc_message(1),
                &transfer as *const SpiIocTransfer,
            )
        };

        if ret < 0 {
            return Err(LinuxSpiError::TransferFailed(
                std::io::Error::last_os_error(),
            ));
        }

        Ok(())
    }

    /// Get current speed setting
    pub fn speed_hz(&self) -> u32 {
        self.speed_hz
    }

    /// Set a new SPI clock speed
    pub fn set_speed(&mut self, speed_hz: u32) -> Result<()> {
        let fd = self.file.as_raw_fd();
        unsafe {
            ioctl::spi_ioc_wr_max_speed_hz(fd, &speed_hz).map_err(|e| {
                LinuxSpiError::SetSpeedFailed {
                    speed: speed_hz,
                    source: std::io::Error::from_raw_os_error(e as i32),
                }
            })?;
        }
        self.speed_hz = speed_hz;
        log::debug!("linux_spi: Set speed to {} Hz", speed_hz);
        Ok(())
    }
}

impl Transport for LinuxSpi {
    fn transfer(&mut self, frame: CommandFrame) -> CoreResult<CommandFrame> {
        let tx = frame.to_bytes();
        let mut rx = [0u8; FRAME_LEN];

        self.spi_transfer(&tx, &mut rx).map_err(|e| {
            log::error!("linux_spi: {}", e);
            CoreError::TransportFailure
        })?;

        Ok(CommandFrame::from_bytes(rx))
    }
}

/// Parse programmer options from a list of key-value pairs
pub fn parse_options(options: &[(&str, &str)]) -> Result<LinuxSpiConfig> {
    let mut config = LinuxSpiConfig::default();

    for (key, value) in options {
        match *key {
            "dev" => {
                config.device = value.to_string();
            }
            "spispeed" => {
                // Parse speed in kHz
                let speed_khz: u32 = value.parse().map_err(|_| {
                    LinuxSpiError::InvalidOption(format!("Invalid spispeed value: {}", value))
                })?;
                let speed_hz = speed_khz.saturating_mul(1000);
                if speed_hz == 0 || speed_hz > MAX_SPEED_HZ {
                    return Err(LinuxSpiError::InvalidOption(format!(
                        "spispeed {} kHz out of range (1-{})",
                        speed_khz,
                        MAX_SPEED_HZ / 1000
                    )));
                }
                config.speed_hz = speed_hz;
            }
            "mode" => {
                let mode: u8 = value.parse().map_err(|_| {
                    LinuxSpiError::InvalidOption(format!("Invalid mode value: {}", value))
                })?;
                if mode > mode::MODE_3 {
                    return Err(LinuxSpiError::InvalidOption(format!(
                        "Invalid SPI mode: {} (must be 0-3)",
                        mode
                    )));
                }
                config.mode = mode;
            }
            "delay" => {
                config.delay_us = value.parse().map_err(|_| {
                    LinuxSpiError::InvalidOption(format!("Invalid delay value: {}", value))
                })?;
            }
            _ => {
                log::warn!("linux_spi: Unknown option: {}={}", key, value);
            }
        }
    }

    if config.device.is_empty() {
        return Err(LinuxSpiError::NoDevice);
    }

    Ok(config)
}
