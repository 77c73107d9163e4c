//! CLI argument parsing

use crate::programmers;
use clap::{Parser, Subcommand};

/// Parse a string as a hex or decimal u8
pub fn parse_hex_u8(s: &str) -> Result<u8, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16).map_err(|e| format!("Invalid hex value: {}", e))
    } else {
        s.parse::<u8>().map_err(|e| format!("Invalid number: {}", e))
    }
}

/// Parse a chip address (0-3)
fn parse_chip_address(s: &str) -> Result<u8, String> {
    let addr = parse_hex_u8(s)?;
    if addr > max14819_core::spi::CHIP_ADDRESS_MAX {
        return Err(format!(
            "Chip address {} out of range (0-{})",
            addr,
            max14819_core::spi::CHIP_ADDRESS_MAX
        ));
    }
    Ok(addr)
}

/// Generate dynamic help text for the programmer argument
fn programmer_help() -> String {
    format!(
        "Programmer to use [available: {}]",
        programmers::programmer_names_short()
    )
}

#[derive(Parser)]
#[command(name = "max14819")]
#[command(author, version, about = "MAX14819 register inspector", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Bus options shared by commands that talk to the chip
#[derive(clap::Args, Debug, Clone)]
pub struct BusArgs {
    /// Programmer to use
    #[arg(short, long, help = programmer_help())]
    pub programmer: String,

    /// Chip address on the shared bus (0-3)
    #[arg(short = 'a', long, default_value = "0", value_parser = parse_chip_address)]
    pub chip_address: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the value of every register
    Dump {
        #[command(flatten)]
        bus: BusArgs,
    },

    /// Read one register and show its bits
    Read {
        #[command(flatten)]
        bus: BusArgs,

        /// Register name or address (e.g., LEDCntrl, 0x0E, 14)
        register: String,
    },

    /// Write a value to one register
    Write {
        #[command(flatten)]
        bus: BusArgs,

        /// Register name or address
        register: String,

        /// Value to write (hex or decimal)
        #[arg(value_parser = parse_hex_u8)]
        value: u8,
    },

    /// Set and/or clear bits of one register (read-modify-write)
    Modify {
        #[command(flatten)]
        bus: BusArgs,

        /// Register name or address
        register: String,

        /// Bits to set: a mask or comma-separated bit names
        #[arg(long)]
        set: Option<String>,

        /// Bits to clear: a mask or comma-separated bit names
        #[arg(long)]
        clear: Option<String>,
    },

    /// List all registers and their bit names
    List,

    /// List supported programmers
    ListProgrammers,
}
