//! max14819 - MAX14819 register inspector
//!
//! Reads and writes the control/status registers of a MAX14819 dual-channel
//! IO-Link transceiver and shows each register as its named bits.
//!
//! # Architecture
//!
//! - `max14819-core` holds the register table and the SPI command codec
//! - transports (`dummy`, `linux_spi`) exchange 2-byte frames with the chip
//! - the commands here only ever see a boxed `Transport`

mod cli;
mod commands;
mod programmers;

use clap::Parser;
use cli::{BusArgs, Cli, Commands};
use max14819_core::{Max14819, Transport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbosity
    match cli.verbose {
        0 => {} // default (info)
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    }

    match cli.command {
        Commands::Dump { bus } => {
            let mut chip = open_chip(&bus)?;
            commands::registers::run_dump(&mut chip)
        }
        Commands::Read { bus, register } => {
            let mut chip = open_chip(&bus)?;
            commands::registers::run_read(&mut chip, &register)
        }
        Commands::Write {
            bus,
            register,
            value,
        } => {
            let mut chip = open_chip(&bus)?;
            commands::registers::run_write(&mut chip, &register, value)
        }
        Commands::Modify {
            bus,
            register,
            set,
            clear,
        } => {
            let mut chip = open_chip(&bus)?;
            commands::registers::run_modify(
                &mut chip,
                &register,
                set.as_deref(),
                clear.as_deref(),
            )
        }
        Commands::List => {
            commands::list_registers();
            Ok(())
        }
        Commands::ListProgrammers => {
            commands::list_programmers();
            Ok(())
        }
    }
}

/// Open the programmer and bind it to the selected chip address
fn open_chip(
    bus: &BusArgs,
) -> Result<Max14819<Box<dyn Transport>>, Box<dyn std::error::Error>> {
    let transport = programmers::open_transport(&bus.programmer, bus.chip_address)?;
    let chip = Max14819::new(transport, bus.chip_address)?;
    log::debug!("Using chip address {}", chip.chip_address().get());
    Ok(chip)
}
