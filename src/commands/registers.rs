//! Register read/write command implementations

use max14819_core::register::{RegisterDef, RegisterTable, MAX14819_REGISTERS};
use max14819_core::{Max14819, RegisterSnapshot, Transport};
use std::error::Error;

use crate::cli::parse_hex_u8;

/// Resolve a register given by name (case-insensitive) or address
pub fn resolve_register(
    table: &RegisterTable,
    spec: &str,
) -> Result<&'static RegisterDef, Box<dyn Error>> {
    if let Some(def) = table.find_by_name(spec) {
        return Ok(def);
    }
    match parse_hex_u8(spec) {
        Ok(addr) => Ok(table.lookup(addr)?),
        Err(_) => Err(format!("Unknown register: {}", spec).into()),
    }
}

/// Parse a bit selection: a numeric mask or comma-separated bit names
pub fn parse_bits(def: &RegisterDef, spec: &str) -> Result<u8, Box<dyn Error>> {
    if let Ok(mask) = parse_hex_u8(spec) {
        return Ok(mask);
    }

    let mut mask = 0u8;
    for name in spec.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        mask |= def
            .mask_of(name)
            .ok_or_else(|| format!("Register {} has no bit named {}", def.name, name))?;
    }
    Ok(mask)
}

/// Format one register with all its bits
pub fn format_details(snapshot: &RegisterSnapshot) -> String {
    format!(
        "{}: 0x{:02x}. {}",
        snapshot.def.name, snapshot.value, snapshot.bits
    )
}

/// Format one register value for the dump listing
pub fn format_dump_line(snapshot: &RegisterSnapshot) -> String {
    format!("{:>10}: 0x{:02X}", snapshot.def.name, snapshot.value)
}

/// Run the dump command
pub fn run_dump<T: Transport>(chip: &mut Max14819<T>) -> Result<(), Box<dyn Error>> {
    let regs = chip.dump()?;
    for snapshot in &regs {
        println!("{}", format_dump_line(snapshot));
    }
    log::debug!("In-band status: {:?}", chip.last_status());
    Ok(())
}

/// Run the read command
pub fn run_read<T: Transport>(
    chip: &mut Max14819<T>,
    register: &str,
) -> Result<(), Box<dyn Error>> {
    let def = resolve_register(&MAX14819_REGISTERS, register)?;
    let snapshot = chip.read_register(def.address)?;
    println!("{}", format_details(&snapshot));
    log::debug!("In-band status: {:?}", chip.last_status());
    Ok(())
}

/// Run the write command
pub fn run_write<T: Transport>(
    chip: &mut Max14819<T>,
    register: &str,
    value: u8,
) -> Result<(), Box<dyn Error>> {
    let def = resolve_register(&MAX14819_REGISTERS, register)?;
    chip.write(def.address, value)?;
    println!("Wrote 0x{:02X} to {} (0x{:02X})", value, def.name, def.address);
    Ok(())
}

/// Run the modify command
pub fn run_modify<T: Transport>(
    chip: &mut Max14819<T>,
    register: &str,
    set: Option<&str>,
    clear: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let def = resolve_register(&MAX14819_REGISTERS, register)?;
    let set_mask = set.map(|s| parse_bits(def, s)).transpose()?.unwrap_or(0);
    let clear_mask = clear.map(|s| parse_bits(def, s)).transpose()?.unwrap_or(0);

    if set_mask & clear_mask != 0 {
        return Err(format!(
            "Bits 0x{:02X} are both set and cleared",
            set_mask & clear_mask
        )
        .into());
    }
    if set_mask == 0 && clear_mask == 0 {
        log::warn!("Nothing to modify (use --set and/or --clear)");
    }

    let value = chip.modify(def.address, set_mask, clear_mask)?;
    println!("{}", format_details(&RegisterSnapshot::new(def, value)));
    Ok(())
}
