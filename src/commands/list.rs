//! List commands implementation

use crate::programmers;
use max14819_core::register::MAX14819_REGISTERS;

/// List all compiled-in programmers
pub fn list_programmers() {
    println!("Supported programmers:");
    println!();
    for p in programmers::available_programmers() {
        println!("  {:10} - {}", p.name, p.description);
        if !p.aliases.is_empty() {
            println!("  {:10}   aliases: {}", "", p.aliases.join(", "));
        }
    }
}

/// List all registers with their bit names, MSB first
pub fn list_registers() {
    println!("{:<5} {:<11} Bits (7..0)", "Addr", "Name");
    println!("{}", "-".repeat(100));

    for def in MAX14819_REGISTERS.iter() {
        println!(
            "0x{:02X}  {:<11} {}",
            def.address,
            def.name,
            def.bits.join(" ")
        );
    }
}
