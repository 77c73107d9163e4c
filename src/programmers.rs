//! Programmer registration and dispatch
//!
//! This module provides a centralized registry for all transports, with
//! support for feature-gated inclusion and dynamic help text generation.

use max14819_core::Transport;
use std::collections::HashMap;
use thiserror::Error;

/// Information about a programmer
pub struct ProgrammerInfo {
    /// Primary name (used for matching)
    pub name: &'static str,
    /// Alternative names/aliases
    pub aliases: &'static [&'static str],
    /// Short description
    pub description: &'static str,
}

/// Errors from parsing or opening a programmer
#[derive(Debug, Error)]
pub enum ProgrammerError {
    /// Option without `=`
    #[error("Invalid parameter format: '{0}' (expected key=value)")]
    InvalidParameter(String),

    /// Option value could not be parsed
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    /// Name does not match any compiled-in programmer
    #[error("Unknown programmer: {0}")]
    Unknown(String),
}

/// Get information about all available programmers (enabled at compile time)
#[allow(unused_mut, clippy::vec_init_then_push)]
pub fn available_programmers() -> Vec<ProgrammerInfo> {
    let mut programmers = Vec::new();

    #[cfg(feature = "dummy")]
    programmers.push(ProgrammerInfo {
        name: "dummy",
        aliases: &[],
        description: "In-memory MAX14819 emulator for testing (rev=<0-15>)",
    });

    #[cfg(feature = "linux-spi")]
    programmers.push(ProgrammerInfo {
        name: "linux_spi",
        aliases: &["linux-spi", "spidev"],
        description: "Linux spidev interface (dev=/dev/spidevX.Y,spispeed=<kHz>,mode=<0-3>,delay=<us>)",
    });

    programmers
}

/// Generate a short list of programmer names for CLI help
pub fn programmer_names_short() -> String {
    let programmers = available_programmers();
    let names: Vec<&str> = programmers.iter().map(|p| p.name).collect();
    names.join(", ")
}

/// Parsed programmer parameters
pub struct ProgrammerParams {
    /// Programmer name
    pub name: String,
    /// Key-value parameters
    pub params: HashMap<String, String>,
}

/// Parse a programmer string into name and parameters
///
/// Format: "name" or "name:key1=value1,key2=value2"
pub fn parse_programmer_params(s: &str) -> Result<ProgrammerParams, ProgrammerError> {
    let (name, opts_str) = s.split_once(':').unwrap_or((s, ""));

    let mut params = HashMap::new();
    if !opts_str.is_empty() {
        for opt in opts_str.split(',') {
            if let Some((key, value)) = opt.split_once('=') {
                params.insert(key.to_string(), value.to_string());
            } else {
                return Err(ProgrammerError::InvalidParameter(opt.to_string()));
            }
        }
    }

    Ok(ProgrammerParams {
        name: name.to_string(),
        params,
    })
}

/// Open a transport by programmer string
///
/// `chip_address` is only used by emulating programmers, which answer at
/// the address the caller is going to use.
#[allow(unused_variables)]
pub fn open_transport(
    programmer: &str,
    chip_address: u8,
) -> Result<Box<dyn Transport>, Box<dyn std::error::Error>> {
    let params = parse_programmer_params(programmer)?;

    match params.name.as_str() {
        #[cfg(feature = "dummy")]
        "dummy" => open_dummy(&params, chip_address),

        #[cfg(feature = "linux-spi")]
        "linux_spi" | "linux-spi" | "spidev" => open_linux_spi(&params),

        _ => Err(ProgrammerError::Unknown(params.name.clone()).into()),
    }
}

#[cfg(feature = "dummy")]
fn open_dummy(
    params: &ProgrammerParams,
    chip_address: u8,
) -> Result<Box<dyn Transport>, Box<dyn std::error::Error>> {
    use max14819_dummy::{DummyConfig, DummyMax14819};

    let mut config = DummyConfig {
        chip_address,
        ..Default::default()
    };
    if let Some(rev) = params.params.get("rev") {
        config.revision = crate::cli::parse_hex_u8(rev)
            .ok()
            .filter(|r| *r <= 0x0F)
            .ok_or_else(|| ProgrammerError::InvalidValue {
                key: "rev".into(),
                value: rev.clone(),
            })?;
    }

    log::info!("Using dummy MAX14819 at chip address {}", chip_address);
    Ok(Box::new(DummyMax14819::new(config)))
}

#[cfg(feature = "linux-spi")]
fn open_linux_spi(
    params: &ProgrammerParams,
) -> Result<Box<dyn Transport>, Box<dyn std::error::Error>> {
    let options: Vec<(&str, &str)> = params
        .params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    max14819_linux_spi::open_linux_spi(&options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_programmer_params() {
        let p = parse_programmer_params("linux_spi:dev=/dev/spidev0.0,spispeed=4000").unwrap();
        assert_eq!(p.name, "linux_spi");
        assert_eq!(p.params.get("dev").map(String::as_str), Some("/dev/spidev0.0"));
        assert_eq!(p.params.get("spispeed").map(String::as_str), Some("4000"));

        let p = parse_programmer_params("dummy").unwrap();
        assert_eq!(p.name, "dummy");
        assert!(p.params.is_empty());

        assert!(matches!(
            parse_programmer_params("dummy:rev"),
            Err(ProgrammerError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_unknown_programmer() {
        let err = open_transport("ch341a", 0).err().unwrap();
        assert_eq!(err.to_string(), "Unknown programmer: ch341a");
    }

    #[cfg(feature = "dummy")]
    #[test]
    fn test_open_dummy() {
        use max14819_core::{register::reg, Max14819};

        let transport = open_transport("dummy:rev=0x5", 3).unwrap();
        let mut chip = Max14819::new(transport, 3).unwrap();
        assert_eq!(chip.read(reg::REV_ID).unwrap(), 0x05);

        assert!(open_transport("dummy:rev=0x10", 0).is_err());
    }
}
