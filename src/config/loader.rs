//! Configuration loading from disk and environment.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::TrackerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding the listener port.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid PORT value '{0}'")]
    Port(String),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<TrackerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: TrackerConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load configuration from an optional file, then apply the `PORT`
/// environment override and validate the result.
pub fn load(path: Option<&Path>) -> Result<TrackerConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => TrackerConfig::default(),
    };

    if let Ok(port) = std::env::var(PORT_ENV) {
        apply_port_override(&mut config, &port)?;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Replace the port of the listener bind address.
pub fn apply_port_override(config: &mut TrackerConfig, port: &str) -> Result<(), ConfigError> {
    let port: u16 = port
        .trim()
        .parse()
        .map_err(|_| ConfigError::Port(port.to_string()))?;

    let mut addr: SocketAddr = config
        .listener
        .bind_address
        .parse()
        .map_err(|_| ConfigError::Validation(vec![ValidationError {
            field: "listener.bind_address",
            message: format!("'{}' is not a socket address", config.listener.bind_address),
        }]))?;
    addr.set_port(port);
    config.listener.bind_address = addr.to_string();
    Ok(())
}
