use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig {
                port: resolve_port(std::env::var("PORT").ok())?,
            },
        })
    }
}

// A malformed PORT fails startup rather than falling back to the default.
fn resolve_port(value: Option<String>) -> Result<u16, ConfigError> {
    match value {
        Some(raw) => raw
            .parse()
            .map_err(|source| ConfigError::InvalidPort { value: raw, source }),
        None => Ok(DEFAULT_PORT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_when_unset() {
        assert_eq!(resolve_port(None).unwrap(), 3000);
    }

    #[test]
    fn test_port_from_environment_value() {
        assert_eq!(resolve_port(Some("8080".to_string())).unwrap(), 8080);
    }

    #[test]
    fn test_non_numeric_port_is_rejected() {
        let err = resolve_port(Some("not-a-port".to_string()));
        assert!(err.is_err());
    }

    #[test]
    fn test_out_of_range_port_is_rejected() {
        let err = resolve_port(Some("70000".to_string()));
        assert!(err.is_err());
    }
}
