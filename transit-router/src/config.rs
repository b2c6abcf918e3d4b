//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Environment variable naming the dataset file.
pub const DATASET_ENV: &str = "TRANSIT_DATASET";

/// Environment variable naming the listen address.
pub const ADDR_ENV: &str = "TRANSIT_ADDR";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Listen address could not be parsed
    #[error("invalid {var} address {value:?}")]
    InvalidAddr { var: &'static str, value: String },
}

/// Configuration for the route server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Path to the line/station JSON dataset.
    pub dataset_path: PathBuf,

    /// Address to listen on.
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(dataset_path: impl Into<PathBuf>, addr: SocketAddr) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            addr,
        }
    }

    /// Read configuration from `TRANSIT_DATASET` and `TRANSIT_ADDR`,
    /// using defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup(DATASET_ENV).filter(|p| !p.is_empty()) {
            config.dataset_path = PathBuf::from(path);
        }

        if let Some(value) = lookup(ADDR_ENV).filter(|a| !a.is_empty()) {
            config.addr = value.parse().map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_ENV,
                value,
            })?;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("data/lines.json"),
            addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 3000)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.dataset_path, PathBuf::from("data/lines.json"));
        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
    }

    #[test]
    fn unset_env_uses_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn env_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (DATASET_ENV, "/srv/bangkok.json"),
            (ADDR_ENV, "0.0.0.0:8080"),
        ]))
        .unwrap();

        assert_eq!(config.dataset_path, PathBuf::from("/srv/bangkok.json"));
        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn empty_values_are_ignored() {
        let config =
            ServerConfig::from_lookup(lookup(&[(DATASET_ENV, ""), (ADDR_ENV, "")])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn invalid_addr() {
        let err = ServerConfig::from_lookup(lookup(&[(ADDR_ENV, "localhost")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidAddr {
                var: ADDR_ENV,
                value: "localhost".to_string(),
            }
        );
        assert_eq!(err.to_string(), "invalid TRANSIT_ADDR address \"localhost\"");
    }

    #[test]
    fn custom_config() {
        let addr: SocketAddr = "127.0.0.1:9000".parse().unwrap();
        let config = ServerConfig::new("lines.json", addr);
        assert_eq!(config.dataset_path, PathBuf::from("lines.json"));
        assert_eq!(config.addr, addr);
    }
}
