//! Service configuration loaded from environment variables.
//!
//! - `CART_SERVICE_HOST` - Bind address (default: 0.0.0.0)
//! - `CART_SERVICE_PORT` - Listen port (default: 7070)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const HOST_VAR: &str = "CART_SERVICE_HOST";
pub const PORT_VAR: &str = "CART_SERVICE_PORT";
pub const DEFAULT_PORT: u16 = 7070;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. Unset or blank variables
    /// fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let host = match read(HOST_VAR) {
            Some(value) => value
                .trim()
                .parse::<IpAddr>()
                .map_err(|e| ConfigError::InvalidEnvVar(HOST_VAR.to_string(), e.to_string()))?,
            None => defaults.host,
        };
        let port = match read(PORT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvVar(PORT_VAR.to_string(), e.to_string()))?,
            None => defaults.port,
        };

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
