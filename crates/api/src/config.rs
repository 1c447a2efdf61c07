//! Process configuration read from the environment.

use std::net::{Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Listener settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: Self::DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 8080;

    /// Read `PORT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unset or blank `PORT` means the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => match raw.trim().parse::<u16>() {
                Ok(port) => port,
                Err(source) => return Err(ConfigError::InvalidPort { value: raw, source }),
            },
            _ => Self::DEFAULT_PORT,
        };

        Ok(Self { port })
    }

    /// All interfaces on the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
