use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use serde::Deserialize;

/// Top-level server configuration, read from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Mock sales data settings.
    #[serde(default)]
    pub sales: SalesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub const fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SalesConfig {
    /// RNG seed for the mock dataset; random when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

const fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}
const fn default_port() -> u16 {
    3000
}

/// Error type for loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config")]
    Parse(#[from] toml::de::Error),
}

impl AppConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` on malformed TOML or unknown keys.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    /// Returns `ConfigError::Read` if the file cannot be read, or
    /// `ConfigError::Parse` if it is not valid configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }
}
