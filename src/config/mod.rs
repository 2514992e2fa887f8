//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `STARGRADE_*` environment
//! variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `STARGRADE_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Directory holding the sentence-encoder export
    /// (`config.json`, `model.safetensors`, `tokenizer.json`).
    /// When unset the encoder runs in stub mode.
    pub encoder_path: Option<PathBuf>,

    /// Path to the linear classifier artifact (safetensors file).
    /// When unset the classifier runs in stub mode.
    pub classifier_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            encoder_path: None,
            classifier_path: None,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "STARGRADE_PORT";
    const ENV_BIND_ADDR: &'static str = "STARGRADE_BIND_ADDR";
    const ENV_ENCODER_PATH: &'static str = "STARGRADE_ENCODER_PATH";
    const ENV_CLASSIFIER_PATH: &'static str = "STARGRADE_CLASSIFIER_PATH";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let encoder_path = Self::parse_optional_path_from_env(Self::ENV_ENCODER_PATH);
        let classifier_path = Self::parse_optional_path_from_env(Self::ENV_CLASSIFIER_PATH);

        Ok(Self {
            port,
            bind_addr,
            encoder_path,
            classifier_path,
        })
    }

    /// Validates configured paths (does not create anything).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.encoder_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if let Some(ref path) = self.classifier_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
