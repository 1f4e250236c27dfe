//! Runtime configuration read from the environment.
//!
//! | Variable      | Default                 |
//! |---------------|-------------------------|
//! | `HOST`        | `0.0.0.0`               |
//! | `PORT`        | `8001`                  |
//! | `CORS_ORIGIN` | `http://localhost:3000` |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8001;
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid HOST {0:?}")]
    InvalidHost(String),

    #[error("invalid PORT {0:?}")]
    InvalidPort(String),

    #[error("invalid CORS_ORIGIN {0:?}")]
    InvalidOrigin(String),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// The only origin allowed to make cross-origin requests.
    pub allowed_origin: HeaderValue,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            allowed_origin: HeaderValue::from_static(DEFAULT_ORIGIN),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source; unset keys keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host.parse().map_err(|_| ConfigError::InvalidHost(host))?;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
        }
        if let Some(origin) = lookup("CORS_ORIGIN") {
            config.allowed_origin =
                HeaderValue::from_str(&origin).map_err(|_| ConfigError::InvalidOrigin(origin))?;
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
