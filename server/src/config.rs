//! Server configuration module.
//!
//! This module provides configuration loading for the Matrix server from
//! environment variables.
//!
//! # Environment Variables
//!
//! - `MATRIX_JWT_SECRET`: Shared HS256 secret used to sign and verify tokens
//!   (optional; a random secret is generated at startup when unset)
//! - `MATRIX_LISTEN_ADDRESS`: IP address to bind (default: `127.0.0.1`)
//! - `MATRIX_LISTEN_PORT`: Port to listen on (default: `3001`)
//! - `MATRIX_STATIC_DIRECTORY`: Directory served under `/static` (default: `./static`)
//!
//! # Invariants
//!
//! - `jwt_secret`, when present, is never empty
//! - `listen_port` is always a valid port number

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const JWT_SECRET_VAR: &str = "MATRIX_JWT_SECRET";
const LISTEN_ADDRESS_VAR: &str = "MATRIX_LISTEN_ADDRESS";
const LISTEN_PORT_VAR: &str = "MATRIX_LISTEN_PORT";
const STATIC_DIRECTORY_VAR: &str = "MATRIX_STATIC_DIRECTORY";

/// Server configuration.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Shared secret for token signing. `None` means "generate one".
    pub jwt_secret: Option<Vec<u8>>,
    /// Address to bind the listener to.
    pub listen_address: IpAddr,
    /// Port to listen on for HTTP connections.
    pub listen_port: u16,
    /// Directory whose files are served verbatim under `/static`.
    pub static_directory: PathBuf,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ServerConfig {
    /// Default port for the server.
    pub const DEFAULT_PORT: u16 = 3001;
    /// Default bind address.
    pub const DEFAULT_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
    /// Default static asset directory.
    pub const DEFAULT_STATIC_DIRECTORY: &'static str = "./static";

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `MATRIX_JWT_SECRET` is set but empty
    /// - `MATRIX_LISTEN_ADDRESS` is set but not an IP address
    /// - `MATRIX_LISTEN_PORT` is set but not a valid port number
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests pass a closure over a fixed table
    /// instead of mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            jwt_secret: parse_jwt_secret(lookup(JWT_SECRET_VAR))?,
            listen_address: parse_listen_address(lookup(LISTEN_ADDRESS_VAR))?,
            listen_port: parse_listen_port(lookup(LISTEN_PORT_VAR))?,
            static_directory: lookup(STATIC_DIRECTORY_VAR)
                .map_or_else(|| PathBuf::from(Self::DEFAULT_STATIC_DIRECTORY), PathBuf::from),
        })
    }

    /// The socket address the server should bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.listen_address, self.listen_port)
    }
}

fn parse_jwt_secret(value: Option<String>) -> Result<Option<Vec<u8>>, ConfigError> {
    match value {
        Some(secret) if secret.is_empty() => Err(ConfigError::InvalidValue {
            name: JWT_SECRET_VAR.to_string(),
            message: "must not be empty".to_string(),
        }),
        Some(secret) => Ok(Some(secret.into_bytes())),
        None => Ok(None),
    }
}

fn parse_listen_address(value: Option<String>) -> Result<IpAddr, ConfigError> {
    match value {
        Some(value) => value.parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
            name: LISTEN_ADDRESS_VAR.to_string(),
            message: format!("'{value}' is not a valid IP address"),
        }),
        None => Ok(ServerConfig::DEFAULT_ADDRESS),
    }
}

fn parse_listen_port(value: Option<String>) -> Result<u16, ConfigError> {
    match value {
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
            name: LISTEN_PORT_VAR.to_string(),
            message: format!("'{value}' is not a valid port number (must be 1-65535)"),
        }),
        None => Ok(ServerConfig::DEFAULT_PORT),
    }
}
