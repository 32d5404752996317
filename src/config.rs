//! Configuration resolution and constants.
//!
//! All configuration is resolved once from the process environment before the
//! listener starts and is immutable for the process lifetime. The only
//! external knob is the `PORT` environment variable; the bind address and the
//! static file root are fixed.

use std::path::PathBuf;

/// Environment variable holding the TCP port to listen on.
pub const PORT_ENV: &str = "PORT";

/// Port used when `PORT` is absent or empty.
pub const DEFAULT_PORT: u16 = 3000;

/// Bind address; the server listens on all interfaces.
pub const BIND_HOST: &str = "0.0.0.0";

/// Directory whose contents are served for unmatched GET paths.
pub const STATIC_ROOT: &str = "public";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "porch=info,tower_http=warn";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Seconds to wait for in-flight requests during graceful shutdown.
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Static file serving configuration
    pub static_files: StaticConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

/// Static file serving configuration
#[derive(Debug, Clone)]
pub struct StaticConfig {
    /// Root directory resolved against the working directory.
    pub root: PathBuf,
}

impl AppConfig {
    /// Resolve configuration from the process environment.
    ///
    /// Reads `PORT` once. An empty value counts as unset and falls back to
    /// the default; a value that is not a valid port is a fatal startup
    /// error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(PORT_ENV).ok();
        Self::resolve(raw.as_deref())
    }

    fn resolve(port: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port {
            None => DEFAULT_PORT,
            Some(raw) if raw.is_empty() => DEFAULT_PORT,
            Some(raw) => raw.parse().map_err(|source| ConfigError::InvalidPort {
                value: raw.to_string(),
                source,
            })?,
        };

        Ok(Self {
            http: HttpServerConfig {
                host: BIND_HOST.to_string(),
                port,
            },
            static_files: StaticConfig {
                root: PathBuf::from(STATIC_ROOT),
            },
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}
