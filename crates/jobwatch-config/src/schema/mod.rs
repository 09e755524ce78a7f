//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod schema_seed;

pub use schema_seed::*;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Accounts known to the identity directory.
    #[serde(default = "default_identities")]
    pub identities: Vec<IdentitySeed>,

    /// SSO trust table.
    #[serde(default = "default_sso_tokens")]
    pub sso_tokens: Vec<SsoTokenSeed>,

    #[serde(default)]
    pub jobs: JobsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::default(),
            identities: default_identities(),
            sso_tokens: default_sso_tokens(),
            jobs: JobsConfig::default(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed to call the API from a browser.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

/// Placeholder signing secret shipped with the default config.
pub const DEFAULT_SECRET: &str = "your-secret-key";

/// Longest accepted `session_ttl_hours` (ten years).
pub const MAX_SESSION_TTL_HOURS: u64 = 87_600;

/// Session credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC key used to sign session credentials.
    #[serde(default = "default_secret")]
    pub secret: String,

    /// Lifetime of an issued session credential.
    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            session_ttl_hours: default_session_ttl_hours(),
        }
    }
}

fn default_secret() -> String {
    DEFAULT_SECRET.to_string()
}

fn default_session_ttl_hours() -> u64 {
    24
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for rolling log files. Defaults to `~/.jobwatch/logs`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl LoggingConfig {
    /// Resolved log directory, with `~` expanded.
    pub fn log_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => PathBuf::from(shellexpand::tilde(&dir.to_string_lossy()).as_ref()),
            None => jobwatch_dir().join("logs"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            dir: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// The Jobwatch data directory (`~/.jobwatch`).
pub fn jobwatch_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".jobwatch")
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
