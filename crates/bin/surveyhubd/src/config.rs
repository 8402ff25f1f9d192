//! Daemon settings: `surveyhub.toml` overlaid with `SURVEYHUB_*` variables.
//!
//! The file is optional and every key has a default. A variable that is set
//! but cannot be parsed is an error rather than being ignored.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use surveyhub_adapter_storage_sqlite_sqlx::Config as StorageConfig;

/// File looked up in the working directory.
pub const CONFIG_FILE: &str = "surveyhub.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// `[server]`
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

/// `[database]`
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// `[logging]`
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives.
    pub filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:surveyhub.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "surveyhubd=info,surveyhub=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read surveyhub.toml")]
    Read(#[from] std::io::Error),
    #[error("failed to parse surveyhub.toml")]
    Parse(#[from] toml::de::Error),
    #[error("environment variable {key} has unusable value {value:?}")]
    Env { key: &'static str, value: String },
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Parse variable `key` when `lookup` yields a value for it.
fn env_value<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(key)
        .map(|value| value.parse().map_err(|_| ConfigError::Env { key, value }))
        .transpose()
}

impl Config {
    /// Read [`CONFIG_FILE`], apply the process environment and validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is unreadable or malformed, a
    /// variable cannot be parsed, or the result is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::read(Path::new(CONFIG_FILE))?;
        config.apply_env(&|key: &str| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Overlay `SURVEYHUB_*` variables; `SURVEYHUB_BIND` sets host and port
    /// together and `RUST_LOG` wins over `SURVEYHUB_LOG`.
    fn apply_env(&mut self, lookup: &impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(host) = env_value(lookup, "SURVEYHUB_HOST")? {
            self.server.host = host;
        }
        if let Some(port) = env_value(lookup, "SURVEYHUB_PORT")? {
            self.server.port = port;
        }
        if let Some(bind) = env_value::<SocketAddr>(lookup, "SURVEYHUB_BIND")? {
            self.server.host = bind.ip();
            self.server.port = bind.port();
        }
        if let Some(url) = lookup("SURVEYHUB_DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(max) = env_value(lookup, "SURVEYHUB_MAX_CONNECTIONS")? {
            self.database.max_connections = max;
        }
        if let Some(filter) = lookup("RUST_LOG").or_else(|| lookup("SURVEYHUB_LOG")) {
            self.logging.filter = filter;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero"));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database.max_connections must be non-zero",
            ));
        }
        if self.database.url.is_empty() {
            return Err(ConfigError::Invalid("database.url must not be empty"));
        }
        Ok(())
    }

    /// Socket the HTTP listener binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }

    /// Settings handed to the `SQLite` adapter.
    #[must_use]
    pub fn storage(&self) -> StorageConfig {
        StorageConfig {
            database_url: self.database.url.clone(),
            max_connections: self.database.max_connections,
        }
    }
}
