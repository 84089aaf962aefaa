//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `infinity.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// The simulated conversation page.
    pub page: PageConfig,
    /// Where settings are persisted.
    pub settings: SettingsConfig,
    pub timing: TimingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Simulated page behaviour.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// How long a reply keeps generating.
    pub reply_duration_ms: u64,
    pub dark_theme: bool,
    pub mobile_viewport: bool,
    /// UI language reported at session start.
    pub language: String,
}

/// Settings store configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    /// TOML file holding the persisted settings.
    pub path: PathBuf,
    /// Keep settings in memory only; `path` is ignored.
    pub in_memory: bool,
}

/// Loop timing.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Pause between opening a conversation and the first prompt.
    pub settle_delay_ms: u64,
}

impl Config {
    /// Load configuration from `infinity.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// result fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("infinity.toml")?;
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides from `lookup`, which resolves variable names.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("INFINITY_HOST") {
            self.server.host = val;
        }
        if let Some(port) = lookup("INFINITY_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = lookup("INFINITY_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("INFINITY_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("INFINITY_SETTINGS_PATH") {
            self.settings.path = PathBuf::from(val);
            self.settings.in_memory = false;
        }
        if let Some(val) = lookup("INFINITY_LANGUAGE") {
            self.page.language = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.page.language.trim().is_empty() {
            return Err(ConfigError::Validation(
                "page language must not be empty".to_string(),
            ));
        }
        if !self.settings.in_memory && self.settings.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "settings path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn reply_duration(&self) -> Duration {
        Duration::from_millis(self.page.reply_duration_ms)
    }

    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.timing.settle_delay_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "infinityd=info,infinity=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            reply_duration_ms: 3_000,
            dark_theme: false,
            mobile_viewport: false,
            language: "en".to_string(),
        }
    }
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("infinity-settings.toml"),
            in_memory: false,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 500,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
