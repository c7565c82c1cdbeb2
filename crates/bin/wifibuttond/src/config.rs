//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `wifibutton.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use wifibutton_adapter_http_axum::router::{DEFAULT_MAX_UPLOAD_BYTES, RouterOptions};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Dashboard asset and upload settings.
    pub dashboard: DashboardConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Virtual device settings.
    pub device: DeviceConfig,
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

/// Dashboard configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory holding the built dashboard (`trunk build` output).
    pub dir: Option<PathBuf>,
    /// Largest accepted request body, in bytes.
    pub max_upload_bytes: usize,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Virtual device configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Press the virtual button every this many seconds; `0` disables it.
    pub simulate_button_secs: u64,
}

impl Config {
    /// Load configuration from `wifibutton.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("wifibutton.toml")?;
        config.apply_env_overrides();
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

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("WIFIBUTTON_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("WIFIBUTTON_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("WIFIBUTTON_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("WIFIBUTTON_DASHBOARD_DIR") {
            self.dashboard.dir = (!val.is_empty()).then(|| PathBuf::from(val));
        }
        if let Some(limit) = var("WIFIBUTTON_MAX_UPLOAD_BYTES").and_then(|val| val.parse().ok()) {
            self.dashboard.max_upload_bytes = limit;
        }
        if let Some(val) = var("WIFIBUTTON_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.dashboard.max_upload_bytes == 0 {
            return Err(ConfigError::Validation(
                "max_upload_bytes must be non-zero".to_string(),
            ));
        }
        if let Some(dir) = self.dashboard.dir.as_ref().filter(|dir| !dir.is_dir()) {
            return Err(ConfigError::Validation(format!(
                "dashboard directory {} does not exist",
                dir.display()
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Router options derived from the dashboard section.
    #[must_use]
    pub fn router_options(&self) -> RouterOptions {
        RouterOptions {
            dashboard_dir: self.dashboard.dir.clone(),
            max_upload_bytes: self.dashboard.max_upload_bytes,
        }
    }

    /// Period of the button simulator, if enabled.
    #[must_use]
    pub fn button_period(&self) -> Option<Duration> {
        (self.device.simulate_button_secs > 0)
            .then(|| Duration::from_secs(self.device.simulate_button_secs))
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

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dir: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "wifibuttond=info,wifibutton=info,tower_http=debug".to_string(),
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
