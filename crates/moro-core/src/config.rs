//! Shell configuration management.
//!
//! Handles loading, saving and validating the JSON config that tells the
//! shell which page to load and how patiently to wait for it.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{Error, FileSystemError, Result};
use crate::tracker::{DEFAULT_LOAD_TIMEOUT, DEFAULT_TRICKLE_CEILING, TrackerConfig};

/// Application directory name under the platform config/data dirs.
pub const APP_DIR_NAME: &str = "moro-games";

/// Page loaded when no config exists yet. Replace it in `config.json`.
pub const DEFAULT_START_URL: &str = "https://example.com/";

/// Default window title.
pub const DEFAULT_WINDOW_TITLE: &str = "Moro Games";

/// Connectivity watcher settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectivityConfig {
    /// `host:port` to probe. Defaults to the start URL's host and port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probe_address: Option<String>,
    /// Seconds between probes.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Connect timeout of a single probe, in milliseconds.
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
}

const fn default_poll_interval_secs() -> u64 {
    5
}

const fn default_probe_timeout_ms() -> u64 {
    3000
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            probe_address: None,
            poll_interval_secs: default_poll_interval_secs(),
            probe_timeout_ms: default_probe_timeout_ms(),
        }
    }
}

impl ConnectivityConfig {
    /// Interval between probes.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Timeout of one probe.
    #[must_use]
    pub const fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }
}

/// Shell configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellConfig {
    /// Page shown in the web view.
    pub start_url: String,
    /// Native window title.
    #[serde(default = "default_window_title")]
    pub window_title: String,
    /// Seconds before a load is reported as failed; `null` disables it.
    #[serde(default = "default_load_timeout_secs")]
    pub load_timeout_secs: Option<u64>,
    /// Trickle time constant in milliseconds.
    #[serde(default = "default_trickle_time_constant_ms")]
    pub trickle_time_constant_ms: u64,
    /// Highest progress the trickle estimate may reach.
    #[serde(default = "default_trickle_ceiling")]
    pub trickle_ceiling: f64,
    /// Connectivity watcher settings.
    #[serde(default)]
    pub connectivity: ConnectivityConfig,
}

fn default_window_title() -> String {
    DEFAULT_WINDOW_TITLE.to_string()
}

const fn default_load_timeout_secs() -> Option<u64> {
    Some(DEFAULT_LOAD_TIMEOUT.as_secs())
}

const fn default_trickle_time_constant_ms() -> u64 {
    2000
}

const fn default_trickle_ceiling() -> f64 {
    DEFAULT_TRICKLE_CEILING
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            start_url: DEFAULT_START_URL.to_string(),
            window_title: default_window_title(),
            load_timeout_secs: default_load_timeout_secs(),
            trickle_time_constant_ms: default_trickle_time_constant_ms(),
            trickle_ceiling: default_trickle_ceiling(),
            connectivity: ConnectivityConfig::default(),
        }
    }
}

impl ShellConfig {
    /// Load configuration from the default location, or create and save
    /// defaults if there is none yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read, parsed
    /// or validated.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `path`, creating it with defaults if missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Config file not found at {}, using defaults", path.display());
            let config = Self::default();
            if let Err(e) = config.save_to(path) {
                warn!("Failed to save default config: {}", e);
            }
            return Ok(config);
        }

        let content = fs::read_to_string(path).map_err(|e| FileSystemError::ReadFailed {
            path: path.to_path_buf(),
            reason: format!("Failed to read config file: {e}"),
        })?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| Error::Configuration(format!("Failed to parse config file: {e}")))?;
        config.validate()?;

        info!("Loaded config from {}", path.display());
        debug!("Start URL: {}", config.start_url);
        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| FileSystemError::CreateDirFailed {
                path: parent.to_path_buf(),
                reason: format!("Failed to create config directory: {e}"),
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| FileSystemError::WriteFailed {
            path: path.to_path_buf(),
            reason: format!("Failed to write config file: {e}"),
        })?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Check every field.
    pub fn validate(&self) -> Result<()> {
        self.start_url()?;
        if !(self.trickle_ceiling > 0.0 && self.trickle_ceiling <= 1.0) {
            return Err(Error::Configuration(format!(
                "trickle_ceiling must be in (0, 1], got {}",
                self.trickle_ceiling
            )));
        }
        if self.connectivity.poll_interval_secs == 0 {
            return Err(Error::Configuration(
                "connectivity.poll_interval_secs must be at least 1".to_string(),
            ));
        }
        if self.load_timeout_secs == Some(0) {
            return Err(Error::Configuration(
                "load_timeout_secs must be positive or null".to_string(),
            ));
        }
        Ok(())
    }

    /// Parsed start URL.
    pub fn start_url(&self) -> Result<Url> {
        validate_start_url(&self.start_url)
    }

    /// `host:port` the connectivity watcher should probe.
    pub fn probe_address(&self) -> Result<String> {
        if let Some(address) = &self.connectivity.probe_address {
            return Ok(address.clone());
        }
        let url = self.start_url()?;
        let host = url.host_str().ok_or_else(|| Error::InvalidStartUrl {
            url: self.start_url.clone(),
            reason: "missing host".to_string(),
        })?;
        let port = url.port_or_known_default().unwrap_or(443);
        Ok(format!("{host}:{port}"))
    }

    /// Tracker tuning derived from this config.
    #[must_use]
    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig {
            load_timeout: self.load_timeout_secs.map(Duration::from_secs),
            trickle_time_constant: Duration::from_millis(self.trickle_time_constant_ms),
            trickle_ceiling: self.trickle_ceiling,
        }
    }

    /// Get the path to the config file.
    #[must_use]
    pub fn config_file_path() -> PathBuf {
        config_file_path()
    }
}

/// Parse a start URL and make sure a web view can load it.
pub fn validate_start_url(raw: &str) -> Result<Url> {
    let invalid = |reason: String| Error::InvalidStartUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "scheme must be http or https, got '{}'",
            url.scheme()
        )));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url)
}

/// Get the path to the config file.
fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join(APP_DIR_NAME)
        .join("config.json")
}

/// Configuration manager that handles loading and caching config.
pub struct ConfigManager {
    config: ShellConfig,
    path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager, loading config from the default location.
    pub fn new() -> Result<Self> {
        Self::with_path(config_file_path())
    }

    /// Create a config manager backed by a specific file.
    pub fn with_path(path: PathBuf) -> Result<Self> {
        let config = ShellConfig::load_from(&path)?;
        Ok(Self { config, path })
    }

    /// Get a reference to the current configuration.
    #[must_use]
    pub const fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// File backing this manager.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the configuration after validating it.
    pub fn update(&mut self, config: ShellConfig) -> Result<()> {
        config.validate()?;
        config.save_to(&self.path)?;
        self.config = config;
        Ok(())
    }

    /// Reset to default configuration.
    pub fn reset(&mut self) -> Result<()> {
        self.config = ShellConfig::default();
        self.config.save_to(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = ShellConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window_title, "Moro Games");
        assert_eq!(config.load_timeout_secs, Some(30));
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let json = r#"{"start_url":"https://play.example.org/lobby"}"#;
        let config: ShellConfig = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(config.start_url, "https://play.example.org/lobby");
        assert_eq!(config.trickle_ceiling, 0.9);
        assert_eq!(config.connectivity, ConnectivityConfig::default());
        assert_eq!(config.load_timeout_secs, Some(30));
    }

    #[test]
    fn test_null_timeout_disables_it() {
        let json = r#"{"start_url":"https://play.example.org","load_timeout_secs":null}"#;
        let config: ShellConfig = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(config.load_timeout_secs, None);
        assert_eq!(config.tracker_config().load_timeout, None);
    }

    #[test]
    fn test_validate_start_url_rejects_relative_and_non_http() {
        assert!(validate_start_url("/lobby").is_err());
        assert!(validate_start_url("ftp://games.example.org").is_err());
        assert!(validate_start_url("file:///tmp/index.html").is_err());
        assert!(validate_start_url("http://games.example.org:8080/play").is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_ceiling() {
        let config = ShellConfig {
            trickle_ceiling: 1.5,
            ..Default::default()
        };
        let err = config.validate().expect_err("ceiling above 1");
        assert!(err.to_string().contains("trickle_ceiling"));

        let config = ShellConfig {
            trickle_ceiling: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout_and_interval() {
        let config = ShellConfig {
            load_timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let mut config = ShellConfig::default();
        config.connectivity.poll_interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_probe_address_derived_from_start_url() {
        let config = ShellConfig {
            start_url: "https://play.example.org/lobby".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.probe_address().expect("address"),
            "play.example.org:443"
        );

        let config = ShellConfig {
            start_url: "http://localhost:8080/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.probe_address().expect("address"), "localhost:8080");
    }

    #[test]
    fn test_explicit_probe_address_wins() {
        let mut config = ShellConfig::default();
        config.connectivity.probe_address = Some("1.1.1.1:53".to_string());
        assert_eq!(config.probe_address().expect("address"), "1.1.1.1:53");
    }

    #[test]
    fn test_tracker_config_conversion() {
        let config = ShellConfig {
            load_timeout_secs: Some(12),
            trickle_time_constant_ms: 1500,
            trickle_ceiling: 0.8,
            ..Default::default()
        };
        let tracker = config.tracker_config();
        assert_eq!(tracker.load_timeout, Some(Duration::from_secs(12)));
        assert_eq!(tracker.trickle_time_constant, Duration::from_millis(1500));
        assert_eq!(tracker.trickle_ceiling, 0.8);
    }

    #[test]
    fn test_load_creates_default_file() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("nested").join("config.json");

        let config = ShellConfig::load_from(&path).expect("Should load defaults");
        assert_eq!(config, ShellConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("config.json");
        let config = ShellConfig {
            start_url: "https://play.example.org".to_string(),
            window_title: "Arcade".to_string(),
            ..Default::default()
        };

        config.save_to(&path).expect("Should save");
        let loaded = ShellConfig::load_from(&path).expect("Should load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"start_url":"mailto:someone@example.org"}"#).expect("write");

        let err = ShellConfig::load_from(&path).expect_err("Should reject");
        assert!(matches!(err, Error::InvalidStartUrl { .. }));

        fs::write(&path, "{ not json").expect("write");
        let err = ShellConfig::load_from(&path).expect_err("Should reject");
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_config_manager_update_and_reset() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("config.json");
        let mut manager = ConfigManager::with_path(path.clone()).expect("Should create");

        let updated = ShellConfig {
            start_url: "https://play.example.org".to_string(),
            ..Default::default()
        };
        manager.update(updated.clone()).expect("Should update");
        assert_eq!(manager.config(), &updated);
        assert_eq!(ShellConfig::load_from(&path).expect("reload"), updated);

        let invalid = ShellConfig {
            start_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(manager.update(invalid).is_err());
        assert_eq!(manager.config(), &updated);

        manager.reset().expect("Should reset");
        assert_eq!(manager.config(), &ShellConfig::default());
        assert_eq!(manager.path(), path.as_path());
    }

    #[test]
    fn test_config_file_path_uses_app_dir() {
        let path = ShellConfig::config_file_path();
        assert!(path.to_string_lossy().ends_with("config.json"));
        assert!(path.to_string_lossy().contains(APP_DIR_NAME));
    }
}
