//! # Console Configuration
//!
//! TOML-backed settings: one base URL per backend resource family plus the
//! window geometry. A missing file yields the defaults; a present but
//! malformed file is an error. The file location resolves from an explicit
//! path, then the `SENSOR_CONSOLE_CONFIG` environment variable, then the
//! platform config directory.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, ConsoleResult, ResultExt};

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "SENSOR_CONSOLE_CONFIG";

// ============================================================================
// Types
// ============================================================================

/// Base URLs for the three backend resource families
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Endpoint API (device/sensor descriptors)
    pub endpoint_api: String,

    /// Scheduler API (triggered jobs)
    pub scheduler_api: String,

    /// Store API (key/value records)
    pub store_api: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint_api: "http://alexa.pi.lan/api".to_string(),
            scheduler_api: "http://alexa.pi.lan/scheduler/api".to_string(),
            store_api: "http://alexa.pi.lan/store".to_string(),
        }
    }
}

/// Window title and geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "API Sensor Console".to_string(),
            width: 1400.0,
            height: 900.0,
        }
    }
}

/// Top-level console configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    pub window: WindowConfig,
}

// ============================================================================
// Loading and Saving
// ============================================================================

impl ConsoleConfig {
    /// Resolve the config file location
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = env::var(CONFIG_PATH_ENV)
            && !path.is_empty()
        {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("sensor-console").join("config.toml"))
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load(explicit: Option<&Path>) -> ConsoleResult<Self> {
        match Self::resolve_path(explicit) {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific TOML file
    pub fn load_from(path: &Path) -> ConsoleResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| ConsoleError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConsoleError::config(e.to_string()))
    }

    /// Write the configuration as pretty TOML, creating parent directories
    pub fn save_to(&self, path: &Path) -> ConsoleResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context("Creating config directory")?;
        }
        let raw = toml::to_string_pretty(self).map_err(|e| ConsoleError::config(e.to_string()))?;
        fs::write(path, raw).with_context("Writing config file")?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.api.endpoint_api, "http://alexa.pi.lan/api");
        assert_eq!(config.api.scheduler_api, "http://alexa.pi.lan/scheduler/api");
        assert_eq!(config.api.store_api, "http://alexa.pi.lan/store");
        assert_eq!(config.window.title, "API Sensor Console");
        assert_eq!(config.window.width, 1400.0);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = ConsoleConfig::default();
        config.api.endpoint_api = "http://localhost:9100/api".to_string();
        config.window.title = "Staging Console".to_string();
        config.save_to(&path).unwrap();

        let loaded = ConsoleConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api]\nstore_api = \"http://localhost:9300\"\n").unwrap();

        let loaded = ConsoleConfig::load_from(&path).unwrap();
        assert_eq!(loaded.api.store_api, "http://localhost:9300");
        assert_eq!(loaded.api.endpoint_api, "http://alexa.pi.lan/api");
        assert_eq!(loaded.window.height, 900.0);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api\nbroken").unwrap();

        let err = ConsoleConfig::load_from(&path).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_load_with_missing_explicit_path_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");

        let loaded = ConsoleConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded, ConsoleConfig::default());
    }

    #[test]
    fn test_resolve_path_prefers_explicit() {
        let explicit = PathBuf::from("/tmp/console.toml");
        let resolved = ConsoleConfig::resolve_path(Some(&explicit)).unwrap();
        assert_eq!(resolved, explicit);
    }
}
