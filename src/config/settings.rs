//! Alert banner settings with XDG Base Directory compliance.
//!
//! Settings are read from `$XDG_CONFIG_HOME/alert-banner/settings.json` when
//! the file exists and fall back to defaults otherwise. They are never
//! written back.

use std::{env::var, fs::read_to_string, io::Error as StdError, path::PathBuf};

use {
    serde::{Deserialize, Serialize},
    serde_json::{Error as SerdeJsonError, from_str},
    thiserror::Error,
    tracing::debug,
};

/// Error type for settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read settings file.
    #[error("IO error: {0}")]
    IoError(#[from] StdError),
    /// Failed to deserialize settings.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerdeJsonError),
    /// Invalid settings value.
    #[error("Invalid settings value: {reason}")]
    InvalidValue { reason: String },
}

/// Serializable banner settings with default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertSettings {
    /// Class every banner carries, used to locate banners in the page.
    pub banner_class: String,
    /// Id of the dismiss control on warning banners.
    pub close_button_id: String,
    /// Markup shown inside the dismiss control.
    pub close_button_label: String,
    /// Whether banners echo their message to the diagnostic channel unless
    /// told otherwise.
    pub log_by_default: bool,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            banner_class: "alert-banner".to_string(),
            close_button_id: "alert-close-button".to_string(),
            close_button_label: "&times;".to_string(),
            log_by_default: true,
        }
    }
}

impl AlertSettings {
    /// Parses settings from a JSON document, filling in missing fields with
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the JSON is malformed or a value is invalid.
    pub fn from_json(contents: &str) -> Result<Self, SettingsError> {
        let settings: AlertSettings = from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks that class names and ids can be used as selectors.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [
            ("banner_class", &self.banner_class),
            ("close_button_id", &self.close_button_id),
        ] {
            if value.is_empty() {
                return Err(SettingsError::InvalidValue {
                    reason: format!("{field} must not be empty"),
                });
            }
            if value.chars().any(char::is_whitespace) {
                return Err(SettingsError::InvalidValue {
                    reason: format!("{field} must not contain whitespace: {value:?}"),
                });
            }
        }
        Ok(())
    }
}

/// Loads and holds banner settings.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    /// Settings as loaded at construction.
    settings: AlertSettings,
    /// Path to the configuration file on disk.
    config_path: PathBuf,
}

impl SettingsManager {
    /// Creates a settings manager reading the default config path.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if an existing settings file cannot be read
    /// or parsed.
    pub fn new() -> Result<Self, SettingsError> {
        Self::with_config_path(get_config_path())
    }

    /// Creates a settings manager reading a custom config path.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Path of the settings file; a missing file means defaults.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `SettingsManager` or a `SettingsError`.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if an existing settings file cannot be read
    /// or parsed.
    pub fn with_config_path(config_path: PathBuf) -> Result<Self, SettingsError> {
        let settings = if config_path.exists() {
            debug!("Loading alert settings from {:?}", config_path);
            AlertSettings::from_json(&read_to_string(&config_path)?)?
        } else {
            debug!("No alert settings at {:?}, using defaults", config_path);
            AlertSettings::default()
        };

        Ok(SettingsManager {
            settings,
            config_path,
        })
    }

    /// Gets the current settings.
    pub fn get_settings(&self) -> &AlertSettings {
        &self.settings
    }

    /// Gets the configuration file path.
    pub fn get_config_path(&self) -> &PathBuf {
        &self.config_path
    }
}

/// Resolves the settings file path under the XDG config home.
///
/// # Returns
///
/// The path to the configuration file.
#[must_use]
pub fn get_config_path() -> PathBuf {
    let mut config_dir = get_xdg_config_home();
    config_dir.push("alert-banner");
    config_dir.push("settings.json");
    config_dir
}

/// Uses `XDG_CONFIG_HOME` if set, otherwise `$HOME/.config`.
fn get_xdg_config_home() -> PathBuf {
    if let Ok(config_home) = var("XDG_CONFIG_HOME")
        && !config_home.is_empty()
    {
        return PathBuf::from(config_home);
    }

    if let Ok(home) = var("HOME") {
        let mut path = PathBuf::from(home);
        path.push(".config");
        return path;
    }

    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use std::{
        fs::write,
        io::{Error, ErrorKind::NotFound},
    };

    use tempfile::tempdir;

    use crate::config::settings::{AlertSettings, SettingsError, SettingsManager};

    #[test]
    fn test_alert_settings_default() {
        let settings = AlertSettings::default();
        assert_eq!(settings.banner_class, "alert-banner");
        assert_eq!(settings.close_button_id, "alert-close-button");
        assert!(settings.log_by_default);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = AlertSettings::from_json(r#"{"log_by_default": false}"#).unwrap();
        assert!(!settings.log_by_default);
        assert_eq!(settings.banner_class, "alert-banner");
    }

    #[test]
    fn test_validation_rejects_bad_selectors() {
        let result = AlertSettings::from_json(r#"{"banner_class": ""}"#);
        assert!(matches!(result, Err(SettingsError::InvalidValue { .. })));

        let result = AlertSettings::from_json(r#"{"close_button_id": "close button"}"#);
        let error = result.unwrap_err();
        assert!(error.to_string().contains("close_button_id"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let manager = SettingsManager::with_config_path(path.clone()).unwrap();
        assert_eq!(*manager.get_settings(), AlertSettings::default());
        assert_eq!(manager.get_config_path(), &path);
        assert!(!path.exists());
    }

    #[test]
    fn test_existing_file_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        write(&path, r#"{"banner_class": "py-banner", "log_by_default": false}"#).unwrap();

        let manager = SettingsManager::with_config_path(path).unwrap();
        let settings = manager.get_settings();
        assert_eq!(settings.banner_class, "py-banner");
        assert!(!settings.log_by_default);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        write(&path, "{ not json").unwrap();

        let result = SettingsManager::with_config_path(path);
        assert!(matches!(result, Err(SettingsError::SerializationError(_))));
    }

    #[test]
    fn test_loaded_settings_survive_clone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        write(&path, r#"{"close_button_label": "x"}"#).unwrap();

        let manager = SettingsManager::with_config_path(path.clone()).unwrap();
        write(&path, r#"{"close_button_label": "changed"}"#).unwrap();
        let cloned = manager.clone();

        assert_eq!(cloned.get_settings().close_button_label, "x");
        assert_eq!(cloned.get_settings(), manager.get_settings());
        assert_eq!(cloned.get_config_path(), &path);
    }

    #[test]
    fn test_settings_error_display() {
        let io_error = Error::new(NotFound, "File not found");
        let settings_error = SettingsError::IoError(io_error);
        assert!(settings_error.to_string().contains("IO error"));

        let invalid_value_error = SettingsError::InvalidValue {
            reason: "test reason".to_string(),
        };
        assert_eq!(
            invalid_value_error.to_string(),
            "Invalid settings value: test reason"
        );
    }
}
