//! Banner settings and their on-disk location.
//!
//! This module provides read-only settings loading with XDG Base Directory
//! compliance.

pub mod settings;

pub use settings::{AlertSettings, SettingsError, SettingsManager, get_config_path};
