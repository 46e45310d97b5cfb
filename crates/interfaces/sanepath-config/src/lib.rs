//! Defaults and persisted settings for the sanepath tools.

pub mod settings;

pub use settings::{validate_escape_char, ComparerChoice, ConfigError, Settings, SettingsStore};

/// Character substituted for anything that can't appear in a path segment.
pub const DEFAULT_ESCAPE_CHAR: char = '_';

pub const DEFAULT_ALLOW_DRIVE_LETTER: bool = true;
pub const DEFAULT_ALLOW_CURRENT_DIRECTORY: bool = true;
pub const DEFAULT_ALLOW_PARENT_DIRECTORY: bool = true;
pub const DEFAULT_ALLOW_INACTIVATION: bool = false;
pub const DEFAULT_ALLOW_UNC: bool = true;

/// File name of the persisted settings inside the config directory.
pub const SETTINGS_FILE: &str = "settings.json";
