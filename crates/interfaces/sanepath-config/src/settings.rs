use crate::{
    DEFAULT_ALLOW_CURRENT_DIRECTORY, DEFAULT_ALLOW_DRIVE_LETTER, DEFAULT_ALLOW_INACTIVATION,
    DEFAULT_ALLOW_PARENT_DIRECTORY, DEFAULT_ALLOW_UNC, DEFAULT_ESCAPE_CHAR, SETTINGS_FILE,
};
use directories::ProjectDirs;
use sanepath_core::{PathFlavor, SanitizePolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const QUALIFIER: &str = "com";
const ORG: &str = "sanepath";
const APP: &str = "sanepath";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("escape character {0:?} is not usable: {1}")]
    InvalidEscapeChar(char, &'static str),
    #[error("unknown setting '{0}'")]
    UnknownKey(String),
    #[error("invalid value '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },
}

/// Inner comparer used when ordering paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComparerChoice {
    #[default]
    Natural,
    NaturalIgnoreCase,
    Ordinal,
    OrdinalIgnoreCase,
}

impl std::fmt::Display for ComparerChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ComparerChoice::Natural => "natural",
            ComparerChoice::NaturalIgnoreCase => "natural-ignore-case",
            ComparerChoice::Ordinal => "ordinal",
            ComparerChoice::OrdinalIgnoreCase => "ordinal-ignore-case",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for ComparerChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "natural" => Ok(ComparerChoice::Natural),
            "natural-ignore-case" => Ok(ComparerChoice::NaturalIgnoreCase),
            "ordinal" => Ok(ComparerChoice::Ordinal),
            "ordinal-ignore-case" => Ok(ComparerChoice::OrdinalIgnoreCase),
            other => Err(format!("unknown comparer '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub policy: SanitizePolicy,
    pub comparer: ComparerChoice,
    pub include_hidden: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            policy: SanitizePolicy {
                escape_char: DEFAULT_ESCAPE_CHAR,
                allow_drive_letter: DEFAULT_ALLOW_DRIVE_LETTER,
                allow_current_directory: DEFAULT_ALLOW_CURRENT_DIRECTORY,
                allow_parent_directory: DEFAULT_ALLOW_PARENT_DIRECTORY,
                allow_inactivation: DEFAULT_ALLOW_INACTIVATION,
                allow_unc: DEFAULT_ALLOW_UNC,
                flavor: PathFlavor::native(),
            },
            comparer: ComparerChoice::default(),
            include_hidden: false,
        }
    }
}

impl Settings {
    pub const KEYS: &'static [&'static str] = &[
        "escape_char",
        "allow_drive_letter",
        "allow_current_directory",
        "allow_parent_directory",
        "allow_inactivation",
        "allow_unc",
        "flavor",
        "comparer",
        "include_hidden",
    ];

    pub fn policy(&self) -> SanitizePolicy {
        self.policy
    }

    /// An escape character that is itself rewritten by sanitization would
    /// make the output unstable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_escape_char(self.policy.escape_char, self.policy.flavor)
    }

    /// Update one setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let policy = &mut self.policy;

        match key {
            "escape_char" => {
                let mut chars = value.chars();
                let (Some(c), None) = (chars.next(), chars.next()) else {
                    return Err(invalid());
                };
                validate_escape_char(c, policy.flavor)?;
                policy.escape_char = c;
            }
            "allow_drive_letter" => policy.allow_drive_letter = parse_bool(value).ok_or_else(invalid)?,
            "allow_current_directory" => {
                policy.allow_current_directory = parse_bool(value).ok_or_else(invalid)?
            }
            "allow_parent_directory" => {
                policy.allow_parent_directory = parse_bool(value).ok_or_else(invalid)?
            }
            "allow_inactivation" => policy.allow_inactivation = parse_bool(value).ok_or_else(invalid)?,
            "allow_unc" => policy.allow_unc = parse_bool(value).ok_or_else(invalid)?,
            "flavor" => {
                let flavor: PathFlavor = value.parse().map_err(|_| invalid())?;
                validate_escape_char(policy.escape_char, flavor)?;
                policy.flavor = flavor;
            }
            "comparer" => self.comparer = value.parse().map_err(|_| invalid())?,
            "include_hidden" => self.include_hidden = parse_bool(value).ok_or_else(invalid)?,
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

pub fn validate_escape_char(c: char, flavor: PathFlavor) -> Result<(), ConfigError> {
    match flavor.escape_char_problem(c) {
        Some(reason) => Err(ConfigError::InvalidEscapeChar(c, reason)),
        None => Ok(()),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Reads and writes `settings.json` in the per-user config directory.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    pub fn new() -> Result<Self, ConfigError> {
        let proj_dirs = ProjectDirs::from(QUALIFIER, ORG, APP).ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::at(proj_dirs.config_dir()))
    }

    /// Store rooted at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    /// Missing file means defaults.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let path = self.path();
        if !path.exists() {
            debug!("No settings at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        settings.validate()?;
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        let path = self.path();
        atomic_write(&path, json.as_bytes())?;
        info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Remove the settings file so defaults apply again.
    pub fn reset(&self) -> Result<(), ConfigError> {
        let path = self.path();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn atomic_write(path: &Path, contents: &[u8]) -> Result<(), ConfigError> {
    let tmp_path = {
        let mut name = path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    };

    let mut file = fs::File::create(&tmp_path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    drop(file);

    match fs::rename(&tmp_path, path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            fs::remove_file(path).ok();
            fs::rename(&tmp_path, path)?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
