//! TOML settings for the `kvconf` tool.
//!
//! Settings are read from `--settings <PATH>` (or `KVCONF_SETTINGS`) when
//! given, otherwise from the platform-appropriate file:
//! - Windows:  `%APPDATA%\kvconf\settings.toml`
//! - Linux:    `~/.config/kvconf/settings.toml` (or `$XDG_CONFIG_HOME/kvconf/`)
//! - macOS:    `~/Library/Application Support/kvconf/settings.toml`
//!
//! Example:
//!
//! ```toml
//! [list]
//! separator = ","
//!
//! [logging]
//! level = "debug"
//! ```
//!
//! Every field is optional.  Fields annotated with `#[serde(default = "...")]`
//! take the helper's value when absent, so an empty file and a missing file
//! both mean "all defaults".

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The settings could not be serialized to TOML.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Settings schema types ─────────────────────────────────────────────────────

/// Top-level settings for the tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub list: ListSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// How list values are split.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListSettings {
    /// Character between list tokens.
    #[serde(default = "default_separator")]
    pub separator: char,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    /// `tracing` filter used when `RUST_LOG` is unset: `"error"`, `"warn"`,
    /// `"info"`, `"debug"`, `"trace"`, or a full directive string.
    #[serde(default = "default_log_level")]
    pub level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_separator() -> char {
    kvconf_core::DEFAULT_SEPARATOR
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Settings {
    /// Renders the settings as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Serialize`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// ── Settings loading ──────────────────────────────────────────────────────────

/// Resolves the default settings file path, if the platform has a config
/// directory.
pub fn default_settings_path() -> Option<PathBuf> {
    platform_config_dir().map(|dir| dir.join("settings.toml"))
}

/// Loads settings.
///
/// With `explicit = Some(path)` the file must exist.  Without it the default
/// path is tried and a missing file (or missing config directory) yields
/// `Settings::default()`.
///
/// # Errors
///
/// Returns [`SettingsError::Io`] for file-system errors and
/// [`SettingsError::Parse`] if the TOML is malformed.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, SettingsError> {
    if let Some(path) = explicit {
        return read_settings(path);
    }

    let Some(path) = default_settings_path() else {
        debug!("no platform config directory, using default settings");
        return Ok(Settings::default());
    };

    match read_settings(&path) {
        Err(SettingsError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "settings file absent, using defaults");
            Ok(Settings::default())
        }
        other => other,
    }
}

fn read_settings(path: &Path) -> Result<Settings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings = toml::from_str(&content)?;
    debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Resolves the platform config base directory joined with `kvconf`.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("kvconf"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("kvconf"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("kvconf")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
