//! TOML-based configuration persistence for the agent.
//!
//! Reads and writes `AppConfig` to the platform-appropriate config file:
//! - Windows:  `%APPDATA%\Handsfree\config.toml`
//! - Linux:    `~/.config/handsfree/config.toml`
//! - macOS:    `~/Library/Application Support/Handsfree/config.toml`
//!
//! Fields absent from the file fall back to serde defaults, so the agent
//! works on first run (before a config exists) and after upgrading from an
//! older config missing newer fields.
//!
//! Older releases stored preferences as two flat delimited strings instead
//! of structured records; [`AppConfig::from_legacy_strings`] migrates those
//! in one shot using the core legacy codec.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use handsfree_core::settings::legacy;
use handsfree_core::{CommandBindings, CustomCommand};

use crate::infrastructure::source::SmoothingParams;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level application configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub agent: AgentConfig,
    /// The nine configurable trigger words.
    #[serde(default)]
    pub commands: CommandBindings,
    /// Skeletal smoothing handed to the sensor pipeline.
    #[serde(default)]
    pub tracker: SmoothingParams,
    /// User-defined utterance→program launch commands.
    #[serde(default)]
    pub custom_commands: Vec<CustomCommand>,
}

/// General agent behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentConfig {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Wheel delta magnitude sent per recognized scroll command.
    #[serde(default = "default_wheel_step")]
    pub wheel_step: i32,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_wheel_step() -> i32 {
    500
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            wheel_step: default_wheel_step(),
        }
    }
}

impl AppConfig {
    /// Builds a config from the legacy flat-string settings.
    ///
    /// `voice_commands` and `custom_commands` are the two stored strings of
    /// older releases (`key::value` entries joined by `++`). Everything the
    /// legacy format could not express keeps its default.
    pub fn from_legacy_strings(voice_commands: &str, custom_commands: &str) -> Self {
        Self {
            commands: legacy::parse_bindings(voice_commands),
            custom_commands: legacy::parse_custom_commands(custom_commands),
            ..Self::default()
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config
/// base directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory
/// cannot be determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `AppConfig` from disk, returning `AppConfig::default()` if the
/// file does not yet exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not
/// found", and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = config_file_path()?;

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let cfg: AppConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

/// Persists `config` to disk, creating the config directory if needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_file_path()?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(&path, content).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config base directory including the app folder.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Handsfree"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("handsfree"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Handsfree")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
