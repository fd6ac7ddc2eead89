//! Configuration system for `termtodo`.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/termtodo/config.toml`)
//! 4. Compiled defaults
//!
//! Missing config file is not an error (defaults are used). An explicit
//! `--config` path that doesn't exist is an error.
//!
//! The config file is also where the theme toggle persists its choice: on
//! exit, [`save_theme`] rewrites `ui.theme` in place, keeping other keys.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ui::theme::ThemeMode;

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write the configuration file.
    #[error("failed to write config file {path}: {source}")]
    WriteFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// Failed to serialize the TOML configuration.
    #[error("failed to serialize config file: {0}")]
    SerializeToml(#[from] toml::ser::Error),

    /// Could not determine the user's config directory.
    #[error("could not determine config directory (no HOME or XDG_CONFIG_HOME)")]
    NoConfigDir,
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    ui: UiFileConfig,
}

/// `[ui]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct UiFileConfig {
    theme: Option<String>,
    poll_timeout_ms: Option<u64>,
    max_task_title_len: Option<usize>,
    toast_ttl_secs: Option<u64>,
    date_format: Option<String>,
}

// ---------------------------------------------------------------------------
// Resolved configuration (concrete types, all fields populated)
// ---------------------------------------------------------------------------

/// Fully resolved client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Visual mode at startup.
    pub theme: ThemeMode,
    /// Poll timeout for the TUI event loop.
    pub poll_timeout: Duration,
    /// Maximum task title length in characters (input-time cap).
    pub max_task_title_len: usize,
    /// How long a toast stays on screen.
    pub toast_ttl: Duration,
    /// Created-at display format string (chrono).
    pub date_format: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            poll_timeout: Duration::from_millis(50),
            max_task_title_len: 256,
            toast_ttl: Duration::from_secs(4),
            date_format: "%b %d, %Y".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an error.
    /// If no `--config` is given, the default path
    /// (`~/.config/termtodo/config.toml`) is tried and silently ignored if
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the explicit config file cannot be read or
    /// parsed.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Ok(Self::resolve(cli, &file))
    }

    /// Resolve a `ClientConfig` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default. Separated from `load()` to enable
    /// unit testing without CLI parsing. Unrecognized theme names fall back
    /// to the default mode.
    #[must_use]
    fn resolve(cli: &CliArgs, file: &ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            theme: cli
                .theme
                .as_deref()
                .and_then(ThemeMode::parse)
                .or_else(|| file.ui.theme.as_deref().and_then(ThemeMode::parse))
                .unwrap_or(defaults.theme),
            poll_timeout: file
                .ui
                .poll_timeout_ms
                .map_or(defaults.poll_timeout, Duration::from_millis),
            max_task_title_len: file
                .ui
                .max_task_title_len
                .unwrap_or(defaults.max_task_title_len),
            toast_ttl: file
                .ui
                .toast_ttl_secs
                .map_or(defaults.toast_ttl, Duration::from_secs),
            date_format: file
                .ui
                .date_format
                .clone()
                .unwrap_or(defaults.date_format),
        }
    }
}

/// CLI arguments parsed by clap.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Terminal to-do list")]
pub struct CliArgs {
    /// Visual mode: "light" or "dark".
    #[arg(long, env = "TERMTODO_THEME")]
    pub theme: Option<String>,

    /// Path to config file (default: `~/.config/termtodo/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "TERMTODO_LOG")]
    pub log_level: String,

    /// Path to log file (default: `$TMPDIR/termtodo.log`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Load and parse a TOML config file.
///
/// If `explicit_path` is `Some`, the file must exist (error if not).
/// If `explicit_path` is `None`, the default path is tried and missing file
/// is treated as empty config.
fn load_config_file(explicit_path: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(path) = default_config_path() else {
            // No config dir available — use defaults.
            return Ok(ConfigFile::default());
        };
        path
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}

/// Default config file location (`~/.config/termtodo/config.toml`).
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("termtodo").join("config.toml"))
}

/// Persist the theme choice by rewriting `ui.theme` in the config file.
///
/// All other keys in the file are preserved. The file (and its parent
/// directory) are created if missing. Returns the path written.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read, parsed, serialized,
/// or written, or if no config directory can be determined when
/// `explicit_path` is `None`.
pub fn save_theme(explicit_path: Option<&Path>, mode: ThemeMode) -> Result<PathBuf, ConfigError> {
    let path = match explicit_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path().ok_or(ConfigError::NoConfigDir)?,
    };

    let mut root: toml::Table = match std::fs::read_to_string(&path) {
        Ok(contents) => contents.parse()?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => toml::Table::new(),
        Err(e) => return Err(ConfigError::ReadFile { path, source: e }),
    };

    let ui = root
        .entry("ui".to_string())
        .or_insert_with(|| toml::Value::Table(toml::Table::new()));
    if let toml::Value::Table(table) = ui {
        table.insert(
            "theme".to_string(),
            toml::Value::String(mode.as_str().to_string()),
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
            path: path.clone(),
            source: e,
        })?;
    }
    let rendered = toml::to_string_pretty(&root)?;
    std::fs::write(&path, rendered).map_err(|e| ConfigError::WriteFile {
        path: path.clone(),
        source: e,
    })?;

    Ok(path)
}
