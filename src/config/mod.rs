//! Configuration for the viewer
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/rowscope/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! Command-line flags are applied on top by the binary.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;
mod viewport;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use observability::{FileLogging, LogRotation, LoggingConfig};
pub use viewport::{FileViewport, ViewportConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rows in the generated dataset when nothing else is configured
pub const DEFAULT_ROWS: u64 = 1_000_000;

/// Redraw tick when no input arrives
pub const DEFAULT_TICK_MS: u64 = 250;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Rows in the generated dataset
    pub rows: u64,

    /// Redraw tick in milliseconds
    pub tick_ms: u64,

    /// Viewport behavior
    pub viewport: ViewportConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            tick_ms: DEFAULT_TICK_MS,
            viewport: ViewportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub rows: Option<u64>,
    pub tick_ms: Option<u64>,

    /// Optional [viewport] section
    pub viewport: Option<FileViewport>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

impl FileConfig {
    /// Parse config file contents
    pub(crate) fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/rowscope/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("rowscope").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A file that exists but cannot be read or parsed is an error: a broken
    /// config should fail fast, not silently fall back to defaults.
    fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => FileConfig::parse(&contents).with_context(|| {
                format!(
                    "Failed to parse {}\n\n  Check for missing quotes, invalid booleans \
                     (use true/false) or typos in section names.\n  \
                     To reset, run `rowscope config --reset`.",
                    path.display()
                )
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => {
                Err(e).with_context(|| format!("Cannot read config file {}", path.display()))
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Fold a parsed file and an environment lookup into a config
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Dataset size: env > file > default
        let rows = env("ROWSCOPE_ROWS")
            .and_then(|v| v.parse().ok())
            .or(file.rows)
            .unwrap_or(DEFAULT_ROWS);

        // Tick: env > file > default
        let tick_ms = env("ROWSCOPE_TICK_MS")
            .and_then(|v| v.parse().ok())
            .or(file.tick_ms)
            .unwrap_or(DEFAULT_TICK_MS)
            .max(1);

        Self {
            rows,
            tick_ms,
            viewport: ViewportConfig::from_file(file.viewport),
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}
