//! Logging configuration: filter level and the optional rotating log file
//!
//! The TUI always logs into its in-memory buffer. A log file is opt-in and is
//! written as JSON by a rolling appender built from these settings.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Levels accepted in `[logging] level`
const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// How often the log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file for every run
    Never,
}

impl LogRotation {
    /// Unknown values fall back to daily
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "never" => Self::Never,
            _ => Self::Daily,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }

    fn rotation(self) -> Rotation {
        match self {
            Self::Hourly => Rotation::HOURLY,
            Self::Daily => Rotation::DAILY,
            Self::Never => Rotation::NEVER,
        }
    }
}

/// Resolved `[logging]` section
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter level for the crate's own events
    pub level: String,
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name prefix; the appender adds the date suffix
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "rowscope".to_string(),
        }
    }
}

/// `[logging]` as written in the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Fold the file section over the defaults
    ///
    /// An unknown level keeps the default rather than producing a filter
    /// that silences everything.
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let Some(file) = file else {
            return Self::default();
        };
        let mut config = Self::default();

        if let Some(level) = file.level {
            let level = level.trim().to_ascii_lowercase();
            if LEVELS.contains(&level.as_str()) {
                config.level = level;
            }
        }
        if let Some(enabled) = file.file_enabled {
            config.file_enabled = enabled;
        }
        if let Some(dir) = file.file_dir {
            config.file_dir = PathBuf::from(dir);
        }
        if let Some(rotation) = file.file_rotation {
            config.file_rotation = LogRotation::parse(&rotation);
        }
        if let Some(prefix) = file.file_prefix.filter(|p| !p.is_empty()) {
            config.file_prefix = prefix;
        }
        config
    }

    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub fn filter_directive(&self) -> String {
        format!("rowscope={}", self.level)
    }

    /// Build the rolling appender, or `None` when file logging is off
    ///
    /// Creates the log directory on the way.
    pub fn file_appender(&self) -> Result<Option<RollingFileAppender>> {
        if !self.file_enabled {
            return Ok(None);
        }
        std::fs::create_dir_all(&self.file_dir).with_context(|| {
            format!("Could not create log directory {}", self.file_dir.display())
        })?;
        let appender = RollingFileAppender::builder()
            .rotation(self.file_rotation.rotation())
            .filename_prefix(&self.file_prefix)
            .build(&self.file_dir)
            .with_context(|| format!("Could not open log file in {}", self.file_dir.display()))?;
        Ok(Some(appender))
    }
}
