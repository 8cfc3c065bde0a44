//! Logger options and resolved configuration
//!
//! [`LoggerOptions`] is what callers pass in: every field optional, readable
//! from YAML or JSON. [`LoggerConfig`] is the immutable result of applying
//! defaults, captured once when the logger is built.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LoggerError, Result};
use crate::level::Severity;

/// Name of the default log directory under the working directory
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Indentation used when pretty-printing structured records
pub const PRETTY_INDENT: usize = 2;

/// When console output is colorized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colorize unless the environment opts out (NO_COLOR, CLICOLOR=0)
    #[default]
    Auto,
    Always,
    Never,
}

/// Construction options. Unset fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerOptions {
    pub level: Option<Severity>,
    #[serde(alias = "logDirectory", skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
    #[serde(alias = "consoleEnabled", skip_serializing_if = "Option::is_none")]
    pub enable_console: Option<bool>,
    #[serde(alias = "fileEnabled", skip_serializing_if = "Option::is_none")]
    pub enable_file: Option<bool>,
    #[serde(alias = "structuredFormat", skip_serializing_if = "Option::is_none")]
    pub json_format: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty_print: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_line: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorMode>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: Severity) -> Self {
        self.level = Some(level);
        self
    }

    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn enable_console(mut self, enabled: bool) -> Self {
        self.enable_console = Some(enabled);
        self
    }

    pub fn enable_file(mut self, enabled: bool) -> Self {
        self.enable_file = Some(enabled);
        self
    }

    pub fn json_format(mut self, enabled: bool) -> Self {
        self.json_format = Some(enabled);
        self
    }

    pub fn pretty_print(mut self, enabled: bool) -> Self {
        self.pretty_print = Some(enabled);
        self
    }

    pub fn single_line(mut self, enabled: bool) -> Self {
        self.single_line = Some(enabled);
        self
    }

    pub fn color(mut self, mode: ColorMode) -> Self {
        self.color = Some(mode);
        self
    }

    /// Overlay every field set in `other` onto `self`
    pub fn merge(self, other: LoggerOptions) -> Self {
        Self {
            level: other.level.or(self.level),
            log_dir: other.log_dir.or(self.log_dir),
            enable_console: other.enable_console.or(self.enable_console),
            enable_file: other.enable_file.or(self.enable_file),
            json_format: other.json_format.or(self.json_format),
            pretty_print: other.pretty_print.or(self.pretty_print),
            single_line: other.single_line.or(self.single_line),
            color: other.color.or(self.color),
        }
    }

    /// Parse options from YAML (or JSON) text
    pub fn from_yaml_str(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty document means "no options"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load options from a YAML or JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoggerError::InvalidOptions {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let options = Self::from_yaml_str(&content).map_err(|e| LoggerError::InvalidOptions {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        log::debug!("Loaded logger options from: {}", path.display());
        Ok(options)
    }
}

/// Immutable configuration of a logger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerConfig {
    pub level: Severity,
    pub log_dir: PathBuf,
    pub enable_console: bool,
    pub enable_file: bool,
    pub json_format: bool,
    pub pretty_print: bool,
    pub single_line: bool,
    pub color: ColorMode,
}

impl LoggerConfig {
    /// Apply defaults to `options`.
    ///
    /// The working directory is read here, once, when no log directory is
    /// given; later changes of the working directory do not move the logs.
    pub fn resolve(options: LoggerOptions) -> Result<Self> {
        let log_dir = match options.log_dir {
            Some(dir) => expand_path(&dir),
            None => std::env::current_dir()
                .map_err(LoggerError::WorkingDirectory)?
                .join(DEFAULT_LOG_DIR),
        };

        Ok(Self {
            level: options.level.unwrap_or_default(),
            log_dir,
            enable_console: options.enable_console.unwrap_or(true),
            enable_file: options.enable_file.unwrap_or(true),
            json_format: options.json_format.unwrap_or(true),
            pretty_print: options.pretty_print.unwrap_or(false),
            single_line: options.single_line.unwrap_or(false),
            color: options.color.unwrap_or_default(),
        })
    }

    /// Indentation of structured records; single-line always wins
    pub fn indent(&self) -> usize {
        if self.single_line {
            0
        } else if self.pretty_print {
            PRETTY_INDENT
        } else {
            0
        }
    }

    /// Whether console records get per-token colors
    pub fn colorize_tokens(&self) -> bool {
        self.json_format && self.pretty_print && !self.single_line
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Severity::default(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            enable_console: true,
            enable_file: true,
            json_format: true,
            pretty_print: false,
            single_line: false,
            color: ColorMode::default(),
        }
    }
}

/// Expand `~` and environment variables in a path
pub fn expand_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    let expanded = shellexpand::full(&path_str).unwrap_or_else(|_| path_str.clone());
    PathBuf::from(expanded.as_ref())
}
