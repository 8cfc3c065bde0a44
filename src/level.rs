//! Severity levels and level gating

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LoggerError;

/// Severity of a log call, ordered by urgency.
///
/// The rank is fixed: `error` is 0 (most urgent) and `debug` is 3. A logger
/// configured with a minimum level emits every call whose rank is less than
/// or equal to the minimum's rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    #[serde(alias = "warning")]
    Warn,
    #[default]
    Info,
    Debug,
}

impl Severity {
    /// All levels in rank order
    pub const ALL: [Severity; 4] = [Severity::Error, Severity::Warn, Severity::Info, Severity::Debug];

    pub fn rank(self) -> u8 {
        match self {
            Severity::Error => 0,
            Severity::Warn => 1,
            Severity::Info => 2,
            Severity::Debug => 3,
        }
    }

    /// Lowercase name, as written in structured records
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }

    /// Uppercase name, as written in plain lines
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    /// Whether a logger with `self` as its minimum level emits a call at `call`
    pub fn permits(self, call: Severity) -> bool {
        call.rank() <= self.rank()
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warn" | "warning" => Ok(Severity::Warn),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}
