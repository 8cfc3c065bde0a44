//! The logger: level gating, rendering, and the console and file sinks

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::clock::{Clock, SystemClock};
use crate::config::{LoggerConfig, LoggerOptions};
use crate::entry::{LogEntry, log_file_name};
use crate::error::{LoggerError, Result};
use crate::highlight::{self, Highlighter};
use crate::level::Severity;
use crate::render::{Rendered, Renderer};

/// Where console lines go
enum Console {
    Stdout,
    Writer(Mutex<Box<dyn Write + Send>>),
}

/// A leveled logger writing to the console and to `<log_dir>/<YYYY-MM-DD>.log`.
///
/// Every call runs to completion before returning: the entry is rendered,
/// printed, and appended to the day file, which is opened and closed per
/// call. Errors from either sink are returned to the caller.
pub struct LogEmitter {
    config: LoggerConfig,
    renderer: Renderer,
    clock: Box<dyn Clock>,
    console: Console,
}

/// Build a logger from options
pub fn create_logger(options: LoggerOptions) -> Result<LogEmitter> {
    LogEmitter::new(options)
}

impl LogEmitter {
    /// Resolve `options` and prepare the log directory when file output is on.
    ///
    /// An existing directory is left as is; missing parents are created.
    pub fn new(options: LoggerOptions) -> Result<Self> {
        let config = LoggerConfig::resolve(options)?;

        if config.enable_file {
            ensure_log_dir(&config.log_dir)?;
        }

        let renderer = Renderer::new(&config, highlight::for_mode(config.color));

        Ok(Self {
            config,
            renderer,
            clock: Box::new(SystemClock),
            console: Console::Stdout,
        })
    }

    /// Replace the time source
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Send console lines to `writer` instead of stdout
    pub fn with_console_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.console = Console::Writer(Mutex::new(Box::new(writer)));
        self
    }

    /// Replace the highlighter chosen from the color mode
    pub fn with_highlighter<H: Highlighter + 'static>(mut self, highlighter: H) -> Self {
        self.renderer = Renderer::new(&self.config, Box::new(highlighter));
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Whether a call at `level` would be emitted
    pub fn enabled(&self, level: Severity) -> bool {
        self.config.level.permits(level)
    }

    /// Day file an entry stamped at `at` is appended to
    pub fn log_file_path(&self, at: &DateTime<Utc>) -> PathBuf {
        self.config.log_dir.join(log_file_name(at.date_naive()))
    }

    /// Day file for the current instant
    pub fn current_log_file(&self) -> PathBuf {
        self.log_file_path(&self.clock.now())
    }

    pub fn error<I, M>(&self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = M>,
        M: Into<Value>,
    {
        self.log(Severity::Error, values)
    }

    pub fn warn<I, M>(&self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = M>,
        M: Into<Value>,
    {
        self.log(Severity::Warn, values)
    }

    pub fn info<I, M>(&self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = M>,
        M: Into<Value>,
    {
        self.log(Severity::Info, values)
    }

    pub fn debug<I, M>(&self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = M>,
        M: Into<Value>,
    {
        self.log(Severity::Debug, values)
    }

    /// Emit `values` at `level`, if the level passes the minimum
    pub fn log<I, M>(&self, level: Severity, values: I) -> Result<()>
    where
        I: IntoIterator<Item = M>,
        M: Into<Value>,
    {
        if !self.enabled(level) {
            return Ok(());
        }

        let entry = LogEntry::new(self.clock.now(), level, values);
        self.write_entry(&entry)
    }

    /// Emit a pre-built entry, keeping its timestamp
    pub fn log_entry(&self, entry: &LogEntry) -> Result<()> {
        if !self.enabled(entry.level) {
            return Ok(());
        }
        self.write_entry(entry)
    }

    /// Render `entry` without writing it anywhere
    pub fn render(&self, entry: &LogEntry) -> Result<Rendered> {
        self.renderer.render(entry)
    }

    fn write_entry(&self, entry: &LogEntry) -> Result<()> {
        let rendered = self.renderer.render(entry)?;

        // Both sinks are attempted; the first failure is reported
        let console = if self.config.enable_console {
            self.write_console(&rendered.console)
        } else {
            Ok(())
        };

        let file = if self.config.enable_file {
            let path = self.log_file_path(&entry.timestamp);
            append_line(&path, &rendered.file)
        } else {
            Ok(())
        };

        console.and(file)
    }

    fn write_console(&self, text: &str) -> Result<()> {
        match &self.console {
            Console::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{}", text).map_err(LoggerError::Console)
            }
            Console::Writer(writer) => {
                let mut writer = writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                writeln!(writer, "{}", text).map_err(LoggerError::Console)?;
                writer.flush().map_err(LoggerError::Console)
            }
        }
    }
}

impl fmt::Debug for LogEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogEmitter").field("config", &self.config).finish_non_exhaustive()
    }
}

/// Create `dir` and any missing parents unless it already exists
fn ensure_log_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        return Ok(());
    }

    match fs::create_dir_all(dir) {
        Ok(()) => {
            log::debug!("Created log directory: {}", dir.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(e) => Err(LoggerError::Configuration {
            path: dir.to_path_buf(),
            source: e,
        }),
    }
}

/// Open `path` for append (creating it), write `text` and a newline, close
fn append_line(path: &Path, text: &str) -> Result<()> {
    let write = || -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut line = String::with_capacity(text.len() + 1);
        line.push_str(text);
        line.push('\n');
        file.write_all(line.as_bytes())
    };

    write().map_err(|e| LoggerError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    log::trace!("Appended {} bytes to {}", text.len() + 1, path.display());
    Ok(())
}

/// In-memory console target; clones share one buffer
#[derive(Debug, Clone, Default)]
pub struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl BufferWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        String::from_utf8_lossy(&buffer).to_string()
    }
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut buffer = self.buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
