//! A small leveled logger.
//!
//! Calls at four severities (`error`, `warn`, `info`, `debug`) are gated by a
//! minimum level, rendered as structured JSON records or plain lines, and
//! written to the console and to one file per UTC calendar day under the log
//! directory (`<log_dir>/<YYYY-MM-DD>.log`).
//!
//! ```no_run
//! use daylog::{LoggerOptions, Severity, create_logger};
//!
//! let logger = create_logger(LoggerOptions::new().level(Severity::Debug).pretty_print(true))?;
//! logger.info(["service started"])?;
//! daylog::warn!(logger, "slow request", 1200)?;
//! # Ok::<(), daylog::LoggerError>(())
//! ```

pub mod clock;
pub mod config;
pub mod emitter;
pub mod entry;
pub mod error;
pub mod highlight;
pub mod level;
mod macros;
pub mod render;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ColorMode, LoggerConfig, LoggerOptions};
pub use emitter::{BufferWriter, LogEmitter, create_logger};
pub use entry::{LogEntry, log_file_name, to_message};
pub use error::{LoggerError, Result};
pub use highlight::{AnsiHighlighter, Highlighter, PlainHighlighter, TokenClass};
pub use level::Severity;
pub use render::{Rendered, Renderer};

#[doc(hidden)]
pub use serde_json;
