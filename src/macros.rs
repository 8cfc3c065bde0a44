//! Variadic logging macros
//!
//! Each macro takes a logger followed by zero or more values of any
//! `Serialize` type and evaluates to `Result<(), LoggerError>`:
//!
//! ```no_run
//! use daylog::{LogEmitter, LoggerOptions};
//! use serde_json::json;
//!
//! let logger = LogEmitter::new(LoggerOptions::new())?;
//! daylog::info!(logger, "request served", 200, json!({"path": "/health"}))?;
//! daylog::debug!(logger)?;
//! # Ok::<(), daylog::LoggerError>(())
//! ```
//!
//! Values that fail to serialize abort the call before anything is written.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_values {
    ($logger:expr, $level:expr $(, $value:expr)* $(,)?) => {
        (|| -> ::std::result::Result<(), $crate::LoggerError> {
            let values: ::std::vec::Vec<$crate::serde_json::Value> =
                ::std::vec![$($crate::to_message(&$value)?),*];
            $logger.log($level, values)
        })()
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::__log_values!($logger, $crate::Severity::Error $(, $value)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::__log_values!($logger, $crate::Severity::Warn $(, $value)*)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::__log_values!($logger, $crate::Severity::Info $(, $value)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::__log_values!($logger, $crate::Severity::Debug $(, $value)*)
    };
}
