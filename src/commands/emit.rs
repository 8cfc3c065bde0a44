use daylog::{LogEmitter, LoggerOptions, Severity};
use eyre::{Context, Result};
use serde_json::Value;

pub fn run(severity: Severity, values: &[String], options: LoggerOptions) -> Result<()> {
    let logger = LogEmitter::new(options).context("Failed to create logger")?;

    if !logger.enabled(severity) {
        log::debug!(
            "Suppressed {} entry (minimum level is {})",
            severity,
            logger.config().level
        );
        return Ok(());
    }

    let messages: Vec<Value> = values.iter().map(String::as_str).map(parse_value).collect();
    logger
        .log(severity, messages)
        .with_context(|| format!("Failed to emit {} entry", severity))?;

    if logger.config().enable_file {
        log::debug!("Appended entry to {}", logger.current_log_file().display());
    }

    Ok(())
}

/// JSON objects and arrays become structured values; anything else stays text
fn parse_value(arg: &str) -> Value {
    let trimmed = arg.trim_start();
    if (trimmed.starts_with('{') || trimmed.starts_with('['))
        && let Ok(value) = serde_json::from_str::<Value>(arg)
    {
        return value;
    }
    Value::String(arg.to_string())
}
