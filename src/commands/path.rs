use chrono::{NaiveDate, Utc};
use daylog::{LoggerConfig, LoggerOptions, log_file_name};
use eyre::{Context, Result};

pub fn run(date: Option<NaiveDate>, options: LoggerOptions) -> Result<()> {
    let config = LoggerConfig::resolve(options).context("Failed to resolve logger configuration")?;
    let date = date.unwrap_or_else(|| Utc::now().date_naive());

    println!("{}", config.log_dir.join(log_file_name(date)).display());
    Ok(())
}
