use colored::*;
use daylog::{LoggerConfig, LoggerOptions};
use eyre::{Context, Result};

use crate::cli::OutputFormat;

pub fn run(format: OutputFormat, options: LoggerOptions) -> Result<()> {
    let config = LoggerConfig::resolve(options).context("Failed to resolve logger configuration")?;
    show(format, &config)
}

fn show(format: OutputFormat, config: &LoggerConfig) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(config)?);
        }
        OutputFormat::Text => {
            println!("{}", "daylog configuration".bold());
            println!();

            println!("{}:", "filter".cyan());
            println!("  level: {}", config.level);
            println!();

            println!("{}:", "sinks".cyan());
            println!("  console: {}", config.enable_console);
            println!("  file: {}", config.enable_file);
            println!("  log_dir: {}", config.log_dir.display());
            println!();

            println!("{}:", "format".cyan());
            println!("  json: {}", config.json_format);
            println!("  pretty_print: {}", config.pretty_print);
            println!("  single_line: {}", config.single_line);
            println!("  indent: {}", config.indent());
            println!("  color: {:?}", config.color);
        }
    }

    Ok(())
}
