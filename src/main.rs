use clap::Parser;
use daylog::LoggerOptions;
use eyre::{Context, Result};
use log::info;
use std::path::PathBuf;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn setup_logging(verbose: bool) {
    // The tool's own diagnostics go to stderr so stdout carries only log output
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        });
    }

    builder.target(env_logger::Target::Stderr).init();
}

/// Options from the first config file found, overlaid with command-line flags
fn load_options(cli: &Cli) -> Result<LoggerOptions> {
    let file_options = match &cli.config {
        Some(path) => LoggerOptions::from_file(path)
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => discover_options(),
    };

    Ok(file_options.merge(cli.options()))
}

fn discover_options() -> LoggerOptions {
    let mut candidates = Vec::new();

    if let Ok(env_path) = std::env::var("DAYLOG_CONFIG") {
        candidates.push(PathBuf::from(env_path));
    }
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("daylog").join("daylog.yaml"));
    }

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match LoggerOptions::from_file(&path) {
            Ok(options) => {
                info!("Loaded options from: {}", path.display());
                return options;
            }
            Err(e) => log::warn!("Ignoring {}: {}", path.display(), e),
        }
    }

    log::debug!("No options file found, using defaults");
    LoggerOptions::default()
}

fn run(cli: Cli) -> Result<()> {
    let options = load_options(&cli)?;

    match cli.command {
        Commands::Emit { severity, values } => commands::emit::run(severity, &values, options),
        Commands::Path { date } => commands::path::run(date, options),
        Commands::Config { format } => commands::config::run(cli::OutputFormat::resolve(format), options),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    run(cli).context("Command failed")?;

    Ok(())
}
