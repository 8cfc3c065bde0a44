use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use daylog::{ColorMode, LoggerOptions, Severity};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "daylog",
    about = "Leveled logging to the console and to one log file per day",
    version = env!("GIT_DESCRIBE"),
    after_help = "Options are read from --config, then $DAYLOG_CONFIG, then ~/.config/daylog/daylog.yaml.\nCommand-line flags override file options."
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to a YAML or JSON options file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Print the tool's own diagnostics to stderr")]
    pub verbose: bool,

    /// Minimum level to emit
    #[arg(long, global = true, value_enum)]
    pub level: Option<Severity>,

    /// Directory holding the day files
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Do not write to the console
    #[arg(long, global = true)]
    pub no_console: bool,

    /// Do not write to a file
    #[arg(long, global = true)]
    pub no_file: bool,

    /// Plain text lines instead of JSON records
    #[arg(long, global = true)]
    pub plain: bool,

    /// Indent JSON records
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Force compact JSON records, even with --pretty
    #[arg(long, global = true)]
    pub single_line: bool,

    /// When to colorize console output
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorMode>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Options given on the command line; unset flags stay unset
    pub fn options(&self) -> LoggerOptions {
        LoggerOptions {
            level: self.level,
            log_dir: self.log_dir.clone(),
            enable_console: self.no_console.then_some(false),
            enable_file: self.no_file.then_some(false),
            json_format: self.plain.then_some(false),
            pretty_print: self.pretty.then_some(true),
            single_line: self.single_line.then_some(true),
            color: self.color,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Emit one log entry
    Emit {
        /// Severity of the entry
        #[arg(value_enum, value_name = "LEVEL")]
        severity: Severity,

        /// Message values; JSON objects and arrays are logged as structured data
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Print the log file an entry would be appended to
    Path {
        /// Calendar date (YYYY-MM-DD, default: today in UTC)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show the resolved logger configuration
    Config {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
