//! # Cli
//!
//! This module contains everything needed for parsing the CLI arguments for
//! Cooli.

use clap::{Parser, ValueEnum};

/// Struct containing the CLI configuration for Cooli.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// The path to the COOL source file.
    #[arg(index = 1)]
    pub file: std::path::PathBuf,

    /// Whether to dump the parsed AST (for debugging).
    #[arg(long)]
    pub dump_ast: bool,

    /// Whether to print the resulting type context.
    #[arg(long)]
    pub dump_context: bool,

    /// Whether to print the report as JSON instead of plain text.
    #[arg(long)]
    pub json: bool,

    /// Specify the log level of the analyzer.
    #[arg(value_enum, short, long, default_value_t = LogLevel::default())]
    pub verbosity: LogLevel,
}

impl Cli {
    pub fn init() -> Self {
        Cli::parse()
    }
}

/// Enum for specifying the log level of Cooli.
#[derive(ValueEnum, Clone, Default, Debug)]
pub enum LogLevel {
    /// The default log level. Only critical errors will be logged.
    #[default]
    #[value(alias("0"))]
    Error,

    /// A log level, where also warnings (like an unsettled inference loop)
    /// are logged.
    #[value(alias("1"))]
    Warn,

    /// Also log information about the general state of the analyzer.
    #[value(alias("2"))]
    Info,

    /// Log everything which happens internally in the analyzer.
    #[value(alias("3"))]
    Debug,

    /// Log extra information, including per-pass details.
    #[value(alias("4"))]
    Trace,
}

impl From<&LogLevel> for log::Level {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}
