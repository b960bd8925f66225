//! CLI argument definitions for regcheck.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "regcheck",
    version,
    about = "Check registration records against field format rules",
    long_about = "Check each record of a semicolon-delimited registration file.\n\n\
                  Prints `Register OK` or the first invalid field per record,\n\
                  checked in the order Code, Purchase Date, Amount, Description, Email."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include field values (codes, emails) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check every record of a file and print one verdict per record.
    Check(CheckArgs),

    /// List the field rules in the order they are applied.
    Rules(RulesArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Delimited file whose first line is a header.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Anchor the Amount and Email rules to the whole field.
    ///
    /// Without this flag, Amount only needs to end with a valid amount and
    /// Email only needs to contain an address.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Output format for verdicts.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    /// Print a totals table after the verdicts.
    #[arg(long = "summary")]
    pub summary: bool,

    /// Exit with status 1 when any record is invalid.
    #[arg(long = "fail-on-invalid")]
    pub fail_on_invalid: bool,

    /// Field delimiter (a single ASCII character).
    #[arg(long = "delimiter", default_value = ";", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// Show the patterns used with --strict.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_delimiter(raw: &str) -> Result<u8, String> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii() => Ok(ch as u8),
        _ => Err(format!("expected a single ASCII character, got {raw:?}")),
    }
}
