//! CLI argument definitions for the `coderule` tool.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "coderule",
    version,
    about = "Preview, measure and validate code generation rules",
    long_about = "Work with code generation rules: ordered segment lists that describe\n\
                  how serial numbers and document codes are assembled.\n\n\
                  Rule files are JSON, either a bare array of segments or an object\n\
                  with a `segments` array."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// List the segment kinds.
    Kinds,

    /// Report the total code length of a rule and each segment's share.
    Length(LengthArgs),

    /// Render preview codes for a rule.
    Preview(PreviewArgs),

    /// Validate every segment of a rule.
    Validate(ValidateArgs),
}

#[derive(Args)]
pub struct RuleArgs {
    /// Path to the rule JSON file.
    #[arg(value_name = "RULE")]
    pub rule: PathBuf,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct LengthArgs {
    #[command(flatten)]
    pub rule: RuleArgs,
}

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub rule: RuleArgs,
}

#[derive(Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub rule: RuleArgs,

    /// Added to every counter, to preview the Nth upcoming code.
    #[arg(long = "offset", default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i64,

    /// Number of consecutive codes to preview, starting at the offset.
    #[arg(long = "count", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Current counter value reported by the issuing system.
    #[arg(long = "current", value_name = "N")]
    pub current: Option<u128>,

    /// Evaluate calendar segments on this date instead of today.
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Show user input values padded with `_` instead of `X` masks.
    #[arg(long = "editable")]
    pub editable: bool,

    /// Fill a user input segment, by parameter name (repeatable).
    #[arg(long = "fill", value_name = "NAME=VALUE", value_parser = parse_fill)]
    pub fill: Vec<(String, String)>,

    /// Replace checksum placeholders with CRC32 digits of the preceding text.
    #[arg(long = "with-checksum")]
    pub with_checksum: bool,
}

fn parse_fill(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))
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
