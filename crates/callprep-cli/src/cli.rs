//! CLI argument definitions for call-prep identity validation.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "callprep",
    version,
    about = "Validate patient identity references for call-prep lookups",
    long_about = "Validate patient identity references for call-prep lookups.\n\n\
                  Accepts a subscriber/member ID (050028449/00 or 05002844900) or a\n\
                  full name with date of birth (Jane Doe, 04-05-1990), as free text or\n\
                  as a JSON key/value payload."
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

    /// Allow identity values (IDs, names, DOBs) to appear in logs.
    ///
    /// These values are PHI. Without this flag they are logged as [REDACTED].
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a single identity reference.
    Validate(ValidateArgs),

    /// Validate one identity reference per line of a file.
    Batch(BatchArgs),

    /// List the accepted input formats and structured field names.
    Formats(FormatsArgs),
}

/// Options that shape the validator itself.
#[derive(Args)]
pub struct ValidatorArgs {
    /// JSON file overriding the structured field-name aliases.
    #[arg(long = "aliases", value_name = "PATH")]
    pub aliases: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today when rejecting future DOBs.
    #[arg(long = "as-of", value_name = "DATE")]
    pub as_of: Option<NaiveDate>,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Free-text identity reference; multiple words are joined with spaces.
    #[arg(value_name = "TEXT", conflicts_with = "json", required_unless_present = "json")]
    pub text: Vec<String>,

    /// Read a JSON value (string or key/value object) from a file, or `-` for stdin.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,

    #[command(flatten)]
    pub validator: ValidatorArgs,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "text")]
    pub output: OutputFormatArg,

    /// On success, print the downstream lookup request instead of the record.
    #[arg(long = "lookup")]
    pub lookup: bool,

    /// On failure, print the full end-user guidance instead of the bare error.
    #[arg(long = "guidance")]
    pub guidance: bool,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// File with one identity reference per line, or `-` for stdin.
    ///
    /// Lines starting with `{` are parsed as JSON objects.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    #[command(flatten)]
    pub validator: ValidatorArgs,

    /// Output format (json emits one outcome per line).
    #[arg(long = "output", value_enum, default_value = "text")]
    pub output: OutputFormatArg,
}

#[derive(Parser)]
pub struct FormatsArgs {
    /// JSON file overriding the structured field-name aliases.
    #[arg(long = "aliases", value_name = "PATH")]
    pub aliases: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
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
