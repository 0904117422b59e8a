//! CLI argument definitions for the district resolver.

use std::path::PathBuf;

use bezirk_model::Language;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bezirk",
    version,
    about = "Assign districts (Bezirke) to street addresses",
    long_about = "Assign districts (Bezirke) to street addresses.\n\n\
                  Built-in street rules decide by house-number parity and range.\n\
                  Streets without a rule fall back to an imported street table\n\
                  (street;district or street,district per line)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Include street names and house numbers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve a single address.
    Resolve(ResolveArgs),

    /// Resolve every address of a CSV file with `street,number` columns.
    Batch(BatchArgs),

    /// Resolve the address found in a recognition service reply (JSON).
    Recognize(RecognizeArgs),

    /// Show the active street rules.
    Rules(RulesArgs),

    /// Import a street table and list its entries.
    Table(TableArgs),
}

/// Options shared by every command that resolves addresses.
#[derive(Args)]
pub struct SessionArgs {
    /// Street table used when no street rule matches.
    #[arg(long = "table", value_name = "PATH")]
    pub table: Option<PathBuf>,

    /// JSON rule set replacing the built-in street rules.
    #[arg(long = "rules", value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Language for district labels and speech text.
    #[arg(long = "lang", value_enum, default_value = "de")]
    pub language: LanguageArg,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Street name as written on the sign.
    #[arg(value_name = "STREET")]
    pub street: String,

    /// House number, optionally with a letter suffix (e.g. 12a).
    #[arg(value_name = "NUMBER", default_value = "")]
    pub number: String,

    #[command(flatten)]
    pub session: SessionArgs,

    /// Print the result as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct BatchArgs {
    /// CSV file with a `street,number` header.
    #[arg(value_name = "ADDRESSES")]
    pub input: PathBuf,

    /// Write results here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub session: SessionArgs,
}

#[derive(Args)]
pub struct RecognizeArgs {
    /// JSON reply of the recognition service.
    #[arg(value_name = "REPLY")]
    pub reply: PathBuf,

    #[command(flatten)]
    pub session: SessionArgs,

    /// Print the result as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct RulesArgs {
    /// JSON rule set to show instead of the built-in rules.
    #[arg(long = "rules", value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Print the rules as JSON (usable as a `--rules` file).
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct TableArgs {
    /// Street table file.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// CLI language choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LanguageArg {
    De,
    En,
    Ar,
}

impl From<LanguageArg> for Language {
    fn from(value: LanguageArg) -> Self {
        match value {
            LanguageArg::De => Language::De,
            LanguageArg::En => Language::En,
            LanguageArg::Ar => Language::Ar,
        }
    }
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
