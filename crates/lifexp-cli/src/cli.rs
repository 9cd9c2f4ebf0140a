//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use lifexp_cli::DEFAULT_INPUT_PATH;
use lifexp_model::DEFAULT_REGION;

#[derive(Parser)]
#[command(
    name = "lifexp",
    version,
    about = "Clean life expectancy exports and extract one country",
    long_about = "Reshape a life expectancy export (wide .tsv or zipped JSON .zip) into a\n\
                  long table of observations and save the rows of a single country as CSV."
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
    /// Clean an export and save the extract for one country.
    Run(RunArgs),

    /// List the accepted country codes.
    Countries,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the input export (.tsv or .zip).
    #[arg(value_name = "PATH", default_value = DEFAULT_INPUT_PATH)]
    pub path: PathBuf,

    /// Two-letter region code, for example PT for Portugal.
    #[arg(value_name = "REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Where to write the extract (default: ./life_expectancy/data/pt_life_expectancy.csv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
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
