//! Flags shared by every `barrelize` subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so
//! `barrelize organize -v` and `barrelize -v organize` mean the same thing.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum, builder::FalseyValueParser};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// More log output on stderr; repeat for more detail.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        long_help = "Raise the log level on stderr:
    -v    info: one event per organized component or copied tree
    -vv   debug: skipped entries, config discovery, spawned generator
    -vvv  trace: every move and copy
RUST_LOG, when set, replaces this entirely."
    )]
    pub verbose: u8,

    /// Print errors only.
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain, uncoloured output.
    ///
    /// `NO_COLOR` counts when set to anything but an empty string, `0`,
    /// `false`, `no` or `off` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new(),
        hide_env_values = true
    )]
    pub no_color: bool,

    /// Read settings from FILE instead of `.barrelize.toml`.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        env = "BARRELIZE_CONFIG",
        value_name = "FILE"
    )]
    pub config: Option<PathBuf>,

    /// How reports are rendered on stdout.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Auto,
        value_name = "FORMAT"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// `-v` or more: errors show their cause chain.
    pub fn is_verbose(&self) -> bool {
        self.verbose > 0
    }
}

/// Rendering for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Coloured lines with status symbols.
    Human,
    /// The same lines without colour.
    Plain,
    /// One pretty-printed JSON report.
    Json,
}
