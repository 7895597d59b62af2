//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// kcalc: keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "kcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v logs ignored keys, -vv traces every key)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Display configuration file (JSON)
    #[arg(long, global = true, env = "KCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Thousands separator, overrides the configuration file
    #[arg(long, global = true)]
    pub thousands_separator: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press a sequence of keys and print the display
    Press(PressArgs),

    /// Interactive session: one key sequence per line
    Repl(ReplArgs),

    /// Print the keypad layout
    Keypad,
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Keys to press, e.g. `12 + 3.5 =`; numbers are typed digit by digit
    #[arg(required = true, num_args = 1..)]
    pub keys: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormatArg,

    /// Print the display after every key
    #[arg(long)]
    pub steps: bool,
}

/// Arguments for the repl command
#[derive(Parser, Debug, Default)]
pub struct ReplArgs {
    /// Do not print the prompt
    #[arg(long)]
    pub no_prompt: bool,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormatArg {
    /// Human-readable display
    #[default]
    Text,
    /// JSON snapshot with raw state
    Json,
}

/// Color argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
