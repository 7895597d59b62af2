//! kcalc library
//!
//! Terminal front end for the keypad calculator: press keys from the
//! command line, run an interactive session, or print the keypad.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
mod output;
mod runner;

use keypad_calculator::prelude::DisplayConfig;

pub use commands::{Cli, ColorArg, Commands, OutputFormatArg, PressArgs, ReplArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{DisplayPrinter, OutputFormat, Step};
pub use runner::{expand_keys, KeyRunner};

/// Builds the configuration from parsed arguments.
///
/// The display configuration comes from `--config` (or `KCALC_CONFIG`) when
/// given, and `--thousands-separator` overrides its separator.
pub fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let mut display = match &cli.config {
        Some(path) => DisplayConfig::load(path)?,
        None => DisplayConfig::default(),
    };
    if let Some(separator) = &cli.thousands_separator {
        if separator.chars().any(|c| c.is_ascii_digit()) {
            return Err(CliError::invalid_argument(format!(
                "thousands separator {separator:?} contains a digit"
            )));
        }
        display = display.with_thousands_separator(separator.clone());
    }

    Ok(CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.clone().into())
        .with_display(display))
}
