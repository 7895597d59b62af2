//! Output formatting for displays and the keypad

use std::io::{self, Write};

use console::style;
use keypad_calculator::prelude::{Calculator, DisplaySnapshot, Keypad};
use serde::Serialize;

use crate::commands::OutputFormatArg;
use crate::error::CliResult;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable display lines
    #[default]
    Text,
    /// JSON document
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => Self::Text,
            OutputFormatArg::Json => Self::Json,
        }
    }
}

/// Display after one key press
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Key as pressed
    pub key: String,
    /// Both display lines after the key
    pub display: DisplaySnapshot,
}

#[derive(Serialize)]
struct Report<'a> {
    display: &'a DisplaySnapshot,
    state: &'a Calculator,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<&'a [Step]>,
}

/// Writes calculator output in text or JSON form
#[derive(Debug, Clone, Copy)]
pub struct DisplayPrinter {
    /// Whether to use colors
    pub use_color: bool,
    /// Text or JSON
    pub format: OutputFormat,
}

impl Default for DisplayPrinter {
    fn default() -> Self {
        Self::new(false, OutputFormat::Text)
    }
}

impl DisplayPrinter {
    /// Create a new printer
    #[must_use]
    pub const fn new(use_color: bool, format: OutputFormat) -> Self {
        Self { use_color, format }
    }

    /// Print the final display, plus per-key steps when given
    pub fn report(
        &self,
        out: &mut dyn Write,
        display: &DisplaySnapshot,
        state: &Calculator,
        steps: Option<&[Step]>,
    ) -> CliResult<()> {
        match self.format {
            OutputFormat::Json => {
                let report = Report {
                    display,
                    state,
                    steps,
                };
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            }
            OutputFormat::Text => {
                for step in steps.unwrap_or_default() {
                    self.step(out, step)?;
                }
                self.display(out, display)?;
            }
        }
        Ok(())
    }

    /// Previous line (only while an operation is pending), then current line
    pub fn display(&self, out: &mut dyn Write, display: &DisplaySnapshot) -> io::Result<()> {
        if !display.previous.is_empty() {
            if self.use_color {
                writeln!(out, "{}", style(&display.previous).dim())?;
            } else {
                writeln!(out, "{}", display.previous)?;
            }
        }
        if self.use_color {
            writeln!(out, "{}", style(&display.current).bold())
        } else {
            writeln!(out, "{}", display.current)
        }
    }

    /// One tab-separated line: key, previous line, current line
    pub fn step(&self, out: &mut dyn Write, step: &Step) -> io::Result<()> {
        let key = if self.use_color {
            style(format!("[{}]", step.key)).cyan().to_string()
        } else {
            format!("[{}]", step.key)
        };
        writeln!(
            out,
            "{key}\t{}\t{}",
            step.display.previous, step.display.current
        )
    }

    /// Keypad grid, one row per line
    pub fn keypad(&self, out: &mut dyn Write, keypad: &Keypad) -> io::Result<()> {
        let (rows, _) = keypad.dimensions();
        for row in 0..rows {
            let cells: Vec<String> = keypad
                .row(row)
                .map(|button| {
                    let width = 3 + (button.span - 1) * 6;
                    let cell = format!("[{:^width$}]", button.label());
                    if self.use_color {
                        style(cell).bold().to_string()
                    } else {
                        cell
                    }
                })
                .collect();
            writeln!(out, "{}", cells.join(" "))?;
        }
        Ok(())
    }

    /// Error line used by the interactive session
    pub fn error(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        if self.use_color {
            writeln!(out, "{} {message}", style("✗").red().bold())
        } else {
            writeln!(out, "error: {message}")
        }
    }
}
