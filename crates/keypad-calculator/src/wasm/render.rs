//! Display rendering
//!
//! Reads the calculator and writes the two output targets: the operand
//! being typed, and `"<previous> <operator>"` while an operation is
//! pending.

use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::core::format::format_with;
use crate::core::Calculator;

/// Something a display line can be written into
pub trait DisplayTarget {
    /// Replaces the target's text
    fn set_text(&mut self, text: &str);
}

impl DisplayTarget for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Both display lines as rendered text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Formatted current operand
    pub current: String,
    /// Formatted previous operand and operator, empty when none is pending
    pub previous: String,
}

/// Renders calculator state into display targets
#[derive(Debug, Clone, Default)]
pub struct DisplayRenderer {
    config: DisplayConfig,
}

impl DisplayRenderer {
    /// Creates a renderer with default grouping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer with a custom display configuration
    #[must_use]
    pub fn with_config(config: DisplayConfig) -> Self {
        Self { config }
    }

    /// The active display configuration
    #[must_use]
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Formats both display lines
    #[must_use]
    pub fn render(&self, calc: &Calculator) -> DisplaySnapshot {
        let current = format_with(calc.current_operand(), &self.config);
        let previous = calc
            .operation()
            .map(|op| {
                format!(
                    "{} {}",
                    format_with(calc.previous_operand(), &self.config),
                    op.symbol()
                )
            })
            .unwrap_or_default();
        DisplaySnapshot { current, previous }
    }

    /// Writes both display lines into their targets
    pub fn render_into<C, P>(&self, calc: &Calculator, current: &mut C, previous: &mut P)
    where
        C: DisplayTarget + ?Sized,
        P: DisplayTarget + ?Sized,
    {
        let snapshot = self.render(calc);
        current.set_text(&snapshot.current);
        previous.set_text(&snapshot.previous);
    }
}
