//! Unified calculator driver
//!
//! Test scenarios are written once against [`CalculatorDriver`] and run
//! against both the direct [`Session`] and the mock-DOM driver.
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! fn chain<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
//!     driver.press_all(&["3", "+", "4", "*", "2", "="])?;
//!     assert_eq!(driver.current_display(), "14");
//!     Ok(())
//! }
//!
//! chain(&mut Session::new()).unwrap();
//! chain(&mut DomDriver::new()).unwrap();
//! ```

use crate::config::DisplayConfig;
use crate::core::{CalcResult, Calculator};
use crate::wasm::{DisplayRenderer, DisplaySnapshot, Keypad, KeypadAction};

/// Abstract driver for keypad interactions
pub trait CalculatorDriver {
    /// Presses the key labelled `label` and re-renders
    fn press(&mut self, label: &str) -> CalcResult<KeypadAction>;

    /// Text of the current-operand display
    fn current_display(&self) -> String;

    /// Text of the previous-operand display
    fn previous_display(&self) -> String;

    /// The calculator being driven
    fn calculator(&self) -> &Calculator;

    /// Presses each label in order, stopping at the first unknown key
    fn press_all(&mut self, labels: &[&str]) -> CalcResult<()> {
        for label in labels {
            self.press(label)?;
        }
        Ok(())
    }

    /// Both display lines
    fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            current: self.current_display(),
            previous: self.previous_display(),
        }
    }
}

/// Direct driver: keypad, calculator and two text targets, no DOM
#[derive(Debug, Default)]
pub struct Session {
    calculator: Calculator,
    keypad: Keypad,
    renderer: DisplayRenderer,
    current_text: String,
    previous_text: String,
}

impl Session {
    /// Creates a session with default display grouping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session rendering with `config`
    #[must_use]
    pub fn with_config(config: DisplayConfig) -> Self {
        Self {
            renderer: DisplayRenderer::with_config(config),
            ..Self::default()
        }
    }

    /// The keypad layout in use
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    fn render(&mut self) {
        self.renderer.render_into(
            &self.calculator,
            &mut self.current_text,
            &mut self.previous_text,
        );
    }
}

impl CalculatorDriver for Session {
    fn press(&mut self, label: &str) -> CalcResult<KeypadAction> {
        let action = self.keypad.press(&mut self.calculator, label)?;
        self.render();
        Ok(action)
    }

    fn current_display(&self) -> String {
        self.current_text.clone()
    }

    fn previous_display(&self) -> String {
        self.previous_text.clone()
    }

    fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}
