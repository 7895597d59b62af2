//! Keypad Calculator
//!
//! A four-function calculator driven by a keypad: digits build up an
//! operand, operators chain strictly left to right, and two display lines
//! show the running expression.
//!
//! - [`core`]: the [`Calculator`](core::Calculator) state machine, operand
//!   parsing and display formatting
//! - [`wasm`]: keypad binding, display rendering, a mock DOM and (with the
//!   `wasm` feature) the browser binding
//! - [`driver`]: one driver trait for scripted key sequences
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.append_symbol("3");
//! calc.choose_operation(Operation::Add);
//! calc.append_symbol("4");
//! calc.choose_operation(Operation::Multiply); // 3 + 4 computed here
//! calc.append_symbol("2");
//! calc.compute();
//! assert_eq!(calc.current_operand(), "14");
//!
//! assert_eq!(Calculator::format_for_display("1234.5"), "1,234.5");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;

/// Web module - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::DisplayConfig;
    pub use crate::core::format::{format_for_display, format_with};
    pub use crate::core::number::{number_to_string, parse_float};
    pub use crate::core::{CalcError, CalcResult, Calculator, Operation};
    pub use crate::driver::{CalculatorDriver, Session};

    pub use crate::wasm::{
        ControlKind, DisplayRenderer, DisplaySnapshot, DisplayTarget, DomDriver, DomElement,
        DomEvent, Keypad, KeypadAction, KeypadButtonDef, MockDom,
    };

    #[cfg(feature = "wasm")]
    pub use crate::wasm::BrowserCalculator;
}
