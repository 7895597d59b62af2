//! Web frontend for the calculator
//!
//! Keypad binding, display rendering and a mock DOM are always compiled so
//! the browser flow can be tested natively; the real `web-sys` binding is
//! behind the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;
mod render;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom, CURRENT_OPERAND_ATTR, PREVIOUS_OPERAND_ATTR};
pub use driver::DomDriver;
pub use keypad::{ControlKind, Keypad, KeypadAction, KeypadButtonDef};
pub use render::{DisplayRenderer, DisplaySnapshot, DisplayTarget};
