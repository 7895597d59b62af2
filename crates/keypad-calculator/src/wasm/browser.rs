//! Browser WASM bindings for the keypad calculator
//!
//! The page keeps its `data-*` markup; this object owns the calculator and
//! the two output elements, looked up once at construction. Button click
//! handlers call the matching method, which re-renders immediately.

// Compiled only with the `wasm` feature, see mod.rs

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, HtmlElement};

use super::dom::{CURRENT_OPERAND_ATTR, PREVIOUS_OPERAND_ATTR};
use super::keypad::{ControlKind, KeypadAction};
use super::render::{DisplayRenderer, DisplayTarget};
use crate::config::DisplayConfig;
use crate::core::Calculator;

impl DisplayTarget for HtmlElement {
    fn set_text(&mut self, text: &str) {
        self.set_inner_text(text);
    }
}

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    calculator: Calculator,
    renderer: DisplayRenderer,
    previous: HtmlElement,
    current: HtmlElement,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Binds to the page's `[data-previous-operand]` and
    /// `[data-current-operand]` elements
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<BrowserCalculator, JsValue> {
        Self::with_config_json("{}")
    }

    /// Same as the constructor, with a JSON display configuration
    pub fn with_config_json(config: &str) -> Result<BrowserCalculator, JsValue> {
        console_error_panic_hook::set_once();

        let config =
            DisplayConfig::from_json(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;

        let mut calc = Self {
            calculator: Calculator::new(),
            renderer: DisplayRenderer::with_config(config),
            previous: query_output(&document, PREVIOUS_OPERAND_ATTR)?,
            current: query_output(&document, CURRENT_OPERAND_ATTR)?,
        };
        calc.update_display();
        Ok(calc)
    }

    /// Digit or decimal-point button
    pub fn append_number(&mut self, label: &str) {
        self.calculator.append_symbol(label);
        self.update_display();
    }

    /// Operator button; unknown symbols are rejected
    pub fn choose_operation(&mut self, label: &str) -> Result<(), JsValue> {
        let action = KeypadAction::from_control(ControlKind::Operation, label)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        action.apply(&mut self.calculator);
        self.update_display();
        Ok(())
    }

    /// Equals button
    pub fn compute(&mut self) {
        self.calculator.compute();
        self.update_display();
    }

    /// Delete button
    pub fn delete(&mut self) {
        self.calculator.delete_last_char();
        self.update_display();
    }

    /// All-clear button
    pub fn all_clear(&mut self) {
        self.calculator.clear();
        self.update_display();
    }

    /// Generic handler: `kind` is `number`, `operation`, `equals`,
    /// `delete` or `all-clear`, `label` is the button text
    pub fn press(&mut self, kind: &str, label: &str) -> Result<(), JsValue> {
        let action = ControlKind::from_name(kind)
            .and_then(|kind| KeypadAction::from_control(kind, label))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        action.apply(&mut self.calculator);
        self.update_display();
        Ok(())
    }

    /// Raw current operand
    #[wasm_bindgen(getter)]
    pub fn current_operand(&self) -> String {
        self.calculator.current_operand().to_string()
    }

    /// Raw previous operand
    #[wasm_bindgen(getter)]
    pub fn previous_operand(&self) -> String {
        self.calculator.previous_operand().to_string()
    }

    /// Pending operation symbol, empty when none
    #[wasm_bindgen(getter)]
    pub fn operation(&self) -> String {
        self.calculator
            .operation()
            .map(|op| op.symbol().to_string())
            .unwrap_or_default()
    }

    fn update_display(&mut self) {
        self.renderer
            .render_into(&self.calculator, &mut self.current, &mut self.previous);
    }
}

/// Looks up an output element by its marker attribute
fn query_output(document: &Document, attribute: &str) -> Result<HtmlElement, JsValue> {
    document
        .query_selector(&format!("[{attribute}]"))?
        .ok_or_else(|| JsValue::from_str(&format!("missing [{attribute}] element")))?
        .dyn_into::<HtmlElement>()
        .map_err(JsValue::from)
}

/// Initialize the calculator module in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Keypad calculator WASM initialized".into());
}
