//! Mock-DOM driver
//!
//! Clicks keypad buttons on a [`MockDom`] page the way the browser binding
//! does: the clicked element's data attribute picks the control kind, its
//! text is the label, and both output elements are re-rendered afterwards.

use super::dom::{DomEvent, MockDom, CURRENT_OPERAND_ATTR, PREVIOUS_OPERAND_ATTR};
use super::keypad::{Keypad, KeypadAction};
use super::render::DisplayRenderer;
use crate::config::DisplayConfig;
use crate::core::{CalcError, CalcResult, Calculator};
use crate::driver::CalculatorDriver;

/// DOM driver wrapping calculator, keypad and mock page
#[derive(Debug)]
pub struct DomDriver {
    calculator: Calculator,
    keypad: Keypad,
    renderer: DisplayRenderer,
    dom: MockDom,
}

impl Default for DomDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl DomDriver {
    /// Creates a driver over the standard calculator page
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DisplayConfig::default())
    }

    /// Creates a driver rendering with `config`
    #[must_use]
    pub fn with_config(config: DisplayConfig) -> Self {
        let keypad = Keypad::new();
        let dom = MockDom::calculator(&keypad);
        Self {
            calculator: Calculator::new(),
            keypad,
            renderer: DisplayRenderer::with_config(config),
            dom,
        }
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns a mutable reference to the DOM
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    /// Simulates clicking the element with ID `element_id`
    pub fn click(&mut self, element_id: &str) -> CalcResult<KeypadAction> {
        self.dom.dispatch_event(DomEvent::click(element_id));

        let element = self
            .dom
            .get_element(element_id)
            .ok_or_else(|| CalcError::UnknownControl(element_id.to_string()))?;
        let kind = element
            .control_kind()
            .ok_or_else(|| CalcError::UnknownControl(element_id.to_string()))?;
        let action = KeypadAction::from_control(kind, &element.text_content)?;

        action.apply(&mut self.calculator);
        self.update_display();
        Ok(action)
    }

    /// Writes both display lines into the page's output elements
    fn update_display(&mut self) {
        let snapshot = self.renderer.render(&self.calculator);
        if let Some(current) = self.dom.query_attr_mut(CURRENT_OPERAND_ATTR) {
            current.text_content = snapshot.current;
        }
        if let Some(previous) = self.dom.query_attr_mut(PREVIOUS_OPERAND_ATTR) {
            previous.text_content = snapshot.previous;
        }
    }
}

impl CalculatorDriver for DomDriver {
    fn press(&mut self, label: &str) -> CalcResult<KeypadAction> {
        let id = self.keypad.find_by_label(label)?.id.clone();
        self.click(&id)
    }

    fn current_display(&self) -> String {
        self.dom
            .attr_text(CURRENT_OPERAND_ATTR)
            .unwrap_or_default()
            .to_string()
    }

    fn previous_display(&self) -> String {
        self.dom
            .attr_text(PREVIOUS_OPERAND_ATTR)
            .unwrap_or_default()
            .to_string()
    }

    fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}
