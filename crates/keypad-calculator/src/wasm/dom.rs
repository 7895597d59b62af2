//! Mock DOM for keypad testing
//!
//! An in-memory page shaped like the browser calculator: keypad buttons
//! tagged with `data-*` control attributes and two output elements. Lets
//! the binder and renderer run end to end without a browser.

use std::collections::HashMap;

use super::keypad::{ControlKind, Keypad};
use super::render::DisplayTarget;

/// Attribute marking the previous-operand output element
pub const PREVIOUS_OPERAND_ATTR: &str = "data-previous-operand";
/// Attribute marking the current-operand output element
pub const CURRENT_OPERAND_ATTR: &str = "data-current-operand";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Checks if element carries an attribute (value ignored)
    #[must_use]
    pub fn has_attr(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Keypad control kind from the element's data attributes
    #[must_use]
    pub fn control_kind(&self) -> Option<ControlKind> {
        ControlKind::ALL
            .into_iter()
            .find(|kind| self.has_attr(kind.data_attribute()))
    }
}

impl DisplayTarget for DomElement {
    fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// ID of the element the event targets
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::Click { element_id } => element_id,
        }
    }
}

/// Mock DOM for testing the keypad without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    /// Elements by ID for quick lookup
    elements: HashMap<String, DomElement>,
    /// Registration order, mirrors document order
    order: Vec<String>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator page for `keypad`
    #[must_use]
    pub fn calculator(keypad: &Keypad) -> Self {
        let mut dom = Self::new();

        dom.register_element(
            DomElement::new("div")
                .with_id("previous-operand")
                .with_class("previous-operand")
                .with_attr(PREVIOUS_OPERAND_ATTR, ""),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id("current-operand")
                .with_class("current-operand")
                .with_attr(CURRENT_OPERAND_ATTR, ""),
        );

        for button in keypad.buttons() {
            let mut element = DomElement::new("button")
                .with_id(&button.id)
                .with_text(&button.label())
                .with_attr(button.action.kind().data_attribute(), "");
            if button.span > 1 {
                element = element.with_class("span-two");
            }
            dom.register_element(element);
        }

        dom
    }

    /// Registers an element for ID lookup; elements without an ID are dropped
    pub fn register_element(&mut self, element: DomElement) {
        if element.id.is_empty() {
            return;
        }
        if !self.elements.contains_key(&element.id) {
            self.order.push(element.id.clone());
        }
        self.elements.insert(element.id.clone(), element);
    }

    /// Number of registered elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no element is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// First element carrying `attribute`, in document order
    #[must_use]
    pub fn query_attr(&self, attribute: &str) -> Option<&DomElement> {
        self.query_attr_all(attribute).into_iter().next()
    }

    /// Every element carrying `attribute`, in document order
    #[must_use]
    pub fn query_attr_all(&self, attribute: &str) -> Vec<&DomElement> {
        self.order
            .iter()
            .filter_map(|id| self.elements.get(id))
            .filter(|e| e.has_attr(attribute))
            .collect()
    }

    /// Mutable access to the first element carrying `attribute`
    pub fn query_attr_mut(&mut self, attribute: &str) -> Option<&mut DomElement> {
        let id = self.query_attr(attribute)?.id.clone();
        self.elements.get_mut(&id)
    }

    /// Records an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Gets the text of the first element carrying `attribute`
    #[must_use]
    pub fn attr_text(&self, attribute: &str) -> Option<&str> {
        self.query_attr(attribute).map(|e| e.text_content.as_str())
    }
}
