//! Mock DOM display surface
//!
//! An in-memory stand-in for the calculator page: two output elements and
//! the keypad buttons, located through the same `data-*` attributes the page
//! markup uses.

use std::collections::HashMap;

use super::keypad::Keypad;
use super::sink::DisplaySink;
use crate::core::DisplayText;

/// Attribute marking the pending-expression output element
pub const PREVIOUS_OPERAND_ATTR: &str = "data-previous-operand";
/// Attribute marking the current-value output element
pub const CURRENT_OPERAND_ATTR: &str = "data-current-operand";

/// Represents a DOM element for testing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
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
    /// Child elements
    pub children: Vec<DomElement>,
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
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
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text_content);
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Checks if element carries an attribute
    #[must_use]
    pub fn has_attr(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
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
    /// Key pressed while the page has focus
    KeyDown {
        /// Key name, e.g. `"7"` or `"Enter"`
        key: String,
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

    /// Creates a key-down event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Mock DOM for driving the calculator without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
    /// Elements by ID, in registration order
    elements: Vec<DomElement>,
    index: HashMap<String, usize>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            ..Self::default()
        }
    }

    /// Creates the calculator page: output panel plus keypad buttons
    #[must_use]
    pub fn calculator(keypad: &Keypad) -> Self {
        let mut dom = Self::new();

        let previous = DomElement::new("div")
            .with_id("previous-operand")
            .with_attr(PREVIOUS_OPERAND_ATTR, "")
            .with_class("previous-operand");
        let current = DomElement::new("div")
            .with_id("current-operand")
            .with_attr(CURRENT_OPERAND_ATTR, "")
            .with_class("current-operand");
        let output = DomElement::new("div")
            .with_id("output")
            .with_class("output")
            .with_child(previous.clone())
            .with_child(current.clone());

        dom.root = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator-grid")
            .with_child(output)
            .with_child(keypad.create_keypad_element());

        dom.register_element(previous);
        dom.register_element(current);
        for btn in keypad.buttons() {
            dom.register_element(btn.to_element());
        }

        dom
    }

    /// Registers an element for ID lookup; elements without an ID are ignored
    pub fn register_element(&mut self, element: DomElement) {
        if element.id.is_empty() {
            return;
        }
        match self.index.get(&element.id) {
            Some(&slot) => self.elements[slot] = element,
            None => {
                self.index.insert(element.id.clone(), self.elements.len());
                self.elements.push(element);
            }
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.index.get(id).map(|&slot| &self.elements[slot])
    }

    /// First registered element carrying `attr`
    #[must_use]
    pub fn query_selector(&self, attr: &str) -> Option<&DomElement> {
        self.elements.iter().find(|e| e.has_attr(attr))
    }

    /// All registered elements carrying `attr`, in registration order
    #[must_use]
    pub fn query_selector_all(&self, attr: &str) -> Vec<&DomElement> {
        self.elements.iter().filter(|e| e.has_attr(attr)).collect()
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
        if let Some(&slot) = self.index.get(id) {
            self.elements[slot].set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.get_element(id).map(|e| e.text_content.as_str())
    }

    /// Text of the first element carrying `attr`
    #[must_use]
    pub fn text_of(&self, attr: &str) -> Option<&str> {
        self.query_selector(attr).map(|e| e.text_content.as_str())
    }

    fn set_text_of(&mut self, attr: &str, text: &str) {
        if let Some(element) = self.elements.iter_mut().find(|e| e.has_attr(attr)) {
            element.set_text(text);
        }
    }
}

impl DisplaySink for MockDom {
    fn write_display(&mut self, display: &DisplayText) {
        self.set_text_of(CURRENT_OPERAND_ATTR, &display.main);
        self.set_text_of(PREVIOUS_OPERAND_ATTR, &display.secondary);
    }
}
