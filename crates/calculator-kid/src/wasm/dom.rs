//! Mock DOM for WASM Testing
//!
//! DOM abstractions that let the widget be exercised natively, without a
//! browser or web-sys.

use std::collections::HashMap;

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq)]
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
    /// Whether element is visible
    pub visible: bool,
    /// Child elements
    pub children: Vec<DomElement>,
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
            visible: true,
            children: Vec::new(),
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

    /// Starts hidden
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Sets visibility
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Depth-first iterator over this element and its descendants
    pub fn descendants(&self) -> Box<dyn Iterator<Item = &DomElement> + '_> {
        Box::new(
            std::iter::once(self).chain(self.children.iter().flat_map(DomElement::descendants)),
        )
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
    /// Key press event
    KeyPress {
        /// The key that was pressed
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

    /// Creates a key press event
    #[must_use]
    pub fn key_press(key: &str) -> Self {
        Self::KeyPress {
            key: key.to_string(),
        }
    }
}

/// Element ids of the calculator page
pub mod ids {
    /// Page root
    pub const ROOT: &str = "calculator";
    /// Score badge
    pub const SCORE: &str = "calc-score";
    /// Secondary line showing the pending operation
    pub const HISTORY: &str = "calc-history";
    /// Main display
    pub const DISPLAY: &str = "calc-display";
    /// Keypad container
    pub const KEYPAD: &str = "calc-keypad";
    /// Info button in the top-right corner
    pub const INFO_BUTTON: &str = "btn-info";
    /// Info modal overlay
    pub const INFO_MODAL: &str = "info-modal";
    /// Close button inside the modal
    pub const INFO_CLOSE: &str = "btn-info-close";
}

/// Mock DOM for testing the calculator without a browser
#[derive(Debug)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
    /// Elements by ID for quick lookup
    elements: HashMap<String, DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            elements: HashMap::new(),
            event_history: Vec::new(),
        }
    }

    /// Creates the calculator page: header, display, keypad and the hidden
    /// info modal
    #[must_use]
    pub fn calculator() -> Self {
        use super::info::InfoModal;
        use super::keypad::GameKeypad;

        let mut dom = Self::new();

        let info_button = DomElement::new("button")
            .with_id(ids::INFO_BUTTON)
            .with_class("info-button")
            .with_attr("aria-label", "About & Privacy");

        let title = DomElement::new("h1")
            .with_class("title")
            .with_text("Calculator Kid!");

        let score = DomElement::new("span")
            .with_id(ids::SCORE)
            .with_class("score-badge")
            .with_text("Score: 0");

        let history = DomElement::new("span")
            .with_id(ids::HISTORY)
            .with_class("history-line")
            .hidden();

        let display = DomElement::new("span")
            .with_id(ids::DISPLAY)
            .with_class("display")
            .with_text("0");

        let keypad = GameKeypad::new().create_keypad_element();
        let modal = InfoModal::new().create_element();

        dom.root = DomElement::new("div")
            .with_id(ids::ROOT)
            .with_class("calculator-game")
            .with_child(info_button)
            .with_child(title)
            .with_child(score)
            .with_child(history)
            .with_child(display)
            .with_child(keypad)
            .with_child(modal);

        let registered: Vec<DomElement> = dom
            .root
            .descendants()
            .filter(|e| !e.id.is_empty())
            .cloned()
            .collect();
        for element in registered {
            dom.register_element(element);
        }

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
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

    /// Shows or hides an element by ID
    pub fn set_element_visible(&mut self, id: &str, visible: bool) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_visible(visible);
        }
    }

    /// Returns whether an element is visible; `None` if unknown
    #[must_use]
    pub fn is_element_visible(&self, id: &str) -> Option<bool> {
        self.elements.get(id).map(|e| e.visible)
    }

    /// Number of registered elements
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}
