//! Game keypad
//!
//! Button layout, styling variants and keyboard mapping. Every button
//! forwards exactly one [`Action`] to the engine.

use crate::core::{Action, Operator};

use super::dom::{ids, DomElement};

/// Visual style of a keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Digits and the decimal point
    Number,
    /// The four operators
    Operation,
    /// Clear
    Danger,
    /// Equals
    Equals,
}

impl ButtonVariant {
    /// Classifies an action
    #[must_use]
    pub const fn for_action(action: Action) -> Self {
        match action {
            Action::Digit(_) | Action::Decimal => Self::Number,
            Action::Operator(_) => Self::Operation,
            Action::Clear => Self::Danger,
            Action::Equals => Self::Equals,
        }
    }

    /// CSS class applied to the button
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Number => "btn-number",
            Self::Operation => "btn-operation",
            Self::Danger => "btn-danger",
            Self::Equals => "btn-equals",
        }
    }
}

/// Text shown on a button
#[must_use]
pub fn label(action: Action) -> String {
    match action {
        Action::Digit(d) => d.to_string(),
        Action::Decimal => ".".to_string(),
        Action::Operator(op) => op.symbol().to_string(),
        Action::Equals => "=".to_string(),
        Action::Clear => "CLEAR".to_string(),
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: Action,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// First grid column (0-indexed)
    pub col: usize,
    /// Number of columns covered
    pub col_span: usize,
    /// Styling
    pub variant: ButtonVariant,
}

impl KeypadButtonDef {
    /// Creates a single-column button
    #[must_use]
    pub fn new(action: Action, row: usize, col: usize) -> Self {
        Self::spanning(action, row, col, 1)
    }

    /// Creates a button covering `col_span` columns
    #[must_use]
    pub fn spanning(action: Action, row: usize, col: usize, col_span: usize) -> Self {
        let id = match action {
            Action::Digit(d) => format!("btn-{d}"),
            Action::Decimal => "btn-decimal".to_string(),
            Action::Operator(op) => format!("btn-{}", op.name()),
            Action::Equals => "btn-equals".to_string(),
            Action::Clear => "btn-clear".to_string(),
        };
        Self {
            action,
            id,
            row,
            col,
            col_span,
            variant: ButtonVariant::for_action(action),
        }
    }

    /// Returns true if the button covers the cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.col_span).contains(&col)
    }
}

/// Keypad layout definition
/// Layout:
/// ```text
/// [     CLEAR     ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [    0    ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct GameKeypad {
    buttons: Vec<KeypadButtonDef>,
    cols: usize,
    rows: usize,
}

impl Default for GameKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl GameKeypad {
    /// Creates the game keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            KeypadButtonDef::spanning(Action::Clear, 0, 0, 3),
            KeypadButtonDef::new(Action::Operator(Operator::Divide), 0, 3),
            KeypadButtonDef::new(Action::Digit(7), 1, 0),
            KeypadButtonDef::new(Action::Digit(8), 1, 1),
            KeypadButtonDef::new(Action::Digit(9), 1, 2),
            KeypadButtonDef::new(Action::Operator(Operator::Multiply), 1, 3),
            KeypadButtonDef::new(Action::Digit(4), 2, 0),
            KeypadButtonDef::new(Action::Digit(5), 2, 1),
            KeypadButtonDef::new(Action::Digit(6), 2, 2),
            KeypadButtonDef::new(Action::Operator(Operator::Subtract), 2, 3),
            KeypadButtonDef::new(Action::Digit(1), 3, 0),
            KeypadButtonDef::new(Action::Digit(2), 3, 1),
            KeypadButtonDef::new(Action::Digit(3), 3, 2),
            KeypadButtonDef::new(Action::Operator(Operator::Add), 3, 3),
            KeypadButtonDef::spanning(Action::Digit(0), 4, 0, 2),
            KeypadButtonDef::new(Action::Decimal, 4, 2),
            KeypadButtonDef::new(Action::Equals, 4, 3),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button that performs an action
    #[must_use]
    pub fn find_button_by_action(&self, action: Action) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Creates DOM elements for all keypad buttons
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&label(btn.action))
                    .with_class("keypad-btn")
                    .with_class(btn.variant.css_class())
                    .with_attr("data-row", &btn.row.to_string())
                    .with_attr("data-col", &btn.col.to_string())
                    .with_attr("data-col-span", &btn.col_span.to_string())
            })
            .collect()
    }

    /// Creates a keypad container element with all buttons
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        self.create_dom_elements().into_iter().fold(
            DomElement::new("div").with_id(ids::KEYPAD).with_class("keypad"),
            DomElement::with_child,
        )
    }

    /// Processes a button click event and returns the action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Action> {
        self.find_button_by_id(element_id).map(|btn| btn.action)
    }

    /// Maps a keyboard key to an action
    #[must_use]
    pub fn key_to_action(key: &str) -> Option<Action> {
        match key {
            "." | "," => return Some(Action::Decimal),
            "Enter" | "=" => return Some(Action::Equals),
            "Escape" | "Delete" | "c" | "C" => return Some(Action::Clear),
            _ => {}
        }
        let mut chars = key.chars();
        let ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        if let Some(d) = ch.to_digit(10) {
            return u8::try_from(d).ok().map(Action::Digit);
        }
        Operator::from_symbol(ch).map(Action::Operator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== ButtonVariant tests =====

    #[test]
    fn test_variant_for_action() {
        assert_eq!(ButtonVariant::for_action(Action::Digit(1)), ButtonVariant::Number);
        assert_eq!(ButtonVariant::for_action(Action::Decimal), ButtonVariant::Number);
        assert_eq!(
            ButtonVariant::for_action(Action::Operator(Operator::Add)),
            ButtonVariant::Operation
        );
        assert_eq!(ButtonVariant::for_action(Action::Clear), ButtonVariant::Danger);
        assert_eq!(ButtonVariant::for_action(Action::Equals), ButtonVariant::Equals);
    }

    #[test]
    fn test_variant_css_classes_distinct() {
        let classes: std::collections::HashSet<_> = [
            ButtonVariant::Number,
            ButtonVariant::Operation,
            ButtonVariant::Danger,
            ButtonVariant::Equals,
        ]
        .iter()
        .map(|v| v.css_class())
        .collect();
        assert_eq!(classes.len(), 4);
    }

    // ===== label tests =====

    #[test]
    fn test_labels() {
        assert_eq!(label(Action::Digit(5)), "5");
        assert_eq!(label(Action::Decimal), ".");
        assert_eq!(label(Action::Operator(Operator::Multiply)), "×");
        assert_eq!(label(Action::Operator(Operator::Divide)), "÷");
        assert_eq!(label(Action::Equals), "=");
        assert_eq!(label(Action::Clear), "CLEAR");
    }

    // ===== KeypadButtonDef tests =====

    #[test]
    fn test_button_def_ids() {
        assert_eq!(KeypadButtonDef::new(Action::Digit(5), 2, 1).id, "btn-5");
        assert_eq!(KeypadButtonDef::new(Action::Decimal, 4, 2).id, "btn-decimal");
        assert_eq!(KeypadButtonDef::new(Action::Equals, 4, 3).id, "btn-equals");
        assert_eq!(KeypadButtonDef::new(Action::Clear, 0, 0).id, "btn-clear");
        assert_eq!(
            KeypadButtonDef::new(Action::Operator(Operator::Add), 3, 3).id,
            "btn-plus"
        );
        assert_eq!(
            KeypadButtonDef::new(Action::Operator(Operator::Subtract), 2, 3).id,
            "btn-minus"
        );
        assert_eq!(
            KeypadButtonDef::new(Action::Operator(Operator::Multiply), 1, 3).id,
            "btn-times"
        );
        assert_eq!(
            KeypadButtonDef::new(Action::Operator(Operator::Divide), 0, 3).id,
            "btn-divide"
        );
    }

    #[test]
    fn test_button_def_covers_span() {
        let clear = KeypadButtonDef::spanning(Action::Clear, 0, 0, 3);
        assert!(clear.covers(0, 0));
        assert!(clear.covers(0, 2));
        assert!(!clear.covers(0, 3));
        assert!(!clear.covers(1, 0));
    }

    // ===== GameKeypad tests =====

    #[test]
    fn test_keypad_shape() {
        let keypad = GameKeypad::default();
        assert_eq!(keypad.button_count(), 17);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_keypad_every_cell_covered_once() {
        let keypad = GameKeypad::new();
        let (rows, cols) = keypad.dimensions();
        for row in 0..rows {
            for col in 0..cols {
                let covering = keypad.buttons().iter().filter(|b| b.covers(row, col)).count();
                assert_eq!(covering, 1, "cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_keypad_layout() {
        let keypad = GameKeypad::new();
        let at = |r, c| keypad.get_button_at(r, c).map(|b| b.action);
        assert_eq!(at(0, 1), Some(Action::Clear));
        assert_eq!(at(0, 3), Some(Action::Operator(Operator::Divide)));
        assert_eq!(at(1, 0), Some(Action::Digit(7)));
        assert_eq!(at(1, 3), Some(Action::Operator(Operator::Multiply)));
        assert_eq!(at(2, 3), Some(Action::Operator(Operator::Subtract)));
        assert_eq!(at(3, 2), Some(Action::Digit(3)));
        assert_eq!(at(3, 3), Some(Action::Operator(Operator::Add)));
        assert_eq!(at(4, 1), Some(Action::Digit(0)));
        assert_eq!(at(4, 2), Some(Action::Decimal));
        assert_eq!(at(4, 3), Some(Action::Equals));
    }

    #[test]
    fn test_keypad_get_button_at_out_of_bounds() {
        let keypad = GameKeypad::new();
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_keypad_all_digits_present() {
        let keypad = GameKeypad::new();
        for d in 0..=9 {
            assert!(keypad.find_button_by_action(Action::Digit(d)).is_some());
        }
        for op in Operator::ALL {
            assert!(keypad.find_button_by_action(Action::Operator(op)).is_some());
        }
    }

    #[test]
    fn test_keypad_ids_unique() {
        let keypad = GameKeypad::new();
        let ids: std::collections::HashSet<_> = keypad.buttons().iter().map(|b| &b.id).collect();
        assert_eq!(ids.len(), keypad.button_count());
    }

    #[test]
    fn test_keypad_handle_click() {
        let keypad = GameKeypad::new();
        assert_eq!(keypad.handle_click("btn-7"), Some(Action::Digit(7)));
        assert_eq!(
            keypad.handle_click("btn-divide"),
            Some(Action::Operator(Operator::Divide))
        );
        assert_eq!(keypad.handle_click("btn-info"), None);
    }

    #[test]
    fn test_keypad_dom_elements() {
        let keypad = GameKeypad::new();
        let elements = keypad.create_dom_elements();
        assert_eq!(elements.len(), 17);
        let clear = elements.iter().find(|e| e.id == "btn-clear").unwrap();
        assert_eq!(clear.text_content, "CLEAR");
        assert!(clear.has_class("btn-danger"));
        assert_eq!(clear.get_attr("data-col-span"), Some("3"));
        let zero = elements.iter().find(|e| e.id == "btn-0").unwrap();
        assert_eq!(zero.get_attr("data-col-span"), Some("2"));
        assert!(zero.has_class("btn-number"));
    }

    #[test]
    fn test_keypad_container() {
        let container = GameKeypad::new().create_keypad_element();
        assert_eq!(container.id, ids::KEYPAD);
        assert!(container.has_class("keypad"));
        assert_eq!(container.children.len(), 17);
    }

    // ===== key_to_action tests =====

    #[test]
    fn test_key_to_action_digits() {
        for d in 0..=9u8 {
            assert_eq!(
                GameKeypad::key_to_action(&d.to_string()),
                Some(Action::Digit(d))
            );
        }
    }

    #[test]
    fn test_key_to_action_operators() {
        assert_eq!(
            GameKeypad::key_to_action("+"),
            Some(Action::Operator(Operator::Add))
        );
        assert_eq!(
            GameKeypad::key_to_action("-"),
            Some(Action::Operator(Operator::Subtract))
        );
        assert_eq!(
            GameKeypad::key_to_action("*"),
            Some(Action::Operator(Operator::Multiply))
        );
        assert_eq!(
            GameKeypad::key_to_action("/"),
            Some(Action::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_key_to_action_special() {
        assert_eq!(GameKeypad::key_to_action("."), Some(Action::Decimal));
        assert_eq!(GameKeypad::key_to_action("Enter"), Some(Action::Equals));
        assert_eq!(GameKeypad::key_to_action("="), Some(Action::Equals));
        assert_eq!(GameKeypad::key_to_action("Escape"), Some(Action::Clear));
        assert_eq!(GameKeypad::key_to_action("c"), Some(Action::Clear));
    }

    #[test]
    fn test_key_to_action_unknown() {
        assert_eq!(GameKeypad::key_to_action("a"), None);
        assert_eq!(GameKeypad::key_to_action("F1"), None);
        assert_eq!(GameKeypad::key_to_action("12"), None);
        assert_eq!(GameKeypad::key_to_action(""), None);
        assert_eq!(GameKeypad::key_to_action("^"), None);
    }
}
