//! WASM Driver - Unified Testing Interface
//!
//! Implements [`CalculatorDriver`] by clicking keypad buttons in the mock DOM
//! and reading the rendered text back, so the shared checks also cover DOM
//! synchronisation.

use super::calculator::GameCalculator;
use super::dom::{ids, DomEvent, MockDom};
use crate::core::Action;
use crate::driver::CalculatorDriver;

/// WASM Driver wrapping the game widget and a mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    calculator: GameCalculator,
    dom: MockDom,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver over a fresh widget
    #[must_use]
    pub fn new() -> Self {
        Self::with_calculator(GameCalculator::new())
    }

    /// Creates a driver over an existing widget
    #[must_use]
    pub fn with_calculator(calculator: GameCalculator) -> Self {
        let mut driver = Self {
            calculator,
            dom: MockDom::calculator(),
        };
        driver.sync_dom();
        driver
    }

    /// Returns a reference to the widget
    #[must_use]
    pub fn calculator(&self) -> &GameCalculator {
        &self.calculator
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Simulates a click on an element
    pub fn click(&mut self, element_id: &str) -> bool {
        self.dom.dispatch_event(DomEvent::click(element_id));
        let handled = self.calculator.click(element_id);
        self.sync_dom();
        handled
    }

    /// Simulates a key press
    pub fn press_key(&mut self, key: &str) -> bool {
        self.dom.dispatch_event(DomEvent::key_press(key));
        let handled = self.calculator.press_key(key);
        self.sync_dom();
        handled
    }

    /// Synchronizes DOM state with widget state
    fn sync_dom(&mut self) {
        let display = self.calculator.display().to_string();
        self.dom.set_element_text(ids::DISPLAY, &display);

        let score = self.calculator.score_text();
        self.dom.set_element_text(ids::SCORE, &score);

        let history = self.calculator.history_line();
        self.dom
            .set_element_text(ids::HISTORY, history.as_deref().unwrap_or_default());
        self.dom.set_element_visible(ids::HISTORY, history.is_some());

        self.dom
            .set_element_visible(ids::INFO_MODAL, self.calculator.is_info_open());
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, action: Action) {
        let id = self
            .calculator
            .keypad()
            .find_button_by_action(action)
            .map(|button| button.id.clone());
        match id {
            Some(id) => {
                self.click(&id);
            }
            None => tracing::warn!(?action, "no keypad button for action"),
        }
    }

    fn display(&self) -> String {
        self.dom
            .get_element_text(ids::DISPLAY)
            .unwrap_or_default()
            .to_string()
    }

    fn score(&self) -> u32 {
        self.dom
            .get_element_text(ids::SCORE)
            .and_then(|text| text.strip_prefix("Score: "))
            .and_then(|n| n.parse().ok())
            .unwrap_or_default()
    }

    fn history_line(&self) -> Option<String> {
        match self.dom.is_element_visible(ids::HISTORY) {
            Some(true) => self.dom.get_element_text(ids::HISTORY).map(str::to_string),
            _ => None,
        }
    }
}
