//! Browser WASM bindings for the calculator game
//!
//! The page forwards clicks and key presses here and re-renders from the
//! getters. Haptics go through `navigator.vibrate`.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::core::{Action, Operator};
use crate::haptics::{HapticPattern, Haptics};
use crate::wasm::calculator::GameCalculator;
use crate::wasm::info;

/// Haptics backed by the Vibration API; silently does nothing without it
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigatorHaptics;

impl Haptics for NavigatorHaptics {
    fn vibrate(&self, pattern: &HapticPattern) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let navigator = window.navigator();
        let accepted = match pattern {
            HapticPattern::Pulse(ms) => navigator.vibrate_with_duration(*ms),
            HapticPattern::Sequence(durations) => {
                let array: js_sys::Array = durations.iter().map(|&ms| JsValue::from(ms)).collect();
                navigator.vibrate_with_pattern(&array)
            }
        };
        if !accepted {
            tracing::trace!(?pattern, "vibration rejected");
        }
    }
}

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    game: GameCalculator,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a new browser calculator
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        Self {
            game: GameCalculator::new().with_haptics(Box::new(NavigatorHaptics)),
        }
    }

    /// Main display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.game.display().to_string()
    }

    /// Current score
    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 {
        self.game.score()
    }

    /// Score badge text
    #[wasm_bindgen(getter, js_name = scoreText)]
    pub fn score_text(&self) -> String {
        self.game.score_text()
    }

    /// Pending-operation line; `undefined` when idle
    #[wasm_bindgen(getter, js_name = historyLine)]
    pub fn history_line(&self) -> Option<String> {
        self.game.history_line()
    }

    /// Whether the About & Privacy modal is shown
    #[wasm_bindgen(getter, js_name = infoOpen)]
    pub fn info_open(&self) -> bool {
        self.game.is_info_open()
    }

    /// Digit key
    pub fn digit(&mut self, n: u8) {
        self.game.press(Action::Digit(n));
    }

    /// Decimal point key
    pub fn decimal(&mut self) {
        self.game.press(Action::Decimal);
    }

    /// Operator key by symbol; returns false for unknown symbols
    pub fn operator(&mut self, symbol: char) -> bool {
        match Operator::from_symbol(symbol) {
            Some(op) => {
                self.game.press(Action::Operator(op));
                true
            }
            None => false,
        }
    }

    /// Equals key
    pub fn equals(&mut self) {
        self.game.press(Action::Equals);
    }

    /// Clear key
    pub fn clear(&mut self) {
        self.game.press(Action::Clear);
    }

    /// Handle a click by element ID
    #[wasm_bindgen(js_name = handleButton)]
    pub fn handle_button(&mut self, element_id: &str) -> bool {
        self.game.click(element_id)
    }

    /// Handle a keyboard key press
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.game.press_key(key)
    }

    /// Show the About & Privacy modal
    #[wasm_bindgen(js_name = openInfo)]
    pub fn open_info(&mut self) {
        self.game.open_info();
    }

    /// Hide the About & Privacy modal
    #[wasm_bindgen(js_name = closeInfo)]
    pub fn close_info(&mut self) {
        self.game.close_info();
    }

    /// Privacy policy link target
    #[wasm_bindgen(js_name = privacyUrl)]
    pub fn privacy_url() -> String {
        info::PRIVACY_URL.to_string()
    }

    /// State snapshot as JSON
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> String {
        self.game
            .state_json()
            .unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the calculator in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Calculator Kid WASM initialized".into());
}
