//! Game calculator widget
//!
//! Binds the engine to the presentation concerns: haptic feedback on every
//! press, the score badge, the pending-operation line and the info modal.

use tracing::debug;

use crate::config::{ConfigError, GameConfig};
use crate::core::{Action, CalculatorState, Engine};
use crate::haptics::{HapticPattern, Haptics, NoHaptics};

use super::dom::ids;
use super::info::InfoModal;
use super::keypad::GameKeypad;

/// Browser-ready calculator game
#[derive(Debug)]
pub struct GameCalculator {
    engine: Engine,
    keypad: GameKeypad,
    info: InfoModal,
    haptics: Box<dyn Haptics>,
}

impl Default for GameCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl GameCalculator {
    /// Creates a calculator with default scoring and no haptics
    #[must_use]
    pub fn new() -> Self {
        Self::with_engine(Engine::new())
    }

    /// Creates a calculator with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the configuration fails
    /// [`GameConfig::validate`].
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        Engine::with_config(config).map(Self::with_engine)
    }

    fn with_engine(engine: Engine) -> Self {
        Self {
            engine,
            keypad: GameKeypad::new(),
            info: InfoModal::new(),
            haptics: Box::new(NoHaptics),
        }
    }

    /// Replaces the haptics sink
    #[must_use]
    pub fn with_haptics(mut self, haptics: Box<dyn Haptics>) -> Self {
        self.haptics = haptics;
        self
    }

    /// Vibrates, then forwards the action to the engine
    pub fn press(&mut self, action: Action) -> &CalculatorState {
        self.haptics.vibrate(&HapticPattern::for_action(action));
        self.engine.apply(action)
    }

    /// Handles a keyboard key; returns false for unmapped keys
    pub fn press_key(&mut self, key: &str) -> bool {
        match GameKeypad::key_to_action(key) {
            Some(action) => {
                self.press(action);
                true
            }
            None => {
                debug!(key, "unmapped key");
                false
            }
        }
    }

    /// Handles a click on any page element; returns false if it was inert
    pub fn click(&mut self, element_id: &str) -> bool {
        match element_id {
            ids::INFO_BUTTON => {
                self.open_info();
                true
            }
            ids::INFO_CLOSE => {
                self.close_info();
                true
            }
            _ => match self.keypad.handle_click(element_id) {
                Some(action) => {
                    self.press(action);
                    true
                }
                None => false,
            },
        }
    }

    /// Opens the About & Privacy modal
    pub fn open_info(&mut self) {
        self.haptics.vibrate(&HapticPattern::info_button());
        self.info.open();
    }

    /// Closes the About & Privacy modal
    pub fn close_info(&mut self) {
        self.info.close();
    }

    /// Returns true while the modal is shown
    #[must_use]
    pub fn is_info_open(&self) -> bool {
        self.info.is_open()
    }

    /// Engine state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        self.engine.state()
    }

    /// The keypad layout
    #[must_use]
    pub fn keypad(&self) -> &GameKeypad {
        &self.keypad
    }

    /// The info modal
    #[must_use]
    pub fn info(&self) -> &InfoModal {
        &self.info
    }

    /// Main display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.state().display()
    }

    /// Current score
    #[must_use]
    pub fn score(&self) -> u32 {
        self.engine.state().score()
    }

    /// Score badge text
    #[must_use]
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score())
    }

    /// Pending-operation line, if an operation is pending
    #[must_use]
    pub fn history_line(&self) -> Option<String> {
        self.engine.state().history_line()
    }

    /// State snapshot as JSON
    pub fn state_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.engine.state().snapshot())
    }
}
