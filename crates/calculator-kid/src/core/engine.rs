//! Calculator engine: the five keypad actions over [`CalculatorState`]
//!
//! Every action is total. Errors from evaluation become the error marker
//! on screen and never reach the caller.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{ConfigError, GameConfig};
use crate::core::number::round_to;
use crate::core::operations::evaluate;
use crate::core::state::{CalculatorState, Pending, Screen};
use crate::core::{CalcResult, Operator};

/// A single user action forwarded by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "lowercase")]
pub enum Action {
    /// Digit key 0-9
    Digit(u8),
    /// Decimal point key
    Decimal,
    /// One of the four operator keys
    Operator(Operator),
    /// Equals key
    Equals,
    /// Clear key
    Clear,
}

/// The arithmetic input state machine
#[derive(Debug, Clone, Default)]
pub struct Engine {
    state: CalculatorState,
    config: GameConfig,
}

impl Engine {
    /// Creates an engine in the session start state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the configuration fails
    /// [`GameConfig::validate`].
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: CalculatorState::new(),
            config,
        })
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the configuration
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Dispatches any action
    pub fn apply(&mut self, action: Action) -> &CalculatorState {
        match action {
            Action::Digit(n) => self.digit(n),
            Action::Decimal => self.decimal_point(),
            Action::Operator(op) => self.operator(op),
            Action::Equals => self.equals(),
            Action::Clear => self.clear(),
        }
    }

    /// Digit press. Values above 9 are ignored.
    pub fn digit(&mut self, n: u8) -> &CalculatorState {
        let Some(ch) = char::from_digit(u32::from(n), 10) else {
            warn!(digit = n, "ignoring out-of-range digit");
            return &self.state;
        };
        let limit = self.config.max_entry_len;
        let state = &mut self.state;

        if state.replace_on_next_digit {
            state.screen = Screen::Entry(ch.to_string());
            state.replace_on_next_digit = false;
        } else {
            match &mut state.screen {
                Screen::Entry(text) if text == "0" => *text = ch.to_string(),
                Screen::Entry(text) => {
                    if limit.is_some_and(|max| text.len() >= max) {
                        warn!(len = text.len(), "entry length limit reached");
                        return &self.state;
                    }
                    text.push(ch);
                }
                // Results and the marker always arm replace; start over regardless
                Screen::Result { .. } | Screen::Error(_) => {
                    state.screen = Screen::Entry(ch.to_string());
                }
            }
        }

        debug!(digit = n, display = self.state.display(), "digit");
        &self.state
    }

    /// Decimal point press.
    ///
    /// Ignored while the display already shows a point, even when the next
    /// digit would replace it. Otherwise starts a fresh `"0."` entry when
    /// replace is armed, or appends a point to the typed entry.
    pub fn decimal_point(&mut self) -> &CalculatorState {
        if self.state.display().contains('.') {
            debug!(display = self.state.display(), "decimal point ignored");
            return &self.state;
        }
        let limit = self.config.max_entry_len;
        let state = &mut self.state;

        if state.replace_on_next_digit {
            state.screen = Screen::Entry("0.".to_string());
            state.replace_on_next_digit = false;
        } else {
            match &mut state.screen {
                Screen::Entry(text) => {
                    if limit.is_some_and(|max| text.len() >= max) {
                        warn!(len = text.len(), "entry length limit reached");
                        return &self.state;
                    }
                    text.push('.');
                }
                Screen::Result { .. } | Screen::Error(_) => {
                    state.screen = Screen::Entry("0.".to_string());
                }
            }
        }

        debug!(display = self.state.display(), "decimal point");
        &self.state
    }

    /// Operator press, with chaining.
    ///
    /// A pending operation whose right operand has been typed is evaluated
    /// first (without scoring) and its result becomes the new left operand.
    pub fn operator(&mut self, op: Operator) -> &CalculatorState {
        let pending = self.state.pending;
        match pending {
            Pending::Operation { value, operator } if !self.state.replace_on_next_digit => {
                let result = match self.evaluate_pending(value, operator) {
                    Ok(result) => result,
                    Err(err) => {
                        warn!(
                            %err,
                            lhs = value,
                            op = operator.symbol(),
                            dropped = op.symbol(),
                            "chained evaluation failed; operator dropped"
                        );
                        return &self.state;
                    }
                };
                self.state.pending = Pending::Operation {
                    value: result,
                    operator: op,
                };
            }
            Pending::Operation { value, .. } => {
                self.state.pending = Pending::Operation {
                    value,
                    operator: op,
                };
            }
            Pending::Idle => {
                let value = match self.state.screen.value() {
                    Ok(value) => value,
                    Err(_) => {
                        self.state.screen = Screen::default();
                        0.0
                    }
                };
                self.state.pending = Pending::Operation {
                    value,
                    operator: op,
                };
            }
        }
        self.state.replace_on_next_digit = true;

        debug!(
            op = op.symbol(),
            pending = ?self.state.pending_value(),
            display = self.state.display(),
            "operator"
        );
        &self.state
    }

    /// Equals press. A no-op when nothing is pending.
    pub fn equals(&mut self) -> &CalculatorState {
        let Pending::Operation { value, operator } = self.state.pending else {
            debug!("equals with nothing pending");
            return &self.state;
        };
        match self.evaluate_pending(value, operator) {
            Ok(_) => {
                self.state.score = self
                    .state
                    .score
                    .saturating_add(self.config.points_per_evaluation);
            }
            Err(err) => warn!(%err, lhs = value, op = operator.symbol(), "evaluation failed"),
        }

        debug!(
            display = self.state.display(),
            score = self.state.score,
            "equals"
        );
        &self.state
    }

    /// Clear press. Keeps the score.
    pub fn clear(&mut self) -> &CalculatorState {
        self.state.screen = Screen::default();
        self.state.pending = Pending::Idle;
        self.state.replace_on_next_digit = false;

        debug!(score = self.state.score, "clear");
        &self.state
    }

    /// Resolves the pending `value operator` against the display.
    ///
    /// Shared by Equals and operator chaining. Always leaves the engine idle
    /// with replace armed; returns the rounded result, or the error behind
    /// the marker now on screen. Callers log the failure.
    fn evaluate_pending(&mut self, value: f64, operator: Operator) -> CalcResult<f64> {
        let outcome = self
            .state
            .screen
            .value()
            .and_then(|rhs| evaluate(value, operator, rhs));

        self.state.pending = Pending::Idle;
        self.state.replace_on_next_digit = true;

        match outcome {
            Ok(raw) => {
                let rounded = round_to(raw, self.config.display_precision);
                self.state.screen = Screen::result(rounded);
                Ok(rounded)
            }
            Err(err) => {
                self.state.screen = Screen::Error(self.config.error_marker.clone());
                Err(err)
            }
        }
    }
}
