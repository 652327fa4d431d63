//! Calculator state: screen, pending operation, entry flag and score

use serde::{Deserialize, Serialize};

use crate::core::number::{format_number, parse_entry};
use crate::core::{CalcError, CalcResult, Operator};

/// What the main display currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Digits typed by the user, at most one decimal point
    Entry(String),
    /// A rounded evaluation result with its canonical text
    Result {
        /// Rounded numeric value
        value: f64,
        /// Canonical display text of `value`
        text: String,
    },
    /// Division by zero; holds the marker text shown to the user
    Error(String),
}

impl Default for Screen {
    fn default() -> Self {
        Self::Entry("0".to_string())
    }
}

impl Screen {
    /// Creates a result screen from an already rounded value
    #[must_use]
    pub fn result(value: f64) -> Self {
        Self::Result {
            value,
            text: format_number(value),
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Entry(text) | Self::Result { text, .. } | Self::Error(text) => text,
        }
    }

    /// Returns the numeric value of the screen
    pub fn value(&self) -> CalcResult<f64> {
        match self {
            Self::Entry(text) => parse_entry(text),
            Self::Result { value, .. } => Ok(*value),
            Self::Error(marker) => Err(CalcError::InvalidEntry(marker.clone())),
        }
    }

    /// Returns true if the error marker is shown
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// The operation awaiting its right operand.
///
/// Value and operator are set and cleared together.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Pending {
    /// No operation in progress
    #[default]
    Idle,
    /// Left operand captured and operator chosen
    Operation {
        /// Left operand
        value: f64,
        /// Operator to apply
        operator: Operator,
    },
}

impl Pending {
    /// Returns true if an operation is pending
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Operation { .. })
    }
}

/// Complete calculator state as observed by the presentation layer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculatorState {
    pub(crate) screen: Screen,
    pub(crate) pending: Pending,
    pub(crate) replace_on_next_digit: bool,
    pub(crate) score: u32,
}

/// Serializable view of [`CalculatorState`] for front ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Display text
    pub display: String,
    /// Pending left operand, if any
    pub pending_value: Option<f64>,
    /// Pending operator, if any
    pub pending_operator: Option<Operator>,
    /// Whether the next digit starts a new entry
    pub replace_on_next_digit: bool,
    /// Current score
    pub score: u32,
}

impl CalculatorState {
    /// Creates the session start state: `"0"`, idle, score 0
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the display text; never empty
    #[must_use]
    pub fn display(&self) -> &str {
        self.screen.text()
    }

    /// Returns the screen
    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Returns the pending operation
    #[must_use]
    pub fn pending(&self) -> Pending {
        self.pending
    }

    /// Returns the pending left operand
    #[must_use]
    pub fn pending_value(&self) -> Option<f64> {
        match self.pending {
            Pending::Operation { value, .. } => Some(value),
            Pending::Idle => None,
        }
    }

    /// Returns the pending operator
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        match self.pending {
            Pending::Operation { operator, .. } => Some(operator),
            Pending::Idle => None,
        }
    }

    /// Returns true if the next digit overwrites the display
    #[must_use]
    pub fn replace_on_next_digit(&self) -> bool {
        self.replace_on_next_digit
    }

    /// Returns the score
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns true if the error marker is shown
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.screen.is_error()
    }

    /// Secondary display line for a pending operation, e.g. `"3 +"`
    #[must_use]
    pub fn history_line(&self) -> Option<String> {
        match self.pending {
            Pending::Operation { value, operator } => {
                Some(format!("{} {}", format_number(value), operator.symbol()))
            }
            Pending::Idle => None,
        }
    }

    /// Returns a serializable snapshot
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            display: self.display().to_string(),
            pending_value: self.pending_value(),
            pending_operator: self.pending_operator(),
            replace_on_next_digit: self.replace_on_next_digit,
            score: self.score,
        }
    }
}
