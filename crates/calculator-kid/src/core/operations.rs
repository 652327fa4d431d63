//! The four keypad operators and the single evaluation routine shared by
//! Equals and operator chaining.

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Type-safe operator enum - compile-time guarantee of valid operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad order (top to bottom)
    pub const ALL: [Operator; 4] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    /// Returns the operator symbol as printed on the keypad
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Parses a keypad or keyboard symbol.
    ///
    /// Accepts the keypad glyphs as well as their ASCII and typographic
    /// stand-ins (`*`, `/`, `−`).
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '×' | '*' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Short name used for element ids
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divide",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Applies `operator` to `(lhs, rhs)`.
///
/// The only failure is division by exactly zero; rounding for display is
/// left to the caller.
pub fn evaluate(lhs: f64, operator: Operator, rhs: f64) -> CalcResult<f64> {
    let result = match operator {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide => {
            if rhs == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            lhs / rhs
        }
    };
    tracing::trace!(lhs, rhs, op = operator.symbol(), result, "evaluated");
    Ok(result)
}
