//! Core calculator module: the arithmetic input state machine
//!
//! Error prevention: the pending operation and the screen are tagged unions,
//! so invalid combinations cannot be represented.

mod engine;
mod number;
mod operations;
mod state;

pub use engine::{Action, Engine};
pub use number::{format_number, parse_entry, round_to};
pub use operations::{evaluate, Operator};
pub use state::{CalculatorState, Pending, Screen, StateSnapshot};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// These never cross the action API: the engine turns them into the error
/// marker on screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by exactly zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// The screen does not hold a number
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),
}
