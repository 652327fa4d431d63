//! Calculator Kid - a game-like calculator for children
//!
//! A four-function calculator that awards points for every completed
//! calculation. The arithmetic lives in a small input state machine
//! ([`core::Engine`]); the game widget, keypad, haptics and the
//! About & Privacy modal sit on top of it in [`wasm`].
//!
//! # Example
//!
//! ```rust
//! use calculator_kid::prelude::*;
//!
//! let mut engine = Engine::new();
//! for action in [
//!     Action::Digit(3),
//!     Action::Operator(Operator::Add),
//!     Action::Digit(5),
//!     Action::Operator(Operator::Multiply),
//!     Action::Digit(2),
//!     Action::Equals,
//! ] {
//!     engine.apply(action);
//! }
//!
//! // Operators chain left to right: (3 + 5) × 2
//! assert_eq!(engine.state().display(), "16");
//! assert_eq!(engine.state().score(), 10);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod haptics;

/// WASM module - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigError, GameConfig};
    pub use crate::core::{
        format_number, Action, CalcError, CalcResult, CalculatorState, Engine, Operator, Pending,
        Screen, StateSnapshot,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::haptics::{HapticPattern, Haptics, NoHaptics, RecordingHaptics};
    pub use crate::wasm::{DomElement, DomEvent, GameCalculator, GameKeypad, MockDom, WasmDriver};

    #[cfg(feature = "wasm")]
    pub use crate::wasm::{BrowserCalculator, NavigatorHaptics};
}
