//! WASM front end for the calculator game
//!
//! Everything except `browser` runs natively against a mock DOM, so the
//! widget is tested without a browser.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod dom;
mod driver;
pub mod info;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::{BrowserCalculator, NavigatorHaptics};
pub use calculator::GameCalculator;
pub use dom::{ids, DomElement, DomEvent, MockDom};
pub use driver::WasmDriver;
pub use info::{InfoModal, InfoSection};
pub use keypad::{label, ButtonVariant, GameKeypad, KeypadButtonDef};
