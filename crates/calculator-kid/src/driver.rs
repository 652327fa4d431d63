//! Unified Calculator Driver
//!
//! Write the behaviour checks once, run them against every front end: the
//! bare engine and the DOM-backed game widget both implement
//! [`CalculatorDriver`].

use crate::core::{Action, Engine, Operator};

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use calculator_kid::driver::{verify_chaining, EngineDriver};
///
/// let mut driver = EngineDriver::new();
/// verify_chaining(&mut driver);
/// ```
pub trait CalculatorDriver {
    /// Forwards a single keypad action
    fn press(&mut self, action: Action);

    /// Main display text
    fn display(&self) -> String;

    /// Current score
    fn score(&self) -> u32;

    /// Pending-operation line, if any
    fn history_line(&self) -> Option<String>;

    /// Presses Clear
    fn clear(&mut self) {
        self.press(Action::Clear);
    }

    /// Presses a sequence written as keypad labels, e.g. `"3+5×2="`.
    ///
    /// `C` is Clear; whitespace and unknown characters are skipped.
    fn enter(&mut self, keys: &str) {
        for action in keys.chars().filter_map(key_action) {
            self.press(action);
        }
    }
}

/// Maps a keypad label character to its action
#[must_use]
pub fn key_action(key: char) -> Option<Action> {
    match key {
        '0'..='9' => key
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .map(Action::Digit),
        '.' => Some(Action::Decimal),
        '=' => Some(Action::Equals),
        'C' => Some(Action::Clear),
        other => Operator::from_symbol(other).map(Action::Operator),
    }
}

/// Driver over the bare engine
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: Engine,
}

impl EngineDriver {
    /// Creates a driver over a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver over an existing engine
    #[must_use]
    pub fn with_engine(engine: Engine) -> Self {
        Self { engine }
    }

    /// Returns a reference to the underlying engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, action: Action) {
        self.engine.apply(action);
    }

    fn display(&self) -> String {
        self.engine.state().display().to_string()
    }

    fn score(&self) -> u32 {
        self.engine.state().score()
    }

    fn history_line(&self) -> Option<String> {
        self.engine.state().history_line()
    }
}

// ===== Shared Behaviour Checks =====
// These checks work with ANY CalculatorDriver implementation

/// Verifies the four operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.enter("2+3=");
    assert_eq!(driver.display(), "5");
    driver.clear();

    driver.enter("10-4=");
    assert_eq!(driver.display(), "6");
    driver.clear();

    driver.enter("6×7=");
    assert_eq!(driver.display(), "42");
    driver.clear();

    driver.enter("20÷4=");
    assert_eq!(driver.display(), "5");
    driver.clear();

    driver.enter("3-8=");
    assert_eq!(driver.display(), "-5");
    driver.clear();
}

/// Verifies left-to-right chaining
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.enter("3+5×");
    assert_eq!(driver.display(), "8");
    assert_eq!(driver.history_line().as_deref(), Some("8 ×"));
    driver.enter("2=");
    assert_eq!(driver.display(), "16");
    driver.clear();

    driver.enter("10-2-3=");
    assert_eq!(driver.display(), "5");
    driver.clear();

    // Changing operator before typing replaces it
    driver.enter("9+×2=");
    assert_eq!(driver.display(), "18");
    driver.clear();
}

/// Verifies results are rounded for display
pub fn verify_rounding<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.enter("10÷3=");
    assert_eq!(driver.display(), "3.333333");
    driver.clear();

    driver.enter("0.1+0.2=");
    assert_eq!(driver.display(), "0.3");
    driver.clear();

    driver.enter("2÷3=");
    assert_eq!(driver.display(), "0.666667");
    driver.clear();
}

/// Verifies division by zero shows the marker and scores nothing
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    let before = driver.score();

    driver.enter("5÷0=");
    assert_eq!(driver.display(), "Error");
    assert_eq!(driver.score(), before);
    assert_eq!(driver.history_line(), None);

    // The next digit starts over
    driver.enter("7");
    assert_eq!(driver.display(), "7");
    driver.clear();
}

/// Verifies digit and decimal entry rules
pub fn verify_entry_rules<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.enter("007");
    assert_eq!(driver.display(), "7");
    driver.clear();

    driver.enter("1.2.3");
    assert_eq!(driver.display(), "1.23");
    driver.clear();

    driver.enter(".5");
    assert_eq!(driver.display(), "0.5");
    driver.clear();

    driver.enter("5+.");
    assert_eq!(driver.display(), "0.");
    driver.clear();

    // A point already on screen swallows the press, even after an operator
    driver.enter("1.5+.");
    assert_eq!(driver.display(), "1.5");
    driver.enter("5=");
    assert_eq!(driver.display(), "6.5");
    driver.clear();
}

/// Verifies scoring: points per successful Equals, kept across Clear
pub fn verify_scoring<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    let start = driver.score();

    // Nothing pending: no points
    driver.enter("4=");
    assert_eq!(driver.score(), start);

    driver.enter("C1+1=");
    assert_eq!(driver.score(), start + 10);

    // Chained evaluation does not score on its own
    driver.enter("C1+1+");
    assert_eq!(driver.score(), start + 10);

    driver.enter("1=");
    assert_eq!(driver.score(), start + 20);

    driver.clear();
    assert_eq!(driver.score(), start + 20);
    assert_eq!(driver.display(), "0");
}

/// Verifies the pending-operation line
pub fn verify_history_line<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.history_line(), None);

    driver.enter("12+");
    assert_eq!(driver.history_line().as_deref(), Some("12 +"));
    driver.enter("3");
    assert_eq!(driver.history_line().as_deref(), Some("12 +"));
    driver.enter("=");
    assert_eq!(driver.history_line(), None);

    driver.enter("2.5÷");
    assert_eq!(driver.history_line().as_deref(), Some("2.5 ÷"));
    driver.clear();
    assert_eq!(driver.history_line(), None);
}

/// Runs every shared check
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_rounding(driver);
    verify_division_by_zero(driver);
    verify_entry_rules(driver);
    verify_scoring(driver);
    verify_history_line(driver);
}
