//! Unified calculator driver
//!
//! Behaviour checks are written once against [`CalculatorDriver`] and run
//! against every front end: the bare [`Evaluator`] and, with the `tui`
//! feature, the terminal app through [`TuiDriver`].

use crate::core::{CalcResult, DisplayState, Evaluator, InputEvent};

/// Interface shared by everything that can be driven like the keypad
pub trait CalculatorDriver {
    /// Presses one button
    fn press(&mut self, event: InputEvent) -> DisplayState;

    /// Gets the text currently on the display
    fn display(&self) -> String;

    /// Presses a button by its label or alias (`"7"`, `"x"`, `"AC"`, ...)
    fn press_label(&mut self, label: &str) -> CalcResult<DisplayState> {
        let event = label.parse::<InputEvent>()?;
        Ok(self.press(event))
    }

    /// Presses a whitespace-separated sequence of keys
    ///
    /// Nothing is pressed if any token is unknown.
    fn press_sequence(&mut self, keys: &str) -> CalcResult<DisplayState> {
        let events = InputEvent::parse_sequence(keys)?;
        let mut state = None;
        for event in events {
            state = Some(self.press(event));
        }
        Ok(state.unwrap_or_else(|| self.snapshot()))
    }

    /// Resets the calculator
    fn clear_all(&mut self) -> DisplayState {
        self.press(InputEvent::ClearAll)
    }

    /// Returns the display without pressing anything
    fn snapshot(&self) -> DisplayState;
}

impl CalculatorDriver for Evaluator {
    fn press(&mut self, event: InputEvent) -> DisplayState {
        self.handle_input(event)
    }

    fn display(&self) -> String {
        Evaluator::display(self).to_string()
    }

    fn snapshot(&self) -> DisplayState {
        self.state()
    }
}

/// Terminal driver
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::{DisplayState, InputEvent};
    use crate::tui::{CalculatorApp, KeyAction};

    /// Drives the terminal app the way key presses would
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, event: InputEvent) -> DisplayState {
            self.app.apply(KeyAction::Press(event));
            self.app.state().clone()
        }

        fn display(&self) -> String {
            self.app.state().text.clone()
        }

        fn snapshot(&self) -> DisplayState {
            self.app.state().clone()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified behaviour checks =====
// These work with ANY CalculatorDriver implementation

fn expect_display<D: CalculatorDriver>(driver: &mut D, keys: &str, expected: &str) {
    driver.clear_all();
    let state = driver
        .press_sequence(keys)
        .unwrap_or_else(|e| panic!("keys {keys:?}: {e}"));
    assert_eq!(state.text, expected, "keys {keys:?}");
}

/// Verifies the four operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "5 + 3 =", "8");
    expect_display(driver, "1 0 - 4 =", "6");
    expect_display(driver, "6 x 7 =", "42");
    expect_display(driver, "2 0 ÷ 4 =", "5");
    expect_display(driver, "1 . 5 + 1 . 5 =", "3");
}

/// Verifies that a follow-on operator continues from the last result
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "5 + 3 =", "8");
    let state = driver.press_sequence("+ 2 =").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(state.text, "10");
}

/// Verifies the error state and its recovery
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "5 ÷ 0 =", "Error");
    let state = driver.press_sequence("7 8").unwrap_or_else(|e| panic!("{e}"));
    assert!(state.is_error());
    assert_eq!(driver.display(), "Error");
    assert_eq!(driver.clear_all().text, "0");
}

/// Verifies sign toggling
pub fn verify_toggle_sign<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "7 +/-", "-7");
    expect_display(driver, "7 +/- +/-", "7");
    expect_display(driver, "+/-", "0");
}

/// Verifies percent
pub fn verify_percent<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "5 0 %", "0.5");
    expect_display(driver, "5 + %", "Error");
}

/// Verifies clear-entry
pub fn verify_clear_entry<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "1 2 3 C", "12");
    expect_display(driver, "4 C", "0");
}

/// Verifies the nine-character entry limit
pub fn verify_entry_limit<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "9 8 7 6 5 4 3 2 1 0", "987654321");
}

/// Runs every behaviour check
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_division_by_zero(driver);
    verify_toggle_sign(driver);
    verify_percent(driver);
    verify_clear_entry(driver);
    verify_entry_limit(driver);
}
