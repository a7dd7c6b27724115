//! Terminal application state
//!
//! Holds no arithmetic of its own: every button press goes to the
//! [`Evaluator`] and the returned [`DisplayState`] is kept for rendering.

use crate::core::{DisplayState, Evaluator, InputEvent, Phase};
use crate::keypad::Keypad;

use super::input::KeyAction;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    evaluator: Evaluator,
    keypad: Keypad,
    state: DisplayState,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app
    #[must_use]
    pub fn new() -> Self {
        let evaluator = Evaluator::new();
        let state = evaluator.state();
        Self {
            evaluator,
            keypad: Keypad::new(),
            state,
            should_quit: false,
        }
    }

    /// Returns the latest display state
    #[must_use]
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Returns the keypad (with the last pressed button highlighted)
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the evaluator
    #[must_use]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies a key action
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(event) => self.press(event),
            KeyAction::ClearKey => self.press(self.state.clear_label.event()),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Presses the keypad button at `index`, as a mouse click would
    pub fn press_button(&mut self, index: usize) {
        if let Some(event) = self
            .keypad
            .get_button(index)
            .map(|btn| btn.resolve(&self.state))
        {
            self.press(event);
        }
    }

    fn press(&mut self, event: InputEvent) {
        self.keypad.highlight_event(event);
        self.state = self.evaluator.handle_input(event);
    }

    /// Returns the operation waiting for its second operand, e.g. `"12 +"`
    #[must_use]
    pub fn pending_expression(&self) -> Option<String> {
        match (self.state.phase, self.state.pending_operator) {
            (Phase::EnteringSecond, Some(op)) => {
                Some(format!("{} {op}", self.evaluator.first_operand()))
            }
            _ => None,
        }
    }
}
