//! Keypad entry state machine
//!
//! The evaluator owns the display buffer, both operand strings and the
//! pending operator. Every button press goes through [`Evaluator::handle_input`]
//! and is handled to completion before the next one.
//!
//! Invariant: the buffer mirrors the operand of the current [`Phase`]. The
//! placeholders `"0"` and `""` stand for an operand that has not been typed
//! yet, and the next digit replaces them.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::format::{format_result, ERROR_MARKER, MAX_DISPLAY_LEN};
use crate::core::{parse_operand, CalcError, CalcResult, InputEvent, Operator};

/// Which operand digit input currently targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Typing the first operand (also the state right after `=`)
    #[default]
    EnteringFirst,
    /// An operator was accepted; typing the second operand
    EnteringSecond,
    /// Division by zero or an unparsable number; only clear-all leaves it
    Error,
}

/// Label of the shared clear key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearLabel {
    /// "AC": the key resets everything
    #[default]
    AllClear,
    /// "C": the key removes the last typed character
    Clear,
}

impl ClearLabel {
    /// Text printed on the key
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AllClear => "AC",
            Self::Clear => "C",
        }
    }

    /// Event the key dispatches while showing this label
    #[must_use]
    pub const fn event(&self) -> InputEvent {
        match self {
            Self::AllClear => InputEvent::ClearAll,
            Self::Clear => InputEvent::ClearEntry,
        }
    }
}

/// Snapshot handed back after every event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Text on the display
    pub text: String,
    /// Phase after the event
    pub phase: Phase,
    /// Label of the clear key
    pub clear_label: ClearLabel,
    /// Operator waiting for its second operand
    pub pending_operator: Option<Operator>,
}

impl DisplayState {
    /// Returns true if the display shows the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.phase == Phase::Error
    }
}

/// The calculator state machine
#[derive(Debug, Clone)]
pub struct Evaluator {
    buffer: String,
    first: String,
    second: String,
    operator: Option<Operator>,
    phase: Phase,
    clear_label: ClearLabel,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator showing "0" with nothing entered
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: "0".to_string(),
            first: String::new(),
            second: String::new(),
            operator: None,
            phase: Phase::EnteringFirst,
            clear_label: ClearLabel::AllClear,
        }
    }

    /// Applies one button press and returns the resulting display
    pub fn handle_input(&mut self, event: InputEvent) -> DisplayState {
        debug!(%event, phase = ?self.phase, buffer = %self.buffer, "input");

        if self.phase == Phase::Error {
            if event == InputEvent::ClearAll {
                self.reset();
            } else {
                trace!(%event, "ignored while in error");
            }
            return self.state();
        }

        let accepted_entry = match event {
            InputEvent::Digit(d) => self.push_digit(d),
            InputEvent::Point => self.push_point(),
            InputEvent::Operator(op) => {
                self.apply_operator(op);
                false
            }
            InputEvent::Equals => {
                self.equals();
                false
            }
            InputEvent::ClearAll => {
                self.reset();
                false
            }
            InputEvent::ClearEntry => {
                self.clear_entry();
                false
            }
            InputEvent::ToggleSign => {
                self.toggle_sign();
                false
            }
            InputEvent::Percent => {
                self.percent();
                false
            }
        };

        if accepted_entry {
            self.clear_label = ClearLabel::Clear;
        } else if !event.is_entry() {
            self.clear_label = ClearLabel::AllClear;
        }

        self.state()
    }

    /// Returns the current display snapshot
    #[must_use]
    pub fn state(&self) -> DisplayState {
        DisplayState {
            text: self.buffer.clone(),
            phase: self.phase,
            clear_label: if self.phase == Phase::Error {
                ClearLabel::AllClear
            } else {
                self.clear_label
            },
            pending_operator: self.operator,
        }
    }

    /// Text currently on the display
    #[must_use]
    pub fn display(&self) -> &str {
        &self.buffer
    }

    /// Current entry phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// First operand text, empty when unset
    #[must_use]
    pub fn first_operand(&self) -> &str {
        &self.first
    }

    /// Second operand text, empty when unset
    #[must_use]
    pub fn second_operand(&self) -> &str {
        &self.second
    }

    /// Operator waiting for `=`
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Returns true while in the error phase
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.phase == Phase::Error
    }

    fn active_operand(&mut self) -> &mut String {
        match self.phase {
            Phase::EnteringSecond => &mut self.second,
            Phase::EnteringFirst | Phase::Error => &mut self.first,
        }
    }

    fn is_placeholder(&self) -> bool {
        self.buffer.is_empty() || self.buffer == "0"
    }

    /// A result in scientific notation is shown, not edited
    fn holds_exponent(&self) -> bool {
        self.buffer.contains('e')
    }

    fn discard_exponent_result(&mut self) {
        if self.holds_exponent() {
            trace!(buffer = %self.buffer, "starting over from a scientific result");
            self.buffer.clear();
            self.active_operand().clear();
        }
    }

    fn push_digit(&mut self, d: u8) -> bool {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            trace!(d, "not a decimal digit");
            return false;
        };
        self.discard_exponent_result();
        if self.buffer.chars().count() >= MAX_DISPLAY_LEN {
            trace!("display full");
            return false;
        }
        if self.is_placeholder() {
            self.buffer.clear();
            self.active_operand().clear();
        }
        self.buffer.push(c);
        self.active_operand().push(c);
        true
    }

    fn push_point(&mut self) -> bool {
        self.discard_exponent_result();
        if self.buffer.contains('.') {
            trace!("second decimal point");
            return false;
        }
        if self.is_placeholder() {
            self.buffer = "0.".to_string();
            *self.active_operand() = "0.".to_string();
            return true;
        }
        if self.buffer.chars().count() >= MAX_DISPLAY_LEN {
            trace!("display full");
            return false;
        }
        self.buffer.push('.');
        self.active_operand().push('.');
        true
    }

    fn apply_operator(&mut self, op: Operator) {
        if self.first.is_empty() {
            trace!(%op, "no first operand yet");
            return;
        }
        // Last operator wins; a half-typed second operand goes with the old one
        self.second.clear();
        self.operator = Some(op);
        self.phase = Phase::EnteringSecond;
        self.buffer.clear();
    }

    fn equals(&mut self) {
        let Some(op) = self.operator else {
            trace!("no pending operator");
            return;
        };
        if self.first.is_empty() || self.second.is_empty() {
            trace!("operand missing");
            return;
        }

        match self.compute(op) {
            Ok(value) => {
                let text = format_result(value);
                debug!(first = %self.first, %op, second = %self.second, result = %text, "computed");
                self.buffer.clone_from(&text);
                self.first = text;
                self.second.clear();
                self.operator = None;
                self.phase = Phase::EnteringFirst;
            }
            Err(err) => self.fail(&err),
        }
    }

    fn compute(&self, op: Operator) -> CalcResult<f64> {
        let a = parse_operand(&self.first)?;
        let b = parse_operand(&self.second)?;
        op.apply(a, b)
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn clear_entry(&mut self) {
        if self.holds_exponent() {
            self.buffer = "0".to_string();
            self.active_operand().clear();
            return;
        }
        self.buffer.pop();
        self.active_operand().pop();
        if self.buffer.is_empty() || self.buffer == "-" {
            self.buffer = "0".to_string();
            self.active_operand().clear();
        }
    }

    fn toggle_sign(&mut self) {
        if self.is_placeholder() {
            return;
        }
        if let Some(unsigned) = self.buffer.strip_prefix('-') {
            self.buffer = unsigned.to_string();
        } else if self.buffer.chars().count() < MAX_DISPLAY_LEN {
            self.buffer.insert(0, '-');
        } else {
            trace!("no room for a sign");
            return;
        }
        let mirrored = self.buffer.clone();
        *self.active_operand() = mirrored;
    }

    fn percent(&mut self) {
        match parse_operand(&self.buffer) {
            Ok(value) => {
                let text = format_result(value / 100.0);
                self.buffer.clone_from(&text);
                *self.active_operand() = text;
            }
            Err(err) => self.fail(&err),
        }
    }

    fn fail(&mut self, err: &CalcError) {
        warn!(error = %err, "calculator error");
        self.buffer = ERROR_MARKER.to_string();
        self.first.clear();
        self.second.clear();
        self.operator = None;
        self.phase = Phase::Error;
        self.clear_label = ClearLabel::AllClear;
    }
}
