//! Discrete button-press events

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, Operator};

/// A single button press fed to the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    /// A digit key (0-9)
    Digit(u8),
    /// The decimal point key
    Point,
    /// One of the four operator keys
    Operator(Operator),
    /// The equals key
    Equals,
    /// Reset everything (AC)
    ClearAll,
    /// Remove the last entered character (C)
    ClearEntry,
    /// Flip the sign of the current entry (+/-)
    ToggleSign,
    /// Divide the current entry by 100 (%)
    Percent,
}

impl InputEvent {
    /// Creates a digit event, `None` if `d` is not a single decimal digit
    #[must_use]
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(Self::Digit(d))
    }

    /// Returns the keypad label for this event
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Point => ".".to_string(),
            Self::Operator(op) => op.keypad_label().to_string(),
            Self::Equals => "=".to_string(),
            Self::ClearAll => "AC".to_string(),
            Self::ClearEntry => "C".to_string(),
            Self::ToggleSign => "+/-".to_string(),
            Self::Percent => "%".to_string(),
        }
    }

    /// Returns true for events that edit the number being typed
    #[must_use]
    pub const fn is_entry(&self) -> bool {
        matches!(self, Self::Digit(_) | Self::Point)
    }

    /// Parses a whitespace-separated sequence of key tokens
    pub fn parse_sequence(input: &str) -> Result<Vec<Self>, CalcError> {
        input.split_whitespace().map(str::parse).collect()
    }
}

impl FromStr for InputEvent {
    type Err = CalcError;

    /// Accepts keypad labels plus ASCII aliases (`*`, `/`, `neg`, `ce`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let event = match token.to_ascii_lowercase().as_str() {
            "." | "," => Self::Point,
            "+" => Self::Operator(Operator::Add),
            "-" => Self::Operator(Operator::Subtract),
            "*" | "x" | "×" => Self::Operator(Operator::Multiply),
            "/" | "÷" => Self::Operator(Operator::Divide),
            "=" => Self::Equals,
            "ac" => Self::ClearAll,
            "c" | "ce" => Self::ClearEntry,
            "+/-" | "±" | "neg" => Self::ToggleSign,
            "%" => Self::Percent,
            other => {
                let mut chars = other.chars();
                let digit = match (chars.next(), chars.next()) {
                    (Some(c), None) => c.to_digit(10).and_then(|d| u8::try_from(d).ok()),
                    _ => None,
                };
                digit
                    .and_then(Self::digit)
                    .ok_or_else(|| CalcError::UnknownKey(token.to_string()))?
            }
        };
        Ok(event)
    }
}

impl std::fmt::Display for InputEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}
