//! Calculator core: entry state machine, operators and display formatting
//!
//! Nothing in here knows about terminals or buttons. Front ends feed
//! [`InputEvent`]s into an [`Evaluator`] and render the [`DisplayState`] it
//! hands back.

pub mod evaluator;
pub mod event;
pub mod format;
mod operations;

pub use evaluator::{ClearLabel, DisplayState, Evaluator, Phase};
pub use event::InputEvent;
pub use format::{format_result, ERROR_MARKER, MAX_DISPLAY_LEN};
pub use operations::{parse_operand, Operator};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// The evaluator never returns these to its caller; they are turned into the
/// `Error` phase. They surface directly only from parsing helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result was NaN or infinite
    #[error("Overflow: result is not a finite number")]
    Overflow,
    /// Operand or buffer text is not a decimal number
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
    /// Key token does not name any keypad button
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),
}
