//! pocketcalc - four-function keypad calculator
//!
//! The calculator is a small state machine fed one button press at a time.
//! Front ends (the terminal app in [`tui`], the `pocketcalc` CLI, tests)
//! only translate their input into [`InputEvent`](core::InputEvent)s and
//! render the returned [`DisplayState`](core::DisplayState).
//!
//! # Example
//!
//! ```rust
//! use pocketcalc::prelude::*;
//!
//! let mut eval = Evaluator::new();
//! for key in ["5", "+", "3", "="] {
//!     eval.handle_input(key.parse().unwrap());
//! }
//! assert_eq!(eval.display(), "8");
//!
//! // A follow-on operator continues from the result
//! eval.handle_input(InputEvent::Operator(Operator::Add));
//! eval.handle_input(InputEvent::Digit(2));
//! assert_eq!(eval.handle_input(InputEvent::Equals).text, "10");
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

pub mod core;
pub mod driver;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        format_result, parse_operand, CalcError, CalcResult, ClearLabel, DisplayState, Evaluator,
        InputEvent, Operator, Phase, ERROR_MARKER, MAX_DISPLAY_LEN,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{ButtonAction, ButtonKind, Keypad, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
