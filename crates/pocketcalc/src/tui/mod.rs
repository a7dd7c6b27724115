//! Terminal front end
//!
//! Maps keyboard and mouse input to keypad presses and draws the display
//! and keypad as a text grid.

mod app;
mod input;
mod render;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use render::{draw, hit_test, render_lines, HELP_SHORTCUTS};
