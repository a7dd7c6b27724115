//! Text-grid rendering
//!
//! The frame is built as plain lines first so it can be asserted on in
//! tests, then written to the terminal with queued `crossterm` commands.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};

use crate::keypad::KeypadButton;

use super::app::CalculatorApp;

/// Width of one keypad column, separator included
pub const COL_WIDTH: usize = 6;

/// Usable width inside the frame
pub const INNER_WIDTH: usize = 4 * COL_WIDTH - 1;

/// First frame line holding a keypad row
pub const KEYPAD_TOP: usize = 4;

/// First frame column holding a button
pub const KEYPAD_LEFT: usize = 2;

/// Key bindings shown below the keypad
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("Enter", "="),
    ("Bksp", "C"),
    ("Esc", "AC"),
    ("c/Del", "AC/C"),
    ("n", "+/-"),
    ("q", "quit"),
];

/// Builds the full frame as lines of text
#[must_use]
pub fn render_lines(app: &CalculatorApp) -> Vec<String> {
    let border = format!("+{}+", "-".repeat(INNER_WIDTH + 2));
    let state = app.state();
    let pending = app.pending_expression().unwrap_or_default();

    let mut lines = vec![
        border.clone(),
        framed(&format!("{pending:>INNER_WIDTH$}")),
        framed(&format!("{:>INNER_WIDTH$}", state.text)),
        border.clone(),
    ];

    let (rows, _) = app.keypad().dimensions();
    for row in 0..rows {
        let cells: Vec<String> = app
            .keypad()
            .row(row)
            .map(|btn| button_cell(btn, &btn.label(state.clear_label)))
            .collect();
        lines.push(framed(&cells.join(" ")));
    }
    lines.push(border);
    lines.push(help_line());
    lines
}

fn framed(content: &str) -> String {
    format!("| {content:<INNER_WIDTH$} |")
}

fn button_cell(btn: &KeypadButton, label: &str) -> String {
    let width = btn.span * COL_WIDTH - 3;
    let (open, close) = if btn.pressed { ('>', '<') } else { ('[', ']') };
    format!("{open}{label:^width$}{close}")
}

fn help_line() -> String {
    HELP_SHORTCUTS
        .iter()
        .map(|(key, what)| format!("{key} {what}"))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Maps a terminal cell of the frame to a keypad button index
#[must_use]
pub fn hit_test(app: &CalculatorApp, x: u16, y: u16) -> Option<usize> {
    let (x, y) = (usize::from(x), usize::from(y));
    let row = y.checked_sub(KEYPAD_TOP)?;
    let rel_x = x.checked_sub(KEYPAD_LEFT)?;
    if rel_x >= INNER_WIDTH {
        return None;
    }
    let col = rel_x / COL_WIDTH;
    let index = app.keypad().index_at(row, col)?;
    let on_gap = rel_x % COL_WIDTH == COL_WIDTH - 1;
    if on_gap && !app.keypad().get_button(index)?.covers(col + 1) {
        return None;
    }
    Some(index)
}

/// Draws the frame at the top-left corner of the terminal
pub fn draw<W: Write>(out: &mut W, app: &CalculatorApp) -> io::Result<()> {
    for (i, line) in render_lines(app).iter().enumerate() {
        let y = u16::try_from(i).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, y), Clear(ClearType::CurrentLine))?;
        if i == 2 {
            queue!(
                out,
                SetAttribute(Attribute::Bold),
                Print(line),
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            queue!(out, Print(line))?;
        }
    }
    out.flush()
}
