//! Interactive terminal keypad

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use pocketcalc::tui::{draw, hit_test, CalculatorApp, InputHandler};
use tracing::info;

use crate::error::CliResult;

/// Runs the keypad until the user quits
///
/// The terminal is restored even when the event loop fails.
pub fn run_repl() -> CliResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        cursor::Hide
    )?;

    let result = run_app(&mut stdout);

    disable_raw_mode()?;
    execute!(
        stdout,
        cursor::Show,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;

    if let Ok(shown) = &result {
        info!(display = %shown, "repl closed");
    }
    result.map(|_| ())
}

fn run_app<W: Write>(out: &mut W) -> CliResult<String> {
    let mut app = CalculatorApp::new();
    let input_handler = InputHandler::new();

    loop {
        draw(out, &app)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.apply(input_handler.handle_key(key));
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                if let Some(index) = hit_test(&app, column, row) {
                    app.press_button(index);
                }
            }
            Event::Resize(..) => execute!(out, Clear(ClearType::All))?,
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(app.state().text.clone())
}
