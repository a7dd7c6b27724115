//! Keyboard input mapping

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::InputEvent;

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a keypad button
    Press(InputEvent),
    /// Press the shared AC/C key, whichever it currently is
    ClearKey,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Maps terminal key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Press(InputEvent::ClearAll),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::map_char(c),
            KeyCode::Enter => KeyAction::Press(InputEvent::Equals),
            KeyCode::Backspace => KeyAction::Press(InputEvent::ClearEntry),
            KeyCode::Esc => KeyAction::Press(InputEvent::ClearAll),
            KeyCode::Delete => KeyAction::ClearKey,
            _ => KeyAction::None,
        }
    }

    fn map_char(c: char) -> KeyAction {
        match c {
            'q' | 'Q' => KeyAction::Quit,
            'c' | 'C' => KeyAction::ClearKey,
            'n' | 'N' | '~' | '_' => KeyAction::Press(InputEvent::ToggleSign),
            other => other
                .to_string()
                .parse::<InputEvent>()
                .map_or(KeyAction::None, KeyAction::Press),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn handle(code: KeyCode) -> KeyAction {
        InputHandler::new().handle_key(key_event(code))
    }

    // ===== Character input =====

    #[test]
    fn test_handle_digit_keys() {
        for (d, c) in ('0'..='9').enumerate() {
            assert_eq!(
                handle(KeyCode::Char(c)),
                KeyAction::Press(InputEvent::Digit(d as u8))
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let cases = [
            ('+', Operator::Add),
            ('-', Operator::Subtract),
            ('*', Operator::Multiply),
            ('x', Operator::Multiply),
            ('/', Operator::Divide),
        ];
        for (c, op) in cases {
            assert_eq!(
                handle(KeyCode::Char(c)),
                KeyAction::Press(InputEvent::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_function_keys() {
        assert_eq!(
            handle(KeyCode::Char('.')),
            KeyAction::Press(InputEvent::Point)
        );
        assert_eq!(
            handle(KeyCode::Char('%')),
            KeyAction::Press(InputEvent::Percent)
        );
        assert_eq!(
            handle(KeyCode::Char('=')),
            KeyAction::Press(InputEvent::Equals)
        );
        assert_eq!(
            handle(KeyCode::Char('n')),
            KeyAction::Press(InputEvent::ToggleSign)
        );
        assert_eq!(
            handle(KeyCode::Char('~')),
            KeyAction::Press(InputEvent::ToggleSign)
        );
    }

    #[test]
    fn test_handle_clear_key() {
        assert_eq!(handle(KeyCode::Char('c')), KeyAction::ClearKey);
        assert_eq!(handle(KeyCode::Delete), KeyAction::ClearKey);
    }

    #[test]
    fn test_handle_unmapped_char() {
        assert_eq!(handle(KeyCode::Char('z')), KeyAction::None);
        assert_eq!(handle(KeyCode::Char('^')), KeyAction::None);
    }

    // ===== Special keys =====

    #[test]
    fn test_handle_enter() {
        assert_eq!(handle(KeyCode::Enter), KeyAction::Press(InputEvent::Equals));
    }

    #[test]
    fn test_handle_backspace() {
        assert_eq!(
            handle(KeyCode::Backspace),
            KeyAction::Press(InputEvent::ClearEntry)
        );
    }

    #[test]
    fn test_handle_escape() {
        assert_eq!(handle(KeyCode::Esc), KeyAction::Press(InputEvent::ClearAll));
    }

    #[test]
    fn test_handle_quit_key() {
        assert_eq!(handle(KeyCode::Char('q')), KeyAction::Quit);
    }

    #[test]
    fn test_handle_unknown_key() {
        assert_eq!(handle(KeyCode::F(1)), KeyAction::None);
        assert_eq!(handle(KeyCode::Tab), KeyAction::None);
    }

    // ===== Ctrl keys =====

    #[test]
    fn test_handle_ctrl_c() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_q() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_l() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('l'))),
            KeyAction::Press(InputEvent::ClearAll)
        );
    }

    #[test]
    fn test_handle_ctrl_unknown() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            KeyAction::None
        );
    }
}
