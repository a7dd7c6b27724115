//! Keypad layout and button model
//!
//! ```text
//! [AC ] [+/-] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ x ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [    0    ] [ . ] [ = ]
//! ```
//!
//! The bottom row has three buttons; `0` spans two columns. The top-left key
//! is shared between clear-all and clear-entry and takes its label from the
//! evaluator's [`ClearLabel`].

use crate::core::{ClearLabel, DisplayState, InputEvent, Operator};

/// What pressing a button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Sends a fixed event
    Input(InputEvent),
    /// The AC/C key: clear-all or clear-entry depending on the display
    Clear,
}

/// Visual group of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Digits and the decimal point
    Digit,
    /// AC/C, +/- and %
    Function,
    /// The four operators and equals
    Operator,
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Row in the grid
    pub row: usize,
    /// First column the button occupies
    pub col: usize,
    /// Number of columns the button spans
    pub span: usize,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// What the button does
    pub action: ButtonAction,
}

impl KeypadButton {
    fn new(row: usize, col: usize, action: ButtonAction) -> Self {
        Self {
            row,
            col,
            span: 1,
            pressed: false,
            action,
        }
    }

    fn wide(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Returns the label shown for this button given the current display
    #[must_use]
    pub fn label(&self, clear_label: ClearLabel) -> String {
        match self.action {
            ButtonAction::Input(event) => event.label(),
            ButtonAction::Clear => clear_label.label().to_string(),
        }
    }

    /// Returns the visual group of this button
    #[must_use]
    pub fn kind(&self) -> ButtonKind {
        match self.action {
            ButtonAction::Clear
            | ButtonAction::Input(InputEvent::ToggleSign | InputEvent::Percent) => {
                ButtonKind::Function
            }
            ButtonAction::Input(InputEvent::Digit(_) | InputEvent::Point) => ButtonKind::Digit,
            ButtonAction::Input(_) => ButtonKind::Operator,
        }
    }

    /// Resolves the button to the event it sends right now
    #[must_use]
    pub fn resolve(&self, state: &DisplayState) -> InputEvent {
        match self.action {
            ButtonAction::Input(event) => event,
            ButtonAction::Clear => state.clear_label.event(),
        }
    }

    /// Returns true if this button covers the given column of its row
    #[must_use]
    pub fn covers(&self, col: usize) -> bool {
        col >= self.col && col < self.col + self.span
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use ButtonAction::{Clear, Input};

        let digit = |d: u8| Input(InputEvent::Digit(d));
        let op = |o: Operator| Input(InputEvent::Operator(o));

        let mut buttons = vec![
            KeypadButton::new(0, 0, Clear),
            KeypadButton::new(0, 1, Input(InputEvent::ToggleSign)),
            KeypadButton::new(0, 2, Input(InputEvent::Percent)),
            KeypadButton::new(0, 3, op(Operator::Divide)),
        ];
        for (row, digits) in [(1, [7, 8, 9]), (2, [4, 5, 6]), (3, [1, 2, 3])] {
            for (col, d) in digits.into_iter().enumerate() {
                buttons.push(KeypadButton::new(row, col, digit(d)));
            }
            buttons.push(KeypadButton::new(row, 3, op(Operator::ALL[row])));
        }
        buttons.push(KeypadButton::new(4, 0, digit(0)).wide(2));
        buttons.push(KeypadButton::new(4, 2, Input(InputEvent::Point)));
        buttons.push(KeypadButton::new(4, 3, Input(InputEvent::Equals)));

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets the index of the button covering a grid cell
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons
            .iter()
            .position(|b| b.row == row && b.covers(col))
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Finds a button by its label as shown for the given clear label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str, clear_label: ClearLabel) -> Option<usize> {
        self.buttons
            .iter()
            .position(|b| b.label(clear_label) == label)
    }

    /// Finds the button that can send an event
    ///
    /// Both clear events map to the shared clear key.
    #[must_use]
    pub fn find_button_by_event(&self, event: InputEvent) -> Option<usize> {
        self.buttons.iter().position(|b| match b.action {
            ButtonAction::Input(e) => e == event,
            ButtonAction::Clear => {
                matches!(event, InputEvent::ClearAll | InputEvent::ClearEntry)
            }
        })
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button that sends `event`, releasing the rest
    pub fn highlight_event(&mut self, event: InputEvent) {
        self.release_all();
        if let Some(idx) = self.find_button_by_event(event) {
            self.press_button(idx);
        }
    }

    /// Returns the highlighted button, if any
    #[must_use]
    pub fn pressed(&self) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.pressed)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns the buttons of one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter().filter(move |b| b.row == row)
    }
}
