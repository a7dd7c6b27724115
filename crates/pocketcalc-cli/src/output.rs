//! Output formatting

use console::{style, Term};
use pocketcalc::core::DisplayState;
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Display text only
    #[default]
    Text,
    /// JSON, one object per line
    Json,
}

/// One key press and the display it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Key as typed
    pub key: String,
    /// Display after the key
    pub state: DisplayState,
}

/// Writes results to stdout
#[derive(Debug)]
pub struct Printer {
    term: Term,
    format: OutputFormat,
    /// Whether to use colors
    pub use_color: bool,
}

impl Printer {
    /// Create a printer writing to stdout
    #[must_use]
    pub fn new(format: OutputFormat, use_color: bool) -> Self {
        Self {
            term: Term::stdout(),
            format,
            use_color,
        }
    }

    /// Print the display after one key
    pub fn step(&self, step: &Step) -> CliResult<()> {
        let line = match self.format {
            OutputFormat::Text => format!(
                "{}  {}",
                self.dim(&format!("{:>5}", step.key)),
                self.display_text(&step.state)
            ),
            OutputFormat::Json => serde_json::to_string(step)?,
        };
        self.term.write_line(&line)?;
        Ok(())
    }

    /// Print the final display
    pub fn result(&self, state: &DisplayState) -> CliResult<()> {
        let line = match self.format {
            OutputFormat::Text => self.display_text(state),
            OutputFormat::Json => serde_json::to_string(state)?,
        };
        self.term.write_line(&line)?;
        Ok(())
    }

    /// Print a plain line
    pub fn line(&self, text: &str) -> CliResult<()> {
        self.term.write_line(text)?;
        Ok(())
    }

    /// Print a section heading
    pub fn heading(&self, text: &str) -> CliResult<()> {
        let text = if self.use_color {
            style(text).bold().underlined().force_styling(true).to_string()
        } else {
            text.to_string()
        };
        self.line(&text)
    }

    fn display_text(&self, state: &DisplayState) -> String {
        if !self.use_color {
            return state.text.clone();
        }
        let styled = style(&state.text).bold().force_styling(true);
        if state.is_error() {
            styled.red().to_string()
        } else {
            styled.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_color {
            style(text).dim().force_styling(true).to_string()
        } else {
            text.to_string()
        }
    }
}
