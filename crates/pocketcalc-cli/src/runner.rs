//! Batch key runners for `eval`, `script` and `keys`

use std::path::Path;

use pocketcalc::prelude::*;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{OutputFormat, Printer, Step};

/// Splits runs of digits into single keys: `"12"` becomes `"1"`, `"2"`
///
/// Every other token is kept as one key name.
#[must_use]
pub fn expand_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .flat_map(|tok| {
            let tok = tok.as_ref();
            let is_number =
                tok.len() > 1 && tok.chars().all(|c| c.is_ascii_digit() || c == '.');
            if is_number {
                tok.chars().map(String::from).collect()
            } else {
                vec![tok.to_string()]
            }
        })
        .collect()
}

/// Reads keys from script text; lines starting with `#` are skipped
#[must_use]
pub fn script_tokens(text: &str) -> Vec<String> {
    let words: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .flat_map(str::split_whitespace)
        .collect();
    expand_tokens(&words)
}

/// Presses every key on a fresh evaluator
///
/// All keys are parsed before the first press, so an unknown name fails
/// the whole run without partial output.
pub fn evaluate(keys: &[String]) -> CliResult<(Vec<Step>, DisplayState)> {
    let events = keys
        .iter()
        .map(|key| key.parse::<InputEvent>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut evaluator = Evaluator::new();
    let mut steps = Vec::with_capacity(events.len());
    for (key, event) in keys.iter().zip(events) {
        let state = evaluator.press(event);
        steps.push(Step {
            key: key.clone(),
            state,
        });
    }
    let last = evaluator.snapshot();
    debug!(keys = keys.len(), display = %last.text, "evaluated");
    Ok((steps, last))
}

/// Runs keys and prints the outcome
pub fn run_keys_and_print(
    config: &CliConfig,
    keys: &[String],
    trace: bool,
    format: OutputFormat,
) -> CliResult<()> {
    let (steps, last) = evaluate(keys)?;
    let printer = Printer::new(format, config.color.should_color());

    if trace && !config.verbosity.is_quiet() {
        for step in &steps {
            printer.step(step)?;
        }
        if format == OutputFormat::Json {
            return Ok(());
        }
    }
    printer.result(&last)
}

/// `pocketcalc eval`
pub fn run_eval(
    config: &CliConfig,
    keys: &[String],
    trace: bool,
    format: OutputFormat,
) -> CliResult<()> {
    run_keys_and_print(config, &expand_tokens(keys), trace, format)
}

/// `pocketcalc script`
pub fn run_script(
    config: &CliConfig,
    path: &Path,
    trace: bool,
    format: OutputFormat,
) -> CliResult<()> {
    let text = std::fs::read_to_string(path)?;
    let keys = script_tokens(&text);
    if keys.is_empty() {
        return Err(CliError::invalid_argument(format!(
            "no keys in {}",
            path.display()
        )));
    }
    info!(path = %path.display(), keys = keys.len(), "running script");
    run_keys_and_print(config, &keys, trace, format)
}

/// Accepted names for each keypad event, beyond its label
const ALIASES: &[(&str, &str)] = &[
    ("AC", "ac, Esc"),
    ("C", "c, ce, Backspace"),
    ("+/-", "±, neg, n"),
    ("÷", "/"),
    ("x", "*, ×"),
    ("=", "Enter"),
    (".", ","),
];

/// Keypad rows as printed by `pocketcalc keys`
#[must_use]
pub fn keypad_rows(keypad: &Keypad) -> Vec<String> {
    let (rows, _) = keypad.dimensions();
    (0..rows)
        .map(|row| {
            keypad
                .row(row)
                .map(|btn| {
                    let label = match btn.action {
                        ButtonAction::Clear => "AC/C".to_string(),
                        ButtonAction::Input(_) => btn.label(ClearLabel::AllClear),
                    };
                    format!("{label:^width$}", width = btn.span * 6 - 1)
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect()
}

/// `pocketcalc keys`
pub fn run_list_keys(config: &CliConfig) -> CliResult<()> {
    let printer = Printer::new(OutputFormat::Text, config.color.should_color());
    let keypad = Keypad::new();

    printer.heading("Keypad")?;
    for row in keypad_rows(&keypad) {
        printer.line(&row)?;
    }
    if config.verbosity.is_quiet() {
        return Ok(());
    }

    printer.line("")?;
    printer.heading("Aliases")?;
    for (label, aliases) in ALIASES {
        printer.line(&format!("{label:>4}  {aliases}"))?;
    }
    printer.line("")?;
    printer.line("Digit runs such as 12 or 0.5 are typed one key at a time.")?;
    Ok(())
}
