//! pocketcalc CLI library
//!
//! Command-line front end for the [`pocketcalc`] keypad calculator:
//! batch evaluation of key sequences, key scripts and an interactive
//! terminal keypad.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
mod output;
pub mod repl;
pub mod runner;

pub use commands::{Cli, ColorArg, Commands, EvalArgs, FormatArg, ScriptArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Printer, Step};
