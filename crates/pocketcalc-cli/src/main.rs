//! pocketcalc: four-function keypad calculator
//!
//! ## Usage
//!
//! ```bash
//! pocketcalc eval 12 + 30 =          # prints 42
//! pocketcalc eval --trace 5 ÷ 0 =    # display after every key
//! pocketcalc script keys.txt         # keys from a file
//! pocketcalc repl                    # interactive keypad
//! ```

use clap::Parser;
use pocketcalc_cli::{
    repl, runner, Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity,
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = build_config(&cli);
    init_tracing(config.verbosity);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &CliConfig) -> CliResult<()> {
    match &cli.command {
        Commands::Eval(args) => {
            runner::run_eval(config, &args.keys, args.trace, args.format.into())
        }
        Commands::Script(args) => {
            runner::run_script(config, &args.file, args.trace, args.format.into())
        }
        Commands::Repl => repl::run_repl(),
        Commands::Keys => runner::run_list_keys(config),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();
    CliConfig::new().with_verbosity(verbosity).with_color(color)
}

/// Logs go to stderr; `RUST_LOG` overrides the `-v`/`-q` level
fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
