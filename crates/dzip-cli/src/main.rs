//! dzip - pack files into a ZIP archive or extract one next to itself.

mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use console::Term;
use dzip_core::Log;
use dzip_core::Mode;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = cli::Cli::parse().into_config();

    let term = Term::stdout();
    let logger = output::TimestampLogger::new(term.clone());

    let result = match config.mode() {
        Mode::Pack => commands::pack::execute(&config, &logger),
        Mode::Extract => commands::extract::execute(&config, &term),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            logger.log(&failure.to_string());
            failure.exit_code()
        }
    }
}
