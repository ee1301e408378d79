use std::process::ExitCode;

use clap::Parser;
use extrema_cli::{execute, Cli};
use owo_colors::OwoColorize;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Some(level) = cli.log_level() {
        extrema_console::init_with_level(level);
    }

    match execute(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {:#}", "error:".bright_red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
