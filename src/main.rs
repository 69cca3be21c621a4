//! CLI entry point for the grid image compositor

use clap::{CommandFactory, Parser};
use griddy::io::cli::{Cli, Compositor};
use std::process::ExitCode;

// Allow print for reporting the fatal error to the user
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if Cli::help_requested(std::env::args_os()) {
        return match Cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        };
    }

    let cli = Cli::parse();
    let compositor = Compositor::new(cli);
    match compositor.process() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
