//! qrsvg CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: hand the raw argument vector to the
//! runner and exit with the status it maps.

use std::process::ExitCode;

mod cli;
mod core;
mod error;
mod io;
mod types;

fn main() -> ExitCode {
    cli::run(std::env::args_os())
}
