//! Command Line Interface (CLI) layer for qrsvg.
//!
//! This module defines the argument model (`args`), the application error
//! taxonomy with its exit codes (`errors`), and the orchestration logic
//! (`runner`) that validates the invocation, encodes the text and writes the
//! SVG file.
pub mod args;
pub mod errors;
pub mod runner;

pub use runner::run;
