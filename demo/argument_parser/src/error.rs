//! Error types for the `argument_parser` demo.
use std::io;

use thiserror::Error;

/// Errors raised by the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Registration or parsing of the command line failed.
    #[error("failed to parse command line: {0}")]
    Parse(#[from] simple_cli::ParseError),
    /// A process argument was not valid UTF-8; holds its lossy rendering.
    #[error("argument is not valid UTF-8: {0}")]
    NonUtf8Argument(String),
    /// The report could not be written.
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Result alias used throughout the demo.
pub type Result<T, E = DemoError> = std::result::Result<T, E>;
