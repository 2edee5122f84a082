//! Error types produced while registering arguments and parsing a command line.

mod constructors;
mod kind;
mod types;

pub use kind::ErrorKind;
pub use types::ParseError;

/// Result alias used throughout the crate.
pub type Result<T, E = ParseError> = std::result::Result<T, E>;
