//! Builders for raw argument lists.
//!
//! Tests usually describe a command line as one shell-like string; these
//! helpers turn it into the owned argument vector `Parser::parse` expects.
//!
//! # Examples
//!
//! ```
//! use test_helpers::argv;
//!
//! let args = argv::split("prog --name 'Ada Lovelace' -v").expect("valid line");
//! assert_eq!(args, ["prog", "--name", "Ada Lovelace", "-v"]);
//! ```

use anyhow::{Result, anyhow};

/// Program name prepended by [`with_program`].
pub const PROGRAM: &str = "prog";

/// Splits `line` with POSIX shell quoting rules.
///
/// # Errors
///
/// Returns an error when `line` has unbalanced quotes or a trailing escape.
pub fn split(line: &str) -> Result<Vec<String>> {
    shlex::split(line).ok_or_else(|| anyhow!("unbalanced quoting in command line: {line}"))
}

/// Builds an argument vector of [`PROGRAM`] followed by `args`.
#[must_use]
pub fn with_program(args: &[&str]) -> Vec<String> {
    std::iter::once(PROGRAM)
        .chain(args.iter().copied())
        .map(str::to_owned)
        .collect()
}
