//! Core crate for the `simple_cli` argument parser.
//!
//! Arguments are registered on a [`Parser`] together with the caller-owned
//! storage they bind into; [`Parser::parse`] then walks the raw argument list
//! once, writing converted values into that storage or stopping at the first
//! [`ParseError`].
//!
//! Supported argument kinds are flags, commands, single-value options,
//! repeatable options, variadic options, a positional collector and a
//! program-name binder. Short tags look like `-h`, long tags like `--help`,
//! and `--tag=value` is accepted as a spelling of `--tag value`.
//!
//! ```rust
//! use simple_cli::{Collection, Flag, Parser, Scalar};
//!
//! let mut verbose = false;
//! let mut jobs = 1_usize;
//! let mut inputs: Vec<String> = Vec::new();
//!
//! let mut parser = Parser::new();
//! parser.add_flag(&["-v", "--verbose"], Flag::bind(&mut verbose))?;
//! parser.add_option(&["-j", "--jobs"], Scalar::new(&mut jobs))?;
//! parser.add_variadic_option(&["-i", "--inputs"], Collection::new(&mut inputs))?;
//! parser.parse(["build", "-v", "--jobs=4", "-i", "a.c", "b.c"])?;
//! drop(parser);
//!
//! assert!(verbose);
//! assert_eq!(jobs, 4);
//! assert_eq!(inputs, ["a.c", "b.c"]);
//! # Ok::<(), simple_cli::ParseError>(())
//! ```

mod argument;
mod convert;
mod error;
mod output;
mod parser;

pub use argument::{ArgumentKind, Flag};
pub use convert::{
    ConvertResultExt, Converter, FALSE_LITERAL, FromArgument, TRUE_LITERAL, default_converter,
    from_str_converter,
};
pub use error::{ErrorKind, ParseError, Result};
pub use output::{Collection, Scalar, Sequence, Slot};
pub use parser::Parser;
pub use parser::tag::{
    INLINE_SEPARATOR, LONG_TAG_MIN_LEN, SHORT_TAG_LEN, is_valid_tag, is_valid_value,
};
