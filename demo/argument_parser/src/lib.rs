//! Demonstration of the `simple_cli` parser.
//!
//! Registers one argument of each common kind, parses the process arguments
//! and prints what was bound.

use std::cell::Cell;
use std::ffi::OsString;
use std::io::Write;

use simple_cli::{Collection, Flag, Parser, Scalar};

pub mod error;
mod point;

pub use error::{DemoError, Result};
pub use point::{Point, parse_point};

/// Everything the demo binds from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    /// Program name as invoked.
    pub program: String,
    /// Set by `-h`/`--help`.
    pub help: bool,
    /// How often the help callback ran.
    pub help_calls: usize,
    /// Value of `-o`/`--option`.
    pub option: String,
    /// Value of `--a-value`.
    pub point: Option<Point>,
    /// Value of `-i`/`--int`.
    pub int: i32,
    /// Values following `-s`/`--strings`.
    pub strings: Vec<String>,
    /// Tokens not claimed by any tag.
    pub positionals: Vec<String>,
    /// `false` when only the program name was given.
    pub parsed: bool,
}

/// Converts raw process arguments into strings.
///
/// # Errors
///
/// Returns [`DemoError::NonUtf8Argument`] for the first argument that is not
/// valid UTF-8.
pub fn collect_args(args: impl IntoIterator<Item = OsString>) -> Result<Vec<String>> {
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|raw| DemoError::NonUtf8Argument(raw.to_string_lossy().into_owned()))
        })
        .collect()
}

/// Registers the demo arguments and parses `args`, program name first.
///
/// # Errors
///
/// Returns [`DemoError::Parse`] for the first registration or parse failure.
pub fn parse_options<I, S>(args: I) -> Result<Options>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options = Options::default();
    let help_calls = Cell::new(0_usize);
    let mut point: Option<Point> = None;
    let parsed = {
        let mut parser = Parser::new();
        parser.add_flag(
            &["-h", "--help"],
            Flag::bind(&mut options.help).with_callback(|| help_calls.set(help_calls.get() + 1)),
        )?;
        parser.add_option(&["-o", "--option"], Scalar::new(&mut options.option))?;
        parser.add_option(
            &["--a-value"],
            Scalar::with_converter(&mut point, |token| parse_point(token).map(Some)),
        )?;
        parser.add_option(&["-i", "--int"], Scalar::new(&mut options.int))?;
        parser.add_variadic_option(&["-s", "--strings"], Collection::new(&mut options.strings))?;
        parser.add_positional(Collection::new(&mut options.positionals));
        parser.add_program(Scalar::new(&mut options.program));
        parser.parse(args)?
    };
    options.help_calls = help_calls.get();
    options.point = point;
    options.parsed = parsed;
    Ok(options)
}

/// Writes the bound values to `out`.
///
/// # Errors
///
/// Returns [`DemoError::Output`] when writing fails.
pub fn write_report(out: &mut impl Write, options: &Options) -> Result<()> {
    for _ in 0..options.help_calls {
        writeln!(out, "Help called!")?;
    }
    if !options.parsed {
        writeln!(out, "No arguments given.")?;
    }
    writeln!(out, "Bind int: {}", options.int)?;
    writeln!(out, "Bind: {}", options.help)?;
    writeln!(out, "Option Value: {}", options.option)?;
    let point = options
        .point
        .map_or_else(|| String::from("<unset>"), |point| point.to_string());
    writeln!(out, "A value: {point}")?;
    writeln!(out, "Strings: {}", options.strings.join(" "))?;
    writeln!(out, "Positionals: {}", options.positionals.join(" "))?;
    Ok(())
}
