//! A caller-defined value type with its own converter.

use std::fmt;

use simple_cli::{ConvertResultExt, ParseError};

/// Integer coordinates given on the command line as `x,y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    /// Horizontal component.
    pub x: i32,
    /// Vertical component.
    pub y: i32,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `x,y` into a [`Point`]; whitespace around either number is ignored.
///
/// # Errors
///
/// Returns [`ParseError::ConversionFailure`] naming `token` when the comma is
/// missing or either side is not an integer.
pub fn parse_point(token: &str) -> simple_cli::Result<Point> {
    let (x, y) = token
        .split_once(',')
        .ok_or_else(|| ParseError::ConversionFailure(token.to_owned()))?;
    Ok(Point {
        x: x.trim().parse().into_conversion(token)?,
        y: y.trim().parse().into_conversion(token)?,
    })
}
