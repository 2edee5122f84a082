//! Conversion of raw string tokens into typed values.
//!
//! A converter is any `Fn(&str) -> Result<T>`; the parser stores it boxed as a
//! [`Converter`]. Primitive types implement [`FromArgument`] so registrations
//! can omit the converter entirely. Types that only implement [`FromStr`] can
//! be bound through [`from_str_converter`], and anything else through a
//! caller-supplied closure.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{ErrorKind, ParseError, Result};

mod result_ext;

pub use result_ext::ConvertResultExt;

/// Boxed conversion function from a token to `T`.
pub type Converter<'a, T> = Box<dyn Fn(&str) -> Result<T> + 'a>;

/// Literal accepted as boolean `true`.
pub const TRUE_LITERAL: &str = "true";
/// Literal accepted as boolean `false`.
pub const FALSE_LITERAL: &str = "false";

/// Types with a built-in conversion from a command-line token.
///
/// # Examples
///
/// ```
/// use simple_cli::{ErrorKind, FromArgument};
///
/// assert_eq!(i32::from_argument("-5"), Ok(-5));
/// let err = i32::from_argument("five").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::IntConversionFailure);
/// ```
pub trait FromArgument: Sized {
    /// Converts `token` into `Self`.
    ///
    /// # Errors
    ///
    /// Returns a conversion-family [`ParseError`] naming `token` when it does
    /// not describe a valid value.
    fn from_argument(token: &str) -> Result<Self>;
}

impl FromArgument for bool {
    /// Accepts exactly `"true"` or `"false"`; matching is case-sensitive.
    fn from_argument(token: &str) -> Result<Self> {
        match token {
            TRUE_LITERAL => Ok(true),
            FALSE_LITERAL => Ok(false),
            _ => Err(ParseError::ConversionFailure(token.to_owned())),
        }
    }
}

impl FromArgument for char {
    fn from_argument(token: &str) -> Result<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(single), None) => Ok(single),
            _ => Err(ParseError::CharConversionFailure(token.to_owned())),
        }
    }
}

impl FromArgument for String {
    fn from_argument(token: &str) -> Result<Self> {
        Ok(token.to_owned())
    }
}

impl FromArgument for PathBuf {
    fn from_argument(token: &str) -> Result<Self> {
        Ok(Self::from(token))
    }
}

macro_rules! impl_from_argument {
    ($kind:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl FromArgument for $ty {
                fn from_argument(token: &str) -> Result<Self> {
                    token.parse().into_conversion_as($kind, token)
                }
            }
        )+
    };
}

impl_from_argument!(
    ErrorKind::IntConversionFailure =>
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);
impl_from_argument!(ErrorKind::FloatConversionFailure => f32, f64);

/// Returns the built-in converter for `T`.
#[must_use]
pub fn default_converter<'a, T: FromArgument + 'a>() -> Converter<'a, T> {
    Box::new(T::from_argument)
}

/// Returns a converter that delegates to [`FromStr`].
///
/// Failures are reported as [`ParseError::ConversionFailure`] carrying the
/// rejected token; the `FromStr` error itself is discarded.
///
/// # Examples
///
/// ```
/// use std::net::Ipv4Addr;
/// use simple_cli::from_str_converter;
///
/// let convert = from_str_converter::<Ipv4Addr>();
/// assert_eq!(convert("127.0.0.1"), Ok(Ipv4Addr::LOCALHOST));
/// assert!(convert("localhost").is_err());
/// ```
#[must_use]
pub fn from_str_converter<'a, T: FromStr + 'a>() -> Converter<'a, T> {
    Box::new(|token| token.parse().into_conversion(token))
}
