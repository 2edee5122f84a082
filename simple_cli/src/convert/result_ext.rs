//! Extensions for mapping foreign parse errors into conversion failures.
//!
//! These helpers reduce repetitive `.map_err(|_| ParseError::…(token.into()))`
//! patterns in converters.
//!
//! # Examples
//!
//! ```
//! use simple_cli::{ConvertResultExt, ErrorKind, Result};
//!
//! fn percent(token: &str) -> Result<u8> {
//!     let value: u8 = token.trim_end_matches('%').parse().into_conversion(token)?;
//!     Ok(value.min(100))
//! }
//!
//! assert_eq!(percent("42%"), Ok(42));
//! assert_eq!(percent("lots").unwrap_err().kind(), ErrorKind::ConversionFailure);
//! ```

use crate::error::{ErrorKind, ParseError, Result};

/// Maps any `Result<T, E>` into the crate's [`Result`] as a conversion
/// failure naming the rejected token.
pub trait ConvertResultExt<T> {
    /// Convert the error into [`ParseError::ConversionFailure`].
    ///
    /// # Errors
    ///
    /// Returns the conversion failure when `self` is `Err`.
    fn into_conversion(self, token: &str) -> Result<T>;

    /// Convert the error into a [`ParseError`] of `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error of `kind` carrying `token` when `self` is `Err`.
    fn into_conversion_as(self, kind: ErrorKind, token: &str) -> Result<T>;
}

impl<T, E> ConvertResultExt<T> for std::result::Result<T, E> {
    fn into_conversion(self, token: &str) -> Result<T> {
        self.into_conversion_as(ErrorKind::ConversionFailure, token)
    }

    fn into_conversion_as(self, kind: ErrorKind, token: &str) -> Result<T> {
        self.map_err(|_| ParseError::new(kind, token))
    }
}
