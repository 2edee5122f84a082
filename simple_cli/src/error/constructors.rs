//! Constructors that build a [`ParseError`] from its kind and context.

use super::{ErrorKind, ParseError};

impl ParseError {
    /// Builds an error of `kind` carrying `body` as its context.
    ///
    /// Kinds without context (see [`ErrorKind::has_body`]) ignore `body`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_cli::{ErrorKind, ParseError};
    ///
    /// let err = ParseError::new(ErrorKind::InvalidTag, "-long");
    /// assert_eq!(err, ParseError::InvalidTag("-long".into()));
    /// assert_eq!(err.kind(), ErrorKind::InvalidTag);
    /// ```
    #[must_use]
    pub fn new(kind: ErrorKind, body: impl Into<String>) -> Self {
        let text = body.into();
        match kind {
            ErrorKind::RepeatedTag => Self::RepeatedTag(text),
            ErrorKind::InvalidTag => Self::InvalidTag(text),
            ErrorKind::ConversionFailure => Self::ConversionFailure(text),
            ErrorKind::CharConversionFailure => Self::CharConversionFailure(text),
            ErrorKind::IntConversionFailure => Self::IntConversionFailure(text),
            ErrorKind::FloatConversionFailure => Self::FloatConversionFailure(text),
            ErrorKind::NullBindOrConverter => Self::NullBindOrConverter(text),
            ErrorKind::NullCallback => Self::NullCallback(text),
            ErrorKind::InvalidCommandLine => Self::InvalidCommandLine,
            ErrorKind::EmptyOptionTag => Self::EmptyOptionTag(text),
            ErrorKind::EmptyOptionValue => Self::EmptyOptionValue(text),
            ErrorKind::NoValueProvided => Self::NoValueProvided(text),
            ErrorKind::NotBindable => Self::NotBindable,
            ErrorKind::NotFlaggable => Self::NotFlaggable,
            ErrorKind::NotCallable => Self::NotCallable,
            ErrorKind::InvalidValue => Self::InvalidValue(text),
            ErrorKind::ArgumentDoesNotTakeValue => Self::ArgumentDoesNotTakeValue(text),
            ErrorKind::PositionalsNotSupported => Self::PositionalsNotSupported(text),
            ErrorKind::InvalidInlineAssignment => Self::InvalidInlineAssignment(text),
        }
    }

    /// Builds an error of `kind` with no context.
    #[must_use]
    pub fn bare(kind: ErrorKind) -> Self {
        Self::new(kind, String::new())
    }
}
