//! Primary error enum for registration and parsing flows.

use thiserror::Error;

use super::ErrorKind;

/// Errors that can occur while registering arguments or parsing a command
/// line.
///
/// Each variant carries the offending tag or token where one exists. The
/// rendered message is available through [`std::fmt::Display`] or
/// [`ParseError::message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The tag is already registered.
    #[error("repeated tag: {0}")]
    RepeatedTag(String),

    /// The tag is neither a short (`-x`) nor a long (`--name`) tag.
    #[error("invalid tag: {0}")]
    InvalidTag(String),

    /// The token could not be converted into the bound type.
    #[error("failed to convert \"{0}\" from string to the desired type")]
    ConversionFailure(String),

    /// The token is not exactly one character long.
    #[error("failed to convert \"{0}\" from string to char")]
    CharConversionFailure(String),

    /// The token is not a valid integer for the bound type.
    #[error("failed to convert \"{0}\" from string to an integer")]
    IntConversionFailure(String),

    /// The token is not a valid floating point number.
    #[error("failed to convert \"{0}\" from string to a float")]
    FloatConversionFailure(String),

    /// An option was registered without an output or a converter.
    #[error("missing bind or converter when binding value from: {0}")]
    NullBindOrConverter(String),

    /// A callback was invoked but none was registered.
    #[error("missing callback when invoking callback for: {0}")]
    NullCallback(String),

    /// The argument list was empty.
    #[error("invalid or empty command line")]
    InvalidCommandLine,

    /// Inline assignment with nothing before the separator.
    #[error("no option tag provided on inline assignment: {0}")]
    EmptyOptionTag(String),

    /// Inline assignment with nothing after the separator.
    #[error("no option value provided on inline assignment: {0}")]
    EmptyOptionValue(String),

    /// A value-taking option was not followed by its value.
    #[error("no value provided for option: {0}")]
    NoValueProvided(String),

    /// Attempted to bind a value on an argument that takes none.
    #[error("tried to bind a value on a non-bindable argument")]
    NotBindable,

    /// Attempted to flag an argument that is not a flag.
    #[error("tried to flag a non-flaggable argument")]
    NotFlaggable,

    /// Attempted to call an argument that has no callback.
    #[error("tried to call a non-callable argument")]
    NotCallable,

    /// The token looks like a tag and cannot be used as a value.
    #[error("invalid value provided: {0}")]
    InvalidValue(String),

    /// A flag or command was given an inline value.
    #[error("argument that does not take a value given inline assignment: {0}")]
    ArgumentDoesNotTakeValue(String),

    /// A positional token was found but no positional collector is registered.
    #[error("positional argument \"{0}\" passed but no positional support configured")]
    PositionalsNotSupported(String),

    /// Inline assignment whose value is itself a registered tag.
    #[error("option given a tag as value on inline assignment: {0}")]
    InvalidInlineAssignment(String),
}

impl ParseError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::RepeatedTag(_) => ErrorKind::RepeatedTag,
            Self::InvalidTag(_) => ErrorKind::InvalidTag,
            Self::ConversionFailure(_) => ErrorKind::ConversionFailure,
            Self::CharConversionFailure(_) => ErrorKind::CharConversionFailure,
            Self::IntConversionFailure(_) => ErrorKind::IntConversionFailure,
            Self::FloatConversionFailure(_) => ErrorKind::FloatConversionFailure,
            Self::NullBindOrConverter(_) => ErrorKind::NullBindOrConverter,
            Self::NullCallback(_) => ErrorKind::NullCallback,
            Self::InvalidCommandLine => ErrorKind::InvalidCommandLine,
            Self::EmptyOptionTag(_) => ErrorKind::EmptyOptionTag,
            Self::EmptyOptionValue(_) => ErrorKind::EmptyOptionValue,
            Self::NoValueProvided(_) => ErrorKind::NoValueProvided,
            Self::NotBindable => ErrorKind::NotBindable,
            Self::NotFlaggable => ErrorKind::NotFlaggable,
            Self::NotCallable => ErrorKind::NotCallable,
            Self::InvalidValue(_) => ErrorKind::InvalidValue,
            Self::ArgumentDoesNotTakeValue(_) => ErrorKind::ArgumentDoesNotTakeValue,
            Self::PositionalsNotSupported(_) => ErrorKind::PositionalsNotSupported,
            Self::InvalidInlineAssignment(_) => ErrorKind::InvalidInlineAssignment,
        }
    }

    /// Returns the offending tag or token, when the error carries one.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::RepeatedTag(body)
            | Self::InvalidTag(body)
            | Self::ConversionFailure(body)
            | Self::CharConversionFailure(body)
            | Self::IntConversionFailure(body)
            | Self::FloatConversionFailure(body)
            | Self::NullBindOrConverter(body)
            | Self::NullCallback(body)
            | Self::EmptyOptionTag(body)
            | Self::EmptyOptionValue(body)
            | Self::NoValueProvided(body)
            | Self::InvalidValue(body)
            | Self::ArgumentDoesNotTakeValue(body)
            | Self::PositionalsNotSupported(body)
            | Self::InvalidInlineAssignment(body) => Some(body),
            Self::InvalidCommandLine | Self::NotBindable | Self::NotFlaggable | Self::NotCallable => {
                None
            }
        }
    }

    /// Renders the human-readable message for this error.
    ///
    /// Rendering is pure: the same error always produces the same text.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_cli::ParseError;
    ///
    /// let err = ParseError::NoValueProvided("-o".into());
    /// assert_eq!(err.message(), "no value provided for option: -o");
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
