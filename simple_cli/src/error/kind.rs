//! Closed classification of every failure the parser can report.

/// Discriminant of a [`super::ParseError`] without its context.
///
/// Callers that only need to branch on the failure category can match on the
/// kind instead of destructuring the error itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A tag was registered twice.
    RepeatedTag,
    /// A tag does not follow the short or long tag grammar.
    InvalidTag,
    /// A caller converter or the generic `FromStr` converter rejected a token.
    ConversionFailure,
    /// A token could not be converted into a `char`.
    CharConversionFailure,
    /// A token could not be converted into an integer.
    IntConversionFailure,
    /// A token could not be converted into a floating point number.
    FloatConversionFailure,
    /// An option was registered without an output or a converter.
    NullBindOrConverter,
    /// A callback was requested but none was registered.
    NullCallback,
    /// The argument list did not even contain a program name.
    InvalidCommandLine,
    /// An inline assignment had nothing before the separator.
    EmptyOptionTag,
    /// An inline assignment had nothing after the separator.
    EmptyOptionValue,
    /// A value-taking option was not followed by a value.
    NoValueProvided,
    /// A value was bound to an argument that does not accept one.
    NotBindable,
    /// An argument that is not a flag was flagged.
    NotFlaggable,
    /// An argument without a callback was invoked.
    NotCallable,
    /// A token was rejected as a value because it looks like a tag.
    InvalidValue,
    /// A flag or command was given an inline value.
    ArgumentDoesNotTakeValue,
    /// A positional token appeared but no positional collector exists.
    PositionalsNotSupported,
    /// An inline assignment used a registered tag as its value.
    InvalidInlineAssignment,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 19] = [
        Self::RepeatedTag,
        Self::InvalidTag,
        Self::ConversionFailure,
        Self::CharConversionFailure,
        Self::IntConversionFailure,
        Self::FloatConversionFailure,
        Self::NullBindOrConverter,
        Self::NullCallback,
        Self::InvalidCommandLine,
        Self::EmptyOptionTag,
        Self::EmptyOptionValue,
        Self::NoValueProvided,
        Self::NotBindable,
        Self::NotFlaggable,
        Self::NotCallable,
        Self::InvalidValue,
        Self::ArgumentDoesNotTakeValue,
        Self::PositionalsNotSupported,
        Self::InvalidInlineAssignment,
    ];

    /// Returns `true` for the conversion family of failures.
    #[must_use]
    pub const fn is_conversion(self) -> bool {
        matches!(
            self,
            Self::ConversionFailure
                | Self::CharConversionFailure
                | Self::IntConversionFailure
                | Self::FloatConversionFailure
        )
    }

    /// Returns `true` when errors of this kind carry the offending token.
    #[must_use]
    pub const fn has_body(self) -> bool {
        !matches!(
            self,
            Self::InvalidCommandLine | Self::NotBindable | Self::NotFlaggable | Self::NotCallable
        )
    }
}
