//! Argument descriptors.
//!
//! Every registered argument is one [`Argument`] value: a closed tagged
//! variant whose case decides whether it takes a value, what binding means
//! and what flagging means. Capability checks are exhaustive matches, so the
//! "not bindable", "not flaggable" and "not callable" failures only exist as
//! fallback arms.

use crate::error::{ParseError, Result};

mod flag;

pub use flag::Flag;

/// Type-erased value binding: converts a token and writes it to the caller's
/// output.
pub(crate) type Binder<'a> = Box<dyn FnMut(&str) -> Result<()> + 'a>;

/// Caller-supplied action run when a tag is seen.
pub(crate) type Callback<'a> = Box<dyn FnMut() + 'a>;

/// Kind of a registered argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    /// Presence switch: sets a boolean and/or runs a callback.
    Flag,
    /// Tag that only runs a callback.
    Command,
    /// Takes exactly one value; the last occurrence wins.
    Option,
    /// Takes one value per occurrence, appended in order.
    RepeatableOption,
    /// Takes every following non-tag token until the next tag.
    VariadicOption,
    /// Collects tokens that match no tag and are not option values.
    Positional,
    /// Receives the program name.
    Program,
}

impl ArgumentKind {
    /// Returns `true` when arguments of this kind consume values.
    #[must_use]
    pub const fn takes_value(self) -> bool {
        !matches!(self, Self::Flag | Self::Command)
    }
}

/// A registered argument and its behaviour.
pub(crate) enum Argument<'a> {
    Flag(Flag<'a>),
    Command(Callback<'a>),
    Option(Binder<'a>),
    RepeatableOption(Binder<'a>),
    VariadicOption(Binder<'a>),
    Positional(Binder<'a>),
    Program(Binder<'a>),
}

impl Argument<'_> {
    pub(crate) const fn kind(&self) -> ArgumentKind {
        match self {
            Self::Flag(_) => ArgumentKind::Flag,
            Self::Command(_) => ArgumentKind::Command,
            Self::Option(_) => ArgumentKind::Option,
            Self::RepeatableOption(_) => ArgumentKind::RepeatableOption,
            Self::VariadicOption(_) => ArgumentKind::VariadicOption,
            Self::Positional(_) => ArgumentKind::Positional,
            Self::Program(_) => ArgumentKind::Program,
        }
    }

    pub(crate) const fn takes_value(&self) -> bool {
        self.kind().takes_value()
    }

    /// Converts `token` and writes it to the bound output.
    pub(crate) fn bind(&mut self, token: &str) -> Result<()> {
        match self {
            Self::Option(binder)
            | Self::RepeatableOption(binder)
            | Self::VariadicOption(binder)
            | Self::Positional(binder)
            | Self::Program(binder) => binder(token),
            Self::Flag(_) | Self::Command(_) => Err(ParseError::NotBindable),
        }
    }

    /// Sets the bound boolean, then runs the callback.
    pub(crate) fn flag(&mut self) -> Result<()> {
        match self {
            Self::Flag(flag) => {
                flag.raise();
                Ok(())
            }
            _ => Err(ParseError::NotFlaggable),
        }
    }

    pub(crate) fn call(&mut self) -> Result<()> {
        match self {
            Self::Command(callback) => {
                callback();
                Ok(())
            }
            _ => Err(ParseError::NotCallable),
        }
    }
}
