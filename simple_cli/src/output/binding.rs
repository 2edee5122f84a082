//! Typed output bindings handed to the registration operations.
//!
//! [`Scalar`] pairs a [`Slot`] with a converter (and an optional default),
//! [`Collection`] does the same for a [`Sequence`]. Both erase into a
//! [`Binder`] once registered, so the parser stores one shape regardless of
//! the bound type.

use crate::argument::Binder;
use crate::convert::{Converter, FromArgument};
use crate::error::Result;

use super::{Sequence, Slot};

/// A single-value output binding.
///
/// # Examples
///
/// ```
/// use simple_cli::{Parser, Scalar};
///
/// let mut port = 0_u16;
/// let mut parser = Parser::new();
/// parser.add_option(&["-p", "--port"], Scalar::new(&mut port).default_value(8080))?;
/// parser.parse(["prog", "--port", "9000"])?;
/// drop(parser);
/// assert_eq!(port, 9000);
/// # Ok::<(), simple_cli::ParseError>(())
/// ```
pub struct Scalar<'a, T> {
    slot: Box<dyn Slot<T> + 'a>,
    converter: Converter<'a, T>,
    default: Option<T>,
}

impl<'a, T: FromArgument + 'a> Scalar<'a, T> {
    /// Binds `slot` using the built-in converter for `T`.
    #[must_use]
    pub fn new(slot: impl Slot<T> + 'a) -> Self {
        Self::with_converter(slot, T::from_argument)
    }
}

impl<'a, T: 'a> Scalar<'a, T> {
    /// Binds `slot` using a caller-supplied converter.
    #[must_use]
    pub fn with_converter(
        slot: impl Slot<T> + 'a,
        converter: impl Fn(&str) -> Result<T> + 'a,
    ) -> Self {
        Self {
            slot: Box::new(slot),
            converter: Box::new(converter),
            default: None,
        }
    }

    /// Writes `value` into the slot when the binding is registered.
    #[must_use]
    pub fn default_value(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    pub(crate) fn into_binder(self) -> Binder<'a> {
        let Self {
            mut slot,
            converter,
            default,
        } = self;
        if let Some(value) = default {
            slot.store(value);
        }
        Box::new(move |token: &str| {
            slot.store(converter(token)?);
            Ok(())
        })
    }
}

/// An ordered multi-value output binding.
pub struct Collection<'a, T> {
    sequence: Box<dyn Sequence<T> + 'a>,
    converter: Converter<'a, T>,
    defaults: Option<Vec<T>>,
}

impl<'a, T: FromArgument + 'a> Collection<'a, T> {
    /// Binds `sequence` using the built-in converter for `T`.
    #[must_use]
    pub fn new(sequence: impl Sequence<T> + 'a) -> Self {
        Self::with_converter(sequence, T::from_argument)
    }
}

impl<'a, T: 'a> Collection<'a, T> {
    /// Binds `sequence` using a caller-supplied converter.
    #[must_use]
    pub fn with_converter(
        sequence: impl Sequence<T> + 'a,
        converter: impl Fn(&str) -> Result<T> + 'a,
    ) -> Self {
        Self {
            sequence: Box::new(sequence),
            converter: Box::new(converter),
            defaults: None,
        }
    }

    /// Replaces the sequence with `values` when the binding is registered.
    ///
    /// Values bound during parsing are appended after the defaults.
    #[must_use]
    pub fn default_values(mut self, values: Vec<T>) -> Self {
        self.defaults = Some(values);
        self
    }

    pub(crate) fn into_binder(self) -> Binder<'a> {
        let Self {
            mut sequence,
            converter,
            defaults,
        } = self;
        if let Some(values) = defaults {
            sequence.assign(values);
        }
        Box::new(move |token: &str| {
            sequence.append(converter(token)?);
            Ok(())
        })
    }
}
