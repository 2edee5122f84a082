//! Flag bindings.

use crate::output::Slot;

use super::Callback;

/// What a flag does when its tag appears: set a boolean, run a callback, or
/// both (boolean first).
///
/// A flag always has at least one of the two; the constructors make the empty
/// flag unrepresentable.
///
/// # Examples
///
/// ```
/// use simple_cli::{Flag, Parser};
///
/// let mut verbose = false;
/// let mut calls = 0;
/// let mut parser = Parser::new();
/// parser.add_flag(&["-v", "--verbose"], Flag::bind(&mut verbose).with_callback(|| calls += 1))?;
/// parser.parse(["prog", "-v"])?;
/// drop(parser);
/// assert!(verbose);
/// assert_eq!(calls, 1);
/// # Ok::<(), simple_cli::ParseError>(())
/// ```
pub struct Flag<'a> {
    slot: Option<Box<dyn Slot<bool> + 'a>>,
    callback: Option<Callback<'a>>,
}

impl<'a> Flag<'a> {
    /// A flag that sets `slot` to `true`.
    #[must_use]
    pub fn bind(slot: impl Slot<bool> + 'a) -> Self {
        Self {
            slot: Some(Box::new(slot)),
            callback: None,
        }
    }

    /// A flag that runs `callback`.
    #[must_use]
    pub fn callback(callback: impl FnMut() + 'a) -> Self {
        Self {
            slot: None,
            callback: Some(Box::new(callback)),
        }
    }

    /// Runs `callback` after the boolean is set.
    #[must_use]
    pub fn with_callback(mut self, callback: impl FnMut() + 'a) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Clears the bound boolean so an absent flag reads `false`.
    pub(crate) fn reset(&mut self) {
        if let Some(slot) = self.slot.as_deref_mut() {
            slot.store(false);
        }
    }

    pub(crate) fn raise(&mut self) {
        if let Some(slot) = self.slot.as_deref_mut() {
            slot.store(true);
        }
        if let Some(callback) = self.callback.as_mut() {
            callback();
        }
    }
}
