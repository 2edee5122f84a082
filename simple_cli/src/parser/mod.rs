//! The argument registry and parse entry point.
//!
//! [`Parser`] owns the tag-to-argument mapping. Registration happens before
//! parsing; each `add_*` call validates its tags and either registers them or
//! returns the first failure. Tags registered by the same call are aliases of
//! one argument.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::argument::{Argument, ArgumentKind, Flag};
use crate::error::{ParseError, Result};
use crate::output::{Collection, Scalar};

mod preprocess;
mod scan;
pub mod tag;

use tag::is_valid_tag;

/// Index of an argument in the registry; shared by all of its tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ArgumentId(usize);

/// Command-line parser binding tokens into caller-owned storage.
///
/// The lifetime `'a` is the lifetime of every registered output and
/// callback. Values are written during [`Parser::parse`]; the caller reads
/// them once the parser has been dropped (or is no longer used).
///
/// # Examples
///
/// ```
/// use simple_cli::{Collection, Flag, Parser, Scalar};
///
/// let mut help = false;
/// let mut level = 0_i32;
/// let mut files: Vec<String> = Vec::new();
///
/// let mut parser = Parser::new();
/// parser.add_flag(&["-h", "--help"], Flag::bind(&mut help))?;
/// parser.add_option(&["-l", "--level"], Scalar::new(&mut level))?;
/// parser.add_positional(Collection::new(&mut files));
///
/// assert!(parser.parse(["prog", "--level=-3", "a.txt", "b.txt"])?);
/// drop(parser);
///
/// assert!(!help);
/// assert_eq!(level, -3);
/// assert_eq!(files, ["a.txt", "b.txt"]);
/// # Ok::<(), simple_cli::ParseError>(())
/// ```
#[derive(Default)]
pub struct Parser<'a> {
    arguments: Vec<Argument<'a>>,
    tags: HashMap<String, ArgumentId>,
    positional: Option<Argument<'a>>,
    program: Option<Argument<'a>>,
}

impl<'a> Parser<'a> {
    /// Creates an empty parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a flag under `tags`.
    ///
    /// A bound boolean is reset to `false` immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidTag`] or [`ParseError::RepeatedTag`] for
    /// the first offending tag. Tags before it stay registered.
    pub fn add_flag(&mut self, tags: &[&str], mut flag: Flag<'a>) -> Result<()> {
        flag.reset();
        self.register(tags, Argument::Flag(flag))
    }

    /// Registers a command: a tag that runs `callback` each time it appears.
    ///
    /// # Errors
    ///
    /// Same as [`Parser::add_flag`].
    pub fn add_command(&mut self, tags: &[&str], callback: impl FnMut() + 'a) -> Result<()> {
        self.register(tags, Argument::Command(Box::new(callback)))
    }

    /// Registers a single-value option; the last occurrence wins.
    ///
    /// A default configured on `value` is written now.
    ///
    /// # Errors
    ///
    /// Same as [`Parser::add_flag`].
    pub fn add_option<T: 'a>(&mut self, tags: &[&str], value: Scalar<'a, T>) -> Result<()> {
        self.register(tags, Argument::Option(value.into_binder()))
    }

    /// Registers an option that appends one value per occurrence.
    ///
    /// # Errors
    ///
    /// Same as [`Parser::add_flag`].
    pub fn add_repeatable_option<T: 'a>(
        &mut self,
        tags: &[&str],
        values: Collection<'a, T>,
    ) -> Result<()> {
        self.register(tags, Argument::RepeatableOption(values.into_binder()))
    }

    /// Registers an option that appends every following non-tag token.
    ///
    /// # Errors
    ///
    /// Same as [`Parser::add_flag`].
    pub fn add_variadic_option<T: 'a>(
        &mut self,
        tags: &[&str],
        values: Collection<'a, T>,
    ) -> Result<()> {
        self.register(tags, Argument::VariadicOption(values.into_binder()))
    }

    /// Registers the positional collector, replacing any previous one.
    pub fn add_positional<T: 'a>(&mut self, values: Collection<'a, T>) {
        if self.positional.is_some() {
            warn!("replacing the registered positional collector");
        }
        self.positional = Some(Argument::Positional(values.into_binder()));
        debug!(kind = ?ArgumentKind::Positional, "registered argument");
    }

    /// Registers the program-name binder, replacing any previous one.
    pub fn add_program<T: 'a>(&mut self, value: Scalar<'a, T>) {
        if self.program.is_some() {
            warn!("replacing the registered program binder");
        }
        self.program = Some(Argument::Program(value.into_binder()));
        debug!(kind = ?ArgumentKind::Program, "registered argument");
    }

    /// Returns `true` when `tag` is registered.
    #[must_use]
    pub fn contains_tag(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    /// Returns the kind of the argument registered under `tag`.
    #[must_use]
    pub fn kind_of(&self, tag: &str) -> Option<ArgumentKind> {
        self.argument(tag).map(Argument::kind)
    }

    /// Returns `true` when a positional collector is registered.
    #[must_use]
    pub const fn has_positional(&self) -> bool {
        self.positional.is_some()
    }

    /// Returns `true` when a program-name binder is registered.
    #[must_use]
    pub const fn has_program(&self) -> bool {
        self.program.is_some()
    }

    fn argument(&self, tag: &str) -> Option<&Argument<'a>> {
        let id = self.tags.get(tag)?;
        self.arguments.get(id.0)
    }

    fn argument_mut(&mut self, tag: &str) -> Option<&mut Argument<'a>> {
        let id = self.tags.get(tag)?;
        self.arguments.get_mut(id.0)
    }

    fn register(&mut self, tags: &[&str], argument: Argument<'a>) -> Result<()> {
        let id = ArgumentId(self.arguments.len());
        let kind = argument.kind();
        let mut claimed = 0_usize;
        let outcome = tags.iter().try_for_each(|tag| {
            self.claim(tag, id)?;
            claimed += 1;
            debug!(tag, ?kind, "registered argument");
            Ok(())
        });
        if claimed > 0 {
            self.arguments.push(argument);
        }
        outcome
    }

    fn claim(&mut self, tag: &str, id: ArgumentId) -> Result<()> {
        if !is_valid_tag(tag) {
            return Err(ParseError::InvalidTag(tag.to_owned()));
        }
        if self.contains_tag(tag) {
            return Err(ParseError::RepeatedTag(tag.to_owned()));
        }
        self.tags.insert(tag.to_owned(), id);
        Ok(())
    }
}
