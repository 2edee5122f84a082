//! The left-to-right scan that classifies and binds tokens.

use tracing::{debug, trace};

use crate::argument::{Argument, ArgumentKind};
use crate::error::{ParseError, Result};

use super::Parser;
use super::tag::is_valid_value;

impl Parser<'_> {
    /// Parses a full argument list, program name first.
    ///
    /// Returns `Ok(false)` when the list holds only the program name (nothing
    /// is bound, not even the program name) and `Ok(true)` once every token
    /// has been consumed.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidCommandLine`] for an empty list, otherwise
    /// the first preprocessing, binding or conversion failure. Outputs written
    /// before the failure keep their new values.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_cli::{Collection, ErrorKind, Parser};
    ///
    /// let mut strings: Vec<String> = Vec::new();
    /// let mut parser = Parser::new();
    /// parser.add_variadic_option(&["-s"], Collection::new(&mut strings))?;
    ///
    /// assert_eq!(parser.parse(["prog"]), Ok(false));
    /// assert_eq!(parser.parse(["prog", "-s", "a", "b"]), Ok(true));
    /// let err = parser.parse(Vec::<String>::new()).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidCommandLine);
    /// drop(parser);
    /// assert_eq!(strings, ["a", "b"]);
    /// # Ok::<(), simple_cli::ParseError>(())
    /// ```
    pub fn parse<I, S>(&mut self, args: I) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parse_tokens(args.into_iter().map(Into::into).collect())
            .inspect_err(|err| debug!(kind = ?err.kind(), body = err.body(), "parse failed"))
    }

    fn parse_tokens(&mut self, args: Vec<String>) -> Result<bool> {
        let mut tokens = args.into_iter();
        let program = tokens.next().ok_or(ParseError::InvalidCommandLine)?;
        let raw: Vec<String> = tokens.collect();
        if raw.is_empty() {
            debug!(program = %program, "no arguments to parse");
            return Ok(false);
        }
        if let Some(binder) = self.program.as_mut() {
            bind_value(binder, &program)?;
        }
        let rewritten = self.preprocess(raw)?;
        let mut scan = Scan::new(self);
        for token in rewritten {
            scan.step(token)?;
        }
        scan.finish()?;
        Ok(true)
    }
}

/// State threaded through one scan: the last tag seen and whether it still
/// expects a value.
struct Scan<'p, 'a> {
    parser: &'p mut Parser<'a>,
    previous_tag: String,
    previous_takes_value: bool,
}

impl<'p, 'a> Scan<'p, 'a> {
    const fn new(parser: &'p mut Parser<'a>) -> Self {
        Self {
            parser,
            previous_tag: String::new(),
            previous_takes_value: false,
        }
    }

    fn step(&mut self, token: String) -> Result<()> {
        if let Some(kind) = self.parser.kind_of(&token) {
            return self.enter_tag(token, kind);
        }
        if self.previous_takes_value {
            return self.bind_pending(&token);
        }
        self.bind_positional(token)
    }

    fn enter_tag(&mut self, token: String, kind: ArgumentKind) -> Result<()> {
        self.ensure_not_awaiting()?;
        trace!(tag = %token, ?kind, "matched tag");
        if let Some(argument) = self.parser.argument_mut(&token) {
            match kind {
                ArgumentKind::Flag => argument.flag()?,
                ArgumentKind::Command => argument.call()?,
                _ => {}
            }
        }
        self.previous_takes_value = kind.takes_value();
        self.previous_tag = token;
        Ok(())
    }

    fn bind_pending(&mut self, token: &str) -> Result<()> {
        let Some(argument) = self.parser.argument_mut(&self.previous_tag) else {
            return Ok(());
        };
        trace!(tag = %self.previous_tag, value = token, "binding option value");
        bind_value(argument, token)?;
        if argument.kind() != ArgumentKind::VariadicOption {
            self.previous_takes_value = false;
        }
        Ok(())
    }

    fn bind_positional(&mut self, token: String) -> Result<()> {
        let Some(positional) = self.parser.positional.as_mut() else {
            return Err(ParseError::PositionalsNotSupported(token));
        };
        trace!(value = %token, "binding positional");
        bind_value(positional, &token)
    }

    /// Fails when the previous tag still waits for its value; variadic
    /// options may close without any.
    fn ensure_not_awaiting(&self) -> Result<()> {
        let awaiting = self.previous_takes_value
            && self.parser.kind_of(&self.previous_tag) != Some(ArgumentKind::VariadicOption);
        if awaiting {
            return Err(ParseError::NoValueProvided(self.previous_tag.clone()));
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.ensure_not_awaiting()
    }
}

fn bind_value(argument: &mut Argument<'_>, token: &str) -> Result<()> {
    if !is_valid_value(token) {
        return Err(ParseError::InvalidValue(token.to_owned()));
    }
    argument.bind(token)
}
