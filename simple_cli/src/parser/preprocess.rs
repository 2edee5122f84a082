//! Token rewriting ahead of the scan.
//!
//! Empty tokens are dropped and `tag=value` tokens for registered
//! value-taking tags are split into `tag` and `value`. The split-off value is
//! examined again as an ordinary token, so `--a=b=c` yields `--a` and `b=c`.

use std::collections::VecDeque;

use tracing::trace;

use crate::error::{ParseError, Result};

use super::Parser;
use super::tag::INLINE_SEPARATOR;

impl Parser<'_> {
    /// Rewrites the raw tokens (program name excluded) for scanning.
    pub(super) fn preprocess(&self, tokens: Vec<String>) -> Result<Vec<String>> {
        let mut pending: VecDeque<String> = tokens.into();
        let mut rewritten = Vec::with_capacity(pending.len());
        while let Some(token) = pending.pop_front() {
            if token.is_empty() {
                trace!("dropping empty token");
                continue;
            }
            let Some((tag, value)) = token.split_once(INLINE_SEPARATOR) else {
                rewritten.push(token);
                continue;
            };
            match self.argument(tag) {
                Some(argument) if !argument.takes_value() => {
                    return Err(ParseError::ArgumentDoesNotTakeValue(token));
                }
                Some(_) => {}
                None if tag.is_empty() => return Err(ParseError::EmptyOptionTag(token)),
                None => {
                    rewritten.push(token);
                    continue;
                }
            }
            if self.contains_tag(value) {
                return Err(ParseError::InvalidInlineAssignment(token));
            }
            if value.is_empty() {
                return Err(ParseError::EmptyOptionValue(token));
            }
            trace!(tag, value, "splitting inline assignment");
            pending.push_front(value.to_owned());
            rewritten.push(tag.to_owned());
        }
        Ok(rewritten)
    }
}
