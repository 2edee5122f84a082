//! Shared helpers for the parsing scenarios.

use anyhow::{Result, anyhow, ensure};
use simple_cli::{ErrorKind, ParseError};

pub(crate) use test_helpers::argv::{split, with_program};
pub(crate) use test_helpers::calls::CallLog;

/// Converts a parse result into `anyhow`, keeping the rendered message.
pub(crate) fn parsed(result: simple_cli::Result<bool>) -> Result<bool> {
    result.map_err(|err| anyhow!("unexpected parse failure: {err}"))
}

/// Checks that `result` failed with `kind` and `body`.
pub(crate) fn expect_failure(
    result: simple_cli::Result<bool>,
    kind: ErrorKind,
    body: Option<&str>,
) -> Result<ParseError> {
    let err = match result {
        Ok(parsed) => return Err(anyhow!("expected {kind:?}, parse returned {parsed}")),
        Err(err) => err,
    };
    ensure!(err.kind() == kind, "expected {kind:?}, got {err:?}");
    ensure!(
        err.body() == body,
        "expected body {body:?}, got {:?}",
        err.body()
    );
    Ok(err)
}
