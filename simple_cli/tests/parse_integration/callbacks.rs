//! Flag and command callbacks.

use std::cell::Cell;

use anyhow::{Result, ensure};
use rstest::rstest;
use simple_cli::{Flag, Parser};

use super::common::{CallLog, with_program};

#[rstest]
fn flag_sets_bool_before_single_callback() -> Result<()> {
    let help = Cell::new(false);
    let seen_in_callback = Cell::new(None);
    let calls = Cell::new(0_u32);
    {
        let mut parser = Parser::new();
        parser.add_flag(
            &["-h", "--help"],
            Flag::bind(&help).with_callback(|| {
                seen_in_callback.set(Some(help.get()));
                calls.set(calls.get() + 1);
            }),
        )?;
        parser.parse(with_program(&["-h"]))?;
    }
    ensure!(help.get());
    ensure!(seen_in_callback.get() == Some(true), "callback ran before the bool was set");
    ensure!(calls.get() == 1, "expected one call, got {}", calls.get());
    Ok(())
}

#[rstest]
#[case::present(&["--verbose"], true)]
#[case::absent(&[], false)]
fn flag_bound_to_plain_bool(#[case] args: &[&str], #[case] expected: bool) -> Result<()> {
    let mut verbose = !expected;
    {
        let mut parser = Parser::new();
        parser.add_flag(&["-v", "--verbose"], Flag::bind(&mut verbose))?;
        parser.parse(with_program(args))?;
    }
    ensure!(verbose == expected, "expected {expected}, got {verbose}");
    Ok(())
}

#[rstest]
fn callbacks_run_in_command_line_order() -> Result<()> {
    let log = CallLog::new();
    {
        let mut parser = Parser::new();
        parser.add_flag(&["-a"], Flag::callback(log.recorder("a")))?;
        parser.add_command(&["--bee"], log.recorder("bee"))?;
        parser.parse(with_program(&["--bee", "-a", "--bee"]))?;
    }
    log.ensure_events(&["bee", "a", "bee"])?;
    Ok(())
}

#[rstest]
#[case::once(&["-v"], 1)]
#[case::aliases(&["-v", "--verbose"], 2)]
#[case::absent(&[], 0)]
fn flag_callback_runs_per_occurrence(#[case] args: &[&str], #[case] expected: usize) -> Result<()> {
    let log = CallLog::new();
    {
        let mut parser = Parser::new();
        parser.add_flag(&["-v", "--verbose"], Flag::callback(log.recorder("verbose")))?;
        parser.parse(with_program(args))?;
    }
    let count = log.count("verbose");
    ensure!(count == expected, "expected {expected} calls, got {count}");
    Ok(())
}

#[rstest]
fn callback_runs_even_when_later_token_fails() -> Result<()> {
    let log = CallLog::new();
    let mut parser = Parser::new();
    parser.add_command(&["--go"], log.recorder("go"))?;
    ensure!(parser.parse(with_program(&["--go", "stray"])).is_err());
    drop(parser);
    log.ensure_events(&["go"])?;
    Ok(())
}
