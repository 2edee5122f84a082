//! Positional collection and program-name binding.

use anyhow::{Result, ensure};
use rstest::rstest;
use simple_cli::{Collection, ErrorKind, Flag, Parser, Scalar};

use super::common::{expect_failure, with_program};

#[rstest]
fn positionals_are_collected_in_order() -> Result<()> {
    let mut files: Vec<String> = Vec::new();
    let mut verbose = false;
    {
        let mut parser = Parser::new();
        parser.add_flag(&["-v"], Flag::bind(&mut verbose))?;
        parser.add_positional(Collection::new(&mut files));
        parser.parse(with_program(&["a", "-v", "b", "c=d"]))?;
    }
    ensure!(files == ["a", "b", "c=d"], "got {files:?}");
    ensure!(verbose);
    Ok(())
}

#[rstest]
fn extra_token_without_positional_support_fails() -> Result<()> {
    let mut parser = Parser::new();
    expect_failure(
        parser.parse(with_program(&["extra"])),
        ErrorKind::PositionalsNotSupported,
        Some("extra"),
    )?;
    Ok(())
}

#[rstest]
fn extra_token_with_positional_support_is_collected() -> Result<()> {
    let mut rest: Vec<String> = Vec::new();
    {
        let mut parser = Parser::new();
        parser.add_positional(Collection::new(&mut rest));
        parser.parse(with_program(&["extra"]))?;
    }
    ensure!(rest == ["extra"], "got {rest:?}");
    Ok(())
}

#[rstest]
fn typed_positionals_convert() -> Result<()> {
    let mut numbers: Vec<i32> = Vec::new();
    {
        let mut parser = Parser::new();
        parser.add_positional(Collection::new(&mut numbers));
        parser.parse(with_program(&["1", "-2", "30"]))?;
    }
    ensure!(numbers == [1, -2, 30], "got {numbers:?}");
    Ok(())
}

#[rstest]
fn program_name_is_bound() -> Result<()> {
    let mut program = String::new();
    let mut rest: Vec<String> = Vec::new();
    {
        let mut parser = Parser::new();
        parser.add_program(Scalar::new(&mut program));
        parser.add_positional(Collection::new(&mut rest));
        parser.parse(["./argument_parser", "x"])?;
    }
    ensure!(program == "./argument_parser", "got {program:?}");
    Ok(())
}
