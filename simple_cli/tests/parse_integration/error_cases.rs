//! Registration and parse failures.

use anyhow::{Result, ensure};
use rstest::rstest;
use simple_cli::{Collection, ErrorKind, Flag, ParseError, Parser, Scalar};

use super::common::{expect_failure, with_program};

#[rstest]
#[case::bare_word("help")]
#[case::lone_dash("-")]
#[case::short_long("--h")]
#[case::long_short("-help")]
#[case::empty("")]
fn invalid_tags_are_rejected(#[case] tag: &str) -> Result<()> {
    let mut parser = Parser::new();
    let err = parser.add_command(&[tag], || {});
    ensure!(
        err == Err(ParseError::InvalidTag(tag.to_owned())),
        "got {err:?}"
    );
    ensure!(!parser.contains_tag(tag));
    Ok(())
}

#[rstest]
fn repeated_tags_are_rejected() -> Result<()> {
    let mut first = false;
    let mut second = 0_i32;
    let mut parser = Parser::new();
    parser.add_flag(&["-x", "--extra"], Flag::bind(&mut first))?;
    let err = parser.add_option(&["--extra"], Scalar::new(&mut second));
    ensure!(
        err == Err(ParseError::RepeatedTag(String::from("--extra"))),
        "got {err:?}"
    );
    Ok(())
}

#[rstest]
#[case::missing_at_end(&["-o"], "-o")]
#[case::followed_by_tag(&["-o", "-v"], "-o")]
#[case::long_missing(&["-v", "--option"], "--option")]
fn missing_values_are_reported(#[case] args: &[&str], #[case] tag: &str) -> Result<()> {
    let mut option = String::new();
    let mut verbose = false;
    let mut parser = Parser::new();
    parser.add_option(&["-o", "--option"], Scalar::new(&mut option))?;
    parser.add_flag(&["-v"], Flag::bind(&mut verbose))?;
    expect_failure(
        parser.parse(with_program(args)),
        ErrorKind::NoValueProvided,
        Some(tag),
    )?;
    Ok(())
}

#[rstest]
#[case::empty_value(&["--opt="], ErrorKind::EmptyOptionValue, "--opt=")]
#[case::empty_tag(&["=5"], ErrorKind::EmptyOptionTag, "=5")]
#[case::flag_with_value(&["--verbose=yes"], ErrorKind::ArgumentDoesNotTakeValue, "--verbose=yes")]
#[case::tag_as_value(&["--opt=--verbose"], ErrorKind::InvalidInlineAssignment, "--opt=--verbose")]
#[case::unknown_tag_value(&["--opt", "--nope"], ErrorKind::InvalidValue, "--nope")]
#[case::dash_value(&["--opt", "-"], ErrorKind::InvalidValue, "-")]
#[case::unknown_short(&["-q"], ErrorKind::PositionalsNotSupported, "-q")]
fn malformed_command_lines_fail(
    #[case] args: &[&str],
    #[case] kind: ErrorKind,
    #[case] body: &str,
) -> Result<()> {
    let mut option = 0_i32;
    let mut verbose = false;
    let mut parser = Parser::new();
    parser.add_option(&["--opt"], Scalar::new(&mut option))?;
    parser.add_flag(&["--verbose"], Flag::bind(&mut verbose))?;
    expect_failure(parser.parse(with_program(args)), kind, Some(body))?;
    Ok(())
}

#[rstest]
#[case::int(&["-i", "twelve"], ErrorKind::IntConversionFailure, "twelve")]
#[case::int_overflow(&["-i", "99999999999"], ErrorKind::IntConversionFailure, "99999999999")]
#[case::float(&["-f", "1.2.3"], ErrorKind::FloatConversionFailure, "1.2.3")]
#[case::boolean(&["-b", "True"], ErrorKind::ConversionFailure, "True")]
#[case::character(&["-c", "ab"], ErrorKind::CharConversionFailure, "ab")]
fn conversion_failures_name_the_token(
    #[case] args: &[&str],
    #[case] kind: ErrorKind,
    #[case] body: &str,
) -> Result<()> {
    let mut int = 0_i32;
    let mut float = 0.0_f64;
    let mut boolean = false;
    let mut character = ' ';
    let mut parser = Parser::new();
    parser.add_option(&["-i"], Scalar::new(&mut int))?;
    parser.add_option(&["-f"], Scalar::new(&mut float))?;
    parser.add_option(&["-b"], Scalar::new(&mut boolean))?;
    parser.add_option(&["-c"], Scalar::new(&mut character))?;
    let err = expect_failure(parser.parse(with_program(args)), kind, Some(body))?;
    ensure!(kind.is_conversion());
    ensure!(err.message().contains(body), "got {}", err.message());
    Ok(())
}

#[rstest]
fn empty_command_line_is_invalid() -> Result<()> {
    let mut parser = Parser::new();
    expect_failure(
        parser.parse(Vec::<String>::new()),
        ErrorKind::InvalidCommandLine,
        None,
    )?;
    Ok(())
}

#[rstest]
fn messages_render_identically_each_time() -> Result<()> {
    let mut parser = Parser::new();
    let err = expect_failure(
        parser.parse(with_program(&["stray"])),
        ErrorKind::PositionalsNotSupported,
        Some("stray"),
    )?;
    let first = err.message();
    ensure!(first == err.message());
    ensure!(first == err.to_string());
    ensure!(first.contains("stray"), "got {first}");
    Ok(())
}

#[rstest]
fn values_before_a_failure_are_kept() -> Result<()> {
    let mut first = String::new();
    let mut items: Vec<u8> = Vec::new();
    {
        let mut parser = Parser::new();
        parser.add_option(&["--first"], Scalar::new(&mut first))?;
        parser.add_variadic_option(&["--items"], Collection::new(&mut items))?;
        expect_failure(
            parser.parse(with_program(&["--first", "kept", "--items", "1", "x"])),
            ErrorKind::IntConversionFailure,
            Some("x"),
        )?;
    }
    ensure!(first == "kept", "got {first:?}");
    ensure!(items == [1], "got {items:?}");
    Ok(())
}
