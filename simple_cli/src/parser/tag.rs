//! Tag and value grammar.
//!
//! A short tag is `-` followed by one byte, a long tag is `--` followed by at
//! least two bytes. Lengths are counted in bytes, so `-é` is not a short tag
//! and binds as an ordinary value.

/// Length of a short tag such as `-h`.
pub const SHORT_TAG_LEN: usize = 2;
/// Minimum length of a long tag such as `--ab`.
pub const LONG_TAG_MIN_LEN: usize = 4;
/// Separator of the inline `tag=value` form.
pub const INLINE_SEPARATOR: char = '=';

const TAG_PREFIX: char = '-';
const LONG_TAG_PREFIX: &str = "--";

/// Returns `true` when `tag` may be registered.
///
/// # Examples
///
/// ```
/// use simple_cli::is_valid_tag;
///
/// assert!(is_valid_tag("-h"));
/// assert!(is_valid_tag("--help"));
/// assert!(!is_valid_tag("--h"));
/// assert!(!is_valid_tag("help"));
/// ```
#[must_use]
pub fn is_valid_tag(tag: &str) -> bool {
    let len = tag.len();
    if len >= LONG_TAG_MIN_LEN {
        tag.starts_with(LONG_TAG_PREFIX)
    } else if len == SHORT_TAG_LEN {
        tag.starts_with(TAG_PREFIX)
    } else {
        false
    }
}

/// Returns `true` when `value` may be bound as a value.
///
/// Tokens that look like tags are rejected: a lone `-`, any `--…` token and
/// any two-character `-x` token unless it is a negative single-digit integer
/// such as `-5`.
///
/// # Examples
///
/// ```
/// use simple_cli::is_valid_value;
///
/// assert!(is_valid_value("-5"));
/// assert!(is_valid_value("-12"));
/// assert!(!is_valid_value("-x"));
/// assert!(!is_valid_value("--unknown"));
/// ```
#[must_use]
pub fn is_valid_value(value: &str) -> bool {
    if value == "-" {
        return false;
    }
    if value.len() == SHORT_TAG_LEN && value.starts_with(TAG_PREFIX) {
        return value.parse::<i64>().is_ok();
    }
    !value.starts_with(LONG_TAG_PREFIX)
}
