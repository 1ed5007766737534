//! Library of parser functions for material card lines

// nom parser combinators
use nom::bytes::complete::{take_until, take_while1};
use nom::character::complete::{char, digit1, multispace1, one_of};
use nom::combinator::{all_consuming, map_res, opt, verify};
use nom::number::complete::recognize_float;
use nom::sequence::{pair, preceded, terminated};
use nom::IResult;

// ! Boolean checks
/// Check for a comment line, `c` or `C` followed by whitespace
///
/// Leading whitespace is allowed, but the marker must be followed by some
/// whitespace and then content. A lone `c` is not a comment.
pub(crate) fn is_comment(i: &str) -> bool {
    comment_marker(i.trim()).is_ok()
}

/// Check for a line that starts with any whitespace
pub(crate) fn is_indented(i: &str) -> bool {
    i.starts_with(char::is_whitespace)
}

// ! Line parsers
/// The `c` marker of a comment line
fn comment_marker(i: &str) -> IResult<&str, char> {
    terminated(one_of("cC"), multispace1)(i)
}

/// Start of a new material card `M<digits> <data>`
///
/// Returns the material number, leaving the remaining data as input. The
/// card must have some data following the number.
pub(crate) fn material_start(i: &str) -> IResult<&str, &str> {
    preceded(one_of("mM"), terminated(digit1, multispace1))(i.trim())
}

/// Split the data portion of a line from its `$` comment
///
/// The comment keeps the `$` marker. Either may be empty.
pub(crate) fn data_and_comment(i: &str) -> (&str, &str) {
    match take_until::<_, _, nom::error::Error<&str>>("$")(i) {
        Ok((comment, data)) => (data, comment.trim_end()),
        Err(_) => (i, ""),
    }
}

// ! Token parsers
/// ZAID token `<digits>[.<suffix>]` as the ZAID and optional library
pub(crate) fn zaid(i: &str) -> IResult<&str, (u32, Option<&str>)> {
    all_consuming(pair(
        map_res(digit1, str::parse::<u32>),
        opt(preceded(char('.'), library)),
    ))(i)
}

/// Library identifiers are any run of word characters, e.g. `70c`, `80p`
fn library(i: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(i)
}

/// Fraction token, which must be a complete decimal number
///
/// Signs, decimal points, and exponents are all optional. Values that
/// overflow to infinity are rejected.
pub(crate) fn fraction(i: &str) -> IResult<&str, f64> {
    all_consuming(verify(
        map_res(recognize_float, str::parse::<f64>),
        |v: &f64| v.is_finite(),
    ))(i)
}
