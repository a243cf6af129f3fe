use nom::bytes::complete::{tag, take_while};
use nom::character::complete::satisfy;
use nom::combinator::{not, recognize};
use nom::error::{Error as NomError, ErrorKind};
use nom::sequence::{pair, terminated};
use nom::IResult;

const KEYWORDS: &[&str] = &["print", "while"];

/// `id = ~(print | while) letter alnum*`
pub fn identifier(input: &str) -> IResult<&str, &str> {
    let (rest, name) = recognize(pair(
        satisfy(|c: char| c.is_ascii_alphabetic()),
        take_while(|c: char| c.is_ascii_alphanumeric()),
    ))(input)?;
    if KEYWORDS.contains(&name) {
        return Err(nom::Err::Error(NomError::new(input, ErrorKind::Tag)));
    }
    Ok((rest, name))
}

/// Reserved word followed by a non-alphanumeric boundary, so that e.g.
/// `printx` lexes as an identifier rather than `print` + `x`.
pub fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    terminated(tag(word), not(satisfy(|c: char| c.is_ascii_alphanumeric())))
}
