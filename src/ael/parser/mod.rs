mod expression;
mod name;
mod statement;
mod tree;

pub use self::tree::{ExpressionNode, StatementNode};

use nom::character::complete::multispace0;
use nom::multi::many1;
use nom::sequence::{delimited, terminated};
use nom::IResult;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("syntax error near `{0}`")]
    Syntax(String),
    #[error("unexpected trailing input `{0}`")]
    RemainingInput(String),
}

/// Parses a whole source unit into a parse tree.
pub fn parse(source: &str) -> Result<Vec<StatementNode>, Error> {
    finish(terminated(many1(statement::statement), multispace0)(source))
}

/// Parses a single expression, used for expression-level round trips.
pub fn parse_expression(source: &str) -> Result<ExpressionNode, Error> {
    finish(terminated(expression::expression, multispace0)(source))
}

fn finish<T>(result: IResult<&str, T>) -> Result<T, Error> {
    match result {
        Ok(("", parsed)) => Ok(parsed),
        Ok((rest, _)) => Err(Error::RemainingInput(snippet(rest))),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(Error::Syntax(snippet(e.input))),
        Err(nom::Err::Incomplete(_)) => Err(Error::Syntax(String::new())),
    }
}

fn snippet(input: &str) -> String {
    input.trim_start().chars().take(24).collect()
}

/// Tolerates whitespace on either side of a token.
fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}
