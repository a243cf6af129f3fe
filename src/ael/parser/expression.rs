use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1};
use nom::combinator::{map, map_res, opt};
use nom::multi::fold_many0;
use nom::sequence::{delimited, pair, preceded};
use nom::IResult;

use super::name::identifier;
use super::tree::ExpressionNode;
use super::ws;

/// `Exp := Exp ("+"|"-") Term | Term`, left recursion folded iteratively.
pub fn expression(input: &str) -> IResult<&str, ExpressionNode> {
    let (input, first) = term(input)?;
    fold_many0(
        pair(ws(alt((tag("+"), tag("-")))), term),
        move || first.clone(),
        fold_binary,
    )(input)
}

/// `Term := Term ("*"|"/") PowerTerm | PowerTerm`
fn term(input: &str) -> IResult<&str, ExpressionNode> {
    let (input, first) = power_term(input)?;
    fold_many0(
        pair(ws(alt((tag("*"), tag("/")))), power_term),
        move || first.clone(),
        fold_binary,
    )(input)
}

/// `PowerTerm := Factor "**" PowerTerm | Factor` (right recursive)
fn power_term(input: &str) -> IResult<&str, ExpressionNode> {
    let (input, base) = factor(input)?;
    let (input, exponent) = opt(preceded(ws(tag("**")), power_term))(input)?;
    Ok((
        input,
        match exponent {
            Some(exponent) => ExpressionNode::Binary {
                operator: "**".to_string(),
                left: Box::new(base),
                right: Box::new(exponent),
            },
            None => base,
        },
    ))
}

/// `Factor := "-" Primary | Primary`
fn factor(input: &str) -> IResult<&str, ExpressionNode> {
    alt((
        map(preceded(ws(char('-')), primary), |operand| {
            ExpressionNode::Unary {
                operator: "-".to_string(),
                operand: Box::new(operand),
            }
        }),
        primary,
    ))(input)
}

/// `Primary := "(" Exp ")" | number | id`
fn primary(input: &str) -> IResult<&str, ExpressionNode> {
    alt((
        map(
            delimited(ws(char('(')), expression, ws(char(')'))),
            |inner| ExpressionNode::Group(Box::new(inner)),
        ),
        number,
        map(ws(identifier), |name| {
            ExpressionNode::Identifier(name.to_string())
        }),
    ))(input)
}

/// `number = digit+`
fn number(input: &str) -> IResult<&str, ExpressionNode> {
    map_res(ws(digit1), |digits: &str| {
        digits.parse::<f64>().map(ExpressionNode::Number)
    })(input)
}

fn fold_binary(left: ExpressionNode, (operator, right): (&str, ExpressionNode)) -> ExpressionNode {
    ExpressionNode::Binary {
        operator: operator.to_string(),
        left: Box::new(left),
        right: Box::new(right),
    }
}
