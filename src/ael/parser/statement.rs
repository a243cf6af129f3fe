use nom::branch::alt;
use nom::character::complete::char;
use nom::combinator::map;
use nom::multi::many1;
use nom::sequence::{delimited, pair, tuple};
use nom::IResult;

use super::expression::expression;
use super::name::{identifier, keyword};
use super::tree::StatementNode;
use super::ws;

pub fn statement(input: &str) -> IResult<&str, StatementNode> {
    alt((while_statement, print_statement, assignment))(input)
}

/// `Statement := id "=" Exp ";"`
fn assignment(input: &str) -> IResult<&str, StatementNode> {
    map(
        tuple((ws(identifier), ws(char('=')), expression, ws(char(';')))),
        |(name, _, expression, _)| StatementNode::Assign {
            name: name.to_string(),
            expression,
        },
    )(input)
}

/// `Statement := "print" Exp ";"`
fn print_statement(input: &str) -> IResult<&str, StatementNode> {
    map(
        delimited(ws(keyword("print")), expression, ws(char(';'))),
        |expression| StatementNode::Print { expression },
    )(input)
}

/// `WhileStatement := "while" "(" Exp ")" "{" (Statement|WhileStatement)+ "}"`
fn while_statement(input: &str) -> IResult<&str, StatementNode> {
    map(
        pair(
            delimited(
                pair(ws(keyword("while")), ws(char('('))),
                expression,
                ws(char(')')),
            ),
            delimited(ws(char('{')), many1(statement), ws(char('}'))),
        ),
        |(condition, body)| StatementNode::While { condition, body },
    )(input)
}
