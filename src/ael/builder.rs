use super::ast::{Expression, Name, Program, Statement};
use super::operator::{BinaryOperator, UnaryOperator, UnknownOperator};
use super::parser::{ExpressionNode, StatementNode};

/// Maps a parse tree onto AST nodes, one constructor per grammar
/// production. The only way this fails is an operator symbol outside the
/// catalog, which a grammar-conformant parse cannot produce.
pub fn build(tree: &[StatementNode]) -> Result<Program, UnknownOperator> {
    let statements = tree
        .iter()
        .map(build_statement)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Program::new(statements))
}

pub fn build_statement(node: &StatementNode) -> Result<Statement, UnknownOperator> {
    Ok(match node {
        StatementNode::Assign { name, expression } => {
            Statement::Assignment(Name::new(name), build_expression(expression)?)
        }
        StatementNode::Print { expression } => Statement::Print(build_expression(expression)?),
        StatementNode::While { condition, body } => Statement::While(
            build_expression(condition)?,
            body.iter()
                .map(build_statement)
                .collect::<Result<Vec<_>, _>>()?,
        ),
    })
}

pub fn build_expression(node: &ExpressionNode) -> Result<Expression, UnknownOperator> {
    Ok(match node {
        ExpressionNode::Number(value) => Expression::Literal(*value),
        ExpressionNode::Identifier(name) => Expression::Identifier(Name::new(name)),
        // Explicit grouping carries no meaning of its own; the code
        // generator re-derives parentheses from precedence.
        ExpressionNode::Group(inner) => build_expression(inner)?,
        ExpressionNode::Unary { operator, operand } => Expression::Unary(
            UnaryOperator::from_symbol(operator)?,
            Box::new(build_expression(operand)?),
        ),
        ExpressionNode::Binary {
            operator,
            left,
            right,
        } => Expression::Binary(
            BinaryOperator::from_symbol(operator)?,
            Box::new(build_expression(left)?),
            Box::new(build_expression(right)?),
        ),
    })
}
