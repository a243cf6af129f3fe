use std::collections::HashSet;

use thiserror::Error;

use super::ast::{Expression, Name, Program, Statement};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("identifier {0} has not been declared")]
    UndeclaredIdentifier(Name),
}

/// Declaration-before-use check: a single depth-first, left-to-right walk
/// against one flat declared-name set. Returns the program untouched on
/// success; stops at the first violation.
pub fn analyze(program: Program) -> Result<Program, Error> {
    let mut declared = HashSet::new();
    for statement in &program.statements {
        check_statement(statement, &mut declared)?;
    }
    Ok(program)
}

fn check_statement(statement: &Statement, declared: &mut HashSet<Name>) -> Result<(), Error> {
    match statement {
        Statement::Assignment(name, expression) => {
            // Right-hand side first: assignment cannot declare the name it
            // is still reading.
            check_expression(expression, declared)?;
            declared.insert(name.clone());
        }
        Statement::Print(expression) => check_expression(expression, declared)?,
        Statement::While(condition, body) => {
            // Loop bodies share the enclosing namespace; nothing is rolled
            // back afterwards.
            check_expression(condition, declared)?;
            for statement in body {
                check_statement(statement, declared)?;
            }
        }
    }
    Ok(())
}

fn check_expression(expression: &Expression, declared: &HashSet<Name>) -> Result<(), Error> {
    match expression {
        Expression::Literal(_) => Ok(()),
        Expression::Identifier(name) => {
            if declared.contains(name) {
                Ok(())
            } else {
                Err(Error::UndeclaredIdentifier(name.clone()))
            }
        }
        Expression::Unary(_, operand) => check_expression(operand, declared),
        Expression::Binary(_, left, right) => {
            check_expression(left, declared)?;
            check_expression(right, declared)
        }
    }
}
