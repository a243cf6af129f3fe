use std::collections::HashMap;

use thiserror::Error;

use super::ast::{Expression, Name, Program, Statement};
use super::operator::BinaryOperator;

/// Runtime bindings, owned by the caller and passed in per run. Successive
/// runs only share variables if the caller reuses the same store.
pub type Store = HashMap<Name, f64>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("division by zero")]
    DivisionByZero,
    #[error("identifier {0} has no value")]
    UnresolvedIdentifier(Name),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
    Failed,
}

/// Runs `program` to completion against `store`, returning one line of
/// output per executed `print`.
pub fn execute(program: &Program, store: &mut Store) -> Result<Vec<String>, Error> {
    let mut interpreter = Interpreter::new(store);
    interpreter.run(program)?;
    Ok(interpreter.output)
}

pub struct Interpreter<'a> {
    store: &'a mut Store,
    output: Vec<String>,
    state: State,
}

impl<'a> Interpreter<'a> {
    pub fn new(store: &'a mut Store) -> Interpreter<'a> {
        Interpreter {
            store,
            output: Vec::new(),
            state: State::Running,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn run(&mut self, program: &Program) -> Result<(), Error> {
        match self.block(&program.statements) {
            Ok(()) => {
                self.state = State::Halted;
                Ok(())
            }
            Err(error) => {
                self.state = State::Failed;
                Err(error)
            }
        }
    }

    fn block(&mut self, statements: &[Statement]) -> Result<(), Error> {
        for statement in statements {
            self.statement(statement)?;
        }
        Ok(())
    }

    fn statement(&mut self, statement: &Statement) -> Result<(), Error> {
        match statement {
            Statement::Assignment(name, expression) => {
                let value = self.expression(expression)?;
                self.store.insert(name.clone(), value);
            }
            Statement::Print(expression) => {
                let value = self.expression(expression)?;
                self.output.push(format!("{}", value));
            }
            Statement::While(condition, body) => {
                // Continues strictly above zero, matching the comparison
                // the code generator emits. A condition that never falls
                // to zero loops forever.
                while self.expression(condition)? > 0.0 {
                    self.block(body)?;
                }
            }
        }
        Ok(())
    }

    // Takes &self: evaluation reads the store but never writes it.
    fn expression(&self, expression: &Expression) -> Result<f64, Error> {
        match expression {
            Expression::Literal(value) => Ok(*value),
            Expression::Identifier(name) => self
                .store
                .get(name)
                .copied()
                .ok_or_else(|| Error::UnresolvedIdentifier(name.clone())),
            Expression::Unary(operator, operand) => {
                Ok(operator.apply(self.expression(operand)?))
            }
            Expression::Binary(operator, left, right) => {
                let left = self.expression(left)?;
                let right = self.expression(right)?;
                if *operator == BinaryOperator::Divide && right == 0.0 {
                    return Err(Error::DivisionByZero);
                }
                Ok(operator.apply(left, right))
            }
        }
    }
}
