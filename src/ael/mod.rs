pub mod analyzer;
pub mod ast;
pub mod builder;
pub mod codegen;
pub mod interpreter;
pub mod operator;
pub mod parser;

pub use self::ast::{Expression, Name, Program, Statement};
pub use self::interpreter::Store;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] parser::Error),
    #[error(transparent)]
    Build(#[from] operator::UnknownOperator),
    #[error(transparent)]
    Analysis(#[from] analyzer::Error),
    #[error(transparent)]
    Eval(#[from] interpreter::Error),
}

/// Parses, builds, and declaration-checks `source`.
pub fn check(source: &str) -> Result<Program, Error> {
    let tree = parser::parse(source)?;
    let program = builder::build(&tree)?;
    let program = analyzer::analyze(program)?;
    Ok(program)
}

/// Runs `source` against a caller-owned store and returns its printed
/// lines in execution order.
pub fn interpret(source: &str, store: &mut Store) -> Result<Vec<String>, Error> {
    let program = check(source)?;
    let output = interpreter::execute(&program, store)?;
    Ok(output)
}

/// Translates `source` into equivalent JavaScript.
pub fn translate(source: &str) -> Result<String, Error> {
    let program = check(source)?;
    Ok(codegen::generate(&program))
}
