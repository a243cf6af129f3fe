use std::fmt;

use super::operator::{BinaryOperator, UnaryOperator};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(pub String);

impl Name {
    pub fn new(s: &str) -> Name {
        Name(s.to_string())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Root of one source unit. Owns its statements; structurally immutable
/// once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Program {
        Program { statements }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            self.statements
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assignment(Name, Expression),
    Print(Expression),
    While(Expression, Vec<Statement>),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Statement::Assignment(name, expression) => write!(f, "{} = {};", name, expression),
            Statement::Print(expression) => write!(f, "print {};", expression),
            Statement::While(condition, body) => {
                write!(f, "while ({}) {{", condition)?;
                for statement in body {
                    write!(f, " {}", statement)?;
                }
                write!(f, " }}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(f64),
    Identifier(Name),
    Unary(UnaryOperator, Box<Expression>),
    Binary(BinaryOperator, Box<Expression>, Box<Expression>),
}

impl fmt::Display for Expression {
    // Fully parenthesized so that displayed source re-parses to an
    // identical tree. Minimal parenthesization belongs to the code
    // generator.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Literal(value) => write!(f, "{}", value),
            Expression::Identifier(name) => write!(f, "{}", name),
            Expression::Unary(operator, operand) => write!(f, "({}{})", operator, operand),
            Expression::Binary(operator, left, right) => {
                write!(f, "({} {} {})", left, operator, right)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod arbitrary {
    use std::collections::HashSet;

    use quickcheck::{Arbitrary, Gen};

    use super::super::operator::{BinaryOperator, UnaryOperator};
    use super::{Expression, Name, Program, Statement};

    impl Arbitrary for Name {
        fn arbitrary(g: &mut Gen) -> Name {
            // Short lowercase names cannot collide with the keywords.
            let letters: Vec<char> = ('a'..='z').collect();
            let len = 1 + usize::arbitrary(g) % 3;
            Name((0..len).map(|_| *g.choose(&letters).unwrap()).collect())
        }
    }

    impl Arbitrary for BinaryOperator {
        fn arbitrary(g: &mut Gen) -> BinaryOperator {
            *g.choose(&[
                BinaryOperator::Add,
                BinaryOperator::Subtract,
                BinaryOperator::Multiply,
                BinaryOperator::Divide,
                BinaryOperator::Power,
            ])
            .unwrap()
        }
    }

    impl Arbitrary for Program {
        fn arbitrary(g: &mut Gen) -> Program {
            let mut declared = HashSet::new();
            Program::new(block(g, 0, &mut declared))
        }
    }

    /// Expression tree with no identifiers, evaluable against an empty
    /// store.
    #[derive(Debug, Clone)]
    pub(crate) struct ClosedExpression(pub Expression);

    impl Arbitrary for ClosedExpression {
        fn arbitrary(g: &mut Gen) -> ClosedExpression {
            ClosedExpression(expression(g, 0, &HashSet::new()))
        }
    }

    // Statements are generated against the declared-name set in the same
    // left-to-right order the analyzer consumes them, so generated
    // programs are always well declared.
    fn block(g: &mut Gen, depth: usize, declared: &mut HashSet<Name>) -> Vec<Statement> {
        let len = 1 + usize::arbitrary(g) % 4;
        (0..len).map(|_| statement(g, depth, declared)).collect()
    }

    fn statement(g: &mut Gen, depth: usize, declared: &mut HashSet<Name>) -> Statement {
        let choices = if depth < 2 { 4 } else { 3 };
        match usize::arbitrary(g) % choices {
            0 | 1 => {
                let name = Name::arbitrary(g);
                let value = expression(g, 0, declared);
                declared.insert(name.clone());
                Statement::Assignment(name, value)
            }
            2 => Statement::Print(expression(g, 0, declared)),
            _ => Statement::While(expression(g, 0, declared), block(g, depth + 1, declared)),
        }
    }

    fn expression(g: &mut Gen, depth: usize, declared: &HashSet<Name>) -> Expression {
        if depth >= 4 {
            return leaf(g, declared);
        }
        match usize::arbitrary(g) % 4 {
            0 | 1 => leaf(g, declared),
            2 => Expression::Unary(
                UnaryOperator::Negate,
                Box::new(expression(g, depth + 1, declared)),
            ),
            _ => Expression::Binary(
                BinaryOperator::arbitrary(g),
                Box::new(expression(g, depth + 1, declared)),
                Box::new(expression(g, depth + 1, declared)),
            ),
        }
    }

    fn leaf(g: &mut Gen, declared: &HashSet<Name>) -> Expression {
        let names: Vec<&Name> = declared.iter().collect();
        if names.is_empty() || bool::arbitrary(g) {
            Expression::Literal(f64::from(u8::arbitrary(g) % 10))
        } else {
            Expression::Identifier((*g.choose(&names).unwrap()).clone())
        }
    }
}
