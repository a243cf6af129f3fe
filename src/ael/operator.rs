use std::fmt;

use thiserror::Error;

/// Lookup failure for an operator symbol outside the fixed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("illegal operation `{symbol}`")]
pub struct UnknownOperator {
    pub symbol: String,
}

impl UnknownOperator {
    fn new(symbol: &str) -> UnknownOperator {
        UnknownOperator {
            symbol: symbol.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: &str) -> Result<BinaryOperator, UnknownOperator> {
        match symbol {
            "+" => Ok(BinaryOperator::Add),
            "-" => Ok(BinaryOperator::Subtract),
            "*" => Ok(BinaryOperator::Multiply),
            "/" => Ok(BinaryOperator::Divide),
            "**" => Ok(BinaryOperator::Power),
            _ => Err(UnknownOperator::new(symbol)),
        }
    }

    /// Higher binds tighter. Fixed for the life of the process.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
            BinaryOperator::Power => 3,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Power => "**",
        }
    }

    /// Plain f64 arithmetic. Division by a zero right operand is the
    /// execution engine's concern, not the catalog's.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Divide => left / right,
            BinaryOperator::Power => left.powf(right),
        }
    }

    pub fn right_associative(self) -> bool {
        matches!(self, BinaryOperator::Power)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
}

impl UnaryOperator {
    pub fn from_symbol(symbol: &str) -> Result<UnaryOperator, UnknownOperator> {
        match symbol {
            "-" => Ok(UnaryOperator::Negate),
            _ => Err(UnknownOperator::new(symbol)),
        }
    }

    /// Binds tighter than every binary operator.
    pub fn precedence(self) -> u8 {
        match self {
            UnaryOperator::Negate => 4,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Negate => "-",
        }
    }

    pub fn apply(self, operand: f64) -> f64 {
        match self {
            UnaryOperator::Negate => -operand,
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_symbols_round_trip() {
        for op in [
            BinaryOperator::Add,
            BinaryOperator::Subtract,
            BinaryOperator::Multiply,
            BinaryOperator::Divide,
            BinaryOperator::Power,
        ] {
            assert_eq!(BinaryOperator::from_symbol(op.symbol()), Ok(op));
        }
    }

    #[test]
    fn unknown_symbols_are_illegal() {
        assert_eq!(
            BinaryOperator::from_symbol("%"),
            Err(UnknownOperator {
                symbol: "%".to_string()
            })
        );
        assert_eq!(
            UnaryOperator::from_symbol("+"),
            Err(UnknownOperator {
                symbol: "+".to_string()
            })
        );
        assert_eq!(
            BinaryOperator::from_symbol("%").unwrap_err().to_string(),
            "illegal operation `%`"
        );
    }

    #[test]
    fn precedence_is_totally_ordered() {
        assert!(BinaryOperator::Add.precedence() < BinaryOperator::Multiply.precedence());
        assert!(BinaryOperator::Multiply.precedence() < BinaryOperator::Power.precedence());
        assert!(BinaryOperator::Power.precedence() < UnaryOperator::Negate.precedence());
        assert_eq!(
            BinaryOperator::Add.precedence(),
            BinaryOperator::Subtract.precedence()
        );
        assert_eq!(
            BinaryOperator::Multiply.precedence(),
            BinaryOperator::Divide.precedence()
        );
    }

    #[test]
    fn only_power_is_right_associative() {
        assert!(BinaryOperator::Power.right_associative());
        assert!(!BinaryOperator::Subtract.right_associative());
        assert!(!BinaryOperator::Divide.right_associative());
    }

    #[test]
    fn applies_true_division() {
        assert_eq!(BinaryOperator::Divide.apply(7.0, 2.0), 3.5);
    }

    #[test]
    fn applies_power_and_negate() {
        assert_eq!(BinaryOperator::Power.apply(2.0, 10.0), 1024.0);
        assert_eq!(UnaryOperator::Negate.apply(3.0), -3.0);
    }
}
