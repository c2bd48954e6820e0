use std::fmt::{self, Display};

use compact_str::{format_compact, CompactString};

use crate::number::Number;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Power,
}

impl BinaryOperator {
    pub fn name(self) -> &'static str {
        use BinaryOperator::*;

        match self {
            Add => "Addition",
            Sub => "Subtraction",
            Mul => "Multiplication",
            Div => "Division",
            Power => "Power",
        }
    }

    pub fn symbol(self) -> &'static str {
        use BinaryOperator::*;

        match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Power => "^",
        }
    }
}

/// A single calculator operation applied to concrete operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expression {
    BinaryOperator(BinaryOperator, Number, Number),
    SquareRoot(Number),
}

impl Expression {
    pub fn name(&self) -> &'static str {
        match self {
            Expression::BinaryOperator(op, _, _) => op.name(),
            Expression::SquareRoot(_) => "Square root",
        }
    }

    /// `5 + 3 = 8`, as printed by the demo driver.
    pub fn with_result(&self, result: Number) -> CompactString {
        format_compact!("{self} = {result}")
    }

    /// `Addition: 5 + 3 = 8`, as emitted to the log.
    pub fn describe(&self, result: Number) -> CompactString {
        format_compact!("{}: {}", self.name(), self.with_result(result))
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::BinaryOperator(op, lhs, rhs) => write!(f, "{lhs} {} {rhs}", op.symbol()),
            Expression::SquareRoot(n) => write!(f, "√{n}"),
        }
    }
}
