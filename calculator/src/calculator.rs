use tracing::{error, info};

use crate::arithmetic;
use crate::error::{CalculatorError, Result};
use crate::expression::{BinaryOperator, Expression};
use crate::number::Number;

/// Front end to the arithmetic operations that records every call in the log.
///
/// Each successful call emits one `INFO` record of the form
/// `Addition: 5 + 3 = 8`. Rejected input is logged at `ERROR` before the
/// error is handed back to the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Calculator
    }

    pub fn add(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        self.record(
            Expression::BinaryOperator(BinaryOperator::Add, a, b),
            arithmetic::add(a, b),
        )
    }

    pub fn subtract(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        self.record(
            Expression::BinaryOperator(BinaryOperator::Sub, a, b),
            arithmetic::subtract(a, b),
        )
    }

    pub fn multiply(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        self.record(
            Expression::BinaryOperator(BinaryOperator::Mul, a, b),
            arithmetic::multiply(a, b),
        )
    }

    pub fn divide(&self, a: impl Into<Number>, b: impl Into<Number>) -> Result<Number> {
        let (a, b) = (a.into(), b.into());
        let result = arithmetic::divide(a, b).inspect_err(Self::report)?;
        Ok(self.record(
            Expression::BinaryOperator(BinaryOperator::Div, a, b),
            result,
        ))
    }

    pub fn power(&self, base: impl Into<Number>, exponent: impl Into<Number>) -> Number {
        let (base, exponent) = (base.into(), exponent.into());
        self.record(
            Expression::BinaryOperator(BinaryOperator::Power, base, exponent),
            arithmetic::power(base, exponent),
        )
    }

    pub fn square_root(&self, n: impl Into<Number>) -> Result<Number> {
        let n = n.into();
        let result = arithmetic::square_root(n).inspect_err(Self::report)?;
        Ok(self.record(Expression::SquareRoot(n), result))
    }

    /// Evaluates a prebuilt expression, logging it like the dedicated methods do.
    pub fn evaluate(&self, expression: Expression) -> Result<Number> {
        match expression {
            Expression::BinaryOperator(BinaryOperator::Add, a, b) => Ok(self.add(a, b)),
            Expression::BinaryOperator(BinaryOperator::Sub, a, b) => Ok(self.subtract(a, b)),
            Expression::BinaryOperator(BinaryOperator::Mul, a, b) => Ok(self.multiply(a, b)),
            Expression::BinaryOperator(BinaryOperator::Div, a, b) => self.divide(a, b),
            Expression::BinaryOperator(BinaryOperator::Power, a, b) => Ok(self.power(a, b)),
            Expression::SquareRoot(n) => self.square_root(n),
        }
    }

    fn record(&self, expression: Expression, result: Number) -> Number {
        info!("{}", expression.describe(result));
        result
    }

    fn report(err: &CalculatorError) {
        match err {
            CalculatorError::DivisionByZero => error!("Division by zero attempted"),
            CalculatorError::SquareRootOfNegativeNumber => {
                error!("Square root of negative number attempted")
            }
        }
    }
}
