//! The six calculator operations as pure functions on [`Number`].
//!
//! Nothing in here logs; see [`crate::Calculator`] for the instrumented
//! variants.

use num_traits::Zero;

use crate::error::{CalculatorError, Result};
use crate::number::Number;

pub fn add(a: Number, b: Number) -> Number {
    a + b
}

pub fn subtract(a: Number, b: Number) -> Number {
    a - b
}

pub fn multiply(a: Number, b: Number) -> Number {
    a * b
}

/// The quotient is always a float, even for two integers that divide evenly.
pub fn divide(a: Number, b: Number) -> Result<Number> {
    if b.is_zero() {
        return Err(CalculatorError::DivisionByZero);
    }
    Ok(a / b)
}

/// Integer powers with a non-negative exponent stay integral unless they
/// overflow. A negative base with a fractional exponent yields NaN.
pub fn power(base: Number, exponent: Number) -> Number {
    base.pow(exponent)
}

pub fn square_root(n: Number) -> Result<Number> {
    if n.is_negative() {
        return Err(CalculatorError::SquareRootOfNegativeNumber);
    }
    // sqrt(-0.0) is -0.0
    Ok(n.abs().sqrt())
}
