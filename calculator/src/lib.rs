//! A small arithmetic calculator.
//!
//! ```
//! use calculator::{Calculator, CalculatorError};
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.add(5, 3), 8.into());
//! assert_eq!(calc.square_root(25).unwrap().to_string(), "5.0");
//! assert_eq!(calc.divide(1, 0), Err(CalculatorError::DivisionByZero));
//! ```

pub mod arithmetic;
mod calculator;
mod error;
mod expression;
pub mod logging;
mod number;

pub use calculator::Calculator;
pub use error::{CalculatorError, ErrorKind, Result};
pub use expression::{BinaryOperator, Expression};
pub use number::Number;

// re-export for the CLI and tests
pub use compact_str;
