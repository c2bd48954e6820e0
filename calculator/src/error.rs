use thiserror::Error;

/// Broad category of a [`CalculatorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied a value outside the valid domain of the operation.
    InvalidArgument,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
    #[error("Cannot calculate square root of negative number")]
    SquareRootOfNegativeNumber,
}

impl CalculatorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalculatorError::DivisionByZero | CalculatorError::SquareRootOfNegativeNumber => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
