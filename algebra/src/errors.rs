use ark_std::{error, fmt};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum AlgebraError {
    InvalidEncoding,
    NoInverse,
    DivisionByZero,
    ParameterError,
    IndexError,
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AlgebraError::*;
        f.write_str(match self {
            InvalidEncoding => "Could not decode object from bytes",
            NoInverse => "Zero has no multiplicative inverse",
            DivisionByZero => "Division by zero",
            ParameterError => "Unexpected parameter for method or function",
            IndexError => "Index out of bounds",
        })
    }
}

impl error::Error for AlgebraError {}
