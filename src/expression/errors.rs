use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Expression is empty")]
    Empty,
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("Invalid number literal: {0}")]
    InvalidNumber(String),
    #[error("Unexpected '{token}' at position {position}")]
    UnexpectedToken { token: String, position: usize },
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Expression nests deeper than {0} levels")]
    TooDeep(usize),
    #[error("Expression is longer than {0} tokens")]
    TooLong(usize),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Complex result from negative base with fractional exponent")]
    ComplexResult,
    #[error("Result is not a finite number")]
    NonFiniteResult,
}
