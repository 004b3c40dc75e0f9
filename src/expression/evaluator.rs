use log::debug;

use crate::expression::errors::ExpressionError;
use crate::expression::parser::parse;

/// Turns arithmetic text into a number.
///
/// Question generation and custom questions both go through this trait, so
/// the displayed text and the checked answer can never disagree.
pub trait Evaluator {
    /// # Errors
    ///
    /// Returns an error if the text is not a valid expression or its value
    /// cannot be represented as a finite number.
    fn evaluate(&self, text: &str) -> Result<f64, ExpressionError>;
}

/// Default evaluator backed by the built-in parser
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticEvaluator;

impl ArithmeticEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for ArithmeticEvaluator {
    fn evaluate(&self, text: &str) -> Result<f64, ExpressionError> {
        let value = parse(text)?.evaluate()?;
        if !value.is_finite() {
            debug!("'{}' evaluated to non-finite value {}", text, value);
            return Err(ExpressionError::NonFiniteResult);
        }
        debug!("'{}' evaluated to {}", text, value);
        Ok(value)
    }
}
