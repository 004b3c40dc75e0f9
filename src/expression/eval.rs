use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

#[inline]
fn is_integer(value: f64) -> bool {
    if value.abs() > 2_f64.powi(52) {
        true
    } else {
        (value - value.round()).abs() < f64::EPSILON
    }
}

fn divide(dividend: f64, divisor: f64) -> Result<f64, ExpressionError> {
    if divisor == 0.0 {
        debug!("Division by zero attempted: {} / {}", dividend, divisor);
        return Err(ExpressionError::DivisionByZero);
    }
    Ok(dividend / divisor)
}

fn power(base: f64, exponent: f64) -> Result<f64, ExpressionError> {
    if base < 0.0 && !is_integer(exponent) {
        debug!(
            "Complex result from negative base with fractional exponent: {}^{}",
            base, exponent
        );
        return Err(ExpressionError::ComplexResult);
    }
    Ok(base.powf(exponent))
}

impl Expression {
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero
    /// - Raising a negative base to a fractional exponent (complex result)
    ///
    /// Overflow is not reported here; intermediate infinities are allowed
    /// and the caller decides whether the final value is acceptable.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Neg(e) => e.evaluate().map(|value| -value),
            Expression::Add(l, r) => Ok(l.evaluate()? + r.evaluate()?),
            Expression::Sub(l, r) => Ok(l.evaluate()? - r.evaluate()?),
            Expression::Mul(l, r) => Ok(l.evaluate()? * r.evaluate()?),
            Expression::Div(l, r) => divide(l.evaluate()?, r.evaluate()?),
            Expression::Pow(l, r) => power(l.evaluate()?, r.evaluate()?),
        };

        if let Err(e) = &result {
            debug!("Evaluation of '{}' failed: {}", self, e);
        }

        result
    }
}
