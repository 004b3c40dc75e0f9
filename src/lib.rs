//! Math Game - a small arithmetic quiz engine
//!
//! This library generates random arithmetic questions, checks typed answers
//! within a fixed tolerance, keeps score for a play session and lets the
//! player substitute their own expression as the next question.

pub mod expression;
pub mod quiz;

// Re-export the main public API
pub use expression::{ArithmeticEvaluator, Evaluator, Expression, ExpressionError};
pub use quiz::{
    CheckOutcome, Operation, Question, QuestionGenerator, QuizError, Session, Signal, Verdict,
    accept, check,
};

/// Evaluate an arithmetic expression with the built-in evaluator
///
/// Supports `+`, `-`, `*`, `/`, `^`, unary signs and parentheses with the
/// usual precedence.
///
/// # Errors
///
/// This function will return an error if:
/// * The text is empty or not a well-formed expression
/// * The expression divides by zero
/// * The result is not a finite real number
///
/// # Examples
///
/// ```
/// use mathgame::evaluate;
///
/// assert_eq!(evaluate("(2 + 3) * 4"), Ok(20.0));
/// assert!(evaluate("2 + ").is_err());
/// ```
pub fn evaluate(text: &str) -> Result<f64, ExpressionError> {
    ArithmeticEvaluator::new().evaluate(text)
}
