use log::{info, warn};

use crate::expression::{Evaluator, ExpressionError};
use crate::quiz::question::Question;

/// Turn a player-written expression into a question.
///
/// # Errors
///
/// Returns the evaluator's error if the text is not a valid expression or
/// does not evaluate to a finite number.
pub fn accept<E: Evaluator + ?Sized>(
    evaluator: &E,
    expression_text: &str,
) -> Result<Question, ExpressionError> {
    match evaluator.evaluate(expression_text) {
        Ok(value) => {
            info!("Accepted custom question '{}' = {}", expression_text, value);
            Ok(Question::new(expression_text.to_string(), value))
        }
        Err(e) => {
            warn!("Rejected custom question '{}': {}", expression_text, e);
            Err(e)
        }
    }
}
