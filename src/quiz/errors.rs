use thiserror::Error;

use crate::expression::ExpressionError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuizError {
    #[error("Expression error: {0}")]
    ExpressionError(#[from] ExpressionError),
}
