use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::expression::{ArithmeticEvaluator, Evaluator};
use crate::quiz::errors::QuizError;
use crate::quiz::question::{Operation, Question};

/// Produces random arithmetic questions
pub struct QuestionGenerator<R = StdRng, E = ArithmeticEvaluator> {
    rng: R,
    evaluator: E,
}

impl QuestionGenerator {
    /// Create a generator seeded from system entropy
    pub fn new() -> Self {
        Self::with_parts(StdRng::from_entropy(), ArithmeticEvaluator::new())
    }

    /// Create a generator whose sequence of questions is reproducible
    pub fn seeded(seed: u64) -> Self {
        Self::with_parts(StdRng::seed_from_u64(seed), ArithmeticEvaluator::new())
    }
}

impl Default for QuestionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng, E: Evaluator> QuestionGenerator<R, E> {
    pub fn with_parts(rng: R, evaluator: E) -> Self {
        Self { rng, evaluator }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// # Errors
    ///
    /// Returns an error only if the evaluator rejects the generated text,
    /// which the built-in evaluator never does.
    pub fn generate(&mut self) -> Result<Question, QuizError> {
        let operation = Operation::random(&mut self.rng);
        self.generate_for(operation)
    }

    /// Generate a question using a specific operation
    ///
    /// # Errors
    ///
    /// See [`QuestionGenerator::generate`].
    pub fn generate_for(&mut self, operation: Operation) -> Result<Question, QuizError> {
        let (left, right) = operation.draw_operands(&mut self.rng);
        let text = format!("{} {} {}", left, operation.symbol(), right);
        let expected_answer = self.evaluator.evaluate(&text)?;

        debug!("Generated question '{}' = {}", text, expected_answer);
        Ok(Question::new(text, expected_answer))
    }
}
