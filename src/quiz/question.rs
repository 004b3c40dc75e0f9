use rand::Rng;

use crate::quiz::constants::{
    ADD_OPERAND_RANGE, DIVIDE_DIVISOR_RANGE, DIVIDE_QUOTIENT_RANGE, MULTIPLY_OPERAND_RANGE,
    SUBTRACT_MINUEND_RANGE, SUBTRACT_SUBTRAHEND_RANGE,
};

/// The four operations a generated question can use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Picks an operation uniformly at random
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Draws `(left, right)` operands from this operation's range.
    ///
    /// Division draws the divisor and quotient and multiplies them back, so
    /// the dividend is always an exact multiple of the divisor.
    pub fn draw_operands<R: Rng>(&self, rng: &mut R) -> (i64, i64) {
        match self {
            Operation::Add => (
                rng.gen_range(ADD_OPERAND_RANGE),
                rng.gen_range(ADD_OPERAND_RANGE),
            ),
            Operation::Subtract => (
                rng.gen_range(SUBTRACT_MINUEND_RANGE),
                rng.gen_range(SUBTRACT_SUBTRAHEND_RANGE),
            ),
            Operation::Multiply => (
                rng.gen_range(MULTIPLY_OPERAND_RANGE),
                rng.gen_range(MULTIPLY_OPERAND_RANGE),
            ),
            Operation::Divide => {
                let divisor = rng.gen_range(DIVIDE_DIVISOR_RANGE);
                let quotient = rng.gen_range(DIVIDE_QUOTIENT_RANGE);
                (divisor * quotient, divisor)
            }
        }
    }
}

/// A question shown to the player and the answer it expects.
///
/// Only the generator and the custom-question acceptor create these, always
/// from the evaluator's value for `text`.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    text: String,
    expected_answer: f64,
}

impl Question {
    pub(crate) fn new(text: String, expected_answer: f64) -> Self {
        Self {
            text,
            expected_answer,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn expected_answer(&self) -> f64 {
        self.expected_answer
    }
}
