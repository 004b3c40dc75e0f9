//! Arithmetic expressions: parsing, evaluation and display

mod ast;
pub mod constants;
mod display;
mod errors;
mod eval;
mod evaluator;
mod parser;

pub use ast::Expression;
pub use errors::ExpressionError;
pub use evaluator::{ArithmeticEvaluator, Evaluator};
pub use parser::parse;
