//! Quiz logic: question generation, answer checking and session state

mod checker;
pub mod constants;
mod custom;
mod errors;
mod generator;
mod question;
mod session;

pub use checker::{CheckOutcome, Signal, Verdict, check, parse_answer};
pub use custom::accept;
pub use errors::QuizError;
pub use generator::QuestionGenerator;
pub use question::{Operation, Question};
pub use session::Session;
