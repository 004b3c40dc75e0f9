use log::info;
use rand::Rng;
use rand::rngs::StdRng;

use crate::expression::{ArithmeticEvaluator, Evaluator};
use crate::quiz::checker::{CheckOutcome, Verdict, check};
use crate::quiz::constants::INVALID_EXPRESSION_MESSAGE;
use crate::quiz::custom::accept;
use crate::quiz::errors::QuizError;
use crate::quiz::generator::QuestionGenerator;
use crate::quiz::question::Question;

/// State of one game: the question on screen, the score and the last
/// feedback shown to the player.
///
/// The question only changes through [`Session::new_question`] and
/// [`Session::submit_custom`]; score and verdict only through
/// [`Session::submit_answer`].
pub struct Session<R = StdRng, E = ArithmeticEvaluator> {
    generator: QuestionGenerator<R, E>,
    current_question: Question,
    score: u32,
    last_verdict: Option<Verdict>,
    feedback: Option<String>,
}

impl<R: Rng, E: Evaluator> Session<R, E> {
    /// Start a session with a freshly generated question
    ///
    /// # Errors
    ///
    /// Returns an error if the first question cannot be generated.
    pub fn new(mut generator: QuestionGenerator<R, E>) -> Result<Self, QuizError> {
        let current_question = generator.generate()?;
        info!("Session started with question '{}'", current_question.text());

        Ok(Self {
            generator,
            current_question,
            score: 0,
            last_verdict: None,
            feedback: None,
        })
    }

    pub fn current_question(&self) -> &Question {
        &self.current_question
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn last_verdict(&self) -> Option<Verdict> {
        self.last_verdict
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    fn replace_question(&mut self, question: Question) {
        self.current_question = question;
        self.last_verdict = None;
        self.feedback = None;
    }

    /// Replace the current question with a generated one
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails; the current question is kept.
    pub fn new_question(&mut self) -> Result<&Question, QuizError> {
        let question = self.generator.generate()?;
        info!("New question '{}'", question.text());
        self.replace_question(question);
        Ok(&self.current_question)
    }

    /// Check an answer to the current question, scoring it if correct
    pub fn submit_answer(&mut self, user_input: &str) -> CheckOutcome {
        let outcome = check(user_input, self.current_question.expected_answer());
        let verdict = outcome.verdict();

        if verdict == Verdict::Correct {
            self.score = self.score.saturating_add(1);
            info!("Correct answer, score is now {}", self.score);
        } else {
            info!(
                "Incorrect answer '{}' to '{}'",
                user_input,
                self.current_question.text()
            );
        }

        self.last_verdict = Some(verdict);
        self.feedback = Some(outcome.message.clone());
        outcome
    }

    /// Replace the current question with a player-written expression.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression is rejected. The current question
    /// and score stay as they were and the feedback explains the rejection.
    pub fn submit_custom(&mut self, expression_text: &str) -> Result<&Question, QuizError> {
        match accept(self.generator.evaluator(), expression_text) {
            Ok(question) => {
                self.replace_question(question);
                Ok(&self.current_question)
            }
            Err(e) => {
                self.feedback = Some(INVALID_EXPRESSION_MESSAGE.to_string());
                Err(e.into())
            }
        }
    }
}
