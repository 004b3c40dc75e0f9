use log::debug;

use crate::quiz::constants::{CORRECT_MESSAGE, TOLERANCE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Feedback cue a front end can turn into a vibration, sound or colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Success,
    Error,
}

impl Verdict {
    pub fn signal(self) -> Signal {
        match self {
            Verdict::Correct => Signal::Success,
            Verdict::Incorrect => Signal::Error,
        }
    }
}

/// Result of checking one answer
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub correct: bool,
    pub message: String,
}

impl CheckOutcome {
    pub fn verdict(&self) -> Verdict {
        if self.correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }
}

/// Parse a typed answer, rejecting anything that is not a finite number
pub fn parse_answer(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Compare a typed answer with the expected value.
///
/// Unparsable input is simply incorrect.
pub fn check(user_input: &str, expected: f64) -> CheckOutcome {
    let correct = match parse_answer(user_input) {
        Some(value) => (value - expected).abs() < TOLERANCE,
        None => {
            debug!("Answer '{}' is not a number", user_input);
            false
        }
    };

    debug!(
        "Checked answer '{}' against {}: {}",
        user_input,
        expected,
        if correct { "correct" } else { "incorrect" }
    );

    let message = if correct {
        CORRECT_MESSAGE.to_string()
    } else {
        // -0 displays as 0
        format!("Incorrect. The answer was {}", expected + 0.0)
    };

    CheckOutcome { correct, message }
}
