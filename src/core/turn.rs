//! A scored guess

use super::{Feedback, Sequence};
use std::fmt;

/// One entry of the move history: a guess and the feedback it received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Turn {
    pub guess: Sequence,
    pub feedback: Feedback,
}

impl Turn {
    #[must_use]
    pub const fn new(guess: Sequence, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; {}", self.guess, self.feedback)
    }
}
