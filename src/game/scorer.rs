//! Feedback sources
//!
//! A scorer answers a guess with feedback: either computed from a known secret, or
//! typed in by a human who holds the secret.

use super::error::GameError;
use crate::core::{Feedback, Sequence};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Something that can score guesses against a hidden secret
pub trait Scorer {
    /// Score one guess
    ///
    /// # Errors
    /// Returns `GameError::InvalidFeedback` if no valid feedback can be produced.
    fn score(&mut self, guess: &Sequence) -> Result<Feedback, GameError>;
}

/// Scores guesses against a secret it knows
#[derive(Debug, Clone, Copy)]
pub struct ComputerScorer {
    secret: Sequence,
}

impl ComputerScorer {
    #[must_use]
    pub const fn new(secret: Sequence) -> Self {
        Self { secret }
    }
}

impl Scorer for ComputerScorer {
    fn score(&mut self, guess: &Sequence) -> Result<Feedback, GameError> {
        Ok(Feedback::calculate(&self.secret, guess))
    }
}

/// Asks a human for feedback, one line per guess
///
/// The line lists one `w` per white peg and one `r` per red peg, in any order and
/// either case. Whitespace is ignored; an empty line means no pegs.
pub struct HumanScorer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanScorer<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl HumanScorer<StdinLock<'static>, Stdout> {
    /// Scorer bound to the terminal
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

fn io_error(error: &io::Error) -> GameError {
    GameError::InvalidFeedback(format!("I/O error: {error}"))
}

impl<R: BufRead, W: Write> Scorer for HumanScorer<R, W> {
    fn score(&mut self, guess: &Sequence) -> Result<Feedback, GameError> {
        write!(
            self.output,
            "Guess: {guess} ({})\nFeedback (w = white, r = red): ",
            guess.names()
        )
        .and_then(|()| self.output.flush())
        .map_err(|e| io_error(&e))?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(|e| io_error(&e))?;
        if read == 0 {
            return Err(GameError::InvalidFeedback("end of input".to_string()));
        }

        line.trim()
            .parse::<Feedback>()
            .map_err(|e| GameError::InvalidFeedback(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn human(input: &str) -> HumanScorer<Cursor<Vec<u8>>, Vec<u8>> {
        HumanScorer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn computer_scores_against_secret() {
        let mut scorer = ComputerScorer::new(Sequence::new([0, 2, 2, 3]));
        let feedback = scorer.score(&Sequence::new([1, 2, 3, 2])).unwrap();
        assert_eq!(feedback, Feedback::new(1, 2).unwrap());
    }

    #[test]
    fn human_lines_are_parsed_in_order() {
        let mut scorer = human("wr\n\nRRWW\n");
        let guess = Sequence::new([0, 1, 2, 3]);

        assert_eq!(scorer.score(&guess), Ok(Feedback::new(1, 1).unwrap()));
        assert_eq!(scorer.score(&guess), Ok(Feedback::EMPTY));
        assert_eq!(scorer.score(&guess), Ok(Feedback::new(2, 2).unwrap()));

        let prompt = String::from_utf8(scorer.output).unwrap();
        assert!(prompt.contains("Guess: 0123 (blue green purple orange)"));
    }

    #[test]
    fn human_errors() {
        let guess = Sequence::new([0, 1, 2, 3]);

        let mut scorer = human("wx\n");
        assert!(matches!(scorer.score(&guess), Err(GameError::InvalidFeedback(_))));

        let mut scorer = human("wwwrr\n");
        assert!(matches!(scorer.score(&guess), Err(GameError::InvalidFeedback(_))));

        let mut scorer = human("");
        assert_eq!(
            scorer.score(&guess),
            Err(GameError::InvalidFeedback("end of input".to_string()))
        );
    }
}
