//! Secret solving command
//!
//! Plays one game against a known secret and records every step.

use crate::core::{Feedback, Sequence};
use crate::game::{ComputerScorer, Game, GameConfig, GameError, Phase};

/// Result of solving a secret
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub secret: Sequence,
    /// Candidates left when deduction stopped
    pub solutions_count: usize,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Sequence,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Phase the guess was played in
    pub phase: Phase,
}

/// Solve a secret with the configured game
///
/// # Errors
///
/// Returns an error if the game fails: no candidates left, or (with auditing) a
/// constraint that does not hold for the secret.
pub fn solve_secret(secret: Sequence, config: &GameConfig) -> Result<SolveResult, GameError> {
    let mut game = Game::new(config.clone());
    let mut scorer = ComputerScorer::new(secret);
    let mut steps = Vec::new();

    while !game.is_over() {
        let phase = game.phase();
        let candidates_before = game.candidates().len();
        game.step(&mut scorer)?;

        if let Some(turn) = game.history().last() {
            steps.push(GuessStep {
                guess: turn.guess,
                feedback: turn.feedback,
                candidates_before,
                candidates_after: game.candidates().len(),
                phase,
            });
        }
    }

    let result = game.result();
    Ok(SolveResult {
        success: result.won,
        steps,
        secret,
        solutions_count: result.solutions_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::DEFAULT_MAX_MOVES;

    #[test]
    fn solve_secret_succeeds() {
        let secret = Sequence::new([3, 1, 4, 1]);
        let config = GameConfig::default().with_audit(Some(secret));
        let result = solve_secret(secret, &config).unwrap();

        assert!(result.success || result.steps.len() == DEFAULT_MAX_MOVES);
        if result.success {
            assert_eq!(result.steps.last().map(|s| s.guess), Some(secret));
        }
    }

    #[test]
    fn solve_records_history() {
        let secret = Sequence::new([5, 0, 5, 2]);
        let result = solve_secret(secret, &GameConfig::default()).unwrap();

        assert_eq!(result.steps[0].guess, Sequence::new([0, 1, 2, 3]));
        assert_eq!(result.steps[0].phase, Phase::Opening);
        assert_eq!(result.steps[0].candidates_before, 1296);
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert_eq!(step.feedback, Feedback::calculate(&secret, &step.guess));
        }
    }

    #[test]
    fn solve_with_max_moves_limit() {
        let secret = Sequence::new([5, 5, 0, 0]);
        let config = GameConfig::default().with_max_moves(2);
        let result = solve_secret(secret, &config).unwrap();
        assert!(result.steps.len() <= 2);
    }
}
