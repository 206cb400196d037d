//! Game driver
//!
//! Plays fixed opening guesses, then lets the solver pick each guess. After every
//! scored guess the model receives the score constraint plus whatever the
//! deduction rules derive against each earlier turn, and the candidate set is
//! recomputed.

use super::error::GameError;
use super::scorer::{ComputerScorer, Scorer};
use crate::core::{Feedback, Sequence, Turn};
use crate::solver::{
    ConstraintModel, DeductionOptions, Solver, derive, score_constraint, select_guess,
};
use tracing::{debug, info};

/// Default maximum number of guesses
pub const DEFAULT_MAX_MOVES: usize = 8;

/// Default opening guesses: `0123` then `4123`
pub const DEFAULT_OPENING: [Sequence; 2] =
    [Sequence::new([0, 1, 2, 3]), Sequence::new([4, 1, 2, 3])];

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Total guesses allowed, including the final forced one
    pub max_moves: usize,
    /// Guesses played before the solver takes over
    pub opening: Vec<Sequence>,
    pub deduction: DeductionOptions,
    /// Cap on enumerated candidates per move
    pub search_limit: Option<usize>,
    /// Known secret to verify every constraint against
    pub audit: Option<Sequence>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_moves: DEFAULT_MAX_MOVES,
            opening: DEFAULT_OPENING.to_vec(),
            deduction: DeductionOptions::default(),
            search_limit: None,
            audit: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_max_moves(mut self, max_moves: usize) -> Self {
        self.max_moves = max_moves;
        self
    }

    #[must_use]
    pub fn with_opening(mut self, opening: Vec<Sequence>) -> Self {
        self.opening = opening;
        self
    }

    #[must_use]
    pub const fn with_deduction(mut self, deduction: DeductionOptions) -> Self {
        self.deduction = deduction;
        self
    }

    #[must_use]
    pub const fn with_search_limit(mut self, limit: Option<usize>) -> Self {
        self.search_limit = limit;
        self
    }

    #[must_use]
    pub const fn with_audit(mut self, secret: Option<Sequence>) -> Self {
        self.audit = secret;
        self
    }
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Playing the fixed opening guesses
    Opening,
    /// The solver picks each guess
    Deducing,
    /// The last guess scored all white
    Won,
    /// Out of moves without finding the secret
    Exhausted,
}

impl Phase {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Exhausted)
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub history: Vec<Turn>,
    pub won: bool,
    /// Candidates left when the game stopped deducing
    pub solutions_count: usize,
    /// Candidate count after each move
    pub candidate_trace: Vec<usize>,
}

impl GameResult {
    #[must_use]
    pub fn moves(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<Sequence> {
        self.history.last().map(|turn| turn.guess)
    }
}

/// A single game in progress
pub struct Game {
    config: GameConfig,
    solver: Solver,
    model: ConstraintModel,
    history: Vec<Turn>,
    candidates: Vec<Sequence>,
    candidate_trace: Vec<usize>,
    solutions_count: Option<usize>,
    phase: Phase,
}

impl Game {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let model = config
            .audit
            .map_or_else(ConstraintModel::new, ConstraintModel::with_audit);
        let solver = config
            .search_limit
            .map_or_else(Solver::new, Solver::with_limit);
        let candidates = solver.enumerate(&model);
        let phase = if config.opening.is_empty() {
            Phase::Deducing
        } else {
            Phase::Opening
        };

        Self {
            config,
            solver,
            model,
            history: Vec::new(),
            candidates,
            candidate_trace: Vec::new(),
            solutions_count: None,
            phase,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Sequences still consistent with every scored guess
    #[must_use]
    pub fn candidates(&self) -> &[Sequence] {
        &self.candidates
    }

    /// Play one guess, unless the game is already over
    ///
    /// # Errors
    /// Returns `GameError::InvalidFeedback` if the scorer fails,
    /// `GameError::NoSolutions` if the feedback leaves no candidate, and
    /// `GameError::UnsoundConstraint` if auditing catches a false constraint.
    pub fn step<S: Scorer + ?Sized>(&mut self, scorer: &mut S) -> Result<Phase, GameError> {
        if self.phase.is_over() {
            return Ok(self.phase);
        }

        let moves = self.history.len();
        let final_move = moves + 1 >= self.config.max_moves;

        let guess = match self.config.opening.get(moves) {
            Some(&opening) if !final_move => opening,
            _ => select_guess(&self.candidates, &self.history)?,
        };

        if final_move {
            self.solutions_count = Some(self.candidates.len());
            info!(%guess, candidates = self.candidates.len(), "final guess");
        }

        let feedback = scorer.score(&guess)?;
        self.make_move(guess, feedback)?;

        self.phase = if feedback.is_perfect() {
            self.solutions_count.get_or_insert(self.candidates.len());
            Phase::Won
        } else if final_move {
            Phase::Exhausted
        } else if self.history.len() < self.config.opening.len() {
            Phase::Opening
        } else {
            Phase::Deducing
        };
        Ok(self.phase)
    }

    fn make_move(&mut self, guess: Sequence, feedback: Feedback) -> Result<(), GameError> {
        let turn = Turn::new(guess, feedback);

        self.model.impose(score_constraint(&guess, feedback))?;
        for earlier in &self.history {
            for constraint in derive(earlier, &turn, self.config.deduction) {
                self.model.impose(constraint)?;
            }
        }
        self.history.push(turn);

        self.candidates = self.solver.solutions(&self.model, &self.history)?;
        self.candidate_trace.push(self.candidates.len());
        debug!(
            move_number = self.history.len(),
            %guess,
            %feedback,
            candidates = self.candidates.len(),
            "move"
        );
        Ok(())
    }

    /// Play until won or out of moves
    ///
    /// # Errors
    /// Any error from [`Game::step`].
    pub fn play<S: Scorer + ?Sized>(&mut self, scorer: &mut S) -> Result<GameResult, GameError> {
        while !self.step(scorer)?.is_over() {}
        Ok(self.result())
    }

    /// Summary of the game so far
    #[must_use]
    pub fn result(&self) -> GameResult {
        GameResult {
            history: self.history.clone(),
            won: self.phase == Phase::Won,
            solutions_count: self.solutions_count.unwrap_or(self.candidates.len()),
            candidate_trace: self.candidate_trace.clone(),
        }
    }
}

/// Play a whole game against a known secret
///
/// # Errors
/// Any error from [`Game::play`].
pub fn play_secret(secret: Sequence, config: &GameConfig) -> Result<GameResult, GameError> {
    Game::new(config.clone()).play(&mut ComputerScorer::new(secret))
}
