//! Backtracking search over the constraint model

use super::constraint::{Assignment, Constraint};
use super::model::ConstraintModel;
use crate::core::{ColorSet, POSITIONS, Sequence, Turn};
use crate::game::GameError;
use rustc_hash::FxHashSet;

/// Enumerates every sequence consistent with a model
///
/// Positions are assigned in index order, each domain in ascending color order, so
/// solutions come out in lexicographic order. Compound constraints are evaluated
/// three-valued on the partial assignment; a branch is cut at the first one that is
/// already false, and constraints already true are not rechecked below that node.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    limit: Option<usize>,
}

struct Search<'a> {
    domains: &'a [ColorSet; POSITIONS],
    limit: Option<usize>,
    assignment: Assignment,
    pegs: [u8; POSITIONS],
    found: Vec<Sequence>,
}

impl Solver {
    /// Exhaustive solver
    #[must_use]
    pub const fn new() -> Self {
        Self { limit: None }
    }

    /// Solver that stops after `limit` solutions
    #[must_use]
    pub const fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }

    /// All sequences satisfying the model, in lexicographic order
    #[must_use]
    pub fn enumerate(&self, model: &ConstraintModel) -> Vec<Sequence> {
        // Top-level atoms are already reflected in the domains
        let open: Vec<&Constraint> = model
            .constraints()
            .iter()
            .filter(|constraint| !constraint.is_atom())
            .collect();

        let mut search = Search {
            domains: model.domains(),
            limit: self.limit,
            assignment: [None; POSITIONS],
            pegs: [0; POSITIONS],
            found: Vec::new(),
        };
        search.descend(0, &open);
        search.found
    }

    /// Like [`Solver::enumerate`], but an empty result is an error
    ///
    /// # Errors
    /// Returns `GameError::NoSolutions` carrying `played` if nothing satisfies
    /// the model.
    pub fn solutions(
        &self,
        model: &ConstraintModel,
        played: &[Turn],
    ) -> Result<Vec<Sequence>, GameError> {
        let found = self.enumerate(model);
        if found.is_empty() {
            return Err(no_solutions(played));
        }
        Ok(found)
    }

    /// Number of sequences satisfying the model
    ///
    /// # Errors
    /// Returns `GameError::NoSolutions` carrying `played` if there are none.
    pub fn count_solutions(
        &self,
        model: &ConstraintModel,
        played: &[Turn],
    ) -> Result<usize, GameError> {
        self.solutions(model, played).map(|found| found.len())
    }

    /// The next guess: the first solution not played yet
    ///
    /// # Errors
    /// Returns `GameError::NoSolutions` (carrying `played`) if the model has no
    /// solution.
    pub fn next_guess(
        &self,
        model: &ConstraintModel,
        played: &[Turn],
    ) -> Result<Sequence, GameError> {
        select_guess(&self.enumerate(model), played)
    }
}

fn no_solutions(played: &[Turn]) -> GameError {
    GameError::NoSolutions {
        moves: played.to_vec(),
    }
}

impl Search<'_> {
    /// Returns false once the solution limit is reached
    fn descend(&mut self, position: usize, open: &[&Constraint]) -> bool {
        if position == POSITIONS {
            if self.limit.is_some_and(|limit| self.found.len() >= limit) {
                return false;
            }
            self.found.push(Sequence::new(self.pegs));
            return self.limit.is_none_or(|limit| self.found.len() < limit);
        }

        let mut still_open = Vec::with_capacity(open.len());
        for color in self.domains[position].iter() {
            self.assignment[position] = Some(color);
            self.pegs[position] = color;

            still_open.clear();
            let mut violated = false;
            for &constraint in open {
                match constraint.check(&self.assignment) {
                    Some(false) => {
                        violated = true;
                        break;
                    }
                    Some(true) => {}
                    None => still_open.push(constraint),
                }
            }

            if !violated && !self.descend(position + 1, &still_open) {
                self.assignment[position] = None;
                return false;
            }
        }

        self.assignment[position] = None;
        true
    }
}

/// First candidate not already guessed, or the last candidate if all were
///
/// # Errors
/// Returns `GameError::NoSolutions` carrying `history` when `candidates` is
/// empty.
pub fn select_guess(candidates: &[Sequence], history: &[Turn]) -> Result<Sequence, GameError> {
    let played: FxHashSet<Sequence> = history.iter().map(|turn| turn.guess).collect();
    candidates
        .iter()
        .find(|candidate| !played.contains(candidate))
        .or_else(|| candidates.last())
        .copied()
        .ok_or_else(|| no_solutions(history))
}
