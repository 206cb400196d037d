//! The constraint model: per-position domains plus accumulated constraints
//!
//! Plain atoms narrow the domains immediately; everything else is stored and
//! checked by the search. A model can carry the real secret (audit mode), in which
//! case every imposed constraint is verified against it first.

use super::constraint::Constraint;
use crate::core::{
    ALL_POSITIONS, ColorSet, Feedback, Outcome, OutcomeCounts, POSITIONS, Sequence, combinations,
};
use crate::game::GameError;
use tracing::trace;

/// Domains and constraints describing every secret still possible
#[derive(Debug, Clone)]
pub struct ConstraintModel {
    domains: [ColorSet; POSITIONS],
    constraints: Vec<Constraint>,
    audit: Option<Sequence>,
}

impl ConstraintModel {
    /// Unconstrained model: every position may hold every color
    #[must_use]
    pub fn new() -> Self {
        Self {
            domains: [ColorSet::FULL; POSITIONS],
            constraints: Vec::new(),
            audit: None,
        }
    }

    /// Unconstrained model that verifies each imposed constraint against `secret`
    #[must_use]
    pub fn with_audit(secret: Sequence) -> Self {
        Self {
            audit: Some(secret),
            ..Self::new()
        }
    }

    /// Add a constraint
    ///
    /// Atoms, and atoms that are conjuncts of a top-level `And`, also narrow the
    /// domains. Disjunctions are left to the search.
    ///
    /// # Errors
    /// In audit mode, returns `GameError::UnsoundConstraint` if the constraint is
    /// false for the known secret. The model is left unchanged in that case.
    pub fn impose(&mut self, constraint: Constraint) -> Result<(), GameError> {
        if let Some(secret) = self.audit
            && !constraint.holds(&secret)
        {
            return Err(GameError::UnsoundConstraint { constraint, secret });
        }

        trace!(%constraint, "impose");
        self.propagate(&constraint);
        self.constraints.push(constraint);
        Ok(())
    }

    fn propagate(&mut self, constraint: &Constraint) {
        match constraint {
            Constraint::Equals { position, color } => self.domains[*position].retain_only(*color),
            Constraint::NotEquals { position, color } => self.domains[*position].remove(*color),
            Constraint::And(parts) => {
                for part in parts {
                    self.propagate(part);
                }
            }
            Constraint::Or(_) => {}
        }
    }

    #[inline]
    #[must_use]
    pub const fn domains(&self) -> &[ColorSet; POSITIONS] {
        &self.domains
    }

    /// Colors still allowed at a position
    ///
    /// # Panics
    /// Panics if position >= `POSITIONS`
    #[inline]
    #[must_use]
    pub const fn domain(&self, position: usize) -> ColorSet {
        self.domains[position]
    }

    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }
}

impl Default for ConstraintModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a feedback says about the secret
///
/// The disjunction, over every placement of the feedback's outcomes, of the
/// per-position facts of that placement. Feedback with no pegs at all collapses
/// to "none of the guess colors appears anywhere".
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Feedback, Sequence};
/// use mastermind_solver::solver::score_constraint;
///
/// let guess = Sequence::new([0, 1, 2, 3]);
/// let secret = Sequence::new([3, 1, 4, 4]);
/// let constraint = score_constraint(&guess, Feedback::calculate(&secret, &guess));
/// assert!(constraint.holds(&secret));
/// assert!(!constraint.holds(&guess));
/// ```
#[must_use]
pub fn score_constraint(guess: &Sequence, feedback: Feedback) -> Constraint {
    if feedback.total() == 0 {
        return Constraint::And(guess.colors().iter().map(Constraint::absent).collect());
    }

    feedback.counts(POSITIONS).map_or_else(
        || Constraint::Or(Vec::new()),
        |counts| partial_score_constraint(guess, &ALL_POSITIONS, counts),
    )
}

/// Score constraint restricted to `positions`
///
/// `counts` must cover exactly `positions.len()` slots. `Ignore` outcomes
/// contribute nothing. A red may only be explained by a position not claimed
/// white by the same placement. When `positions` is the full row and the guess has
/// no repeated color, a `None` outcome means the color is absent everywhere.
#[must_use]
pub fn partial_score_constraint(
    guess: &Sequence,
    positions: &[usize],
    counts: OutcomeCounts,
) -> Constraint {
    debug_assert_eq!(counts.len(), positions.len(), "counts must cover positions");

    let strengthen = positions.len() == POSITIONS && guess.has_distinct_colors();

    let placements = combinations(counts)
        .into_iter()
        .map(|placement| {
            let eligible: Vec<usize> = ALL_POSITIONS
                .into_iter()
                .filter(|pos| {
                    !positions
                        .iter()
                        .zip(&placement)
                        .any(|(p, &o)| p == pos && o == Outcome::White)
                })
                .collect();

            let facts = positions
                .iter()
                .zip(&placement)
                .filter_map(|(&pos, &outcome)| {
                    let color = guess.peg(pos);
                    match outcome {
                        Outcome::White => Some(Constraint::white(color, pos)),
                        Outcome::Red => Some(Constraint::red_within(color, pos, &eligible)),
                        Outcome::None if strengthen => Some(Constraint::absent(color)),
                        Outcome::None => Some(Constraint::none_at(color, pos)),
                        Outcome::Ignore => None,
                    }
                })
                .collect();

            Constraint::And(facts)
        })
        .collect();

    Constraint::Or(placements)
}
