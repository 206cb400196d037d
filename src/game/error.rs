//! Errors raised while playing a game

use crate::core::{Sequence, Turn};
use crate::solver::Constraint;
use std::fmt;

/// Error type for game and solver failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The accumulated constraints admit no sequence at all
    NoSolutions { moves: Vec<Turn> },
    /// A derived constraint is false for the known secret (audit mode)
    UnsoundConstraint {
        constraint: Constraint,
        secret: Sequence,
    },
    /// The scorer failed or returned malformed feedback
    InvalidFeedback(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSolutions { moves } => {
                write!(f, "No solutions remain after {} moves", moves.len())?;
                for turn in moves {
                    write!(f, "\n  {turn}")?;
                }
                Ok(())
            }
            Self::UnsoundConstraint { constraint, secret } => {
                write!(f, "Constraint {constraint} does not hold for secret {secret}")
            }
            Self::InvalidFeedback(reason) => write!(f, "Invalid feedback: {reason}"),
        }
    }
}

impl std::error::Error for GameError {}
