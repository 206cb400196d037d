//! Constraint-based solving
//!
//! Feedback is turned into constraints, deduction rules add facts from pairs of
//! turns, and a backtracking search enumerates the sequences still possible.

mod constraint;
mod deduction;
mod model;
mod search;

pub use constraint::{Assignment, Constraint};
pub use deduction::{DeductionOptions, derive};
pub use model::{ConstraintModel, partial_score_constraint, score_constraint};
pub use search::{Solver, select_guess};
