//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types: colors, sequences, feedback
//! and the combination enumerator. Everything here is pure and deterministic.

mod color;
mod combinations;
mod feedback;
mod sequence;
mod turn;

pub use color::{COLOR_NAMES, COLORS, ColorSet, color_name, parse_color};
pub use combinations::{Outcome, OutcomeCounts, combinations};
pub use feedback::{Feedback, FeedbackError, ScoreDelta};
pub use sequence::{
    ALL_POSITIONS, POSITIONS, SEQUENCE_COUNT, Sequence, SequenceError, random_secrets,
};
pub use turn::Turn;
