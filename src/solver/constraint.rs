//! Constraint expressions over the secret
//!
//! A constraint is a boolean expression over atoms "position `p` holds color `c`".
//! It is evaluated either against a full sequence or, during search, against a
//! partial assignment where unassigned positions make an atom undetermined.

use crate::core::{ALL_POSITIONS, POSITIONS, Sequence};
use std::fmt;

/// Per-position color assignment; `None` means not assigned yet
pub type Assignment = [Option<u8>; POSITIONS];

/// Boolean expression over "position == color" atoms
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// Position holds the color
    Equals { position: usize, color: u8 },
    /// Position does not hold the color
    NotEquals { position: usize, color: u8 },
    /// Every part holds (an empty conjunction is true)
    And(Vec<Constraint>),
    /// At least one part holds (an empty disjunction is false)
    Or(Vec<Constraint>),
}

impl Constraint {
    /// Color appears in the given position
    #[must_use]
    pub const fn white(color: u8, position: usize) -> Self {
        Self::Equals { position, color }
    }

    /// Color does not appear in the given position
    #[must_use]
    pub const fn none_at(color: u8, position: usize) -> Self {
        Self::NotEquals { position, color }
    }

    /// Color does not appear in any position
    #[must_use]
    pub fn absent(color: u8) -> Self {
        Self::And(
            ALL_POSITIONS
                .into_iter()
                .map(|position| Self::none_at(color, position))
                .collect(),
        )
    }

    /// Color is not in the given position but is in one of the others
    #[must_use]
    pub fn red(color: u8, position: usize) -> Self {
        Self::red_within(color, position, &ALL_POSITIONS)
    }

    /// Color is not in the given position but is in one of `eligible` (minus `position`)
    #[must_use]
    pub fn red_within(color: u8, position: usize, eligible: &[usize]) -> Self {
        let elsewhere = eligible
            .iter()
            .filter(|&&p| p != position)
            .map(|&p| Self::white(color, p))
            .collect();
        Self::And(vec![Self::none_at(color, position), Self::Or(elsewhere)])
    }

    /// True for `Equals` and `NotEquals`
    #[inline]
    #[must_use]
    pub const fn is_atom(&self) -> bool {
        matches!(self, Self::Equals { .. } | Self::NotEquals { .. })
    }

    /// Evaluate against a complete sequence
    #[must_use]
    pub fn holds(&self, sequence: &Sequence) -> bool {
        match self {
            Self::Equals { position, color } => sequence.peg(*position) == *color,
            Self::NotEquals { position, color } => sequence.peg(*position) != *color,
            Self::And(parts) => parts.iter().all(|part| part.holds(sequence)),
            Self::Or(parts) => parts.iter().any(|part| part.holds(sequence)),
        }
    }

    /// Three-valued evaluation against a partial assignment
    ///
    /// Returns `Some(true)` / `Some(false)` once the outcome no longer depends on the
    /// unassigned positions, `None` otherwise.
    #[must_use]
    pub fn check(&self, assignment: &Assignment) -> Option<bool> {
        match self {
            Self::Equals { position, color } => assignment[*position].map(|c| c == *color),
            Self::NotEquals { position, color } => assignment[*position].map(|c| c != *color),
            Self::And(parts) => {
                let mut undetermined = false;
                for part in parts {
                    match part.check(assignment) {
                        Some(false) => return Some(false),
                        None => undetermined = true,
                        Some(true) => {}
                    }
                }
                (!undetermined).then_some(true)
            }
            Self::Or(parts) => {
                let mut undetermined = false;
                for part in parts {
                    match part.check(assignment) {
                        Some(true) => return Some(true),
                        None => undetermined = true,
                        Some(false) => {}
                    }
                }
                (!undetermined).then_some(false)
            }
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equals { position, color } => write!(f, "peg{position} == {color}"),
            Self::NotEquals { position, color } => write!(f, "peg{position} != {color}"),
            Self::And(parts) => write_list(f, "and", parts),
            Self::Or(parts) => write_list(f, "or", parts),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, name: &str, parts: &[Constraint]) -> fmt::Result {
    write!(f, "{name}(")?;
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{part}")?;
    }
    write!(f, ")")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atoms_against_sequence() {
        let secret = Sequence::new([0, 1, 2, 3]);
        assert!(Constraint::white(2, 2).holds(&secret));
        assert!(!Constraint::white(2, 1).holds(&secret));
        assert!(Constraint::none_at(2, 1).holds(&secret));
        assert!(Constraint::absent(5).holds(&secret));
        assert!(!Constraint::absent(3).holds(&secret));
    }

    #[test]
    fn red_requires_other_position() {
        let secret = Sequence::new([0, 1, 2, 3]);
        assert!(Constraint::red(3, 0).holds(&secret));
        assert!(!Constraint::red(3, 3).holds(&secret));
        assert!(!Constraint::red(4, 0).holds(&secret));
        // Restricting eligible positions hides the real location
        assert!(!Constraint::red_within(3, 0, &[1, 2]).holds(&secret));
    }

    #[test]
    fn empty_compounds() {
        let secret = Sequence::new([0, 0, 0, 0]);
        assert!(Constraint::And(vec![]).holds(&secret));
        assert!(!Constraint::Or(vec![]).holds(&secret));
        assert_eq!(Constraint::Or(vec![]).check(&[None; POSITIONS]), Some(false));
    }

    #[test]
    fn partial_evaluation() {
        let c = Constraint::Or(vec![Constraint::white(1, 0), Constraint::white(2, 3)]);

        assert_eq!(c.check(&[None, None, None, None]), None);
        assert_eq!(c.check(&[Some(1), None, None, None]), Some(true));
        assert_eq!(c.check(&[Some(0), None, None, None]), None);
        assert_eq!(c.check(&[Some(0), Some(0), Some(0), Some(0)]), Some(false));

        let d = Constraint::And(vec![Constraint::none_at(1, 0), Constraint::white(2, 3)]);
        assert_eq!(d.check(&[Some(1), None, None, None]), Some(false));
        assert_eq!(d.check(&[Some(0), None, None, None]), None);
    }

    #[test]
    fn partial_agrees_with_full_evaluation() {
        let c = Constraint::red(2, 1);
        for seq in Sequence::all() {
            let full = seq.pegs().map(Some);
            assert_eq!(c.check(&full), Some(c.holds(&seq)));
        }
    }

    #[test]
    fn display_format() {
        let c = Constraint::red_within(3, 0, &[0, 2]);
        assert_eq!(c.to_string(), "and(peg0 != 3, or(peg2 == 3))");
        assert!(Constraint::white(1, 1).is_atom());
        assert!(!c.is_atom());
    }
}
