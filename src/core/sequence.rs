//! Mastermind code sequences
//!
//! A Sequence is an ordered row of four colored pegs: either a guess or the secret.

use super::color::{COLORS, ColorSet, color_name, parse_color};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::fmt;
use std::str::FromStr;

/// Number of peg positions in a sequence
pub const POSITIONS: usize = 4;

/// Total number of distinct sequences (`COLORS ^ POSITIONS` = 1296)
pub const SEQUENCE_COUNT: usize = (COLORS as usize).pow(POSITIONS as u32);

/// Every position index, in order
pub const ALL_POSITIONS: [usize; POSITIONS] = [0, 1, 2, 3];

/// An immutable row of `POSITIONS` colored pegs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sequence([u8; POSITIONS]);

/// Error type for invalid sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    InvalidLength(usize),
    ColorOutOfRange(u8),
    UnknownColor(String),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Sequence must have exactly {POSITIONS} pegs, got {len}")
            }
            Self::ColorOutOfRange(color) => {
                write!(f, "Color {color} is out of range (0-{})", COLORS - 1)
            }
            Self::UnknownColor(token) => write!(f, "Unknown color '{token}'"),
        }
    }
}

impl std::error::Error for SequenceError {}

impl Sequence {
    /// Create a sequence from raw peg colors
    ///
    /// # Panics
    /// Panics if any color is `>= COLORS`. In const context this is a compile error.
    #[must_use]
    pub const fn new(pegs: [u8; POSITIONS]) -> Self {
        let mut i = 0;
        while i < POSITIONS {
            assert!(pegs[i] < COLORS, "color out of range");
            i += 1;
        }
        Self(pegs)
    }

    /// Create a sequence, validating every color
    ///
    /// # Errors
    /// Returns `SequenceError` if the slice length is wrong or a color is out of range.
    pub fn try_from_slice(pegs: &[u8]) -> Result<Self, SequenceError> {
        let pegs: [u8; POSITIONS] = pegs
            .try_into()
            .map_err(|_| SequenceError::InvalidLength(pegs.len()))?;
        if let Some(&bad) = pegs.iter().find(|&&c| c >= COLORS) {
            return Err(SequenceError::ColorOutOfRange(bad));
        }
        Ok(Self(pegs))
    }

    /// The sequence at `index` in lexicographic order (0 = `0000`)
    ///
    /// # Panics
    /// Panics in debug mode if `index >= SEQUENCE_COUNT`
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < SEQUENCE_COUNT, "sequence index out of range");
        let mut pegs = [0u8; POSITIONS];
        let mut rest = index;
        for peg in pegs.iter_mut().rev() {
            *peg = (rest % COLORS as usize) as u8;
            rest /= COLORS as usize;
        }
        Self(pegs)
    }

    /// All sequences in lexicographic order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SEQUENCE_COUNT).map(Self::from_index)
    }

    /// A uniformly random sequence
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut pegs = [0u8; POSITIONS];
        for peg in &mut pegs {
            *peg = rng.random_range(0..COLORS);
        }
        Self(pegs)
    }

    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> &[u8; POSITIONS] {
        &self.0
    }

    /// Color at a position (0-3)
    ///
    /// # Panics
    /// Panics if position >= `POSITIONS`
    #[inline]
    #[must_use]
    pub const fn peg(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Number of pegs with the given color
    #[must_use]
    pub fn count(&self, color: u8) -> usize {
        self.0.iter().filter(|&&c| c == color).count()
    }

    /// The set of colors used
    #[must_use]
    pub fn colors(&self) -> ColorSet {
        self.0.iter().copied().collect()
    }

    /// True if no color repeats
    #[must_use]
    pub fn has_distinct_colors(&self) -> bool {
        self.colors().len() == POSITIONS
    }

    /// Positions (ascending) where the two sequences differ
    #[must_use]
    pub fn diff(&self, other: &Self) -> Vec<usize> {
        ALL_POSITIONS
            .into_iter()
            .filter(|&pos| self.0[pos] != other.0[pos])
            .collect()
    }

    /// Space-separated color names, e.g. "blue green purple orange"
    #[must_use]
    pub fn names(&self) -> String {
        self.0
            .iter()
            .map(|&c| color_name(c))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Generate `count` secrets from an explicitly seeded generator
///
/// The same seed always yields the same secrets.
#[must_use]
pub fn random_secrets(seed: u64, count: usize) -> Vec<Sequence> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| Sequence::random(&mut rng)).collect()
}

impl FromStr for Sequence {
    type Err = SequenceError;

    /// Parse `"0123"`, `"0 1 2 3"`, `"0,1,2,3"` or `"blue green purple orange"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        let pegs: Vec<u8> = if let [compact] = tokens.as_slice()
            && compact.chars().all(|c| c.is_ascii_digit())
        {
            compact.bytes().map(|b| b - b'0').collect()
        } else {
            tokens
                .iter()
                .map(|t| {
                    parse_color(t).ok_or_else(|| SequenceError::UnknownColor((*t).to_string()))
                })
                .collect::<Result<_, _>>()?
        };

        Self::try_from_slice(&pegs)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in self.0 {
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_compact_digits() {
        let seq: Sequence = "0123".parse().unwrap();
        assert_eq!(seq, Sequence::new([0, 1, 2, 3]));
        assert_eq!(seq.to_string(), "0123");
    }

    #[test]
    fn parse_separated_and_named() {
        let a: Sequence = "4, 1, 2, 3".parse().unwrap();
        let b: Sequence = "yellow green PURPLE orange".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(b.names(), "yellow green purple orange");
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(
            "012".parse::<Sequence>(),
            Err(SequenceError::InvalidLength(3))
        );
        assert_eq!(
            "0126".parse::<Sequence>(),
            Err(SequenceError::ColorOutOfRange(6))
        );
        assert_eq!(
            "blue green black red".parse::<Sequence>(),
            Err(SequenceError::UnknownColor("black".to_string()))
        );
        assert!("".parse::<Sequence>().is_err());
    }

    #[test]
    fn all_sequences_in_order() {
        let all: Vec<Sequence> = Sequence::all().collect();
        assert_eq!(all.len(), 1296);
        assert_eq!(all[0], Sequence::new([0, 0, 0, 0]));
        assert_eq!(all[1], Sequence::new([0, 0, 0, 1]));
        assert_eq!(all[6], Sequence::new([0, 0, 1, 0]));
        assert_eq!(all[1295], Sequence::new([5, 5, 5, 5]));
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn distinct_colors_and_counts() {
        assert!(Sequence::new([0, 1, 2, 3]).has_distinct_colors());
        let repeated = Sequence::new([0, 0, 1, 2]);
        assert!(!repeated.has_distinct_colors());
        assert_eq!(repeated.count(0), 2);
        assert_eq!(repeated.count(5), 0);
    }

    #[test]
    fn diff_positions() {
        let a = Sequence::new([0, 1, 2, 3]);
        let b = Sequence::new([4, 1, 2, 5]);
        assert_eq!(a.diff(&b), vec![0, 3]);
        assert!(a.diff(&a).is_empty());
    }

    #[test]
    fn seeded_secrets_are_reproducible() {
        let first = random_secrets(42, 20);
        let second = random_secrets(42, 20);
        assert_eq!(first, second);
        assert_eq!(first.len(), 20);
        assert!(first.iter().all(|s| s.pegs().iter().all(|&c| c < COLORS)));
    }
}
