//! Mastermind feedback calculation and representation
//!
//! Feedback is the pair (white, red):
//! - white = pegs with the right color in the right position
//! - red = pegs with a color present elsewhere, after exact matches are removed
//!
//! Pegs that score neither are implicitly "none": `none = POSITIONS - white - red`.

use super::combinations::{Outcome, OutcomeCounts, combinations};
use super::sequence::{POSITIONS, Sequence};
use std::fmt;
use std::str::FromStr;

/// Feedback for a guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    white: u8,
    red: u8,
}

/// Error type for invalid feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    TooManyPegs { white: usize, red: usize },
    InvalidCharacter(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyPegs { white, red } => write!(
                f,
                "Feedback has {white} white and {red} red pegs, at most {POSITIONS} allowed"
            ),
            Self::InvalidCharacter(c) => {
                write!(f, "Invalid feedback character '{c}' (use w for white, r for red)")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Signed change in white and red counts between two feedbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreDelta {
    pub white: i8,
    pub red: i8,
}

impl fmt::Display for ScoreDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScoreDelta[W={:+},R={:+}]", self.white, self.red)
    }
}

impl Feedback {
    /// All pegs white (the secret was guessed)
    pub const PERFECT: Self = Self {
        white: POSITIONS as u8,
        red: 0,
    };

    /// No peg matched at all
    pub const EMPTY: Self = Self { white: 0, red: 0 };

    /// Create feedback from white and red counts
    ///
    /// # Errors
    /// Returns `FeedbackError::TooManyPegs` if `white + red > POSITIONS`.
    pub const fn new(white: usize, red: usize) -> Result<Self, FeedbackError> {
        if white + red > POSITIONS {
            return Err(FeedbackError::TooManyPegs { white, red });
        }
        Ok(Self {
            white: white as u8,
            red: red as u8,
        })
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: every exact match is a white; the position is consumed on
    ///    both sides
    /// 2. Second pass: for each unconsumed guess position (left to right), the first
    ///    unconsumed secret position of the same color at another index becomes a red
    ///    and is consumed
    ///
    /// The counts equal the per-color matching counts, so the result does not depend
    /// on scan order, and `calculate(a, b) == calculate(b, a)`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Feedback, Sequence};
    ///
    /// let secret = Sequence::new([0, 2, 2, 3]);
    /// let guess = Sequence::new([1, 2, 3, 2]);
    /// let feedback = Feedback::calculate(&secret, &guess);
    /// assert_eq!((feedback.white(), feedback.red()), (1, 2));
    /// ```
    #[must_use]
    pub fn calculate(secret: &Sequence, guess: &Sequence) -> Self {
        let mut matched = [false; POSITIONS];
        let mut used = [false; POSITIONS];
        let mut white = 0;
        let mut red = 0;

        // Allow: Index needed to compare guess[i] with secret[i] and mark both sides
        #[allow(clippy::needless_range_loop)]
        for i in 0..POSITIONS {
            if guess.peg(i) == secret.peg(i) {
                white += 1;
                matched[i] = true;
                used[i] = true;
            }
        }

        for i in 0..POSITIONS {
            if matched[i] {
                continue;
            }
            if let Some(j) =
                (0..POSITIONS).find(|&j| i != j && !used[j] && guess.peg(i) == secret.peg(j))
            {
                red += 1;
                used[j] = true;
            }
        }

        Self { white, red }
    }

    #[inline]
    #[must_use]
    pub const fn white(self) -> usize {
        self.white as usize
    }

    #[inline]
    #[must_use]
    pub const fn red(self) -> usize {
        self.red as usize
    }

    /// Pegs that scored neither white nor red
    #[inline]
    #[must_use]
    pub const fn none(self) -> usize {
        POSITIONS - self.white() - self.red()
    }

    /// Total matches (white + red)
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.white() + self.red()
    }

    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.white() == POSITIONS
    }

    /// Outcome counts of this feedback spread over `positions` positions
    ///
    /// Returns `None` if there are more scored pegs than positions.
    #[must_use]
    pub const fn counts(self, positions: usize) -> Option<OutcomeCounts> {
        if self.total() > positions {
            return None;
        }
        Some(OutcomeCounts {
            white: self.white(),
            red: self.red(),
            none: positions - self.total(),
            ignore: 0,
        })
    }

    /// Every distinct placement of this feedback's outcomes over `positions` slots
    #[must_use]
    pub fn combinations(self, positions: usize) -> Vec<Vec<Outcome>> {
        self.counts(positions).map_or_else(Vec::new, combinations)
    }

    /// Change from `earlier` to `later`
    #[must_use]
    pub const fn delta(earlier: Self, later: Self) -> ScoreDelta {
        ScoreDelta {
            white: later.white as i8 - earlier.white as i8,
            red: later.red as i8 - earlier.red as i8,
        }
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    /// Parse peg letters in any order: `w`/`W` is a white, `r`/`R` a red.
    /// Whitespace is ignored and an empty string means no pegs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut white = 0;
        let mut red = 0;
        for c in s.chars() {
            match c {
                'w' | 'W' => white += 1,
                'r' | 'R' => red += 1,
                c if c.is_whitespace() => {}
                c => return Err(FeedbackError::InvalidCharacter(c)),
            }
        }
        Self::new(white, red)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(white={}, red={})", self.white, self.red)
    }
}
