//! Combination enumeration
//!
//! A feedback only says *how many* pegs were white or red, not *which* ones. This
//! module expands outcome counts into every distinct way of assigning those outcomes
//! to positions (the distinct permutations of the outcome multiset).

/// Outcome of a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    /// Right color, right position
    White,
    /// Right color, wrong position
    Red,
    /// Color not matched
    None,
    /// No claim about this position (partial targets only)
    Ignore,
}

impl Outcome {
    /// Enumeration order used by [`combinations`]
    pub const ORDER: [Self; 4] = [Self::White, Self::Red, Self::None, Self::Ignore];

    /// Single-letter label: W, R, - or ?
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::White => 'W',
            Self::Red => 'R',
            Self::None => '-',
            Self::Ignore => '?',
        }
    }
}

/// How many positions receive each outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutcomeCounts {
    pub white: usize,
    pub red: usize,
    pub none: usize,
    pub ignore: usize,
}

impl OutcomeCounts {
    /// Number of positions covered
    #[must_use]
    pub const fn len(&self) -> usize {
        self.white + self.red + self.none + self.ignore
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `white` whites, everything else ignored
    #[must_use]
    pub const fn at_least_white(white: usize, positions: usize) -> Self {
        Self {
            white,
            red: 0,
            none: 0,
            ignore: positions.saturating_sub(white),
        }
    }

    const fn as_array(self) -> [usize; 4] {
        [self.white, self.red, self.none, self.ignore]
    }
}

/// Every distinct assignment of the counted outcomes to positions
///
/// Results are in lexicographic order of [`Outcome::ORDER`]. Repeated outcomes are
/// never permuted among themselves, so there are no duplicates: for counts
/// `(w, r, n, i)` there are `(w+r+n+i)! / (w! r! n! i!)` combinations.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{combinations, Outcome, OutcomeCounts};
///
/// let counts = OutcomeCounts { white: 1, red: 0, none: 1, ignore: 0 };
/// assert_eq!(
///     combinations(counts),
///     vec![vec![Outcome::White, Outcome::None], vec![Outcome::None, Outcome::White]]
/// );
/// ```
#[must_use]
pub fn combinations(counts: OutcomeCounts) -> Vec<Vec<Outcome>> {
    let mut remaining = counts.as_array();
    let mut current = Vec::with_capacity(counts.len());
    let mut result = Vec::new();
    permute(&mut remaining, &mut current, &mut result);
    result
}

fn permute(remaining: &mut [usize; 4], current: &mut Vec<Outcome>, result: &mut Vec<Vec<Outcome>>) {
    if remaining.iter().all(|&n| n == 0) {
        result.push(current.clone());
        return;
    }

    for (idx, &outcome) in Outcome::ORDER.iter().enumerate() {
        if remaining[idx] == 0 {
            continue;
        }
        remaining[idx] -= 1;
        current.push(outcome);
        permute(remaining, current, result);
        current.pop();
        remaining[idx] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn counts(white: usize, red: usize, none: usize) -> OutcomeCounts {
        OutcomeCounts {
            white,
            red,
            none,
            ignore: 0,
        }
    }

    #[test]
    fn all_none_has_single_combination() {
        let combos = combinations(counts(0, 0, 4));
        assert_eq!(combos, vec![vec![Outcome::None; 4]]);
    }

    #[test]
    fn one_white_is_placed_at_each_slot() {
        let combos = combinations(counts(1, 0, 3));
        assert_eq!(combos.len(), 4);
        for (slot, combo) in combos.iter().enumerate() {
            assert_eq!(combo.iter().filter(|&&o| o == Outcome::White).count(), 1);
            assert_eq!(combo[slot], Outcome::White);
        }
    }

    #[test]
    fn white_and_red_give_twelve() {
        let combos = combinations(counts(1, 1, 2));
        assert_eq!(combos.len(), 12);

        let unique: FxHashSet<_> = combos.iter().cloned().collect();
        assert_eq!(unique.len(), 12);

        assert!(combos.contains(&vec![
            Outcome::None,
            Outcome::None,
            Outcome::White,
            Outcome::Red
        ]));
        assert!(combos.contains(&vec![
            Outcome::Red,
            Outcome::White,
            Outcome::None,
            Outcome::None
        ]));
    }

    #[test]
    fn multiset_counts_match_formula() {
        // 4! / (2! 2!) = 6
        assert_eq!(combinations(counts(2, 2, 0)).len(), 6);
        // 4! / (1! 3!) = 4
        assert_eq!(combinations(counts(0, 3, 1)).len(), 4);
        // all four distinct outcomes: 4! = 24
        let mixed = OutcomeCounts {
            white: 1,
            red: 1,
            none: 1,
            ignore: 1,
        };
        assert_eq!(combinations(mixed).len(), 24);
    }

    #[test]
    fn partial_targets_with_ignore() {
        let combos = combinations(OutcomeCounts::at_least_white(1, 3));
        assert_eq!(combos.len(), 3);
        assert!(combos.iter().all(|c| c.len() == 3));
        assert_eq!(combos[0], vec![Outcome::White, Outcome::Ignore, Outcome::Ignore]);
    }

    #[test]
    fn empty_counts_give_one_empty_combination() {
        assert_eq!(combinations(OutcomeCounts::default()), vec![Vec::<Outcome>::new()]);
    }
}
