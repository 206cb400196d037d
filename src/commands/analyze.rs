//! Sequence analysis command
//!
//! Shows how a sequence's feedback spreads over every possible secret, and how the
//! feedback changes between two guesses.

use crate::core::{Feedback, ScoreDelta, Sequence};
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// Result of analyzing a sequence
pub struct AnalysisResult {
    pub sequence: Sequence,
    /// Feedback counts over every secret, highest count first
    pub histogram: Vec<(Feedback, usize)>,
    /// Mean score with a white worth 2 and a red worth 1
    pub average_score: f64,
    /// Second guess and the delta histogram against it, if requested
    pub deltas: Option<(Sequence, Vec<(ScoreDelta, usize)>)>,
}

/// Analyze a guess, optionally comparing it with a second guess
#[must_use]
pub fn analyze_sequence(sequence: Sequence, against: Option<Sequence>) -> AnalysisResult {
    let histogram = feedback_histogram(&sequence);
    AnalysisResult {
        sequence,
        average_score: average_score(&histogram),
        histogram,
        deltas: against.map(|second| (second, delta_histogram(&sequence, &second))),
    }
}

/// Feedback of every possible guess against `secret`, highest count first
///
/// Feedback is symmetric, so this is also the feedback of `secret` as a guess
/// against every possible secret.
#[must_use]
pub fn feedback_histogram(secret: &Sequence) -> Vec<(Feedback, usize)> {
    let mut counts: FxHashMap<Feedback, usize> = FxHashMap::default();
    for guess in Sequence::all() {
        *counts.entry(Feedback::calculate(secret, &guess)).or_insert(0) += 1;
    }

    let mut histogram: Vec<_> = counts.into_iter().collect();
    histogram.sort_unstable_by_key(|&(feedback, count)| (Reverse(count), feedback));
    histogram
}

/// Score change from `first` to `second`, counted over every possible secret
#[must_use]
pub fn delta_histogram(first: &Sequence, second: &Sequence) -> Vec<(ScoreDelta, usize)> {
    let mut counts: FxHashMap<ScoreDelta, usize> = FxHashMap::default();
    for secret in Sequence::all() {
        let delta = Feedback::delta(
            Feedback::calculate(&secret, first),
            Feedback::calculate(&secret, second),
        );
        *counts.entry(delta).or_insert(0) += 1;
    }

    let mut histogram: Vec<_> = counts.into_iter().collect();
    histogram.sort_unstable_by_key(|&(delta, count)| (Reverse(count), delta.white, delta.red));
    histogram
}

/// Mean of `2 * white + red` over a histogram
#[must_use]
pub fn average_score(histogram: &[(Feedback, usize)]) -> f64 {
    let (total, games) = histogram
        .iter()
        .fold((0, 0), |(total, games), &(feedback, count)| {
            (
                total + (2 * feedback.white() + feedback.red()) * count,
                games + count,
            )
        });
    if games == 0 {
        0.0
    } else {
        total as f64 / games as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SEQUENCE_COUNT;

    #[test]
    fn histogram_covers_every_guess() {
        let histogram = feedback_histogram(&Sequence::new([0, 1, 2, 3]));

        assert_eq!(histogram.iter().map(|&(_, n)| n).sum::<usize>(), SEQUENCE_COUNT);
        assert!(histogram.windows(2).all(|w| w[0].1 >= w[1].1));
        assert!(histogram.contains(&(Feedback::PERFECT, 1)));
        // Guesses using only colors 4 and 5
        assert!(histogram.contains(&(Feedback::EMPTY, 16)));
    }

    #[test]
    fn identical_guesses_never_change_score() {
        let guess = Sequence::new([0, 0, 1, 1]);
        let histogram = delta_histogram(&guess, &guess);
        assert_eq!(
            histogram,
            vec![(ScoreDelta { white: 0, red: 0 }, SEQUENCE_COUNT)]
        );
    }

    #[test]
    fn single_slot_change_moves_one_peg() {
        let histogram = delta_histogram(&Sequence::new([0, 1, 2, 3]), &Sequence::new([4, 1, 2, 3]));
        assert_eq!(histogram.iter().map(|&(_, n)| n).sum::<usize>(), SEQUENCE_COUNT);
        assert!(
            histogram
                .iter()
                .all(|(delta, _)| delta.white.abs() <= 1 && delta.red.abs() <= 1)
        );
    }

    #[test]
    fn average_score_weights_whites() {
        let histogram = vec![
            (Feedback::new(1, 0).unwrap(), 1),
            (Feedback::new(0, 1).unwrap(), 1),
        ];
        assert!((average_score(&histogram) - 1.5).abs() < 1e-9);
        assert!(average_score(&[]).abs() < f64::EPSILON);

        let result = analyze_sequence(Sequence::new([0, 1, 2, 3]), None);
        assert!(result.average_score > 0.0);
        assert!(result.deltas.is_none());
    }
}
