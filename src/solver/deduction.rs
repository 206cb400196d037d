//! Differential deduction between two scored guesses
//!
//! When two guesses differ in only a few positions, the change in feedback pins
//! down facts about exactly those positions that the per-guess score constraints
//! only imply through a much larger search.

use super::constraint::Constraint;
use super::model::partial_score_constraint;
use crate::core::{Feedback, OutcomeCounts, ScoreDelta, Turn};

/// Which deduction rules are enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeductionOptions {
    /// Rules for guesses differing in one, two or three positions
    pub differential_rules: bool,
    /// Experimental and unsound in general: equal totals plus a color subset
    /// marks the extra colors absent
    pub colour_subset_rule: bool,
}

impl Default for DeductionOptions {
    fn default() -> Self {
        Self {
            differential_rules: true,
            colour_subset_rule: false,
        }
    }
}

impl DeductionOptions {
    /// Every rule disabled: only score constraints are used
    #[must_use]
    pub const fn none() -> Self {
        Self {
            differential_rules: false,
            colour_subset_rule: false,
        }
    }
}

/// Constraints implied by comparing an earlier turn with a later one
///
/// Each returned constraint is independent of the others and is meant to be
/// imposed in addition to the two score constraints.
#[must_use]
pub fn derive(earlier: &Turn, later: &Turn, options: DeductionOptions) -> Vec<Constraint> {
    let mut derived = Vec::new();

    if options.differential_rules {
        let diff = earlier.guess.diff(&later.guess);
        let delta = Feedback::delta(earlier.feedback, later.feedback);
        match diff.as_slice() {
            &[p] => single_slot(earlier, later, p, delta, &mut derived),
            &[a, b] => two_slots(earlier, later, [a, b], delta, &mut derived),
            [_, _, _] => three_slots(earlier, later, &diff, delta, &mut derived),
            _ => {}
        }
    }

    if options.colour_subset_rule {
        colour_subset(earlier, later, &mut derived);
    }

    derived
}

fn single_slot(
    earlier: &Turn,
    later: &Turn,
    p: usize,
    delta: ScoreDelta,
    derived: &mut Vec<Constraint>,
) {
    let old = earlier.guess.peg(p);
    let new = later.guess.peg(p);
    let distinct = earlier.guess.has_distinct_colors() && later.guess.has_distinct_colors();

    match delta.white {
        0 => {
            derived.push(Constraint::none_at(old, p));
            derived.push(Constraint::none_at(new, p));
            match delta.red {
                1 => {
                    derived.push(Constraint::red(new, p));
                    // A second copy of `old` may still be matched elsewhere
                    if earlier.guess.count(old) == 1 {
                        derived.push(Constraint::absent(old));
                    }
                }
                -1 => {
                    derived.push(Constraint::red(old, p));
                    if later.guess.count(new) == 1 {
                        derived.push(Constraint::absent(new));
                    }
                }
                _ => {}
            }
        }
        1 => {
            derived.push(Constraint::white(new, p));
            derived.push(Constraint::none_at(old, p));
            if distinct {
                match delta.red {
                    0 => derived.push(Constraint::absent(old)),
                    -1 => derived.push(Constraint::red(old, p)),
                    _ => {}
                }
            }
        }
        -1 => {
            derived.push(Constraint::white(old, p));
            derived.push(Constraint::none_at(new, p));
            if distinct {
                match delta.red {
                    0 => derived.push(Constraint::absent(new)),
                    1 => derived.push(Constraint::red(new, p)),
                    _ => {}
                }
            }
        }
        _ => {}
    }
}

fn two_slots(
    earlier: &Turn,
    later: &Turn,
    slots: [usize; 2],
    delta: ScoreDelta,
    derived: &mut Vec<Constraint>,
) {
    if earlier.feedback.red() != 0 || later.feedback.red() != 0 || delta.white == 0 {
        return;
    }

    let lower = if delta.white > 0 { earlier } else { later };
    for color in slots.map(|slot| lower.guess.peg(slot)) {
        for slot in slots {
            derived.push(Constraint::none_at(color, slot));
        }
    }
}

fn three_slots(
    earlier: &Turn,
    later: &Turn,
    slots: &[usize],
    delta: ScoreDelta,
    derived: &mut Vec<Constraint>,
) {
    // Red-only changes say nothing position-specific
    if delta.white == 0 {
        return;
    }

    let higher = if delta.white > 0 { later } else { earlier };
    let whites = usize::from(delta.white.unsigned_abs());
    derived.push(partial_score_constraint(
        &higher.guess,
        slots,
        OutcomeCounts::at_least_white(whites, slots.len()),
    ));
}

fn colour_subset(earlier: &Turn, later: &Turn, derived: &mut Vec<Constraint>) {
    if earlier.feedback.total() != later.feedback.total() {
        return;
    }

    let first = earlier.guess.colors();
    let second = later.guess.colors();
    let extra = if first == second {
        return;
    } else if first.is_subset(second) {
        second.difference(first)
    } else if second.is_subset(first) {
        first.difference(second)
    } else {
        return;
    };

    derived.extend(extra.iter().map(Constraint::absent));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{COLORS, POSITIONS, Sequence};
    use rayon::prelude::*;

    fn turn(guess: Sequence, secret: &Sequence) -> Turn {
        Turn::new(guess, Feedback::calculate(secret, &guess))
    }

    fn with_peg(guess: Sequence, position: usize, color: u8) -> Sequence {
        let mut pegs = *guess.pegs();
        pegs[position] = color;
        Sequence::new(pegs)
    }

    /// Every derived constraint holds for the secret that produced the feedback
    fn assert_sound(first: Sequence, second: Sequence, secrets: &[Sequence]) {
        let options = DeductionOptions::default();
        for secret in secrets {
            let earlier = turn(first, secret);
            let later = turn(second, secret);
            for constraint in derive(&earlier, &later, options) {
                assert!(
                    constraint.holds(secret),
                    "{first} -> {second}, secret {secret}: {constraint}"
                );
            }
        }
    }

    #[test]
    fn single_slot_rules_are_sound() {
        let secrets: Vec<Sequence> = Sequence::all().collect();
        Sequence::all().par_bridge().for_each(|first| {
            for position in 0..POSITIONS {
                for color in (0..COLORS).filter(|&c| c != first.peg(position)) {
                    assert_sound(first, with_peg(first, position, color), &secrets);
                }
            }
        });
    }

    #[test]
    fn two_slot_rules_are_sound() {
        let secrets: Vec<Sequence> = Sequence::all().step_by(5).collect();
        Sequence::all()
            .step_by(13)
            .par_bridge()
            .for_each(|first| {
                for (a, b) in [(0, 1), (0, 3), (1, 2), (2, 3)] {
                    for ca in (0..COLORS).filter(|&c| c != first.peg(a)) {
                        for cb in (0..COLORS).filter(|&c| c != first.peg(b)) {
                            let second = with_peg(with_peg(first, a, ca), b, cb);
                            assert_sound(first, second, &secrets);
                        }
                    }
                }
            });
    }

    #[test]
    fn three_slot_rules_are_sound() {
        let secrets: Vec<Sequence> = Sequence::all().step_by(7).collect();
        Sequence::all()
            .step_by(17)
            .par_bridge()
            .for_each(|first| {
                for second in Sequence::all().filter(|s| first.diff(s).len() == 3) {
                    assert_sound(first, second, &secrets);
                }
            });
    }

    #[test]
    fn single_white_gain_pins_position() {
        let secret = Sequence::new([4, 1, 2, 3]);
        let earlier = turn(Sequence::new([0, 1, 2, 3]), &secret);
        let later = turn(Sequence::new([4, 1, 2, 3]), &secret);

        let derived = derive(&earlier, &later, DeductionOptions::default());
        assert!(derived.contains(&Constraint::white(4, 0)));
        assert!(derived.contains(&Constraint::none_at(0, 0)));
        // Both guesses distinct and reds unchanged: the dropped color is gone
        assert!(derived.contains(&Constraint::absent(0)));
    }

    #[test]
    fn single_white_loss_pins_old_color() {
        let secret = Sequence::new([4, 1, 2, 3]);
        let earlier = turn(Sequence::new([4, 1, 2, 3]), &secret);
        let later = turn(Sequence::new([0, 1, 2, 3]), &secret);
        assert_eq!(
            Feedback::delta(earlier.feedback, later.feedback),
            ScoreDelta { white: -1, red: 0 }
        );

        let derived = derive(&earlier, &later, DeductionOptions::default());
        assert_eq!(
            derived,
            vec![
                Constraint::white(4, 0),
                Constraint::none_at(0, 0),
                Constraint::absent(0),
            ]
        );
    }

    #[test]
    fn single_red_loss_marks_old_color_misplaced() {
        // 0123 -> 4123 against 5505 scores (0,1) then (0,0)
        let secret = Sequence::new([5, 5, 0, 5]);
        let earlier = turn(Sequence::new([0, 1, 2, 3]), &secret);
        let later = turn(Sequence::new([4, 1, 2, 3]), &secret);
        assert_eq!(
            Feedback::delta(earlier.feedback, later.feedback),
            ScoreDelta { white: 0, red: -1 }
        );

        let derived = derive(&earlier, &later, DeductionOptions::default());
        assert_eq!(
            derived,
            vec![
                Constraint::none_at(0, 0),
                Constraint::none_at(4, 0),
                Constraint::red(0, 0),
                Constraint::absent(4),
            ]
        );
        assert!(derived.iter().all(|c| c.holds(&secret)));
    }

    #[test]
    fn two_slot_white_gain_clears_lower_colors() {
        // 4523 scores (2,0), 4020 scores (3,0) against 4021
        let secret = Sequence::new([4, 0, 2, 1]);
        let earlier = turn(Sequence::new([4, 5, 2, 3]), &secret);
        let later = turn(Sequence::new([4, 0, 2, 0]), &secret);
        assert_eq!(earlier.feedback, Feedback::new(2, 0).unwrap());
        assert_eq!(later.feedback, Feedback::new(3, 0).unwrap());

        let derived = derive(&earlier, &later, DeductionOptions::default());
        assert_eq!(
            derived,
            vec![
                Constraint::none_at(5, 1),
                Constraint::none_at(5, 3),
                Constraint::none_at(3, 1),
                Constraint::none_at(3, 3),
            ]
        );
    }

    #[test]
    fn two_slot_change_with_reds_derives_nothing() {
        let secret = Sequence::new([4, 0, 3, 1]);
        let earlier = turn(Sequence::new([4, 5, 2, 3]), &secret);
        let later = turn(Sequence::new([4, 0, 2, 0]), &secret);
        assert!(earlier.feedback.red() > 0);

        assert!(derive(&earlier, &later, DeductionOptions::default()).is_empty());
    }

    #[test]
    fn three_slot_white_gain_needs_white_in_higher_guess() {
        // 0123 scores (1,0), 0450 scores (2,2) against 0405
        let secret = Sequence::new([0, 4, 0, 5]);
        let earlier = turn(Sequence::new([0, 1, 2, 3]), &secret);
        let later = turn(Sequence::new([0, 4, 5, 0]), &secret);
        assert_eq!(
            Feedback::delta(earlier.feedback, later.feedback),
            ScoreDelta { white: 1, red: 2 }
        );

        let derived = derive(&earlier, &later, DeductionOptions::default());
        assert_eq!(
            derived,
            vec![partial_score_constraint(
                &later.guess,
                &[1, 2, 3],
                OutcomeCounts::at_least_white(1, 3),
            )]
        );
        assert!(derived[0].holds(&secret));
        // No white among positions 1..4 of 0450 for this secret
        assert!(!derived[0].holds(&Sequence::new([0, 0, 0, 4])));
    }

    #[test]
    fn repeated_color_keeps_dropped_color() {
        // 0012 -> 3012 against 4035 scores (1,0) then (1,1); color 0 is still present
        let secret = Sequence::new([4, 0, 3, 5]);
        let earlier = turn(Sequence::new([0, 0, 1, 2]), &secret);
        let later = turn(Sequence::new([3, 0, 1, 2]), &secret);
        assert_eq!(
            Feedback::delta(earlier.feedback, later.feedback),
            ScoreDelta { white: 0, red: 1 }
        );

        let derived = derive(&earlier, &later, DeductionOptions::default());
        assert!(derived.contains(&Constraint::red(3, 0)));
        assert!(!derived.contains(&Constraint::absent(0)));
    }

    #[test]
    fn red_only_three_slot_change_derives_nothing() {
        // Two reds lost, but only position 1 of 0123 is red against 1013
        let secret = Sequence::new([1, 0, 1, 3]);
        let earlier = turn(Sequence::new([0, 1, 2, 3]), &secret);
        let later = turn(Sequence::new([0, 0, 0, 0]), &secret);
        assert_eq!(earlier.guess.diff(&later.guess), vec![1, 2, 3]);
        assert_eq!(
            Feedback::delta(earlier.feedback, later.feedback),
            ScoreDelta { white: 0, red: -2 }
        );

        assert!(derive(&earlier, &later, DeductionOptions::default()).is_empty());
    }

    #[test]
    fn rules_can_be_disabled() {
        let secret = Sequence::new([4, 1, 2, 3]);
        let earlier = turn(Sequence::new([0, 1, 2, 3]), &secret);
        let later = turn(Sequence::new([4, 1, 2, 3]), &secret);
        assert!(derive(&earlier, &later, DeductionOptions::none()).is_empty());
    }

    #[test]
    fn subset_rule_is_unsound() {
        let secret = Sequence::new([0, 0, 2, 4]);
        let earlier = turn(Sequence::new([0, 0, 1, 1]), &secret);
        let later = turn(Sequence::new([0, 1, 2, 3]), &secret);
        assert_eq!(earlier.feedback.total(), later.feedback.total());

        let options = DeductionOptions {
            differential_rules: false,
            colour_subset_rule: true,
        };
        let derived = derive(&earlier, &later, options);
        assert!(derived.contains(&Constraint::absent(2)));
        assert!(derived.contains(&Constraint::absent(3)));
        assert!(!Constraint::absent(2).holds(&secret));
    }
}
