//! Multiple-choice option synthesis.

use crate::domain::{OPTION_COUNT, OperandPair};
use crate::service::digits::digit_count;
use crate::service::random::RandomSource;

/// Perturbation exponent for distractors around `answer`.
///
/// Answers wider than two digits lose two orders of magnitude, and the
/// exponent never drops below one.
#[must_use]
pub fn perturbation_exponent(answer: i64) -> u32 {
    let width = digit_count(answer.unsigned_abs());
    let digit_range = if width > 2 { width - 2 } else { width };
    digit_range.saturating_sub(1).max(1)
}

/// Build the answer options for `pair`.
///
/// Three distractors are drawn first, each the answer plus or minus a
/// random perturbation, then the correct answer is placed at a random slot.
/// Distractors may coincide with each other or with the answer.
#[allow(clippy::cast_possible_wrap)]
pub fn generate_options(pair: OperandPair, rng: &mut impl RandomSource) -> [i64; OPTION_COUNT] {
    let answer = pair.difference();
    let bound = 10_u64.pow(perturbation_exponent(answer));

    let distractors: [i64; OPTION_COUNT - 1] = std::array::from_fn(|_| {
        let add = rng.next_in_range(0, 2) == 0;
        // Bounded by 10^9, so the cast is lossless.
        let offset = rng.next_in_range(1, bound) as i64;
        if add { answer + offset } else { answer - offset }
    });

    let position = usize::try_from(rng.next_in_range(0, OPTION_COUNT as u64)).unwrap_or(0);

    let mut distractors = distractors.into_iter();
    std::array::from_fn(|slot| {
        if slot == position {
            answer
        } else {
            distractors.next().unwrap_or(answer)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::random::{RngSource, SequenceRandom};

    #[test]
    fn test_perturbation_exponent() {
        assert_eq!(perturbation_exponent(0), 1);
        assert_eq!(perturbation_exponent(7), 1);
        assert_eq!(perturbation_exponent(42), 1);
        assert_eq!(perturbation_exponent(308), 1);
        assert_eq!(perturbation_exponent(4_308), 1);
        assert_eq!(perturbation_exponent(54_308), 2);
        assert_eq!(perturbation_exponent(987_654_321), 6);
    }

    #[test]
    fn test_four_options_with_answer() {
        let mut rng = RngSource::thread();
        for _ in 0..200 {
            let options = generate_options(OperandPair::new(500, 192), &mut rng);
            assert_eq!(options.len(), 4);
            assert!(options.contains(&308));
        }
    }

    #[test]
    fn test_scripted_draws() {
        // add 3, subtract 5, add 7, answer in slot 2
        let mut rng = SequenceRandom::new([0, 3, 1, 5, 0, 7, 2]);
        let options = generate_options(OperandPair::new(500, 192), &mut rng);
        assert_eq!(options, [311, 303, 308, 315]);
    }

    #[test]
    fn test_answer_in_first_and_last_slot() {
        let mut rng = SequenceRandom::new([0, 1, 0, 2, 0, 3, 0]);
        assert_eq!(
            generate_options(OperandPair::new(20, 10), &mut rng),
            [10, 11, 12, 13]
        );

        let mut rng = SequenceRandom::new([1, 1, 1, 2, 1, 3, 3]);
        assert_eq!(
            generate_options(OperandPair::new(20, 10), &mut rng),
            [9, 8, 7, 10]
        );
    }

    #[test]
    fn test_perturbation_stays_within_bound() {
        let mut rng = RngSource::seeded(7);
        for _ in 0..200 {
            let options = generate_options(OperandPair::new(987_654, 12_345), &mut rng);
            let answer = 987_654 - 12_345;
            for option in options {
                let offset = (option - answer).unsigned_abs();
                assert!(offset < 10_000);
            }
        }
    }
}
