//! Borrowing adjustment.
//!
//! Swaps individual digits between the minuend and the subtrahend so that
//! column subtraction does, or does not, need to borrow.

use crate::domain::OperandPair;
use crate::service::digits::{digit_differences, from_digits, to_digits};

/// Adjust `pair` so that its column subtraction borrows iff `borrowing`.
///
/// With `borrowing` set and no column already borrowing, the digits of the
/// least significant column with a positive difference are swapped. Without
/// it, every borrowing column is swapped. Pairs that already match are
/// returned unchanged, as are equal pairs that have nothing to swap.
///
/// Digits are reassembled as plain integers, so a zero swapped into the
/// most significant position shortens that operand.
#[must_use]
pub fn adjust_for_borrowing(pair: OperandPair, borrowing: bool) -> OperandPair {
    let mut minuend = to_digits(pair.minuend);
    let mut subtrahend = to_digits(pair.subtrahend);

    let len = minuend.len().max(subtrahend.len());
    minuend.resize(len, 0);
    subtrahend.resize(len, 0);

    let diffs = digit_differences(&minuend, &subtrahend);
    let already_borrows = diffs.iter().any(|&d| d < 0);

    let swaps: Vec<usize> = if borrowing {
        if already_borrows {
            return pair;
        }
        match diffs.iter().position(|&d| d > 0) {
            Some(index) => vec![index],
            None => return pair,
        }
    } else {
        if !already_borrows {
            return pair;
        }
        diffs
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d < 0)
            .map(|(index, _)| index)
            .collect()
    };

    for index in swaps {
        std::mem::swap(&mut minuend[index], &mut subtrahend[index]);
    }

    OperandPair::new(from_digits(&minuend), from_digits(&subtrahend))
}
