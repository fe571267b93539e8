//! Decimal digit helpers.
//!
//! Digit vectors are ordered least-significant first.

/// Split `n` into decimal digits, least-significant first.
///
/// Zero yields a single `0` digit.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_digits(mut n: u64) -> Vec<u8> {
    let mut digits = Vec::with_capacity(20);
    loop {
        digits.push((n % 10) as u8);
        n /= 10;
        if n == 0 {
            break;
        }
    }
    digits
}

/// Reassemble least-significant-first digits into an integer.
///
/// Leading zeros in the most significant positions are dropped.
#[must_use]
pub fn from_digits(digits: &[u8]) -> u64 {
    digits
        .iter()
        .rev()
        .fold(0, |acc, &d| acc * 10 + u64::from(d))
}

/// Number of decimal digits in `n`.
#[must_use]
pub const fn digit_count(n: u64) -> u32 {
    match n.checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    }
}

/// Digit at `index`, or zero past the end.
#[must_use]
pub fn digit_at(digits: &[u8], index: usize) -> u8 {
    digits.get(index).copied().unwrap_or(0)
}

/// Per-position `minuend - subtrahend` digit differences.
///
/// Covers the longer operand; missing positions count as zero.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn digit_differences(minuend: &[u8], subtrahend: &[u8]) -> Vec<i8> {
    let len = minuend.len().max(subtrahend.len());
    (0..len)
        .map(|i| digit_at(minuend, i) as i8 - digit_at(subtrahend, i) as i8)
        .collect()
}

/// Whether column subtraction of `subtrahend` from `minuend` borrows.
#[must_use]
pub fn requires_borrowing(minuend: u64, subtrahend: u64) -> bool {
    digit_differences(&to_digits(minuend), &to_digits(subtrahend))
        .iter()
        .any(|&diff| diff < 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_digits() {
        assert_eq!(to_digits(0), vec![0]);
        assert_eq!(to_digits(7), vec![7]);
        assert_eq!(to_digits(500), vec![0, 0, 5]);
        assert_eq!(to_digits(9_876_543_210), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_from_digits_drops_leading_zeros() {
        assert_eq!(from_digits(&[2, 9, 5]), 592);
        assert_eq!(from_digits(&[2, 0]), 2);
        assert_eq!(from_digits(&[0, 0, 0]), 0);
        assert_eq!(from_digits(&[]), 0);
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(999_999), 6);
        assert_eq!(digit_count(10_000_000_000), 11);
    }

    #[test]
    fn test_differences_pad_shorter_operand() {
        assert_eq!(digit_differences(&to_digits(500), &to_digits(192)), vec![-2, -9, 4]);
        assert_eq!(digit_differences(&to_digits(512), &to_digits(34)), vec![-2, -2, 5]);
    }

    #[test]
    fn test_requires_borrowing() {
        assert!(requires_borrowing(500, 192));
        assert!(requires_borrowing(52, 9));
        assert!(!requires_borrowing(585, 110));
        assert!(!requires_borrowing(7, 7));
    }
}
