//! Decimal digit primitives shared by the counting pass and the orchestrator.
//!
//! Conventions
//! - A **divisor** is a power of ten selecting one digit: 1 = units, 10 = tens, ...
//! - `digit_at(v, d)` is `(v / d) % 10`, always in `0..RADIX`.

/// Number of buckets per pass (decimal digits 0..=9).
pub const RADIX: usize = 10;

/// Largest power of ten representable in `u64` (10^19).
pub const MAX_DIVISOR: u64 = 10_000_000_000_000_000_000;

/// Digit of `value` at the position selected by `divisor`.
#[inline]
pub fn digit_at(value: u64, divisor: u64) -> usize {
    debug_assert!(divisor > 0, "divisor must be positive");
    ((value / divisor) % RADIX as u64) as usize
}

/// Number of decimal digits in `value`. Zero has no significant digits.
#[inline]
pub fn decimal_digits(value: u64) -> usize {
    let mut n = 0usize;
    let mut v = value;
    while v > 0 {
        v /= RADIX as u64;
        n += 1;
    }
    n
}

/// Divisors visited for a sequence whose maximum is `max`: 1, 10, 100, ...
/// while `max / divisor > 0`.
pub fn divisors(max: u64) -> Divisors {
    Divisors {
        max,
        next: Some(1),
    }
}

/// Iterator returned by [`divisors`].
#[derive(Clone, Debug)]
pub struct Divisors {
    max: u64,
    next: Option<u64>,
}

impl Iterator for Divisors {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let d = self.next?;
        if self.max / d == 0 {
            self.next = None;
            return None;
        }
        // Past 10^19 there is no digit left to key on.
        self.next = d.checked_mul(RADIX as u64);
        Some(d)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match self.next {
            Some(d) => decimal_digits(self.max / d),
            None => 0,
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for Divisors {}

impl std::iter::FusedIterator for Divisors {}
