//! LSD radix sort for `u64` keys, base 10.
//! One stable counting pass per decimal digit of the maximum key.

use crate::digit::{RADIX, digit_at, divisors};

/// State of the sequence right after one counting pass.
#[derive(Clone, Copy, Debug)]
pub struct PassEvent<'a> {
    /// 1-based pass ordinal.
    pub pass: usize,
    /// Divisor the pass keyed on (1, 10, 100, ...).
    pub divisor: u64,
    /// Sequence contents after the pass.
    pub snapshot: &'a [u64],
}

/// Summary of one [`radix_sort`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortReport {
    /// Number of counting passes that ran.
    pub passes: usize,
    /// Largest key, `None` for an empty sequence.
    pub max: Option<u64>,
}

/// Stably reorder `keys` by the decimal digit selected by `divisor`.
///
/// Equal-digit keys keep their relative order. Allocates an output buffer of
/// `keys.len()`; use [`counting_sort_pass_with`] to supply one.
///
/// # Panics
/// If `divisor` is zero.
pub fn counting_sort_pass(keys: &mut [u64], divisor: u64) {
    let mut scratch = Vec::new();
    counting_sort_pass_with(keys, divisor, &mut scratch);
}

/// Same as [`counting_sort_pass`], assembling the output in `scratch`.
/// `scratch` is resized to `keys.len()`; its prior contents are ignored.
pub fn counting_sort_pass_with(keys: &mut [u64], divisor: u64, scratch: &mut Vec<u64>) {
    let n = keys.len();
    if n == 0 {
        return;
    }
    scratch.clear();
    scratch.resize(n, 0);

    let mut counts = [0usize; RADIX];

    // Count occurrences
    for &k in keys.iter() {
        counts[digit_at(k, divisor)] += 1;
    }

    // Prefix sums -> one-past-end of each digit's run
    for d in 1..RADIX {
        counts[d] += counts[d - 1];
    }

    // Scatter back to front (stable)
    for &k in keys.iter().rev() {
        let d = digit_at(k, divisor);
        counts[d] -= 1;
        scratch[counts[d]] = k;
    }

    keys.copy_from_slice(scratch);
}

/// Sort `keys` ascending in place.
pub fn radix_sort(keys: &mut [u64]) -> SortReport {
    radix_sort_observed(keys, |_| {})
}

/// Sort `keys` ascending in place, calling `observer` after every pass.
///
/// The number of passes equals the decimal digit count of the maximum key,
/// so an empty or all-zero sequence runs none.
pub fn radix_sort_observed<F>(keys: &mut [u64], mut observer: F) -> SortReport
where
    F: FnMut(PassEvent<'_>),
{
    let Some(max) = keys.iter().copied().max() else {
        return SortReport::default();
    };

    // Scratch buffer shared by all passes.
    let mut scratch = Vec::with_capacity(keys.len());
    let mut passes = 0usize;

    for divisor in divisors(max) {
        counting_sort_pass_with(keys, divisor, &mut scratch);
        passes += 1;
        tracing::trace!(pass = passes, divisor, "counting pass done");
        observer(PassEvent {
            pass: passes,
            divisor,
            snapshot: &keys[..],
        });
    }

    tracing::debug!(len = keys.len(), max, passes, "radix sort done");
    SortReport {
        passes,
        max: Some(max),
    }
}
