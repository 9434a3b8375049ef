//! Stable LSD radix sort (base 10) for `u64` sequences, in modern Rust (edition 2024).
//!
//! - Counting-sort pass keyed on one decimal digit, stable by back-to-front scatter
//! - Pass count bounded by the digit count of the maximum key
//! - Optional per-pass observer (`radix_sort_observed`) instead of console output
//! - Parallel sorting of independent sequences (`sort_batch`, rayon)
//! - Validated reading of `count v1 v2 ...` input (`input`)
//! - Console rendering of a sort, pass by pass (`sort_and_report`)
//! - Property tests via `proptest`
//!
//! The sort itself never fails and never prints. All validation lives in
//! [`input`], ahead of the sort.

mod batch;
pub mod digit;
pub mod input;
mod radix;
mod report;

pub use batch::{BatchError, BatchReport, SortConfig, sort_batch};
pub use digit::{RADIX, decimal_digits, digit_at};
pub use input::{InputError, format_sequence, prompt_sequence, read_sequence};
pub use radix::{
    PassEvent, SortReport, counting_sort_pass, counting_sort_pass_with, radix_sort,
    radix_sort_observed,
};
pub use report::sort_and_report;
