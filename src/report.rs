//! Console rendering of one sort: the original array, a line per pass, the result.

use std::io::{self, Write};

use crate::input::format_sequence;
use crate::radix::{SortReport, radix_sort_observed};

/// Sort `keys`, writing progress to `out`. With `quiet`, pass lines are omitted.
pub fn sort_and_report<W: Write>(
    keys: &mut [u64],
    out: &mut W,
    quiet: bool,
) -> io::Result<SortReport> {
    writeln!(out, "Original array: {}", format_sequence(keys))?;
    if !quiet {
        writeln!(out, "\n--- Radix sort passes ---")?;
    }

    // The observer cannot return an error; keep the first one.
    let mut write_err: Option<io::Error> = None;
    let report = radix_sort_observed(keys, |ev| {
        if quiet || write_err.is_some() {
            return;
        }
        if let Err(e) = writeln!(
            out,
            "  -> after pass with divisor={}: {}",
            ev.divisor,
            format_sequence(ev.snapshot)
        ) {
            write_err = Some(e);
        }
    });
    if let Some(e) = write_err {
        return Err(e);
    }

    writeln!(out, "\n--- Result ---")?;
    writeln!(out, "Sorted array: {}", format_sequence(keys))?;
    Ok(report)
}
