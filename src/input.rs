//! Validated input for the sort: an element count followed by that many
//! non-negative integers. Nothing here is needed by the sort itself.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned while reading a sequence.
pub enum InputError {
    /// Token is not an integer.
    #[error("invalid input {0:?}: expected an integer")]
    NotAnInteger(String),
    /// Value is below zero.
    #[error("negative value {0}: only non-negative integers can be sorted")]
    Negative(i128),
    /// Element count is zero or below.
    #[error("element count must be greater than zero, got {0}")]
    NonPositiveCount(i128),
    /// Fewer values than the announced count.
    #[error("expected {expected} value(s), found {found}")]
    UnexpectedEof { expected: usize, found: usize },
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn parse_int(token: &str) -> Result<i128, InputError> {
    let t = token.trim();
    t.parse::<i128>()
        .map_err(|_| InputError::NotAnInteger(t.to_string()))
}

/// Parse the element count. Must be a positive integer.
pub fn read_count(token: &str) -> Result<usize, InputError> {
    let n = parse_int(token)?;
    if n <= 0 {
        return Err(InputError::NonPositiveCount(n));
    }
    usize::try_from(n).map_err(|_| InputError::NotAnInteger(token.trim().to_string()))
}

/// Parse one element. Must be a non-negative integer that fits `u64`.
pub fn parse_value(token: &str) -> Result<u64, InputError> {
    let v = parse_int(token)?;
    if v < 0 {
        return Err(InputError::Negative(v));
    }
    u64::try_from(v).map_err(|_| InputError::NotAnInteger(token.trim().to_string()))
}

/// Parse values given directly, e.g. on the command line. At least one required.
pub fn parse_values<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<u64>, InputError> {
    if tokens.is_empty() {
        return Err(InputError::NonPositiveCount(0));
    }
    tokens.iter().map(|t| parse_value(t.as_ref())).collect()
}

/// Upper bound on values reserved ahead of reading them; the count is untrusted.
const PREALLOC_CAP: usize = 1 << 16;

/// Whitespace-separated tokens over any number of lines, read on demand.
pub struct Tokens<R> {
    reader: R,
    line: String,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pending: VecDeque::new(),
        }
    }

    /// Next token, `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>, InputError> {
        loop {
            if let Some(t) = self.pending.pop_front() {
                return Ok(Some(t));
            }
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_string));
        }
    }

    fn next_value(&mut self, expected: usize, found: usize) -> Result<u64, InputError> {
        match self.next_token()? {
            Some(t) => parse_value(&t),
            None => Err(InputError::UnexpectedEof { expected, found }),
        }
    }

    fn next_count(&mut self) -> Result<usize, InputError> {
        match self.next_token()? {
            Some(t) => read_count(&t),
            None => Err(InputError::UnexpectedEof {
                expected: 1,
                found: 0,
            }),
        }
    }
}

/// Read `count v1 v2 ...`, whitespace separated over any number of lines.
/// Lines after the last announced value are not read.
pub fn read_sequence<R: BufRead>(reader: R) -> Result<Vec<u64>, InputError> {
    let mut tokens = Tokens::new(reader);
    let n = tokens.next_count()?;
    let mut values = Vec::with_capacity(n.min(PREALLOC_CAP));
    while values.len() < n {
        values.push(tokens.next_value(n, values.len())?);
    }
    Ok(values)
}

/// Interactive session: prompt for the count, then each element, stopping
/// at the first invalid answer. Answers may share a line.
pub fn prompt_sequence<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
) -> Result<Vec<u64>, InputError> {
    let mut tokens = Tokens::new(input);

    writeln!(out, "--- Radix Sort ---")?;
    write!(out, "How many elements do you want to sort? ")?;
    out.flush()?;
    let n = tokens.next_count()?;

    writeln!(out, "\nEnter the {n} elements (non-negative integers only):")?;
    let mut values = Vec::with_capacity(n.min(PREALLOC_CAP));
    for i in 1..=n {
        write!(out, "Element {i}: ")?;
        out.flush()?;
        values.push(tokens.next_value(n, values.len())?);
    }
    writeln!(out)?;
    Ok(values)
}

/// Render as `[a, b, c]`.
pub fn format_sequence(keys: &[u64]) -> String {
    format!("{keys:?}")
}
