//! Batch sorting: many independent sequences, one rayon task per sequence.
//! Passes of a single sequence always run sequentially.

use crate::radix::{SortReport, radix_sort};

use rayon::prelude::*;
use thiserror::Error;

/// Batch sort configuration.
#[derive(Clone, Debug)]
pub struct SortConfig {
    threads: Option<usize>,
    parallel_threshold: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            threads: None,
            parallel_threshold: 2,
        }
    }
}

impl SortConfig {
    /// Fix the number of worker threads (default: rayon's global pool).
    pub fn threads(mut self, n: usize) -> Self {
        self.threads = Some(n.max(1));
        self
    }
    /// Batches with fewer sequences than this are sorted on the calling thread.
    pub fn parallel_threshold(mut self, n: usize) -> Self {
        self.parallel_threshold = n;
        self
    }

    pub(crate) fn thread_count(&self) -> Option<usize> {
        self.threads
    }
}

/// Errors returned by [`sort_batch`].
#[derive(Debug, Error)]
pub enum BatchError {
    /// Dedicated worker pool could not be created.
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Per-sequence reports, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub reports: Vec<SortReport>,
    /// Threads available to the sort (1 when sorted on the calling thread).
    pub workers: usize,
}

impl BatchReport {
    /// Total passes across all sequences.
    pub fn total_passes(&self) -> usize {
        self.reports.iter().map(|r| r.passes).sum()
    }
}

/// Sort every sequence in `batch` ascending.
pub fn sort_batch(batch: &mut [Vec<u64>], cfg: &SortConfig) -> Result<BatchReport, BatchError> {
    if batch.len() < cfg.parallel_threshold {
        let reports = batch.iter_mut().map(|seq| radix_sort(seq)).collect();
        return Ok(BatchReport {
            reports,
            workers: 1,
        });
    }

    let run = |batch: &mut [Vec<u64>]| -> (usize, Vec<SortReport>) {
        let reports = batch
            .par_iter_mut()
            .enumerate()
            .map(|(i, seq)| {
                let report = radix_sort(seq);
                tracing::trace!(sequence = i, passes = report.passes, "batch sequence sorted");
                report
            })
            .collect();
        (rayon::current_num_threads(), reports)
    };

    let (workers, reports) = match cfg.thread_count() {
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
            pool.install(|| run(batch))
        }
        None => run(batch),
    };

    tracing::debug!(sequences = reports.len(), workers, "batch sort done");
    Ok(BatchReport { reports, workers })
}
