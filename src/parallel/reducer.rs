//! Fork-join byte-sum reduction.
//!
//! Each worker reduces one disjoint slice with the selected kernel and
//! returns its partial sum; partials are added after the join. Workers share
//! nothing mutable, so no synchronisation is needed beyond the join itself.

use std::ops::Range;

use rayon::prelude::*;

use crate::compute::KernelKind;
use crate::error::Result;
use crate::reduce_opt::ReduceOpt;

use super::partition::chunk_ranges;

/// Single-threaded reference sum.
pub fn sequential_sum(data: &[u8]) -> u64 {
    KernelKind::Scalar.sum(data)
}

/// Partition into `workers` ranges and reduce them on the current rayon pool.
pub fn parallel_sum(data: &[u8], workers: usize, kernel: KernelKind) -> u64 {
    let kernel = kernel.resolve();
    chunk_ranges(data.len(), workers)
        .into_par_iter()
        .map(|range| kernel.sum(&data[range]))
        .sum()
}

/// Same partitioning as [`parallel_sum`], reduced on scoped OS threads.
///
/// At most one thread per logical core is spawned; each thread takes a
/// contiguous run of the `workers` ranges. If the OS refuses a thread, that
/// run is reduced on the calling thread instead.
pub fn scoped_sum(data: &[u8], workers: usize, kernel: KernelKind) -> u64 {
    let kernel = kernel.resolve();
    let ranges = chunk_ranges(data.len(), workers);
    let threads = ranges.len().min(num_cpus::get());
    if threads <= 1 {
        return sum_ranges(data, &ranges, kernel);
    }

    let ranges = &ranges[..];
    std::thread::scope(|scope| {
        let mut inline_total = 0u64;
        let mut handles = Vec::with_capacity(threads);

        for (i, group) in chunk_ranges(ranges.len(), threads).into_iter().enumerate() {
            let parts = &ranges[group];
            let spawned = std::thread::Builder::new()
                .name(format!("bytesum-scoped-{}", i))
                .spawn_scoped(scope, move || sum_ranges(data, parts, kernel));
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    log::warn!("Could not spawn reducer thread {}: {}; reducing inline", i, e);
                    inline_total += sum_ranges(data, parts, kernel);
                }
            }
        }

        inline_total
            + handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(partial) => partial,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .sum::<u64>()
    })
}

fn sum_ranges(data: &[u8], ranges: &[Range<usize>], kernel: KernelKind) -> u64 {
    ranges.iter().map(|r| kernel.sum(&data[r.clone()])).sum()
}

/// Fixed-size chunks (`chunk_len` bytes each, last one shorter) reduced with
/// rayon's work stealing instead of one range per worker.
pub fn chunked_sum(data: &[u8], chunk_len: usize, kernel: KernelKind) -> u64 {
    let kernel = kernel.resolve();
    data.par_chunks(chunk_len.max(1))
        .map(|chunk| kernel.sum(chunk))
        .sum()
}

/// A reducer owning its own worker pool.
pub struct ParallelReducer {
    pool: rayon::ThreadPool,
    kernel: KernelKind,
    threads: usize,
    min_parallel_len: usize,
    chunk_len: usize,
}

impl ParallelReducer {
    /// Build a pool of `opt.effective_threads()` workers.
    pub fn new(opt: &ReduceOpt) -> Result<Self> {
        let threads = opt.effective_threads();
        let kernel = opt.kernel.resolve();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("bytesum-{}", i))
            .build()?;

        let thread_word = if threads == 1 { "thread" } else { "threads" };
        log::debug!(
            "Reducer ready: {} {}, kernel {} ({})",
            threads,
            thread_word,
            kernel,
            kernel.description()
        );

        Ok(Self {
            pool,
            kernel,
            threads,
            min_parallel_len: opt.min_parallel_len,
            chunk_len: opt.chunk_len,
        })
    }

    /// Sum `data`, forking one task per worker for large inputs.
    pub fn sum(&self, data: &[u8]) -> u64 {
        if self.threads == 1 || data.len() < self.min_parallel_len {
            return self.kernel.sum(data);
        }
        let (threads, kernel) = (self.threads, self.kernel);
        self.pool.install(|| parallel_sum(data, threads, kernel))
    }

    /// Sum `data` in `chunk_len`-byte chunks on this reducer's pool.
    pub fn sum_chunked(&self, data: &[u8]) -> u64 {
        let (chunk_len, kernel) = (self.chunk_len, self.kernel);
        self.pool.install(|| chunked_sum(data, chunk_len, kernel))
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// The resolved kernel (never `Auto`).
    pub fn kernel(&self) -> KernelKind {
        self.kernel
    }
}

impl std::fmt::Debug for ParallelReducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallelReducer")
            .field("kernel", &self.kernel)
            .field("threads", &self.threads)
            .field("min_parallel_len", &self.min_parallel_len)
            .field("chunk_len", &self.chunk_len)
            .finish()
    }
}
