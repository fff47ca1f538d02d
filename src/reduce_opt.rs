// src/reduce_opt.rs
//
// Reduction options: kernel choice, worker count and tuning thresholds.

use crate::compute::KernelKind;
use crate::defaults;
use crate::error::{ReduceError, Result};

/// Options for a parallel byte-sum reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReduceOpt {
    pub kernel: KernelKind,          // Kernel used for each partition
    pub threads: Option<usize>,      // Worker count; None = all available cores
    pub min_parallel_len: usize,     // Inputs shorter than this stay on the calling thread
    pub chunk_len: usize,            // Chunk length for par_chunks reduction
    pub elements: usize,             // Element count for generated inputs
}

impl Default for ReduceOpt {
    fn default() -> Self {
        ReduceOpt {
            kernel: KernelKind::Auto,
            threads: None,
            min_parallel_len: defaults::MIN_PARALLEL_LEN,
            chunk_len: defaults::CHUNK_LEN,
            elements: defaults::ELEMENTS,
        }
    }
}

impl ReduceOpt {
    /// Defaults overlaid with `FERROUS_BYTESUM_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup` (keyed by env var name).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opt = ReduceOpt::default();

        if let Some(v) = lookup(defaults::ENV_KERNEL) {
            opt.kernel = Self::parse_kernel(&v).map_err(ReduceError::InvalidOption)?;
        }
        if let Some(v) = lookup(defaults::ENV_THREADS) {
            opt.threads = Some(Self::parse_threads(&v).map_err(ReduceError::InvalidOption)?);
        }
        if let Some(v) = lookup(defaults::ENV_ELEMENTS) {
            opt.elements = Self::parse_elements(&v).map_err(ReduceError::InvalidOption)?;
        }

        log::debug!(
            "Reduce options: kernel={}, threads={:?}, elements={}",
            opt.kernel,
            opt.threads,
            opt.elements
        );
        Ok(opt)
    }

    /// Parse a kernel name ("auto", "scalar", "swar", "avx2", ...)
    pub fn parse_kernel(s: &str) -> std::result::Result<KernelKind, String> {
        s.parse::<KernelKind>()
    }

    /// Parse a worker count; zero is accepted and clamped later.
    pub fn parse_threads(s: &str) -> std::result::Result<usize, String> {
        s.trim()
            .parse::<usize>()
            .map_err(|_| format!("Invalid thread count: {}", s))
    }

    /// Parse an element count. Underscores are allowed as digit separators
    /// ("100_000_000").
    pub fn parse_elements(s: &str) -> std::result::Result<usize, String> {
        let digits: String = s.trim().chars().filter(|&c| c != '_').collect();
        digits
            .parse::<usize>()
            .map_err(|_| format!("Invalid element count: {}", s))
    }

    /// Worker count after sanity checks: at least 1, at most
    /// `MAX_THREADS_PER_CPU` times the logical core count.
    pub fn effective_threads(&self) -> usize {
        let cpus = num_cpus::get();
        let mut n = self.threads.unwrap_or(cpus);

        if n < 1 {
            log::warn!("Invalid thread count {}, using 1 thread", n);
            n = 1;
        }

        let max_threads = cpus * defaults::MAX_THREADS_PER_CPU;
        if n > max_threads {
            log::warn!(
                "Thread count {} exceeds recommended maximum {}, capping at {}",
                n,
                max_threads,
                max_threads
            );
            n = max_threads;
        }
        n
    }
}
