//! Error type shared by buffer allocation, pool construction and option parsing.

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReduceError {
    /// A fallible reservation for an owned buffer failed.
    #[error("failed to allocate {requested} elements for {what}: {source}")]
    Allocation {
        what: &'static str,
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("invalid option: {0}")]
    InvalidOption(String),
}

pub type Result<T> = std::result::Result<T, ReduceError>;

impl ReduceError {
    pub(crate) fn allocation(what: &'static str, requested: usize, source: TryReserveError) -> Self {
        log::error!("Allocation of {} elements for {} failed", requested, what);
        ReduceError::Allocation {
            what,
            requested,
            source,
        }
    }

    /// True for resource exhaustion, the only failure a reduction can report.
    pub fn is_allocation(&self) -> bool {
        matches!(self, ReduceError::Allocation { .. })
    }
}
