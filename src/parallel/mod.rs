//! Parallel chunked sum: partitioning plus fork-join reducers.

pub mod partition;
pub mod reducer;

pub use partition::{chunk_ranges, effective_workers};
pub use reducer::{chunked_sum, parallel_sum, scoped_sum, sequential_sum, ParallelReducer};
