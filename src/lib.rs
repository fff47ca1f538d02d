// Enable unstable features for AVX-512 support (requires nightly Rust)
#![cfg_attr(feature = "avx512", feature(stdarch_x86_avx512))]
#![cfg_attr(feature = "avx512", feature(avx512_target_feature))]

//! Byte-sum reduction: sum a sequence of `u8` ages into a `u64` with a
//! swappable kernel, optionally across a fork-join worker pool.
//!
//! ```
//! use ferrous_bytesum::{parallel_sum, AgeBuffer, KernelKind};
//!
//! let ages = AgeBuffer::try_cyclic(1000)?;
//! assert_eq!(parallel_sum(&ages, 4, KernelKind::Auto), 49_500);
//! # Ok::<(), ferrous_bytesum::ReduceError>(())
//! ```

pub mod compute; // Kernel selection, SIMD engines and runtime detection
pub mod data; // Owned age buffers, generators, AoS/SoA layouts
pub mod defaults;
pub mod error;
pub mod kernels; // Scalar, unrolled, SWAR, asm and SIMD kernels
pub mod parallel; // Partitioning and fork-join reducers
pub mod reduce_opt;

pub use compute::simd_abstraction::simd::{detect_optimal_simd_engine, SimdEngineType};
pub use compute::KernelKind;
pub use data::{cyclic_sum, AgeBuffer, User, UserSoA};
pub use error::{ReduceError, Result};
pub use parallel::{chunk_ranges, parallel_sum, scoped_sum, sequential_sum, ParallelReducer};
pub use reduce_opt::ReduceOpt;
