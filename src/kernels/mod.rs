//! Byte-sum kernels.
//!
//! Every kernel has the same contract: `fn(&[u8]) -> u64`, exact for any
//! length including zero and a tail shorter than the kernel's stride.
//! Selection happens through `compute::KernelKind`.

pub mod asm;
pub mod scalar;
pub mod simd;
pub mod swar;
pub mod unrolled;

pub use asm::sum_asm;
pub use scalar::{sum_pointer, sum_scalar};
pub use simd::sum_with_engine;
pub use swar::sum_swar;
pub use unrolled::{sum_unrolled16, sum_unrolled8};
