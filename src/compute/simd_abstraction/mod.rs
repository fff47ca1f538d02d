//! SIMD abstraction layer
//!
//! This module exposes the small, portable surface the byte-sum kernel needs
//! from each vector ISA. It hides the differences between x86_64
//! (SSE2/AVX2/AVX‑512BW) and aarch64 (NEON) behind the `SimdEngine` trait,
//! while keeping calls into architecture intrinsics zero-cost.
//!
//! ## Engines and widths
//!
//! - `SimdEngine128`: 128‑bit vectors, 16 byte lanes (SSE2 on x86_64, NEON on
//!   aarch64)
//! - `SimdEngine256`: 256‑bit vectors, 32 byte lanes (AVX2 on x86_64)
//! - `SimdEngine512`: 512‑bit vectors, 64 byte lanes (AVX‑512BW on x86_64,
//!   behind the `avx512` feature)
//!
//! ## Accumulation model
//!
//! Bytes are never added in 8‑bit lanes. Each load is immediately widened into
//! 64‑bit accumulator lanes (`sad_epu8` against zero on x86, a `vpaddlq`
//! ladder on NEON), so an accumulator cannot overflow for any realistic input
//! length. The generic kernel in `kernels::simd` drives these primitives.
//!
//! ## Runtime dispatch
//!
//! Detection happens in `simd::detect_optimal_simd_engine()`; the chosen
//! `SimdEngineType` is carried by `KernelKind::Simd` and matched at the call
//! site.
//!
//! ## Safety model
//!
//! All trait functions are `unsafe` because they may require CPU features the
//! host lacks (AVX2, AVX‑512BW) and because `loadu` dereferences a raw pointer
//! that must be valid for `WIDTH_8` bytes. No alignment is required.

/// Byte-reduction primitives for one SIMD width.
pub trait SimdEngine: Sized + Copy {
    /// Number of 8‑bit lanes in the engine’s native vector type.
    const WIDTH_8: usize;

    /// Architecture‑specific vector of 8‑bit lanes.
    type Vec8: Copy + Clone;
    /// Architecture‑specific vector of 64‑bit accumulator lanes.
    type Acc: Copy + Clone;

    /// Accumulator with every lane set to zero.
    unsafe fn setzero_acc() -> Self::Acc;

    /// Load `WIDTH_8` bytes from an unaligned pointer.
    unsafe fn loadu(p: *const u8) -> Self::Vec8;

    /// Widen every byte of `v` and add the partial sums into `acc`.
    unsafe fn widen_add(acc: Self::Acc, v: Self::Vec8) -> Self::Acc;

    /// Lane-wise add of two accumulators.
    unsafe fn add_acc(a: Self::Acc, b: Self::Acc) -> Self::Acc;

    /// Horizontal sum of all accumulator lanes.
    unsafe fn reduce_acc(acc: Self::Acc) -> u64;
}

pub mod engine128;
pub mod engine256;
pub mod engine512;
pub mod simd;
pub mod types;

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
pub use engine128::SimdEngine128;
#[cfg(target_arch = "x86_64")]
pub use engine256::SimdEngine256;
#[cfg(all(target_arch = "x86_64", feature = "avx512"))]
pub use engine512::SimdEngine512;
