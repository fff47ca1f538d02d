//! SIMD type aliases and architecture bindings
//!
//! Lets the engines refer to `simd_arch` uniformly on x86_64 and aarch64.

#[cfg(target_arch = "x86_64")]
pub use std::arch::x86_64 as simd_arch;

#[cfg(target_arch = "aarch64")]
pub use std::arch::aarch64 as simd_arch;

/// 128‑bit byte vector.
#[cfg(target_arch = "x86_64")]
pub type Vec128 = simd_arch::__m128i;
/// 128‑bit accumulator (two u64 lanes).
#[cfg(target_arch = "x86_64")]
pub type Acc128 = simd_arch::__m128i;

#[cfg(target_arch = "aarch64")]
pub type Vec128 = simd_arch::uint8x16_t;
#[cfg(target_arch = "aarch64")]
pub type Acc128 = simd_arch::uint64x2_t;
