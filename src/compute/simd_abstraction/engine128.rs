//! 128‑bit SIMD engine (SSE2 on x86_64; NEON on aarch64)
//!
//! Baseline width, present on every supported CPU without runtime checks:
//! SSE2 is part of the x86_64 ABI and NEON is mandatory on aarch64.
//!
//! - x86_64: `_mm_sad_epu8(v, 0)` sums each 8‑byte half into a u64 lane.
//! - aarch64: `vpaddlq_u8 → vpaddlq_u16 → vpaddlq_u32` folds 16 bytes into
//!   two u64 lanes.

#![cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]

use super::types::{simd_arch, Acc128, Vec128};
use super::SimdEngine;

/// 128-bit SIMD engine (SSE2 on x86_64, NEON on aarch64)
#[derive(Clone, Copy)]
pub struct SimdEngine128;

#[cfg(target_arch = "x86_64")]
impl SimdEngine for SimdEngine128 {
    const WIDTH_8: usize = 16; // 128 bits ÷ 8 bits

    type Vec8 = Vec128;
    type Acc = Acc128;

    #[inline]
    unsafe fn setzero_acc() -> Self::Acc {
        unsafe { simd_arch::_mm_setzero_si128() }
    }

    #[inline]
    unsafe fn loadu(p: *const u8) -> Self::Vec8 {
        unsafe { simd_arch::_mm_loadu_si128(p as *const simd_arch::__m128i) }
    }

    #[inline]
    unsafe fn widen_add(acc: Self::Acc, v: Self::Vec8) -> Self::Acc {
        unsafe {
            let sad = simd_arch::_mm_sad_epu8(v, simd_arch::_mm_setzero_si128());
            simd_arch::_mm_add_epi64(acc, sad)
        }
    }

    #[inline]
    unsafe fn add_acc(a: Self::Acc, b: Self::Acc) -> Self::Acc {
        unsafe { simd_arch::_mm_add_epi64(a, b) }
    }

    #[inline]
    unsafe fn reduce_acc(acc: Self::Acc) -> u64 {
        let mut lanes = [0u64; 2];
        unsafe { simd_arch::_mm_storeu_si128(lanes.as_mut_ptr() as *mut simd_arch::__m128i, acc) };
        lanes[0].wrapping_add(lanes[1])
    }
}

#[cfg(target_arch = "aarch64")]
impl SimdEngine for SimdEngine128 {
    const WIDTH_8: usize = 16;

    type Vec8 = Vec128;
    type Acc = Acc128;

    #[inline]
    unsafe fn setzero_acc() -> Self::Acc {
        unsafe { simd_arch::vdupq_n_u64(0) }
    }

    #[inline]
    unsafe fn loadu(p: *const u8) -> Self::Vec8 {
        unsafe { simd_arch::vld1q_u8(p) }
    }

    #[inline]
    unsafe fn widen_add(acc: Self::Acc, v: Self::Vec8) -> Self::Acc {
        unsafe {
            let pairs = simd_arch::vpaddlq_u8(v);
            let quads = simd_arch::vpaddlq_u16(pairs);
            simd_arch::vaddq_u64(acc, simd_arch::vpaddlq_u32(quads))
        }
    }

    #[inline]
    unsafe fn add_acc(a: Self::Acc, b: Self::Acc) -> Self::Acc {
        unsafe { simd_arch::vaddq_u64(a, b) }
    }

    #[inline]
    unsafe fn reduce_acc(acc: Self::Acc) -> u64 {
        unsafe { simd_arch::vaddvq_u64(acc) }
    }
}
