//! 256‑bit SIMD engine (AVX2)
//!
//! AVX2 implementation of `SimdEngine` on x86_64: 32 byte lanes per load,
//! folded by `_mm256_sad_epu8` into four u64 lanes.
//!
//! All functions are `unsafe` and annotated with
//! `#[target_feature(enable = "avx2")]`. Callers must ensure AVX2 is available
//! (`KernelKind::sum` checks before dispatching here).

#![cfg(target_arch = "x86_64")]

use super::types::simd_arch;
use super::SimdEngine;

/// 256-bit SIMD engine (AVX2)
#[derive(Clone, Copy)]
pub struct SimdEngine256;

#[allow(unsafe_op_in_unsafe_fn)]
impl SimdEngine for SimdEngine256 {
    const WIDTH_8: usize = 32; // 256 bits ÷ 8 bits

    type Vec8 = simd_arch::__m256i;
    type Acc = simd_arch::__m256i;

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn setzero_acc() -> Self::Acc {
        simd_arch::_mm256_setzero_si256()
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn loadu(p: *const u8) -> Self::Vec8 {
        simd_arch::_mm256_loadu_si256(p as *const simd_arch::__m256i)
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn widen_add(acc: Self::Acc, v: Self::Vec8) -> Self::Acc {
        let sad = simd_arch::_mm256_sad_epu8(v, simd_arch::_mm256_setzero_si256());
        simd_arch::_mm256_add_epi64(acc, sad)
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn add_acc(a: Self::Acc, b: Self::Acc) -> Self::Acc {
        simd_arch::_mm256_add_epi64(a, b)
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn reduce_acc(acc: Self::Acc) -> u64 {
        let lo = simd_arch::_mm256_castsi256_si128(acc);
        let hi = simd_arch::_mm256_extracti128_si256::<1>(acc);
        let folded = simd_arch::_mm_add_epi64(lo, hi);
        let mut lanes = [0u64; 2];
        simd_arch::_mm_storeu_si128(lanes.as_mut_ptr() as *mut simd_arch::__m128i, folded);
        lanes[0].wrapping_add(lanes[1])
    }
}
