//! 512‑bit SIMD engine (AVX‑512BW on x86_64)
//!
//! The widest backend: 64 byte lanes per load, folded by `_mm512_sad_epu8`
//! into eight u64 lanes.
//!
//! Notes
//! - Requires the `avx512` Cargo feature and CPU support for AVX‑512BW.
//! - All functions are `unsafe` and annotated with
//!   `#[target_feature(enable = "avx512bw")]`.

#![cfg(all(target_arch = "x86_64", feature = "avx512"))]

use super::types::simd_arch;
use super::SimdEngine;

/// AVX‑512BW SIMD backend implementing `SimdEngine` for 512‑bit vectors.
#[derive(Clone, Copy)]
pub struct SimdEngine512;

#[allow(unsafe_op_in_unsafe_fn)]
impl SimdEngine for SimdEngine512 {
    const WIDTH_8: usize = 64; // 512 bits ÷ 8 bits

    type Vec8 = simd_arch::__m512i;
    type Acc = simd_arch::__m512i;

    #[inline]
    #[target_feature(enable = "avx512bw")]
    unsafe fn setzero_acc() -> Self::Acc {
        simd_arch::_mm512_setzero_si512()
    }

    #[inline]
    #[target_feature(enable = "avx512bw")]
    unsafe fn loadu(p: *const u8) -> Self::Vec8 {
        simd_arch::_mm512_loadu_si512(p as *const _)
    }

    #[inline]
    #[target_feature(enable = "avx512bw")]
    unsafe fn widen_add(acc: Self::Acc, v: Self::Vec8) -> Self::Acc {
        let sad = simd_arch::_mm512_sad_epu8(v, simd_arch::_mm512_setzero_si512());
        simd_arch::_mm512_add_epi64(acc, sad)
    }

    #[inline]
    #[target_feature(enable = "avx512bw")]
    unsafe fn add_acc(a: Self::Acc, b: Self::Acc) -> Self::Acc {
        simd_arch::_mm512_add_epi64(a, b)
    }

    #[inline]
    #[target_feature(enable = "avx512bw")]
    unsafe fn reduce_acc(acc: Self::Acc) -> u64 {
        simd_arch::_mm512_reduce_add_epi64(acc) as u64
    }
}
