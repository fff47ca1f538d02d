//! Wide-register kernel, generic over `SimdEngine`.
//!
//! Four independent accumulators per step (4 × `WIDTH_8` bytes), then single
//! vectors, then a scalar byte tail. Per-ISA entry points carry the
//! `#[target_feature]` so the generic body is compiled for that ISA.

use crate::compute::simd_abstraction::simd::{is_engine_available, SimdEngineType};
use crate::compute::simd_abstraction::SimdEngine;

use super::scalar::sum_scalar;
use super::swar::sum_swar;

/// Reduce `data` with engine `E`.
///
/// # Safety
/// The CPU must support `E`'s instruction set.
#[inline(always)]
pub unsafe fn sum_simd<E: SimdEngine>(data: &[u8]) -> u64 {
    let width = E::WIDTH_8;
    let step = width * 4;
    let len = data.len();
    let ptr = data.as_ptr();

    let mut i = 0usize;
    let mut sum;
    unsafe {
        let mut acc0 = E::setzero_acc();
        let mut acc1 = E::setzero_acc();
        let mut acc2 = E::setzero_acc();
        let mut acc3 = E::setzero_acc();

        while i + step <= len {
            acc0 = E::widen_add(acc0, E::loadu(ptr.add(i)));
            acc1 = E::widen_add(acc1, E::loadu(ptr.add(i + width)));
            acc2 = E::widen_add(acc2, E::loadu(ptr.add(i + 2 * width)));
            acc3 = E::widen_add(acc3, E::loadu(ptr.add(i + 3 * width)));
            i += step;
        }
        while i + width <= len {
            acc0 = E::widen_add(acc0, E::loadu(ptr.add(i)));
            i += width;
        }

        let folded = E::add_acc(E::add_acc(acc0, acc1), E::add_acc(acc2, acc3));
        sum = E::reduce_acc(folded);
    }

    sum += sum_scalar(&data[i..]);
    sum
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
fn sum_engine128(data: &[u8]) -> u64 {
    use crate::compute::simd_abstraction::SimdEngine128;
    // SAFETY: SSE2 and NEON are baseline on their targets
    unsafe { sum_simd::<SimdEngine128>(data) }
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn sum_engine256(data: &[u8]) -> u64 {
    use crate::compute::simd_abstraction::SimdEngine256;
    unsafe { sum_simd::<SimdEngine256>(data) }
}

#[cfg(all(target_arch = "x86_64", feature = "avx512"))]
#[target_feature(enable = "avx512bw")]
unsafe fn sum_engine512(data: &[u8]) -> u64 {
    use crate::compute::simd_abstraction::SimdEngine512;
    unsafe { sum_simd::<SimdEngine512>(data) }
}

/// Sum with the requested engine, or the SWAR kernel when the CPU lacks it.
pub fn sum_with_engine(engine: SimdEngineType, data: &[u8]) -> u64 {
    if !is_engine_available(engine) {
        log::debug!("{:?} unavailable on this CPU, using SWAR kernel", engine);
        return sum_swar(data);
    }

    match engine {
        SimdEngineType::Engine128 => {
            #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
            {
                sum_engine128(data)
            }
            #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
            {
                sum_swar(data)
            }
        }
        #[cfg(target_arch = "x86_64")]
        // SAFETY: availability checked above
        SimdEngineType::Engine256 => unsafe { sum_engine256(data) },
        #[cfg(all(target_arch = "x86_64", feature = "avx512"))]
        SimdEngineType::Engine512 => unsafe { sum_engine512(data) },
    }
}
