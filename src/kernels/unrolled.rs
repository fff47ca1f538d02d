//! Manually unrolled kernels.
//!
//! Independent accumulators break the loop-carried dependency on a single
//! register so the adds can issue in parallel.

/// 8-way unroll, four accumulators.
#[inline]
pub fn sum_unrolled8(data: &[u8]) -> u64 {
    let mut chunks = data.chunks_exact(8);
    let (mut a0, mut a1, mut a2, mut a3) = (0u64, 0u64, 0u64, 0u64);

    for c in &mut chunks {
        a0 += u64::from(c[0]) + u64::from(c[1]);
        a1 += u64::from(c[2]) + u64::from(c[3]);
        a2 += u64::from(c[4]) + u64::from(c[5]);
        a3 += u64::from(c[6]) + u64::from(c[7]);
    }

    let tail: u64 = chunks.remainder().iter().map(|&b| u64::from(b)).sum();
    a0 + a1 + a2 + a3 + tail
}

/// 16-way unroll. Each block is summed in u32 (16 * 255 fits easily) and
/// widened once per block.
#[inline]
pub fn sum_unrolled16(data: &[u8]) -> u64 {
    let mut chunks = data.chunks_exact(16);
    let mut lo = 0u64;
    let mut hi = 0u64;

    for c in &mut chunks {
        let (left, right) = c.split_at(8);
        let s0: u32 = left.iter().map(|&b| u32::from(b)).sum();
        let s1: u32 = right.iter().map(|&b| u32::from(b)).sum();
        lo += u64::from(s0);
        hi += u64::from(s1);
    }

    let tail: u64 = chunks.remainder().iter().map(|&b| u64::from(b)).sum();
    lo + hi + tail
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scalar::sum_scalar;

    #[test]
    fn matches_scalar_across_tail_lengths() {
        let data: Vec<u8> = (0..200u32).map(|i| (i * 37 % 256) as u8).collect();
        for len in 0..data.len() {
            let slice = &data[..len];
            assert_eq!(sum_unrolled8(slice), sum_scalar(slice), "unrolled8 len={}", len);
            assert_eq!(sum_unrolled16(slice), sum_scalar(slice), "unrolled16 len={}", len);
        }
    }
}
