//! Scalar reference kernels.
//!
//! `sum_scalar` is the correctness oracle every other kernel is tested
//! against. `sum_pointer` walks the buffer with a raw pointer instead of an
//! iterator; the result is identical.

/// Iterator sum with a u64 accumulator.
#[inline]
pub fn sum_scalar(data: &[u8]) -> u64 {
    data.iter().map(|&b| u64::from(b)).sum()
}

/// Pointer-walk sum: `ptr` advances until it reaches `end`.
#[inline]
pub fn sum_pointer(data: &[u8]) -> u64 {
    let range = data.as_ptr_range();
    let mut ptr = range.start;
    let mut sum = 0u64;
    while ptr < range.end {
        // SAFETY: ptr stays within [start, end) of a live slice
        unsafe {
            sum += u64::from(*ptr);
            ptr = ptr.add(1);
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_zero() {
        assert_eq!(sum_scalar(&[]), 0);
        assert_eq!(sum_pointer(&[]), 0);
    }

    #[test]
    fn single_element() {
        assert_eq!(sum_scalar(&[42]), 42);
        assert_eq!(sum_pointer(&[42]), 42);
    }

    #[test]
    fn max_bytes_do_not_wrap() {
        let data = vec![255u8; 10_001];
        assert_eq!(sum_scalar(&data), 255 * 10_001);
        assert_eq!(sum_pointer(&data), 255 * 10_001);
    }
}
