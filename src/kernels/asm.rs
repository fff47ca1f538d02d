//! Inline assembly kernel.
//!
//! A hand-written byte loop: zero-extending load, 64-bit add, pointer bump.
//! Implemented for x86_64 (`movzx`) and aarch64 (`ldrb` with post-index);
//! other targets use the scalar kernel.

/// Whether this target has a hand-written loop (otherwise scalar is used).
pub const fn has_native_asm() -> bool {
    cfg!(any(target_arch = "x86_64", target_arch = "aarch64"))
}

#[cfg(target_arch = "x86_64")]
#[inline]
pub fn sum_asm(data: &[u8]) -> u64 {
    use std::arch::asm;

    let range = data.as_ptr_range();
    let mut sum: u64 = 0;
    // SAFETY: reads only bytes in [start, end) of the borrowed slice
    unsafe {
        asm!(
            "2:",
            "cmp {ptr}, {end}",
            "jae 3f",
            "movzx {byte:e}, byte ptr [{ptr}]",
            "add {sum}, {byte}",
            "inc {ptr}",
            "jmp 2b",
            "3:",
            ptr = inout(reg) range.start => _,
            end = in(reg) range.end,
            sum = inout(reg) sum,
            byte = out(reg) _,
            options(nostack, readonly),
        );
    }
    sum
}

#[cfg(target_arch = "aarch64")]
#[inline]
pub fn sum_asm(data: &[u8]) -> u64 {
    use std::arch::asm;

    let range = data.as_ptr_range();
    let mut sum: u64 = 0;
    // SAFETY: reads only bytes in [start, end) of the borrowed slice
    unsafe {
        asm!(
            "2:",
            "cmp {ptr}, {end}",
            "b.hs 3f",
            "ldrb {byte:w}, [{ptr}], #1",
            "add {sum}, {sum}, {byte}",
            "b 2b",
            "3:",
            ptr = inout(reg) range.start => _,
            end = in(reg) range.end,
            sum = inout(reg) sum,
            byte = out(reg) _,
            options(nostack, readonly),
        );
    }
    sum
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline]
pub fn sum_asm(data: &[u8]) -> u64 {
    super::scalar::sum_scalar(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scalar::sum_scalar;

    #[test]
    fn empty_and_single() {
        assert_eq!(sum_asm(&[]), 0);
        assert_eq!(sum_asm(&[9]), 9);
    }

    #[test]
    fn matches_scalar() {
        let data: Vec<u8> = (0..4099u32).map(|i| (i % 251) as u8).collect();
        assert_eq!(sum_asm(&data), sum_scalar(&data));
        assert_eq!(sum_asm(&data[3..]), sum_scalar(&data[3..]));
    }
}
