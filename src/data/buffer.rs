//! Owned age buffer with fallible allocation.

use std::ops::Deref;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::defaults::{AGE_CYCLE_SUM, AGE_MODULUS};
use crate::error::{ReduceError, Result};

/// Contiguous, owned sequence of byte-sized ages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgeBuffer {
    ages: Vec<u8>,
}

/// Reserve exactly `len` bytes or report the failure.
pub(crate) fn try_vec<T>(what: &'static str, len: usize) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|e| ReduceError::allocation(what, len, e))?;
    Ok(v)
}

impl AgeBuffer {
    /// `len` zero bytes.
    pub fn try_zeroed(len: usize) -> Result<Self> {
        let mut ages = try_vec("age buffer", len)?;
        ages.resize(len, 0);
        Ok(Self { ages })
    }

    /// `ages[i] = i % 100`.
    pub fn try_cyclic(len: usize) -> Result<Self> {
        let mut ages = try_vec("age buffer", len)?;
        ages.extend((0..len).map(|i| (i % AGE_MODULUS) as u8));
        Ok(Self { ages })
    }

    /// Ages drawn uniformly from `0..100`, reproducible for a given seed.
    pub fn try_random(len: usize, seed: u64) -> Result<Self> {
        let mut ages = try_vec("age buffer", len)?;
        let mut rng = StdRng::seed_from_u64(seed);
        ages.extend((0..len).map(|_| rng.gen_range(0..AGE_MODULUS as u8)));
        Ok(Self { ages })
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.ages
    }

    pub fn len(&self) -> usize {
        self.ages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.ages
    }
}

impl Deref for AgeBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.ages
    }
}

impl AsRef<[u8]> for AgeBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.ages
    }
}

impl From<Vec<u8>> for AgeBuffer {
    fn from(ages: Vec<u8>) -> Self {
        Self { ages }
    }
}

/// Closed-form sum of `i % 100` for `i` in `0..len`.
///
/// `len = 1000` gives 49500; `len = 250` gives 2 * 4950 + 50 * 49 / 2 = 11125.
pub fn cyclic_sum(len: usize) -> u64 {
    let cycles = (len / AGE_MODULUS) as u64;
    let rem = (len % AGE_MODULUS) as u64;
    cycles * AGE_CYCLE_SUM + rem * rem.saturating_sub(1) / 2
}

/// Integer average, 0 for an empty set.
pub fn average_age(sum: u64, len: usize) -> u64 {
    if len == 0 {
        0
    } else {
        sum / len as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::sum_scalar;

    #[test]
    fn cyclic_sum_known_values() {
        assert_eq!(cyclic_sum(0), 0);
        assert_eq!(cyclic_sum(1), 0);
        assert_eq!(cyclic_sum(2), 1);
        assert_eq!(cyclic_sum(100), 4950);
        assert_eq!(cyclic_sum(250), 11125);
        assert_eq!(cyclic_sum(1000), 49500);
    }

    #[test]
    fn cyclic_buffer_matches_closed_form() {
        for len in [0, 1, 99, 100, 101, 250, 1000, 12_345] {
            let buf = AgeBuffer::try_cyclic(len).unwrap();
            assert_eq!(buf.len(), len);
            assert_eq!(sum_scalar(&buf), cyclic_sum(len), "len={}", len);
        }
    }

    #[test]
    fn random_buffer_is_reproducible_and_in_range() {
        let a = AgeBuffer::try_random(5000, 7).unwrap();
        let b = AgeBuffer::try_random(5000, 7).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|&age| (age as usize) < AGE_MODULUS));
    }

    #[test]
    fn zeroed_buffer() {
        let buf = AgeBuffer::try_zeroed(64).unwrap();
        assert_eq!(buf.len(), 64);
        assert_eq!(sum_scalar(&buf), 0);
        assert!(AgeBuffer::try_zeroed(0).unwrap().is_empty());
    }

    #[test]
    fn average_handles_empty() {
        assert_eq!(average_age(0, 0), 0);
        assert_eq!(average_age(49500, 1000), 49);
    }
}
