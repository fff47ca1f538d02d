//! SWAR (SIMD within a register) kernel.
//!
//! Eight bytes are loaded as one little-endian `u64` and folded with a
//! mask-and-shift ladder:
//!
//! ```text
//! bytes  -> 4 x u16 pair sums   (mask 0x00FF00FF00FF00FF)
//! pairs  -> 2 x u32 quad sums   (mask 0x0000FFFF0000FFFF)
//! quads  -> 1 x u64 word sum
//! ```
//!
//! No lane can carry into its neighbour: a u16 lane holds at most 2 * 255.

const BYTE_MASK: u64 = 0x00FF_00FF_00FF_00FF;
const PAIR_MASK: u64 = 0x0000_FFFF_0000_FFFF;
const QUAD_MASK: u64 = 0x0000_0000_FFFF_FFFF;

/// Sum of the eight bytes packed in `word`.
#[inline(always)]
pub fn fold_word(word: u64) -> u64 {
    let pairs = (word & BYTE_MASK) + ((word >> 8) & BYTE_MASK);
    let quads = (pairs & PAIR_MASK) + ((pairs >> 16) & PAIR_MASK);
    (quads & QUAD_MASK) + (quads >> 32)
}

#[inline(always)]
fn load_word(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(word)
}

/// Four words (32 bytes) per step, then single words, then the byte tail.
#[inline]
pub fn sum_swar(data: &[u8]) -> u64 {
    let mut sum = 0u64;

    let mut blocks = data.chunks_exact(32);
    for b in &mut blocks {
        sum += fold_word(load_word(&b[0..8]))
            + fold_word(load_word(&b[8..16]))
            + fold_word(load_word(&b[16..24]))
            + fold_word(load_word(&b[24..32]));
    }

    let mut words = blocks.remainder().chunks_exact(8);
    for w in &mut words {
        sum += fold_word(load_word(w));
    }

    sum + words.remainder().iter().map(|&b| u64::from(b)).sum::<u64>()
}
