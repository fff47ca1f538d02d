//! Contiguous partitioning of an input into per-worker ranges.

use std::ops::Range;

/// Worker count actually used for `len` elements: never 0, never more
/// workers than elements (empty ranges are pointless).
pub fn effective_workers(len: usize, requested: usize) -> usize {
    requested.min(len).max(1)
}

/// Split `0..len` into `workers` contiguous ranges of `len / workers`
/// elements; the last range absorbs the remainder.
///
/// `workers` is clamped with [`effective_workers`]. Returns no ranges for
/// `len == 0`.
pub fn chunk_ranges(len: usize, workers: usize) -> Vec<Range<usize>> {
    if len == 0 {
        return Vec::new();
    }

    let w = effective_workers(len, workers);
    let chunk = len / w;

    (0..w)
        .map(|i| {
            let start = i * chunk;
            let end = if i + 1 == w { len } else { start + chunk };
            start..end
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exact_cover(ranges: &[Range<usize>], len: usize) {
        let mut next = 0;
        for r in ranges {
            assert_eq!(r.start, next, "gap or overlap at {}", next);
            assert!(r.end > r.start, "empty range {:?}", r);
            next = r.end;
        }
        assert_eq!(next, len);
    }

    #[test]
    fn empty_input_has_no_ranges() {
        assert!(chunk_ranges(0, 8).is_empty());
    }

    #[test]
    fn last_range_absorbs_remainder() {
        let ranges = chunk_ranges(10, 3);
        assert_eq!(ranges, vec![0..3, 3..6, 6..10]);
    }

    #[test]
    fn more_workers_than_elements() {
        let ranges = chunk_ranges(3, 16);
        assert_eq!(ranges, vec![0..1, 1..2, 2..3]);
        assert_eq!(effective_workers(3, 16), 3);
    }

    #[test]
    fn zero_workers_means_one() {
        assert_eq!(chunk_ranges(5, 0), vec![0..5]);
        assert_eq!(effective_workers(5, 0), 1);
    }

    #[test]
    fn exact_cover_for_many_shapes() {
        for len in [1usize, 2, 7, 64, 100, 1000, 1001, 65_537] {
            for workers in 1..=17 {
                let ranges = chunk_ranges(len, workers);
                assert_eq!(ranges.len(), effective_workers(len, workers));
                assert_exact_cover(&ranges, len);
            }
        }
    }
}
