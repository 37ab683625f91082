//! Aligned-length splitting for the chunked kernel loops.
//!
//! Every SIMD kernel processes the longest prefix whose length is a multiple
//! of the vector lane count, then hands the remainder to the scalar loop.
//! The split is the only piece of arithmetic shared by every kernel, so it
//! lives here as a pure function.

/// Split of an array length into a SIMD-aligned prefix and a scalar tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedSplit {
    /// Number of leading elements processed in `lane`-sized chunks.
    /// Always a multiple of the lane count.
    pub aligned: usize,
    /// Number of trailing elements processed scalarly.
    /// Always strictly less than the lane count.
    pub tail: usize,
}

/// Computes the aligned/tail split of `len` for a vector of `lanes` lanes.
///
/// Invariants: `aligned % lanes == 0` and `aligned + tail == len`.
/// A lane count of 1 (the scalar fallback backend) puts everything in the
/// aligned region; the chunk loop then degenerates to the scalar loop.
#[inline(always)]
pub fn aligned_split(len: usize, lanes: usize) -> AlignedSplit {
    debug_assert!(lanes > 0, "lane count must be non-zero");

    let tail = len % lanes;
    AlignedSplit {
        aligned: len - tail,
        tail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple() {
        let split = aligned_split(32, 8);
        assert_eq!(split, AlignedSplit { aligned: 32, tail: 0 });
    }

    #[test]
    fn test_with_remainder() {
        let split = aligned_split(37, 8);
        assert_eq!(split, AlignedSplit { aligned: 32, tail: 5 });
    }

    #[test]
    fn test_shorter_than_one_chunk() {
        let split = aligned_split(5, 16);
        assert_eq!(split, AlignedSplit { aligned: 0, tail: 5 });
    }

    #[test]
    fn test_empty() {
        let split = aligned_split(0, 4);
        assert_eq!(split, AlignedSplit { aligned: 0, tail: 0 });
    }

    #[test]
    fn test_invariants_over_boundary_lengths() {
        for lanes in [1usize, 2, 4, 8, 16] {
            for len in 0..5 * lanes {
                let split = aligned_split(len, lanes);
                assert_eq!(split.aligned % lanes, 0);
                assert_eq!(split.aligned + split.tail, len);
                assert!(split.tail < lanes);
            }
        }
    }
}
