//! Workload helpers shared by the tiervec benchmarks.
//!
//! - [`SCALES`]: element counts covering the inline spine, the first heap
//!   spill, and a large heap spine
//! - [`shuffled_indices`]: deterministic random-read order via seed
//! - [`filled_tiered`] / [`filled_vec`]: pre-populated containers

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tiervec::TieredVec;

/// Element counts benchmarked by every group.
///
/// 4K stays within the inline spine, 10K spills to the heap, 1M exercises
/// repeated spine doubling.
pub const SCALES: [usize; 3] = [4_096, 10_000, 1_000_000];

/// Container holding `0..len`.
pub fn filled_tiered(len: usize) -> TieredVec<i32> {
    (0..len as i32).collect()
}

/// Flat `Vec` holding `0..len`, the baseline for comparisons.
pub fn filled_vec(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

/// Generate a deterministic permutation of `0..n`.
///
/// Fisher-Yates driven by a 64-bit LCG seeded from `seed`, so runs are
/// comparable across machines without pulling in an RNG.
pub fn shuffled_indices(n: usize, seed: u64) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut state = seed;
    for i in (1..n).rev() {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let j = ((state >> 33) % (i as u64 + 1)) as usize;
        indices.swap(i, j);
    }
    indices
}
