//! Fixed geometry and index decomposition.
//!
//! Block length and inline spine length are constants of the design: a
//! power-of-two block length turns index decomposition into one shift and
//! one mask.

/// Number of low index bits that address a slot within a block.
pub const BLOCK_SHIFT: u32 = 10;

/// Number of elements held by every block.
pub const BLOCK_LEN: usize = 1 << BLOCK_SHIFT;

/// Mask selecting the intra-block offset of a logical index.
pub const BLOCK_MASK: usize = BLOCK_LEN - 1;

/// Number of block pointers the spine stores without a heap allocation.
pub const INLINE_SPINE: usize = 8;

/// Largest spine capacity whose element capacity still fits in `usize`.
pub const MAX_BLOCKS: usize = usize::MAX >> BLOCK_SHIFT;

/// Split a logical index into `(block, offset)`.
#[inline]
pub const fn locate(index: usize) -> (usize, usize) {
    (index >> BLOCK_SHIFT, index & BLOCK_MASK)
}

/// Number of blocks needed to hold `len` elements: `ceil(len / BLOCK_LEN)`.
#[inline]
pub const fn blocks_for(len: usize) -> usize {
    (len >> BLOCK_SHIFT) + (len & BLOCK_MASK != 0) as usize
}

/// Number of live elements in block `block` of a container of length `len`.
///
/// Full blocks report [`BLOCK_LEN`]; the final partial block reports its
/// used prefix; blocks past the data report 0.
#[inline]
pub const fn live_in_block(block: usize, len: usize) -> usize {
    let start = block << BLOCK_SHIFT;
    if len <= start {
        0
    } else if len - start >= BLOCK_LEN {
        BLOCK_LEN
    } else {
        len - start
    }
}

/// Spine capacity that results from growing to hold `blocks` blocks.
///
/// Follows the sequence 0, 8, 16, 32, …: the first growth lands on the
/// inline length and every later one doubles. Returns `None` when the
/// result would exceed [`MAX_BLOCKS`].
pub fn spine_capacity_for(blocks: usize) -> Option<usize> {
    if blocks == 0 {
        return Some(0);
    }
    let capacity = blocks.checked_next_power_of_two()?.max(INLINE_SPINE);
    (capacity <= MAX_BLOCKS).then_some(capacity)
}
