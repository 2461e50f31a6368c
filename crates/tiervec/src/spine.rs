//! The spine: an owned, growable array of block pointers.
//!
//! A [`Spine`] holds the [`Block`]s of a container in order, plus an
//! explicit block capacity that follows the sequence 0, 8, 16, 32, …. While
//! the capacity is at most [`INLINE_SPINE`] the pointers live inside the
//! spine value itself (no heap allocation); beyond that they spill to a heap
//! array that is reallocated by doubling.
//!
//! Reallocating the spine moves block *pointers* only. The blocks they point
//! at stay where they are.
//!
//! Inline storage is a by-value array inside the `SmallVec`, so moving or
//! swapping a spine carries the inline pointers along with it. There is no
//! self-reference to re-establish.

use smallvec::SmallVec;

use crate::block::{self, Block};
use crate::error::{infallible, TieredError};
use crate::layout::{spine_capacity_for, INLINE_SPINE};

/// Where the spine's block pointers currently live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpineMode {
    /// Capacity 0: nothing has been allocated yet (also the moved-from state).
    Unallocated,
    /// Capacity 8: pointers are stored inline in the container.
    Inline,
    /// Capacity 16 or more: pointers are stored in a heap array.
    Heap,
}

/// Ordered, exclusively-owned sequence of blocks with explicit capacity.
pub struct Spine<T> {
    blocks: SmallVec<[Block<T>; INLINE_SPINE]>,
    /// Logical block capacity (0, 8, 16, …). Never decreases.
    capacity: usize,
}

impl<T> Spine<T> {
    /// Create an empty, unallocated spine.
    pub fn new() -> Self {
        Self {
            blocks: SmallVec::new(),
            capacity: 0,
        }
    }

    /// Number of blocks currently allocated.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no blocks are allocated.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks the spine can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current storage mode of the block pointers.
    pub fn mode(&self) -> SpineMode {
        if self.capacity == 0 {
            SpineMode::Unallocated
        } else if self.blocks.spilled() {
            SpineMode::Heap
        } else {
            SpineMode::Inline
        }
    }

    /// Make room for at least `blocks` block pointers.
    ///
    /// Grows to the next capacity in the 8, 16, 32, … sequence that fits.
    /// Existing block pointers are moved in order; block contents are not
    /// touched. No-op if the capacity already suffices.
    pub fn try_reserve(&mut self, blocks: usize) -> Result<(), TieredError> {
        if blocks <= self.capacity {
            return Ok(());
        }
        let new_capacity = spine_capacity_for(blocks).ok_or(TieredError::CapacityOverflow)?;
        if new_capacity > INLINE_SPINE {
            self.blocks.try_grow(new_capacity)?;
        }
        tracing::debug!(
            from = self.capacity,
            to = new_capacity,
            heap = new_capacity > INLINE_SPINE,
            "spine grown"
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Append an already-allocated block.
    ///
    /// The caller must have reserved room first; this never reallocates the
    /// spine.
    pub fn push(&mut self, block: Block<T>) {
        debug_assert!(
            self.blocks.len() < self.capacity,
            "spine push without reserved capacity"
        );
        self.blocks.push(block);
    }

    /// Detach and return the trailing block.
    pub fn pop(&mut self) -> Option<Block<T>> {
        self.blocks.pop()
    }

    /// Drop trailing blocks until `len` remain.
    pub fn truncate(&mut self, len: usize) {
        self.blocks.truncate(len);
    }

    /// Shared access to block `index`.
    ///
    /// # Panics
    ///
    /// Panics if block `index` is not allocated.
    #[inline]
    pub fn block(&self, index: usize) -> &Block<T> {
        &self.blocks[index]
    }

    /// Mutable access to block `index`.
    ///
    /// # Panics
    ///
    /// Panics if block `index` is not allocated.
    #[inline]
    pub fn block_mut(&mut self, index: usize) -> &mut Block<T> {
        &mut self.blocks[index]
    }

    /// All allocated blocks in order.
    #[inline]
    pub fn blocks(&self) -> &[Block<T>] {
        &self.blocks
    }

    /// All allocated blocks in order, mutably.
    #[inline]
    pub fn blocks_mut(&mut self) -> &mut [Block<T>] {
        &mut self.blocks
    }
}

impl<T> Default for Spine<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy that preserves the source's storage mode and capacity.
///
/// Every allocated block is copied in full, including the default-valued
/// slots past the live data. Aborts through the allocator error handler if
/// a block copy cannot be allocated, like `Vec::clone`.
impl<T: Clone> Clone for Spine<T> {
    fn clone(&self) -> Self {
        let mut blocks = SmallVec::new();
        if self.capacity > INLINE_SPINE {
            blocks.grow(self.capacity);
        }
        blocks.extend(
            self.blocks
                .iter()
                .map(|b| infallible(block::try_clone(b))),
        );
        Self {
            blocks,
            capacity: self.capacity,
        }
    }
}
