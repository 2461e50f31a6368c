//! The [`TieredVec`] container.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};

use crate::block;
use crate::config::TieredConfig;
use crate::error::{infallible, TieredError};
use crate::layout::{blocks_for, live_in_block, locate, BLOCK_SHIFT};
use crate::spine::{Spine, SpineMode};

/// A growable array stored as a spine of fixed-size blocks.
///
/// Elements live in blocks of [`BLOCK_LEN`](crate::BLOCK_LEN) slots. The spine holding the
/// block pointers may be reallocated as the container grows, but the blocks
/// themselves never move: a reference obtained through raw pointers (see
/// [`block_ptr`](Self::block_ptr)) stays valid until its block is released
/// by the `pop` hysteresis path or the container is dropped.
///
/// # Invariants
///
/// Between public calls:
/// - `len <= block_count * BLOCK_LEN <= block_capacity * BLOCK_LEN`
/// - every slot at or past `len` holds `T::default()`
/// - spine capacity never decreases
///
/// # Element bound
///
/// Anything that allocates or vacates slots requires `T: Default`, since
/// blocks are fully constructed and vacated slots are reset.
pub struct TieredVec<T> {
    pub(crate) spine: Spine<T>,
    pub(crate) len: usize,
    config: TieredConfig,
}

impl<T> TieredVec<T> {
    /// Create an empty container. Allocates nothing.
    pub fn new() -> Self {
        Self::with_config(TieredConfig::default())
    }

    /// Create an empty container with a custom shrink policy.
    pub fn with_config(config: TieredConfig) -> Self {
        Self {
            spine: Spine::new(),
            len: 0,
            config,
        }
    }

    /// Create an empty container whose spine can address `capacity` elements.
    ///
    /// No blocks are allocated; see [`reserve`](Self::reserve).
    pub fn with_capacity(capacity: usize) -> Self {
        let mut vec = Self::new();
        vec.reserve(capacity);
        vec
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the container holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the spine can address: `block_capacity * BLOCK_LEN`.
    ///
    /// This is addressable capacity, not resident memory. After
    /// [`reserve`](Self::reserve) it can exceed the memory actually held by
    /// allocated blocks, which is `block_count * BLOCK_LEN` elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.spine.capacity() << BLOCK_SHIFT
    }

    /// Number of blocks currently allocated.
    #[inline]
    pub fn block_count(&self) -> usize {
        self.spine.len()
    }

    /// Number of block pointers the spine holds without reallocating.
    #[inline]
    pub fn block_capacity(&self) -> usize {
        self.spine.capacity()
    }

    /// Where the spine's block pointers currently live.
    pub fn spine_mode(&self) -> SpineMode {
        self.spine.mode()
    }

    /// The configuration this container was built with.
    pub fn config(&self) -> &TieredConfig {
        &self.config
    }

    /// Address of the first slot of block `block`, or `None` if the block
    /// is not allocated.
    ///
    /// The address is stable until that block is released or the container
    /// is dropped. Growth, `reserve`, spine reallocation and moving the
    /// container value do not change it.
    pub fn block_ptr(&self, block: usize) -> Option<*const T> {
        self.spine.blocks().get(block).map(|b| b.as_ptr())
    }

    /// Ensure [`capacity`](Self::capacity) is at least `capacity` elements.
    ///
    /// Unlike `Vec::reserve`, `capacity` is a total, not an addition. Only
    /// the spine grows; blocks are allocated lazily by later pushes or
    /// resizes. No-op if the capacity already suffices.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts if the allocator fails.
    pub fn reserve(&mut self, capacity: usize) {
        infallible(self.try_reserve(capacity));
    }

    /// Fallible [`reserve`](Self::reserve).
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), TieredError> {
        self.spine.try_reserve(blocks_for(capacity))
    }

    /// Checked shared access.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            Some(&self[index])
        } else {
            None
        }
    }

    /// Checked mutable access.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            Some(&mut self[index])
        } else {
            None
        }
    }

    /// Checked shared access reporting [`TieredError::OutOfRange`].
    pub fn at(&self, index: usize) -> Result<&T, TieredError> {
        let len = self.len;
        self.get(index)
            .ok_or(TieredError::OutOfRange { index, len })
    }

    /// Checked mutable access reporting [`TieredError::OutOfRange`].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, TieredError> {
        let len = self.len;
        self.get_mut(index)
            .ok_or(TieredError::OutOfRange { index, len })
    }

    /// First element, if any.
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).map(|i| &self[i])
    }

    /// Mutable first element, if any.
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Mutable last element, if any.
    pub fn last_mut(&mut self) -> Option<&mut T> {
        let last = self.len.checked_sub(1)?;
        Some(&mut self[last])
    }

    /// Swap the elements at positions `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap(&mut self, a: usize, b: usize) {
        assert!(
            a < self.len && b < self.len,
            "swap indices ({a}, {b}) out of range for length {}",
            self.len
        );
        let (block_a, offset_a) = locate(a);
        let (block_b, offset_b) = locate(b);
        match block_a.cmp(&block_b) {
            Ordering::Equal => self.spine.block_mut(block_a).swap(offset_a, offset_b),
            Ordering::Less => {
                let (head, tail) = self.spine.blocks_mut().split_at_mut(block_b);
                mem::swap(&mut head[block_a][offset_a], &mut tail[0][offset_b]);
            }
            Ordering::Greater => {
                let (head, tail) = self.spine.blocks_mut().split_at_mut(block_a);
                mem::swap(&mut head[block_b][offset_b], &mut tail[0][offset_a]);
            }
        }
    }

    /// Exchange the whole contents of two containers.
    ///
    /// Spines, lengths and configs are exchanged regardless of whether each
    /// side stores its block pointers inline or on the heap. Blocks do not
    /// move, so element addresses follow their elements into the other
    /// container.
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Move the contents out, leaving `self` empty and unallocated.
    ///
    /// The returned container owns every block; `self` keeps only its
    /// config and reports `len() == 0` and `capacity() == 0`.
    pub fn take(&mut self) -> Self {
        let empty = Self::with_config(self.config);
        mem::replace(self, empty)
    }

    /// The live portion of each allocated block, in order.
    ///
    /// Full blocks yield [`BLOCK_LEN`](crate::BLOCK_LEN) elements; the last yields its used
    /// prefix. Spare blocks past the data are skipped.
    pub fn blocks(&self) -> impl ExactSizeIterator<Item = &[T]> + DoubleEndedIterator + '_ {
        let len = self.len;
        self.spine.blocks()[..blocks_for(len)]
            .iter()
            .enumerate()
            .map(move |(i, block)| &block[..live_in_block(i, len)])
    }

    /// Mutable live portion of each allocated block, in order.
    ///
    /// The slices are disjoint, so they can be distributed across threads
    /// (e.g. with [`std::thread::scope`]) for lock-free concurrent writes to
    /// different blocks.
    pub fn blocks_mut(
        &mut self,
    ) -> impl ExactSizeIterator<Item = &mut [T]> + DoubleEndedIterator + '_ {
        let len = self.len;
        self.spine.blocks_mut()[..blocks_for(len)]
            .iter_mut()
            .enumerate()
            .map(move |(i, block)| &mut block[..live_in_block(i, len)])
    }

    /// Copy the elements into a contiguous `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        for block in self.blocks() {
            out.extend_from_slice(block);
        }
        out
    }

    /// Whether `value` is present.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.blocks().any(|block| block.contains(value))
    }
}

impl<T: Default> TieredVec<T> {
    /// Append `value`.
    ///
    /// Allocates a new block when the element lands on offset 0 of a block
    /// that does not exist yet, growing the spine first if it is full.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts if the allocator fails.
    pub fn push(&mut self, value: T) {
        infallible(self.try_push(value));
    }

    /// Fallible [`push`](Self::push).
    ///
    /// On error the container is unchanged and `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<(), TieredError> {
        let (block, offset) = locate(self.len);
        if block == self.spine.len() {
            self.spine.try_reserve(block + 1)?;
            self.spine.push(block::try_alloc()?);
        }
        self.spine.block_mut(block)[offset] = value;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the last element, or `None` if empty.
    ///
    /// Releases the trailing block once more than
    /// [`shrink_slack`](TieredConfig::shrink_slack) spare blocks follow the
    /// data. At most one block is released per call.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        let (block, offset) = locate(last);
        let value = mem::take(&mut self.spine.block_mut(block)[offset]);
        self.len = last;
        self.release_spare_block();
        Some(value)
    }

    fn release_spare_block(&mut self) {
        let needed = blocks_for(self.len);
        if self.spine.len() > needed.saturating_add(self.config.shrink_slack) {
            self.spine.pop();
            tracing::trace!(
                len = self.len,
                blocks = self.spine.len(),
                "released trailing block"
            );
        }
    }

    /// Resize to exactly `new_len` elements.
    ///
    /// Growing default-constructs the new elements, allocating any missing
    /// blocks. Shrinking resets the trimmed slots to `T::default()` but
    /// keeps every block for reuse; only [`pop`](Self::pop) releases blocks.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts if the allocator fails.
    pub fn resize(&mut self, new_len: usize) {
        infallible(self.try_resize(new_len));
    }

    /// Fallible [`resize`](Self::resize).
    ///
    /// On error the length is unchanged and no new block is retained; the
    /// spine may have grown.
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), TieredError> {
        match new_len.cmp(&self.len) {
            Ordering::Less => self.truncate(new_len),
            Ordering::Equal => {}
            Ordering::Greater => {
                let needed = blocks_for(new_len);
                self.spine.try_reserve(needed)?;
                let existing = self.spine.len();
                while self.spine.len() < needed {
                    match block::try_alloc() {
                        Ok(fresh) => self.spine.push(fresh),
                        Err(err) => {
                            self.spine.truncate(existing);
                            return Err(err);
                        }
                    }
                }
                self.len = new_len;
            }
        }
        Ok(())
    }

    /// Shorten to `new_len` elements, dropping the rest in place.
    ///
    /// No-op if `new_len >= len()`. Blocks are kept.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let mut index = new_len;
        while index < self.len {
            let (block, offset) = locate(index);
            let end = live_in_block(block, self.len);
            block::reset(&mut self.spine.block_mut(block)[offset..end]);
            index += end - offset;
        }
        self.len = new_len;
    }

    /// Remove every element, keeping all blocks for reuse.
    pub fn clear(&mut self) {
        self.truncate(0);
    }
}

impl<T> Default for TieredVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy: same spine mode and capacity, every allocated block copied in
/// full.
///
/// `clone_from` keeps the default behaviour of building the copy first and
/// then replacing `self`, so a panicking `T::clone` leaves the destination
/// untouched.
impl<T: Clone> Clone for TieredVec<T> {
    fn clone(&self) -> Self {
        Self {
            spine: self.spine.clone(),
            len: self.len,
            config: self.config,
        }
    }
}

/// Element access without a length check.
///
/// Indices in `len..block_count * BLOCK_LEN` read spare default slots
/// instead of failing; release builds only panic once the index leaves the
/// allocated blocks. Debug builds assert `index < len`. Use
/// [`get`](TieredVec::get) or [`at`](TieredVec::at) for checked access.
impl<T> Index<usize> for TieredVec<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len,
            "index {index} out of range for length {}",
            self.len
        );
        let (block, offset) = locate(index);
        &self.spine.block(block)[offset]
    }
}

impl<T> IndexMut<usize> for TieredVec<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "index {index} out of range for length {}",
            self.len
        );
        let (block, offset) = locate(index);
        &mut self.spine.block_mut(block)[offset]
    }
}

impl<T: fmt::Debug> fmt::Debug for TieredVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for TieredVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for TieredVec<T> {}

impl<T: Hash> Hash for TieredVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Default> Extend<T> for TieredVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Default> FromIterator<T> for TieredVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T: Default, const N: usize> From<[T; N]> for TieredVec<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Default> From<Vec<T>> for TieredVec<T> {
    fn from(items: Vec<T>) -> Self {
        let mut vec = Self::with_capacity(items.len());
        vec.extend(items);
        vec
    }
}
