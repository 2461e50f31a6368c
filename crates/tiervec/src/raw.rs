//! Unchecked element access.
//!
//! The only `unsafe` in the crate. Each function skips the length check and
//! the spine/block bounds checks that [`Index`](std::ops::Index) performs.

#![allow(unsafe_code)]

use crate::layout::locate;
use crate::vec::TieredVec;

impl<T> TieredVec<T> {
    /// Shared access without any bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        let (block, offset) = locate(index);
        // SAFETY: index < len implies block < block_count and offset < BLOCK_LEN.
        unsafe { self.spine.blocks().get_unchecked(block).get_unchecked(offset) }
    }

    /// Mutable access without any bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        let (block, offset) = locate(index);
        // SAFETY: index < len implies block < block_count and offset < BLOCK_LEN.
        unsafe {
            self.spine
                .blocks_mut()
                .get_unchecked_mut(block)
                .get_unchecked_mut(offset)
        }
    }
}
