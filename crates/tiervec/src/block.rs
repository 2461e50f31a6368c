//! Fixed-size element blocks.
//!
//! A [`Block`] is the unit of allocation: [`BLOCK_LEN`] slots, boxed so its
//! address never changes while the spine that points at it is reallocated.
//! Blocks are fully default-constructed when allocated, and every slot that
//! does not hold a live element is kept at `T::default()`.

use std::alloc::Layout;

use crate::error::TieredError;
use crate::layout::BLOCK_LEN;

/// One block of [`BLOCK_LEN`] elements, exclusively owned through its spine slot.
pub type Block<T> = Box<[T; BLOCK_LEN]>;

/// Memory layout of a single block's element storage.
pub fn block_layout<T>() -> Result<Layout, TieredError> {
    Layout::array::<T>(BLOCK_LEN).map_err(|_| TieredError::CapacityOverflow)
}

/// Allocate a block with every slot set to `T::default()`.
///
/// Returns `Err(TieredError::AllocFailed)` instead of aborting when the
/// allocator refuses.
pub fn try_alloc<T: Default>() -> Result<Block<T>, TieredError> {
    let mut slots = try_slots::<T>()?;
    slots.resize_with(BLOCK_LEN, T::default);
    Ok(seal(slots))
}

/// Deep-copy a block slot by slot.
///
/// The copy is built directly in heap storage; `Box<[T; N]>::clone` would
/// stage the whole array on the stack first.
pub fn try_clone<T: Clone>(block: &Block<T>) -> Result<Block<T>, TieredError> {
    let mut slots = try_slots::<T>()?;
    slots.extend_from_slice(&block[..]);
    Ok(seal(slots))
}

/// Empty storage with room for exactly one block.
fn try_slots<T>() -> Result<Vec<T>, TieredError> {
    let layout = block_layout::<T>()?;
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(BLOCK_LEN)
        .map_err(|_| TieredError::AllocFailed { layout })?;
    Ok(slots)
}

/// Convert filled storage into a block without moving the elements.
fn seal<T>(slots: Vec<T>) -> Block<T> {
    match <Block<T>>::try_from(slots.into_boxed_slice()) {
        Ok(block) => block,
        Err(_) => unreachable!("block storage holds exactly BLOCK_LEN slots"),
    }
}

/// Return every slot in `slots` to `T::default()`, dropping the old values.
pub fn reset<T: Default>(slots: &mut [T]) {
    slots.fill_with(T::default);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_is_fully_default_constructed() {
        let block: Block<u32> = try_alloc().unwrap();
        assert_eq!(block.len(), BLOCK_LEN);
        assert!(block.iter().all(|&v| v == 0));
    }

    #[test]
    fn alloc_runs_default_for_every_slot() {
        let block: Block<String> = try_alloc().unwrap();
        assert!(block.iter().all(String::is_empty));
    }

    #[test]
    fn alloc_supports_zero_sized_types() {
        let block: Block<()> = try_alloc().unwrap();
        assert_eq!(block.len(), BLOCK_LEN);
    }

    #[test]
    fn layout_matches_element_size() {
        assert_eq!(block_layout::<u64>().unwrap().size(), BLOCK_LEN * 8);
        assert_eq!(block_layout::<u8>().unwrap().align(), 1);
    }

    #[test]
    fn clone_copies_every_slot_into_fresh_storage() {
        let mut block: Block<String> = try_alloc().unwrap();
        block[0] = "first".to_string();
        block[BLOCK_LEN - 1] = "last".to_string();
        let copy = try_clone(&block).unwrap();
        assert_ne!(copy.as_ptr(), block.as_ptr());
        assert_eq!(copy[0], "first");
        assert_eq!(copy[BLOCK_LEN - 1], "last");
        assert!(copy[1..BLOCK_LEN - 1].iter().all(String::is_empty));
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Wide([u64; 512]);

    impl Default for Wide {
        fn default() -> Self {
            Self([0; 512])
        }
    }

    #[test]
    fn clone_of_wide_elements_stays_off_the_stack() {
        // 4 MiB of element storage; staging it on the stack would overflow.
        let mut block: Block<Wide> = try_alloc().unwrap();
        block[7] = Wide([7; 512]);
        let copy = try_clone(&block).unwrap();
        assert_eq!(copy[7], Wide([7; 512]));
        assert_eq!(copy[8], Wide::default());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut block: Block<i64> = try_alloc().unwrap();
        block[..10].fill(7);
        reset(&mut block[2..5]);
        assert_eq!(&block[..6], &[7, 7, 0, 0, 0, 7]);
    }
}
