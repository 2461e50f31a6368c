//! Iterators over a [`TieredVec`].
//!
//! [`Iter`] and [`IntoIter`] walk logical indices and read through the
//! container's index decomposition, like a [`Cursor`](crate::Cursor).
//! [`IterMut`] walks blocks instead, since handing out disjoint `&mut T`
//! requires splitting the spine's blocks.

use std::iter::FusedIterator;
use std::mem;
use std::slice;

use crate::block::Block;
use crate::layout::{blocks_for, live_in_block};
use crate::vec::TieredVec;

/// Shared iterator over the elements of a [`TieredVec`].
pub struct Iter<'a, T> {
    vec: &'a TieredVec<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(vec: &'a TieredVec<T>) -> Self {
        Self::over(vec, 0, vec.len())
    }

    /// Iterator over `front..back`; the caller guarantees `back <= len`.
    pub(crate) fn over(vec: &'a TieredVec<T>, front: usize, back: usize) -> Self {
        debug_assert!(front <= back && back <= vec.len());
        Self { vec, front, back }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            vec: self.vec,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = &self.vec[self.front];
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<&'a T> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(&self.vec[self.back])
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator over the elements of a [`TieredVec`].
pub struct IterMut<'a, T> {
    /// Blocks not yet entered from either end.
    blocks: slice::IterMut<'a, Block<T>>,
    front: slice::IterMut<'a, T>,
    back: slice::IterMut<'a, T>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(blocks: &'a mut [Block<T>], len: usize) -> Self {
        let used = blocks_for(len);
        match blocks[..used].split_last_mut() {
            None => Self {
                blocks: Default::default(),
                front: Default::default(),
                back: Default::default(),
                remaining: 0,
            },
            Some((last, full)) => Self {
                blocks: full.iter_mut(),
                front: Default::default(),
                back: last[..live_in_block(used - 1, len)].iter_mut(),
                remaining: len,
            },
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        loop {
            if let Some(item) = self.front.next() {
                self.remaining -= 1;
                return Some(item);
            }
            match self.blocks.next() {
                Some(block) => self.front = block.iter_mut(),
                None => {
                    let item = self.back.next()?;
                    self.remaining -= 1;
                    return Some(item);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        loop {
            if let Some(item) = self.back.next_back() {
                self.remaining -= 1;
                return Some(item);
            }
            match self.blocks.next_back() {
                Some(block) => self.back = block.iter_mut(),
                None => {
                    let item = self.front.next_back()?;
                    self.remaining -= 1;
                    return Some(item);
                }
            }
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over the elements of a [`TieredVec`].
///
/// Elements are moved out by resetting their slots to `T::default()`; the
/// blocks are freed when the iterator is dropped.
pub struct IntoIter<T> {
    vec: TieredVec<T>,
    front: usize,
    back: usize,
}

impl<T: Default> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let item = mem::take(&mut self.vec[self.front]);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Default> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(mem::take(&mut self.vec[self.back]))
    }
}

impl<T: Default> ExactSizeIterator for IntoIter<T> {}

impl<T: Default> FusedIterator for IntoIter<T> {}

impl<T> TieredVec<T> {
    /// Iterate over shared references, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Iterate over mutable references, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let len = self.len;
        IterMut::new(self.spine.blocks_mut(), len)
    }
}

impl<'a, T> IntoIterator for &'a TieredVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut TieredVec<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: Default> IntoIterator for TieredVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let back = self.len();
        IntoIter {
            vec: self,
            front: 0,
            back,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::BLOCK_LEN;

    fn filled(len: usize) -> TieredVec<u32> {
        (0..len as u32).collect()
    }

    #[test]
    fn iter_visits_every_element_in_order() {
        let vec = filled(3000);
        assert!(vec.iter().copied().eq(0..3000));
        assert_eq!(vec.iter().len(), 3000);
    }

    #[test]
    fn iter_reverse() {
        let vec = filled(2050);
        assert!(vec.iter().rev().copied().eq((0..2050).rev()));
    }

    #[test]
    fn iter_meets_in_the_middle() {
        let vec = filled(5);
        let mut it = vec.iter();
        assert_eq!(it.next(), Some(&0));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.len(), 3);
        assert_eq!(it.nth(1), Some(&2));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn iter_on_empty() {
        let vec: TieredVec<u32> = TieredVec::new();
        assert_eq!(vec.iter().next(), None);
        let mut vec = vec;
        assert_eq!(vec.iter_mut().next(), None);
    }

    #[test]
    fn iter_ignores_spare_blocks() {
        let mut vec = filled(5000);
        vec.resize(1500);
        assert_eq!(vec.iter().count(), 1500);
        assert_eq!(vec.iter_mut().count(), 1500);
    }

    #[test]
    fn iter_mut_writes_across_blocks() {
        let mut vec = filled(2500);
        for v in vec.iter_mut() {
            *v *= 2;
        }
        assert!(vec.iter().copied().eq((0..2500).map(|v| v * 2)));
    }

    #[test]
    fn iter_mut_from_both_ends() {
        let mut vec = filled(2 * BLOCK_LEN + 3);
        let mut it = vec.iter_mut();
        let mut seen = Vec::new();
        loop {
            match (it.next(), it.next_back()) {
                (Some(a), Some(b)) => {
                    seen.push(*a);
                    seen.push(*b);
                }
                (Some(a), None) => seen.push(*a),
                (None, _) => break,
            }
        }
        seen.sort_unstable();
        assert!(seen.into_iter().eq(0..(2 * BLOCK_LEN as u32 + 3)));
    }

    #[test]
    fn iter_mut_exact_block_multiple() {
        let mut vec = filled(2 * BLOCK_LEN);
        let it = vec.iter_mut();
        assert_eq!(it.len(), 2 * BLOCK_LEN);
        assert_eq!(it.rev().next().copied(), Some(2 * BLOCK_LEN as u32 - 1));
    }

    #[test]
    fn into_iter_moves_values_out() {
        let vec: TieredVec<String> = (0..1500).map(|i| i.to_string()).collect();
        let mut it = vec.into_iter();
        assert_eq!(it.next().as_deref(), Some("0"));
        assert_eq!(it.next_back().as_deref(), Some("1499"));
        assert_eq!(it.len(), 1498);
        assert_eq!(it.last().as_deref(), Some("1498"));
    }

    #[test]
    fn for_loops_over_references() {
        let mut vec = filled(10);
        let mut sum = 0;
        for v in &vec {
            sum += *v;
        }
        assert_eq!(sum, 45);
        for v in &mut vec {
            *v = 1;
        }
        assert_eq!(vec.iter().sum::<u32>(), 10);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn iter_mut_matches_iter(len in 0usize..5000, retained in 0usize..3000) {
                let mut vec = filled(len + retained);
                vec.resize(len);
                let via_mut: Vec<u32> = vec.iter_mut().map(|v| *v).collect();
                let via_ref: Vec<u32> = vec.iter().copied().collect();
                prop_assert_eq!(via_mut.len(), len);
                prop_assert_eq!(via_mut, via_ref);
            }

            #[test]
            fn iter_mut_rev_matches_iter_rev(len in 0usize..5000) {
                let mut vec = filled(len);
                let via_mut: Vec<u32> = vec.iter_mut().rev().map(|v| *v).collect();
                let via_ref: Vec<u32> = vec.iter().rev().copied().collect();
                prop_assert_eq!(via_mut, via_ref);
            }
        }
    }
}
