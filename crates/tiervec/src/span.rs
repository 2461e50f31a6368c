//! Views over a contiguous index range of a [`TieredVec`].
//!
//! A [`Span`] or [`SpanMut`] is the range between two cursor positions.
//! It is indexed from zero like a slice and implements
//! [`RandomAccess`]/[`RandomAccessMut`], so the algorithms in
//! [`algo`](crate::algo) can sort or search part of a container while the
//! elements outside the range stay where they are.

use std::cmp::Ordering;
use std::ops::{Bound, Index, IndexMut, Range, RangeBounds};

use crate::algo::{self, RandomAccess, RandomAccessMut};
use crate::cursor::Cursor;
use crate::iter::Iter;
use crate::vec::TieredVec;

/// Resolve `range` against a container of length `len`.
///
/// # Panics
///
/// Panics if the range is reversed or ends past `len`.
fn resolve(range: impl RangeBounds<usize>, len: usize) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };
    assert!(start <= end, "span starts at {start} but ends at {end}");
    assert!(end <= len, "span end {end} out of range for length {len}");
    start..end
}

/// Shared view of the elements `start..end` of a [`TieredVec`].
pub struct Span<'a, T> {
    vec: &'a TieredVec<T>,
    start: usize,
    end: usize,
}

impl<'a, T> Span<'a, T> {
    pub(crate) fn new(vec: &'a TieredVec<T>, range: Range<usize>) -> Self {
        Self {
            vec,
            start: range.start,
            end: range.end,
        }
    }

    /// Number of elements in the span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Container indices covered by the span.
    ///
    /// Feed this to [`TieredVec::span_mut`] to reopen the same range for
    /// writing once the shared borrow has ended.
    pub fn indices(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Element at span position `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        (index < self.len()).then(|| &self.vec[self.start + index])
    }

    /// Iterate over the span front to back.
    pub fn iter(&self) -> Iter<'a, T> {
        Iter::over(self.vec, self.start, self.end)
    }

    /// Cursor at the first position of the span.
    pub fn cursor_front(&self) -> Cursor<'a, T> {
        self.vec.cursor(self.start)
    }

    /// Cursor one past the last position of the span.
    pub fn cursor_end(&self) -> Cursor<'a, T> {
        self.vec.cursor(self.end)
    }

    /// Binary search a sorted span for `value`.
    ///
    /// Positions in the result are relative to the span's start.
    pub fn binary_search(&self, value: &T) -> Result<usize, usize>
    where
        T: Ord,
    {
        algo::binary_search_by(self, |probe| probe.cmp(value))
    }

    /// Binary search with a comparator; see [`algo::binary_search_by`].
    pub fn binary_search_by<F>(&self, f: F) -> Result<usize, usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        algo::binary_search_by(self, f)
    }

    /// Partition point relative to the span's start; see
    /// [`algo::partition_point`].
    pub fn partition_point<P>(&self, pred: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        algo::partition_point(self, pred)
    }

    /// Whether the span is in non-decreasing order.
    pub fn is_sorted(&self) -> bool
    where
        T: PartialOrd,
    {
        self.iter().is_sorted()
    }
}

impl<T> Clone for Span<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Span<'_, T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for Span<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> RandomAccess for Span<'_, T> {
    type Item = T;

    fn len(&self) -> usize {
        Span::len(self)
    }

    #[inline]
    fn item(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Index<usize> for Span<'_, T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is outside the span.
    #[inline]
    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.len(),
            "index {index} out of range for span of length {}",
            self.len()
        );
        &self.vec[self.start + index]
    }
}

/// Exclusive view of the elements `start..end` of a [`TieredVec`].
///
/// Writes and reorderings through the view never touch elements outside
/// the range.
pub struct SpanMut<'a, T> {
    vec: &'a mut TieredVec<T>,
    start: usize,
    end: usize,
}

impl<'a, T> SpanMut<'a, T> {
    /// Number of elements in the span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Container indices covered by the span.
    pub fn indices(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Shared view of the same range.
    pub fn as_span(&self) -> Span<'_, T> {
        Span::new(self.vec, self.indices())
    }

    /// Element at span position `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&T> {
        (index < self.len()).then(|| &self.vec[self.start + index])
    }

    /// Mutable element at span position `index`, or `None` past the end.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            Some(&mut self.vec[self.start + index])
        } else {
            None
        }
    }

    /// Swap the elements at span positions `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either position is outside the span.
    pub fn swap(&mut self, a: usize, b: usize) {
        let len = self.len();
        assert!(
            a < len && b < len,
            "swap indices ({a}, {b}) out of range for span of length {len}"
        );
        self.vec.swap(self.start + a, self.start + b);
    }

    /// Sort the span in place (heapsort, not stable).
    pub fn sort_unstable(&mut self)
    where
        T: Ord,
    {
        algo::heap_sort_by(self, T::cmp);
    }

    /// Sort the span in place with a comparator (heapsort, not stable).
    pub fn sort_unstable_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        algo::heap_sort_by(self, compare);
    }

    /// Sort the span in place by a key (heapsort, not stable).
    pub fn sort_unstable_by_key<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        algo::heap_sort_by(self, |a, b| key(a).cmp(&key(b)));
    }

    /// Reverse the span in place.
    pub fn reverse(&mut self) {
        algo::reverse(self);
    }

    /// Binary search a sorted span for `value`, relative to its start.
    pub fn binary_search(&self, value: &T) -> Result<usize, usize>
    where
        T: Ord,
    {
        algo::binary_search_by(self, |probe| probe.cmp(value))
    }

    /// Binary search with a comparator, relative to the span's start.
    pub fn binary_search_by<F>(&self, f: F) -> Result<usize, usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        algo::binary_search_by(self, f)
    }
}

impl<T> RandomAccess for SpanMut<'_, T> {
    type Item = T;

    fn len(&self) -> usize {
        SpanMut::len(self)
    }

    #[inline]
    fn item(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> RandomAccessMut for SpanMut<'_, T> {
    #[inline]
    fn swap_items(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

impl<T> Index<usize> for SpanMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.len(),
            "index {index} out of range for span of length {}",
            self.len()
        );
        &self.vec[self.start + index]
    }
}

impl<T> IndexMut<usize> for SpanMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.len(),
            "index {index} out of range for span of length {}",
            self.len()
        );
        &mut self.vec[self.start + index]
    }
}

impl<T> TieredVec<T> {
    /// Shared view of the elements in `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed or ends past `len()`.
    pub fn span(&self, range: impl RangeBounds<usize>) -> Span<'_, T> {
        Span::new(self, resolve(range, self.len()))
    }

    /// Exclusive view of the elements in `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed or ends past `len()`.
    pub fn span_mut(&mut self, range: impl RangeBounds<usize>) -> SpanMut<'_, T> {
        let Range { start, end } = resolve(range, self.len());
        SpanMut {
            vec: self,
            start,
            end,
        }
    }
}
