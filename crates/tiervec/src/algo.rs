//! In-place algorithms over random-access positions.
//!
//! The standard library's sorting and searching live on contiguous slices,
//! which a [`TieredVec`] is not. [`RandomAccess`] captures what searching
//! needs (length and indexed read) and [`RandomAccessMut`] adds the indexed
//! swap that in-place reordering needs. The free functions here work on
//! anything implementing them: whole containers, [`Span`](crate::Span)s and
//! [`SpanMut`](crate::SpanMut)s over part of one, and plain slices. The same
//! functions are exposed as inherent methods on [`TieredVec`].

use std::cmp::Ordering;

use crate::vec::TieredVec;

/// A sequence with O(1) indexed read and swap.
pub trait RandomAccess {
    /// Element type.
    type Item;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`; `index` must be below [`len`](Self::len).
    fn item(&self, index: usize) -> &Self::Item;
}

/// A [`RandomAccess`] sequence whose elements can be exchanged in place.
pub trait RandomAccessMut: RandomAccess {
    /// Exchange the elements at `a` and `b`.
    fn swap_items(&mut self, a: usize, b: usize);
}

impl<T> RandomAccess for TieredVec<T> {
    type Item = T;

    fn len(&self) -> usize {
        TieredVec::len(self)
    }

    #[inline]
    fn item(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> RandomAccessMut for TieredVec<T> {
    #[inline]
    fn swap_items(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

impl<T> RandomAccess for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn item(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> RandomAccessMut for [T] {
    #[inline]
    fn swap_items(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

/// Sort in place with heapsort: O(n log n) worst case, no allocation, not
/// stable.
pub fn heap_sort_by<R, F>(data: &mut R, mut compare: F)
where
    R: RandomAccessMut + ?Sized,
    F: FnMut(&R::Item, &R::Item) -> Ordering,
{
    let len = data.len();
    for root in (0..len / 2).rev() {
        sift_down(data, root, len, &mut compare);
    }
    for end in (1..len).rev() {
        data.swap_items(0, end);
        sift_down(data, 0, end, &mut compare);
    }
}

fn sift_down<R, F>(data: &mut R, mut root: usize, end: usize, compare: &mut F)
where
    R: RandomAccessMut + ?Sized,
    F: FnMut(&R::Item, &R::Item) -> Ordering,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && compare(data.item(child), data.item(child + 1)) == Ordering::Less {
            child += 1;
        }
        if compare(data.item(root), data.item(child)) != Ordering::Less {
            return;
        }
        data.swap_items(root, child);
        root = child;
    }
}

/// Binary search over a sorted sequence.
///
/// `f` reports how each probed element compares to the target. Returns
/// `Ok(index)` of a match or `Err(index)` where the target could be inserted
/// keeping the order.
pub fn binary_search_by<R, F>(data: &R, mut f: F) -> Result<usize, usize>
where
    R: RandomAccess + ?Sized,
    F: FnMut(&R::Item) -> Ordering,
{
    let mut low = 0;
    let mut high = data.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match f(data.item(mid)) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return Ok(mid),
        }
    }
    Err(low)
}

/// Index of the first element for which `pred` is false, assuming the
/// sequence is partitioned (all `true` before all `false`).
pub fn partition_point<R, P>(data: &R, mut pred: P) -> usize
where
    R: RandomAccess + ?Sized,
    P: FnMut(&R::Item) -> bool,
{
    let mut low = 0;
    let mut high = data.len();
    while low < high {
        let mid = low + (high - low) / 2;
        if pred(data.item(mid)) {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

/// Reverse the order of the elements in place.
pub fn reverse<R: RandomAccessMut + ?Sized>(data: &mut R) {
    let len = data.len();
    for i in 0..len / 2 {
        data.swap_items(i, len - 1 - i);
    }
}

impl<T> TieredVec<T> {
    /// Sort in place (heapsort, not stable).
    pub fn sort_unstable(&mut self)
    where
        T: Ord,
    {
        heap_sort_by(self, T::cmp);
    }

    /// Sort in place with a comparator (heapsort, not stable).
    pub fn sort_unstable_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        heap_sort_by(self, compare);
    }

    /// Sort in place by a key (heapsort, not stable).
    pub fn sort_unstable_by_key<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        heap_sort_by(self, |a, b| key(a).cmp(&key(b)));
    }

    /// Binary search for `value` in a sorted container.
    pub fn binary_search(&self, value: &T) -> Result<usize, usize>
    where
        T: Ord,
    {
        binary_search_by(self, |probe| probe.cmp(value))
    }

    /// Binary search with a comparator; see [`binary_search_by`].
    pub fn binary_search_by<F>(&self, f: F) -> Result<usize, usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        binary_search_by(self, f)
    }

    /// Binary search by a key extracted from each element.
    pub fn binary_search_by_key<K, F>(&self, key: &K, mut f: F) -> Result<usize, usize>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        binary_search_by(self, |probe| f(probe).cmp(key))
    }

    /// Index of the partition point; see [`partition_point`].
    pub fn partition_point<P>(&self, pred: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        partition_point(self, pred)
    }

    /// Whether the elements are in non-decreasing order.
    pub fn is_sorted(&self) -> bool
    where
        T: PartialOrd,
    {
        self.iter().is_sorted()
    }

    /// Reverse the order of the elements in place.
    pub fn reverse(&mut self) {
        reverse(self);
    }
}
