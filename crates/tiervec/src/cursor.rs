//! Index-based random-access cursor.
//!
//! A [`Cursor`] is a `(container, logical index)` pair rather than an element
//! address. Reads go through the container's index decomposition, so a
//! cursor survives spine reallocation; it only goes stale when the position
//! it names is removed.
//!
//! The borrow checker pins the container for the cursor's lifetime, so the
//! "container moved or destroyed" invalidation case cannot arise.
//!
//! [`Cursor`] reads; [`CursorMut`] holds the container exclusively and can
//! write through its position. Two cursors delimit a [`Span`], the range
//! the in-place algorithms operate on.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::ptr;

use crate::span::Span;
use crate::vec::TieredVec;

/// Random-access position within a [`TieredVec`].
///
/// Valid positions are `0..=len`, with `len` the one-past-the-end position
/// returned by [`TieredVec::cursor_end`]. Cursors over the same container
/// compare by index; cursors over different containers are unordered.
pub struct Cursor<'a, T> {
    vec: &'a TieredVec<T>,
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// Logical index this cursor points at.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The element under the cursor, or `None` at or past the end.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.vec.get(self.index)
    }

    /// The element under the cursor, read like `container[index]`.
    ///
    /// # Panics
    ///
    /// Panics at the one-past-the-end position in debug builds.
    #[inline]
    pub fn value(&self) -> &'a T {
        &self.vec[self.index]
    }

    /// Advance by one position.
    ///
    /// # Panics
    ///
    /// Panics when called on the one-past-the-end position.
    #[inline]
    pub fn move_next(&mut self) {
        *self += 1;
    }

    /// Step back by one position.
    ///
    /// # Panics
    ///
    /// Panics when called on the first position.
    #[inline]
    pub fn move_prev(&mut self) {
        *self -= 1;
    }

    /// Cursor `delta` positions away (negative moves toward the front).
    ///
    /// # Panics
    ///
    /// Panics if the result would be before index 0 or past the
    /// one-past-the-end position.
    pub fn offset(&self, delta: isize) -> Self {
        Self {
            vec: self.vec,
            index: step(self.index, delta, self.vec.len()),
        }
    }

    /// The range from `self` up to (excluding) `end`.
    ///
    /// # Panics
    ///
    /// Panics if `end` belongs to another container or precedes `self`.
    pub fn span_to(self, end: Self) -> Span<'a, T> {
        assert!(
            self.same_container(&end),
            "span between cursors over different containers"
        );
        assert!(
            self.index <= end.index,
            "span end {} precedes start {}",
            end.index,
            self.index
        );
        Span::new(self.vec, self.index..end.index)
    }

    /// Signed number of positions from `self` to `other`.
    pub fn distance_to(&self, other: &Self) -> isize {
        other.index as isize - self.index as isize
    }

    /// Whether both cursors refer to the same container.
    pub fn same_container(&self, other: &Self) -> bool {
        ptr::eq(self.vec, other.vec)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> std::fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("len", &self.vec.len())
            .finish()
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_container(other) && self.index == other.index
    }
}

impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_container(other)
            .then(|| self.index.cmp(&other.index))
    }
}

impl<T> Add<isize> for Cursor<'_, T> {
    type Output = Self;

    fn add(self, delta: isize) -> Self {
        self.offset(delta)
    }
}

impl<T> Sub<isize> for Cursor<'_, T> {
    type Output = Self;

    fn sub(self, delta: isize) -> Self {
        match delta.checked_neg() {
            Some(neg) => self.offset(neg),
            None => panic!("cursor offset overflow"),
        }
    }
}

impl<T> AddAssign<isize> for Cursor<'_, T> {
    fn add_assign(&mut self, delta: isize) {
        *self = *self + delta;
    }
}

impl<T> SubAssign<isize> for Cursor<'_, T> {
    fn sub_assign(&mut self, delta: isize) {
        *self = *self - delta;
    }
}

/// Difference of two cursors: `a - b` is the signed distance from `b` to `a`.
impl<'a, T> Sub for Cursor<'a, T> {
    type Output = isize;

    fn sub(self, other: Self) -> isize {
        debug_assert!(
            self.same_container(&other),
            "difference of cursors over different containers"
        );
        other.distance_to(&self)
    }
}

/// Cursor step shared by [`Cursor`] and [`CursorMut`]: `index + delta`,
/// kept within `0..=len`.
fn step(index: usize, delta: isize, len: usize) -> usize {
    match index.checked_add_signed(delta) {
        Some(next) if next <= len => next,
        _ => panic!("cursor offset {delta} from index {index} leaves the container (length {len})"),
    }
}

/// Random-access position with write access to a [`TieredVec`].
///
/// Holds the container exclusively, so only one exists at a time. Moves
/// within `0..=len` like [`Cursor`].
pub struct CursorMut<'a, T> {
    vec: &'a mut TieredVec<T>,
    index: usize,
}

impl<T> CursorMut<'_, T> {
    /// Logical index this cursor points at.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The element under the cursor, or `None` at the end.
    pub fn get(&self) -> Option<&T> {
        self.vec.get(self.index)
    }

    /// The element under the cursor, mutably, or `None` at the end.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.vec.get_mut(self.index)
    }

    /// The element under the cursor, read like `container[index]`.
    pub fn value(&self) -> &T {
        &self.vec[self.index]
    }

    /// The element under the cursor, written like `container[index]`.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.vec[self.index]
    }

    /// Advance by one position.
    ///
    /// # Panics
    ///
    /// Panics when called on the one-past-the-end position.
    pub fn move_next(&mut self) {
        self.seek(1);
    }

    /// Step back by one position.
    ///
    /// # Panics
    ///
    /// Panics when called on the first position.
    pub fn move_prev(&mut self) {
        self.seek(-1);
    }

    /// Move `delta` positions (negative moves toward the front).
    ///
    /// # Panics
    ///
    /// Panics if the result would leave `0..=len`.
    pub fn seek(&mut self, delta: isize) {
        self.index = step(self.index, delta, self.vec.len());
    }

    /// Read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            vec: &*self.vec,
            index: self.index,
        }
    }
}

impl<T> std::fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("len", &self.vec.len())
            .finish()
    }
}

impl<T> TieredVec<T> {
    /// Cursor at logical index `index`. Any index up to `len()` is valid.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn cursor(&self, index: usize) -> Cursor<'_, T> {
        assert!(
            index <= self.len(),
            "cursor index {index} past the end (length {})",
            self.len()
        );
        Cursor { vec: self, index }
    }

    /// Cursor at the first element (equal to [`cursor_end`](Self::cursor_end) when empty).
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        self.cursor(0)
    }

    /// One-past-the-end cursor.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        self.cursor(self.len())
    }

    /// Writing cursor at logical index `index`. Any index up to `len()` is
    /// valid.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn cursor_mut(&mut self, index: usize) -> CursorMut<'_, T> {
        assert!(
            index <= self.len(),
            "cursor index {index} past the end (length {})",
            self.len()
        );
        CursorMut { vec: self, index }
    }
}
