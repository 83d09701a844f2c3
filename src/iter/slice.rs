//! The built-in contiguous cursor over a slice, used by every slice-backed range in the crate.

use super::cursor::{BidirectionalCursor, ContiguousCursor, Cursor, ForwardCursor, RandomCursor};

/// A cursor over a borrowed slice. Implements the whole ladder through
/// [`ContiguousCursor`].
///
/// The cursor carries the slice it walks, so reads yield references with the slice's lifetime,
/// not the cursor's — a cursor can be dropped and its reads keep living.
///
/// # Examples
/// ```
/// # use frt::iter::SliceCursor;
/// # use frt::iter::cursor::{Cursor, RandomCursor};
/// let values = [10, 20, 30];
/// let cursor = SliceCursor::new(&values);
/// assert_eq!(*cursor.value(), 10);
/// assert_eq!(*cursor.at(2), 30);
/// ```
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Creates a cursor at the start of `slice`.
    pub const fn new(slice: &'a [T]) -> SliceCursor<'a, T> {
        SliceCursor { slice, pos: 0 }
    }

    /// Creates a cursor one past the last element of `slice`, for use as a sentinel.
    pub const fn at_end(slice: &'a [T]) -> SliceCursor<'a, T> {
        SliceCursor {
            slice,
            pos: slice.len(),
        }
    }

    /// Returns the cursor's offset from the start of its slice.
    pub const fn pos(&self) -> usize {
        self.pos
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> Default for SliceCursor<'_, T> {
    fn default() -> Self {
        SliceCursor::new(&[])
    }
}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.slice, other.slice) && self.pos == other.pos
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> core::fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SliceCursor")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Value = T;
    type Reference = &'a T;

    /// Reads the current element.
    ///
    /// # Panics
    /// Panics when the cursor sits at the end of its slice.
    fn value(&self) -> &'a T {
        &self.slice[self.pos]
    }

    fn next(&mut self) {
        self.pos += 1;
    }

    fn equal(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<T> ForwardCursor for SliceCursor<'_, T> {}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
    fn prev(&mut self) {
        self.pos -= 1;
    }
}

impl<T> RandomCursor for SliceCursor<'_, T> {
    fn advance(&mut self, count: isize) {
        self.pos = self.pos.wrapping_add_signed(count);
    }

    fn distance_to(&self, other: &Self) -> isize {
        other.pos as isize - self.pos as isize
    }
}

impl<T> ContiguousCursor for SliceCursor<'_, T> {
    fn address(&self) -> *const T {
        // Indexing with `pos..` stays in bounds for the one-past-the-end position too, where a
        // plain `&slice[pos]` would not.
        self.slice[self.pos..].as_ptr()
    }
}
