//! The range traits: how a type registers its cursors with the framework.

use crate::iter::SliceCursor;
use crate::iter::cursor::{SentinelFor, SizedSentinel};

/// A type with a beginning and an end.
///
/// Implementing this trait is the single registration mechanism for the whole access family:
/// there is no second lookup tier, and inherent methods that happen to share a name never
/// participate. Like [`IntoIterator`], the trait is implemented on *reference* types, so the
/// cursors a range hands out borrow from the referent and outlive the temporary:
///
/// ```
/// # use frt::iter::SliceCursor;
/// # use frt::range::Range;
/// struct Deck {
///     cards: [u8; 4],
/// }
///
/// impl<'a> Range for &'a Deck {
///     type Cursor = SliceCursor<'a, u8>;
///     type Sentinel = SliceCursor<'a, u8>;
///
///     fn begin(&self) -> Self::Cursor {
///         SliceCursor::new(&self.cards)
///     }
///
///     fn end(&self) -> Self::Sentinel {
///         SliceCursor::at_end(&self.cards)
///     }
/// }
/// ```
pub trait Range {
    /// The cursor type [`begin`](Range::begin) hands out.
    type Cursor;

    /// The sentinel bounding the range. Often the cursor type itself, but single-pass sources
    /// use cheaper markers.
    type Sentinel: SentinelFor<Self::Cursor>;

    /// Returns a cursor at the first position.
    fn begin(&self) -> Self::Cursor;

    /// Returns the sentinel one past the last position.
    fn end(&self) -> Self::Sentinel;
}

/// A [`Range`] whose end is itself a cursor, so the range can be traversed from either direction.
pub trait CommonRange: Range {
    /// Returns a cursor one past the last position.
    fn end_cursor(&self) -> Self::Cursor;
}

/// A [`Range`] with a knowable size.
///
/// Implemented for every range whose sentinel is a [`SizedSentinel`] — in particular any
/// random-access range gets its size from a constant-time distance computation without defining
/// anything extra. A range matching neither route has no `size` at all, and asking for one is a
/// compile-time error rather than a fall-through with an undefined answer; ranges that know their
/// size without random access opt in by making their sentinel a [`SizedSentinel`].
pub trait SizedRange: Range {
    /// Returns the number of elements in the range.
    fn size(&self) -> usize;
}

impl<R: Range> SizedRange for R
where
    R::Sentinel: SizedSentinel<R::Cursor>,
{
    fn size(&self) -> usize {
        self.end().distance_from(&self.begin())
    }
}

impl<'a, T> Range for &'a [T] {
    type Cursor = SliceCursor<'a, T>;
    type Sentinel = SliceCursor<'a, T>;

    fn begin(&self) -> Self::Cursor {
        SliceCursor::new(*self)
    }

    fn end(&self) -> Self::Sentinel {
        SliceCursor::at_end(*self)
    }
}

impl<T> CommonRange for &[T] {
    fn end_cursor(&self) -> Self::Cursor {
        SliceCursor::at_end(*self)
    }
}

impl<'a, T, const N: usize> Range for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;
    type Sentinel = SliceCursor<'a, T>;

    fn begin(&self) -> Self::Cursor {
        SliceCursor::new((*self).as_slice())
    }

    fn end(&self) -> Self::Sentinel {
        SliceCursor::at_end((*self).as_slice())
    }
}

impl<T, const N: usize> CommonRange for &[T; N] {
    fn end_cursor(&self) -> Self::Cursor {
        SliceCursor::at_end((*self).as_slice())
    }
}
