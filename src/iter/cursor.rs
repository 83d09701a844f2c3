//! The cursor concept ladder: the compile-time contracts generic code bounds on.
//!
//! Each trait adds one category's worth of capability over its supertrait, mirroring the
//! [`Category`](crate::iter::Category) order. A type can implement the ladder directly (taking
//! full control of its classification) or implement one of the [`ops`](crate::iter::ops) contracts
//! and let [`Iter`](crate::iter::Iter) synthesize the ladder for it.
//!
//! A type that satisfies none of these traits simply isn't an iterator here: any attempt to pass
//! it to an algorithm fails to compile with the missing bound named in the diagnostic. There is no
//! runtime classification and no runtime misclassification.
//!
//! # Preconditions
//! Cursor pairs handed to [`equal`](Cursor::equal) or
//! [`distance_to`](RandomCursor::distance_to) must come from the same sequence, positions must not
//! be moved outside `[begin, end]`, and [`value`](Cursor::value) must not be called at the end
//! position. None of this is checked in release code; violating it is a caller bug, not a
//! recoverable condition. The same holds for mutating a sequence from another thread while a
//! cursor walks it.

/// A single-pass reading position over some sequence. The Input level of the ladder.
pub trait Cursor {
    /// The element type of the underlying sequence.
    type Value;

    /// The type [`value`](Cursor::value) yields: a shared reference into the sequence, or any
    /// by-value proxy for sequences without materialized elements.
    type Reference;

    /// Reads the element at the current position.
    fn value(&self) -> Self::Reference;

    /// Moves to the next position.
    fn next(&mut self);

    /// Returns true if both cursors sit at the same position of the same sequence.
    fn equal(&self, other: &Self) -> bool;
}

/// A multi-pass [`Cursor`]: clones traverse independently, and equal cursors keep yielding equal
/// elements across passes. Implementing this trait is the opt-in promise of those semantics; the
/// `Clone + Default` bounds are merely the mechanical part.
pub trait ForwardCursor: Cursor + Clone + Default {}

/// A [`ForwardCursor`] that can also step backwards.
pub trait BidirectionalCursor: ForwardCursor {
    /// Moves to the previous position.
    fn prev(&mut self);
}

/// A [`BidirectionalCursor`] with constant-time seeks and distances.
pub trait RandomCursor: BidirectionalCursor {
    /// Seeks `count` positions forwards, or backwards for negative `count`.
    fn advance(&mut self, count: isize);

    /// Returns the number of forward steps from `self` to `other`, negative if `other` is behind
    /// `self`.
    fn distance_to(&self, other: &Self) -> isize;

    /// Reads the element `offset` positions away without moving `self`. The subscript operation.
    fn at(&self, offset: isize) -> Self::Reference {
        let mut probe = self.clone();
        probe.advance(offset);
        probe.value()
    }
}

/// A [`RandomCursor`] whose elements are laid out contiguously in memory.
pub trait ContiguousCursor: RandomCursor {
    /// Returns the address of the current element. Valid (but not dereferenceable) one position
    /// past the end.
    fn address(&self) -> *const Self::Value;
}

/// A write-only position. The Output branch of the ladder, unrelated to [`Cursor`].
pub trait OutputCursor {
    /// The type of value accepted by [`put`](OutputCursor::put).
    type Item;

    /// Writes `item` at the current position.
    fn put(&mut self, item: Self::Item);

    /// Moves to the next position.
    fn next(&mut self);
}

/// An end-of-range detector for cursors of type `C`.
///
/// A sentinel doesn't have to be a cursor itself; single-pass sources often use a unit type (see
/// [`End`](crate::iter::adapt::End)). Every [`Cursor`] is a sentinel for its own type through
/// [`equal`](Cursor::equal).
pub trait SentinelFor<C> {
    /// Returns true if `cursor` has reached this sentinel.
    fn reached(&self, cursor: &C) -> bool;
}

impl<C: Cursor> SentinelFor<C> for C {
    fn reached(&self, cursor: &C) -> bool {
        self.equal(cursor)
    }
}

/// A [`SentinelFor`] that additionally knows how far away it is, making the size of any range it
/// bounds computable without a scan.
pub trait SizedSentinel<C>: SentinelFor<C> {
    /// Returns the number of positions between `cursor` and this sentinel. `cursor` must not be
    /// past the sentinel.
    fn distance_from(&self, cursor: &C) -> usize;
}

impl<C: RandomCursor> SizedSentinel<C> for C {
    fn distance_from(&self, cursor: &C) -> usize {
        cursor.distance_to(self).unsigned_abs()
    }
}
