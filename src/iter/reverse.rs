//! Direction-inverting cursor wrapper.

use super::cursor::{BidirectionalCursor, Cursor, ForwardCursor, RandomCursor};

/// Wraps a bidirectional-or-stronger cursor and traverses its sequence backwards.
///
/// Follows the usual off-by-one convention: the wrapper holds the position one past the element
/// it logically points at, so `reversed.value()` reads the element *before*
/// [`base`](Reversed::base). That way the reverse of a `[begin, end)` cursor pair is exactly
/// `[Reversed(end), Reversed(begin))` with no positions lost or invented.
///
/// Reversing a random-access cursor yields a random-access cursor again (seeks and distances are
/// negated). Reversing a contiguous cursor also yields a random-access cursor: reversed storage
/// order isn't contiguous, so the address capability is deliberately not forwarded.
///
/// # Examples
/// ```
/// # use frt::iter::{make_reverse, SliceCursor};
/// # use frt::iter::cursor::Cursor;
/// let values = [1, 2, 3];
/// let reversed = make_reverse(SliceCursor::at_end(&values));
/// assert_eq!(*reversed.value(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C> {
    base: C,
}

/// Wraps `cursor` so that it traverses its sequence backwards. See [`Reversed`].
pub const fn make_reverse<C: BidirectionalCursor>(cursor: C) -> Reversed<C> {
    Reversed { base: cursor }
}

impl<C> Reversed<C> {
    /// Returns a copy of the underlying forward-direction cursor, positioned one past the element
    /// this wrapper logically points at.
    pub fn base(&self) -> C
    where
        C: Clone,
    {
        self.base.clone()
    }

    /// Unwraps into the underlying forward-direction cursor.
    pub fn into_base(self) -> C {
        self.base
    }
}

impl<C: BidirectionalCursor> Cursor for Reversed<C> {
    type Value = C::Value;
    type Reference = C::Reference;

    fn value(&self) -> C::Reference {
        let mut peek = self.base.clone();
        peek.prev();
        peek.value()
    }

    fn next(&mut self) {
        self.base.prev();
    }

    fn equal(&self, other: &Self) -> bool {
        self.base.equal(&other.base)
    }
}

impl<C: BidirectionalCursor> ForwardCursor for Reversed<C> {}

impl<C: BidirectionalCursor> BidirectionalCursor for Reversed<C> {
    fn prev(&mut self) {
        self.base.next();
    }
}

impl<C: RandomCursor> RandomCursor for Reversed<C> {
    fn advance(&mut self, count: isize) {
        self.base.advance(-count);
    }

    fn distance_to(&self, other: &Self) -> isize {
        other.base.distance_to(&self.base)
    }
}
