//! The uniform access functions over anything implementing [`Range`].
//!
//! These are thin resolvers: each one names the capability it needs in its bounds and forwards
//! to the range's own impl, so "this type has no size" or "this type can't be iterated
//! backwards" surface as missing-bound diagnostics at the call site, never as a runtime
//! condition. Ranges are passed by value — every [`Range`] implementer is a cheap reference
//! type — so the usual call shape is `range::begin(&collection)`.

use crate::iter::cursor::{BidirectionalCursor, ContiguousCursor, Cursor, SentinelFor};
use crate::iter::{Reversed, make_reverse};
use crate::range::{CommonRange, Range, SizedRange};

/// Returns a cursor at the first position of `range`.
///
/// # Examples
/// ```
/// # use frt::iter::cursor::Cursor;
/// # use frt::range;
/// let values = [5, 6, 7];
/// assert_eq!(*range::begin(&values).value(), 5);
/// ```
pub fn begin<R: Range>(range: R) -> R::Cursor {
    range.begin()
}

/// Returns the sentinel one past the last position of `range`.
pub fn end<R: Range>(range: R) -> R::Sentinel {
    range.end()
}

/// Returns the number of elements in `range`.
///
/// Available whenever the range's sentinel knows its distance from the beginning — for
/// random-access ranges that is automatic and constant-time. Anything else has no size here,
/// by design: a scan-counted "size" belongs to [`distance`](crate::algo::distance), where the
/// linear cost is visible.
pub fn size<R: SizedRange>(range: R) -> usize {
    range.size()
}

/// Returns true if `range` contains no elements.
pub fn is_empty<R: Range>(range: R) -> bool {
    range.end().reached(&range.begin())
}

/// Returns the address of the first element of a contiguous `range`.
///
/// The result is one-past-the-end (still valid, not dereferenceable) when the range is empty.
pub fn data<R: Range>(range: R) -> *const <R::Cursor as Cursor>::Value
where
    R::Cursor: ContiguousCursor,
{
    range.begin().address()
}

/// Returns a cursor at the first position of the reversed `range` — that is, over its last
/// element.
///
/// # Examples
/// ```
/// # use frt::iter::cursor::Cursor;
/// # use frt::range;
/// let values = [5, 6, 7];
/// assert_eq!(*range::rbegin(&values).value(), 7);
/// ```
pub fn rbegin<R: CommonRange>(range: R) -> Reversed<R::Cursor>
where
    R::Cursor: BidirectionalCursor,
{
    make_reverse(range.end_cursor())
}

/// Returns the sentinel one past the last position of the reversed `range` — that is, just
/// before its first element.
pub fn rend<R: CommonRange>(range: R) -> Reversed<R::Cursor>
where
    R::Cursor: BidirectionalCursor,
{
    make_reverse(range.begin())
}
