//! Cursor movement helpers.
//!
//! These are the sequential spellings: they cost one step per position, for any cursor. Random
//! cursors should seek through [`RandomCursor::advance`](crate::iter::cursor::RandomCursor)
//! or the arithmetic operators instead, where the constant-time cost is part of the contract.

use crate::iter::cursor::{BidirectionalCursor, Cursor, ForwardCursor, SentinelFor};

/// Steps `cursor` forwards `count` times.
pub fn advance<C: Cursor>(cursor: &mut C, count: usize) {
    for _ in 0..count {
        cursor.next();
    }
}

/// Counts the steps from `first` until `last` is reached.
pub fn distance<C, S>(mut first: C, last: &S) -> usize
where
    C: Cursor,
    S: SentinelFor<C>,
{
    let mut count = 0;
    while !last.reached(&first) {
        first.next();
        count += 1;
    }
    count
}

/// Returns the position one step after `cursor`.
pub fn next<C: ForwardCursor>(mut cursor: C) -> C {
    cursor.next();
    cursor
}

/// Returns the position one step before `cursor`.
pub fn prev<C: BidirectionalCursor>(mut cursor: C) -> C {
    cursor.prev();
    cursor
}
