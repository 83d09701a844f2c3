//! Ranges: the begin/end access family and the classification built on top of it.
//!
//! A range is anything implementing [`Range`]; classification into
//! [`InputRange`](concepts::InputRange) through [`ContiguousRange`](concepts::ContiguousRange)
//! follows from the cursor type alone. The free functions in [`access`] are re-exported here, so
//! call sites read `range::begin(&values)`, `range::size(&values)` and so on.

pub mod access;
pub mod concepts;

mod range;

#[doc(inline)]
pub use access::{begin, data, end, is_empty, rbegin, rend, size};
#[doc(inline)]
pub use range::{CommonRange, Range, SizedRange};
