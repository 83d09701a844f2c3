//! Generic algorithms over cursors and ranges.
//!
//! The interesting machinery lives below in [`iter`](crate::iter) and [`range`](crate::range);
//! these functions are deliberately thin consumers proving the whole stack load-bearing: any
//! cursor/sentinel pair — slice-backed, synthesized through [`Iter`](crate::iter::Iter),
//! reversed, or adapted from an ecosystem iterator — goes through the same code.

mod ext;
mod search;
mod step;

#[doc(inline)]
pub use ext::RangeExt;
#[doc(inline)]
pub use search::{all_of, any_of, copy, find, find_by_key, find_if, find_if_not, none_of};
#[doc(inline)]
pub use step::{advance, distance, next, prev};
