//! The iterator framework: categories, cursor contracts, interface synthesis and trait deduction.
//!
//! # Layers
//! Bottom to top:
//! - [`tag`]: the closed set of capability categories.
//! - [`ops`]: the primitive operations a deriving type supplies per category.
//! - [`cursor`]: the concept ladder algorithms bound on, plus sentinels.
//! - [`Iter`]: synthesizes a full cursor of a chosen category from the primitives alone.
//! - [`traits`]: the deduced type/category bundle and address extraction.
//! - [`SliceCursor`], [`Reversed`] and [`adapt`]: the built-in cursors.
//!
//! Everything here is compile-time machinery over caller-owned state: no allocation, no hidden
//! globals, nothing to synchronize. Distinct cursors can be used freely from distinct threads;
//! mutating a sequence while a cursor from another thread walks it is a caller bug.

pub mod cursor;
pub mod ops;
pub mod tag;
pub mod traits;

mod interface;
mod reverse;
mod slice;

#[cfg(feature = "adapters")]
pub mod adapt;

mod tests;

#[doc(inline)]
pub use interface::Iter;
#[doc(inline)]
pub use reverse::{Reversed, make_reverse};
#[doc(inline)]
pub use slice::SliceCursor;
#[doc(inline)]
pub use tag::{
    BidirectionalTag, Category, CategoryTag, ContiguousTag, ForwardTag, InputTag, OutputTag,
    RandomTag,
};
