//! The small containers of the crate. Everything here stores its elements inline: there is no
//! allocator in a freestanding environment to lean on, so capacities are part of the type.

pub mod inline_vec;

#[doc(inline)]
pub use inline_vec::InlineVec;
