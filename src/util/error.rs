//! Strongly typed errors for the fallible operations in this crate.
//!
//! Each failure condition gets its own struct (usually a ZST) implementing
//! [`Error`](core::error::Error), with enums for the methods that can fail in more than one way.
//! Static dispatch throughout, no allocation.

use core::error::Error;
use core::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The requested index lies outside the initialized part of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The number of elements in the collection at the time of the access.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// The collection has no room for another element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// Everything that can go wrong when inserting at an index: the index can be out of range, or the
/// collection can already be full.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum InsertError {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
}
