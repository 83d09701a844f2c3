//! Range classification, mirroring the cursor ladder one level up.
//!
//! Each marker holds exactly when the range's cursor type satisfies the matching cursor trait,
//! so the whole hierarchy follows from the [`Range`] impl alone — nothing to implement by hand,
//! nothing that can disagree with the cursor's own classification.

use crate::iter::cursor::{
    BidirectionalCursor, ContiguousCursor, Cursor, ForwardCursor, RandomCursor,
};
use crate::range::Range;

/// A [`Range`] readable in a single pass.
pub trait InputRange: Range {}

impl<R: Range> InputRange for R where R::Cursor: Cursor {}

/// An [`InputRange`] supporting multiple independent passes.
pub trait ForwardRange: Range {}

impl<R: Range> ForwardRange for R where R::Cursor: ForwardCursor {}

/// A [`ForwardRange`] traversable backwards.
pub trait BidirectionalRange: Range {}

impl<R: Range> BidirectionalRange for R where R::Cursor: BidirectionalCursor {}

/// A [`BidirectionalRange`] with constant-time seeks.
pub trait RandomRange: Range {}

impl<R: Range> RandomRange for R where R::Cursor: RandomCursor {}

/// A [`RandomRange`] stored contiguously in memory.
pub trait ContiguousRange: Range {}

impl<R: Range> ContiguousRange for R where R::Cursor: ContiguousCursor {}
