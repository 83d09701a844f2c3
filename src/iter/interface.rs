//! Interface synthesis: [`Iter`] turns a type supplying one category's primitive operations into
//! a full cursor of that category.
//!
//! A deriving type picks its [`CategoryTag`], implements the matching
//! [`ops`](crate::iter::ops) contract, and wraps itself:
//!
//! ```
//! # use frt::iter::{Iter, RandomTag, ops::RandomOps};
//! #[derive(Debug, Clone, Default)]
//! struct Evens {
//!     pos: isize,
//! }
//!
//! impl RandomOps for Evens {
//!     type Value = isize;
//!     type Reference = isize;
//!
//!     fn value(&self) -> isize {
//!         self.pos * 2
//!     }
//!
//!     fn advance(&mut self, count: isize) {
//!         self.pos += count;
//!     }
//!
//!     fn distance_to(&self, other: &Self) -> isize {
//!         other.pos - self.pos
//!     }
//! }
//!
//! type EvensIter = Iter<Evens, RandomTag>;
//!
//! let it = EvensIter::default();
//! assert_eq!((it + 3).get(), 6);
//! ```
//!
//! The wrapper implements the [`cursor`](crate::iter::cursor) ladder once per tag, in separate
//! impl rows, so each category's operator set is derived from exactly the primitives its ops
//! contract requires — sequential stepping comes from `advance(±1)` for random-access deriving
//! types, equality comes from `distance_to` unless the deriving type overrides
//! [`equal`](crate::iter::ops::RandomOps::equal) with something cheaper, and the element address
//! of a contiguous cursor never goes through `value` at all.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use super::cursor::{
    BidirectionalCursor, ContiguousCursor, Cursor, ForwardCursor, OutputCursor, RandomCursor,
};
use super::ops::{BidirectionalOps, ContiguousOps, ForwardOps, InputOps, OutputOps, RandomOps};
use super::tag::{
    BidirectionalTag, CategoryTag, ContiguousTag, ForwardTag, InputTag, OutputTag, RandomTag,
};

/// Synthesizes the full cursor surface for a deriving type `D` at the capability level named by
/// `Tag`.
///
/// Claiming a tag whose [`ops`](crate::iter::ops) contract `D` doesn't satisfy is rejected where
/// the cursor is first used: none of the ladder impls apply, and the compiler reports the missing
/// primitive operations.
pub struct Iter<D, Tag> {
    derived: D,
    _tag: PhantomData<Tag>,
}

impl<D, Tag> Iter<D, Tag> {
    /// Wraps a deriving value.
    pub const fn new(derived: D) -> Iter<D, Tag> {
        Iter {
            derived,
            _tag: PhantomData,
        }
    }

    /// Returns the deriving value.
    pub fn into_inner(self) -> D {
        self.derived
    }

    /// Borrows the deriving value.
    pub const fn inner(&self) -> &D {
        &self.derived
    }
}

impl<D: Clone, Tag> Clone for Iter<D, Tag> {
    fn clone(&self) -> Self {
        Iter::new(self.derived.clone())
    }
}

impl<D: Copy, Tag> Copy for Iter<D, Tag> {}

impl<D: Default, Tag> Default for Iter<D, Tag> {
    fn default() -> Self {
        Iter::new(D::default())
    }
}

impl<D: Debug, Tag: CategoryTag> Debug for Iter<D, Tag> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("derived", &self.derived)
            .field("category", &Tag::CATEGORY)
            .finish()
    }
}

// Synthesized method surface, available whenever the matching ladder row below applies.

impl<D, Tag> Iter<D, Tag>
where
    Iter<D, Tag>: Cursor,
{
    /// Reads the element at the current position. The dereference operation.
    pub fn get(&self) -> <Self as Cursor>::Reference {
        self.value()
    }

    /// Moves to the next position. The prefix increment.
    pub fn step(&mut self) {
        self.next();
    }

    /// Moves to the next position and returns the pre-step state. The postfix increment.
    ///
    /// Only cloneable cursors get real postfix semantics; for a non-cloneable deriving type the
    /// void-returning [`step`](Iter::step) is the whole story, which loses nothing — without a
    /// copy there is no old state to compare against anyway.
    pub fn post_step(&mut self) -> Self
    where
        Self: Clone,
    {
        let old = self.clone();
        self.next();
        old
    }
}

impl<D, Tag> Iter<D, Tag>
where
    Iter<D, Tag>: BidirectionalCursor,
{
    /// Moves to the previous position. The prefix decrement.
    pub fn step_back(&mut self) {
        self.prev();
    }

    /// Moves to the previous position and returns the pre-step state. The postfix decrement.
    pub fn post_step_back(&mut self) -> Self {
        let old = self.clone();
        self.prev();
        old
    }
}

impl<D: ContiguousOps> Iter<D, ContiguousTag> {
    /// Returns the address of the current element. The member-access operation, synthesized from
    /// [`ContiguousOps::address`] alone so that purely pointer-backed deriving types never need a
    /// reading primitive to support it.
    pub fn as_ptr(&self) -> *const <D as RandomOps>::Value {
        self.derived.address()
    }
}

// Ladder rows: one block of impls per tag, each synthesizing exactly the surface its category
// promises. The rows are disjoint by construction (the tag is part of the wrapper's type), which
// is what makes "check the stronger contract first" a non-issue here: there is no fallback path
// to misclassify a contiguous deriving type as merely random-access.

impl<D: InputOps> Cursor for Iter<D, InputTag> {
    type Value = <D as InputOps>::Value;
    type Reference = <D as InputOps>::Reference;

    fn value(&self) -> Self::Reference {
        self.derived.value()
    }

    fn next(&mut self) {
        self.derived.next();
    }

    fn equal(&self, other: &Self) -> bool {
        self.derived.equal(&other.derived)
    }
}

impl<D: ForwardOps> Cursor for Iter<D, ForwardTag> {
    type Value = <D as InputOps>::Value;
    type Reference = <D as InputOps>::Reference;

    fn value(&self) -> Self::Reference {
        self.derived.value()
    }

    fn next(&mut self) {
        self.derived.next();
    }

    fn equal(&self, other: &Self) -> bool {
        self.derived.equal(&other.derived)
    }
}

impl<D: ForwardOps> ForwardCursor for Iter<D, ForwardTag> {}

impl<D: BidirectionalOps> Cursor for Iter<D, BidirectionalTag> {
    type Value = <D as InputOps>::Value;
    type Reference = <D as InputOps>::Reference;

    fn value(&self) -> Self::Reference {
        self.derived.value()
    }

    fn next(&mut self) {
        self.derived.next();
    }

    fn equal(&self, other: &Self) -> bool {
        self.derived.equal(&other.derived)
    }
}

impl<D: BidirectionalOps> ForwardCursor for Iter<D, BidirectionalTag> {}

impl<D: BidirectionalOps> BidirectionalCursor for Iter<D, BidirectionalTag> {
    fn prev(&mut self) {
        self.derived.prev();
    }
}

impl<D: RandomOps> Cursor for Iter<D, RandomTag> {
    type Value = <D as RandomOps>::Value;
    type Reference = <D as RandomOps>::Reference;

    fn value(&self) -> Self::Reference {
        self.derived.value()
    }

    fn next(&mut self) {
        self.derived.advance(1);
    }

    fn equal(&self, other: &Self) -> bool {
        self.derived.equal(&other.derived)
    }
}

impl<D: RandomOps> ForwardCursor for Iter<D, RandomTag> {}

impl<D: RandomOps> BidirectionalCursor for Iter<D, RandomTag> {
    fn prev(&mut self) {
        self.derived.advance(-1);
    }
}

impl<D: RandomOps> RandomCursor for Iter<D, RandomTag> {
    fn advance(&mut self, count: isize) {
        self.derived.advance(count);
    }

    fn distance_to(&self, other: &Self) -> isize {
        self.derived.distance_to(&other.derived)
    }
}

impl<D: ContiguousOps> Cursor for Iter<D, ContiguousTag> {
    type Value = <D as RandomOps>::Value;
    type Reference = <D as RandomOps>::Reference;

    fn value(&self) -> Self::Reference {
        self.derived.value()
    }

    fn next(&mut self) {
        self.derived.advance(1);
    }

    fn equal(&self, other: &Self) -> bool {
        self.derived.equal(&other.derived)
    }
}

impl<D: ContiguousOps> ForwardCursor for Iter<D, ContiguousTag> {}

impl<D: ContiguousOps> BidirectionalCursor for Iter<D, ContiguousTag> {
    fn prev(&mut self) {
        self.derived.advance(-1);
    }
}

impl<D: ContiguousOps> RandomCursor for Iter<D, ContiguousTag> {
    fn advance(&mut self, count: isize) {
        self.derived.advance(count);
    }

    fn distance_to(&self, other: &Self) -> isize {
        self.derived.distance_to(&other.derived)
    }
}

impl<D: ContiguousOps> ContiguousCursor for Iter<D, ContiguousTag> {
    fn address(&self) -> *const Self::Value {
        self.derived.address()
    }
}

impl<D: OutputOps> OutputCursor for Iter<D, OutputTag> {
    type Item = <D as OutputOps>::Item;

    fn put(&mut self, item: Self::Item) {
        self.derived.put(item);
    }

    fn next(&mut self) {
        self.derived.next();
    }
}

// Operator surface, derived from the ladder rather than from the deriving type directly so that
// every row shares one set of impls.

impl<D, Tag> PartialEq for Iter<D, Tag>
where
    Iter<D, Tag>: Cursor,
{
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<D, Tag> Eq for Iter<D, Tag> where Iter<D, Tag>: Cursor {}

impl<D, Tag> PartialOrd for Iter<D, Tag>
where
    Iter<D, Tag>: RandomCursor,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D, Tag> Ord for Iter<D, Tag>
where
    Iter<D, Tag>: RandomCursor,
{
    fn cmp(&self, other: &Self) -> Ordering {
        // A positive distance to `other` places self earlier in the sequence.
        0.cmp(&self.distance_to(other))
    }
}

impl<D, Tag> Add<isize> for Iter<D, Tag>
where
    Iter<D, Tag>: RandomCursor,
{
    type Output = Self;

    fn add(mut self, count: isize) -> Self {
        self.advance(count);
        self
    }
}

impl<D, Tag> AddAssign<isize> for Iter<D, Tag>
where
    Iter<D, Tag>: RandomCursor,
{
    fn add_assign(&mut self, count: isize) {
        self.advance(count);
    }
}

impl<D, Tag> Sub<isize> for Iter<D, Tag>
where
    Iter<D, Tag>: RandomCursor,
{
    type Output = Self;

    fn sub(mut self, count: isize) -> Self {
        self.advance(-count);
        self
    }
}

impl<D, Tag> SubAssign<isize> for Iter<D, Tag>
where
    Iter<D, Tag>: RandomCursor,
{
    fn sub_assign(&mut self, count: isize) {
        self.advance(-count);
    }
}

impl<D, Tag> Sub for Iter<D, Tag>
where
    Iter<D, Tag>: RandomCursor,
{
    type Output = isize;

    fn sub(self, other: Self) -> isize {
        other.distance_to(&self)
    }
}
