//! Trait deduction: the bundle of types and categories associated with an iterator-like type.
//!
//! Deduction follows a fixed priority order, realized here as the fixed set of [`IterTraits`]
//! impls:
//!
//! 1. Raw pointers get the built-in specialization: `isize` differences, [`Random`] category,
//!    [`Contiguous`] concept.
//! 2. Any other type takes full control of its own classification by implementing [`IterTraits`]
//!    itself — the escape hatch that overrides all inference. The in-crate cursors
//!    ([`SliceCursor`], [`Reversed`], [`Iter`]) all use this path.
//! 3. Ecosystem iterators are classified through the [`Legacy`](super::adapt::Legacy) adapter,
//!    which lands them at Input — see [`adapt`](super::adapt) for why the upgrade chain ends
//!    there.
//!
//! A type matching none of these is not an iterator, and using it where a bundle is required
//! fails to compile; nothing here ever produces placeholder types at runtime.
//!
//! [`Random`]: Category::Random
//! [`Contiguous`]: Category::Contiguous

use core::ptr::NonNull;

use super::cursor::ContiguousCursor;
use super::interface::Iter;
use super::ops::{BidirectionalOps, ContiguousOps, ForwardOps, InputOps, OutputOps, RandomOps};
use super::reverse::Reversed;
use super::slice::SliceCursor;
use super::tag::{
    BidirectionalTag, Category, ContiguousTag, ForwardTag, InputTag, OutputTag, RandomTag,
};

/// The deduced trait bundle of an iterator-like type.
///
/// `CATEGORY` is the backwards-compatible classification; `CONCEPT` the precise one. They differ
/// only for contiguous iterators, which classify as [`Category::Random`] for any consumer that
/// predates the contiguous level but advertise [`Category::Contiguous`] as their concept.
pub trait IterTraits {
    /// The element type.
    type Value;

    /// The pointer type corresponding to one element.
    type Pointer;

    /// The signed distance type. Always `isize` for the in-crate impls: on every supported
    /// platform the pointer difference type is what iterator arithmetic runs on.
    type Difference;

    /// The backwards-compatible category.
    const CATEGORY: Category;

    /// The precise category.
    const CONCEPT: Category;
}

/// Caps a concept at [`Category::Random`], for wrappers that keep random access but break
/// contiguity.
const fn demoted(concept: Category) -> Category {
    match concept {
        Category::Contiguous => Category::Random,
        other => other,
    }
}

impl<T> IterTraits for *const T {
    type Value = T;
    type Pointer = *const T;
    type Difference = isize;

    const CATEGORY: Category = Category::Random;
    const CONCEPT: Category = Category::Contiguous;
}

impl<T> IterTraits for *mut T {
    type Value = T;
    type Pointer = *mut T;
    type Difference = isize;

    const CATEGORY: Category = Category::Random;
    const CONCEPT: Category = Category::Contiguous;
}

impl<T> IterTraits for SliceCursor<'_, T> {
    type Value = T;
    type Pointer = *const T;
    type Difference = isize;

    const CATEGORY: Category = Category::Random;
    const CONCEPT: Category = Category::Contiguous;
}

impl<C: IterTraits> IterTraits for Reversed<C> {
    type Value = C::Value;
    type Pointer = C::Pointer;
    type Difference = C::Difference;

    const CATEGORY: Category = demoted(C::CATEGORY);
    const CONCEPT: Category = demoted(C::CONCEPT);
}

impl<D: InputOps> IterTraits for Iter<D, InputTag> {
    type Value = <D as InputOps>::Value;
    type Pointer = *const <D as InputOps>::Value;
    type Difference = isize;

    const CATEGORY: Category = Category::Input;
    const CONCEPT: Category = Category::Input;
}

impl<D: ForwardOps> IterTraits for Iter<D, ForwardTag> {
    type Value = <D as InputOps>::Value;
    type Pointer = *const <D as InputOps>::Value;
    type Difference = isize;

    const CATEGORY: Category = Category::Forward;
    const CONCEPT: Category = Category::Forward;
}

impl<D: BidirectionalOps> IterTraits for Iter<D, BidirectionalTag> {
    type Value = <D as InputOps>::Value;
    type Pointer = *const <D as InputOps>::Value;
    type Difference = isize;

    const CATEGORY: Category = Category::Bidirectional;
    const CONCEPT: Category = Category::Bidirectional;
}

impl<D: RandomOps> IterTraits for Iter<D, RandomTag> {
    type Value = <D as RandomOps>::Value;
    type Pointer = *const <D as RandomOps>::Value;
    type Difference = isize;

    const CATEGORY: Category = Category::Random;
    const CONCEPT: Category = Category::Random;
}

impl<D: ContiguousOps> IterTraits for Iter<D, ContiguousTag> {
    type Value = <D as RandomOps>::Value;
    type Pointer = *const <D as RandomOps>::Value;
    type Difference = isize;

    // The category stays Random for contiguous iterators; only the concept is precise.
    const CATEGORY: Category = Category::Random;
    const CONCEPT: Category = Category::Contiguous;
}

impl<D: OutputOps> IterTraits for Iter<D, OutputTag> {
    type Value = ();
    type Pointer = ();
    type Difference = isize;

    const CATEGORY: Category = Category::Output;
    const CONCEPT: Category = Category::Output;
}

/// Conversion of pointer-like values to a raw element address.
///
/// Covers raw pointers, references, [`NonNull`] (standing in for any owning or non-owning
/// smart-pointer-like wrapper whose pointee type names the element), and the contiguous cursors
/// of this crate.
pub trait ToAddress {
    /// The pointee type.
    type Target;

    /// Returns the raw address. Never dereferences anything.
    fn to_address(&self) -> *const Self::Target;
}

/// Returns the raw element address of any pointer-like value. See [`ToAddress`].
pub fn to_address<P: ToAddress>(pointer: &P) -> *const P::Target {
    pointer.to_address()
}

impl<T> ToAddress for *const T {
    type Target = T;

    fn to_address(&self) -> *const T {
        *self
    }
}

impl<T> ToAddress for *mut T {
    type Target = T;

    fn to_address(&self) -> *const T {
        self.cast_const()
    }
}

impl<T> ToAddress for &T {
    type Target = T;

    fn to_address(&self) -> *const T {
        core::ptr::from_ref(*self)
    }
}

impl<T> ToAddress for NonNull<T> {
    type Target = T;

    fn to_address(&self) -> *const T {
        self.as_ptr().cast_const()
    }
}

impl<T> ToAddress for SliceCursor<'_, T> {
    type Target = T;

    fn to_address(&self) -> *const T {
        self.address()
    }
}

impl<D: ContiguousOps> ToAddress for Iter<D, ContiguousTag> {
    type Target = <D as RandomOps>::Value;

    fn to_address(&self) -> *const Self::Target {
        self.as_ptr()
    }
}
