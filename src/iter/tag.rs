//! The closed set of iterator categories and their marker tags.
//!
//! Categories form a strict capability order ([`Contiguous`](Category::Contiguous) ⊇
//! [`Random`](Category::Random) ⊇ [`Bidirectional`](Category::Bidirectional) ⊇
//! [`Forward`](Category::Forward) ⊇ [`Input`](Category::Input)), with
//! [`Output`](Category::Output) on its own branch, comparable only with itself. The set is closed
//! on purpose: [`CategoryTag`] is sealed, so naming a tag that isn't one of the six is a
//! compile-time error rather than a silently ignored extension point.

/// An iterator capability level.
///
/// Where a tag type is needed for compile-time dispatch, use one of the marker types below; this
/// enum is the value-level view, useful for inspecting a deduced
/// [`IterTraits`](crate::iter::traits::IterTraits) bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Write-only, single-pass.
    Output,
    /// Read, single-pass.
    Input,
    /// Read, multi-pass, default-constructible.
    Forward,
    /// Forward plus backwards traversal.
    Bidirectional,
    /// Bidirectional plus constant-time seeks and distances.
    Random,
    /// Random plus a genuine element address.
    Contiguous,
}

impl Category {
    /// Returns true if an iterator of category `self` can be used anywhere an iterator of
    /// category `other` is required.
    ///
    /// Every category subsumes itself. [`Output`](Category::Output) neither subsumes nor is
    /// subsumed by any read category.
    ///
    /// # Examples
    /// ```
    /// # use frt::iter::Category;
    /// assert!(Category::Random.subsumes(Category::Forward));
    /// assert!(!Category::Forward.subsumes(Category::Random));
    /// assert!(!Category::Output.subsumes(Category::Input));
    /// ```
    pub const fn subsumes(self, other: Category) -> bool {
        match (self, other) {
            (Category::Output, Category::Output) => true,
            (Category::Output, _) | (_, Category::Output) => false,
            _ => self.rank() >= other.rank(),
        }
    }

    const fn rank(self) -> u8 {
        match self {
            Category::Output => 0,
            Category::Input => 1,
            Category::Forward => 2,
            Category::Bidirectional => 3,
            Category::Random => 4,
            Category::Contiguous => 5,
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A marker type naming one of the six [`Category`] values at the type level.
///
/// Sealed: the six tags below are the only implementations, ever.
pub trait CategoryTag: sealed::Sealed {
    /// The category this tag names.
    const CATEGORY: Category;
}

macro_rules! tags {
    ($($(#[$doc:meta])* $name:ident => $category:ident),+ $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $name;

            impl sealed::Sealed for $name {}

            impl CategoryTag for $name {
                const CATEGORY: Category = Category::$category;
            }
        )+
    };
}

tags! {
    /// Tag for [`Category::Output`].
    OutputTag => Output,
    /// Tag for [`Category::Input`].
    InputTag => Input,
    /// Tag for [`Category::Forward`].
    ForwardTag => Forward,
    /// Tag for [`Category::Bidirectional`].
    BidirectionalTag => Bidirectional,
    /// Tag for [`Category::Random`].
    RandomTag => Random,
    /// Tag for [`Category::Contiguous`].
    ContiguousTag => Contiguous,
}
