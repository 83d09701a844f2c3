//! This crate is a freestanding foundation library: the iterator, range and small-container
//! substrate a kernel or firmware project can build on without a hosted standard library
//! underneath.
//!
//! # Purpose
//! Generic code wants to walk sequences without caring whether they are raw memory, a borrowed
//! slice, a fixed-capacity container or a synthetic sequence that computes its elements. A hosted
//! program gets that uniformity from `std`; a freestanding one has to bring its own. This crate
//! is that substrate: a category lattice for iterator capabilities, cursor contracts for each
//! level, a synthesis layer that turns a handful of primitive operations into a full iterator
//! surface, range classification on top, and algorithms that work across all of it.
//!
//! # Method
//! The design leans on the trait system for everything: capability checks are trait bounds,
//! category dispatch is a type parameter, and a type that doesn't satisfy a contract fails to
//! compile with the missing operation named — there is deliberately no runtime classification
//! anywhere. The layering runs strictly upwards:
//! [`iter::tag`] → [`iter::ops`] → [`iter::cursor`] → [`iter::Iter`] → [`range`] → [`algo`],
//! and each layer only consumes the contracts of the one below.
//!
//! # Error Handling
//! Almost every misuse here is a compile-time rejection, so there is not much left for runtime
//! errors to do. Where they exist (the fallible container methods), they are strongly typed:
//! enums for static dispatch rather than dynamic, with ZST structs that implement
//! [`Error`](core::error::Error). The panicking container methods are thin wrappers over the
//! fallible ones, for call sites that would rather not handle a capacity error on every push.
//! Contract violations on cursors (reading at the end, mixing cursors of different sequences,
//! mutating a sequence mid-scan) are documented preconditions, not checked conditions.
//!
//! # Dependencies
//! `#![no_std]` throughout — everything works against [`core`], nothing allocates, and the test
//! suite is the only thing that links `std`. The one external dependency is a derive-macro crate
//! for the repetitive parts of the error types.
#![no_std]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(test)]
extern crate std;

pub mod algo;
pub mod iter;
pub mod range;

#[cfg(feature = "containers")]
pub mod containers;

pub(crate) mod util;

pub use util::error;
