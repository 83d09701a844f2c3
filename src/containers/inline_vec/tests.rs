#![cfg(test)]

use std::borrow::Borrow;
use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::algo::RangeExt;
use crate::iter::cursor::{Cursor, RandomCursor};
use crate::range;
use crate::util::panic::assert_panics;
use crate::util::result::ResultExtension;
use crate::util::testing::{CountedDrop, ZeroSizedType};

#[test]
fn test_push_pop() {
    let mut vec: InlineVec<u8, 4> = InlineVec::new();
    assert!(vec.is_empty());

    for i in 1..=4 {
        vec.push(i);
    }
    assert_eq!(vec.len(), 4);
    assert!(vec.is_full());
    assert_eq!(&*vec, &[1, 2, 3, 4]);

    assert!(
        vec.try_push(5).is_err(),
        "Pushing into a full InlineVec should overflow."
    );
    assert_panics!({
        let mut vec = InlineVec::<u8, 1>::new();
        vec.push(1);
        vec.push(2)
    });

    assert_eq!(vec.pop(), Some(4));
    assert_eq!(vec.pop(), Some(3));
    assert_eq!(vec.len(), 2);
    vec.pop();
    vec.pop();
    assert_eq!(vec.pop(), None, "Popping an empty InlineVec should return None.");
}

#[test]
fn test_insert_remove() {
    let mut vec = InlineVec::<u8, 6>::from_slice(&[1, 2, 4, 5]).throw();

    vec.insert(2, 3);
    assert_eq!(&*vec, &[1, 2, 3, 4, 5], "Insertion should shift the tail back.");

    vec.insert(5, 6);
    assert_eq!(&*vec, &[1, 2, 3, 4, 5, 6], "Insertion at len should append.");

    let overflow = vec.try_insert(0, 0).unwrap_err();
    assert!(
        overflow.is_capacity_overflow(),
        "Inserting into a full InlineVec should report the capacity, not the index."
    );

    assert_eq!(vec.remove(0), 1);
    assert_eq!(&*vec, &[2, 3, 4, 5, 6], "Removal should shift the tail forward.");

    let out_of_bounds = vec.try_insert(7, 9).unwrap_err();
    assert!(out_of_bounds.is_index_out_of_bounds());

    assert!(vec.try_remove(5).is_err());
    assert_panics!({
        let mut vec = InlineVec::<u8, 2>::new();
        vec.push(1);
        vec.remove(1);
    });
}

#[test]
fn test_zst_support() {
    let mut vec: InlineVec<ZeroSizedType, 5> = InlineVec::new();
    for _ in 0..5 {
        vec.push(ZeroSizedType);
    }

    assert_eq!(vec[0], ZeroSizedType, "Indexing with no offset should work.");
    assert_eq!(vec[4], ZeroSizedType, "Indexing with an in-bounds offset should work.");
    assert_eq!(
        vec.iter().count(),
        5,
        "Should iterate over the right number of ZST instances."
    );
    assert_eq!(vec.remove(2), ZeroSizedType);
    assert_eq!(vec.len(), 4);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut vec: InlineVec<CountedDrop, 10> = InlineVec::new();
    for _ in 0..10 {
        vec.push(counter.clone());
    }

    drop(vec);
    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");

    let counter = CountedDrop::new(0);
    let mut vec: InlineVec<CountedDrop, 10> = InlineVec::new();
    for _ in 0..6 {
        vec.push(counter.clone());
    }

    vec.clear();
    assert_eq!(counter.take(), 6, "Clearing should drop every element.");
    assert!(vec.is_empty());
}

#[test]
fn test_equality_and_hash() {
    let vec = InlineVec::<usize, 5>::from_slice(&[0, 1, 2, 3, 4]).throw();

    assert_eq!(
        vec,
        InlineVec::from_slice(&[0, 1, 2, 3, 4]).throw(),
        "Different construction orders should produce equal results."
    );
    assert_ne!(vec, InlineVec::from_slice(&[0, 1, 2, 5, 4]).throw());

    assert_eq!(
        Borrow::<[usize]>::borrow(&vec),
        &[0, 1, 2, 3, 4],
        "Borrow equality should be upheld."
    );
    assert_eq!(&*vec, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&vec),
        state.hash_one(InlineVec::<usize, 5>::from_slice(&[0, 1, 2, 3, 4]).throw()),
        "Equal InlineVecs should produce the same hash."
    );
}

#[test]
fn test_iterators() {
    let mut vec = InlineVec::<usize, 5>::from_slice(&[0, 1, 2, 3, 4]).throw();

    for i in &mut vec {
        *i *= 2;
    }
    assert_eq!(
        *vec,
        [0_usize, 2, 4, 6, 8],
        "InlineVec mutated by iterator should equal this slice."
    );

    let mut iter = vec.clone().into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new(0);
    let mut vec: InlineVec<CountedDrop, 10> = InlineVec::new();
    for _ in 0..10 {
        vec.push(counter.clone());
    }

    let mut iter = vec.into_iter();
    iter.next();
    iter.next();
    drop(iter);
    assert_eq!(
        counter.take(),
        10,
        "Dropping a partly consumed owned iterator should still drop every element."
    );
}

#[test]
fn test_clone_independence() {
    let mut vec = InlineVec::<u8, 3>::from_slice(&[1, 2, 3]).throw();
    let clone = vec.clone();

    vec[0] = 9;
    assert_eq!(&*clone, &[1, 2, 3], "Clones should not share storage.");
}

#[test]
fn test_from_slice_overflow() {
    assert!(
        InlineVec::<u8, 2>::from_slice(&[1, 2, 3]).is_err(),
        "from_slice should reject slices beyond the capacity."
    );
}

#[test]
fn test_as_range() {
    let vec = InlineVec::<i32, 8>::from_slice(&[-1, 42, 3582, 15, 3, 64]).throw();

    assert_eq!(range::size(&vec), 6);
    assert_eq!(range::data(&vec), vec.as_slice().as_ptr());

    let found = (&vec).find(&3582);
    assert_eq!(
        range::begin(&vec).distance_to(&found),
        2,
        "Searching an InlineVec should go through its cursors."
    );
    assert_eq!(*range::rbegin(&vec).value(), 64);
    assert!((&vec).contains(&-1));
    assert!(!(&vec).contains(&7));
}

#[test]
fn test_formatting() {
    let vec = InlineVec::<u8, 4>::from_slice(&[1, 2]).throw();

    assert_eq!(std::format!("{vec}"), "[1, 2]");
    assert_eq!(
        std::format!("{vec:?}"),
        "InlineVec { contents: [1, 2], len: 2, cap: 4 }"
    );
}
