#![cfg(test)]

use super::cursor::{Cursor, RandomCursor, SentinelFor, SizedSentinel};
use super::ops::{ContiguousOps, RandomOps};
use super::traits::{IterTraits, ToAddress, to_address};
use super::{Category, ContiguousTag, Iter, RandomTag, Reversed, SliceCursor, make_reverse};

/// A random-access position over the sequence `0, 10, 20, ...` with nothing materialized behind
/// it, so reads yield by-value proxies rather than references.
#[derive(Debug, Clone, Default, PartialEq)]
struct Tens {
    pos: isize,
}

impl RandomOps for Tens {
    type Value = isize;
    type Reference = isize;

    fn value(&self) -> isize {
        self.pos * 10
    }

    fn advance(&mut self, count: isize) {
        self.pos += count;
    }

    fn distance_to(&self, other: &Self) -> isize {
        other.pos - self.pos
    }
}

type TensIter = Iter<Tens, RandomTag>;

/// A contiguous position backed by a byte slice.
#[derive(Debug, Clone, Default)]
struct Bytes<'a> {
    slice: &'a [u8],
    pos: usize,
}

impl<'a> RandomOps for Bytes<'a> {
    type Value = u8;
    type Reference = &'a u8;

    fn value(&self) -> &'a u8 {
        &self.slice[self.pos]
    }

    fn advance(&mut self, count: isize) {
        self.pos = self.pos.wrapping_add_signed(count);
    }

    fn distance_to(&self, other: &Self) -> isize {
        other.pos as isize - self.pos as isize
    }
}

impl ContiguousOps for Bytes<'_> {
    fn address(&self) -> *const u8 {
        self.slice[self.pos..].as_ptr()
    }
}

type BytesIter<'a> = Iter<Bytes<'a>, ContiguousTag>;

#[test]
fn test_category_order() {
    use Category::*;

    let ascending = [Input, Forward, Bidirectional, Random, Contiguous];
    for (weak_rank, weak) in ascending.iter().enumerate() {
        for (strong_rank, strong) in ascending.iter().enumerate() {
            assert_eq!(
                strong.subsumes(*weak),
                strong_rank >= weak_rank,
                "{strong:?} should subsume {weak:?} iff it is at least as capable."
            );
        }
        assert!(
            !Output.subsumes(*weak) && !weak.subsumes(Output),
            "Output should be incomparable with {weak:?}."
        );
    }
    assert!(Output.subsumes(Output), "Every category subsumes itself.");
}

#[test]
fn test_synthesized_random_surface() {
    // The deriving type implements only value/advance/distance_to (equal comes from the
    // distance default); everything below is synthesized.
    let mut it = TensIter::default();

    assert_eq!(it.get(), 0, "Dereference should read through value().");
    assert_eq!(it.at(3), 30, "Subscript should not move the cursor.");
    assert_eq!(it.get(), 0);

    it.step();
    assert_eq!(it.get(), 10, "Prefix increment should advance one position.");
    it.step_back();
    assert_eq!(it.get(), 0, "Prefix decrement should undo it.");

    let it3 = it.clone() + 3;
    assert_eq!(it3.get(), 30);
    assert_eq!((it3.clone() - 2).get(), 10);
    assert_eq!(
        it3.clone() - it.clone(),
        3,
        "Cursor difference should be the signed distance."
    );

    assert!(it < it3, "Ordering should follow sequence position.");
    assert!(it != it3);
    assert_eq!(it, TensIter::default());
}

#[test]
fn test_offset_associativity() {
    let it = TensIter::default() + 5;

    for a in -4..4_isize {
        for b in -4..4_isize {
            assert_eq!(
                (it.clone() + a) + b,
                it.clone() + (a + b),
                "Offsets should apply associatively."
            );
            assert_eq!(
                (it.clone() + a) - it.clone(),
                a,
                "Moving by a and measuring should return a."
            );
        }
    }
}

#[test]
fn test_postfix_semantics() {
    let mut it = TensIter::default();
    let old = it.post_step();

    assert_eq!(old.get(), 0, "Postfix increment should return the pre-step state.");
    assert_eq!(it.get(), 10);

    let old = it.post_step_back();
    assert_eq!(old.get(), 10);
    assert_eq!(it.get(), 0);
}

#[test]
fn test_contiguous_address() {
    let data = [1_u8, 2, 3, 4];
    let it = BytesIter::new(Bytes {
        slice: &data,
        pos: 0,
    });

    assert_eq!(*it.get(), 1, "Dereference should still go through value().");
    assert_eq!(
        it.as_ptr(),
        data.as_ptr(),
        "The member-access pointer should come straight from address()."
    );
    assert_eq!(
        (it.clone() + 3).as_ptr(),
        // SAFETY: 3 is within the bounds of the 4 element array.
        unsafe { data.as_ptr().add(3) },
        "Address should track pointer arithmetic."
    );
    assert_eq!(
        to_address(&(it + 3)),
        to_address(&&data[3]),
        "to_address should agree between cursors and plain references."
    );
}

#[test]
fn test_pointer_classification() {
    assert_eq!(<*const u32 as IterTraits>::CATEGORY, Category::Random);
    assert_eq!(<*const u32 as IterTraits>::CONCEPT, Category::Contiguous);
    assert_eq!(<*mut u32 as IterTraits>::CATEGORY, Category::Random);
    assert_eq!(<*mut u32 as IterTraits>::CONCEPT, Category::Contiguous);

    let value = 9_u32;
    let pointer: *const u32 = &raw const value;
    assert_eq!(
        pointer.to_address(),
        &raw const value,
        "A raw pointer is its own address."
    );
}

#[test]
fn test_interface_classification() {
    assert_eq!(<TensIter as IterTraits>::CATEGORY, Category::Random);
    assert_eq!(<TensIter as IterTraits>::CONCEPT, Category::Random);
    assert_eq!(
        <BytesIter<'_> as IterTraits>::CATEGORY,
        Category::Random,
        "Contiguous iterators should keep the backwards-compatible Random category."
    );
    assert_eq!(<BytesIter<'_> as IterTraits>::CONCEPT, Category::Contiguous);
    assert_eq!(
        <Reversed<SliceCursor<'_, u8>> as IterTraits>::CONCEPT,
        Category::Random,
        "Reversal should demote a contiguous concept to Random."
    );
}

#[test]
fn test_slice_cursor() {
    let values = [3, 1, 4, 1, 5];
    let mut cursor = SliceCursor::new(&values);
    let end = SliceCursor::at_end(&values);

    assert_eq!(*cursor.value(), 3);
    assert_eq!(cursor.distance_to(&end), 5);
    assert_eq!(end.distance_from(&cursor), 5);

    cursor.advance(4);
    assert_eq!(*cursor.value(), 5);
    cursor.next();
    assert!(
        end.reached(&cursor),
        "Stepping past the last element should reach the end sentinel."
    );

    let read = {
        let probe = SliceCursor::new(&values);
        probe.value()
    };
    assert_eq!(*read, 3, "Reads should outlive the cursor that made them.");
}

#[test]
fn test_reverse_traversal() {
    let values = [1, 2, 3];
    let mut reversed = make_reverse(SliceCursor::at_end(&values));
    let rend = make_reverse(SliceCursor::new(&values));

    let mut seen = std::vec::Vec::new();
    while !rend.reached(&reversed) {
        seen.push(*reversed.value());
        reversed.next();
    }
    assert_eq!(seen, [3, 2, 1], "Reversal should walk the sequence backwards.");
}

#[test]
fn test_reverse_base_convention() {
    let values = [10, 20, 30];
    let mut base = SliceCursor::new(&values);
    base.advance(2);

    let reversed = make_reverse(base);
    assert_eq!(
        *reversed.value(),
        20,
        "A reversed cursor should read the element before its base."
    );
    assert_eq!(reversed.base(), base, "base() should return the stored cursor unchanged.");
}

#[test]
fn test_double_reversal_round_trip() {
    let values = [7, 8, 9];
    let mut cursor = SliceCursor::new(&values);
    cursor.advance(1);

    let twice = make_reverse(make_reverse(cursor));
    assert_eq!(
        twice.base().base(),
        cursor,
        "Reversing twice should round-trip through base()."
    );
    assert_eq!(
        *twice.value(),
        *cursor.value(),
        "Double reversal should restore forward reading."
    );
}

#[test]
fn test_reversed_random_access() {
    let values = [0, 1, 2, 3, 4, 5];
    let mut reversed = make_reverse(SliceCursor::at_end(&values));

    assert_eq!(*reversed.at(0), 5);
    assert_eq!(*reversed.at(3), 2, "Subscript should count backwards from the end.");

    reversed.advance(2);
    assert_eq!(*reversed.value(), 3);

    let rend = make_reverse(SliceCursor::new(&values));
    assert_eq!(
        reversed.distance_to(&rend),
        4,
        "Distances should be measured in reverse direction."
    );

    reversed.advance(-2);
    assert_eq!(*reversed.value(), 5, "Negative seeks should move towards the end.");
}

#[cfg(feature = "adapters")]
mod adapters {
    use super::super::adapt::{End, FnSink, Legacy, SliceSink};
    use super::*;
    use crate::iter::cursor::OutputCursor;

    #[test]
    fn test_legacy_cursor() {
        let mut cursor = Legacy::new([4, 5, 6].into_iter());

        assert_eq!(cursor.value(), 4);
        assert!(!End.reached(&cursor));

        cursor.next();
        cursor.next();
        assert_eq!(cursor.value(), 6);
        cursor.next();
        assert!(End.reached(&cursor), "Exhausting the source should reach the sentinel.");

        assert_eq!(<Legacy<core::ops::Range<i32>> as IterTraits>::CONCEPT, Category::Input);
    }

    #[test]
    fn test_slice_sink() {
        let mut target = [0; 4];
        let mut sink = SliceSink::new(&mut target);

        for value in [9, 8, 7] {
            sink.put(value);
            sink.next();
        }

        assert_eq!(sink.written(), 3);
        assert!(!sink.full());
        assert_eq!(target, [9, 8, 7, 0], "Writes should land front to back.");
    }

    #[test]
    fn test_fn_sink() {
        let mut collected = std::vec::Vec::new();
        let mut sink = FnSink::new(|value: i32| collected.push(value));

        sink.put(1);
        sink.next();
        sink.put(2);

        drop(sink);
        assert_eq!(collected, [1, 2], "Every written value should reach the closure.");
    }
}
