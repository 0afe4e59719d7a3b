//! Property-based tests using proptest.
//!
//! Length never exceeds capacity, and a failing construction never leaks elements or buffers.
#![cfg(feature = "std")]

use islice::*;
use islice::allocator::{alloc::Global, debug::Counting};

use proptest::prelude::*;

use std::cell::Cell;
use std::rc::Rc;



struct Live(Rc<Cell<usize>>);
impl Live { fn new(live: &Rc<Cell<usize>>) -> Self { live.set(live.get() + 1); Self(live.clone()) } }
impl Drop for Live { fn drop(&mut self) { self.0.set(self.0.get() - 1) } }

/// An iterator that reports `reported` items but yields `actual`.
struct Misreported { actual: std::ops::Range<u32>, reported: usize }
impl Iterator for Misreported { type Item = u32; fn next(&mut self) -> Option<u32> { self.actual.next() } }
impl ExactSizeIterator for Misreported { fn len(&self) -> usize { self.reported } }



proptest! {
    #[test]
    fn len_never_exceeds_capacity(actual in 0u32 .. 64, reported in 0usize .. 64, truncate in 0usize .. 80) {
        let mut s = ASlice::<u32, Global>::try_from_iter(Misreported { actual: 0 .. actual, reported }).unwrap();
        prop_assert_eq!(s.capacity(), reported);
        prop_assert_eq!(s.len(), reported.min(actual as usize));
        prop_assert!(s.len() <= s.capacity());
        s.truncate(truncate);
        prop_assert!(s.len() <= s.capacity());
        prop_assert_eq!(s.spare_capacity_mut().len(), s.capacity() - s.len());
    }

    #[test]
    fn failing_construction_leaks_nothing(len in 0usize .. 64, fail_at in 0usize .. 80) {
        let live = Rc::new(Cell::new(0));
        let counting = Counting::new(Global);
        let r = ASlice::<Live, _>::try_from_fn_in(len, |i| if i == fail_at { Err(i) } else { Ok(Live::new(&live)) }, &counting);
        match r {
            Ok(s) => {
                prop_assert!(fail_at >= len);
                prop_assert_eq!(live.get(), len);
                drop(s);
            },
            Err(err) => prop_assert_eq!(err.element().map(|e| e.index), Some(fail_at)),
        }
        prop_assert_eq!(live.get(), 0);
        prop_assert_eq!(counting.outstanding(), 0);
    }

    #[test]
    fn get_matches_bounds(values in prop::collection::vec(any::<i16>(), 0 .. 32), index in 0usize .. 40) {
        let s = ASlice::<i16, Global>::try_from_slice(&values).unwrap();
        prop_assert_eq!(s.get(index).ok(), values.get(index));
    }

    #[test]
    fn subslice_matches_bounds(len in 0usize .. 16, start in 0usize .. 20, end in 0usize .. 20) {
        let values = (0 .. len as u32).collect::<Vec<_>>();
        let s = ASlice::<u32, Global>::try_from_slice(&values).unwrap();
        match s.subslice(start, end) {
            Ok(v) => {
                prop_assert!(start < end && end <= len);
                prop_assert_eq!(v.as_slice(), &values[start .. end]);
            },
            Err(err) => {
                prop_assert!(start >= end || end > len);
                prop_assert_eq!(err.len, len);
            },
        }
    }
}
