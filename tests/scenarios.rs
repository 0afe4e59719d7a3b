//! End to end construction / access / destruction scenarios against the public API.
#![cfg(feature = "std")]

use islice::*;
use islice::allocator::{alloc::Global, debug::Counting};
use islice::error::*;

use std::cell::Cell;
use std::rc::Rc;



/// Counts live instances through a shared counter.
#[derive(Debug)] struct Live {
    value:  u32,
    live:   Rc<Cell<usize>>,
}

impl Live {
    fn new(value: u32, live: &Rc<Cell<usize>>) -> Self { live.set(live.get() + 1); Self { value, live: live.clone() } }
}

impl Clone for Live {
    fn clone(&self) -> Self {
        assert!(self.value != 13, "unlucky clone");
        Self::new(self.value, &self.live)
    }
}

impl Drop for Live { fn drop(&mut self) { self.live.set(self.live.get() - 1) } }

/// Movable, never copyable.  Moving out leaves `None` behind.
#[derive(Debug, PartialEq)] struct MoveOnly(Option<Box<u32>>);



#[test] fn capacity_without_elements() {
    let s = ASlice::<i32, Global>::try_with_capacity(5).unwrap();
    assert_eq!(s.len(), 0);
    assert_eq!(s.capacity(), 5);
    for i in 0 .. 6 { assert_eq!(s.get(i), Err(OutOfRangeError { start: i, end: i + 1, len: 0 })) }
}

#[test] fn from_values() {
    let s = ASlice::<i32, Global>::try_from_slice(&[1, 2, 3, 4, 5]).unwrap();
    assert_eq!((s.len(), s.capacity()), (5, 5));
    assert_eq!(s.get(2), Ok(&3));

    let s : ASlice<i32, Global> = aslice![1, 2, 3, 4, 5].unwrap();
    assert_eq!((s.len(), s.capacity()), (5, 5));
    assert_eq!(s.get(2), Ok(&3));
}

#[test] fn move_only_sources_are_drained() {
    let mut sources = [MoveOnly(Some(Box::new(1))), MoveOnly(Some(Box::new(2))), MoveOnly(Some(Box::new(3)))];
    let s = ASlice::<MoveOnly, Global>::try_from_iter(sources.iter_mut().map(|m| MoveOnly(m.0.take()))).unwrap();
    assert!(sources.iter().all(|m| m.0.is_none()));
    assert_eq!(s.get(2), Ok(&MoveOnly(Some(Box::new(3)))));

    let s = aslice![in Global; MoveOnly(Some(Box::new(4))), MoveOnly(Some(Box::new(5)))].unwrap();
    assert_eq!(s.len(), 2);
}

#[test] fn clone_only_sources_are_untouched() {
    let live = Rc::new(Cell::new(0));
    let sources = [Live::new(1, &live), Live::new(2, &live)];
    let s = ASlice::<Live, Global>::try_from_iter(sources.iter()).unwrap();
    assert_eq!(live.get(), 4);
    assert_eq!(sources.iter().map(|l| l.value).collect::<Vec<_>>(), [1, 2]);
    drop(s);
    assert_eq!(live.get(), 2);
}

#[test] fn subslice_shares_storage() {
    let s = ASlice::<i32, Global>::try_from_slice(&[1, 2, 3, 4, 5]).unwrap();
    let v = s.subslice(1, 4).unwrap();
    assert_eq!(v.len(), 3);
    assert_eq!(v.capacity(), 3);
    assert_eq!(v.get(0), s.get(1));
    assert_eq!(v.as_ptr(), s.get(1).unwrap() as *const i32);
    assert_eq!(v.subslice(1, 3).unwrap().as_slice(), [3, 4]);
}

#[test] fn empty_subslice_rejected() {
    let s = ASlice::<i32, Global>::try_from_slice(&[1, 2, 3]).unwrap();
    assert_eq!(s.subslice(2, 2).unwrap_err(), OutOfRangeError { start: 2, end: 2, len: 3 });
}

#[test] fn leak_free_on_element_error() {
    let live = Rc::new(Cell::new(0));
    let counting = Counting::new(Global);
    let items = (0 .. 6).map(|i| if i == 4 { Err("four") } else { Ok(Live::new(i, &live)) });
    let err = ASlice::<Live, _>::try_from_fallible_iter_in(items, &counting).unwrap_err();
    assert_eq!(err.element().map(|e| (e.index, e.error)), Some((4, "four")));
    assert_eq!(live.get(), 0);
    assert_eq!(counting.outstanding(), 0);
}

#[test] fn leak_free_on_panicking_clone() {
    let live = Rc::new(Cell::new(0));
    let counting = Counting::new(Global);
    let sources = [Live::new(1, &live), Live::new(2, &live), Live::new(13, &live), Live::new(4, &live)];
    let r = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| ASlice::<Live, _>::try_from_slice_in(&sources, &counting)));
    assert!(r.is_err());
    assert_eq!(live.get(), 4);
    assert_eq!(counting.outstanding(), 0);
}

#[test] fn leak_free_on_alloc_failure() {
    let live = Rc::new(Cell::new(0));
    let counting = Counting::new(Global);
    counting.fail_after(Some(0));
    let err = ASlice::<Live, _>::try_from_fn_in(3, |i| Ok::<_, ()>(Live::new(i as u32, &live)), &counting).unwrap_err();
    assert_eq!(err, ConstructError::Alloc(AllocationError::OutOfMemory { size: 3 * std::mem::size_of::<Live>(), align: std::mem::align_of::<Live>() }));
    assert_eq!(live.get(), 0);
    assert_eq!(counting.total(), 0);
}

#[test] fn bounds_at_len_and_capacity() {
    let mut s = ASlice::<u8, Global>::try_with_capacity(4).unwrap();
    s.spare_capacity_mut()[0].write(1);
    s.spare_capacity_mut()[1].write(2);
    // SAFETY: ✔️ slots 0 and 1 were just written
    unsafe { s.set_len(2) };
    assert!(s.get(s.len() - 1).is_ok());
    assert!(s.get(s.len()).is_err());
    assert!(s.get(s.capacity()).is_err());
}

#[test] fn views_over_caller_storage() {
    let live = Rc::new(Cell::new(0));
    let mut storage = vec![Live::new(1, &live), Live::new(2, &live)];
    {
        // SAFETY: ✔️ `storage` outlives `v`
        let v = unsafe { SliceView::from_raw_parts(storage.as_ptr(), storage.len()) }.unwrap();
        assert_eq!(v.get(1).map(|l| l.value), Ok(2));
        let mut m = SliceViewMut::new(&mut storage);
        m.get_mut(0).unwrap().value = 10;
    }
    assert_eq!(live.get(), 2);
    assert_eq!(storage[0].value, 10);

    let err = unsafe { SliceView::<u8>::from_raw_parts(std::ptr::null(), 4) }.unwrap_err();
    assert_eq!(err, InvalidArgumentError { len: 4 });
    assert!(unsafe { SliceView::<u8>::from_raw_parts(std::ptr::null(), 0) }.unwrap().is_empty());
}

#[test] fn error_sources() {
    use std::error::Error;
    let err : ConstructError<OutOfRangeError, AllocationError> = ConstructError::Element(ElementConstructionError { index: 0, error: OutOfRangeError { start: 1, end: 2, len: 0 } });
    assert!(err.source().is_some());
    assert_eq!(err.to_string(), "constructing element 0 failed: index 1 out of range for slice of length 0");
}

#[test] fn dump_lines() {
    let s = ASlice::<&str, Global>::try_from_array(["x", "y"]).unwrap();
    assert_eq!(s.dump().to_string(), "x\ny\n");
    s.print();
}
