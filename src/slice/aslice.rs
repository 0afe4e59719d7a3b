use crate::*;
use crate::error::{ConstructError, ElementConstructionError, OutOfRangeError};
use crate::fat::*;
use crate::slice::{Builder, Element, RawBuf, SliceView, SliceViewMut};

use core::mem::MaybeUninit;



/// [`fat::Alloc`]-friendly, fixed capacity alternative to <code>[Box]&lt;\[T\]&gt;</code>.
///
/// Owns zero or one buffer with room for [`capacity`](Self::capacity) elements, of which the first [`len`](Self::len) are live.
/// Capacity never changes after construction.  Multi-element constructors are all-or-nothing: if building any element fails
/// (an [`Err`] item, or a panic in [`Clone`]), every element built so far is dropped and the buffer is freed before the failure
/// reaches you.
///
/// | Constructor                                       | `len`     | `capacity`    |
/// | --------------------------------------------------| ----------| --------------|
/// | [`new_in`](Self::new_in)                          | 0         | 0 (no buffer) |
/// | [`try_with_capacity_in`](Self::try_with_capacity_in)(n) | 0   | n             |
/// | [`try_from_iter_in`](Self::try_from_iter_in)      | items     | reported len  |
/// | [`try_from_fallible_iter_in`](Self::try_from_fallible_iter_in) | items | reported len |
/// | [`try_from_fn_in`](Self::try_from_fn_in)(n, _)    | n         | n             |
/// | [`try_from_array_in`](Self::try_from_array_in), [`aslice!`](crate::aslice) | N | N |
/// | [`try_new_zeroed_in`](Self::try_new_zeroed_in)(n) | n         | n             |
///
/// For a borrowed range of an existing buffer, see [`SliceView`] / [`SliceViewMut`].
///
/// [Box]: https://doc.rust-lang.org/alloc/boxed/struct.Box.html
pub struct ASlice<T, A: Free> {
    buf:    RawBuf<T, A>,
    len:    usize,
}

impl<T, A: Free> Drop for ASlice<T, A> { fn drop(&mut self) { if self.buf.has_buffer() { self.clear() } } }

impl<T, A: Free> ASlice<T, A> {
    #[inline(always)] pub fn allocator(&self) -> &A { self.buf.allocator() }
    #[inline(always)] pub fn as_ptr(&self) -> *const T { self.buf.as_ptr() }
    #[inline(always)] pub fn as_mut_ptr(&mut self) -> *mut T { self.buf.as_ptr() }
    // SAFETY: ✔️ `[0, len)` are live, and the pointer is aligned and non-null even without a buffer
    #[inline(always)] pub fn as_slice(&self) -> &[T] { unsafe { core::slice::from_raw_parts(self.as_ptr(), self.len) } }
    // SAFETY: ✔️ `[0, len)` are live, and the pointer is aligned and non-null even without a buffer
    #[inline(always)] pub fn as_slice_mut(&mut self) -> &mut [T] { unsafe { core::slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) } }
    #[inline(always)] pub fn capacity(&self) -> usize { self.buf.capacity() }
    #[inline(always)] pub fn is_empty(&self) -> bool { self.len() == 0 }
    #[inline(always)] pub fn len(&self) -> usize { self.len }
    #[inline(always)] pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] { let len = self.len; &mut self.buf.as_uninit_slice_mut()[len..] }

    /// Borrow every live element as a [`SliceView`].
    #[inline(always)] pub fn view(&self) -> SliceView<'_, T> { SliceView::new(self.as_slice()) }

    /// Borrow every live element as a [`SliceViewMut`].
    #[inline(always)] pub fn view_mut(&mut self) -> SliceViewMut<'_, T> { SliceViewMut::new(self.as_slice_mut()) }

    /// Forces the length to `new_len`.
    ///
    /// ### Safety
    /// *   `new_len <= self.capacity()`
    /// *   `[0, new_len)` must be initialized
    /// *   elements in `[new_len, old_len)` are leaked rather than dropped
    pub unsafe fn set_len(&mut self, new_len: usize) {
        if cfg!(debug_assertions) && new_len > self.capacity() { bug::ub::len_exceeds_capacity(new_len, self.capacity()) }
        self.len = new_len;
    }

    /// Drops elements `[len, self.len())`, keeping the capacity.  Does nothing if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if let Some(to_drop) = self.len.checked_sub(len) {
            // SAFETY: ✔️ `len < self.len <= capacity`
            let to_drop = core::ptr::slice_from_raw_parts_mut(unsafe { self.as_mut_ptr().add(len) }, to_drop);
            self.len = len;
            // SAFETY: ✔️ `to_drop` was live, and is no longer tracked as live
            unsafe { to_drop.drop_in_place() };
        }
    }

    /// Drops every live element, keeping the capacity.
    pub fn clear(&mut self) { self.truncate(0) }

    /// Borrow element `index`.
    ///
    /// ### Errors
    /// *   [`OutOfRangeError`] if `index >= self.len()` (slots past `len` are never readable, even within capacity)
    pub fn get(&self, index: usize) -> Result<&T, OutOfRangeError> {
        let len = self.len;
        self.as_slice().get(index).ok_or(OutOfRangeError::index(index, len))
    }

    /// Mutably borrow element `index`.
    ///
    /// ### Errors
    /// *   [`OutOfRangeError`] if `index >= self.len()`
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfRangeError> {
        let len = self.len;
        self.as_slice_mut().get_mut(index).ok_or(OutOfRangeError::index(index, len))
    }

    /// Borrow `[start, end)` as a [`SliceView`] sharing this slice's storage.
    ///
    /// ### Errors
    /// *   [`OutOfRangeError`] unless `start < end <= self.len()` (empty ranges are rejected)
    ///
    /// ## Examples
    /// ```
    /// use islice::{ASlice, allocator::alloc::Global};
    /// let s = ASlice::<u32, Global>::try_from_slice(&[1, 2, 3, 4, 5]).unwrap();
    /// let v = s.subslice(1, 4).unwrap();
    /// assert_eq!(v.as_slice(), [2, 3, 4]);
    /// assert!(s.subslice(2, 2).is_err());
    /// assert!(s.subslice(3, 6).is_err());
    /// ```
    pub fn subslice(&self, start: usize, end: usize) -> Result<SliceView<'_, T>, OutOfRangeError> {
        self.view().into_subslice(start, end)
    }

    /// Mutably borrow `[start, end)` as a [`SliceViewMut`] sharing this slice's storage.
    ///
    /// ### Errors
    /// *   [`OutOfRangeError`] unless `start < end <= self.len()`
    pub fn subslice_mut(&mut self, start: usize, end: usize) -> Result<SliceViewMut<'_, T>, OutOfRangeError> {
        self.view_mut().into_subslice_mut(start, end)
    }

    /// ### Safety
    /// *   `[0, len)` of `buf` must be initialized
    /// *   `len <= buf.capacity()`
    pub(crate) unsafe fn from_raw_buf(buf: RawBuf<T, A>, len: usize) -> Self {
        debug_assert!(len <= buf.capacity());
        Self { buf, len }
    }
}

impl<T, A: Free> ASlice<T, A> {
    /// An empty slice without any buffer.  Never calls the allocator.
    pub fn new() -> Self where A : Default { Self::new_in(A::default()) }

    /// An empty slice without any buffer.  Never calls the allocator.
    pub fn new_in(allocator: A) -> Self { Self { buf: RawBuf::empty(allocator), len: 0 } }

    /// Allocate room for exactly `capacity` elements without constructing any.
    ///
    /// ### Errors
    /// *   `A::Error` if the buffer couldn't be allocated, or `capacity` elements of `T` overflow a [`Layout`](core::alloc::Layout)
    ///
    /// ## Examples
    /// ```
    /// use islice::{ASlice, allocator::alloc::Global};
    /// let s = ASlice::<u32, Global>::try_with_capacity(5).unwrap();
    /// assert_eq!(s.len(), 0);
    /// assert_eq!(s.capacity(), 5);
    /// assert!(s.get(0).is_err());
    /// ```
    pub fn try_with_capacity_in(capacity: usize, allocator: A) -> Result<Self, A::Error> where A : Alloc { Ok(Self { buf: RawBuf::try_alloc(capacity, allocator)?, len: 0 }) }
    pub fn try_with_capacity(   capacity: usize) -> Result<Self, A::Error> where A : Alloc + Default { Self::try_with_capacity_in(capacity, A::default()) }
    #[cfg(feature = "panicy-memory")] pub fn with_capacity_in(capacity: usize, allocator: A) -> Self where A : Alloc { Self::try_with_capacity_in(capacity, allocator).expect("out of memory") }
    #[cfg(feature = "panicy-memory")] pub fn with_capacity(   capacity: usize) -> Self where A : Alloc + Default { Self::try_with_capacity(capacity).expect("out of memory") }

    /// Build a slice from every item of `iter`, moving owned `T`s and cloning borrowed `&T`s (see [`Element`]).
    ///
    /// Capacity is exactly `iter.len()`.  If `iter` yields fewer items than it reported, the result is simply shorter than its capacity.
    /// Items past the reported length are never pulled.  A panic while producing an element (e.g. in [`Clone`]) drops everything
    /// built so far and frees the buffer before unwinding further.
    ///
    /// ### Errors
    /// *   `A::Error` if the buffer couldn't be allocated
    ///
    /// ## Examples
    /// ```
    /// use islice::{ASlice, allocator::alloc::Global};
    /// let words = [String::from("a"), String::from("b")];
    ///
    /// let copied = ASlice::<String, Global>::try_from_iter(words.iter()).unwrap(); // clones, `words` untouched
    /// assert_eq!(copied.as_slice(), ["a", "b"]);
    ///
    /// let moved = ASlice::<String, Global>::try_from_iter(words).unwrap(); // moves, `words` consumed
    /// assert_eq!(moved.as_slice(), ["a", "b"]);
    /// ```
    pub fn try_from_iter_in<I>(iter: I, allocator: A) -> Result<Self, A::Error> where I : IntoIterator, I::IntoIter : ExactSizeIterator, I::Item : Element<T>, A : Alloc {
        let mut iter = iter.into_iter();
        let mut b = Builder::try_new_in(iter.len(), allocator)?;
        while !b.is_full() {
            let Some(item) = iter.next() else { break };
            // SAFETY: ✔️ just checked `!b.is_full()`
            unsafe { b.place_unchecked(item.into_element()) };
        }
        Ok(b.finish())
    }

    pub fn try_from_iter<I>(iter: I) -> Result<Self, A::Error> where I : IntoIterator, I::IntoIter : ExactSizeIterator, I::Item : Element<T>, A : Alloc + Default { Self::try_from_iter_in(iter, A::default()) }

    #[allow(clippy::should_implement_trait)] // requires `ExactSizeIterator`, which `FromIterator` can't express
    #[cfg(feature = "panicy-memory")] pub fn from_iter<I>(iter: I) -> Self where I : IntoIterator, I::IntoIter : ExactSizeIterator, I::Item : Element<T>, A : Alloc + Default { Self::try_from_iter(iter).expect("out of memory") }
    #[cfg(feature = "panicy-memory")] pub fn from_iter_in<I>(iter: I, allocator: A) -> Self where I : IntoIterator, I::IntoIter : ExactSizeIterator, I::Item : Element<T>, A : Alloc { Self::try_from_iter_in(iter, allocator).expect("out of memory") }

    /// Clone every element of `slice` into a new buffer of exactly `slice.len()` elements.
    pub fn try_from_slice_in(slice: &[T], allocator: A) -> Result<Self, A::Error> where T : Clone, A : Alloc { Self::try_from_iter_in(slice, allocator) }
    pub fn try_from_slice(   slice: &[T]) -> Result<Self, A::Error> where T : Clone, A : Alloc + Default { Self::try_from_iter_in(slice, A::default()) }
    #[cfg(feature = "panicy-memory")] pub fn from_slice_in(slice: &[T], allocator: A) -> Self where T : Clone, A : Alloc { Self::try_from_slice_in(slice, allocator).expect("out of memory") }
    #[cfg(feature = "panicy-memory")] pub fn from_slice(   slice: &[T]) -> Self where T : Clone, A : Alloc + Default { Self::try_from_slice(slice).expect("out of memory") }

    /// Move every value of `array` into a new buffer of exactly `N` elements.  See also [`aslice!`](crate::aslice).
    pub fn try_from_array_in<const N: usize>(array: [T; N], allocator: A) -> Result<Self, A::Error> where A : Alloc { Self::try_from_iter_in(array, allocator) }
    pub fn try_from_array<const N: usize>(   array: [T; N]) -> Result<Self, A::Error> where A : Alloc + Default { Self::try_from_iter_in(array, A::default()) }
    #[cfg(feature = "panicy-memory")] pub fn from_array_in<const N: usize>(array: [T; N], allocator: A) -> Self where A : Alloc { Self::try_from_array_in(array, allocator).expect("out of memory") }
    #[cfg(feature = "panicy-memory")] pub fn from_array<const N: usize>(   array: [T; N]) -> Self where A : Alloc + Default { Self::try_from_array(array).expect("out of memory") }

    /// Like [`try_from_iter_in`](Self::try_from_iter_in), but items are [`Result`]s: the first <code>[Err]\(e\)</code> aborts construction.
    ///
    /// ### Errors
    /// *   [`ConstructError::Alloc`] if the buffer couldn't be allocated
    /// *   [`ConstructError::Element`] with the failing item's index, after dropping every element placed before it and freeing the buffer
    ///
    /// ## Examples
    /// ```
    /// use islice::{ASlice, allocator::alloc::Global};
    /// let items = ["1", "2", "x", "4"].map(str::parse::<u32>);
    /// let err = ASlice::<u32, Global>::try_from_fallible_iter(items).unwrap_err();
    /// assert_eq!(err.element().map(|e| e.index), Some(2));
    /// ```
    pub fn try_from_fallible_iter_in<I, U, E>(iter: I, allocator: A) -> Result<Self, ConstructError<E, A::Error>> where I : IntoIterator<Item = Result<U, E>>, I::IntoIter : ExactSizeIterator, U : Element<T>, A : Alloc {
        let mut iter = iter.into_iter();
        let mut b = Builder::try_new_in(iter.len(), allocator).map_err(ConstructError::Alloc)?;
        while !b.is_full() {
            let Some(item) = iter.next() else { break };
            let index = b.placed();
            let value = item.map_err(|error| ConstructError::Element(ElementConstructionError { index, error }))?;
            // SAFETY: ✔️ just checked `!b.is_full()`
            unsafe { b.place_unchecked(value.into_element()) };
        }
        Ok(b.finish())
    }

    pub fn try_from_fallible_iter<I, U, E>(iter: I) -> Result<Self, ConstructError<E, A::Error>> where I : IntoIterator<Item = Result<U, E>>, I::IntoIter : ExactSizeIterator, U : Element<T>, A : Alloc + Default { Self::try_from_fallible_iter_in(iter, A::default()) }

    /// Build `len` elements by calling `f(0)`, `f(1)`, ... in order.
    ///
    /// ### Errors
    /// *   [`ConstructError::Alloc`] if the buffer couldn't be allocated
    /// *   [`ConstructError::Element`] with the failing index, after dropping every element placed before it and freeing the buffer
    pub fn try_from_fn_in<E>(len: usize, mut f: impl FnMut(usize) -> Result<T, E>, allocator: A) -> Result<Self, ConstructError<E, A::Error>> where A : Alloc {
        let mut b = Builder::try_new_in(len, allocator).map_err(ConstructError::Alloc)?;
        while !b.is_full() {
            let index = b.placed();
            let value = f(index).map_err(|error| ConstructError::Element(ElementConstructionError { index, error }))?;
            // SAFETY: ✔️ just checked `!b.is_full()`
            unsafe { b.place_unchecked(value) };
        }
        Ok(b.finish())
    }

    pub fn try_from_fn<E>(len: usize, f: impl FnMut(usize) -> Result<T, E>) -> Result<Self, ConstructError<E, A::Error>> where A : Alloc + Default { Self::try_from_fn_in(len, f, A::default()) }
}

impl<T, A: Free + Default> Default for ASlice<T, A> {
    fn default() -> Self { Self::new() }
}

impl<T, A: Free> AsRef<[T]> for ASlice<T, A> { fn as_ref(&self) -> &[T] { self.as_slice() } }
impl<T, A: Free> AsMut<[T]> for ASlice<T, A> { fn as_mut(&mut self) -> &mut [T] { self.as_slice_mut() } }

impl<T: PartialEq, A: Free> PartialEq for ASlice<T, A> { fn eq(&self, other: &Self) -> bool { self.as_slice() == other.as_slice() } }
impl<T: Eq, A: Free> Eq for ASlice<T, A> {}



#[cfg(all(test, feature = "alloc"))] mod tests {
    use super::*;
    use crate::allocator::{alloc::Global, debug::{Counting, Null}};
    use crate::error::AllocationError;
    use crate::util::drop::{CloneOnly, MoveOnly, Tester};

    #[test] fn empty() {
        let counting = Counting::new(Null);
        let s = ASlice::<Tester, _>::new_in(&counting);
        assert_eq!((s.len(), s.capacity()), (0, 0));
        assert!(s.is_empty());
        assert!(s.get(0).is_err());
        drop(s);
        assert_eq!(counting.total(), 0);
    }

    #[test] fn with_capacity_is_uninit() {
        let counting = Counting::new(Global);
        let mut s = ASlice::<Tester, _>::try_with_capacity_in(5, &counting).unwrap();
        assert_eq!((s.len(), s.capacity()), (0, 5));
        assert_eq!(s.spare_capacity_mut().len(), 5);
        for i in 0 .. 6 { assert_eq!(s.get(i).err(), Some(OutOfRangeError::index(i, 0))) }
        drop(s);
        assert_eq!(Tester::live(), 0);
        assert_eq!(counting.outstanding(), 0);
    }

    #[test] fn with_capacity_fails() {
        assert_eq!(ASlice::<u32, _>::try_with_capacity_in(1, Null).err(), Some(AllocationError::OutOfMemory { size: 4, align: 4 }));
        assert!(ASlice::<u32, _>::try_with_capacity_in(0, Null).is_ok());
    }

    #[test] fn bounds() {
        let s = ASlice::<u32, Global>::try_from_array([1, 2, 3, 4, 5]).unwrap();
        assert_eq!(*s.get(s.len() - 1).unwrap(), 5);
        assert_eq!(s.get(s.len()), Err(OutOfRangeError::index(5, 5)));
        assert!(s.get(s.capacity()).is_err());
        assert!(s.get(usize::MAX).is_err());
    }

    #[test] fn get_mut() {
        let mut s = ASlice::<u32, Global>::try_from_array([1, 2, 3]).unwrap();
        *s.get_mut(1).unwrap() = 20;
        assert_eq!(s.as_slice(), [1, 20, 3]);
        assert!(s.get_mut(3).is_err());
    }

    #[test] fn moves_owned_items() {
        let mut src = [MoveOnly(1), MoveOnly(2), MoveOnly(3)];
        let s = ASlice::<MoveOnly, Global>::try_from_iter(src.iter_mut().map(MoveOnly::take)).unwrap();
        assert!(src.iter().all(MoveOnly::is_moved_from));
        assert_eq!(s.as_slice(), [MoveOnly(1), MoveOnly(2), MoveOnly(3)]);
    }

    #[test] fn clones_borrowed_items() {
        let src = [CloneOnly::new(1), CloneOnly::new(2)];
        let s = ASlice::<CloneOnly, Global>::try_from_iter(src.iter()).unwrap();
        assert!(src.iter().all(|c| c.clones() == 1));
        assert_eq!(s.as_slice().iter().map(|c| c.value).collect::<alloc::vec::Vec<_>>(), [1, 2]);
    }

    #[test] fn short_iter() {
        struct Liar(core::ops::Range<u32>);
        impl Iterator for Liar { type Item = u32; fn next(&mut self) -> Option<u32> { self.0.next() } }
        impl ExactSizeIterator for Liar { fn len(&self) -> usize { 4 } }

        let s = ASlice::<u32, Global>::try_from_iter(Liar(0 .. 2)).unwrap();
        assert_eq!((s.len(), s.capacity()), (2, 4));
        assert!(s.get(2).is_err());
    }

    #[test] fn long_iter_stops_at_reported_len() {
        struct Liar<'a>(&'a mut u32);
        impl Iterator for Liar<'_> { type Item = u32; fn next(&mut self) -> Option<u32> { *self.0 += 1; Some(*self.0) } }
        impl ExactSizeIterator for Liar<'_> { fn len(&self) -> usize { 3 } }

        let mut pulled = 0;
        let s = ASlice::<u32, Global>::try_from_iter(Liar(&mut pulled)).unwrap();
        assert_eq!(s.as_slice(), [1, 2, 3]);
        assert_eq!(pulled, 3);
    }

    #[test] fn fallible_unwinds() {
        let counting = Counting::new(Global);
        let items = [Ok(Tester::new(1)), Ok(Tester::new(2)), Err("bad"), Ok(Tester::new(4))];
        let err = ASlice::<Tester, _>::try_from_fallible_iter_in(items, &counting).unwrap_err();
        assert_eq!(err, ConstructError::Element(ElementConstructionError { index: 2, error: "bad" }));
        assert_eq!(Tester::live(), 0);
        assert_eq!(counting.outstanding(), 0);
    }

    #[test] fn fallible_alloc_fails() {
        let items = [Ok::<u8, ()>(1)];
        let err = ASlice::<u8, _>::try_from_fallible_iter_in(items, Null).unwrap_err();
        assert!(err.alloc().is_some());
    }

    #[test] fn from_fn() {
        let s = ASlice::<usize, Global>::try_from_fn(4, |i| Ok::<_, ()>(i * i)).unwrap();
        assert_eq!(s.as_slice(), [0, 1, 4, 9]);

        let counting = Counting::new(Global);
        let err = ASlice::<Tester, _>::try_from_fn_in(4, |i| if i < 3 { Ok(Tester::new(i as u8)) } else { Err(i) }, &counting).unwrap_err();
        assert_eq!(err.element().map(|e| (e.index, e.error)), Some((3, 3)));
        assert_eq!(Tester::live(), 0);
        assert_eq!(counting.outstanding(), 0);
    }

    #[test] fn panicking_clone_unwinds() {
        let counting = Counting::new(Global);
        let src = [Tester::new(7), Tester::new(7), Tester::new(7), Tester::new(7)];
        Tester::panic_after_clones(Some(2));
        let r = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            ASlice::<Tester, _>::try_from_slice_in(&src, &counting)
        }));
        Tester::panic_after_clones(None);
        assert!(r.is_err());
        assert_eq!(Tester::counts()[7], 4); // only `src` survives
        assert_eq!(counting.outstanding(), 0);
    }

    #[test] fn drops_in_order_once() {
        let counting = Counting::new(Global);
        let s = ASlice::<Tester, _>::try_from_array_in([Tester::new(3), Tester::new(1), Tester::new(2), Tester::new(2)], &counting).unwrap();
        assert_eq!(Tester::counts()[1 ..= 3], [1, 2, 1]);
        let _ = Tester::take_drop_order();
        drop(s);
        assert_eq!(Tester::take_drop_order(), [3, 1, 2, 2]);
        assert_eq!(Tester::live(), 0);
        assert_eq!(counting.outstanding(), 0);
        assert_eq!(counting.total(), 1);
    }

    #[test] fn truncate_keeps_capacity() {
        let mut s = ASlice::<Tester, Global>::try_from_array([Tester::new(1), Tester::new(2), Tester::new(3)]).unwrap();
        s.truncate(5);
        assert_eq!(s.len(), 3);
        s.truncate(1);
        assert_eq!((s.len(), s.capacity()), (1, 3));
        assert_eq!(Tester::counts()[1 ..= 3], [1, 0, 0]);
        s.clear();
        assert_eq!((s.len(), s.capacity()), (0, 3));
        assert_eq!(Tester::live(), 0);
    }

    #[test] fn set_len_after_spare_write() {
        let mut s = ASlice::<u32, Global>::try_with_capacity(3).unwrap();
        for (i, slot) in s.spare_capacity_mut().iter_mut().enumerate() { slot.write(i as u32 * 10); }
        // SAFETY: ✔️ all 3 slots were just written
        unsafe { s.set_len(3) };
        assert_eq!(s.as_slice(), [0, 10, 20]);
    }

    #[cfg(debug_assertions)]
    #[test] #[should_panic = "exceeds capacity"] fn set_len_past_capacity() {
        let mut s = ASlice::<u32, Global>::try_with_capacity(3).unwrap();
        // SAFETY: ❌ deliberately violates the precondition, caught by the debug check before anything is read
        unsafe { s.set_len(4) };
    }

    #[test] fn zst() {
        let s = ASlice::<(), _>::try_with_capacity_in(usize::MAX, Null).unwrap();
        assert_eq!((s.len(), s.capacity()), (0, usize::MAX));

        let s = ASlice::<(), _>::try_from_fn_in(1000, |_| Ok::<_, ()>(()), Null).unwrap();
        assert_eq!(s.len(), 1000);
        assert_eq!(s.get(999), Ok(&()));
    }

    #[test] fn subslices() {
        let mut s = ASlice::<u32, Global>::try_from_array([1, 2, 3, 4, 5]).unwrap();
        let v = s.subslice(1, 4).unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v.get(0), s.get(1));
        assert_eq!(s.subslice(2, 2).err(), Some(OutOfRangeError { start: 2, end: 2, len: 5 }));
        assert!(s.subslice(4, 2).is_err());
        assert!(s.subslice(5, 6).is_err());
        assert!(s.subslice(0, 5).is_ok());

        let mut v = s.subslice_mut(3, 5).unwrap();
        *v.get_mut(1).unwrap() = 50;
        assert_eq!(s.as_slice(), [1, 2, 3, 4, 50]);
    }
}
