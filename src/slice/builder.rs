use crate::fat::*;
use crate::slice::{ASlice, RawBuf};

use core::mem::ManuallyDrop;



/// Places elements into a [`RawBuf`] front to back.
///
/// Until [`finish`](Self::finish)ed, dropping the builder (including while unwinding out of a panicking `Clone`) drops exactly the
/// elements placed so far and then frees the buffer, so a failed construction leaves nothing behind.
pub(crate) struct Builder<T, A: Free> {
    buf:    RawBuf<T, A>,
    placed: usize,
}

impl<T, A: Free> Drop for Builder<T, A> {
    fn drop(&mut self) {
        let placed = core::ptr::slice_from_raw_parts_mut(self.buf.as_ptr(), self.placed);
        self.placed = 0;
        // SAFETY: ✔️ slots `[0, placed)` were initialized by `place_unchecked` and have not been handed off to an `ASlice`
        unsafe { placed.drop_in_place() };
        // `self.buf` frees the memory when it's dropped right after this
    }
}

impl<T, A: Free> Builder<T, A> {
    pub fn new(buf: RawBuf<T, A>) -> Self { Self { buf, placed: 0 } }

    pub fn try_new_in(capacity: usize, allocator: A) -> Result<Self, A::Error> where A : Alloc { Ok(Self::new(RawBuf::try_alloc(capacity, allocator)?)) }

    #[inline(always)] pub fn placed(&self) -> usize { self.placed }
    #[inline(always)] pub fn is_full(&self) -> bool { self.placed >= self.buf.capacity() }

    /// Move `value` into the next slot.
    ///
    /// ### Safety
    /// *   `!self.is_full()`
    pub unsafe fn place_unchecked(&mut self, value: T) {
        debug_assert!(!self.is_full(), "bug: placed more elements than the buffer has capacity for");
        // SAFETY: ✔️ slot `placed` is within capacity per the documented precondition, and uninitialized as it hasn't been placed yet
        unsafe { self.buf.as_ptr().add(self.placed).write(value) };
        self.placed += 1;
    }

    /// Move `value` into the next slot, or hand it back if the buffer is full.
    #[cfg(test)] pub fn place(&mut self, value: T) -> Result<(), T> {
        if self.is_full() { return Err(value) }
        // SAFETY: ✔️ just checked
        unsafe { self.place_unchecked(value) };
        Ok(())
    }

    /// Disarm the cleanup, handing the buffer and every placed element to a new [`ASlice`].
    pub fn finish(self) -> ASlice<T, A> {
        let this    = ManuallyDrop::new(self);
        let placed  = this.placed;
        // SAFETY: ✔️ `this.buf` will never be read again, including for Drop
        let buf     = unsafe { core::ptr::read(&this.buf) };
        // SAFETY: ✔️ `[0, placed)` were initialized by `place_unchecked`, and `placed <= capacity`
        unsafe { ASlice::from_raw_buf(buf, placed) }
    }
}



#[cfg(feature = "alloc")] #[test] fn drop_unwinds_placed() {
    use crate::allocator::{alloc::Global, debug::Counting};
    use crate::util::drop::Tester;

    let counting = Counting::new(Global);
    let mut b = Builder::try_new_in(4, &counting).unwrap();
    b.place(Tester::new(1)).unwrap();
    b.place(Tester::new(2)).unwrap();
    assert_eq!(b.placed(), 2);
    assert_eq!(Tester::live(), 2);
    drop(b);
    assert_eq!(Tester::live(), 0);
    assert_eq!(counting.outstanding(), 0);
}

#[cfg(feature = "alloc")] #[test] fn place_when_full() {
    use crate::allocator::alloc::Global;
    let mut b = Builder::try_new_in(1, Global).unwrap();
    assert_eq!(b.place(1u8), Ok(()));
    assert!(b.is_full());
    assert_eq!(b.place(2u8), Err(2));
    let s = b.finish();
    assert_eq!(s.as_slice(), [1]);
}
