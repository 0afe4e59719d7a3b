use crate::*;
use crate::error::ExcessiveSliceRequestedError;
use crate::fat::*;

use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem::{align_of, size_of, MaybeUninit};
use core::ptr::NonNull;



/// An uninitialized buffer of `capacity` slots for `T`, owned by `allocator`.
///
/// Never drops any `T` - tracking which slots are live is the owner's job.  Dropping a [`RawBuf`] only returns the memory.
///
/// | `capacity`    | `size_of::<T>()`  | `data`                    |
/// | --------------| ------------------| --------------------------|
/// | `0`           | any               | [`None`] (no buffer)      |
/// | `1..`         | `0`               | dangling, never freed     |
/// | `1..`         | `1..`             | allocated via `allocator` |
pub(crate) struct RawBuf<T, A: Free> {
    data:       Option<NonNull<T>>,
    capacity:   usize,
    allocator:  A,
    _phantom:   PhantomData<T>,
}

// SAFETY: ✔️ (T, A) are Send
unsafe impl<T: Send, A: Free + Send> Send for RawBuf<T, A> {}
// SAFETY: ✔️ (T, A) are Sync
unsafe impl<T: Sync, A: Free + Sync> Sync for RawBuf<T, A> {}

impl<T, A: Free> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        let Some(data) = self.data else { return };
        let layout = self.layout();
        if layout.size() == 0 { return }
        // SAFETY: ✔️ we previously allocated `data` with `(self.allocator, layout)` and will never access that allocation again
        unsafe { self.allocator.free(data.cast(), layout) };
    }
}

impl<T, A: Free> RawBuf<T, A> {
    /// If you hit this assertion, `A` can never allocate memory sufficiently aligned for `T`.
    pub(crate) const ASSERT_A_CAN_ALLOC_T : () = {
        assert!(A::MAX_ALIGN.is_power_of_two(), "A::MAX_ALIGN is not a power of two - the allocator's metadata is corrupt");
        assert!(align_of::<T>() <= A::MAX_ALIGN, "align_of::<T>() > A::MAX_ALIGN - the allocator cannot allocate memory sufficiently aligned for instances of T on it's own");
    };

    /// No buffer at all.  Never touches `allocator`.
    pub fn empty(allocator: A) -> Self { Self { data: None, capacity: 0, allocator, _phantom: PhantomData } }

    #[inline(always)] pub fn allocator(&self) -> &A { &self.allocator }
    #[inline(always)] pub fn capacity(&self) -> usize { self.capacity }
    #[inline(always)] pub fn has_buffer(&self) -> bool { self.data.is_some() }

    /// Pointer to slot `0`.  Dangling (but aligned) if there is no buffer.
    #[inline(always)] pub fn as_ptr(&self) -> *mut T { self.data.unwrap_or(NonNull::dangling()).as_ptr() }

    /// Every slot, live or not.
    pub fn as_uninit_slice_mut(&mut self) -> &mut [MaybeUninit<T>] {
        let data = self.data.unwrap_or(NonNull::dangling()).cast::<MaybeUninit<T>>();
        let mut slots = util::nn::slice_from_raw_parts(data, self.capacity);
        // SAFETY: ✔️ `data` is aligned and valid for `capacity` slots (or dangling with `capacity == 0`), and `&mut self` guarantees exclusivity
        unsafe { slots.as_mut() }
    }

    fn layout(&self) -> Layout {
        // SAFETY: ✔️ `Layout::array::<T>(self.capacity)` succeeded when the buffer was allocated, and neither has changed since
        unsafe { Layout::from_size_align_unchecked(size_of::<T>() * self.capacity, align_of::<T>()) }
    }

    fn array_layout(capacity: usize) -> Result<Layout, ExcessiveSliceRequestedError> {
        Layout::array::<T>(capacity).map_err(|_| ExcessiveSliceRequestedError { requested: capacity })
    }

    fn try_alloc_with(capacity: usize, allocator: A, alloc: impl FnOnce(&A, Layout) -> Result<NonNull<T>, A::Error>) -> Result<Self, A::Error> {
        let _ = Self::ASSERT_A_CAN_ALLOC_T;
        if capacity == 0 { return Ok(Self::empty(allocator)) }
        let layout = Self::array_layout(capacity)?;
        let data = if layout.size() == 0 { NonNull::dangling() } else { alloc(&allocator, layout)? };
        Ok(Self { data: Some(data), capacity, allocator, _phantom: PhantomData })
    }

    /// Allocate `capacity` uninitialized slots.
    pub fn try_alloc(capacity: usize, allocator: A) -> Result<Self, A::Error> where A : Alloc {
        Self::try_alloc_with(capacity, allocator, |a, layout| Ok(a.alloc_uninit(layout)?.cast()))
    }

    /// Allocate `capacity` zeroed slots.
    pub fn try_alloc_zeroed(capacity: usize, allocator: A) -> Result<Self, A::Error> where A : Alloc {
        Self::try_alloc_with(capacity, allocator, |a, layout| Ok(a.alloc_zeroed(layout)?.cast()))
    }
}



#[cfg(feature = "alloc")] #[test] fn empty_never_allocates() {
    use crate::allocator::debug::{Counting, Null};
    let counting = Counting::new(Null);
    let b = RawBuf::<u32, _>::try_alloc(0, &counting).unwrap();
    assert!(!b.has_buffer());
    assert_eq!(b.capacity(), 0);
    assert_eq!(counting.total(), 0);
}

#[cfg(feature = "alloc")] #[test] fn zst_never_allocates() {
    use crate::allocator::debug::Null;
    let mut b = RawBuf::<(), _>::try_alloc(usize::MAX, Null).unwrap();
    assert!(b.has_buffer());
    assert_eq!(b.as_uninit_slice_mut().len(), usize::MAX);
}

#[cfg(feature = "alloc")] #[test] fn excessive() {
    use crate::allocator::alloc::Global;
    use crate::error::AllocationError;
    let err = RawBuf::<u64, _>::try_alloc(usize::MAX/4, Global).err().unwrap();
    assert_eq!(err, AllocationError::ExcessiveSliceRequested(ExcessiveSliceRequestedError { requested: usize::MAX/4 }));
}

#[cfg(feature = "alloc")] #[test] fn frees_once() {
    use crate::allocator::{alloc::Global, debug::Counting};
    let counting = Counting::new(Global);
    let b = RawBuf::<u16, _>::try_alloc(7, &counting).unwrap();
    assert_eq!(counting.outstanding_bytes(), 14);
    drop(b);
    assert_eq!(counting.outstanding(), 0);
}
