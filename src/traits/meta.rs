//! Metadata traits common to all (de)allocators

use crate::error::*;

use core::fmt::Debug;



/// Allocator metadata (max allocation size/alignment, error type, etc.)
pub trait Meta {
    /// The error type returned from failed allocation.
    ///
    /// [`ASlice`](crate::ASlice) constructors surface this directly, so every built-in allocator uses [`AllocationError`].
    /// Wrappers like [`Counting`](crate::allocator::debug::Counting) build their own out-of-memory failures via `From<AllocationError>`.
    type Error : Debug + From<ExcessiveSliceRequestedError> + From<AllocationError>;

    /// Indicates the maximum alignment this allocator should be expected to succeed in allocating.
    /// Must be a power of two.
    ///
    /// [`ASlice<T, Self>`](crate::ASlice) fails to compile when `align_of::<T>()` exceeds this.
    ///
    /// | Allocator                                         | Value     |
    /// | --------------------------------------------------| ----------|
    /// | [`Global`](crate::allocator::alloc::Global)       | <code>[usize::MAX]/2+1</code>
    /// | [`Malloc`](crate::allocator::c::Malloc)           | <code>align_of::&lt;[max_align_t](https://en.cppreference.com/w/c/types/max_align_t)&gt;()</code> (or [`f64`] where unavailable)
    /// | [`Null`](crate::allocator::debug::Null)           | <code>[usize::MAX]/2+1</code> (never allocates anyways)
    const MAX_ALIGN : usize;

    /// Indicates the maximum size this allocator should be expected to succeed in allocating.
    /// Requesting an allocation larger than this is almost certainly a bug.
    const MAX_SIZE : usize;
}

impl<'a, A: Meta> Meta for &'a A {
    type Error                      = A::Error;
    const MAX_ALIGN     : usize     = A::MAX_ALIGN;
    const MAX_SIZE      : usize     = A::MAX_SIZE;
}
