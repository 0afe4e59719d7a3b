use crate::*;
use crate::error::AllocationError;
use crate::meta::*;

use libc::*;

use core::alloc::Layout;
use core::ptr::NonNull;



/// [`malloc`](https://en.cppreference.com/w/c/memory/malloc) / [`calloc`] / [`free`]
///
/// | Rust                          | C                     |
/// | ------------------------------| ----------------------|
/// | [`fat::Alloc::alloc_uninit`]  | [`malloc`](https://en.cppreference.com/w/c/memory/malloc) |
/// | [`fat::Alloc::alloc_zeroed`]  | [`calloc`]            |
/// | [`fat::Free::free`]           | [`free`]              |
///
/// Alignments above [`Meta::MAX_ALIGN`] are rejected at compile time by [`ASlice`](crate::ASlice), and at runtime (with an [`Err`]) by [`fat::Alloc`].
///
/// [`calloc`]: https://en.cppreference.com/w/c/memory/calloc
/// [`free`]:   https://en.cppreference.com/w/c/memory/free
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)] #[repr(transparent)] pub struct Malloc;



// meta::*

impl Meta for Malloc {
    type Error = AllocationError;

    /// | Platform          | Value     |
    /// | ------------------| ----------|
    /// | Windows 32-bit    | [`8` according to Microsoft](https://learn.microsoft.com/en-us/cpp/c-runtime-library/reference/malloc#return-value)
    /// | Windows 64-bit    | [`16` according to Microsoft](https://learn.microsoft.com/en-us/cpp/c-runtime-library/reference/malloc#return-value)
    /// | C11               | <code>[_Alignof](https://en.cppreference.com/w/c/language/_Alignof)\([max_align_t](https://en.cppreference.com/w/c/types/max_align_t)\)</code>
    ///
    /// Many systems allow the developer to customize their implementation of `malloc`.
    /// Such custom implementations *could* provide less alignment than those described above.
    /// I consider such a thing to be a bug *by the customizer*, likely to break a lot more than the code relying on this `MAX_ALIGN`.
    const MAX_ALIGN : usize = if cfg!(target_env = "msvc") {
        if core::mem::size_of::<usize>() >= 8 { 16 } else { 8 }
    } else {
        #[cfg(any(target_env = "msvc", not(any(target_os = "linux", target_os = "android"))))] #[allow(non_camel_case_types)] type max_align_t = f64;
        core::mem::align_of::<max_align_t>()
    };

    const MAX_SIZE : usize = usize::MAX/2;
}



// fat::*

// SAFETY: ✔️ `malloc` / `calloc` return exclusive allocations aligned for any fundamental type (≤ `MAX_ALIGN`), compatible with `free`
unsafe impl fat::Alloc for Malloc {
    #[track_caller] fn alloc_uninit(&self, layout: Layout) -> Result<AllocNN, Self::Error> {
        if layout.align() > Self::MAX_ALIGN || layout.size() > Self::MAX_SIZE { return Err(AllocationError::out_of_memory(layout)) }
        debug_assert!(layout.size() > 0, "bug: zero sized allocations are never requested through fat::Alloc");
        // SAFETY: ✔️ this "should" be safe for all `size`
        let alloc = unsafe { malloc(layout.size()) };
        NonNull::new(alloc.cast()).ok_or(AllocationError::out_of_memory(layout))
    }

    #[track_caller] fn alloc_zeroed(&self, layout: Layout) -> Result<AllocNN0, Self::Error> {
        if layout.align() > Self::MAX_ALIGN || layout.size() > Self::MAX_SIZE { return Err(AllocationError::out_of_memory(layout)) }
        debug_assert!(layout.size() > 0, "bug: zero sized allocations are never requested through fat::Alloc");
        // SAFETY: ✔️ this "should" be safe for all `size`
        // SAFETY: ✔️ `calloc` zeros memory
        let alloc = unsafe { calloc(1, layout.size()) };
        NonNull::new(alloc.cast()).ok_or(AllocationError::out_of_memory(layout))
    }
}

// SAFETY: ✔️ `free` is compatible with `malloc` / `calloc` (C89 § 7.20.3.2 ¶ 2)
unsafe impl fat::Free for Malloc {
    #[track_caller] unsafe fn free(&self, ptr: AllocNN, _layout: Layout) {
        // SAFETY: ✔️ `ptr` belongs to `self` per [`fat::Free::free`]'s documented safety preconditions
        unsafe { free(ptr.as_ptr().cast()) }
    }
}



#[test] fn fat_alignment()              { fat::test::alignment(Malloc) }
#[test] fn fat_edge_case_sizes()        { fat::test::edge_case_sizes(Malloc) }
#[test] fn fat_zeroed()                 { fat::test::zeroed_alloc(Malloc) }
#[test] fn fat_over_align()             { assert!(fat::Alloc::alloc_uninit(&Malloc, Layout::from_size_align(8, Malloc::MAX_ALIGN * 2).unwrap()).is_err()) }
