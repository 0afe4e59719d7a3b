//! Rusty allocator traits operating on [`Layout`]s

use crate::*;

use core::alloc::Layout;
use core::mem::MaybeUninit;
#[cfg(doc)] use core::ptr::NonNull;



/// Allocation functions:<br>
/// <code>[alloc_uninit](Self::alloc_uninit)(layout: [Layout]) -> [Result]&lt;[NonNull]&lt;\_&gt;, \_&gt;</code><br>
/// <code>[alloc_zeroed](Self::alloc_zeroed)(layout: [Layout]) -> [Result]&lt;[NonNull]&lt;\_&gt;, \_&gt;</code><br>
/// <br>
///
/// [`ASlice`] never asks for zero-sized allocations: empty buffers and buffers of zero-sized elements use dangling pointers instead.
///
/// ## Safety
/// *   Allocations created by this trait must be compatible with [`Free`] on this allocator type.
/// *   Returned allocations must obey `layout` alignment and size.
pub unsafe trait Alloc : meta::Meta {
    /// Allocate at least `layout.size()` bytes of uninitialized memory aligned to `layout.align()`.
    ///
    /// The resulting allocation can typically be freed with <code>[Free]::[free](Free::free)</code>
    fn alloc_uninit(&self, layout: Layout) -> Result<AllocNN, Self::Error>;

    /// Allocate at least `layout.size()` bytes of zeroed memory aligned to `layout.align()`.
    ///
    /// The resulting allocation can typically be freed with <code>[Free]::[free](Free::free)</code>
    fn alloc_zeroed(&self, layout: Layout) -> Result<AllocNN0, Self::Error> {
        let alloc = self.alloc_uninit(layout)?;
        // SAFETY: ⚠️ `alloc` is non-null by type, `align` is 1/trivial, `layout.size()` was just allocated, size <= isize::MAX by Layout
        let all = unsafe { core::slice::from_raw_parts_mut(alloc.as_ptr(), layout.size()) };
        all.fill(MaybeUninit::new(0u8));
        Ok(alloc.cast())
    }
}

/// Deallocation function:<br>
/// <code>[free](Self::free)(ptr: [NonNull]&lt;\_&gt;, layout: [Layout])</code><br>
/// <br>
///
/// ## Safety
/// *   This trait must be able to free allocations made by [`Alloc`] on this allocator type.
pub unsafe trait Free : meta::Meta {
    /// Deallocate an allocation, `ptr`, belonging to `self`.
    ///
    /// ### Safety
    /// *   `ptr` must belong to `self`
    /// *   `ptr` will no longer be accessible after free
    /// *   `layout` must exactly match the [`Layout`] used to allocate `ptr`
    unsafe fn free(&self, ptr: AllocNN, layout: Layout);
}



#[allow(clippy::undocumented_unsafe_blocks)] // SAFETY: ✔️ same trait, same prereqs
unsafe impl<'a, A: Alloc> Alloc for &'a A {
    fn alloc_uninit(&self, layout: Layout) -> Result<AllocNN,  Self::Error> { A::alloc_uninit(self, layout) }
    fn alloc_zeroed(&self, layout: Layout) -> Result<AllocNN0, Self::Error> { A::alloc_zeroed(self, layout) }
}

#[allow(clippy::undocumented_unsafe_blocks)] // SAFETY: ✔️ same trait, same prereqs
unsafe impl<'a, A: Free> Free for &'a A {
    unsafe fn free(&self, ptr: AllocNN, layout: Layout) { unsafe { A::free(self, ptr, layout) } }
}



/// Testing functions to verify implementations of [`fat`] traits.
#[cfg(test)] pub mod test {
    use super::*;
    use crate::meta::Meta;

    /// Assert that allocations of every power-of-two alignment up to [`Meta::MAX_ALIGN`] (capped at 4 KiB) are honored.
    #[track_caller] pub fn alignment<A: Alloc + Free + Meta>(allocator: A) {
        let mut align = 1;
        while align <= A::MAX_ALIGN.min(4096) {
            for size in [1, align, 3*align] {
                let layout = Layout::from_size_align(size, align).unwrap();
                let alloc = allocator.alloc_uninit(layout).unwrap_or_else(|err| panic!("allocating {layout:?} failed: {err:?}"));
                assert_eq!(alloc.as_ptr() as usize % align, 0, "{layout:?} allocated misaligned at {alloc:?}");
                unsafe { allocator.free(alloc, layout) };
            }
            align *= 2;
        }
    }

    /// Assert that absurd sizes are rejected rather than "succeeding".
    #[track_caller] pub fn edge_case_sizes<A: Alloc + Free + Meta>(allocator: A) {
        for size in [usize::MAX/2 - 64, usize::MAX/2 + 1 - 16] {
            let Ok(layout) = Layout::from_size_align(size, 16) else { continue };
            if let Ok(alloc) = allocator.alloc_uninit(layout) {
                unsafe { allocator.free(alloc, layout) };
                panic!("allocating {size} bytes somehow succeeded");
            }
        }
    }

    /// Assert that [`Alloc::alloc_zeroed`] returns zeroed memory, even when recycling freshly dirtied memory.
    #[track_caller] pub fn zeroed_alloc<A: Alloc + Free + Meta>(allocator: A) {
        for size in [1, 2, 4, 8, 16, 32, 64, 128, 256, 4096] {
            let layout = Layout::from_size_align(size, 1).unwrap();
            let dirty = allocator.alloc_uninit(layout).unwrap();
            unsafe { dirty.as_ptr().write_bytes(0xFF, size) };
            unsafe { allocator.free(dirty, layout) };

            let zeroed = allocator.alloc_zeroed(layout).unwrap();
            let bytes = unsafe { core::slice::from_raw_parts(zeroed.as_ptr(), size) };
            assert!(bytes.iter().all(|b| *b == 0), "alloc_zeroed({size}) returned nonzero bytes");
            unsafe { allocator.free(zeroed.cast(), layout) };
        }
    }
}
