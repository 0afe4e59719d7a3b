use crate::*;
use crate::error::AllocationError;
use crate::meta::*;

use core::alloc::Layout;
use core::ptr::NonNull;



/// Use <code>[alloc::alloc]::{[alloc](alloc::alloc::alloc), [alloc_zeroed](alloc::alloc::alloc_zeroed), [dealloc](alloc::alloc::dealloc)}</code>
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)] #[repr(transparent)] pub struct Global;



// meta::*

impl Meta for Global {
    type Error                  = AllocationError;
    const MAX_ALIGN : usize     = usize::MAX/2+1;
    const MAX_SIZE  : usize     = usize::MAX/2;
}



// fat::*

// SAFETY: ✔️ all `impl fat::* for Global` are compatible with each other and return allocations compatible with their alignments
unsafe impl fat::Alloc for Global {
    fn alloc_uninit(&self, layout: Layout) -> Result<AllocNN, Self::Error> {
        match layout.size() {
            // SAFETY: ✔️ violation of fat::Alloc's documented contract that zero sized layouts are never requested
            0                       => unsafe { ub!("bug: undefined behavior: zero sized allocations are never requested through fat::Alloc ({layout:?})") },
            n if n > Self::MAX_SIZE => Err(AllocationError::out_of_memory(layout)),
            _ => {
                // SAFETY: ✔️ we just ensured `layout` has a valid (nonzero, <= isize::MAX) size
                let alloc = unsafe { alloc::alloc::alloc(layout) };
                NonNull::new(alloc.cast()).ok_or(AllocationError::out_of_memory(layout))
            }
        }
    }

    fn alloc_zeroed(&self, layout: Layout) -> Result<AllocNN0, Self::Error> {
        match layout.size() {
            // SAFETY: ✔️ violation of fat::Alloc's documented contract that zero sized layouts are never requested
            0                       => unsafe { ub!("bug: undefined behavior: zero sized allocations are never requested through fat::Alloc ({layout:?})") },
            n if n > Self::MAX_SIZE => Err(AllocationError::out_of_memory(layout)),
            _ => {
                // SAFETY: ✔️ we just ensured `layout` has a nonzero size
                let alloc = unsafe { alloc::alloc::alloc_zeroed(layout) };
                NonNull::new(alloc).ok_or(AllocationError::out_of_memory(layout))
            }
        }
    }
}

// SAFETY: ✔️ all `impl fat::* for Global` are compatible with each other and return allocations compatible with their alignments
unsafe impl fat::Free for Global {
    unsafe fn free(&self, ptr: AllocNN, layout: Layout) {
        // SAFETY: ✔️ `ptr` belongs to `self` and `layout` describes the allocation per [`fat::Free::free`]'s documented safety preconditions
        unsafe { alloc::alloc::dealloc(ptr.as_ptr().cast(), layout) }
    }
}



#[test] fn fat_alignment()          { fat::test::alignment(Global) }
#[test] fn fat_edge_case_sizes()    { fat::test::edge_case_sizes(Global) }
#[test] fn fat_zeroed()             { fat::test::zeroed_alloc(Global) }
