#![allow(unused_variables)]

use crate::*;
use crate::error::AllocationError;

use core::alloc::Layout;



/// Never allocates anything.
///
/// Useful for exercising allocation failure paths: every [`ASlice`] constructor that needs a buffer fails with [`AllocationError`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)] pub struct Null;

impl meta::Meta for Null {
    type Error                  = AllocationError;
    const MAX_ALIGN : usize     = usize::MAX/2+1;
    const MAX_SIZE  : usize     = usize::MAX;
}



// fat::*

// SAFETY: ✔️ always failing to allocate is a trivally safe implementation of this trait
unsafe impl fat::Alloc for Null {
    fn alloc_uninit(&self, layout: Layout) -> Result<AllocNN, Self::Error> { Err(AllocationError::out_of_memory(layout)) }
    fn alloc_zeroed(&self, layout: Layout) -> Result<AllocNN0, Self::Error> { Err(AllocationError::out_of_memory(layout)) }
}

// SAFETY: ✔️ this trait cannot be safely called, and simply panicing in response is a reasonable response to the caller's UB
unsafe impl fat::Free for Null {
    #[track_caller] #[inline(never)] unsafe fn free(&self, ptr: AllocNN, layout: Layout) {
        bug::ub::invalid_ptr_for_allocator(ptr)
    }
}



#[test] fn alloc_fails() {
    let layout = Layout::new::<u32>();
    assert_eq!(fat::Alloc::alloc_uninit(&Null, layout).unwrap_err(), AllocationError::OutOfMemory { size: 4, align: 4 });
    assert!(fat::Alloc::alloc_zeroed(&Null, layout).is_err());
}

#[test] #[should_panic = "doesn't belong to this allocator"] fn free_panics() {
    unsafe { fat::Free::free(&Null, core::ptr::NonNull::dangling(), Layout::new::<u32>()) }
}
