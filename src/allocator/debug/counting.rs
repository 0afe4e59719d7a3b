use crate::*;
use crate::error::AllocationError;
use crate::meta::*;

use core::alloc::Layout;
use core::cell::Cell;
use core::fmt::{self, Debug, Formatter};



/// Wraps another allocator, counting outstanding allocations and bytes.
///
/// Usually passed by reference (`&Counting<A>`) so the counts can be inspected while slices still borrow the allocator.
/// Single threaded: the counters are [`Cell`]s.
///
/// ## Examples
/// ```
/// use islice::{ASlice, allocator::{alloc::Global, debug::Counting}};
/// let counting = Counting::new(Global);
/// let s = ASlice::<u32, _>::try_with_capacity_in(8, &counting).unwrap();
/// assert_eq!(counting.outstanding(), 1);
/// assert_eq!(counting.outstanding_bytes(), 32);
/// drop(s);
/// assert_eq!(counting.outstanding(), 0);
/// ```
pub struct Counting<A> {
    allocator:          A,
    outstanding:        Cell<usize>,
    outstanding_bytes:  Cell<usize>,
    total:              Cell<usize>,
    fail_after:         Cell<Option<usize>>,
}

impl<A> Counting<A> {
    pub const fn new(allocator: A) -> Self {
        Self {
            allocator,
            outstanding:        Cell::new(0),
            outstanding_bytes:  Cell::new(0),
            total:              Cell::new(0),
            fail_after:         Cell::new(None),
        }
    }

    /// Number of allocations not yet freed.
    pub fn outstanding(&self) -> usize { self.outstanding.get() }

    /// Number of bytes not yet freed.
    pub fn outstanding_bytes(&self) -> usize { self.outstanding_bytes.get() }

    /// Number of successful allocations ever made.
    pub fn total(&self) -> usize { self.total.get() }

    /// Allow `n` more allocations to succeed, then fail every allocation after.  `None` removes the limit.
    pub fn fail_after(&self, n: Option<usize>) { self.fail_after.set(n) }

    fn on_alloc(&self, layout: Layout) {
        self.outstanding.set(self.outstanding.get() + 1);
        self.outstanding_bytes.set(self.outstanding_bytes.get() + layout.size());
        self.total.set(self.total.get() + 1);
    }

    /// Returns `true` if this allocation should be failed instead of forwarded.
    fn should_fail(&self) -> bool {
        match self.fail_after.get() {
            Some(0) => true,
            Some(n) => { self.fail_after.set(Some(n-1)); false },
            None    => false,
        }
    }
}

impl<A: Default> Default for Counting<A> {
    fn default() -> Self { Self::new(A::default()) }
}

impl<A: Debug> Debug for Counting<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counting")
            .field("allocator", &self.allocator)
            .field("outstanding", &self.outstanding.get())
            .field("outstanding_bytes", &self.outstanding_bytes.get())
            .field("total", &self.total.get())
        .finish()
    }
}



// meta::*

impl<A: Meta> Meta for Counting<A> {
    type Error                  = A::Error;
    const MAX_ALIGN : usize     = A::MAX_ALIGN;
    const MAX_SIZE  : usize     = A::MAX_SIZE;
}



// fat::*

// SAFETY: ✔️ forwards to `A`, which upholds the same contract
unsafe impl<A: fat::Alloc> fat::Alloc for Counting<A> {
    fn alloc_uninit(&self, layout: Layout) -> Result<AllocNN, Self::Error> {
        if self.should_fail() { return Err(self.fail(layout)) }
        let alloc = self.allocator.alloc_uninit(layout)?;
        self.on_alloc(layout);
        Ok(alloc)
    }

    fn alloc_zeroed(&self, layout: Layout) -> Result<AllocNN0, Self::Error> {
        if self.should_fail() { return Err(self.fail(layout)) }
        let alloc = self.allocator.alloc_zeroed(layout)?;
        self.on_alloc(layout);
        Ok(alloc)
    }
}

impl<A: fat::Alloc> Counting<A> {
    /// Produce a failure for `layout` without involving `A`.
    fn fail(&self, layout: Layout) -> A::Error { AllocationError::out_of_memory(layout).into() }
}

// SAFETY: ✔️ forwards to `A`, which upholds the same contract
unsafe impl<A: fat::Free> fat::Free for Counting<A> {
    #[track_caller] unsafe fn free(&self, ptr: AllocNN, layout: Layout) {
        let Some(outstanding) = self.outstanding.get().checked_sub(1) else { bug::ub::freed_ptr_for_allocator(ptr) };
        self.outstanding.set(outstanding);
        self.outstanding_bytes.set(self.outstanding_bytes.get().saturating_sub(layout.size()));
        // SAFETY: ✔️ `ptr` belongs to `self.allocator` per [`fat::Free::free`]'s documented safety preconditions
        unsafe { self.allocator.free(ptr, layout) }
    }
}



#[cfg(feature = "alloc")] #[test] fn counts() {
    use crate::allocator::alloc::Global;
    use fat::{Alloc, Free};

    let counting = Counting::new(Global);
    let a = Layout::new::<u64>();
    let b = Layout::new::<[u8; 3]>();
    let pa = (&counting).alloc_uninit(a).unwrap();
    let pb = (&counting).alloc_zeroed(b).unwrap();
    assert_eq!(counting.outstanding(), 2);
    assert_eq!(counting.outstanding_bytes(), 11);
    unsafe { (&counting).free(pa, a) };
    unsafe { (&counting).free(pb.cast(), b) };
    assert_eq!(counting.outstanding(), 0);
    assert_eq!(counting.outstanding_bytes(), 0);
    assert_eq!(counting.total(), 2);
}

#[cfg(feature = "alloc")] #[test] fn fail_after() {
    use crate::allocator::alloc::Global;
    use fat::{Alloc, Free};

    let counting = Counting::new(Global);
    counting.fail_after(Some(1));
    let layout = Layout::new::<u32>();
    let p = counting.alloc_uninit(layout).unwrap();
    assert_eq!(counting.alloc_uninit(layout).unwrap_err(), AllocationError::OutOfMemory { size: 4, align: 4 });
    assert!(counting.alloc_zeroed(layout).is_err());
    unsafe { counting.free(p, layout) };
    counting.fail_after(None);
    let p = counting.alloc_uninit(layout).unwrap();
    unsafe { counting.free(p, layout) };
    assert_eq!(counting.total(), 2);
}

#[cfg(feature = "alloc")] #[test] #[should_panic = "already freed"] fn double_free() {
    use crate::allocator::alloc::Global;
    use fat::{Alloc, Free};

    let counting = Counting::new(Global);
    let layout = Layout::new::<u32>();
    let p = counting.alloc_uninit(layout).unwrap();
    unsafe { counting.free(p, layout) };
    unsafe { counting.free(p, layout) };
}
