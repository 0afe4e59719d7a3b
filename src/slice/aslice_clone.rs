use crate::fat::*;
use crate::slice::{ASlice, Builder};



#[cfg(feature = "panicy-memory")] impl<T: Clone, A: Alloc + Free + Clone> Clone for ASlice<T, A> {
    /// Allocate a new slice of the same capacity that clones every live element of `self`, using `self.allocator().clone()`
    ///
    /// ## Failure Modes
    /// *   [`panic!`]s when out of memory
    fn clone(&self) -> Self { self.try_clone().expect("out of memory") }
}

/// Non-panicing alternatives to [`Clone`].
impl<T: Clone, A: Free> ASlice<T, A> {
    /// Allocate a new slice of the same capacity that clones every live element of `self`, using `self.allocator().clone()`
    ///
    /// All-or-nothing: if a [`Clone`] panics, the clones made so far are dropped and the new buffer is freed.
    ///
    /// ## Examples
    /// ```
    /// use islice::{ASlice, allocator::alloc::Global};
    /// let a = ASlice::<String, Global>::try_with_capacity(3).unwrap();
    /// let b = a.try_clone().unwrap();
    /// assert_eq!((b.len(), b.capacity()), (0, 3));
    /// ```
    pub fn try_clone(&self) -> Result<Self, A::Error> where A : Alloc + Clone { self.try_clone_in(self.allocator().clone()) }

    /// Like [`try_clone`](Self::try_clone), but the copy lives in `allocator`.
    pub fn try_clone_in<B: Alloc + Free>(&self, allocator: B) -> Result<ASlice<T, B>, B::Error> {
        let mut b = Builder::try_new_in(self.capacity(), allocator)?;
        for value in self.as_slice() {
            // SAFETY: ✔️ `len <= capacity`, so we run out of live elements before the builder fills up
            unsafe { b.place_unchecked(value.clone()) };
        }
        Ok(b.finish())
    }
}



#[cfg(feature = "alloc")] #[test] fn try_clone() {
    use crate::allocator::{alloc::Global, debug::{Counting, Null}};
    use crate::util::drop::Tester;

    let counting = Counting::new(Global);
    let mut a = ASlice::<Tester, _>::try_with_capacity_in(4, &counting).unwrap();
    let spare = a.spare_capacity_mut();
    spare[0].write(Tester::new(1));
    spare[1].write(Tester::new(2));
    // SAFETY: ✔️ 2 slots written
    unsafe { a.set_len(2) };

    let b = a.try_clone().unwrap();
    assert_eq!((b.len(), b.capacity()), (2, 4));
    assert_eq!(b.as_slice().iter().map(|t| t.get()).collect::<alloc::vec::Vec<_>>(), [1, 2]);
    assert_eq!(counting.outstanding(), 2);
    assert!(a.try_clone_in(Null).is_err());

    Tester::panic_after_clones(Some(1));
    let r = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| a.try_clone()));
    Tester::panic_after_clones(None);
    assert!(r.is_err());
    assert_eq!(Tester::counts()[1 ..= 2], [2, 2]);
    assert_eq!(counting.outstanding(), 2);

    drop((a, b));
    assert_eq!(Tester::live(), 0);
    assert_eq!(counting.outstanding(), 0);
}
