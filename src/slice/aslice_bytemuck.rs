use crate::fat::*;
use crate::slice::{ASlice, RawBuf};

use bytemuck::Zeroable;



impl<T: Zeroable, A: Alloc + Free> ASlice<T, A> {
    /// Allocate `len` elements initialized to `0` using `allocator`.  `len() == capacity() == len`.
    ///
    /// ## Failure Modes
    /// *   Fails to compile on impossible alignments (e.g. 4 KiB aligned pages via 8/16 byte aligned malloc)
    /// *   Returns <code>[Err]\(...\)</code> when out of memory
    ///
    /// ## Examples
    /// ```
    /// use islice::{ASlice, allocator::{alloc::Global, debug::Null}};
    /// let s = ASlice::<u32, _>::try_new_zeroed_in(4, Global).unwrap();
    /// assert_eq!(s.as_slice(), [0, 0, 0, 0]);
    ///
    /// let err = ASlice::<u32, _>::try_new_zeroed_in(4, Null).unwrap_err();
    /// ```
    pub fn try_new_zeroed_in(len: usize, allocator: A) -> Result<Self, A::Error> {
        let buf = RawBuf::try_alloc_zeroed(len, allocator)?;
        // SAFETY: ✔️ `T` is `Zeroable`, so every zeroed slot is a valid `T`
        Ok(unsafe { ASlice::from_raw_buf(buf, len) })
    }

    pub fn try_new_zeroed(len: usize) -> Result<Self, A::Error> where A : Default { Self::try_new_zeroed_in(len, A::default()) }
    #[cfg(feature = "panicy-memory")] pub fn new_zeroed_in(len: usize, allocator: A) -> Self { Self::try_new_zeroed_in(len, allocator).expect("out of memory") }
    #[cfg(feature = "panicy-memory")] pub fn new_zeroed(   len: usize) -> Self where A : Default { Self::try_new_zeroed(len).expect("out of memory") }
}



#[cfg(feature = "alloc")] #[test] fn zeroed() {
    use crate::allocator::{alloc::Global, debug::{Counting, Null}};

    let counting = Counting::new(Global);
    let s = ASlice::<[u16; 3], _>::try_new_zeroed_in(5, &counting).unwrap();
    assert_eq!((s.len(), s.capacity()), (5, 5));
    assert!(s.as_slice().iter().all(|e| *e == [0; 3]));
    assert_eq!(counting.outstanding_bytes(), 30);
    drop(s);
    assert_eq!(counting.outstanding(), 0);

    assert!(ASlice::<u8, _>::try_new_zeroed_in(1, Null).is_err());
    assert_eq!(ASlice::<u8, _>::try_new_zeroed_in(0, Null).map(|s| s.len()), Ok(0));
    assert_eq!(ASlice::<(), _>::try_new_zeroed_in(7, Null).map(|s| s.len()), Ok(7));
}
