use crate::fat::*;
use crate::slice::{ASlice, SliceView, SliceViewMut};

use core::fmt::{self, Debug, Display, Formatter};



impl<T: Debug, A: Free + Debug> Debug for ASlice<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ASlice")
            .field("allocator", self.allocator())
            .field("capacity", &self.capacity())
            .field("data", &self.as_slice())
        .finish()
    }
}

impl<T: Debug> Debug for SliceView<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.debug_tuple("SliceView").field(&self.as_slice()).finish() }
}

impl<T: Debug> Debug for SliceViewMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.debug_tuple("SliceViewMut").field(&self.as_slice()).finish() }
}



/// Human readable listing of elements, one per line, as returned by `dump()`.
///
/// Not a stable format.
///
/// ## Examples
/// ```
/// use islice::{ASlice, allocator::alloc::Global};
/// let s = ASlice::<u32, Global>::try_from_array([1, 2, 3]).unwrap();
/// assert_eq!(s.dump().to_string(), "1\n2\n3\n");
/// assert_eq!(s.subslice(1, 2).unwrap().dump().to_string(), "2\n");
/// ```
#[derive(Clone, Copy)] pub struct Dump<'a, T>(&'a [T]);

impl<T: Display> Display for Dump<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for element in self.0 { writeln!(f, "{element}")? }
        Ok(())
    }
}

impl<T: Display> Debug for Dump<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { Display::fmt(self, f) }
}

impl<T: Display, A: Free> ASlice<T, A> {
    /// Display every live element on its own line.
    pub fn dump(&self) -> Dump<'_, T> { Dump(self.as_slice()) }

    /// Write [`dump`](Self::dump) to stdout.
    #[cfg(feature = "std")] pub fn print(&self) { std::print!("{}", self.dump()) }
}

impl<'a, T: Display> SliceView<'a, T> {
    /// Display every element on its own line.
    pub fn dump(&self) -> Dump<'a, T> { Dump(self.as_slice()) }

    /// Write [`dump`](Self::dump) to stdout.
    #[cfg(feature = "std")] pub fn print(&self) { std::print!("{}", self.dump()) }
}

impl<T: Display> SliceViewMut<'_, T> {
    /// Display every element on its own line.
    pub fn dump(&self) -> Dump<'_, T> { Dump(self.as_slice()) }

    /// Write [`dump`](Self::dump) to stdout.
    #[cfg(feature = "std")] pub fn print(&self) { std::print!("{}", self.dump()) }
}



#[cfg(feature = "alloc")] #[test] fn formats() {
    use crate::allocator::alloc::Global;
    use alloc::format;

    let mut s = ASlice::<u8, Global>::try_with_capacity(3).unwrap();
    assert_eq!(format!("{}", s.dump()), "");
    s.spare_capacity_mut()[0].write(7);
    // SAFETY: ✔️ slot 0 was just written
    unsafe { s.set_len(1) };
    assert_eq!(format!("{}", s.dump()), "7\n");
    assert_eq!(format!("{s:?}"), "ASlice { allocator: Global, capacity: 3, data: [7] }");
    assert_eq!(format!("{:?}", s.view()), "SliceView([7])");
}
