#![cfg(feature = "panicy-bounds")]

use crate::fat::Free;
use crate::slice::{ASlice, SliceView, SliceViewMut};

use core::ops::{Index, IndexMut};



impl<T, A: Free> Index<usize> for ASlice<T, A> {
    type Output = T;
    #[track_caller] fn index(&self, index: usize) -> &T { self.get(index).unwrap_or_else(|err| panic!("{err}")) }
}

impl<T, A: Free> IndexMut<usize> for ASlice<T, A> {
    #[track_caller] fn index_mut(&mut self, index: usize) -> &mut T { self.get_mut(index).unwrap_or_else(|err| panic!("{err}")) }
}

impl<T> Index<usize> for SliceView<'_, T> {
    type Output = T;
    #[track_caller] fn index(&self, index: usize) -> &T { self.get(index).unwrap_or_else(|err| panic!("{err}")) }
}

impl<T> Index<usize> for SliceViewMut<'_, T> {
    type Output = T;
    #[track_caller] fn index(&self, index: usize) -> &T { self.get(index).unwrap_or_else(|err| panic!("{err}")) }
}

impl<T> IndexMut<usize> for SliceViewMut<'_, T> {
    #[track_caller] fn index_mut(&mut self, index: usize) -> &mut T { self.get_mut(index).unwrap_or_else(|err| panic!("{err}")) }
}



#[cfg(feature = "alloc")] #[test] fn index() {
    use crate::allocator::alloc::Global;
    let mut s = ASlice::<u32, Global>::try_from_array([1, 2, 3]).unwrap();
    s[1] += 10;
    assert_eq!(s[1], 12);
    let mut v = s.subslice_mut(1, 3).unwrap();
    v[1] = 30;
    assert_eq!(v.view()[1], 30);
    assert_eq!(s.as_slice(), [1, 12, 30]);
}

#[cfg(feature = "alloc")] #[test] #[should_panic = "index 3 out of range for slice of length 3"] fn index_past_len() {
    use crate::allocator::alloc::Global;
    let s = ASlice::<u32, Global>::try_from_array([1, 2, 3]).unwrap();
    let _value = s[3];
}

#[cfg(feature = "alloc")] #[test] #[should_panic = "index 0 out of range for slice of length 0"] fn index_within_capacity() {
    use crate::allocator::alloc::Global;
    let s = ASlice::<u32, Global>::try_with_capacity(4).unwrap();
    let _value = s[0];
}
