use crate::error::{InvalidArgumentError, OutOfRangeError};

use core::ops::Range;



/// Validate a nonempty sub-range `[start, end)` of a slice of length `len`.
pub(crate) fn check_range(start: usize, end: usize, len: usize) -> Result<Range<usize>, OutOfRangeError> {
    if start < end && end <= len { Ok(start .. end) } else { Err(OutOfRangeError { start, end, len }) }
}



/// A shared, non-owning view over existing storage.
///
/// Dropping a view never drops or frees anything.  `capacity() == len()` as the view has no spare slots.
///
/// ## Examples
/// ```
/// use islice::SliceView;
/// let storage = [10, 20, 30];
/// let v = SliceView::new(&storage);
/// assert_eq!(v.len(), 3);
/// assert_eq!(*v.get(1).unwrap(), 20);
/// assert_eq!(v.subslice(1, 3).unwrap().as_slice(), [20, 30]);
/// ```
#[derive(PartialEq, Eq, Hash)] pub struct SliceView<'a, T> {
    data: &'a [T],
}

impl<T> Clone for SliceView<'_, T> { fn clone(&self) -> Self { *self } }
impl<T> Copy for SliceView<'_, T> {}

impl<'a, T> SliceView<'a, T> {
    pub const fn new(data: &'a [T]) -> Self { Self { data } }

    /// View `len` elements starting at `ptr`.
    ///
    /// ### Safety
    /// *   If `ptr` is non-null, it must be valid for reads of `len` initialized `T`s for `'a`, as per [`core::slice::from_raw_parts`]
    ///
    /// ### Errors
    /// *   [`InvalidArgumentError`] if `ptr` is null and `len > 0`.  A null `ptr` with `len == 0` is an empty view.
    pub unsafe fn from_raw_parts(ptr: *const T, len: usize) -> Result<Self, InvalidArgumentError> {
        if ptr.is_null() {
            if len == 0 { Ok(Self::new(&[])) } else { Err(InvalidArgumentError { len }) }
        } else {
            // SAFETY: ✔️ per this function's documented safety preconditions
            Ok(Self::new(unsafe { core::slice::from_raw_parts(ptr, len) }))
        }
    }

    #[inline(always)] pub fn as_ptr(&self) -> *const T { self.data.as_ptr() }
    #[inline(always)] pub fn as_slice(&self) -> &'a [T] { self.data }
    #[inline(always)] pub fn capacity(&self) -> usize { self.data.len() }
    #[inline(always)] pub fn is_empty(&self) -> bool { self.data.is_empty() }
    #[inline(always)] pub fn len(&self) -> usize { self.data.len() }

    pub fn get(&self, index: usize) -> Result<&'a T, OutOfRangeError> { self.data.get(index).ok_or(OutOfRangeError::index(index, self.len())) }

    /// View `[start, end)` of this view.  Requires `start < end <= self.len()`.
    pub fn subslice(&self, start: usize, end: usize) -> Result<SliceView<'a, T>, OutOfRangeError> { (*self).into_subslice(start, end) }

    pub(crate) fn into_subslice(self, start: usize, end: usize) -> Result<SliceView<'a, T>, OutOfRangeError> {
        let range = check_range(start, end, self.len())?;
        Ok(Self::new(&self.data[range]))
    }
}

impl<'a, T> From<&'a [T]> for SliceView<'a, T> { fn from(data: &'a [T]) -> Self { Self::new(data) } }
impl<T> AsRef<[T]> for SliceView<'_, T> { fn as_ref(&self) -> &[T] { self.data } }



/// An exclusive, non-owning view over existing storage.
///
/// Elements can be modified in place, but never dropped or freed by the view.
#[derive(PartialEq, Eq, Hash)] pub struct SliceViewMut<'a, T> {
    data: &'a mut [T],
}

impl<'a, T> SliceViewMut<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self { Self { data } }

    /// Mutably view `len` elements starting at `ptr`.
    ///
    /// ### Safety
    /// *   If `ptr` is non-null, it must be valid for reads and writes of `len` initialized `T`s for `'a`, and not aliased, as per [`core::slice::from_raw_parts_mut`]
    ///
    /// ### Errors
    /// *   [`InvalidArgumentError`] if `ptr` is null and `len > 0`.  A null `ptr` with `len == 0` is an empty view.
    pub unsafe fn from_raw_parts_mut(ptr: *mut T, len: usize) -> Result<Self, InvalidArgumentError> {
        if ptr.is_null() {
            if len == 0 { Ok(Self::new(&mut [])) } else { Err(InvalidArgumentError { len }) }
        } else {
            // SAFETY: ✔️ per this function's documented safety preconditions
            Ok(Self::new(unsafe { core::slice::from_raw_parts_mut(ptr, len) }))
        }
    }

    #[inline(always)] pub fn as_ptr(&self) -> *const T { self.data.as_ptr() }
    #[inline(always)] pub fn as_mut_ptr(&mut self) -> *mut T { self.data.as_mut_ptr() }
    #[inline(always)] pub fn as_slice(&self) -> &[T] { &*self.data }
    #[inline(always)] pub fn as_slice_mut(&mut self) -> &mut [T] { self.data }
    #[inline(always)] pub fn capacity(&self) -> usize { self.data.len() }
    #[inline(always)] pub fn is_empty(&self) -> bool { self.data.is_empty() }
    #[inline(always)] pub fn len(&self) -> usize { self.data.len() }

    /// Reborrow as a shared [`SliceView`].
    pub fn view(&self) -> SliceView<'_, T> { SliceView::new(&*self.data) }

    pub fn get(&self, index: usize) -> Result<&T, OutOfRangeError> { self.view().get(index) }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfRangeError> {
        let len = self.len();
        self.data.get_mut(index).ok_or(OutOfRangeError::index(index, len))
    }

    /// View `[start, end)` of this view.  Requires `start < end <= self.len()`.
    pub fn subslice(&self, start: usize, end: usize) -> Result<SliceView<'_, T>, OutOfRangeError> { self.view().into_subslice(start, end) }

    /// Mutably view `[start, end)` of this view.  Requires `start < end <= self.len()`.
    pub fn subslice_mut(&mut self, start: usize, end: usize) -> Result<SliceViewMut<'_, T>, OutOfRangeError> {
        let range = check_range(start, end, self.len())?;
        Ok(SliceViewMut::new(&mut self.data[range]))
    }

    pub(crate) fn into_subslice_mut(self, start: usize, end: usize) -> Result<SliceViewMut<'a, T>, OutOfRangeError> {
        let range = check_range(start, end, self.len())?;
        Ok(SliceViewMut::new(&mut self.data[range]))
    }
}

impl<'a, T> From<&'a mut [T]> for SliceViewMut<'a, T> { fn from(data: &'a mut [T]) -> Self { Self::new(data) } }
impl<T> AsRef<[T]> for SliceViewMut<'_, T> { fn as_ref(&self) -> &[T] { &*self.data } }
impl<T> AsMut<[T]> for SliceViewMut<'_, T> { fn as_mut(&mut self) -> &mut [T] { self.data } }



#[test] fn ranges() {
    assert_eq!(check_range(1, 4, 5), Ok(1 .. 4));
    assert_eq!(check_range(0, 5, 5), Ok(0 .. 5));
    assert!(check_range(2, 2, 5).is_err());
    assert!(check_range(3, 2, 5).is_err());
    assert!(check_range(4, 6, 5).is_err());
    assert!(check_range(5, 6, 5).is_err());
    assert!(check_range(0, 1, 0).is_err());
}

#[test] fn copy_without_copy_elements() {
    use alloc::string::{String, ToString};

    let storage : [String; 3] = ["a", "b", "c"].map(|s| s.to_string());
    let v = SliceView::new(&storage);
    let w = v;
    assert_eq!(v.subslice(1, 2).unwrap().as_slice(), ["b"]);
    assert_eq!(w.len(), 3);
    assert_eq!(w.clone().get(2).map(String::as_str), Ok("c"));
}

#[test] fn null_views() {
    // SAFETY: ✔️ null is always rejected or turned into an empty view
    let v = unsafe { SliceView::<u32>::from_raw_parts(core::ptr::null(), 0) }.unwrap();
    assert!(v.is_empty());
    // SAFETY: ✔️ null is always rejected or turned into an empty view
    assert_eq!(unsafe { SliceView::<u32>::from_raw_parts(core::ptr::null(), 3) }, Err(InvalidArgumentError { len: 3 }));
    // SAFETY: ✔️ null is always rejected or turned into an empty view
    assert!(unsafe { SliceViewMut::<u32>::from_raw_parts_mut(core::ptr::null_mut(), 1) }.is_err());
}

#[test] fn view_leaves_storage_alone() {
    use crate::util::drop::Tester;

    let mut storage = [Tester::new(3), Tester::new(4)];
    // SAFETY: ✔️ `storage` outlives the views, which don't alias each other
    let v = unsafe { SliceView::from_raw_parts(storage.as_ptr(), storage.len()) }.unwrap();
    assert_eq!(v.get(1).map(|t| t.get()), Ok(4));
    {
        let mut v = SliceViewMut::new(&mut storage);
        v.get_mut(0).unwrap().clone_from(&Tester::new(5));
        let sub = v.subslice(1, 2).unwrap();
        assert_eq!(sub.len(), 1);
    }
    assert_eq!(Tester::counts()[3 ..= 5], [0, 1, 1]);
    assert_eq!(storage.iter().map(|t| t.get()).collect::<alloc::vec::Vec<_>>(), [5, 4]);
}
