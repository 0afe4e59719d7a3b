/// Like [`panic!`], but meant for undefined behavior which might be worth using [`core::hint::unreachable_unchecked`] on in the future.
macro_rules! ub {
    ( $($tt:tt)* ) => {{
        $crate::_macros::maybe_eventually_sometimes_unreachable();
        panic!($($tt)*);
    }};
}



/// ### Safety
///
/// In the future, this may be equivalent to [`core::hint::unreachable_unchecked`] in some builds.
pub unsafe fn maybe_eventually_sometimes_unreachable() {}



/// Construct an [`ASlice`](crate::ASlice) from a fixed list of values, moving each value into the new buffer.
///
/// Expands to <code>[ASlice::try_from_array]\(\[...\]\)</code> (or [`try_from_array_in`](crate::ASlice::try_from_array_in) for the `in allocator;` form),
/// so the result is a <code>[Result]&lt;[ASlice](crate::ASlice), \_&gt;</code>.
///
/// ## Examples
/// ```
/// use islice::{aslice, ASlice, allocator::alloc::Global};
/// let s : ASlice<u32, Global> = aslice![1, 2, 3, 4, 5].unwrap();
/// assert_eq!(s.len(), 5);
/// assert_eq!(s.capacity(), 5);
/// assert_eq!(*s.get(2).unwrap(), 3);
///
/// let s = aslice![in Global; "a", "b"].unwrap();
/// assert_eq!(s.as_slice(), ["a", "b"]);
/// ```
///
/// [ASlice::try_from_array]: crate::ASlice::try_from_array
#[macro_export] macro_rules! aslice {
    ( in $allocator:expr; $($value:expr),* $(,)? ) => {
        $crate::ASlice::try_from_array_in([$($value),*], $allocator)
    };
    ( $($value:expr),* $(,)? ) => {
        $crate::ASlice::try_from_array([$($value),*])
    };
}
