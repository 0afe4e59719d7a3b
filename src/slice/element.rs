/// Items that can become a `T` in a new slice: owned `T`s are moved, borrowed `&T`s are cloned.
///
/// This is the compile-time "prefer move, fall back to copy" policy of the sequence constructors
/// ([`ASlice::try_from_iter_in`](crate::ASlice::try_from_iter_in) and friends):
///
/// | Item          | Requires      | Source afterwards |
/// | --------------| --------------| ------------------|
/// | `T`           |               | consumed (moved-from)
/// | `&T`          | `T: Clone`    | untouched
/// | `&mut T`      | `T: Clone`    | untouched
///
/// Anything else fails to compile:
///
/// ```compile_fail,E0277
/// # use islice::{ASlice, allocator::alloc::Global};
/// struct NeitherMoveNorClone;
/// let src = [NeitherMoveNorClone, NeitherMoveNorClone];
/// // won't compile - `&NeitherMoveNorClone` can't be cloned into an owned element
/// let s = ASlice::<NeitherMoveNorClone, Global>::try_from_iter(src.iter());
/// ```
pub trait Element<T> {
    fn into_element(self) -> T;
}

impl<T> Element<T> for T {
    #[inline(always)] fn into_element(self) -> T { self }
}

impl<T: Clone> Element<T> for &'_ T {
    #[inline(always)] fn into_element(self) -> T { self.clone() }
}

impl<T: Clone> Element<T> for &'_ mut T {
    #[inline(always)] fn into_element(self) -> T { self.clone() }
}



#[test] fn move_or_clone() {
    use crate::util::drop::{CloneOnly, MoveOnly};

    let moved : MoveOnly = MoveOnly(3).into_element();
    assert_eq!(moved, MoveOnly(3));

    let original = CloneOnly::new(4);
    let cloned : CloneOnly = (&original).into_element();
    assert_eq!(cloned.value, 4);
    assert_eq!(original.clones(), 1);
}
