//! [`AllocationError`], [`OutOfRangeError`], [`ConstructError`] (and friends)

use core::fmt::{self, Debug, Display, Formatter};



/// Storage for a slice could not be obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)] pub enum AllocationError {
    /// The allocator returned nothing for a request of `size` bytes aligned to `align`.
    OutOfMemory { size: usize, align: usize },

    /// The request was too large to even describe as a [`Layout`](core::alloc::Layout).
    ExcessiveSliceRequested(ExcessiveSliceRequestedError),
}

impl AllocationError {
    pub(crate) fn out_of_memory(layout: core::alloc::Layout) -> Self { Self::OutOfMemory { size: layout.size(), align: layout.align() } }
}

impl Display for AllocationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory { size, align }       => write!(f, "unable to allocate {size} bytes aligned to {align}"),
            Self::ExcessiveSliceRequested(err)      => Display::fmt(err, f),
        }
    }
}

impl From<ExcessiveSliceRequestedError> for AllocationError { fn from(err: ExcessiveSliceRequestedError) -> Self { Self::ExcessiveSliceRequested(err) } }
#[cfg(feature = "std")] impl std::error::Error for AllocationError {}



/// A [`Layout`](core::alloc::Layout) for `requested` elements would overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)] pub struct ExcessiveSliceRequestedError {
    pub requested: usize,
}

impl Display for ExcessiveSliceRequestedError { fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { write!(f, "requested {} elements, which overflows the address space", self.requested) } }
#[cfg(feature = "std")] impl std::error::Error for ExcessiveSliceRequestedError {}



/// A view was requested over a null pointer with a nonzero length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)] pub struct InvalidArgumentError {
    pub len: usize,
}

impl Display for InvalidArgumentError { fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { write!(f, "a view cannot be null if its length ({}) is greater than zero", self.len) } }
#[cfg(feature = "std")] impl std::error::Error for InvalidArgumentError {}



/// An index (`start .. start+1`) or range (`start .. end`) was out of bounds for a slice of length `len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)] pub struct OutOfRangeError {
    pub start:  usize,
    pub end:    usize,
    pub len:    usize,
}

impl OutOfRangeError {
    pub(crate) fn index(index: usize, len: usize) -> Self { Self { start: index, end: index.saturating_add(1), len } }
}

impl Display for OutOfRangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self { start, end, len } = *self;
        if end == start.wrapping_add(1) {
            write!(f, "index {start} out of range for slice of length {len}")
        } else {
            write!(f, "range {start}..{end} out of range for slice of length {len}")
        }
    }
}

#[cfg(feature = "std")] impl std::error::Error for OutOfRangeError {}



/// Constructing the element at `index` failed with `error`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)] pub struct ElementConstructionError<E> {
    pub index:  usize,
    pub error:  E,
}

impl<E: Display> Display for ElementConstructionError<E> { fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { write!(f, "constructing element {} failed: {}", self.index, self.error) } }
#[cfg(feature = "std")] impl<E: std::error::Error + 'static> std::error::Error for ElementConstructionError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> { Some(&self.error) }
}



/// Multi-element construction failed, either allocating the buffer (`AE`) or constructing an element (`E`).
///
/// Either way, nothing constructed so far survives: placed elements were dropped and the buffer was freed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)] pub enum ConstructError<E, AE> {
    Alloc(AE),
    Element(ElementConstructionError<E>),
}

impl<E, AE> ConstructError<E, AE> {
    /// The allocator error, if that's what failed.
    pub fn alloc(&self) -> Option<&AE> { match self { Self::Alloc(err) => Some(err), Self::Element(_) => None } }

    /// The element error, if that's what failed.
    pub fn element(&self) -> Option<&ElementConstructionError<E>> { match self { Self::Alloc(_) => None, Self::Element(err) => Some(err) } }
}

impl<E: Display, AE: Display> Display for ConstructError<E, AE> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alloc(err)    => Display::fmt(err, f),
            Self::Element(err)  => Display::fmt(err, f),
        }
    }
}

#[cfg(feature = "std")] impl<E: std::error::Error + 'static, AE: std::error::Error + 'static> std::error::Error for ConstructError<E, AE> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Alloc(err)    => Some(err),
            Self::Element(err)  => Some(err),
        }
    }
}



#[cfg(feature = "alloc")] #[test] fn display() {
    use alloc::string::ToString;
    assert_eq!(OutOfRangeError::index(5, 5).to_string(), "index 5 out of range for slice of length 5");
    assert_eq!(OutOfRangeError { start: 2, end: 2, len: 5 }.to_string(), "range 2..2 out of range for slice of length 5");
    assert_eq!(InvalidArgumentError { len: 3 }.to_string(), "a view cannot be null if its length (3) is greater than zero");
    assert_eq!(AllocationError::OutOfMemory { size: 16, align: 8 }.to_string(), "unable to allocate 16 bytes aligned to 8");
    let err : ConstructError<&str, AllocationError> = ConstructError::Element(ElementConstructionError { index: 1, error: "nope" });
    assert_eq!(err.to_string(), "constructing element 1 failed: nope");
    assert!(err.alloc().is_none());
    assert_eq!(err.element().map(|e| e.index), Some(1));
}
