//! [`ASlice`] (owning, fixed capacity) and [`SliceView`] / [`SliceViewMut`] (borrowing)

mod raw;                    pub(crate) use raw::RawBuf;
mod builder;                pub(crate) use builder::Builder;
mod element;                pub use element::*;

mod aslice;                 pub use aslice::*;
mod aslice_bytemuck;
mod aslice_clone;
mod aslice_fmt;             pub use aslice_fmt::Dump;
mod aslice_index;
mod view;                   pub use view::*;
