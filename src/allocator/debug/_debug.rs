//! [`Null`], [`Counting`]

mod counting;       pub use counting::Counting;
mod null;           pub use null::Null;
