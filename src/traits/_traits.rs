//! Allocator traits

pub mod meta;
pub mod fat;
