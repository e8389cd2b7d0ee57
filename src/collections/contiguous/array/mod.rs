//! A module containing [`Array`], the heap allocation primitive behind every contiguous structure
//! in this crate, including the hash map's bucket table.

mod array;

pub use array::*;
