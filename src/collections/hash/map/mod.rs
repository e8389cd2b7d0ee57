//! A module containing [`HashMap`] and associated types.
//!
//! Alongside the map itself are the owned and borrowed [`Iterator`] types over entries, keys or
//! values, and [`Traverser`], the map's implementation of the crate-wide
//! [`Traverse`](crate::traverse::Traverse) protocol.
//!
//! As a note, there is no mutable iterator over entries or keys because mutating the keys of a
//! HashMap in place would cause a logic error.
//!
//! [`HashMap`] is also re-exported under the parent module.

mod hash_map;
mod iter;
mod tests;
mod traverse;

pub use hash_map::*;
pub use iter::*;
pub use traverse::*;
