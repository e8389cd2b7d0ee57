//! Hashed collections: the separate-chaining [`HashMap`] and the [`HashSet`] built over it.

pub mod map;
pub mod set;

#[doc(inline)]
pub use map::HashMap;
#[doc(inline)]
pub use set::HashSet;
