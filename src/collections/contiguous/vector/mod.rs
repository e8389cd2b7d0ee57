//! A module containing [`Vector`] and its iteration types.

mod iter;
mod tests;
mod traverse;
mod vector;

pub use iter::*;
pub use traverse::*;
pub use vector::*;
