//! A module containing [`Stack`].
//!
//! [`Stack`] is also re-exported under the parent module.

mod stack;

pub use stack::*;
