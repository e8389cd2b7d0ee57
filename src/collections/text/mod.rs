//! A module containing [`Text`].
//!
//! [`Text`] is also re-exported under the parent module.

mod text;

pub use text::*;
