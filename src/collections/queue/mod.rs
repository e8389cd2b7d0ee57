//! A module containing [`Queue`].
//!
//! [`Queue`] is also re-exported under the parent module.

mod queue;

pub use queue::*;
