//! The collection types of this crate, grouped by storage family.

pub mod contiguous;
pub mod hash;
pub mod linked;
pub mod queue;
pub mod stack;
pub mod text;

#[doc(inline)]
pub use contiguous::{Array, Vector};
#[doc(inline)]
pub use hash::{HashMap, HashSet};
#[doc(inline)]
pub use linked::{DoublyLinkedList, SinglyLinkedList};
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;
#[doc(inline)]
pub use text::Text;
