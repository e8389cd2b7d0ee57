//! Linked collections: a box-owned [`SinglyLinkedList`] and a pointer-linked
//! [`DoublyLinkedList`].

pub mod doubly;
pub mod singly;

#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use singly::SinglyLinkedList;
