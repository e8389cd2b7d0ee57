//! A module containing [`DoublyLinkedList`] and its iteration types.

mod doubly_linked_list;
mod iter;

pub use doubly_linked_list::*;
pub use iter::*;
