use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::contiguous::Vector;
use crate::collections::linked::doubly::{self, DoublyLinkedList};

/// A first-in first-out queue over a [`DoublyLinkedList`], enqueueing at the back and dequeueing
/// from the front.
///
/// # Time Complexity
/// Every method is `O(1)` except iteration and drop, which are `O(n)` for `n` items.
#[derive(PartialEq, Eq, Default)]
pub struct Queue<T> {
    items: DoublyLinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates a new Queue without allocating.
    pub const fn new() -> Queue<T> {
        Queue {
            items: DoublyLinkedList::new(),
        }
    }

    /// Returns the number of items in the Queue.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the Queue holds no items.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `value` to the back of the Queue.
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes and returns the front item, or None if the Queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns a reference to the item which [`dequeue`](Queue::dequeue) would remove next.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns a mutable reference to the front item.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.items.front_mut()
    }

    /// Returns a reference to the most recently enqueued item.
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    /// Returns a mutable reference to the most recently enqueued item.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.items.back_mut()
    }

    /// Moves every item of `other` to the back of this Queue, leaving `other` empty.
    pub fn append(&mut self, other: Queue<T>) {
        self.items.append(other.items);
    }

    /// Removes (and drops) every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over the items in dequeue order, from the front of the Queue back.
    pub fn iter(&self) -> doubly::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> From<DoublyLinkedList<T>> for Queue<T> {
    /// Adopts the list as the backing store, its front becoming the front of the Queue.
    fn from(items: DoublyLinkedList<T>) -> Queue<T> {
        Queue {
            items,
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: DoublyLinkedList::from_iter(iter),
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = doubly::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = doubly::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("items", &self.items)
            .finish()
    }
}

impl<T: Debug> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Front item first, matching dequeue order.
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vector<String>>()
                .join(") < (")
        )
    }
}
