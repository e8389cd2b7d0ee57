use std::fmt::{self, Debug, Display, Formatter};

use super::{Iter, IterMut};
use crate::collections::contiguous::Vector;
use crate::util::fmt::DebugRaw;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;

/// A list with links in one direction, where each node owns its successor.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the list.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `push_back` | `O(n)` |
/// | `get` | `O(i)` |
/// | `contains` | `O(n)` |
/// | `reverse` | `O(n)` |
///
/// With only forward links, back-of-list operations have to walk the chain; see
/// [`DoublyLinkedList`](crate::collections::linked::DoublyLinkedList) when both ends need to be
/// cheap.
pub struct SinglyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            head: None,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    pub fn push_front(&mut self, value: T) {
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// Appends `value` at the end of the list by walking the whole chain.
    pub fn push_back(&mut self, value: T) {
        let mut tail = &mut self.head;
        while let Some(node) = tail {
            tail = &mut node.next;
        }

        *tail = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(&self.seek(index)?.value)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        let mut curr = self.head.as_deref_mut();
        for _ in 0..index {
            curr = curr.and_then(|node| node.next.as_deref_mut());
        }

        // UNREACHABLE: The chain holds len nodes and index was bounds checked above.
        let node = unsafe { curr.unreachable() };
        Ok(&mut node.value)
    }

    /// Reverses the list in place by flipping each link once.
    pub fn reverse(&mut self) {
        let mut reversed = None;
        while let Some(mut node) = self.head.take() {
            self.head = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub(crate) fn seek(&self, index: usize) -> Result<&Node<T>, IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        let mut curr = self.head.as_deref();
        for _ in 0..index {
            curr = curr.and_then(|node| node.next.as_deref());
        }

        // UNREACHABLE: The chain holds len nodes and index was bounds checked above.
        Ok(unsafe { curr.unreachable() })
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|value| value == item)
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Dropping the head box directly would recurse through every successor.
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        SinglyLinkedList::new()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = &mut self.head;
        while let Some(node) = tail {
            tail = &mut node.next;
        }

        for value in iter {
            tail = &mut tail.insert(Box::new(Node { value, next: None })).next;
            self.len += 1;
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &DebugRaw(format!("{self}")))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vector<String>>()
                .join(") -> (")
        )
    }
}
