use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ptr::NonNull;

use super::{Iter, IterMut};
use crate::collections::contiguous::Vector;
use crate::util::fmt::DebugRaw;

/// A list with links in both directions, providing `O(1)` operations at both ends. The backing
/// store for [`Queue`](crate::collections::Queue).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the list.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` / `back` | `O(1)` |
/// | `push_front` / `push_back` | `O(1)` |
/// | `pop_front` / `pop_back` | `O(1)` |
/// | `append` | `O(1)` |
/// | `contains` | `O(n)` |
///
/// As a general note, modern computer architecture favours contiguous collections: every `O(n)`
/// walk here is mostly cache misses, so
/// [`Vector`](crate::collections::contiguous::Vector) should be preferred unless the `O(1)`
/// end operations are being heavily utilized.
pub struct DoublyLinkedList<T> {
    pub(crate) head: NodeRef<T>,
    pub(crate) tail: NodeRef<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<Box<Node<T>>>,
}

pub(crate) type NodeRef<T> = Option<NonNull<Node<T>>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: NodeRef<T>,
    pub next: NodeRef<T>,
}

impl<T> DoublyLinkedList<T> {
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            head: None,
            tail: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        // SAFETY: head always references a live node owned by this list.
        self.head.map(|node| unsafe { &node.as_ref().value })
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: As for front, with exclusive access through &mut self.
        self.head.map(|mut node| unsafe { &mut node.as_mut().value })
    }

    pub fn back(&self) -> Option<&T> {
        // SAFETY: tail always references a live node owned by this list.
        self.tail.map(|node| unsafe { &node.as_ref().value })
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: As for back, with exclusive access through &mut self.
        self.tail.map(|mut node| unsafe { &mut node.as_mut().value })
    }

    pub fn push_front(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node {
            value,
            prev: None,
            next: self.head,
        })));

        match self.head {
            // SAFETY: The old head is a live node; its prev was None.
            Some(mut head) => unsafe { head.as_mut().prev = Some(node) },
            None => self.tail = Some(node),
        }

        self.head = Some(node);
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node {
            value,
            prev: self.tail,
            next: None,
        })));

        match self.tail {
            // SAFETY: The old tail is a live node; its next was None.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head?;

        // SAFETY: Every node was leaked from a Box in push_front/push_back and is reclaimed
        // exactly once, here or in pop_back.
        let node = unsafe { Box::from_raw(node.as_ptr()) };

        self.head = node.next;
        match self.head {
            // SAFETY: The new head is a live node; its prev pointed at the removed node.
            Some(mut head) => unsafe { head.as_mut().prev = None },
            None => self.tail = None,
        }

        self.len -= 1;
        Some(node.value)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let node = self.tail?;

        // SAFETY: As for pop_front.
        let node = unsafe { Box::from_raw(node.as_ptr()) };

        self.tail = node.prev;
        match self.tail {
            // SAFETY: The new tail is a live node; its next pointed at the removed node.
            Some(mut tail) => unsafe { tail.as_mut().next = None },
            None => self.head = None,
        }

        self.len -= 1;
        Some(node.value)
    }

    /// Moves all elements of `other` onto the end of self in `O(1)`, leaving `other`'s allocation
    /// count unchanged (nodes are relinked, not copied).
    pub fn append(&mut self, other: DoublyLinkedList<T>) {
        // The donor list must not drop the nodes it is donating.
        let other = ManuallyDrop::new(other);

        match (self.tail, other.head) {
            (None, _) => {
                self.head = other.head;
                self.tail = other.tail;
                self.len = other.len;
            },
            (_, None) => {},
            (Some(mut tail), Some(mut head)) => {
                // SAFETY: Both boundary nodes are live; their outward links were None.
                unsafe {
                    tail.as_mut().next = Some(head);
                    head.as_mut().prev = Some(tail);
                }
                self.tail = other.tail;
                self.len += other.len;
            },
        }
    }

    /// Removes (and drops) every element.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Walks the chain asserting that every backward link mirrors its forward link. Test support.
    #[allow(unused)]
    pub(crate) fn verify_links(&self) {
        let mut prev: NodeRef<T> = None;
        let mut curr = self.head;
        let mut count = 0;

        while let Some(node) = curr {
            // SAFETY: Forward links only reference live nodes owned by this list.
            let node_ref = unsafe { node.as_ref() };
            assert!(node_ref.prev == prev, "Backward link should mirror the forward link.");
            prev = curr;
            curr = node_ref.next;
            count += 1;
        }

        assert!(self.tail == prev, "Tail should reference the final node.");
        assert_eq!(self.len, count, "Length should equal the number of reachable nodes.");
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|value| value == item)
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        DoublyLinkedList::new()
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &DebugRaw(format!("{self}")))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vector<String>>()
                .join(") <-> (")
        )
    }
}
