use std::marker::PhantomData;

use super::{DoublyLinkedList, Node, NodeRef};
use crate::util::option::OptionExtension;

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            head: self.head,
            tail: self.tail,
            remaining: self.len,
            _phantom: PhantomData,
        }
    }
}

pub struct Iter<'a, T> {
    pub(crate) head: NodeRef<T>,
    pub(crate) tail: NodeRef<T>,
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.remaining = self.remaining.checked_sub(1)?;

        // UNREACHABLE: remaining was non-zero, so the cursor references a node.
        let ptr = unsafe { self.head.unreachable() };
        // SAFETY: The node is live for 'a; the list is immutably borrowed for the same region.
        let node = unsafe { &*ptr.as_ptr() };
        self.head = node.next;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.remaining = self.remaining.checked_sub(1)?;

        // UNREACHABLE: remaining was non-zero, so the cursor references a node.
        let ptr = unsafe { self.tail.unreachable() };
        // SAFETY: As for next.
        let node = unsafe { &*ptr.as_ptr() };
        self.tail = node.prev;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            head: self.head,
            tail: self.tail,
            remaining: self.len,
            _phantom: PhantomData,
        }
    }
}

pub struct IterMut<'a, T> {
    pub(crate) head: NodeRef<T>,
    pub(crate) tail: NodeRef<T>,
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.remaining = self.remaining.checked_sub(1)?;

        // UNREACHABLE: remaining was non-zero, so the cursor references a node.
        let ptr = unsafe { self.head.unreachable() };
        // SAFETY: Each node is yielded at most once (the cursors never cross thanks to the
        // remaining count), so no value is mutably aliased.
        let node = unsafe { &mut *ptr.as_ptr() };
        self.head = node.next;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.remaining = self.remaining.checked_sub(1)?;

        // UNREACHABLE: remaining was non-zero, so the cursor references a node.
        let ptr = unsafe { self.tail.unreachable() };
        // SAFETY: As for next.
        let node = unsafe { &mut *ptr.as_ptr() };
        self.tail = node.prev;
        Some(&mut node.value)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

pub struct IntoIter<T>(pub(crate) DoublyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
