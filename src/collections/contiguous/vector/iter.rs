use std::mem::{self, ManuallyDrop, MaybeUninit};
use std::slice;

use super::Vector;
use crate::collections::contiguous::Array;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        // The Vector must not run its own Drop once the allocation has been handed over.
        let mut vec = ManuallyDrop::new(self);

        IntoIter {
            len: vec.len,
            arr: mem::replace(&mut vec.arr, Array::new()),
            front: 0,
        }
    }
}

/// An owning iterator over a [`Vector`]'s elements. Elements not consumed by the time the
/// iterator is dropped are dropped with it.
pub struct IntoIter<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) front: usize,
    pub(crate) len: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.len {
            return None;
        }

        let index = self.front;
        self.front += 1;

        // SAFETY: Slots in front..len are initialized and each is read exactly once.
        Some(unsafe { self.arr[index].assume_init_read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.len {
            return None;
        }

        self.len -= 1;

        // SAFETY: The slot at the new len was initialized and is now outside front..len, so it
        // can't be read again.
        Some(unsafe { self.arr[self.len].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
