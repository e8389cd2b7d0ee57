use std::hash::{BuildHasher, Hash};
use std::mem::{self, ManuallyDrop};
use std::ptr;
use std::slice;

use super::{Bucket, Entry, HashMap};
use crate::collections::contiguous::Array;

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a HashMap<K, V, B> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            buckets: self.buckets.iter(),
            entry: None,
            remaining: self.len,
        }
    }
}

/// A borrowed iterator over a map's entries, in bucket-then-chain order.
pub struct Iter<'a, K, V> {
    pub(crate) buckets: slice::Iter<'a, Bucket<K, V>>,
    pub(crate) entry: Option<&'a Entry<K, V>>,
    pub(crate) remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.entry {
                Some(entry) => {
                    self.entry = entry.next.as_deref();
                    self.remaining -= 1;
                    return Some((&entry.key, &entry.value));
                },
                None => self.entry = self.buckets.next()?.as_deref(),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K: Hash + Eq, V, B: BuildHasher> IntoIterator for HashMap<K, V, B> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        // The map must not run its own Drop once the bucket table has been handed over.
        let mut map = ManuallyDrop::new(self);
        let buckets = mem::replace(&mut map.buckets, Array::new());

        // SAFETY: The map is never used or dropped again, so reading the hasher out to drop it
        // here doesn't duplicate it.
        drop(unsafe { ptr::read(&map.hasher) });

        IntoIter {
            remaining: map.len,
            buckets,
            index: 0,
            chain: None,
        }
    }
}

/// An owning iterator over a map's entries. Entries not consumed by the time the iterator is
/// dropped are dropped with it.
pub struct IntoIter<K, V> {
    pub(crate) buckets: Array<Bucket<K, V>>,
    pub(crate) index: usize,
    pub(crate) chain: Bucket<K, V>,
    pub(crate) remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(mut entry) = self.chain.take() {
                self.chain = entry.next.take();
                self.remaining -= 1;
                let entry = *entry;
                return Some((entry.key, entry.value));
            }

            if self.index == self.buckets.size() {
                return None;
            }

            self.chain = self.buckets[self.index].take();
            self.index += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> Drop for IntoIter<K, V> {
    fn drop(&mut self) {
        // Consume the rest so chains unlink iteratively instead of recursing through Box drops.
        for _ in self.by_ref() {}
    }
}

/// A mutable iterator over a map's values. Keys stay immutable: rewriting one in place would
/// desynchronize it from its bucket.
pub struct ValuesMut<'a, K, V> {
    pub(crate) buckets: slice::IterMut<'a, Bucket<K, V>>,
    pub(crate) entry: Option<&'a mut Entry<K, V>>,
    pub(crate) remaining: usize,
}

impl<'a, K: Hash + Eq, V> ValuesMut<'a, K, V> {
    pub(crate) fn new<B: BuildHasher>(map: &'a mut HashMap<K, V, B>) -> ValuesMut<'a, K, V> {
        ValuesMut {
            remaining: map.len,
            buckets: map.buckets.iter_mut(),
            entry: None,
        }
    }
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.entry.take() {
                Some(entry) => {
                    // Splitting the borrow through the pattern lets the value escape while the
                    // link stays with the iterator.
                    let Entry { value, next, .. } = entry;
                    self.entry = next.as_deref_mut();
                    self.remaining -= 1;
                    return Some(value);
                },
                None => self.entry = self.buckets.next()?.as_deref_mut(),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}

pub struct IntoKeys<K, V>(
    pub(crate) IntoIter<K, V>
);

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }
}

pub struct Keys<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }
}

pub struct IntoValues<K, V>(
    pub(crate) IntoIter<K, V>
);

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }
}

pub struct Values<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }
}
