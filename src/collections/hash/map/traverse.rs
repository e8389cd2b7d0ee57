use std::hash::{BuildHasher, Hash};

use super::{Entry, HashMap};
use crate::traverse::Traverse;

/// A [`Traverse`] cursor over a map's entries, in bucket-then-chain order.
///
/// Hash order has no meaning, so this traverser is forward-only:
/// [`has_prev`](Traverse::has_prev) is always false. It borrows the map immutably, which keeps the
/// map alive and unmodified for the traverser's whole lifetime.
pub struct Traverser<'a, K: Hash + Eq, V, B: BuildHasher> {
    map: &'a HashMap<K, V, B>,
    index: usize,
    entry: Option<&'a Entry<K, V>>,
}

impl<'a, K: Hash + Eq, V, B: BuildHasher> Traverser<'a, K, V, B> {
    pub(crate) fn new(map: &'a HashMap<K, V, B>) -> Traverser<'a, K, V, B> {
        let mut traverser = Traverser {
            map,
            index: 0,
            entry: None,
        };
        traverser.settle();
        traverser
    }

    /// Scans forward through the bucket table until positioned at an entry or past the end.
    fn settle(&mut self) {
        while self.entry.is_none() && self.index < self.map.cap() {
            self.entry = self.map.buckets[self.index].as_deref();
            self.index += 1;
        }
    }
}

impl<'a, K: Hash + Eq, V, B: BuildHasher> Traverse for Traverser<'a, K, V, B> {
    type Item = (&'a K, &'a V);

    fn has_next(&self) -> bool {
        self.entry.is_some()
    }

    fn get(&self) -> Option<Self::Item> {
        self.entry.map(|entry| (&entry.key, &entry.value))
    }

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entry?;
        self.entry = entry.next.as_deref();
        self.settle();
        Some((&entry.key, &entry.value))
    }

    fn reset(&mut self) {
        self.index = 0;
        self.entry = None;
        self.settle();
    }
}
