use std::hash::{BuildHasher, Hash};

use super::HashSet;
use crate::collections::hash::map;
use crate::traverse::Traverse;

/// A [`Traverse`] cursor over a set's elements, delegating to the underlying map's traverser.
/// Forward-only, like its map counterpart.
pub struct Traverser<'a, T: Hash + Eq, B: BuildHasher>(
    map::Traverser<'a, T, (), B>
);

impl<'a, T: Hash + Eq, B: BuildHasher> Traverser<'a, T, B> {
    pub(crate) fn new(set: &'a HashSet<T, B>) -> Traverser<'a, T, B> {
        Traverser(set.inner.traverse())
    }
}

impl<'a, T: Hash + Eq, B: BuildHasher> Traverse for Traverser<'a, T, B> {
    type Item = &'a T;

    fn has_next(&self) -> bool {
        self.0.has_next()
    }

    fn get(&self) -> Option<Self::Item> {
        self.0.get().map(|(item, _)| item)
    }

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(item, _)| item)
    }

    fn reset(&mut self) {
        self.0.reset();
    }
}
