use super::Vector;
use crate::traverse::Traverse;

/// A [`Traverse`] cursor over a [`Vector`], supporting movement in both directions.
///
/// [`next`](Traverse::next) consumes the current element and moves forward;
/// [`prev`](Traverse::prev) steps back to the most recently consumed element and returns it, so
/// a `next` / `prev` pair leaves the position (and the result of [`get`](Traverse::get))
/// unchanged.
pub struct VectorTraverser<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> VectorTraverser<'a, T> {
    pub(crate) fn new(vec: &'a Vector<T>) -> VectorTraverser<'a, T> {
        VectorTraverser {
            items: vec,
            pos: 0,
        }
    }
}

impl<'a, T> Traverse for VectorTraverser<'a, T> {
    type Item = &'a T;

    fn has_next(&self) -> bool {
        self.pos < self.items.len()
    }

    fn get(&self) -> Option<Self::Item> {
        self.items.get(self.pos)
    }

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.pos)?;
        self.pos += 1;
        Some(item)
    }

    fn has_prev(&self) -> bool {
        self.pos > 0
    }

    fn prev(&mut self) -> Option<Self::Item> {
        self.pos = self.pos.checked_sub(1)?;
        Some(&self.items[self.pos])
    }

    fn reset(&mut self) {
        self.pos = 0;
    }
}
