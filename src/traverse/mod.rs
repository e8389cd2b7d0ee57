//! A polymorphic traversal protocol shared by every collection in this crate.
//!
//! [`Traverse`] is deliberately not [`Iterator`]: it separates *peeking* ([`Traverse::get`]) from
//! *consuming* ([`Traverse::next`]), supports rewinding to the start ([`Traverse::reset`]), and
//! describes its own capabilities ([`Traverse::has_prev`]) so that consumers can branch instead of
//! assume. Collections hand out a concrete traverser type (for example
//! [`HashMap::traverse`](crate::collections::hash::HashMap::traverse)) and the adapters here
//! compose over any of them.
//!
//! For interop, [`Traverse::iterator`] bridges any traverser into a standard [`Iterator`].

mod adapters;
#[cfg(test)]
mod tests;

pub use adapters::*;

/// A resumable cursor over a collection, yielding items of type [`Self::Item`](Traverse::Item).
///
/// # Contract
/// Between mutations of the cursor, [`get`](Traverse::get) is idempotent: it peeks at the current
/// item without advancing. [`next`](Traverse::next) returns that same item *and* advances, so
/// `t.get() == t.next()` holds at any position. Once exhausted, both return [`None`] until
/// [`reset`](Traverse::reset) is called; calling [`next`](Traverse::next) past the end is not an
/// error.
///
/// Reverse movement is optional. Implementations which don't support it (such as the hash map
/// traverser) report [`has_prev`](Traverse::has_prev) as false and fail [`prev`](Traverse::prev)
/// with [`None`] rather than panicking, which is the default behaviour.
pub trait Traverse: Sized {
    /// The type of item this traverser yields.
    type Item;

    /// Returns true while the traverser is positioned at an item, i.e. while
    /// [`next`](Traverse::next) would succeed.
    fn has_next(&self) -> bool;

    /// Peeks at the current item without advancing. Returns [`None`] once exhausted.
    fn get(&self) -> Option<Self::Item>;

    /// Returns the current item and advances to the following one, exhausting the traverser when
    /// none remain.
    fn next(&mut self) -> Option<Self::Item>;

    /// Returns true if this traverser can move backwards from its current position. False unless
    /// overridden.
    fn has_prev(&self) -> bool {
        false
    }

    /// Steps back to the most recently consumed item and returns it, where supported. [`None`]
    /// unless overridden.
    fn prev(&mut self) -> Option<Self::Item> {
        None
    }

    /// Rewinds to the first item. Safe at any point, including after exhaustion.
    fn reset(&mut self);

    /// Returns true if this traverser was constructed against a live collection. Always true for
    /// traversers built by this crate (the borrow checker enforces it), and independent of
    /// [`has_next`](Traverse::has_next): an exhausted traverser is still valid.
    fn is_valid(&self) -> bool {
        true
    }

    /// Wraps self in a traverser which only yields items matching `pred`.
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, pred)
    }

    /// Wraps self in a traverser which transforms every item through `f`.
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    /// Wraps self in a traverser which yields at most `limit` items before reporting exhaustion.
    fn take(self, limit: usize) -> Take<Self> {
        Take::new(self, limit)
    }

    /// Wraps self in a traverser which discards the first `count` items.
    fn skip(self, count: usize) -> Skip<Self> {
        Skip::new(self, count)
    }

    /// Wraps self in a traverser which pairs each item with its position, counting from 0.
    fn enumerate(self) -> Enumerate<Self> {
        Enumerate::new(self)
    }

    /// Bridges self into a standard [`Iterator`], for `for` loops and collecting.
    fn iterator(self) -> TraverseIterator<Self> {
        TraverseIterator(self)
    }
}

/// Adapts any [`Traverse`] implementation into a standard [`Iterator`].
pub struct TraverseIterator<T: Traverse>(pub(crate) T);

impl<T: Traverse> Iterator for TraverseIterator<T> {
    type Item = T::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}
