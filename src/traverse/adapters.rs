use super::Traverse;

/// A traverser which yields only the items of `inner` matching a predicate.
///
/// To keep [`get`](Traverse::get) a pure peek, the filter always holds its inner traverser
/// positioned on the next matching item (or exhausted), advancing past rejected items eagerly on
/// construction and after every [`next`](Traverse::next).
pub struct Filter<T: Traverse, P> {
    inner: T,
    pred: P,
}

impl<T: Traverse, P: Fn(&T::Item) -> bool> Filter<T, P> {
    pub(crate) fn new(inner: T, pred: P) -> Filter<T, P> {
        let mut filter = Filter { inner, pred };
        filter.settle();
        filter
    }

    /// Advances the inner traverser until it rests on an item matching the predicate, or is
    /// exhausted.
    fn settle(&mut self) {
        while let Some(item) = self.inner.get() {
            if (self.pred)(&item) {
                return;
            }
            self.inner.next();
        }
    }
}

impl<T: Traverse, P: Fn(&T::Item) -> bool> Traverse for Filter<T, P> {
    type Item = T::Item;

    fn has_next(&self) -> bool {
        // The settle invariant means the inner position is always a matching item.
        self.inner.has_next()
    }

    fn get(&self) -> Option<Self::Item> {
        self.inner.get()
    }

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.settle();
        Some(item)
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.settle();
    }

    fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }
}

/// A traverser which transforms every item of `inner` through a function.
pub struct Map<T: Traverse, F> {
    inner: T,
    f: F,
}

impl<T: Traverse, F> Map<T, F> {
    pub(crate) const fn new(inner: T, f: F) -> Map<T, F> {
        Map { inner, f }
    }
}

impl<T: Traverse, F: Fn(T::Item) -> U, U> Traverse for Map<T, F> {
    type Item = U;

    fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    fn get(&self) -> Option<Self::Item> {
        self.inner.get().map(&self.f)
    }

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(&self.f)
    }

    fn has_prev(&self) -> bool {
        self.inner.has_prev()
    }

    fn prev(&mut self) -> Option<Self::Item> {
        self.inner.prev().map(&self.f)
    }

    fn reset(&mut self) {
        self.inner.reset();
    }

    fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }
}

/// A traverser which reports exhaustion after yielding a fixed number of items.
pub struct Take<T: Traverse> {
    inner: T,
    limit: usize,
    taken: usize,
}

impl<T: Traverse> Take<T> {
    pub(crate) const fn new(inner: T, limit: usize) -> Take<T> {
        Take {
            inner,
            limit,
            taken: 0,
        }
    }
}

impl<T: Traverse> Traverse for Take<T> {
    type Item = T::Item;

    fn has_next(&self) -> bool {
        self.taken < self.limit && self.inner.has_next()
    }

    fn get(&self) -> Option<Self::Item> {
        if self.taken < self.limit {
            self.inner.get()
        } else {
            None
        }
    }

    fn next(&mut self) -> Option<Self::Item> {
        if self.taken >= self.limit {
            return None;
        }

        let item = self.inner.next()?;
        self.taken += 1;
        Some(item)
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.taken = 0;
    }

    fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }
}

/// A traverser which discards a fixed number of leading items.
///
/// The skip is applied eagerly on construction and again on every [`reset`](Traverse::reset).
/// Reverse movement is reported as unsupported: allowing [`prev`](Traverse::prev) would let a
/// consumer step back into the skipped region.
pub struct Skip<T: Traverse> {
    inner: T,
    count: usize,
}

impl<T: Traverse> Skip<T> {
    pub(crate) fn new(inner: T, count: usize) -> Skip<T> {
        let mut skip = Skip { inner, count };
        skip.discard();
        skip
    }

    fn discard(&mut self) {
        for _ in 0..self.count {
            if self.inner.next().is_none() {
                break;
            }
        }
    }
}

impl<T: Traverse> Traverse for Skip<T> {
    type Item = T::Item;

    fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    fn get(&self) -> Option<Self::Item> {
        self.inner.get()
    }

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.discard();
    }

    fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }
}

/// A traverser which pairs each item with the count of items consumed before it.
pub struct Enumerate<T: Traverse> {
    inner: T,
    count: usize,
}

impl<T: Traverse> Enumerate<T> {
    pub(crate) const fn new(inner: T) -> Enumerate<T> {
        Enumerate { inner, count: 0 }
    }
}

impl<T: Traverse> Traverse for Enumerate<T> {
    type Item = (usize, T::Item);

    fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    fn get(&self) -> Option<Self::Item> {
        self.inner.get().map(|item| (self.count, item))
    }

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        let index = self.count;
        self.count += 1;
        Some((index, item))
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.count = 0;
    }

    fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }
}
