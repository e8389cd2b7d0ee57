use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::{Difference, Intersection, Iter, SymmetricDifference, Traverser, Union};
use crate::collections::contiguous::Vector;
use crate::collections::hash::HashMap;
use crate::util::fmt::DebugRaw;

/// A collection of unique elements which relies on the elements implementing [`Hash`], stored as
/// a [`HashMap`] from elements to nothing.
///
/// Because equal elements hash identically, inserting an element already present is a no-op
/// reported through [`insert`](HashSet::insert)'s return value. The growth and collision
/// behaviour is exactly that of the underlying map.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the HashSet.
/// - `m`: The number of elements in a second HashSet taking part in a set operation.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n)` |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `difference` etc. | `O(n + m)` to drain |
///
/// \* Plus the length of the relevant collision chain.
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    // The unit value compiles to a no-op, so this costs nothing over a bespoke table.
    pub(crate) inner: HashMap<T, (), B>,
}

impl<T: Hash + Eq, B: BuildHasher + Default> HashSet<T, B> {
    /// Creates a new HashSet with bucket count 0 and the default value for `B`.
    pub fn new() -> HashSet<T, B> {
        HashSet {
            inner: HashMap::new(),
        }
    }

    /// Creates a new HashSet with exactly `cap` buckets and the default hasher.
    pub fn with_cap(cap: usize) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_cap(cap),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Creates a new HashSet with bucket count 0 and the provided `hasher`.
    pub const fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates a new HashSet with exactly `cap` buckets and the provided `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_cap_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of elements in the HashSet.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the HashSet contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the current bucket count of the HashSet.
    pub const fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Inserts the provided `item`, returning true if it wasn't already present. An `item` equal
    /// to an existing element is dropped without replacing the original.
    pub fn insert(&mut self, item: T) -> bool {
        // The map keeps the original key on overwrite, so a duplicate item is simply dropped.
        self.inner.insert(item, ()).is_none()
    }

    /// Removes `item` from the set, returning the stored element if it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(item).map(|e| e.0)
    }

    /// Returns true if the set contains an element equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(item)
    }

    /// Removes every element for which `pred` returns false.
    pub fn retain<F>(&mut self, mut pred: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.inner.retain(|item, _| pred(item));
    }

    /// Removes (and drops) every element, keeping the bucket table size unchanged.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Increases the bucket count to ensure that len + `extra` elements will fit without
    /// exceeding the load factor.
    ///
    /// # Panics
    /// Panics if the required bucket count overflows.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Returns an iterator over all elements in the HashSet, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns a [`Traverse`](crate::traverse::Traverse) cursor over the set's elements.
    pub fn traverse(&self) -> Traverser<'_, T, B> {
        Traverser::new(self)
    }

    /// Returns an iterator over the elements of self which aren't in `other`.
    pub fn difference<'a>(&'a self, other: &'a HashSet<T, B>) -> Difference<'a, T, B> {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Returns an iterator over the elements which are in exactly one of self and `other`.
    pub fn symmetric_difference<'a>(
        &'a self,
        other: &'a HashSet<T, B>,
    ) -> SymmetricDifference<'a, T, B> {
        SymmetricDifference {
            inner: self.difference(other).chain(other.difference(self)),
        }
    }

    /// Returns an iterator over the elements of self which are also in `other`.
    pub fn intersection<'a>(&'a self, other: &'a HashSet<T, B>) -> Intersection<'a, T, B> {
        Intersection {
            inner: self.iter(),
            other,
        }
    }

    /// Returns an iterator over the elements which are in either of self and `other`, yielding
    /// shared elements once.
    pub fn union<'a>(&'a self, other: &'a HashSet<T, B>) -> Union<'a, T, B> {
        Union {
            inner: self.iter().chain(other.difference(self)),
        }
    }

    /// Returns true if every element of self is in `other`.
    pub fn is_subset(&self, other: &HashSet<T, B>) -> bool {
        self.iter().all(|item| other.contains(item))
    }

    /// Returns true if every element of `other` is in self.
    pub fn is_superset(&self, other: &HashSet<T, B>) -> bool {
        other.is_subset(self)
    }
}

impl<T: Hash + Eq> Default for HashSet<T> {
    fn default() -> Self {
        HashSet::new()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for HashSet<T, B> {
    fn clone(&self) -> Self {
        HashSet {
            inner: self.inner.clone_with(T::clone, |_| ()),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = HashSet::with_cap(iter.size_hint().0);
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashSet<T, B> {}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitOr for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitOrAssign for HashSet<T, B> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.reserve(rhs.len());
        self.extend(rhs);
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitAnd for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitAndAssign for HashSet<T, B> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.retain(|item| rhs.contains(item));
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitXor for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitXorAssign for HashSet<T, B> {
    fn bitxor_assign(&mut self, rhs: Self) {
        for item in rhs {
            if self.remove(&item).is_none() {
                self.insert(item);
            }
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Sub for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> SubAssign for HashSet<T, B> {
    fn sub_assign(&mut self, rhs: Self) {
        for item in rhs {
            self.remove(&item);
        }
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let contents = self
            .iter()
            .map(|item| format!("{item:?}"))
            .collect::<Vector<String>>()
            .join(", ");

        f.debug_struct("HashSet")
            .field("contents", &DebugRaw(format!("#{{{contents}}}")))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{{{}}}",
            self.iter()
                .map(|item| format!("{item}"))
                .collect::<Vector<String>>()
                .join(", ")
        )
    }
}
