use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;

use super::{IntoKeys, IntoValues, Iter, Keys, Traverser, Values, ValuesMut};
use crate::collections::contiguous::{Array, Vector};
use crate::util::fmt::DebugRaw;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;
#[doc(inline)]
pub use crate::util::error::CapacityOverflow;

/// The bucket count adopted by the first insertion into a map created without an explicit
/// capacity.
const DEFAULT_CAP: usize = 16;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 3;
const LOAD_FACTOR_DENOMINATOR: usize = 4;

/// A map of keys to values which relies on the keys implementing [`Hash`], resolving collisions
/// with per-bucket chains.
///
/// Each bucket slot owns the head of its collision chain and each entry owns its successor, so
/// removing or rehashing an entry moves its allocation rather than copying the key or value. When
/// an insertion pushes the load factor (length over bucket count) above 3/4, the bucket table
/// doubles and every entry is relinked under the new count; entries themselves are never
/// reallocated by a resize.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n)` |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `reserve` | `O(n)`**, `O(1)` |
///
/// \* Plus the length of the relevant collision chain, which stays short while the load factor is
/// maintained and the hasher behaves.
///
/// \** If the HashMap has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct HashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) buckets: Array<Bucket<K, V>>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

/// One slot of the bucket table: the owning head reference of a collision chain.
pub(crate) type Bucket<K, V> = Option<Box<Entry<K, V>>>;

/// A key-value pair in a collision chain, owning the link to its successor.
pub(crate) struct Entry<K, V> {
    pub key: K,
    pub value: V,
    pub next: Bucket<K, V>,
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> HashMap<K, V, B> {
    /// Creates a new HashMap with bucket count 0 and the default value for `B`. The bucket table
    /// is allocated by the first insertion.
    pub fn new() -> HashMap<K, V, B> {
        HashMap {
            buckets: Array::new(),
            len: 0,
            hasher: B::default(),
        }
    }

    /// Creates a new HashMap with exactly `cap` buckets and the default hasher.
    pub fn with_cap(cap: usize) -> HashMap<K, V, B> {
        HashMap {
            buckets: Array::repeat_with(cap, || None),
            len: 0,
            hasher: B::default(),
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Creates a new HashMap with bucket count 0 and the provided `hasher`.
    pub const fn with_hasher(hasher: B) -> HashMap<K, V, B> {
        HashMap {
            buckets: Array::new(),
            len: 0,
            hasher,
        }
    }

    /// Creates a new HashMap with exactly `cap` buckets and the provided `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashMap<K, V, B> {
        HashMap {
            buckets: Array::repeat_with(cap, || None),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of entries in the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current bucket count of the HashMap.
    pub const fn cap(&self) -> usize {
        self.buckets.size()
    }

    /// Inserts the provided `key`-`value` pair into the HashMap, growing the bucket table
    /// afterwards if the insertion pushed the load factor above 3/4. If the key was already
    /// associated with a value, the previous value is returned and the length is unchanged.
    ///
    /// As with the standard library, the key isn't replaced if it already exists.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.cap() == 0 {
            self.grow();
        }

        // UNREACHABLE: The bucket count is non-zero after the check above.
        let index = unsafe { self.index_for(&key).unreachable() };

        let mut curr = self.buckets[index].as_deref_mut();
        while let Some(entry) = curr {
            if entry.key == key {
                return Some(mem::replace(&mut entry.value, value));
            }
            curr = entry.next.as_deref_mut();
        }

        // A new key: prepend to the chain, no ordering guarantee among colliding keys.
        let head = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(Entry {
            key,
            value,
            next: head,
        }));
        self.len += 1;

        if self.overloaded() {
            self.grow();
        }

        None
    }

    /// Returns the entry for the provided `key` as a key-value pair, or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // We're introducing a new type parameter here, Q, which represents a borrowed version of
        // K where equality and hashing carry over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_for(key)?;

        let mut curr = self.buckets[index].as_deref();
        while let Some(entry) = curr {
            if entry.key.borrow() == key {
                return Some((&entry.key, &entry.value));
            }
            curr = entry.next.as_deref();
        }

        None
    }

    /// Returns a reference to the value associated with the provided `key`, or None if the map
    /// contains no value for `key`. Never allocates.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value associated with the provided `key`, or None if
    /// the map contains no value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_for(key)?;

        let mut curr = self.buckets[index].as_deref_mut();
        while let Some(entry) = curr {
            if entry.key.borrow() == key {
                return Some(&mut entry.value);
            }
            curr = entry.next.as_deref_mut();
        }

        None
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Removes the entry associated with `key`, returning it if it exists. Not finding the key is
    /// a normal outcome, reported as None with the map untouched.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_for(key)?;

        // Walk the owning links so the predecessor relink is a plain assignment.
        let mut link = &mut self.buckets[index];
        while link.as_ref().is_some_and(|entry| entry.key.borrow() != key) {
            // UNREACHABLE: The loop condition only passes while the link is occupied.
            link = unsafe { &mut link.as_mut().unreachable().next };
        }

        let entry = *link.take()?;
        *link = entry.next;
        self.len -= 1;

        Some((entry.key, entry.value))
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes every entry for which `pred` returns false, visiting values mutably. The bucket
    /// table size is unchanged.
    pub fn retain<F>(&mut self, mut pred: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut removed = 0;
        for bucket in self.buckets.iter_mut() {
            // Detach each entry; kept ones are relinked in place, dropped ones splice their
            // successor into the link instead.
            let mut link = bucket;
            while let Some(mut entry) = link.take() {
                if pred(&entry.key, &mut entry.value) {
                    link = &mut link.insert(entry).next;
                } else {
                    *link = entry.next.take();
                    removed += 1;
                }
            }
        }
        self.len -= removed;
    }

    /// Removes (and drops) every entry across every bucket, keeping the bucket table size
    /// unchanged.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            // Unlink iteratively so long chains can't recurse through their drops.
            let mut chain = bucket.take();
            while let Some(mut entry) = chain {
                chain = entry.next.take();
            }
        }
        self.len = 0;
    }

    /// Increases the bucket count to ensure that len + `extra` entries will fit without exceeding
    /// the load factor.
    ///
    /// # Panics
    /// Panics if the required bucket count overflows.
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    /// As [`reserve`](HashMap::reserve), reporting overflow instead of panicking.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        let entries = self.len.checked_add(extra).ok_or(CapacityOverflow)?;
        let new_cap = entries
            .checked_mul(LOAD_FACTOR_DENOMINATOR)
            .ok_or(CapacityOverflow)?
            .div_ceil(LOAD_FACTOR_NUMERATOR);

        if new_cap > self.cap() {
            self.rehash_into(new_cap);
        }

        Ok(())
    }

    /// Creates a new map holding clones of every entry produced by the provided functions, with
    /// the same bucket count. Placement is deterministic because the hasher is cloned with the
    /// map.
    pub fn clone_with<F, G>(&self, mut clone_key: F, mut clone_value: G) -> HashMap<K, V, B>
    where
        B: Clone,
        F: FnMut(&K) -> K,
        G: FnMut(&V) -> V,
    {
        // UNREACHABLE: The closures are infallible, so every clone succeeds.
        unsafe {
            self.try_clone_with::<_, _, std::convert::Infallible>(
                |key| Ok(clone_key(key)),
                |value| Ok(clone_value(value)),
            )
            .ok()
            .unreachable()
        }
    }

    /// As [`clone_with`](HashMap::clone_with) with fallible clone functions. If any clone fails,
    /// everything copied so far is dropped and only the error escapes: there is no partially
    /// cloned map to observe.
    pub fn try_clone_with<F, G, E>(
        &self,
        mut clone_key: F,
        mut clone_value: G,
    ) -> Result<HashMap<K, V, B>, E>
    where
        B: Clone,
        F: FnMut(&K) -> Result<K, E>,
        G: FnMut(&V) -> Result<V, E>,
    {
        let mut clone = HashMap::with_cap_and_hasher(self.cap(), self.hasher.clone());

        for (key, value) in self.iter() {
            clone.insert(clone_key(key)?, clone_value(value)?);
        }

        Ok(clone)
    }

    /// Returns an iterator over all key-value pairs in the HashMap, as references, in
    /// bucket-then-chain order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }

    /// Returns an iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over all values in the HashMap, as mutable references. Values can be
    /// rewritten in place; the structure of the map cannot change underneath the borrow.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut::new(self)
    }

    /// Returns a [`Traverse`](crate::traverse::Traverse) cursor over the map's entries, walking
    /// buckets in index order and each collision chain front to back. Reverse movement is
    /// unsupported and reported as such.
    pub fn traverse(&self) -> Traverser<'_, K, V, B> {
        Traverser::new(self)
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Determines whether the length has exceeded the load factor for the current bucket count.
    pub(crate) const fn overloaded(&self) -> bool {
        self.len * LOAD_FACTOR_DENOMINATOR > self.cap() * LOAD_FACTOR_NUMERATOR
    }

    /// Doubles the bucket table (or adopts the default count for an unallocated map). If the
    /// doubled count would overflow, growth stops; the triggering insertion has already
    /// succeeded.
    pub(crate) fn grow(&mut self) {
        let new_cap = match self.cap() {
            0 => DEFAULT_CAP,
            cap => match cap.checked_mul(GROWTH_FACTOR) {
                Some(doubled) => doubled,
                None => return,
            },
        };

        self.rehash_into(new_cap);
    }

    /// Replaces the bucket table with one of `new_cap` slots and relinks every entry under its
    /// recomputed index. Entries are moved, never reallocated, so `O(size)` work and no
    /// auxiliary space beyond the new table.
    pub(crate) fn rehash_into(&mut self, new_cap: usize) {
        let mut old = mem::replace(&mut self.buckets, Array::repeat_with(new_cap, || None));

        for slot in old.iter_mut() {
            let mut chain = slot.take();
            while let Some(mut entry) = chain {
                chain = entry.next.take();

                // UNREACHABLE: new_cap is never zero when entries exist to relink.
                let index = unsafe { self.index_for(&entry.key).unreachable() };
                entry.next = self.buckets[index].take();
                self.buckets[index] = Some(entry);
            }
        }
    }

    /// Calculates the bucket index for the provided `hashable` (or None if the bucket table is
    /// unallocated). Hash outputs need no pre-bounding: they are taken modulo the bucket count.
    pub(crate) fn index_for<H: Hash + ?Sized>(&self, hashable: &H) -> Option<usize> {
        let key_hash = self.hasher.hash_one(hashable);
        key_hash.checked_rem(self.cap() as u64).map(|i| i as usize)
    }

    /// Walks every bucket chain asserting that the recorded length matches the reachable
    /// entries. Test support.
    #[allow(unused)]
    pub(crate) fn verify_chains(&self) {
        let mut count = 0;
        for bucket in self.buckets.iter() {
            let mut curr = bucket.as_deref();
            while let Some(entry) = curr {
                count += 1;
                curr = entry.next.as_deref();
            }
        }

        assert_eq!(
            self.len, count,
            "Length should equal the sum of chain lengths across all buckets."
        );
    }
}

impl<K: Hash + Eq, V> Default for HashMap<K, V> {
    fn default() -> Self {
        HashMap::new()
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for HashMap<K, V, B> {
    fn clone(&self) -> Self {
        self.clone_with(K::clone, V::clone)
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Drop for HashMap<K, V, B> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashMap<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::with_hasher(B::default());
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for HashMap<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for HashMap<K, V, B> {}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Debug for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets: Vector<DebugRaw> = self
            .buckets
            .iter()
            .map(|bucket| {
                let mut parts: Vector<String> = Vector::new();
                let mut curr = bucket.as_deref();
                while let Some(entry) = curr {
                    parts.push(format!("({:?}: {:?})", entry.key, entry.value));
                    curr = entry.next.as_deref();
                }

                DebugRaw(if parts.is_empty() {
                    "-".into()
                } else {
                    parts.join(" -> ")
                })
            })
            .collect();

        f.debug_struct("HashMap")
            .field("buckets", &buckets)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map()
            .entries(self.iter().map(|(key, value)| (DebugRaw(format!("{key:?}")), value)))
            .finish()
    }
}
