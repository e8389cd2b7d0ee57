#![cfg(test)]

use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::collections::contiguous::Vector;
use crate::traverse::Traverse;
use crate::util::alloc::CountedDrop;
use crate::util::hash::{BadHasherBuilder, ManualHash};

#[test]
fn test_insert_and_get() {
    let mut map: HashMap<&str, u32> = HashMap::new();
    assert_eq!(map.cap(), 0, "A new HashMap shouldn't allocate any buckets.");
    assert_eq!(map.get("one"), None, "Lookups on an unallocated HashMap should find nothing.");

    assert_eq!(map.insert("one", 1), None);
    assert_eq!(map.insert("two", 2), None);
    assert_eq!(map.insert("three", 3), None);

    assert_eq!(
        map.cap(), 16,
        "The first insertion should allocate the default bucket count."
    );
    assert_eq!(map.len(), 3);
    assert_eq!(map.get("two"), Some(&2));
    assert_eq!(map.get("four"), None);
    assert!(map.contains("three"));
    assert!(!map.contains("four"));
    map.verify_chains();
}

#[test]
fn test_insert_overwrites() {
    let mut map: HashMap<&str, u32> = HashMap::new();
    map.insert("count", 1);

    assert_eq!(
        map.insert("count", 2), Some(1),
        "Inserting an existing key should return the previous value."
    );
    assert_eq!(map.len(), 1, "Overwriting a value shouldn't change the length.");
    assert_eq!(map.get("count"), Some(&2));
    map.verify_chains();
}

#[test]
fn test_get_mut() {
    let mut map: HashMap<&str, u32> = HashMap::new();
    map.insert("count", 1);

    if let Some(value) = map.get_mut("count") {
        *value += 10;
    }

    assert_eq!(map.get("count"), Some(&11));
    assert_eq!(map.get_mut("missing"), None);
}

#[test]
fn test_borrowed_lookups() {
    let mut map: HashMap<String, u32> = HashMap::new();
    map.insert("one".to_string(), 1);

    assert_eq!(
        map.get("one"), Some(&1),
        "String keys should be searchable by str without allocating."
    );
    assert_eq!(map.remove("one"), Some(1));
}

#[test]
fn test_load_factor_growth() {
    let mut map = HashMap::with_cap_and_hasher(4, BadHasherBuilder);

    for hash in 0..3_u64 {
        map.insert(ManualHash::new(hash, hash), hash);
    }
    assert_eq!(
        map.cap(), 4,
        "Three entries in four buckets sit exactly on the load factor, which is permitted."
    );

    map.insert(ManualHash::new(3, 3), 3);
    assert_eq!(map.cap(), 8, "The fourth insertion should double the bucket count.");

    for hash in 4..6_u64 {
        map.insert(ManualHash::new(hash, hash), hash);
    }
    assert_eq!(map.cap(), 8);

    map.insert(ManualHash::new(6, 6), 6);
    assert_eq!(map.cap(), 16, "The seventh insertion should double the bucket count again.");

    for hash in 7..10_u64 {
        map.insert(ManualHash::new(hash, hash), hash);
    }
    assert_eq!(map.cap(), 16);
    assert_eq!(map.len(), 10);

    for hash in 0..10_u64 {
        assert_eq!(
            map.get(&ManualHash::new(hash, hash)), Some(&hash),
            "Every entry should be reachable after repeated rehashes."
        );
    }
    map.verify_chains();
}

#[test]
fn test_hash_collisions() {
    let mut map = HashMap::with_hasher(BadHasherBuilder);
    map.insert(ManualHash::new(7, "zero"), 0);
    map.insert(ManualHash::new(7, "one"), 1);
    map.insert(ManualHash::new(7, "two"), 2);
    map.insert(ManualHash::new(3, "three"), 3);

    assert_eq!(map.len(), 4);
    assert_eq!(map.get(&ManualHash::new(7, "one")), Some(&1));

    assert_eq!(
        map.remove(&ManualHash::new(7, "one")), Some(1),
        "An entry in the middle of a collision chain should be removable."
    );
    assert_eq!(map.get(&ManualHash::new(7, "zero")), Some(&0));
    assert_eq!(map.get(&ManualHash::new(7, "two")), Some(&2));
    assert_eq!(map.len(), 3);
    map.verify_chains();

    assert_eq!(
        map.remove(&ManualHash::new(7, "two")), Some(2),
        "The head of a collision chain should be removable."
    );
    assert_eq!(map.get(&ManualHash::new(7, "zero")), Some(&0));
    assert_eq!(map.len(), 2);
    map.verify_chains();
}

#[test]
fn test_remove_missing() {
    let mut map: HashMap<&str, u32> = HashMap::new();
    map.insert("one", 1);

    assert_eq!(
        map.remove("two"), None,
        "Removing a missing key should report None rather than failing."
    );
    assert_eq!(map.len(), 1, "A missed removal should leave the HashMap untouched.");
    assert_eq!(map.get("one"), Some(&1));

    let mut empty: HashMap<&str, u32> = HashMap::new();
    assert_eq!(empty.remove("one"), None, "Removal from an unallocated HashMap should be a no-op.");
}

#[test]
fn test_remove_entry() {
    let mut map: HashMap<String, u32> = HashMap::new();
    map.insert("one".to_string(), 1);

    assert_eq!(map.remove_entry("one"), Some(("one".to_string(), 1)));
    assert!(map.is_empty());
}

#[test]
fn test_clear() {
    let mut map = HashMap::with_hasher(BadHasherBuilder);
    for hash in 0..20_u64 {
        map.insert(ManualHash::new(hash, hash), hash);
    }
    let cap = map.cap();

    map.clear();

    assert!(map.is_empty());
    assert_eq!(map.cap(), cap, "Clearing should keep the bucket table allocated.");
    map.verify_chains();

    map.insert(ManualHash::new(0, 0), 100);
    assert_eq!(map.get(&ManualHash::new(0, 0)), Some(&100), "A cleared HashMap should be reusable.");
}

#[test]
fn test_retain() {
    let mut map = HashMap::with_hasher(BadHasherBuilder);
    for hash in 0..4_u64 {
        map.insert(ManualHash::new(0, hash), hash);
        map.insert(ManualHash::new(1, hash + 10), hash + 10);
    }

    map.retain(|_, value| {
        *value *= 10;
        *value % 20 == 0
    });

    assert_eq!(map.len(), 4, "Retain should drop exactly the entries which fail the predicate.");
    assert_eq!(map.get(&ManualHash::new(0, 2)), Some(&20));
    assert_eq!(map.get(&ManualHash::new(1, 12)), Some(&120));
    assert_eq!(map.get(&ManualHash::new(0, 1)), None);
    map.verify_chains();

    map.retain(|_, _| false);
    assert!(map.is_empty(), "Retain should be able to drain whole chains.");
    map.verify_chains();
}

#[test]
fn test_reserve() {
    let mut map: HashMap<u64, u64, BadHasherBuilder> = HashMap::with_hasher(BadHasherBuilder);
    map.reserve(30);

    assert_eq!(
        map.cap(), 40,
        "Reserving should allocate enough buckets to hold the entries within the load factor."
    );

    for i in 0..30 {
        map.insert(i, i);
    }
    assert_eq!(map.cap(), 40, "Insertions within a reservation shouldn't trigger growth.");

    map.reserve(5);
    assert_eq!(map.cap(), 47, "Reserving accounts for entries already present.");
}

#[test]
fn test_try_reserve_overflow() {
    let mut map: HashMap<u64, u64> = HashMap::new();
    map.insert(1, 1);

    assert_eq!(map.try_reserve(usize::MAX), Err(CapacityOverflow));
    assert_eq!(map.len(), 1, "A failed reservation should leave the HashMap untouched.");
}

#[test]
fn test_clone() {
    let mut map: HashMap<u64, String, BadHasherBuilder> = HashMap::with_hasher(BadHasherBuilder);
    map.insert(1, "one".to_string());
    map.insert(2, "two".to_string());

    let mut clone = map.clone();
    assert_eq!(clone, map);

    clone.insert(3, "three".to_string());
    if let Some(value) = clone.get_mut(&1) {
        value.push_str("!");
    }

    assert_eq!(map.len(), 2, "Mutating a clone shouldn't affect the original.");
    assert_eq!(map.get(&1), Some(&"one".to_string()));
    assert_eq!(clone.get(&1), Some(&"one!".to_string()));

    map.remove(&2);
    assert_eq!(
        clone.get(&2), Some(&"two".to_string()),
        "Mutating the original shouldn't affect a clone."
    );
}

#[test]
fn test_try_clone_with() {
    let mut map: HashMap<u64, u64, BadHasherBuilder> = HashMap::with_hasher(BadHasherBuilder);
    for i in 0..5 {
        map.insert(i, i * 10);
    }

    let result = map.try_clone_with(
        |key| Ok(*key),
        |value| if *value == 30 { Err("unclonable") } else { Ok(*value) },
    );

    assert_eq!(result.err(), Some("unclonable"), "A failed clone should surface the error.");
    assert_eq!(map.len(), 5, "A failed clone should leave the original untouched.");
}

#[test]
fn test_iter() {
    let mut map = HashMap::with_hasher(BadHasherBuilder);
    map.insert(ManualHash::new(3, "three"), 3);
    map.insert(ManualHash::new(1, "one a"), 1);
    map.insert(ManualHash::new(1, "one b"), 10);
    map.insert(ManualHash::new(5, "five"), 5);

    assert_eq!(
        map.iter().map(|(_, value)| *value).collect::<Vector<_>>(),
        Vector::from_iter([10, 1, 3, 5]),
        "Iteration should visit buckets in index order and chains front to back."
    );
    assert_eq!(map.iter().len(), 4);
    assert_eq!(
        map.keys().map(|key| key.clone().value()).collect::<Vector<_>>(),
        Vector::from_iter(["one b", "one a", "three", "five"])
    );
    assert_eq!(
        map.values().copied().collect::<Vector<_>>(),
        Vector::from_iter([10, 1, 3, 5])
    );
}

#[test]
fn test_values_mut() {
    let mut map: HashMap<u64, u64, BadHasherBuilder> = HashMap::with_hasher(BadHasherBuilder);
    for i in 0..5 {
        map.insert(i, i);
    }

    for value in map.values_mut() {
        *value *= 2;
    }

    for i in 0..5 {
        assert_eq!(map.get(&i), Some(&(i * 2)), "Values should be rewritable in place.");
    }
}

#[test]
fn test_into_iter() {
    let mut map = HashMap::with_hasher(BadHasherBuilder);
    map.insert(ManualHash::new(2, "two"), 2);
    map.insert(ManualHash::new(0, "zero"), 0);
    map.insert(ManualHash::new(1, "one"), 1);

    assert_eq!(
        map.into_iter().map(|(key, value)| (key.value(), value)).collect::<Vector<_>>(),
        Vector::from_iter([("zero", 0), ("one", 1), ("two", 2)]),
        "An owning iterator should yield every entry by value."
    );

    let mut map = HashMap::with_hasher(BadHasherBuilder);
    map.insert(ManualHash::new(0, "zero"), 0);
    map.insert(ManualHash::new(1, "one"), 1);

    assert_eq!(
        map.into_keys().map(|key| key.value()).collect::<Vector<_>>(),
        Vector::from_iter(["zero", "one"])
    );
}

#[test]
fn test_drop_counts() {
    let count = Rc::new(RefCell::new(0));

    let mut map: HashMap<u64, CountedDrop, BadHasherBuilder> =
        HashMap::with_hasher(BadHasherBuilder);
    for i in 0..5 {
        map.insert(i, CountedDrop(count.clone()));
    }
    drop(map);

    assert_eq!(
        *count.borrow(), 5,
        "Dropping a HashMap should drop every remaining value exactly once."
    );

    let count = Rc::new(RefCell::new(0));

    let mut map: HashMap<u64, CountedDrop, BadHasherBuilder> =
        HashMap::with_hasher(BadHasherBuilder);
    for i in 0..5 {
        map.insert(i, CountedDrop(count.clone()));
    }

    let mut iter = map.into_iter();
    iter.next();
    iter.next();
    drop(iter);

    assert_eq!(
        *count.borrow(), 5,
        "Dropping a partially consumed owning iterator should drop the unconsumed values."
    );
}

#[test]
fn test_equality() {
    let mut left: HashMap<&str, u32> = HashMap::new();
    left.insert("one", 1);
    left.insert("two", 2);

    let mut right: HashMap<&str, u32> = HashMap::with_cap(4);
    right.insert("two", 2);
    right.insert("one", 1);

    assert_eq!(
        left, right,
        "Equality should ignore bucket count and insertion order."
    );

    right.remove("two");
    assert_ne!(left, right);
}

#[test]
fn test_extend() {
    let mut map: HashMap<&str, u32> = [("one", 1), ("two", 2)].into_iter().collect();
    map.extend([("three", 3)]);

    assert_eq!(map.len(), 3);
    assert_eq!(map.get("three"), Some(&3));
}

#[test]
fn test_traverse() {
    let mut map: HashMap<u64, u64, BadHasherBuilder> = HashMap::with_hasher(BadHasherBuilder);
    for i in 0..5 {
        map.insert(i, i * 10);
    }

    let mut traverser = map.traverse();
    assert!(traverser.is_valid());
    assert!(!traverser.has_prev(), "A hash map traverser shouldn't support reverse movement.");
    assert_eq!(traverser.prev(), None);

    assert_eq!(
        traverser.get(),
        traverser.get(),
        "Peeking shouldn't advance the traverser."
    );

    let mut seen = 0;
    while traverser.has_next() {
        let peeked = traverser.get();
        assert_eq!(
            traverser.next(), peeked,
            "Consuming should return the item most recently peeked at."
        );
        seen += 1;
    }
    assert_eq!(seen, 5, "The traverser should yield every entry exactly once.");
    assert_eq!(traverser.get(), None);
    assert_eq!(traverser.next(), None, "Advancing past the end shouldn't fail.");
    assert!(traverser.is_valid(), "An exhausted traverser is still valid.");

    traverser.reset();
    assert!(traverser.has_next(), "Resetting should rewind to the first entry.");
    assert_eq!(traverser.iterator().count(), 5);
}

#[test]
fn test_traverse_empty() {
    let map: HashMap<u64, u64> = HashMap::new();
    let traverser = map.traverse();

    assert!(!traverser.has_next());
    assert_eq!(traverser.get(), None);
}

#[test]
fn test_display() {
    let mut map: HashMap<u32, &str> = HashMap::new();
    map.insert(1, "one");

    assert_eq!(format!("{map}"), "#{1: \"one\"}");

    let empty: HashMap<u32, &str> = HashMap::new();
    assert_eq!(format!("{empty}"), "#{}");
}
