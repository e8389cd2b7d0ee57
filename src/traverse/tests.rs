#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::collections::hash::HashMap;
use crate::util::hash::BadHasherBuilder;

fn digits() -> Vector<u32> {
    (0..10).collect()
}

#[test]
fn test_filter() {
    let vec = digits();
    let mut evens = vec.traverse().filter(|item| **item % 2 == 0);

    assert_eq!(
        evens.get(), Some(&0),
        "A filter should rest on the first matching item from construction."
    );
    assert_eq!(evens.next(), Some(&0));
    assert_eq!(
        evens.get(), Some(&2),
        "Consuming an item should advance straight past rejected items."
    );
    assert_eq!(evens.next(), Some(&2));

    evens.reset();
    assert_eq!(evens.iterator().copied().collect::<Vector<_>>(), Vector::from_iter([0, 2, 4, 6, 8]));
}

#[test]
fn test_filter_rejects_all() {
    let vec = digits();
    let mut none = vec.traverse().filter(|item| **item > 100);

    assert!(!none.has_next());
    assert_eq!(none.get(), None);
    assert_eq!(none.next(), None);
}

#[test]
fn test_map() {
    let vec = digits();
    let mut squares = vec.traverse().map(|item| item * item);

    assert_eq!(squares.get(), Some(0));
    assert_eq!(squares.next(), Some(0));
    assert_eq!(squares.next(), Some(1));
    assert_eq!(squares.next(), Some(4));

    assert!(squares.has_prev(), "A map over a bidirectional traverser stays bidirectional.");
    assert_eq!(squares.prev(), Some(4));
    assert_eq!(squares.get(), Some(4));
}

#[test]
fn test_take() {
    let vec = digits();
    let mut first = vec.traverse().take(3);

    assert_eq!(first.iterator().copied().collect::<Vector<_>>(), Vector::from_iter([0, 1, 2]));

    let mut first = vec.traverse().take(3);
    first.next();
    first.next();
    first.next();
    assert!(!first.has_next(), "A take should report exhaustion at its limit.");
    assert_eq!(first.get(), None);
    assert_eq!(first.next(), None);

    first.reset();
    assert_eq!(first.get(), Some(&0), "Resetting should restore the full limit.");

    let mut over = vec.traverse().take(100);
    assert_eq!(over.iterator().count(), 10);
}

#[test]
fn test_skip() {
    let vec = digits();
    let mut rest = vec.traverse().skip(7);

    assert_eq!(rest.get(), Some(&7), "The skip should be applied from construction.");
    assert!(
        !rest.has_prev(),
        "A skip shouldn't allow stepping back into the discarded region."
    );
    assert_eq!(rest.prev(), None);

    assert_eq!(rest.iterator().copied().collect::<Vector<_>>(), Vector::from_iter([7, 8, 9]));

    let mut rest = vec.traverse().skip(7);
    rest.next();
    rest.reset();
    assert_eq!(rest.get(), Some(&7), "Resetting should re-apply the skip.");

    let empty = vec.traverse().skip(100);
    assert!(!empty.has_next(), "Skipping past the end should exhaust the traverser.");
}

#[test]
fn test_enumerate() {
    let vec: Vector<&str> = Vector::from_iter(["a", "b", "c"]);
    let mut pairs = vec.traverse().enumerate();

    assert_eq!(pairs.get(), Some((0, &"a")));
    assert_eq!(pairs.next(), Some((0, &"a")));
    assert_eq!(pairs.get(), Some((1, &"b")));

    pairs.reset();
    assert_eq!(pairs.next(), Some((0, &"a")), "Resetting should restart the count.");
}

#[test]
fn test_composition() {
    let vec = digits();
    let composed = vec
        .traverse()
        .filter(|item| **item % 2 == 0)
        .map(|item| item * 10)
        .skip(1)
        .take(3)
        .enumerate();

    assert_eq!(
        composed.iterator().collect::<Vector<_>>(),
        Vector::from_iter([(0, 20), (1, 40), (2, 60)]),
        "Adapters should compose in application order."
    );
}

#[test]
fn test_over_hash_map() {
    let mut map: HashMap<u64, u64, BadHasherBuilder> = HashMap::with_hasher(BadHasherBuilder);
    for i in 0..10 {
        map.insert(i, i * 10);
    }

    let large = map
        .traverse()
        .filter(|(_, value)| **value >= 50)
        .map(|(key, _)| *key);

    assert_eq!(
        large.iterator().collect::<Vector<_>>(),
        Vector::from_iter([5, 6, 7, 8, 9]),
        "Adapters should compose over any traverser, including the hash map's."
    );
}

#[test]
fn test_iterator_bridge() {
    let vec = digits();
    let total: u32 = vec.traverse().iterator().sum();

    assert_eq!(total, 45, "The bridge should drive a traverser as a standard Iterator.");
}
