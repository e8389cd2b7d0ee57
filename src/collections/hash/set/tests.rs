#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::traverse::Traverse;
use crate::util::hash::{BadHasherBuilder, ManualHash};

fn set_of(items: impl IntoIterator<Item = u64>) -> HashSet<u64, BadHasherBuilder> {
    let mut set = HashSet::with_hasher(BadHasherBuilder);
    set.extend(items);
    set
}

#[test]
fn test_insert_and_contains() {
    let mut set: HashSet<&str> = HashSet::new();

    assert!(set.insert("one"), "Inserting a new element should report true.");
    assert!(!set.insert("one"), "Inserting a duplicate element should report false.");
    assert!(set.insert("two"));

    assert_eq!(set.len(), 2, "Duplicate insertions shouldn't change the length.");
    assert!(set.contains("one"));
    assert!(!set.contains("three"));
}

#[test]
fn test_remove() {
    let mut set: HashSet<String> = HashSet::new();
    set.insert("one".to_string());

    assert_eq!(
        set.remove("one"), Some("one".to_string()),
        "Removal should return the stored element."
    );
    assert_eq!(set.remove("one"), None);
    assert!(set.is_empty());
}

#[test]
fn test_hash_collisions() {
    let mut set = HashSet::with_hasher(BadHasherBuilder);
    set.insert(ManualHash::new(0, "zero"));
    set.insert(ManualHash::new(0, "one"));
    set.insert(ManualHash::new(2, "two"));
    set.insert(ManualHash::new(0, "three"));
    set.insert(ManualHash::new(2, "four"));
    set.insert(ManualHash::new(1, "five"));

    set.remove(&ManualHash::new(0, "zero"));
    set.remove(&ManualHash::new(2, "two"));

    assert_eq!(
        set.into_iter().map(|i| i.value()).collect::<Vector<_>>(),
        Vector::from_iter(["three", "one", "five", "four"]),
        "HashSet should handle hash collisions so that no elements are lost during removal."
    );
}

#[test]
fn test_retain() {
    let mut set = set_of(0..10);
    set.retain(|item| item % 2 == 0);

    assert_eq!(set.len(), 5);
    assert!(set.contains(&4));
    assert!(!set.contains(&5));
}

#[test]
fn test_difference() {
    let a = set_of([1, 2, 3, 4]);
    let b = set_of([3, 4, 5, 6]);

    assert_eq!(
        a.difference(&b).copied().collect::<Vector<_>>(),
        Vector::from_iter([1, 2])
    );
    assert_eq!(
        (&a - &b).into_iter().collect::<Vector<_>>(),
        Vector::from_iter([1, 2])
    );
}

#[test]
fn test_intersection() {
    let a = set_of([1, 2, 3, 4]);
    let b = set_of([3, 4, 5, 6]);

    assert_eq!(
        a.intersection(&b).copied().collect::<Vector<_>>(),
        Vector::from_iter([3, 4])
    );
    assert_eq!(&a & &b, set_of([3, 4]));
}

#[test]
fn test_union() {
    let a = set_of([1, 2, 3, 4]);
    let b = set_of([3, 4, 5, 6]);

    assert_eq!(
        a.union(&b).copied().collect::<Vector<_>>(),
        Vector::from_iter([1, 2, 3, 4, 5, 6]),
        "A union should yield shared elements exactly once."
    );
    assert_eq!(&a | &b, set_of([1, 2, 3, 4, 5, 6]));
}

#[test]
fn test_symmetric_difference() {
    let a = set_of([1, 2, 3, 4]);
    let b = set_of([3, 4, 5, 6]);

    assert_eq!(
        a.symmetric_difference(&b).copied().collect::<Vector<_>>(),
        Vector::from_iter([1, 2, 5, 6])
    );
    assert_eq!(&a ^ &b, set_of([1, 2, 5, 6]));
}

#[test]
fn test_assign_ops() {
    let mut set = set_of([1, 2, 3]);
    set |= set_of([3, 4]);
    assert_eq!(set, set_of([1, 2, 3, 4]));

    set &= set_of([2, 3, 4, 5]);
    assert_eq!(set, set_of([2, 3, 4]));

    set ^= set_of([3, 4, 5]);
    assert_eq!(set, set_of([2, 5]));

    set -= set_of([5, 6]);
    assert_eq!(set, set_of([2]));
}

#[test]
fn test_subsets() {
    let a = set_of([1, 2]);
    let b = set_of([1, 2, 3]);

    assert!(a.is_subset(&b));
    assert!(!b.is_subset(&a));
    assert!(b.is_superset(&a));
    assert!(set_of([]).is_subset(&a), "The empty set is a subset of everything.");
}

#[test]
fn test_equality() {
    assert_eq!(set_of([1, 2, 3]), set_of([3, 2, 1]));
    assert_ne!(set_of([1, 2, 3]), set_of([1, 2]));
}

#[test]
fn test_clone() {
    let set = set_of([1, 2, 3]);
    let mut clone = set.clone();
    clone.insert(4);

    assert_eq!(set.len(), 3, "Mutating a clone shouldn't affect the original.");
    assert_eq!(clone.len(), 4);
}

#[test]
fn test_traverse() {
    let set = set_of([1, 2, 3]);
    let mut traverser = set.traverse();

    assert!(traverser.is_valid());
    assert!(!traverser.has_prev());
    assert_eq!(traverser.get(), Some(&1));
    assert_eq!(traverser.get(), Some(&1), "Peeking shouldn't advance the traverser.");
    assert_eq!(traverser.next(), Some(&1));
    assert_eq!(traverser.next(), Some(&2));
    assert_eq!(traverser.next(), Some(&3));
    assert_eq!(traverser.next(), None);

    traverser.reset();
    assert_eq!(traverser.get(), Some(&1));
}

#[test]
fn test_display() {
    let set = set_of([1, 2, 3]);
    assert_eq!(format!("{set}"), "#{1, 2, 3}");
    assert_eq!(format!("{}", set_of([])), "#{}");
}
