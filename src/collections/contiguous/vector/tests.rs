#![cfg(test)]

use super::*;
use crate::traverse::Traverse;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::IndexOrCapOverflow;

#[test]
fn test_push_pop() {
    let mut vec = Vector::new();
    for i in 0..10 {
        vec.push(i);
    }

    assert_eq!(vec.len(), 10);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

    for i in (0..10).rev() {
        assert_eq!(vec.pop(), Some(i));
    }
    assert_eq!(vec.pop(), None, "Popping an empty Vector should yield None.");
    assert!(vec.is_empty());
}

#[test]
fn test_growth() {
    let mut vec = Vector::with_cap(2);
    vec.push(1);
    vec.push(2);
    assert_eq!(vec.cap(), 2, "No growth should occur within the capacity.");
    vec.push(3);
    assert_eq!(vec.cap(), 4, "Capacity should double when exceeded.");
}

#[test]
fn test_insert_remove() {
    let mut vec: Vector<u8> = (0..5).collect();
    vec.insert(2, 100);
    assert_eq!(&*vec, &[0, 1, 100, 2, 3, 4]);

    vec.insert(6, 200);
    assert_eq!(&*vec, &[0, 1, 100, 2, 3, 4, 200], "Insertion at len should append.");

    assert_eq!(vec.remove(2), 100);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4, 200]);

    assert!(matches!(
        vec.try_insert(100, 1),
        Err(IndexOrCapOverflow::IndexOutOfBounds(_))
    ));
    assert!(vec.try_remove(100).is_err());
    assert_eq!(vec.len(), 6, "Failed operations should leave the Vector unchanged.");
}

#[test]
fn test_replace_truncate() {
    let mut vec: Vector<u8> = (0..5).collect();
    assert_eq!(vec.replace(1, 100), 1);
    assert_eq!(&*vec, &[0, 100, 2, 3, 4]);

    vec.truncate(2);
    assert_eq!(&*vec, &[0, 100]);
    vec.truncate(10);
    assert_eq!(vec.len(), 2, "Truncating above the length should do nothing.");
}

#[test]
fn test_drop_behaviour() {
    let counter = CountedDrop::new(0);

    let mut vec = Vector::new();
    for _ in 0..5 {
        vec.push(counter.clone());
    }
    vec.pop();
    assert_eq!(*counter.borrow(), 1, "Popped elements are dropped with their binding.");

    drop(vec);
    assert_eq!(*counter.borrow(), 5, "Dropping the Vector drops every remaining element.");

    let counter = CountedDrop::new(0);
    let vec: Vector<_> = (0..4).map(|_| counter.clone()).collect();
    let mut iter = vec.into_iter();
    iter.next();
    drop(iter);
    assert_eq!(
        *counter.borrow(),
        4,
        "An owning iterator drops the elements it never yielded."
    );
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..100 {
        vec.push(ZeroSizedType);
    }
    assert_eq!(vec.len(), 100);
    assert_eq!(vec.pop(), Some(ZeroSizedType));
    assert_eq!(vec.iter().count(), 99);
}

#[test]
fn test_traverser_both_directions() {
    let vec: Vector<u8> = (1..=3).collect();
    let mut traverser = vec.traverse();

    assert!(traverser.is_valid());
    assert!(!traverser.has_prev(), "Nothing precedes the initial position.");
    assert_eq!(traverser.get(), Some(&1));
    assert_eq!(traverser.get(), Some(&1), "Peeking should not advance.");

    assert_eq!(traverser.next(), Some(&1));
    assert_eq!(traverser.next(), Some(&2));
    assert!(traverser.has_prev());
    assert_eq!(traverser.prev(), Some(&2), "prev should step back to the last consumed element.");
    assert_eq!(traverser.get(), Some(&2));

    assert_eq!(traverser.next(), Some(&2));
    assert_eq!(traverser.next(), Some(&3));
    assert!(!traverser.has_next());
    assert_eq!(traverser.next(), None, "next past the end should fail without panicking.");

    traverser.reset();
    assert_eq!(traverser.get(), Some(&1));
}

#[test]
fn test_iteration() {
    let vec: Vector<u8> = (0..5).collect();
    assert_eq!(vec.iter().copied().sum::<u8>(), 10);
    assert_eq!(vec.into_iter().rev().collect::<Vector<_>>(), (0..5).rev().collect());
}
