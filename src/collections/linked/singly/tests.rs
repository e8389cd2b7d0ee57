#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::util::alloc::CountedDrop;

#[test]
fn test_front_operations() {
    let mut list = SinglyLinkedList::new();
    list.push_front(1);
    list.push_front(2);
    list.push_front(3);

    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&3));
    assert_eq!(list.pop_front(), Some(3));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
}

#[test]
fn test_push_back_preserves_order() {
    let mut list = SinglyLinkedList::new();
    for i in 0..5 {
        list.push_back(i);
    }

    assert_eq!(list.iter().copied().collect::<Vector<_>>(), (0..5).collect());
}

#[test]
fn test_indexing() {
    let list: SinglyLinkedList<u8> = (10..15).collect();
    assert_eq!(*list.get(0), 10);
    assert_eq!(*list.get(4), 14);
    assert_eq!(
        list.try_get(5),
        Err(IndexOutOfBounds { index: 5, len: 5 }),
        "Out of bounds access should report the index and length."
    );
}

#[test]
fn test_reverse() {
    let mut list: SinglyLinkedList<u8> = (0..5).collect();
    list.reverse();
    assert_eq!(
        list.iter().copied().collect::<Vector<_>>(),
        (0..5).rev().collect()
    );
    assert_eq!(list.len(), 5);
}

#[test]
fn test_iter_mut() {
    let mut list: SinglyLinkedList<u8> = (0..5).collect();
    for value in list.iter_mut() {
        *value *= 2;
    }
    assert_eq!(
        list.into_iter().collect::<Vector<_>>(),
        [0, 2, 4, 6, 8].into_iter().collect()
    );
}

#[test]
fn test_contains() {
    let list: SinglyLinkedList<u8> = (0..5).collect();
    assert!(list.contains(&3));
    assert!(!list.contains(&7));
}

#[test]
fn test_long_list_drop() {
    // Long enough that a recursive drop would exhaust the stack.
    let list: SinglyLinkedList<u64> = (0..200_000).collect();
    assert_eq!(list.len(), 200_000);
    drop(list);

    let counter = CountedDrop::new(0);
    let list: SinglyLinkedList<_> = (0..10).map(|_| counter.clone()).collect();
    drop(list);
    assert_eq!(*counter.borrow(), 10, "Every node's value should be dropped exactly once.");
}

#[test]
fn test_display() {
    let list: SinglyLinkedList<u8> = (1..=3).collect();
    assert_eq!(format!("{list}"), "(1) -> (2) -> (3)");
}
