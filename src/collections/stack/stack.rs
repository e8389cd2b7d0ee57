use std::fmt::{self, Debug, Display, Formatter};
use std::iter::Rev;
use std::slice;

use crate::collections::contiguous::Vector;

/// A last-in first-out stack over a [`Vector`], pushing and popping at the back.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Stack.
///
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
///
/// \* `O(n)` when the underlying Vector grows.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stack<T> {
    items: Vector<T>,
}

impl<T> Stack<T> {
    /// Creates a new Stack without allocating.
    pub const fn new() -> Stack<T> {
        Stack {
            items: Vector::new(),
        }
    }

    /// Creates a new Stack with capacity for `cap` items.
    pub fn with_cap(cap: usize) -> Stack<T> {
        Stack {
            items: Vector::with_cap(cap),
        }
    }

    /// Returns the number of items on the Stack.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the Stack holds no items.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes `value` onto the top of the Stack.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the top item, or None if the Stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns a reference to the top item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns a mutable reference to the top item without removing it.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Removes (and drops) every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over the items in pop order, from the top of the Stack down.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> From<Vector<T>> for Stack<T> {
    /// Adopts the Vector as the backing store, its back becoming the top of the Stack.
    fn from(items: Vector<T>) -> Stack<T> {
        Stack {
            items,
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: Vector::from_iter(iter),
        }
    }
}

/// A borrowed iterator over a stack's items in pop order.
pub struct Iter<'a, T>(
    Rev<slice::Iter<'a, T>>
);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.items.iter().rev())
    }
}

/// An owning iterator over a stack's items in pop order.
pub struct IntoIter<T>(
    Stack<T>
);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("items", &self.items)
            .finish()
    }
}

impl<T: Debug> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Top item first, matching pop order.
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vector<String>>()
                .join(") : (")
        )
    }
}
