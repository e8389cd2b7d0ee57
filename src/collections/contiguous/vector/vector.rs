use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use super::VectorTraverser;
use crate::collections::contiguous::Array;
use crate::util::result::ResultExtension;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, based on [`Array<T>`].
///
/// Element access goes through the [`Deref`] implementation, so all of the usual slice methods
/// (`get`, `first`, `iter`, indexing and so on) apply directly.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    pub const fn new() -> Vector<T> {
        Vector {
            arr: Array::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::new_uninit(cap),
            len: 0,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the current capacity of the Vector. The capacity is exactly the value provided to
    /// the capacity manipulation functions, with no growth slack.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pushes the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the new capacity overflows.
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.arr[self.len] = MaybeUninit::new(value);
        self.len += 1;
    }

    /// Removes and returns the last element, or None if the Vector is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.len = self.len.checked_sub(1)?;

        // SAFETY: The slot at the old last index was initialized and is now out of bounds, so it
        // can't be read again.
        Some(unsafe { self.arr[self.len].assume_init_read() })
    }

    /// Inserts `value` at `index`, shifting all later elements one position right. `index` may
    /// equal the length, in which case this is a push.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length, or on capacity overflow.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// As [`insert`](Vector::insert), reporting failure instead of panicking.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len }.into());
        }
        self.try_reserve(1)?;

        // SAFETY: index <= len < cap, so both the copy region and the destination slot are within
        // the allocation. The vacated slot is immediately rewritten.
        unsafe {
            let base = self.arr.as_mut_ptr();
            ptr::copy(base.add(index), base.add(index + 1), self.len - index);
        }
        self.arr[index] = MaybeUninit::new(value);
        self.len += 1;

        Ok(())
    }

    /// Removes and returns the element at `index`, shifting all later elements one position left.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// As [`remove`](Vector::remove), reporting failure instead of panicking.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        // SAFETY: index < len, so the slot is initialized; the copy closes the gap over it and
        // the duplicate final slot falls out of bounds when len shrinks.
        unsafe {
            let value = self.arr[index].assume_init_read();
            let base = self.arr.as_mut_ptr();
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Replaces the element at `index` with `new_value`, returning the previous element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        mem::replace(&mut self[index], new_value)
    }

    /// Shortens the Vector to `new_len`, dropping the elements beyond it. A no-op when `new_len`
    /// is not less than the current length.
    pub fn truncate(&mut self, new_len: usize) {
        while self.len > new_len {
            self.pop();
        }
    }

    /// Removes (and drops) every element, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Increases the capacity of the Vector to ensure that len + `extra` elements will fit
    /// without reallocation.
    ///
    /// # Panics
    /// Panics if the required capacity overflows.
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    /// As [`reserve`](Vector::reserve), reporting overflow instead of panicking.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        let needed = self.len.checked_add(extra).ok_or(CapacityOverflow)?;
        if needed > self.cap() {
            let grown = cmp::max(
                self.cap().checked_mul(GROWTH_FACTOR).unwrap_or(needed),
                MIN_CAP,
            );
            self.adjust_cap(cmp::max(needed, grown));
        }

        Ok(())
    }

    /// Returns a traverser over the Vector's elements. Unlike the hash map's, this traverser
    /// supports reverse movement.
    pub fn traverse(&self) -> VectorTraverser<'_, T> {
        VectorTraverser::new(self)
    }

    /// Grows the Vector by the growth factor, ensuring that it can hold at least one more
    /// element.
    ///
    /// # Panics
    /// Panics if the new capacity overflows.
    pub(crate) fn grow(&mut self) {
        let new_cap = match self.cap().checked_mul(GROWTH_FACTOR) {
            Some(doubled) => cmp::max(doubled, MIN_CAP),
            None => panic!("Capacity overflow!"),
        };

        self.adjust_cap(new_cap);
    }

    /// Moves the initialized elements into a fresh allocation of exactly `new_cap` slots.
    /// `new_cap` must not be less than the current length.
    pub(crate) fn adjust_cap(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);

        let mut new_arr = Array::<T>::new_uninit(new_cap);

        // SAFETY: Both allocations hold at least len slots and don't overlap. The old Array is
        // replaced immediately after, and dropping Array<MaybeUninit<T>> releases only the
        // allocation, so the moved values aren't dropped twice.
        unsafe {
            ptr::copy_nonoverlapping(self.arr.as_ptr(), new_arr.as_mut_ptr(), self.len);
        }

        self.arr = new_arr;
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len slots are always initialized.
        unsafe { slice::from_raw_parts(self.arr.as_ptr() as *const T, self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for Deref, with exclusive access through &mut self.
        unsafe { slice::from_raw_parts_mut(self.arr.as_mut_ptr() as *mut T, self.len) }
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: Exactly the initialized prefix is dropped; the Array then frees the allocation
        // without touching element values.
        unsafe { ptr::drop_in_place(&mut **self as *mut [T]) };
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Vector::new()
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);
        vec.extend(iter);
        vec
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
