use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::{ManuallyDrop, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

/// An array that is sized at runtime and allocated directly, similar to a [`Box<[T]>`](Box).
///
/// This is the only type in the crate which talks to the allocator for contiguous memory;
/// [`Vector`](crate::collections::contiguous::Vector) and the hash map's bucket table are both
/// built on it. The size is fixed at creation and every element is always initialized, except
/// through the explicit [`MaybeUninit`] constructors used by [`Vector`].
///
/// # Time Complexity
/// `get` and `size` are `O(1)`; creation and drop are `O(n)`.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Returns the size of the Array.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array with size 0. No memory is allocated.
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size);

        Array {
            ptr: Array::<MaybeUninit<T>>::make_ptr(layout),
            size,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array with the provided `size`, initializing every element with a value
    /// produced by `fill`.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    pub fn repeat_with<F: FnMut() -> T>(size: usize, mut fill: F) -> Array<T> {
        let mut arr = Array::<T>::new_uninit(size);

        for slot in arr.iter_mut() {
            slot.write(fill());
        }

        // SAFETY: Every slot has just been written.
        unsafe { arr.assume_init() }
    }

    /// Returns a read pointer to the first element. Only meaningful while the Array is alive.
    pub(crate) const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns a write pointer to the first element. Only meaningful while the Array is alive.
    pub(crate) const fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Computes the layout for an allocation of `size` elements.
    ///
    /// # Panics
    /// Panics if the layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        match Layout::array::<T>(size) {
            Ok(layout) => layout,
            Err(_) => panic!("Capacity overflow!"),
        }
    }

    /// Allocates memory for the provided `layout`, or returns a dangling (but well-aligned)
    /// pointer for zero-size layouts, which must never be deallocated.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            return NonNull::dangling();
        }

        // SAFETY: The layout has a non-zero size.
        let raw = unsafe { alloc::alloc(layout) };

        match NonNull::new(raw as *mut T) {
            Some(ptr) => ptr,
            None => alloc::handle_alloc_error(layout),
        }
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Converts to `Array<T>`, asserting that all elements are initialized.
    ///
    /// # Safety
    /// It is the responsibility of the caller to ensure that every element has been written before
    /// calling this method.
    pub unsafe fn assume_init(self) -> Array<T> {
        let arr = ManuallyDrop::new(self);

        Array {
            ptr: arr.ptr.cast(),
            size: arr.size,
            _phantom: PhantomData,
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: ptr is valid for size elements (or dangling with size 0 / a ZST, which
        // from_raw_parts permits), and all elements are initialized outside of MaybeUninit use.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for Deref, with exclusive access through &mut self.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: All elements are initialized and are never used again.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size)) };

        let layout = Array::<T>::make_layout(self.size);
        if layout.size() != 0 {
            // SAFETY: The pointer was allocated with this exact layout, which is non-zero sized.
            unsafe { alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout) };
        }
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Array::new()
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}
