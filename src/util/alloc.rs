use std::cell::RefCell;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

/// A ZST for exercising the zero-size code paths of the contiguous types.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// Counts how many times clones of this value have been dropped, for leak / double-free
/// assertions in tests.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    #[allow(unused)]
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CountedDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}
