use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Deref};
use std::str;

use crate::collections::contiguous::Vector;

/// A growable string over a [`Vector`] of bytes, upholding the invariant that the bytes are
/// always valid UTF-8.
///
/// Mutation happens at char granularity ([`push`](Text::push), [`pop`](Text::pop)) or in whole
/// `str` slices ([`push_str`](Text::push_str)), so the invariant can't be broken through the
/// public API. Reading goes through [`as_str`](Text::as_str) or the [`Deref`] to [`str`], which
/// cost nothing.
///
/// Text hashes and compares as its `str` contents and borrows as [`str`], so it works as a
/// [`HashMap`](crate::collections::hash::HashMap) key searchable by string slice.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The length of the Text in bytes.
///
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_str` | `O(m)`* for an `m` byte slice |
/// | `pop` | `O(1)` |
/// | `as_str` | `O(1)` |
///
/// \* `O(n)` when the underlying Vector grows.
#[derive(Clone, Default, Eq)]
pub struct Text {
    bytes: Vector<u8>,
}

impl Text {
    /// Creates a new empty Text without allocating.
    pub const fn new() -> Text {
        Text {
            bytes: Vector::new(),
        }
    }

    /// Creates a new empty Text with capacity for `cap` bytes.
    pub fn with_cap(cap: usize) -> Text {
        Text {
            bytes: Vector::with_cap(cap),
        }
    }

    /// Returns the length of the Text in bytes, not chars.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the Text contains no bytes.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Appends `ch` to the end of the Text.
    pub fn push(&mut self, ch: char) {
        let mut buf = [0_u8; 4];
        self.push_str(ch.encode_utf8(&mut buf));
    }

    /// Appends a whole string slice to the end of the Text.
    pub fn push_str(&mut self, slice: &str) {
        self.bytes.extend(slice.bytes());
    }

    /// Removes and returns the last char, or None if the Text is empty.
    pub fn pop(&mut self) -> Option<char> {
        let ch = self.as_str().chars().next_back()?;
        self.bytes.truncate(self.len() - ch.len_utf8());
        Some(ch)
    }

    /// Removes every byte, keeping the allocation.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Returns the contents as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: Every mutation appends or removes whole UTF-8 sequences, so the bytes are
        // always valid UTF-8.
        unsafe { str::from_utf8_unchecked(&self.bytes) }
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl Borrow<str> for Text {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Text {
        let mut text = Text::with_cap(value.len());
        text.push_str(value);
        text
    }
}

impl Extend<char> for Text {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for ch in iter {
            self.push(ch);
        }
    }
}

impl FromIterator<char> for Text {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut text = Text::new();
        text.extend(iter);
        text
    }
}

impl Add<&str> for Text {
    type Output = Text;

    fn add(mut self, rhs: &str) -> Self::Output {
        self.push_str(rhs);
        self
    }
}

impl AddAssign<&str> for Text {
    fn add_assign(&mut self, rhs: &str) {
        self.push_str(rhs);
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

// Matches the str hash so that Borrow-based map lookups agree.
impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Debug for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Text")
            .field("contents", &self.as_str())
            .field("len", &self.len())
            .field("cap", &self.bytes.cap())
            .finish()
    }
}

impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
