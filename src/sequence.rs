//! A small ordered container with positional access, used to store the
//! coefficients of polynomials.
//!
//! All structural operations consume the sequence and return the result, so
//! that a sequence can be treated as an immutable value:
//!
//! ```
//! use taylorica::sequence::Sequence;
//!
//! let s: Sequence<u32> = (0..5).collect();
//! let (head, tail) = s.clone().split(2);
//! assert_eq!(head.as_slice(), &[0, 1]);
//! assert_eq!(head.concat(tail), s);
//! ```
use std::ops::Index;

use smallvec::SmallVec;

const INLINE_CAPACITY: usize = 8;

/// An ordered, indexable list of values. Short sequences are stored inline.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Sequence<T> {
    items: SmallVec<[T; INLINE_CAPACITY]>,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Sequence::new()
    }
}

impl<T> Sequence<T> {
    /// Create an empty sequence.
    #[inline]
    pub fn new() -> Sequence<T> {
        Sequence {
            items: SmallVec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Sequence<T> {
        Sequence {
            items: SmallVec::with_capacity(cap),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the element at position `index`, if it exists.
    #[inline]
    pub fn at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    #[inline]
    pub(crate) fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Append `value` at the end.
    pub fn push_back(mut self, value: T) -> Sequence<T> {
        self.items.push(value);
        self
    }

    /// Split off the first element. Returns `None` for an empty sequence.
    pub fn pop_front(mut self) -> Option<(T, Sequence<T>)> {
        if self.items.is_empty() {
            return None;
        }

        let head = self.items.remove(0);
        Some((head, self))
    }

    /// Split the sequence into the elements before `index` and the elements
    /// from `index` onwards.
    ///
    /// Panics if `index > self.len()`.
    pub fn split(mut self, index: usize) -> (Sequence<T>, Sequence<T>) {
        assert!(
            index <= self.items.len(),
            "Split index {} out of range for a sequence of length {}",
            index,
            self.items.len()
        );

        let tail = self.items.drain(index..).collect();
        (self, Sequence { items: tail })
    }

    /// Insert `value` so that it ends up at position `index`.
    pub fn insert(mut self, index: usize, value: T) -> Sequence<T> {
        self.items.insert(index, value);
        self
    }

    /// Remove the element at position `index`.
    pub fn remove(mut self, index: usize) -> Sequence<T> {
        self.items.remove(index);
        self
    }

    /// Append all elements of `other`.
    pub fn concat(mut self, other: Sequence<T>) -> Sequence<T> {
        self.items.extend(other.items);
        self
    }
}

impl<T: Clone> Sequence<T> {
    /// Create a sequence of `len` copies of `value`.
    pub fn from_elem(value: T, len: usize) -> Sequence<T> {
        Sequence {
            items: SmallVec::from_elem(value, len),
        }
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(v: Vec<T>) -> Self {
        Sequence {
            items: SmallVec::from_vec(v),
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; INLINE_CAPACITY]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
