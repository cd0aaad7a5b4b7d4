//! The content store boundary.
//!
//! Leaves never hold items themselves. They reference `(start, length)`
//! ranges of an append-only [`ContentStore`] owned by the caller. The tree
//! only ever needs positions; reading the items back is the store's job.
//!
//! [`VecStore`] is the minimal implementation, intended for tests,
//! benchmarks and small callers.

use std::slice;

use crate::error::{Result, TreeError};

/// An append-only store of sequence items addressed by `u32` position.
pub trait ContentStore {
    /// The stored item type.
    type Item;

    /// Iterator returned by [`ContentStore::read_range`].
    type Range<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Appends `items` and returns the `(start, length)` range they occupy.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Range`] if the store would exceed `u32::MAX` items.
    fn add<I>(&mut self, items: I) -> Result<(u32, u32)>
    where
        I: IntoIterator<Item = Self::Item>;

    /// Returns the item at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::IndexOutOfRange`] if `position >= len()`.
    fn get(&self, position: u32) -> Result<&Self::Item>;

    /// Total number of stored items.
    fn len(&self) -> u32;

    /// Returns `true` if nothing has been stored yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads `length` items starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Range`] if the range extends past `len()`.
    fn read_range(&self, start: u32, length: u32) -> Result<Self::Range<'_>>;
}

/// A [`ContentStore`] backed by a single `Vec`.
///
/// # Examples
///
/// ```rust
/// use slabtree::{ContentStore, VecStore};
///
/// let mut store = VecStore::new();
/// assert_eq!(store.add("hello".chars()), Ok((0, 5)));
/// assert_eq!(store.add(" world".chars()), Ok((5, 6)));
///
/// let word: String = store.read_range(6, 5).unwrap().collect();
/// assert_eq!(word, "world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecStore<T> {
    items: Vec<T>,
}

impl<T> VecStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns all stored items in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for VecStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for VecStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> ContentStore for VecStore<T> {
    type Item = T;
    type Range<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn add<I>(&mut self, items: I) -> Result<(u32, u32)>
    where
        I: IntoIterator<Item = T>,
    {
        let start = self.len();
        self.items.extend(items);
        let added = self.items.len() - start as usize;
        match u32::try_from(self.items.len()) {
            Ok(_) => Ok((start, added as u32)),
            Err(_) => {
                self.items.truncate(start as usize);
                Err(TreeError::range(start, u32::MAX, u32::MAX))
            }
        }
    }

    fn get(&self, position: u32) -> Result<&T> {
        self.items
            .get(position as usize)
            .ok_or(TreeError::IndexOutOfRange {
                index: position,
                len: self.len(),
            })
    }

    fn len(&self) -> u32 {
        // `add` never lets the store grow past u32::MAX items
        self.items.len() as u32
    }

    fn read_range(&self, start: u32, length: u32) -> Result<Self::Range<'_>> {
        let bound = self.len();
        let end = start
            .checked_add(length)
            .filter(|end| *end <= bound)
            .ok_or(TreeError::range(start, length, bound))?;
        Ok(self.items[start as usize..end as usize].iter())
    }
}
