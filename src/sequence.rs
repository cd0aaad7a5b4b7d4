//! A mutable sequence built from a node arena and a content store.
//!
//! [`Sequence`] is the thin pairing of a [`NodeArena`], a [`ContentStore`]
//! and the current root. Every edit appends to both stores and moves the
//! root; earlier roots stay valid, so keeping one around is enough to go
//! back to that version later.
//!
//! # Examples
//!
//! ```rust
//! use slabtree::{Sequence, VecStore};
//!
//! let mut text = Sequence::new(VecStore::new());
//! text.insert(0, "hello world".chars()).unwrap();
//! let before = text.root();
//!
//! text.insert(5, ",".chars()).unwrap();
//! text.remove(6, 6).unwrap();
//! let edited: String = text.items().map(|item| item.copied()).collect::<Result<_, _>>().unwrap();
//! assert_eq!(edited, "hello,");
//!
//! text.restore(before).unwrap();
//! assert_eq!(text.len(), Ok(11));
//! ```

use tracing::debug;

use crate::arena::NodeArena;
use crate::config::ArenaConfig;
use crate::error::{Result, TreeError};
use crate::node::NodeIndex;
use crate::store::ContentStore;
use crate::traverse::Positions;

/// An editable sequence of `S::Item`.
///
/// The root is `None` while the sequence is empty.
#[derive(Debug, Clone)]
pub struct Sequence<S> {
    arena: NodeArena,
    store: S,
    root: Option<NodeIndex>,
}

impl<S: ContentStore> Sequence<S> {
    /// Creates an empty sequence over `store`.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_config(store, ArenaConfig::default())
    }

    /// Creates an empty sequence whose arena uses `config`.
    #[must_use]
    pub fn with_config(store: S, config: ArenaConfig) -> Self {
        Self {
            arena: NodeArena::with_config(config),
            store,
            root: None,
        }
    }

    /// The node arena holding every version of this sequence.
    #[inline]
    pub const fn arena(&self) -> &NodeArena {
        &self.arena
    }

    /// The content store referenced by the leaves.
    #[inline]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The current root, usable later with [`Sequence::restore`].
    #[inline]
    pub const fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    /// Number of items in the current version.
    ///
    /// # Errors
    ///
    /// See [`NodeArena::length`].
    pub fn len(&self) -> Result<u32> {
        self.root.map_or(Ok(0), |root| self.arena.length(root))
    }

    /// Returns `true` if the current version holds no items.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `items` so that the first one lands at `offset`.
    ///
    /// Inserting nothing leaves the sequence unchanged. The items go into the
    /// store before the tree is edited; if the edit then fails they stay in
    /// the store, referenced by no version.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Range`] if `offset` is past the end, or any
    /// error of the content store.
    pub fn insert<I>(&mut self, offset: u32, items: I) -> Result<()>
    where
        I: IntoIterator<Item = S::Item>,
    {
        if self.root.is_none() && offset > 0 {
            return Err(TreeError::range(offset, 0, 0));
        }

        let (content_start, added) = self.store.add(items)?;
        if added == 0 {
            return Ok(());
        }
        let leaf = self.arena.add_leaf(content_start, added)?;
        let root = match self.root {
            Some(root) => self.arena.insert_into_node(root, offset, leaf)?,
            None => leaf,
        };
        debug!(offset, content_start, added, root = %root, "inserted into sequence");
        self.root = Some(root);
        Ok(())
    }

    /// Removes `[start, start + length)` from the current version.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Range`] if the range does not fit.
    pub fn remove(&mut self, start: u32, length: u32) -> Result<()> {
        let Some(root) = self.root else {
            if start == 0 && length == 0 {
                return Ok(());
            }
            return Err(TreeError::range(start, length, 0));
        };
        self.root = self.arena.remove_from_node(root, start, length)?;
        debug!(start, length, root = ?self.root, "removed from sequence");
        Ok(())
    }

    /// Makes an earlier root the current version.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::IndexOutOfRange`] if `root` is not in the arena.
    pub fn restore(&mut self, root: Option<NodeIndex>) -> Result<()> {
        if let Some(index) = root {
            self.arena.get(index)?;
        }
        debug!(root = ?root, "restored sequence version");
        self.root = root;
        Ok(())
    }

    /// Content store positions of the current version, in order.
    pub fn positions(&self) -> Option<Positions<'_>> {
        self.root.map(|root| self.arena.positions_from(root))
    }

    /// Reads the items of the current version in order, one store range
    /// per leaf.
    ///
    /// A leaf the store cannot serve yields a single error in place of its
    /// items.
    pub fn items(&self) -> impl Iterator<Item = Result<&S::Item>> + '_ {
        let store = &self.store;
        self.root
            .map(|root| self.arena.leaves_from(root))
            .into_iter()
            .flatten()
            .flat_map(move |leaf| {
                let (range, error) = match store.read_range(leaf.content_start(), leaf.length()) {
                    Ok(range) => (Some(range), None),
                    Err(error) => (None, Some(error)),
                };
                range.into_iter().flatten().map(Ok).chain(error.map(Err))
            })
    }

    /// Clones the items of the current version into a `Vec`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::IndexOutOfRange`] if a leaf references items
    /// missing from the store.
    pub fn to_vec(&self) -> Result<Vec<S::Item>>
    where
        S::Item: Clone,
    {
        self.items().map(|item| item.cloned()).collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
