//! Append-only contiguous node storage.
//!
//! [`NodeArena`] is the single owner of every node. Nodes are appended and
//! addressed by [`NodeIndex`]; they are never mutated or freed one at a
//! time. A node that no root reaches any more simply stays in place as
//! inert garbage until the whole arena is dropped.
//!
//! # Examples
//!
//! ```rust
//! use slabtree::{Node, NodeArena};
//!
//! let mut arena = NodeArena::new();
//! let left = arena.add_leaf(0, 10).unwrap();
//! let right = arena.add_leaf(10, 5).unwrap();
//! let root = arena.add_branch(left, right).unwrap();
//!
//! assert_eq!(arena.size(), 3);
//! assert!(matches!(arena.get(root), Ok(Node::Branch(_))));
//! assert_eq!(arena.length(root), Ok(15));
//! ```

use tracing::trace;

use crate::config::ArenaConfig;
use crate::error::{Result, TreeError};
use crate::node::{Branch, Leaf, Node, NodeIndex};

/// An append-only store of [`Node`]s.
///
/// # Time Complexity
///
/// | Operation    | Complexity       |
/// |--------------|------------------|
/// | `add_leaf`   | O(1) amortized   |
/// | `add_branch` | O(1) amortized   |
/// | `get`        | O(1)             |
/// | `size`       | O(1)             |
///
/// The arena is not synchronized. Readers holding an old root are never
/// affected by later appends, but concurrent mutation needs an external lock.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
    config: ArenaConfig,
}

impl NodeArena {
    /// Creates an empty arena with the default [`ArenaConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    /// Creates an empty arena with one chunk of capacity reserved.
    #[must_use]
    pub fn with_config(config: ArenaConfig) -> Self {
        Self {
            nodes: Vec::with_capacity(config.chunk_nodes()),
            config,
        }
    }

    /// The allocation settings of this arena.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Number of nodes ever appended.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> u32 {
        // `push` refuses to grow past u32::MAX entries
        self.nodes.len() as u32
    }

    /// Returns `true` if no node has been appended yet.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes that fit before the next reallocation.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns a copy of the node at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::IndexOutOfRange`] if `index >= size()`.
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Result<Node> {
        self.nodes
            .get(index.get() as usize)
            .copied()
            .ok_or(TreeError::IndexOutOfRange {
                index: index.get(),
                len: self.size(),
            })
    }

    /// Appends a leaf covering `[content_start, content_start + length)`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Range`] if `length == 0` or the range end
    /// overflows `u32`.
    pub fn add_leaf(&mut self, content_start: u32, length: u32) -> Result<NodeIndex> {
        let leaf = Leaf::new(content_start, length);
        if length == 0 {
            return Err(TreeError::range(content_start, length, u32::MAX));
        }
        leaf.end()?;
        self.push(Node::Leaf(leaf))
    }

    /// Appends a branch joining two existing subtrees.
    ///
    /// Both children must already be in the arena, which keeps every branch
    /// strictly newer than its children and the structure acyclic.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::IndexOutOfRange`] if either child is not a node
    /// of this arena.
    pub fn add_branch(&mut self, left: NodeIndex, right: NodeIndex) -> Result<NodeIndex> {
        self.get(left)?;
        self.get(right)?;
        self.push(Node::Branch(Branch::new(left, right)))
    }

    /// Appends a leaf value produced by a split or a removal.
    pub(crate) fn push_leaf(&mut self, leaf: Leaf) -> Result<NodeIndex> {
        self.add_leaf(leaf.content_start(), leaf.length())
    }

    /// Reads a node whose index came out of this arena's own structure.
    ///
    /// Every child index was checked by `add_branch`, so reachable indices
    /// are always in bounds.
    #[inline]
    pub(crate) fn node(&self, index: NodeIndex) -> Node {
        self.nodes[index.get() as usize]
    }

    fn push(&mut self, node: Node) -> Result<NodeIndex> {
        let Ok(raw) = u32::try_from(self.nodes.len()) else {
            return Err(TreeError::IndexOutOfRange {
                index: u32::MAX,
                len: u32::MAX,
            });
        };
        self.reserve_chunk();
        self.nodes.push(node);
        Ok(NodeIndex::new(raw))
    }

    fn reserve_chunk(&mut self) {
        let capacity = self.nodes.capacity();
        if self.nodes.len() < capacity {
            return;
        }
        let additional = self.config.chunk_nodes().max(capacity);
        self.nodes.reserve_exact(additional);
        trace!(
            old_capacity = capacity,
            new_capacity = self.nodes.capacity(),
            "node arena grew"
        );
    }
}

// =============================================================================
// Tests
// =============================================================================
