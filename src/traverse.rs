//! Ordered traversal of a subtree.
//!
//! All traversals are plain pull-based iterators over a borrowed arena.
//! They do no work until polled and hold nothing but a small stack of
//! pending indices, so stopping early is just dropping the iterator. Calling
//! the same method again on the same root restarts from the beginning.
//!
//! * [`NodeArena::nodes`]: every node, pre-order (branch, then left, then right)
//! * [`NodeArena::leaves`]: leaves left to right
//! * [`NodeArena::positions`]: content store positions in logical order
//!
//! # Examples
//!
//! ```rust
//! use slabtree::NodeArena;
//!
//! let mut arena = NodeArena::new();
//! let left = arena.add_leaf(4, 2).unwrap();
//! let right = arena.add_leaf(0, 3).unwrap();
//! let root = arena.add_branch(left, right).unwrap();
//!
//! let positions: Vec<u32> = arena.positions(root).unwrap().collect();
//! assert_eq!(positions, vec![4, 5, 0, 1, 2]);
//! ```

use std::iter::FusedIterator;
use std::ops::Range;

use smallvec::SmallVec;

use crate::arena::NodeArena;
use crate::error::Result;
use crate::node::{Leaf, Node, NodeIndex};

/// Pending indices kept inline before the traversal stack spills to the heap.
const INLINE_STACK_DEPTH: usize = 32;

type IndexStack = SmallVec<[NodeIndex; INLINE_STACK_DEPTH]>;

impl NodeArena {
    /// Iterates over every node below `root` in pre-order.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::IndexOutOfRange`](crate::TreeError::IndexOutOfRange)
    /// if `root` is not in the arena.
    pub fn nodes(&self, root: NodeIndex) -> Result<Nodes<'_>> {
        self.get(root)?;
        Ok(Nodes::new(self, root))
    }

    /// Calls `visit` on every node below `root`, branches before their
    /// children and left children before right ones.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::IndexOutOfRange`](crate::TreeError::IndexOutOfRange)
    /// if `root` is not in the arena.
    pub fn walk<F>(&self, root: NodeIndex, mut visit: F) -> Result<()>
    where
        F: FnMut(NodeIndex, &Node),
    {
        for (index, node) in self.nodes(root)? {
            visit(index, &node);
        }
        Ok(())
    }

    /// Iterates over the leaves below `root` from left to right.
    ///
    /// Concatenating the referenced ranges in emission order gives the
    /// logical content of the subtree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::IndexOutOfRange`](crate::TreeError::IndexOutOfRange)
    /// if `root` is not in the arena.
    pub fn leaves(&self, root: NodeIndex) -> Result<Leaves<'_>> {
        self.get(root)?;
        Ok(self.leaves_from(root))
    }

    /// Iterates over the content store positions covered by `root`, in
    /// logical order.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::IndexOutOfRange`](crate::TreeError::IndexOutOfRange)
    /// if `root` is not in the arena.
    pub fn positions(&self, root: NodeIndex) -> Result<Positions<'_>> {
        self.get(root)?;
        Ok(self.positions_from(root))
    }

    /// Total number of items below `root`.
    ///
    /// # Errors
    ///
    /// See [`NodeArena::item_count`].
    #[inline]
    pub fn length(&self, root: NodeIndex) -> Result<u32> {
        self.item_count(root).map(|(total, _)| total)
    }

    /// Leaf iterator for an index known to be in bounds.
    pub(crate) fn leaves_from(&self, root: NodeIndex) -> Leaves<'_> {
        Leaves {
            nodes: Nodes::new(self, root),
        }
    }

    pub(crate) fn positions_from(&self, root: NodeIndex) -> Positions<'_> {
        Positions {
            leaves: self.leaves_from(root),
            current: 0..0,
        }
    }
}

// =============================================================================
// Nodes
// =============================================================================

/// Pre-order iterator returned by [`NodeArena::nodes`].
#[derive(Clone)]
pub struct Nodes<'a> {
    arena: &'a NodeArena,
    stack: IndexStack,
}

impl<'a> Nodes<'a> {
    fn new(arena: &'a NodeArena, root: NodeIndex) -> Self {
        let mut stack = IndexStack::new();
        stack.push(root);
        Self { arena, stack }
    }
}

impl Iterator for Nodes<'_> {
    type Item = (NodeIndex, Node);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = self.arena.node(index);
        if let Node::Branch(branch) = node {
            self.stack.push(branch.right());
            self.stack.push(branch.left());
        }
        Some((index, node))
    }
}

impl FusedIterator for Nodes<'_> {}

// =============================================================================
// Leaves
// =============================================================================

/// Left-to-right leaf iterator returned by [`NodeArena::leaves`].
#[derive(Clone)]
pub struct Leaves<'a> {
    nodes: Nodes<'a>,
}

impl Iterator for Leaves<'_> {
    type Item = Leaf;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.find_map(|(_, node)| match node {
            Node::Leaf(leaf) => Some(leaf),
            Node::Branch(_) => None,
        })
    }
}

impl FusedIterator for Leaves<'_> {}

// =============================================================================
// Positions
// =============================================================================

/// Content position iterator returned by [`NodeArena::positions`].
#[derive(Clone)]
pub struct Positions<'a> {
    leaves: Leaves<'a>,
    current: Range<u32>,
}

impl Iterator for Positions<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(position) = self.current.next() {
                return Some(position);
            }
            let leaf = self.leaves.next()?;
            // add_leaf guarantees the end fits in a u32
            self.current = leaf.content_start()..leaf.content_start() + leaf.length();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.current.len(), None)
    }
}

impl FusedIterator for Positions<'_> {}

// =============================================================================
// Tests
// =============================================================================
