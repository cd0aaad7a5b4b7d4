//! Structural edits: length accounting, insertion and range removal.
//!
//! Every edit reads existing nodes and appends new ones. Nothing already in
//! the arena is modified, so the old root keeps describing the old sequence
//! and any subtree off the edited path is shared between both versions.
//!
//! # Structural Sharing
//!
//! ```rust
//! use slabtree::NodeArena;
//!
//! let mut arena = NodeArena::new();
//! let left = arena.add_leaf(0, 10).unwrap();
//! let right = arena.add_leaf(10, 10).unwrap();
//! let root = arena.add_branch(left, right).unwrap();
//!
//! let inserted = arena.add_leaf(20, 5).unwrap();
//! let edited = arena.insert_into_node(root, 15, inserted).unwrap();
//!
//! assert_eq!(arena.length(root), Ok(20));   // Original unchanged
//! assert_eq!(arena.length(edited), Ok(25)); // New version
//! // The untouched left leaf is reused, not copied
//! assert_eq!(arena.get(edited).unwrap().left(), Ok(left));
//! ```
//!
//! # Depth
//!
//! The tree is never rebalanced, and adversarial edit sequences can make the
//! edited path as long as the number of leaves. Edits walk down with an
//! explicit path stack and rebuild the branches on the way back up, so a
//! deep tree costs time but never call stack.
//!
//! # Cost
//!
//! No subtree length is cached. An edit sums every leaf below the root once,
//! then sums the left child at each level it descends through. On a tree of
//! `n` leaves and depth `d` that is O(n · d) per edit in the worst case, and
//! a run of `n` appends is O(n²) overall.

use smallvec::SmallVec;

use crate::arena::NodeArena;
use crate::error::{Result, TreeError};
use crate::node::{Branch, Leaf, Node, NodeIndex};

/// Path entries kept inline before the edit path spills to the heap.
const INLINE_PATH_DEPTH: usize = 32;

/// Which child of a branch an edit descended into.
#[derive(Debug, Clone, Copy)]
enum Descent {
    Left(Branch),
    Right(Branch),
}

type EditPath = SmallVec<[Descent; INLINE_PATH_DEPTH]>;

impl NodeArena {
    /// Returns `(total, left_total)` for the subtree at `index`.
    ///
    /// `total` is the sum of all leaf lengths below `index`. `left_total` is
    /// the share of the left child, and equals `total` for a leaf.
    ///
    /// Nothing is cached: each call walks the subtree again and appends
    /// nothing to the arena.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::IndexOutOfRange`] for an unknown index and
    /// [`TreeError::Range`] if the total overflows `u32`.
    pub fn item_count(&self, index: NodeIndex) -> Result<(u32, u32)> {
        match self.get(index)? {
            Node::Leaf(leaf) => Ok((leaf.length(), leaf.length())),
            Node::Branch(branch) => {
                let left = self.subtree_total(branch.left())?;
                let right = self.subtree_total(branch.right())?;
                let total = left
                    .checked_add(right)
                    .ok_or(TreeError::range(left, right, u32::MAX))?;
                Ok((total, left))
            }
        }
    }

    fn subtree_total(&self, index: NodeIndex) -> Result<u32> {
        self.leaves_from(index).try_fold(0_u32, |total, leaf| {
            total
                .checked_add(leaf.length())
                .ok_or(TreeError::range(total, leaf.length(), u32::MAX))
        })
    }

    /// Splices the leaf `new_leaf` into the subtree at `index` so that its
    /// items start at logical offset `insert_offset`.
    ///
    /// Returns the root of the new version. Offsets `0` and `length` wrap
    /// the whole subtree in one new branch without descending into it.
    /// Otherwise the walk goes down to the leaf containing the offset,
    /// splits it, and rebuilds only the branches on that path.
    ///
    /// # Errors
    ///
    /// * [`TreeError::IndexOutOfRange`] if either index is unknown
    /// * [`TreeError::WrongVariant`] if `new_leaf` is a branch
    /// * [`TreeError::Range`] if `insert_offset` is past the end
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slabtree::{Leaf, NodeArena};
    ///
    /// let mut arena = NodeArena::new();
    /// let root = arena.add_leaf(0, 10).unwrap();
    /// let inserted = arena.add_leaf(10, 10).unwrap();
    /// let root = arena.insert_into_node(root, 5, inserted).unwrap();
    ///
    /// let leaves: Vec<Leaf> = arena.leaves(root).unwrap().collect();
    /// assert_eq!(leaves, vec![Leaf::new(0, 5), Leaf::new(10, 10), Leaf::new(5, 5)]);
    /// ```
    pub fn insert_into_node(
        &mut self,
        index: NodeIndex,
        insert_offset: u32,
        new_leaf: NodeIndex,
    ) -> Result<NodeIndex> {
        self.get(new_leaf)?.as_leaf()?;
        let (mut total, _) = self.item_count(index)?;
        if insert_offset > total {
            return Err(TreeError::range(insert_offset, 0, total));
        }

        let mut path = EditPath::new();
        let mut index = index;
        let mut offset = insert_offset;
        let spliced = loop {
            if offset == 0 {
                break self.add_branch(new_leaf, index)?;
            }
            if offset == total {
                break self.add_branch(index, new_leaf)?;
            }
            match self.node(index) {
                Node::Leaf(leaf) => match leaf.split(offset)? {
                    (Some(head), Some(tail)) => {
                        let head = self.push_leaf(head)?;
                        let tail = self.push_leaf(tail)?;
                        let inserted = self.add_branch(new_leaf, tail)?;
                        break self.add_branch(head, inserted)?;
                    }
                    (Some(_), None) => break self.add_branch(index, new_leaf)?,
                    (None, _) => break self.add_branch(new_leaf, index)?,
                },
                Node::Branch(branch) => {
                    let left_total = self.subtree_total(branch.left())?;
                    if offset < left_total {
                        path.push(Descent::Left(branch));
                        index = branch.left();
                        total = left_total;
                    } else {
                        path.push(Descent::Right(branch));
                        index = branch.right();
                        offset -= left_total;
                        total -= left_total;
                    }
                }
            }
        };

        path.into_iter()
            .rev()
            .try_fold(spliced, |child, descent| match descent {
                Descent::Left(branch) => self.add_branch(child, branch.right()),
                Descent::Right(branch) => self.add_branch(branch.left(), child),
            })
    }

    /// Removes the logical range `[start, start + length)` from the subtree
    /// at `index`.
    ///
    /// Returns the root of the new version, or `None` when nothing is left.
    /// A zero-length removal returns `index` itself. Branches whose whole
    /// side is consumed collapse into the surviving side.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::IndexOutOfRange`] for an unknown index and
    /// [`TreeError::Range`] if the range does not fit in the subtree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slabtree::{Leaf, NodeArena};
    ///
    /// let mut arena = NodeArena::new();
    /// let left = arena.add_leaf(0, 10).unwrap();
    /// let right = arena.add_leaf(10, 10).unwrap();
    /// let root = arena.add_branch(left, right).unwrap();
    ///
    /// let root = arena.remove_from_node(root, 5, 10).unwrap().unwrap();
    /// let leaves: Vec<Leaf> = arena.leaves(root).unwrap().collect();
    /// assert_eq!(leaves, vec![Leaf::new(0, 5), Leaf::new(15, 5)]);
    /// ```
    pub fn remove_from_node(
        &mut self,
        index: NodeIndex,
        start: u32,
        length: u32,
    ) -> Result<Option<NodeIndex>> {
        let (mut total, _) = self.item_count(index)?;
        start
            .checked_add(length)
            .filter(|end| *end <= total)
            .ok_or(TreeError::range(start, length, total))?;

        let mut path = EditPath::new();
        let mut index = index;
        let mut start = start;
        let mut length = length;
        let remainder = loop {
            if length == 0 {
                break Some(index);
            }
            let end = start + length;
            let branch = match self.node(index) {
                Node::Leaf(leaf) => break self.push_pieces(leaf.remove(start, length)?)?,
                Node::Branch(branch) => branch,
            };
            if start == 0 && length == total {
                break None;
            }

            let left_total = self.subtree_total(branch.left())?;
            if start == 0 && length >= left_total {
                // The whole left side goes: the branch collapses into its right side
                index = branch.right();
                length -= left_total;
                total -= left_total;
            } else if start <= left_total && end == total {
                // The whole right side goes: the branch collapses into its left side
                index = branch.left();
                length = left_total - start;
                total = left_total;
            } else if end <= left_total {
                path.push(Descent::Left(branch));
                index = branch.left();
                total = left_total;
            } else if start >= left_total {
                path.push(Descent::Right(branch));
                index = branch.right();
                start -= left_total;
                total -= left_total;
            } else {
                // A suffix of the left side and a prefix of the right side.
                // Neither can straddle a branch again, so this nests once.
                let left = self.remove_from_node(branch.left(), start, left_total - start)?;
                let right = self.remove_from_node(branch.right(), 0, end - left_total)?;
                break self.rejoin(left, right)?;
            }
        };

        path.into_iter()
            .rev()
            .try_fold(remainder, |child, descent| match descent {
                Descent::Left(branch) => self.rejoin(child, Some(branch.right())),
                Descent::Right(branch) => self.rejoin(Some(branch.left()), child),
            })
    }

    /// Appends what survives of a leaf removal.
    fn push_pieces(&mut self, pieces: (Option<Leaf>, Option<Leaf>)) -> Result<Option<NodeIndex>> {
        match pieces {
            (None, _) => Ok(None),
            (Some(piece), None) => self.push_leaf(piece).map(Some),
            (Some(head), Some(tail)) => {
                let head = self.push_leaf(head)?;
                let tail = self.push_leaf(tail)?;
                self.add_branch(head, tail).map(Some)
            }
        }
    }

    fn rejoin(
        &mut self,
        left: Option<NodeIndex>,
        right: Option<NodeIndex>,
    ) -> Result<Option<NodeIndex>> {
        match (left, right) {
            (Some(left), Some(right)) => self.add_branch(left, right).map(Some),
            (Some(survivor), None) | (None, Some(survivor)) => Ok(Some(survivor)),
            (None, None) => Ok(None),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
