//! Node types stored in the [`NodeArena`](crate::NodeArena).
//!
//! A [`Node`] is either a [`Leaf`], which references a contiguous range of
//! an external content store, or a [`Branch`], which joins two earlier nodes
//! by index. Nodes are small `Copy` values (12 bytes) so that an arena of
//! them is one dense allocation.
//!
//! Leaf-level editing lives here as well: [`Leaf::split`] and
//! [`Leaf::remove`] compute the surviving pieces of a leaf without touching
//! the arena. The tree engine then appends those pieces as new nodes.
//!
//! # Examples
//!
//! ```rust
//! use slabtree::Leaf;
//!
//! let leaf = Leaf::new(0, 10);
//! let (left, right) = leaf.remove(3, 4).unwrap();
//! assert_eq!(left, Some(Leaf::new(0, 3)));
//! assert_eq!(right, Some(Leaf::new(7, 3)));
//! ```

use std::fmt;

use static_assertions::assert_eq_size;

use crate::error::{NodeKind, Result, TreeError};

// =============================================================================
// NodeIndex
// =============================================================================

/// Stable position of a node inside a [`NodeArena`](crate::NodeArena).
///
/// Indices are handed out in append order and never reused, so a node's
/// children always carry smaller indices than the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(u32);

impl NodeIndex {
    /// Wraps a raw arena position.
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw arena position.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for NodeIndex {
    #[inline]
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<NodeIndex> for u32 {
    #[inline]
    fn from(index: NodeIndex) -> Self {
        index.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// Leaf
// =============================================================================

/// A reference to `length` items starting at `content_start` in a content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Leaf {
    content_start: u32,
    length: u32,
}

impl Leaf {
    /// Creates a leaf value. Validation happens when it is added to an arena.
    #[inline]
    #[must_use]
    pub const fn new(content_start: u32, length: u32) -> Self {
        Self {
            content_start,
            length,
        }
    }

    /// Offset of the first referenced item in the content store.
    #[inline]
    #[must_use]
    pub const fn content_start(&self) -> u32 {
        self.content_start
    }

    /// Number of referenced items.
    #[inline]
    #[must_use]
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// One past the last referenced content position.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Range`] if the end does not fit in a `u32`.
    #[inline]
    pub const fn end(&self) -> Result<u32> {
        match self.content_start.checked_add(self.length) {
            Some(end) => Ok(end),
            None => Err(TreeError::range(self.content_start, self.length, u32::MAX)),
        }
    }

    /// Splits the leaf at a local offset.
    ///
    /// * `at_offset == 0` yields `(None, Some(self))`
    /// * `at_offset == length` yields `(Some(self), None)`
    /// * anything in between yields two leaves whose ranges are contiguous
    ///   and together cover exactly the original range
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Range`] if `at_offset > length` or the leaf's
    /// own range overflows `u32`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slabtree::Leaf;
    ///
    /// let leaf = Leaf::new(20, 10);
    /// assert_eq!(
    ///     leaf.split(4),
    ///     Ok((Some(Leaf::new(20, 4)), Some(Leaf::new(24, 6))))
    /// );
    /// assert_eq!(leaf.split(0), Ok((None, Some(leaf))));
    /// ```
    pub const fn split(self, at_offset: u32) -> Result<(Option<Self>, Option<Self>)> {
        if let Err(error) = self.end() {
            return Err(error);
        }
        if at_offset > self.length {
            return Err(TreeError::range(at_offset, 0, self.length));
        }
        if at_offset == 0 {
            return Ok((None, Some(self)));
        }
        if at_offset == self.length {
            return Ok((Some(self), None));
        }
        Ok((
            Some(Self::new(self.content_start, at_offset)),
            Some(Self::new(
                self.content_start + at_offset,
                self.length - at_offset,
            )),
        ))
    }

    /// Removes the local half-open interval `[start, start + length)`.
    ///
    /// Returns the surviving pieces: `(None, None)` when everything is
    /// removed, a single remainder on the left when the removal touches one
    /// end, or the two leaves bracketing the gap.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Range`] if `length == 0`, the interval does not
    /// fit inside the leaf, or the leaf's own range overflows `u32`.
    pub const fn remove(self, start: u32, length: u32) -> Result<(Option<Self>, Option<Self>)> {
        if let Err(error) = self.end() {
            return Err(error);
        }
        let end = match start.checked_add(length) {
            Some(end) if length > 0 && end <= self.length => end,
            _ => return Err(TreeError::range(start, length, self.length)),
        };

        if length == self.length {
            return Ok((None, None));
        }
        if start == 0 {
            return Ok((
                Some(Self::new(self.content_start + length, self.length - length)),
                None,
            ));
        }
        if end == self.length {
            return Ok((Some(Self::new(self.content_start, self.length - length)), None));
        }
        Ok((
            Some(Self::new(self.content_start, start)),
            Some(Self::new(self.content_start + end, self.length - end)),
        ))
    }
}

// =============================================================================
// Branch
// =============================================================================

/// The concatenation of two subtrees, referenced by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Branch {
    left: NodeIndex,
    right: NodeIndex,
}

impl Branch {
    /// Creates a branch value. Child indices are checked by the arena.
    #[inline]
    #[must_use]
    pub const fn new(left: NodeIndex, right: NodeIndex) -> Self {
        Self { left, right }
    }

    /// Index of the left child.
    #[inline]
    #[must_use]
    pub const fn left(&self) -> NodeIndex {
        self.left
    }

    /// Index of the right child.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> NodeIndex {
        self.right
    }
}

// =============================================================================
// Node
// =============================================================================

/// A tagged arena entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    /// A reference into the content store.
    Leaf(Leaf),
    /// Two child subtrees.
    Branch(Branch),
}

assert_eq_size!(Node, [u32; 3]);

impl Node {
    /// Returns the tag of this node.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Leaf(_) => NodeKind::Leaf,
            Self::Branch(_) => NodeKind::Branch,
        }
    }

    /// Returns `true` for leaves.
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns `true` for branches.
    #[inline]
    #[must_use]
    pub const fn is_branch(&self) -> bool {
        matches!(self, Self::Branch(_))
    }

    /// Returns the leaf payload.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::WrongVariant`] for branches.
    #[inline]
    pub const fn as_leaf(&self) -> Result<Leaf> {
        match self {
            Self::Leaf(leaf) => Ok(*leaf),
            Self::Branch(_) => Err(TreeError::WrongVariant {
                expected: NodeKind::Leaf,
                found: NodeKind::Branch,
            }),
        }
    }

    /// Returns the branch payload.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::WrongVariant`] for leaves.
    #[inline]
    pub const fn as_branch(&self) -> Result<Branch> {
        match self {
            Self::Branch(branch) => Ok(*branch),
            Self::Leaf(_) => Err(TreeError::WrongVariant {
                expected: NodeKind::Branch,
                found: NodeKind::Leaf,
            }),
        }
    }

    /// Left child index of a branch.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::WrongVariant`] for leaves.
    pub const fn left(&self) -> Result<NodeIndex> {
        match self.as_branch() {
            Ok(branch) => Ok(branch.left),
            Err(error) => Err(error),
        }
    }

    /// Right child index of a branch.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::WrongVariant`] for leaves.
    pub const fn right(&self) -> Result<NodeIndex> {
        match self.as_branch() {
            Ok(branch) => Ok(branch.right),
            Err(error) => Err(error),
        }
    }

    /// Content store offset of a leaf.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::WrongVariant`] for branches.
    pub const fn start(&self) -> Result<u32> {
        match self.as_leaf() {
            Ok(leaf) => Ok(leaf.content_start),
            Err(error) => Err(error),
        }
    }

    /// Item count of a leaf. Use [`NodeArena::length`](crate::NodeArena::length)
    /// for whole subtrees.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::WrongVariant`] for branches.
    pub const fn length(&self) -> Result<u32> {
        match self.as_leaf() {
            Ok(leaf) => Ok(leaf.length),
            Err(error) => Err(error),
        }
    }
}

impl From<Leaf> for Node {
    #[inline]
    fn from(leaf: Leaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<Branch> for Node {
    #[inline]
    fn from(branch: Branch) -> Self {
        Self::Branch(branch)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(leaf) => write!(
                formatter,
                "leaf {{index: {} length: {}}}",
                leaf.content_start, leaf.length
            ),
            Self::Branch(branch) => write!(
                formatter,
                "branch {{left: {} right: {}}}",
                branch.left, branch.right
            ),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
