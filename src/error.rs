//! Error types for arena, tree and content store operations.
//!
//! All failures are programming-contract violations: an index that was never
//! handed out, a span that does not fit, or a node of the wrong kind. They are
//! reported as [`TreeError`] values instead of being clamped or ignored.
//!
//! Because the arena is append-only, a failed operation never alters an
//! existing node. At worst it leaves a few unreferenced nodes behind.

use std::fmt;

use thiserror::Error;

/// The two node tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A node referencing a range of the content store.
    Leaf,
    /// A node joining two child subtrees.
    Branch,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf => formatter.write_str("leaf"),
            Self::Branch => formatter.write_str("branch"),
        }
    }
}

/// Represents errors raised by the tree, the arena and content stores.
///
/// # Examples
///
/// ```rust
/// use slabtree::{NodeArena, TreeError};
///
/// let arena = NodeArena::new();
/// assert_eq!(
///     arena.get(3.into()),
///     Err(TreeError::IndexOutOfRange { index: 3, len: 0 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// An accessor was invoked against a node with the other tag,
    /// e.g. asking a leaf for its children.
    #[error("expected a {expected} node, found a {found} node")]
    WrongVariant {
        /// The tag the operation requires.
        expected: NodeKind,
        /// The tag the node actually carries.
        found: NodeKind,
    },

    /// An arena or content store index is beyond the current size.
    #[error("index {index} is out of range for a store of {len} entries")]
    IndexOutOfRange {
        /// The offending index.
        index: u32,
        /// The number of entries at the time of the call.
        len: u32,
    },

    /// A start/length pair does not describe a valid span of `bound` items.
    ///
    /// This also covers zero-length spans where a positive span is required
    /// and u32 overflow while computing an end offset or a total length.
    #[error("span [{start}, {start} + {length}) is invalid for {bound} items")]
    Range {
        /// Start of the requested span.
        start: u32,
        /// Length of the requested span.
        length: u32,
        /// Number of items the span must fit in.
        bound: u32,
    },
}

impl TreeError {
    #[inline]
    pub(crate) const fn range(start: u32, length: u32, bound: u32) -> Self {
        Self::Range {
            start,
            length,
            bound,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TreeError>;
