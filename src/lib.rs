//! # slabtree
//!
//! An arena-backed, structurally shared binary tree for editing large
//! offset-addressed sequences.
//!
//! ## Overview
//!
//! A sequence is described by a tree whose leaves reference ranges of an
//! external, append-only content store and whose branches concatenate two
//! subtrees. All nodes live in one contiguous [`NodeArena`] and refer to each
//! other by [`NodeIndex`], so there is no per-node allocation and no pointer
//! chasing across the heap.
//!
//! - **Node Arena**: append-only node storage with chunked growth
//! - **Tree Operations**: `item_count`, `insert_into_node`, `remove_from_node`
//! - **Traversal**: lazy pre-order, leaf and position iterators
//! - **Content Store**: the [`ContentStore`] boundary and a minimal [`VecStore`]
//! - **Sequence**: [`Sequence`] pairs an arena, a store and the current root
//!
//! ## Structural Sharing
//!
//! Edits never modify existing nodes. They append new nodes along the edited
//! path and return a new root, while every old root stays valid. Keeping an
//! old root is all it takes to keep an old version.
//!
//! ## Limitations
//!
//! - The tree is never rebalanced; skewed edit patterns give deep trees.
//! - Unreachable nodes are never reclaimed; drop the arena to free them.
//! - Subtree lengths are recomputed on demand, not cached per branch. An edit
//!   sums every leaf once and then the left child at each level it descends,
//!   so it costs O(n · d) for `n` leaves at depth `d`, and `n` appends through
//!   [`Sequence::insert`] cost O(n²) in total.
//! - Edits never recurse per level, so deep trees are slow but safe.
//! - [`Sequence::insert`] adds items to the store before editing the tree.
//!   Items of an insert that fails stay in the store unreferenced.
//! - Nothing here is synchronized. Share a frozen arena between readers, or
//!   wrap the arena and its root in a lock.
//!
//! ## Example
//!
//! ```rust
//! use slabtree::prelude::*;
//!
//! let mut arena = NodeArena::new();
//! let root = arena.add_leaf(0, 10).unwrap();
//! let inserted = arena.add_leaf(10, 10).unwrap();
//!
//! let edited = arena.insert_into_node(root, 5, inserted).unwrap();
//! let trimmed = arena.remove_from_node(edited, 0, 5).unwrap().unwrap();
//!
//! assert_eq!(arena.length(root), Ok(10));
//! assert_eq!(arena.length(edited), Ok(20));
//! assert_eq!(arena.length(trimmed), Ok(15));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use slabtree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::arena::NodeArena;
    pub use crate::config::ArenaConfig;
    pub use crate::error::{NodeKind, Result, TreeError};
    pub use crate::node::{Branch, Leaf, Node, NodeIndex};
    pub use crate::sequence::Sequence;
    pub use crate::store::{ContentStore, VecStore};
}

mod arena;
mod config;
mod edit;
mod error;
mod node;
mod sequence;
mod store;
mod traverse;

pub use arena::NodeArena;
pub use config::{ArenaConfig, DEFAULT_CHUNK_BYTES};
pub use error::{NodeKind, Result, TreeError};
pub use node::{Branch, Leaf, Node, NodeIndex};
pub use sequence::Sequence;
pub use store::{ContentStore, VecStore};
pub use traverse::{Leaves, Nodes, Positions};
