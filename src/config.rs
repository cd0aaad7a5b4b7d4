//! Arena allocation settings.

use std::mem::size_of;

use crate::node::Node;

/// Default number of bytes reserved per allocation chunk (one page).
pub const DEFAULT_CHUNK_BYTES: usize = 4096;

/// Allocation settings for a [`NodeArena`](crate::NodeArena).
///
/// Nodes are reserved in chunks of roughly `chunk_bytes`. Once the arena is
/// larger than one chunk it grows geometrically, so appends stay amortized
/// O(1) for any chunk size.
///
/// # Examples
///
/// ```rust
/// use slabtree::ArenaConfig;
///
/// let config = ArenaConfig::new().with_chunk_bytes(1200);
/// assert_eq!(config.chunk_nodes(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaConfig {
    chunk_bytes: usize,
}

impl ArenaConfig {
    /// Creates the default configuration.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chunk_bytes: DEFAULT_CHUNK_BYTES,
        }
    }

    /// Sets the byte budget of one allocation chunk.
    #[inline]
    #[must_use]
    pub const fn with_chunk_bytes(mut self, chunk_bytes: usize) -> Self {
        self.chunk_bytes = chunk_bytes;
        self
    }

    /// The configured byte budget.
    #[inline]
    #[must_use]
    pub const fn chunk_bytes(&self) -> usize {
        self.chunk_bytes
    }

    /// Number of nodes that fit in one chunk, never less than one.
    #[inline]
    #[must_use]
    pub const fn chunk_nodes(&self) -> usize {
        let nodes = self.chunk_bytes / size_of::<Node>();
        if nodes == 0 { 1 } else { nodes }
    }
}

impl Default for ArenaConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
