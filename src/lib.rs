//! # Radix Trie
//!
//! A mutable compressed prefix tree (radix trie) mapping byte-sequence keys to
//! arbitrary values.
//!
//! Keys sharing a prefix share the nodes holding that prefix. Every edge is
//! labelled with a key fragment of at least one byte, and a node that neither
//! stores a value nor branches is merged into its only child, so the tree stays
//! compressed across any sequence of inserts and removals.
//!
//! ## Features
//!
//! - **In-place mutation**: inserts split edges, removals merge them back
//! - **Any byte key**: `&str`, `String`, `&[u8]` and `Vec<u8>` all work as keys
//! - **Opaque values**: values are moved in and out, never compared or cloned
//! - **Pooled removal paths**: the backtracking buffer used by `remove` is
//!   recycled through a process-wide free list (feature `scratch-pool`)
//!
//! ## Example
//!
//! ```rust
//! use radix_mutable::Trie;
//!
//! let mut trie = Trie::new();
//!
//! assert_eq!(trie.insert("long", 5), None);
//! assert_eq!(trie.insert("lo", 6), None);
//! assert_eq!(trie.insert("long", 8), Some(5));
//!
//! assert_eq!(trie.find("lo"), Some(&6));
//! assert_eq!(trie.find("lon"), None);
//!
//! assert_eq!(trie.remove("lo"), Some(6));
//! assert_eq!(trie.find("long"), Some(&8));
//! ```

mod dump;
pub mod node;
mod pool;
mod trie;
mod util;

// Re-export public types
pub use crate::node::Node;
pub use crate::trie::Trie;

/// Result type returned by [`Trie::validate`].
pub type Result<T> = std::result::Result<T, Error>;

/// Structural invariant violations detected by [`Trie::validate`].
///
/// Insert, find and remove never produce these: they are total over every key.
/// A violation means the tree was corrupted by a bug in the algorithm itself.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two siblings have edges starting with the same byte
    #[error("two children at depth {depth} start with byte {byte:#04x}")]
    DuplicateDiscriminant { depth: usize, byte: u8 },

    /// A non-root node has an empty edge label
    #[error("node at depth {depth} has an empty edge")]
    EmptyEdge { depth: usize },

    /// A non-root node without a value has fewer than two children
    #[error("non-terminal node at depth {depth} has {children} children")]
    DegenerateNode { depth: usize, children: usize },

    /// The tracked key count disagrees with the terminal nodes in the tree
    #[error("trie reports {expected} keys but holds {found}")]
    LengthMismatch { expected: usize, found: usize },
}
