//! # Prefix Set
//!
//! A set of strings stored in a prefix tree (trie).
//!
//! Members that share a prefix share the nodes for that prefix, which keeps dense
//! string sets such as dictionary words compact. Every edge of the tree is labelled
//! with a single `char`; a string is a member when the node reached by walking its
//! characters from the root is flagged as a member.
//!
//! ## Features
//!
//! - **Monotonic growth**: members can be added but never removed
//! - **Length-bound lookups**: `contains` runs in time proportional to the query
//! - **Sorted enumeration**: members always come back in lexicographic order
//! - **Prefix Views**: borrow the part of the set below a given prefix
//!
//! ## Example
//!
//! ```rust
//! use prefix_set::PrefixSet;
//!
//! let mut set = PrefixSet::new();
//! set.add("hello");
//! set.add("he");
//! set.add("");
//!
//! assert!(set.contains("hello"));
//! assert!(!set.contains("hel"));
//! assert_eq!(set.members(), vec!["", "he", "hello"]);
//! ```

mod members;
mod node;
mod prefix_set;
mod prefix_view;
pub mod value;

// Re-export public types
pub use crate::members::Members;
pub use crate::prefix_set::PrefixSet;
pub use crate::prefix_view::PrefixView;

/// Errors that can occur in prefix set operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A string-like value was required but something else was supplied
    TypeMismatch {
        /// Type of the rejected value
        found: std::any::TypeId,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::TypeMismatch { found } => write!(
                f,
                "only strings can be placed in the set; received a value of type {:?}",
                found
            ),
        }
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
