//! Prefix view into a prefix set.
//!
//! This module provides the `PrefixView` type, which borrows the part of a set
//! below a given prefix.

use std::fmt;

use crate::members::Members;
use crate::node::Node;
use crate::PrefixSet;

/// A lightweight view of the members of a set that start with a prefix.
///
/// The view borrows the set, so the set cannot grow while a view is alive.
///
/// # Examples
///
/// ```
/// use prefix_set::PrefixSet;
///
/// let first: PrefixSet = vec!["hello", "help", "world"].into_iter().collect();
/// let second: PrefixSet = vec!["help", "hello"].into_iter().collect();
///
/// // Views with identical members are equal
/// assert_eq!(first.view_prefix("hel"), second.view_prefix("hel"));
///
/// let view = first.view_prefix("wor");
/// assert!(view.contains("world"));
/// assert!(!view.contains("hello"));
/// ```
#[derive(Clone)]
pub struct PrefixView<'a> {
    /// The set this view borrows from
    set: &'a PrefixSet,

    /// The prefix defining this view
    prefix: String,

    /// The node reached by the prefix, if some member lies below it
    subtree: Option<&'a Node>,
}

impl<'a> PrefixView<'a> {
    /// Creates a new view of `set` below `prefix`.
    pub fn new(set: &'a PrefixSet, prefix: String) -> Self {
        let subtree = set
            .root
            .descend(prefix.chars())
            .filter(|node| node.leads_to_member());

        PrefixView {
            set,
            prefix,
            subtree,
        }
    }

    /// Returns the prefix for this view.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the underlying set.
    pub fn set(&self) -> &'a PrefixSet {
        self.set
    }

    /// Returns whether any member of the set starts with the prefix.
    pub fn exists(&self) -> bool {
        self.subtree.is_some()
    }

    /// Returns the number of members in this view.
    pub fn len(&self) -> usize {
        self.subtree.map_or(0, Node::member_count)
    }

    /// Returns whether this view contains no members.
    pub fn is_empty(&self) -> bool {
        self.subtree.is_none()
    }

    /// Checks if the view contains `key`.
    ///
    /// Only returns true if `key` starts with the prefix and is a member.
    pub fn contains<S: AsRef<str>>(&self, key: S) -> bool {
        let key = key.as_ref();
        match (self.subtree, key.strip_prefix(self.prefix.as_str())) {
            (Some(node), Some(rest)) => node.descend(rest.chars()).map_or(false, Node::is_member),
            _ => false,
        }
    }

    /// Returns an iterator over the members in this view, in ascending order.
    pub fn iter(&self) -> Members<'a> {
        Members::new(self.subtree, self.prefix.clone())
    }

    /// Returns the members in this view as a fresh `Vec`.
    pub fn members(&self) -> Vec<String> {
        self.iter().collect()
    }
}

impl<'a> fmt::Debug for PrefixView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixView")
            .field("prefix", &self.prefix)
            .field("members", &self.members())
            .finish()
    }
}

impl<'a, 'b> PartialEq<PrefixView<'b>> for PrefixView<'a> {
    fn eq(&self, other: &PrefixView<'b>) -> bool {
        if self.prefix != other.prefix {
            return false;
        }

        match (self.subtree, other.subtree) {
            (None, None) => true,
            (Some(a), Some(b)) => std::ptr::eq(a, b) || a == b,
            _ => false,
        }
    }
}

impl<'a> Eq for PrefixView<'a> {}

impl<'a, 'v> IntoIterator for &'v PrefixView<'a> {
    type Item = String;
    type IntoIter = Members<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
