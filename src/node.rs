//! Node implementation for the prefix set.
//!
//! Every `Node` owns its children by value, so the set is a strict ownership
//! tree: no shared nodes, no parent links, no cycles. Nodes are only ever
//! created, never removed.
//!
//! The tree is one level deeper per `char` of the longest member, so nothing in
//! here recurses: every walk over a subtree uses an explicit stack.

use std::collections::hash_map::{DefaultHasher, Entry};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One position in the prefix space.
///
/// The path of edge labels from the root to a node spells a string; `is_member`
/// records whether that string has been added to the set.
#[derive(Default)]
pub(crate) struct Node {
    /// Whether the string spelled by the path to this node is a member
    pub(crate) is_member: bool,

    /// Child nodes keyed by the unit on the connecting edge
    pub(crate) children: HashMap<char, Node>,
}

impl Node {
    /// Creates a new empty node (not a member, no children)
    pub fn new() -> Self {
        Node {
            is_member: false,
            children: HashMap::new(),
        }
    }

    /// Returns whether the path to this node spells a member
    pub fn is_member(&self) -> bool {
        self.is_member
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns whether some member starts with the path to this node.
    ///
    /// Only the root of an empty set is a non-member leaf; every other node was
    /// created on the way to a member.
    pub fn leads_to_member(&self) -> bool {
        self.is_member || !self.is_leaf()
    }

    /// Returns the child reached through `unit`, linking a new empty node when
    /// there is none yet. The flag is `true` when a node was created.
    pub fn child_or_insert(&mut self, unit: char) -> (&mut Node, bool) {
        match self.children.entry(unit) {
            Entry::Occupied(entry) => (entry.into_mut(), false),
            Entry::Vacant(entry) => (entry.insert(Node::new()), true),
        }
    }

    /// Walks `units` down from this node, stopping at the first missing edge.
    pub fn descend<I>(&self, units: I) -> Option<&Node>
    where
        I: IntoIterator<Item = char>,
    {
        let mut current = self;
        for unit in units {
            current = current.children.get(&unit)?;
        }
        Some(current)
    }

    /// Returns the children in ascending unit order
    pub fn sorted_children(&self) -> Vec<(char, &Node)> {
        let mut children: Vec<(char, &Node)> =
            self.children.iter().map(|(k, v)| (*k, v)).collect();
        children.sort_unstable_by_key(|&(k, _)| k);
        children
    }

    /// Returns the number of members stored in this subtree
    pub fn member_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.is_member {
                count += 1;
            }
            stack.extend(node.children.values());
        }

        count
    }

    /// Returns the number of nodes in this subtree, this node included
    #[cfg(test)]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }

        count
    }

    /// Computes a hash of the subtree that does not depend on `HashMap`
    /// iteration order.
    ///
    /// Nodes are fed to the hasher in pre-order with children sorted, each as
    /// `(depth, unit, is_member)`, which pins down the shape of the tree.
    pub fn structural_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.is_member.hash(&mut hasher);

        let mut stack: Vec<(usize, char, &Node)> = Vec::new();
        push_sorted(&mut stack, 1, self);

        while let Some((depth, unit, node)) = stack.pop() {
            depth.hash(&mut hasher);
            unit.hash(&mut hasher);
            node.is_member.hash(&mut hasher);
            push_sorted(&mut stack, depth + 1, node);
        }

        hasher.finish()
    }
}

// Pushes children in descending order so they pop ascending.
fn push_sorted<'a>(stack: &mut Vec<(usize, char, &'a Node)>, depth: usize, node: &'a Node) {
    for (unit, child) in node.sorted_children().into_iter().rev() {
        stack.push((depth, unit, child));
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<Node> = self.children.drain().map(|(_, child)| child).collect();

        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];

        while let Some((a, b)) = stack.pop() {
            if a.is_member != b.is_member || a.children.len() != b.children.len() {
                return false;
            }
            for (unit, child) in &a.children {
                match b.children.get(unit) {
                    Some(other_child) => stack.push((child, other_child)),
                    None => return false,
                }
            }
        }

        true
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units: Vec<char> = self.sorted_children().into_iter().map(|(k, _)| k).collect();
        f.debug_struct("Node")
            .field("is_member", &self.is_member)
            .field("children", &units)
            .finish()
    }
}
