//! Lazy, sorted enumeration of members.

use crate::node::Node;

/// An iterator over the members of a [`PrefixSet`](crate::PrefixSet) or
/// [`PrefixView`](crate::PrefixView).
///
/// The traversal is depth-first with an explicit stack. Children are pushed in
/// descending unit order so they come off the stack ascending, and a node is
/// reported before anything below it. Together this yields members in strictly
/// ascending lexicographic order.
#[derive(Debug, Clone)]
pub struct Members<'a> {
    /// Nodes still to visit: the node, the path length of its parent and the
    /// unit on its incoming edge (`None` for the starting node)
    stack: Vec<(&'a Node, usize, Option<char>)>,

    /// Units from the root to the node visited last
    path: Vec<char>,
}

impl<'a> Members<'a> {
    /// Starts a traversal at `start`, whose path spells `prefix`.
    pub(crate) fn new(start: Option<&'a Node>, prefix: String) -> Self {
        let path: Vec<char> = prefix.chars().collect();
        let mut stack = Vec::new();
        if let Some(node) = start {
            stack.push((node, path.len(), None));
        }
        Members { stack, path }
    }
}

impl<'a> Iterator for Members<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, depth, unit)) = self.stack.pop() {
            self.path.truncate(depth);
            self.path.extend(unit);

            let depth = self.path.len();
            for (unit, child) in node.sorted_children().into_iter().rev() {
                self.stack.push((child, depth, Some(unit)));
            }

            if node.is_member {
                return Some(self.path.iter().collect());
            }
        }

        None
    }
}

impl<'a> std::iter::FusedIterator for Members<'a> {}
