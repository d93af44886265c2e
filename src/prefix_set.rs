//! The main prefix set implementation.
//!
//! This module contains the `PrefixSet` type, which provides the primary API for
//! working with the set.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::members::Members;
use crate::node::Node;
use crate::prefix_view::PrefixView;
use crate::value::{all_str_like, as_str_like};
use crate::Result;

/// A set of strings stored in a prefix tree.
///
/// Strings are split into `char` units. Each edge of the tree carries one unit
/// and members sharing a prefix share the nodes for it. Members are never
/// removed, so the tree only grows.
///
/// The set is not internally synchronised. Concurrent readers are fine as long
/// as no `add` is in flight; the borrow checker enforces this for safe code.
#[derive(Default)]
pub struct PrefixSet {
    /// The root node; its path spells the empty string
    pub(crate) root: Node,
}

impl PrefixSet {
    /// Creates a new, empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_set::PrefixSet;
    ///
    /// let set = PrefixSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        PrefixSet { root: Node::new() }
    }

    /// Creates a set seeded from dynamically typed values.
    ///
    /// Every value is checked before anything is inserted, so a single
    /// non-string value fails the whole construction with
    /// [`Error::TypeMismatch`](crate::Error::TypeMismatch).
    ///
    /// # Examples
    ///
    /// ```
    /// use std::any::Any;
    /// use prefix_set::PrefixSet;
    ///
    /// let word = String::from("hello");
    /// let values: [&dyn Any; 2] = [&word, &"world"];
    /// let set = PrefixSet::try_from_values(&values).unwrap();
    /// assert_eq!(set.members(), vec!["hello", "world"]);
    ///
    /// let values: [&dyn Any; 2] = [&word, &42];
    /// assert!(PrefixSet::try_from_values(&values).is_err());
    /// ```
    pub fn try_from_values(values: &[&dyn Any]) -> Result<Self> {
        let validated = all_str_like(values)?;

        let mut set = PrefixSet::new();
        for value in validated {
            value.with_str(|s| set.add(s));
        }
        Ok(set)
    }

    /// Adds `value` to the set.
    ///
    /// Missing nodes along the path are created; adding a member twice is a
    /// no-op. Adding `""` marks the root without creating any node.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_set::PrefixSet;
    ///
    /// let mut set = PrefixSet::new();
    /// set.add("hello");
    /// set.add(String::from("hello"));
    ///
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("hell"));
    /// ```
    pub fn add<S: AsRef<str>>(&mut self, value: S) {
        let value = value.as_ref();
        let mut current = &mut self.root;
        #[cfg(feature = "tracing")]
        let mut created = 0usize;

        for unit in value.chars() {
            let (child, _is_new) = current.child_or_insert(unit);
            #[cfg(feature = "tracing")]
            {
                created += _is_new as usize;
            }
            current = child;
        }
        current.is_member = true;

        #[cfg(feature = "tracing")]
        tracing::trace!(member = value, nodes_created = created, "added member");
    }

    /// Adds a dynamically typed value to the set.
    ///
    /// Fails with [`Error::TypeMismatch`](crate::Error::TypeMismatch) when
    /// `value` is not string-like, leaving the set unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_set::{Error, PrefixSet};
    ///
    /// let mut set = PrefixSet::new();
    /// set.try_add(&String::from("hello")).unwrap();
    ///
    /// assert!(matches!(set.try_add(&42), Err(Error::TypeMismatch { .. })));
    /// assert_eq!(set.members(), vec!["hello"]);
    /// ```
    pub fn try_add(&mut self, value: &dyn Any) -> Result<()> {
        let value = as_str_like(value)?;
        value.with_str(|s| self.add(s));
        Ok(())
    }

    /// Returns `true` if `value` is a member of the set.
    ///
    /// The walk stops at the first missing edge, so the cost is bounded by the
    /// length of `value` regardless of how many members are stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_set::PrefixSet;
    ///
    /// let set: PrefixSet = vec!["", "hello"].into_iter().collect();
    ///
    /// assert!(set.contains(""));
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("hello world"));
    /// ```
    pub fn contains<S: AsRef<str>>(&self, value: S) -> bool {
        self.root
            .descend(value.as_ref().chars())
            .map_or(false, Node::is_member)
    }

    /// Returns `true` if `value` is string-like and a member of the set.
    ///
    /// A value that is not string-like is never a member, so this returns
    /// `false` for it instead of failing.
    pub fn contains_value(&self, value: &dyn Any) -> bool {
        match as_str_like(value) {
            Ok(value) => value.with_str(|s| self.contains(s)),
            Err(_) => false,
        }
    }

    /// Returns `true` if any member starts with `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_set::PrefixSet;
    ///
    /// let mut set = PrefixSet::new();
    /// assert!(!set.has_prefix(""));
    ///
    /// set.add("hello");
    /// assert!(set.has_prefix(""));
    /// assert!(set.has_prefix("hell"));
    /// assert!(!set.has_prefix("help"));
    /// ```
    pub fn has_prefix<S: AsRef<str>>(&self, prefix: S) -> bool {
        self.root
            .descend(prefix.as_ref().chars())
            .map_or(false, Node::leads_to_member)
    }

    /// Returns `true` if the set contains no members.
    ///
    /// This looks at the tree itself: the root is not a member and has no
    /// children.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_set::PrefixSet;
    ///
    /// let mut set = PrefixSet::new();
    /// assert!(set.is_empty());
    ///
    /// set.add("");
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        !self.root.is_member && self.root.is_leaf()
    }

    /// Returns the number of members, counted by walking the tree.
    pub fn len(&self) -> usize {
        self.root.member_count()
    }

    /// Returns every member in ascending lexicographic order.
    ///
    /// Each call builds a fresh `Vec`; later additions do not show up in it.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_set::PrefixSet;
    ///
    /// let set: PrefixSet = vec!["www", "h", "", "he"].into_iter().collect();
    /// assert_eq!(set.members(), vec!["", "h", "he", "www"]);
    /// ```
    pub fn members(&self) -> Vec<String> {
        self.iter().collect()
    }

    /// Returns a lazy iterator over the members in ascending order.
    pub fn iter(&self) -> Members<'_> {
        Members::new(Some(&self.root), String::new())
    }

    /// Creates a view of the members that start with `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_set::PrefixSet;
    ///
    /// let set: PrefixSet = vec!["hello", "help", "world"].into_iter().collect();
    /// let view = set.view_prefix("hel");
    ///
    /// assert_eq!(view.len(), 2);
    /// assert!(view.contains("help"));
    /// assert!(!view.contains("world"));
    /// ```
    pub fn view_prefix<S: Into<String>>(&self, prefix: S) -> PrefixView<'_> {
        PrefixView::new(self, prefix.into())
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = PrefixSet::new();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a> IntoIterator for &'a PrefixSet {
    type Item = String;
    type IntoIter = Members<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Rebuilt from the members so that deep trees are copied without recursion.
impl Clone for PrefixSet {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

// Without deletion or chain compression the tree shape is determined by the
// member set, so comparing trees compares member sets.
impl PartialEq for PrefixSet {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl Eq for PrefixSet {}

impl Hash for PrefixSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.root.structural_hash().hash(state);
    }
}

impl fmt::Display for PrefixSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrefixSet(")?;
        f.debug_list().entries(self.iter()).finish()?;
        write!(f, ")")
    }
}

impl fmt::Debug for PrefixSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::any::TypeId;

    fn sample() -> PrefixSet {
        let mut set = PrefixSet::new();
        for word in &["", "hello", "h", "he", "hee", "world", "www"] {
            set.add(word);
        }
        set
    }

    #[test]
    fn test_new_set() {
        let set = PrefixSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.members().is_empty());
    }

    #[test]
    fn test_sample_members() {
        let set = sample();
        assert_eq!(
            set.members(),
            vec!["", "h", "he", "hee", "hello", "world", "www"]
        );
        assert!(set.contains("hello"));
        assert!(!set.contains("hello world"));
        assert!(!set.contains("hel"));
        assert!(set.contains(""));
    }

    #[test]
    fn test_sample_render() {
        assert_eq!(
            sample().to_string(),
            r#"PrefixSet(["", "h", "he", "hee", "hello", "world", "www"])"#
        );
        assert_eq!(PrefixSet::new().to_string(), "PrefixSet([])");
    }

    #[test]
    fn test_add_empty_string_creates_no_nodes() {
        let mut set = PrefixSet::new();
        set.add("");

        assert!(set.root.is_member());
        assert!(set.root.is_leaf());
        assert!(!set.is_empty());
        assert_eq!(set.members(), vec![""]);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut once = PrefixSet::new();
        once.add("hello");

        let mut twice = PrefixSet::new();
        twice.add("hello");
        twice.add("hello");

        assert_eq!(once, twice);
        assert_eq!(once.root.node_count(), twice.root.node_count());
        assert_eq!(twice.members(), vec!["hello"]);
    }

    #[test]
    fn test_shared_prefix_nodes() {
        let mut set = PrefixSet::new();
        set.add("help");
        set.add("hello");

        // root + h + e + l + p + l + o
        assert_eq!(set.root.node_count(), 7);
    }

    #[test]
    fn test_prefix_not_member() {
        let mut set = PrefixSet::new();
        set.add("hello");

        assert!(!set.contains("hell"));
        assert!(!set.contains(""));
        assert!(set.has_prefix("hell"));
        assert!(set.has_prefix(""));
        assert!(!set.has_prefix("hex"));
    }

    #[test]
    fn test_has_prefix_on_empty_set() {
        let mut set = PrefixSet::new();
        assert!(!set.has_prefix(""));
        assert!(!set.has_prefix("a"));

        set.add("");
        assert!(set.has_prefix(""));
        assert!(!set.has_prefix("a"));
    }

    #[test]
    fn test_deep_member_lifecycle() {
        let word = "a".repeat(100_000);
        let mut set = PrefixSet::new();
        set.add(&word);
        set.add("ab");

        assert!(set.contains(&word));
        assert!(!set.contains(&word[1..]));
        assert_eq!(set.len(), 2);
        assert_eq!(set.members(), vec!["ab".to_string(), word.clone()]);

        let copy = set.clone();
        assert_eq!(copy, set);
        assert_eq!(copy.root.node_count(), 100_002);

        use std::collections::hash_map::DefaultHasher;
        let mut first = DefaultHasher::new();
        let mut second = DefaultHasher::new();
        set.hash(&mut first);
        copy.hash(&mut second);
        assert_eq!(first.finish(), second.finish());

        drop(copy);
        drop(set);
    }

    #[test]
    fn test_try_add_rejects_without_mutation() {
        let mut set = sample();
        let before = set.clone();

        assert_eq!(
            set.try_add(&42),
            Err(Error::TypeMismatch {
                found: TypeId::of::<i32>()
            })
        );
        assert_eq!(set, before);
        assert!(set.contains("hello"));
    }

    #[test]
    fn test_try_add_char() {
        let mut set = PrefixSet::new();
        set.try_add(&'x').unwrap();
        assert!(set.contains("x"));
    }

    #[test]
    fn test_contains_value_policy() {
        let set = sample();
        assert!(set.contains_value(&"hello"));
        assert!(set.contains_value(&String::from("www")));
        assert!(!set.contains_value(&"hel"));
        assert!(!set.contains_value(&42));
        assert!(!set.contains_value(&None::<&str>));
    }

    #[test]
    fn test_try_from_values_all_or_nothing() {
        let a = "a".to_string();
        let values: [&dyn Any; 3] = [&a, &"b", &1.5f32];
        assert!(PrefixSet::try_from_values(&values).is_err());

        let values: [&dyn Any; 3] = [&a, &"b", &"a"];
        let set = PrefixSet::try_from_values(&values).unwrap();
        assert_eq!(set.members(), vec!["a", "b"]);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let forward: PrefixSet = vec!["a", "ab", "b"].into_iter().collect();
        let backward: PrefixSet = vec!["b", "ab", "a"].into_iter().collect();

        assert_eq!(forward, backward);
        assert_eq!(forward.to_string(), backward.to_string());

        let other: PrefixSet = vec!["a", "ab"].into_iter().collect();
        assert_ne!(forward, other);
    }

    #[test]
    fn test_hash_matches_equality() {
        use std::collections::hash_map::DefaultHasher;

        let hash_of = |set: &PrefixSet| {
            let mut hasher = DefaultHasher::new();
            set.hash(&mut hasher);
            hasher.finish()
        };

        let forward: PrefixSet = vec!["x", "xy", "z"].into_iter().collect();
        let backward: PrefixSet = vec!["z", "xy", "x"].into_iter().collect();

        assert_eq!(hash_of(&forward), hash_of(&backward));
    }

    #[test]
    fn test_members_is_a_snapshot() {
        let mut set = PrefixSet::new();
        set.add("a");
        let snapshot = set.members();

        set.add("b");
        assert_eq!(snapshot, vec!["a"]);
        assert_eq!(set.members(), vec!["a", "b"]);
    }

    #[test]
    fn test_unicode_units() {
        let set: PrefixSet = vec!["héllo", "hello", "日本", "日"].into_iter().collect();

        assert!(set.contains("héllo"));
        assert!(!set.contains("hé"));
        assert_eq!(set.members(), vec!["hello", "héllo", "日", "日本"]);
    }
}
