//! Ordered map based on an unbalanced binary search tree.
//!
//! This module provides [`OrderedMap`], a mutable ordered map whose entries
//! live in the nodes of a plain binary search tree.
//!
//! # Overview
//!
//! - O(h) `contains`, `get`, `insert`, `delete`
//! - O(h) `first`/`last` and `floor`/`ceiling`
//! - O(1) `len` and `is_empty`
//! - O(n) traversal in in-order, pre-order or post-order
//!
//! where h is the height of the tree. The tree is **not** rebalanced, so h is
//! O(log n) for random insertion orders and O(n) for sorted ones.
//!
//! # Examples
//!
//! ```rust
//! use bstree::tree::{OrderedMap, TraversalOrder};
//!
//! let mut map = OrderedMap::new();
//! for key in [50, 30, 70, 20, 40, 60, 80] {
//!     map.insert(key, key * 10);
//! }
//!
//! // Two children: the in-order predecessor takes the root's place.
//! assert!(map.delete(&50));
//! let preorder: Vec<&i32> = map.traverse(TraversalOrder::PreOrder).map(|(key, _)| key).collect();
//! assert_eq!(preorder[0], &40);
//!
//! assert_eq!(map.ceiling(&45), Some((&60, &600)));
//! assert_eq!(map.floor(&45), Some((&40, &400)));
//! ```
//!
//! # Internal Structure
//!
//! Nodes are kept in a [`Slab`] arena and refer to their children by index.
//! Each node is referenced from exactly one slot: the map's root link or one
//! of its parent's child links. All descents are iterative and remember the
//! slot they came through, which is all the context a structural mutation
//! needs.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use compare::{Compare, Natural};
use slab::Slab;
use tracing::{debug, trace};

use super::node::{Node, NodeId, Slot};
use super::{MapEntry, Traversal, TraversalOrder, TreeConfig, TreeError};
use super::{DuplicatePolicy, ordering};

/// Outcome of placing a key into the tree.
pub(crate) enum Placement<K, V> {
    /// A new node was attached.
    Attached,
    /// The key was already present; ownership of the arguments is returned.
    Occupied { id: NodeId, key: K, value: V },
}

// =============================================================================
// OrderedMap Definition
// =============================================================================

/// An ordered map backed by an unbalanced binary search tree.
///
/// Keys are ordered by the comparator `C`, which defaults to the natural
/// [`Ord`] order of `K`. Any `Fn(&K, &K) -> Ordering` closure can be used as
/// a comparator via [`OrderedMap::with_comparator`].
///
/// # Time Complexity
///
/// | Operation          | Complexity |
/// |--------------------|------------|
/// | `new`              | O(1)       |
/// | `contains`/`get`   | O(h)       |
/// | `insert`           | O(h)       |
/// | `delete`/`remove`  | O(h)       |
/// | `first`/`last`     | O(h)       |
/// | `floor`/`ceiling`  | O(h)       |
/// | `len`/`is_empty`   | O(1)       |
/// | `clear`            | O(n)       |
///
/// # Examples
///
/// ```rust
/// use bstree::tree::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// assert!(map.insert("Tuesday", 71));
/// assert!(map.insert("Monday", 65));
/// assert!(!map.insert("Monday", 66)); // update, not a new entry
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get(&"Monday"), Some(&66));
/// assert_eq!(map.first(), Some((&"Monday", &66)));
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V, C = Natural<K>> {
    /// Arena holding every live node
    nodes: Slab<Node<K, V>>,
    /// Root link
    root: Option<NodeId>,
    /// Number of entries
    length: usize,
    comparator: C,
    config: TreeConfig,
}

static_assertions::assert_impl_all!(OrderedMap<i32, String>: Send, Sync);

impl<K: Ord, V> OrderedMap<K, V> {
    /// Creates an empty map ordered by the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::tree::OrderedMap;
    ///
    /// let map: OrderedMap<i32, String> = OrderedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TreeConfig::for_map())
    }

    /// Creates an empty, naturally ordered map with the given configuration.
    #[inline]
    #[must_use]
    pub fn with_config(config: TreeConfig) -> Self {
        Self::with_comparator_and_config(ordering::natural(), config)
    }
}

impl<K, V, C> OrderedMap<K, V, C>
where
    C: Compare<K>,
{
    /// Creates an empty map ordered by `comparator`.
    ///
    /// The comparator replaces the natural order of `K` entirely.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::with_comparator(|left: &i32, right: &i32| right.cmp(left));
    /// map.insert(1, "one");
    /// map.insert(3, "three");
    /// map.insert(2, "two");
    ///
    /// let keys: Vec<&i32> = map.keys().collect();
    /// assert_eq!(keys, vec![&3, &2, &1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_comparator_and_config(comparator, TreeConfig::for_map())
    }

    /// Creates an empty map ordered by `comparator` with the given configuration.
    #[must_use]
    pub fn with_comparator_and_config(comparator: C, config: TreeConfig) -> Self {
        Self {
            nodes: Slab::new(),
            root: None,
            length: 0,
            comparator,
            config,
        }
    }

    /// Returns the number of entries in the map.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the comparator ordering this map.
    #[inline]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the configuration of this map.
    #[inline]
    pub const fn config(&self) -> TreeConfig {
        self.config
    }

    /// Removes all entries. The comparator and configuration are kept.
    pub fn clear(&mut self) {
        let dropped = self.length;
        self.nodes.clear();
        self.root = None;
        self.length = 0;
        debug!(dropped, "cleared tree");
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Finds the node holding `key` and the slot that links to it.
    fn locate(&self, key: &K) -> Option<(Slot, NodeId)> {
        let mut slot = Slot::Root;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            match self.comparator.compare(key, &node.key) {
                Ordering::Less => {
                    slot = Slot::Left(id);
                    cursor = node.left;
                }
                Ordering::Greater => {
                    slot = Slot::Right(id);
                    cursor = node.right;
                }
                Ordering::Equal => return Some((slot, id)),
            }
        }
        None
    }

    fn find(&self, key: &K) -> Option<NodeId> {
        self.locate(key).map(|(_, id)| id)
    }

    /// Points `slot` at `child`.
    fn link(&mut self, slot: Slot, child: Option<NodeId>) {
        match slot {
            Slot::Root => self.root = child,
            Slot::Left(parent) => self.nodes[parent].left = child,
            Slot::Right(parent) => self.nodes[parent].right = child,
        }
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    /// Follows right links from `id`, returning the last node and its slot.
    fn rightmost(&self, mut slot: Slot, mut id: NodeId) -> (Slot, NodeId) {
        while let Some(right) = self.nodes[id].right {
            slot = Slot::Right(id);
            id = right;
        }
        (slot, id)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if the map contains `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::tree::OrderedMap;
    ///
    /// let map: OrderedMap<_, _> = [("Thursday", 66)].into_iter().collect();
    /// assert!(map.contains(&"Thursday"));
    /// assert!(!map.contains(&"March"));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Returns a reference to the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|id| &self.nodes[id].value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.find(key)?;
        Some(&mut self.nodes[id].value)
    }

    /// Returns the entry with the smallest key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.first(), None);
    ///
    /// map.insert(3, "three");
    /// map.insert(1, "one");
    /// assert_eq!(map.first(), Some((&1, &"one")));
    /// ```
    pub fn first(&self) -> Option<(&K, &V)> {
        self.root
            .map(|root| self.nodes[self.leftmost(root)].entry())
    }

    /// Returns the entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.root
            .map(|root| self.nodes[self.rightmost(Slot::Root, root).1].entry())
    }

    /// Returns the entry with the least key greater than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::tree::OrderedMap;
    ///
    /// let map: OrderedMap<_, _> = [(10, 'a'), (20, 'b'), (30, 'c')].into_iter().collect();
    /// assert_eq!(map.ceiling(&20), Some((&20, &'b')));
    /// assert_eq!(map.ceiling(&21), Some((&30, &'c')));
    /// assert_eq!(map.ceiling(&31), None);
    /// ```
    pub fn ceiling(&self, key: &K) -> Option<(&K, &V)> {
        let mut candidate = None;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            match self.comparator.compare(key, &node.key) {
                Ordering::Equal => return Some(node.entry()),
                Ordering::Less => {
                    candidate = Some(id);
                    cursor = node.left;
                }
                Ordering::Greater => cursor = node.right,
            }
        }
        candidate.map(|id| self.nodes[id].entry())
    }

    /// Returns the entry with the greatest key less than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::tree::OrderedMap;
    ///
    /// let map: OrderedMap<_, _> = [(10, 'a'), (20, 'b'), (30, 'c')].into_iter().collect();
    /// assert_eq!(map.floor(&20), Some((&20, &'b')));
    /// assert_eq!(map.floor(&19), Some((&10, &'a')));
    /// assert_eq!(map.floor(&9), None);
    /// ```
    pub fn floor(&self, key: &K) -> Option<(&K, &V)> {
        let mut candidate = None;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            match self.comparator.compare(key, &node.key) {
                Ordering::Equal => return Some(node.entry()),
                Ordering::Greater => {
                    candidate = Some(id);
                    cursor = node.right;
                }
                Ordering::Less => cursor = node.left,
            }
        }
        candidate.map(|id| self.nodes[id].entry())
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// An empty map has height 0; a single entry has height 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(NodeId, usize)> =
            self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, depth)) = pending.pop() {
            height = height.max(depth);
            let node = &self.nodes[id];
            pending.extend(node.left.map(|left| (left, depth + 1)));
            pending.extend(node.right.map(|right| (right, depth + 1)));
        }
        height
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Descends to `key`'s position and attaches a new node if it is vacant.
    pub(crate) fn place(&mut self, key: K, value: V) -> Placement<K, V> {
        let mut slot = Slot::Root;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            match self.comparator.compare(&key, &node.key) {
                Ordering::Less => {
                    slot = Slot::Left(id);
                    cursor = node.left;
                }
                Ordering::Greater => {
                    slot = Slot::Right(id);
                    cursor = node.right;
                }
                Ordering::Equal => return Placement::Occupied { id, key, value },
            }
        }

        let id = self.nodes.insert(Node::leaf(key, value));
        self.link(slot, Some(id));
        self.length += 1;
        trace!(len = self.length, at_root = (slot == Slot::Root), "attached node");
        Placement::Attached
    }

    pub(crate) fn replace_key(&mut self, id: NodeId, key: K) -> K {
        mem::replace(&mut self.nodes[id].key, key)
    }

    /// Inserts a key-value pair.
    ///
    /// Returns `true` if a new entry was created. If the key is already
    /// present the tree keeps its shape, `false` is returned, and the
    /// configured [`DuplicatePolicy`] decides whether the stored value is
    /// replaced (the default for maps) or kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert!(map.insert(1, "one"));
    /// assert!(!map.insert(1, "ONE"));
    /// assert_eq!(map.get(&1), Some(&"ONE"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        match self.place(key, value) {
            Placement::Attached => true,
            Placement::Occupied { id, value, .. } => {
                let policy = self.config.duplicate_policy;
                if policy == DuplicatePolicy::Replace {
                    self.nodes[id].value = value;
                }
                debug!(%policy, "insert found existing key");
                false
            }
        }
    }

    /// Inserts a key-value pair only if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::DuplicateKey`] and leaves the map untouched if
    /// the key is already present, regardless of the duplicate policy.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<(), TreeError> {
        match self.place(key, value) {
            Placement::Attached => Ok(()),
            Placement::Occupied { .. } => Err(TreeError::DuplicateKey),
        }
    }

    // =========================================================================
    // Deletion
    // =========================================================================

    /// Removes `key` from the map, returning `true` if it was present.
    ///
    /// A node with two children stays in place and receives the entry of its
    /// in-order predecessor, whose node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::tree::OrderedMap;
    ///
    /// let mut map: OrderedMap<_, _> = [(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
    /// assert!(map.delete(&2));
    /// assert!(!map.delete(&2));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn delete(&mut self, key: &K) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Removes `key` from the map, returning its value if it was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes `key` from the map, returning the stored key and value.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let (slot, target) = self.locate(key)?;
        let node = &self.nodes[target];
        let removed = match (node.left, node.right) {
            (None, None) => {
                self.link(slot, None);
                trace!(case = "leaf", "unlinked node");
                self.nodes.remove(target).into_entry()
            }
            (Some(child), None) | (None, Some(child)) => {
                self.link(slot, Some(child));
                trace!(case = "single_child", "spliced child into parent slot");
                self.nodes.remove(target).into_entry()
            }
            (Some(left), Some(_)) => {
                let (predecessor_slot, predecessor) = self.rightmost(Slot::Left(target), left);
                let orphan = self.nodes[predecessor].left;
                self.link(predecessor_slot, orphan);
                let (key, value) = self.nodes.remove(predecessor).into_entry();
                let node = &mut self.nodes[target];
                trace!(
                    case = "two_children",
                    predecessor_was_left_child = (predecessor_slot == Slot::Left(target)),
                    "moved predecessor into node"
                );
                (
                    mem::replace(&mut node.key, key),
                    mem::replace(&mut node.value, value),
                )
            }
        };
        self.length -= 1;
        Some(removed)
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns a lazy traversal of the entries in the given order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::tree::{OrderedMap, TraversalOrder};
    ///
    /// let map: OrderedMap<_, _> = [(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
    ///
    /// let keys = |order| map.traverse(order).map(|(key, _)| *key).collect::<Vec<_>>();
    /// assert_eq!(keys(TraversalOrder::InOrder), vec![1, 2, 3]);
    /// assert_eq!(keys(TraversalOrder::PreOrder), vec![2, 1, 3]);
    /// assert_eq!(keys(TraversalOrder::PostOrder), vec![1, 3, 2]);
    /// ```
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, K, V> {
        Traversal::new(&self.nodes, self.root, self.length, order)
    }

    /// Returns an iterator over the entries in ascending key order.
    pub fn iter(&self) -> Traversal<'_, K, V> {
        self.traverse(TraversalOrder::InOrder)
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Consumes the map, returning its entries in the given order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::tree::{OrderedMap, TraversalOrder};
    ///
    /// let map: OrderedMap<_, _> = [("b", 2), ("a", 1)].into_iter().collect();
    /// let rendered: Vec<String> = map
    ///     .into_entries(TraversalOrder::InOrder)
    ///     .map(|entry| entry.to_string())
    ///     .collect();
    /// assert_eq!(rendered, vec!["(a,1)", "(b,2)"]);
    /// ```
    pub fn into_entries(self, order: TraversalOrder) -> OrderedMapIntoIterator<K, V> {
        let ids: Vec<NodeId> = {
            let mut traversal = Traversal::new(&self.nodes, self.root, self.length, order);
            std::iter::from_fn(|| traversal.next_id()).collect()
        };
        OrderedMapIntoIterator {
            nodes: self.nodes,
            ids: ids.into_iter(),
        }
    }
}

// =============================================================================
// Owning Iterator
// =============================================================================

/// An owning iterator over the entries of an [`OrderedMap`].
pub struct OrderedMapIntoIterator<K, V> {
    nodes: Slab<Node<K, V>>,
    ids: std::vec::IntoIter<NodeId>,
}

impl<K, V> Iterator for OrderedMapIntoIterator<K, V> {
    type Item = MapEntry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids
            .next()
            .map(|id| self.nodes.remove(id).into_entry().into())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<K, V> ExactSizeIterator for OrderedMapIntoIterator<K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K: Ord, V> Default for OrderedMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for OrderedMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C: Compare<K>> IntoIterator for OrderedMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = std::iter::Map<OrderedMapIntoIterator<K, V>, fn(MapEntry<K, V>) -> (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_entries(TraversalOrder::InOrder)
            .map(MapEntry::into_pair as fn(MapEntry<K, V>) -> (K, V))
    }
}

impl<'a, K, V, C: Compare<K>> IntoIterator for &'a OrderedMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Traversal<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Maps are equal when they hold the same entries in the same order.
impl<K: PartialEq, V: PartialEq, C: Compare<K>> PartialEq for OrderedMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C: Compare<K>> Eq for OrderedMap<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C: Compare<K>> fmt::Debug for OrderedMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, C: Compare<K>> fmt::Display for OrderedMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, C> serde::Serialize for OrderedMap<K, V, C>
where
    K: serde::Serialize,
    V: serde::Serialize,
    C: Compare<K>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedMapVisitor<K, V> {
    marker: std::marker::PhantomData<fn() -> (K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for OrderedMapVisitor<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    type Value = OrderedMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        // Later duplicates overwrite earlier ones, like repeated inserts.
        let mut map = OrderedMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for OrderedMap<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_in_key_order() {
        let map: OrderedMap<i32, &str> = [(2, "b"), (1, "a"), (3, "c")].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"1":"a","2":"b","3":"c"}"#
        );
    }

    #[rstest]
    fn test_deserialize_overwrites_duplicate_keys() {
        let map: OrderedMap<String, i32> =
            serde_json::from_str(r#"{"a":1,"b":2,"a":3}"#).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&"a".to_string()), Some(&3));
    }

    #[rstest]
    fn test_roundtrip() {
        let map: OrderedMap<String, Vec<i32>> = (0..20)
            .map(|index| (format!("key{index:02}"), vec![index]))
            .collect();
        let json = serde_json::to_string(&map).unwrap();
        let restored: OrderedMap<String, Vec<i32>> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, map);
    }
}
