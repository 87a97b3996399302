//! Arena-resident tree nodes.
//!
//! Nodes are stored in a [`slab::Slab`] owned by the map, and child links are
//! arena indices. Every live node is referenced by exactly one [`Slot`]: the
//! root slot of the map, or the left/right link of its parent.

/// Index of a node inside the map's arena.
pub(crate) type NodeId = usize;

/// The location that holds a link to a node.
///
/// Descents carry the slot they arrived through so that structural
/// mutations can rewrite the link without parent pointers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    /// The root link of the map.
    Root,
    /// The left link of the given node.
    Left(NodeId),
    /// The right link of the given node.
    Right(NodeId),
}

/// A single key-value node of the binary search tree.
#[derive(Clone, Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    /// Creates a node with no children.
    pub(crate) const fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn entry(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    #[inline]
    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}
