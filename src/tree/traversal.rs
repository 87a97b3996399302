//! Depth-first traversals of a tree.
//!
//! [`Traversal`] walks the tree lazily with an explicit stack, so it neither
//! recurses nor allocates more than the height of the tree. In-order is the
//! only order that exposes the sort invariant; pre-order and post-order exist
//! for structural inspection.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use slab::Slab;
use smallvec::SmallVec;

use super::TreeError;
use super::node::{Node, NodeId};

/// Number of pending steps kept inline before the traversal stack spills to
/// the heap.
const INLINE_STEPS: usize = 32;

/// The order in which a [`Traversal`] visits nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TraversalOrder {
    /// Left subtree, node, right subtree: ascending key order.
    #[default]
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

impl TraversalOrder {
    /// All traversal orders.
    pub const ALL: [Self; 3] = [Self::InOrder, Self::PreOrder, Self::PostOrder];
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InOrder => formatter.write_str("inorder"),
            Self::PreOrder => formatter.write_str("preorder"),
            Self::PostOrder => formatter.write_str("postorder"),
        }
    }
}

impl FromStr for TraversalOrder {
    type Err = TreeError;

    /// Parses `inorder`, `preorder` or `postorder`, ignoring case and any
    /// `-`/`_` separators.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized: String = input
            .trim()
            .chars()
            .filter(|character| !matches!(character, '-' | '_'))
            .map(|character| character.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "inorder" => Ok(Self::InOrder),
            "preorder" => Ok(Self::PreOrder),
            "postorder" => Ok(Self::PostOrder),
            _ => Err(TreeError::invalid_input(
                "traversal order",
                format!("unknown order `{input}`"),
            )),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Step {
    /// Expand the subtree rooted at this node.
    Visit(NodeId),
    /// Yield this node.
    Emit(NodeId),
}

/// A lazy depth-first iterator over the entries of a tree.
///
/// Created by [`OrderedMap::traverse`](super::OrderedMap::traverse) and
/// [`OrderedMap::iter`](super::OrderedMap::iter). Traversals borrow the tree
/// immutably; a fresh one can be started at any time.
pub struct Traversal<'a, K, V> {
    nodes: &'a Slab<Node<K, V>>,
    order: TraversalOrder,
    stack: SmallVec<[Step; INLINE_STEPS]>,
    remaining: usize,
}

impl<'a, K, V> Traversal<'a, K, V> {
    pub(crate) fn new(
        nodes: &'a Slab<Node<K, V>>,
        root: Option<NodeId>,
        length: usize,
        order: TraversalOrder,
    ) -> Self {
        let mut stack = SmallVec::new();
        if let Some(root) = root {
            stack.push(Step::Visit(root));
        }
        Self {
            nodes,
            order,
            stack,
            remaining: length,
        }
    }

    /// Returns the order this traversal follows.
    #[inline]
    pub const fn order(&self) -> TraversalOrder {
        self.order
    }

    /// Advances to the next node id without touching its entry.
    pub(crate) fn next_id(&mut self) -> Option<NodeId> {
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Emit(id) => {
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some(id);
                }
                Step::Visit(id) => self.expand(id),
            }
        }
        None
    }

    /// Pushes the steps for the subtree at `id`, last step first.
    fn expand(&mut self, id: NodeId) {
        let node = &self.nodes[id];
        let left = node.left.map(Step::Visit);
        let right = node.right.map(Step::Visit);
        let steps = match self.order {
            TraversalOrder::InOrder => [right, Some(Step::Emit(id)), left],
            TraversalOrder::PreOrder => [right, left, Some(Step::Emit(id))],
            TraversalOrder::PostOrder => [Some(Step::Emit(id)), right, left],
        };
        self.stack.extend(steps.into_iter().flatten());
    }
}

impl<K, V> Clone for Traversal<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            order: self.order,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Traversal<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        self.next_id().map(|id| nodes[id].entry())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Traversal<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Traversal<'_, K, V> {}

impl<K, V> fmt::Debug for Traversal<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Traversal")
            .field("order", &self.order)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}
