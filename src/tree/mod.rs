//! Ordered collections backed by an unbalanced binary search tree.
//!
//! This module provides:
//!
//! - [`OrderedMap`]: ordered key-value map
//! - [`OrderedSet`]: ordered set, an `OrderedMap` with the value elided
//! - [`Traversal`]: lazy in-order, pre-order and post-order walks
//! - [`MapEntry`]: owned key-value pair handed out by consuming traversals
//!
//! # Ordering
//!
//! Keys are ordered by their natural [`Ord`] implementation unless a
//! comparator is supplied at construction; see [`ordering`].
//!
//! # Balancing
//!
//! The tree is never rebalanced. Operations cost O(h) where h is the height,
//! which degrades to O(n) when keys arrive in sorted order.
//!
//! # Examples
//!
//! ```rust
//! use bstree::tree::{OrderedMap, TraversalOrder};
//!
//! let mut map = OrderedMap::new();
//! for key in [50, 30, 70, 20, 40, 60, 80] {
//!     map.insert(key, ());
//! }
//!
//! let inorder: Vec<i32> = map.keys().copied().collect();
//! assert_eq!(inorder, vec![20, 30, 40, 50, 60, 70, 80]);
//!
//! map.delete(&50);
//! let preorder: Vec<i32> = map
//!     .traverse(TraversalOrder::PreOrder)
//!     .map(|(key, _)| *key)
//!     .collect();
//! assert_eq!(preorder, vec![40, 30, 20, 70, 60, 80]);
//! ```

mod config;
mod entry;
mod error;
mod map;
mod node;
pub mod ordering;
mod set;
mod traversal;

pub use config::DuplicatePolicy;
pub use config::TreeConfig;
pub use entry::MapEntry;
pub use error::TreeError;
pub use map::OrderedMap;
pub use map::OrderedMapIntoIterator;
pub use set::OrderedSet;
pub use set::OrderedSetIntoIterator;
pub use set::OrderedSetIterator;
pub use traversal::Traversal;
pub use traversal::TraversalOrder;
