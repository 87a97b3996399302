//! # bstree
//!
//! An ordered map and set backed by an unbalanced binary search tree.
//!
//! ## Overview
//!
//! - **Ordered map**: [`tree::OrderedMap`] with insert, delete, membership,
//!   `first`/`last` and `floor`/`ceiling` queries
//! - **Ordered set**: [`tree::OrderedSet`], the same tree without values
//! - **Traversal**: lazy in-order, pre-order and post-order iteration
//! - **Custom ordering**: any comparator closure replaces natural key order
//! - **Shared access**: `sync::SharedOrderedMap` behind a reader-writer lock
//!
//! The tree is deliberately unbalanced: its shape is determined entirely by
//! insertion order.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for maps, sets and configuration
//! - `sync`: `SharedOrderedMap`, a lock-protected handle for multi-threaded use
//! - `full`: Enable all features
//!
//! ## Logging
//!
//! Structural changes are reported through [`tracing`] at `trace` level and
//! duplicate-key handling at `debug` level. No subscriber is installed by the
//! library.
//!
//! ## Example
//!
//! ```rust
//! use bstree::prelude::*;
//!
//! let mut map = OrderedMap::new();
//! map.insert("Wednesday", 68);
//! map.insert("Monday", 65);
//!
//! assert_eq!(map.first(), Some((&"Monday", &65)));
//! assert_eq!(map.ceiling(&"Tuesday"), Some((&"Wednesday", &68)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use bstree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::tree::ordering::Compare;
    pub use crate::tree::*;

    #[cfg(feature = "sync")]
    pub use crate::sync::*;
}

pub mod tree;

#[cfg(feature = "sync")]
pub mod sync;
