//! Key ordering for trees.
//!
//! A tree is ordered by a single comparator value fixed at construction time.
//! Any type implementing [`Compare`] can be used, including plain closures of
//! the form `Fn(&K, &K) -> Ordering`. When no comparator is supplied the tree
//! uses [`Natural`], the key type's [`Ord`] implementation.
//!
//! A comparator fully replaces natural ordering: the key's `Ord` impl is never
//! consulted once a comparator is installed. Comparators must be total and
//! transitive over every key ever inserted; the tree does not validate this.
//!
//! # Examples
//!
//! ```rust
//! use bstree::tree::OrderedMap;
//! use bstree::tree::ordering::{by_key, reversed};
//!
//! let mut descending = OrderedMap::with_comparator(reversed::<i32>());
//! descending.insert(1, "one");
//! descending.insert(2, "two");
//! assert_eq!(descending.first(), Some((&2, &"two")));
//!
//! let mut by_length = OrderedMap::with_comparator(by_key(|word: &&str| word.len()));
//! by_length.insert("three", 3);
//! by_length.insert("two", 2);
//! assert_eq!(by_length.first(), Some((&"two", &2)));
//! ```

use std::cmp::Ordering;

pub use compare::{Compare, Natural, Rev, natural};

/// Returns a comparator ordering keys by their natural order, descending.
#[must_use]
pub fn reversed<K: Ord>() -> Rev<Natural<K>> {
    natural().rev()
}

/// Returns a comparator ordering keys by a projection of each key.
///
/// Keys whose projections are equal compare equal, so only one of them can be
/// stored in a tree using this comparator.
pub fn by_key<K, P, F>(project: F) -> impl Fn(&K, &K) -> Ordering + Clone
where
    P: Ord,
    F: Fn(&K) -> P + Clone,
{
    move |left, right| project(left).cmp(&project(right))
}
