//! Ordered set based on an unbalanced binary search tree.
//!
//! [`OrderedSet`] is an [`OrderedMap`] whose values are `()`. Navigation,
//! insertion and the three-case deletion are shared with the map; the set
//! only differs in its default [`DuplicatePolicy`], which is
//! [`Reject`](DuplicatePolicy::Reject): inserting an element equal to a stored
//! one leaves the stored element in place.
//!
//! # Examples
//!
//! ```rust
//! use bstree::tree::OrderedSet;
//!
//! let mut set: OrderedSet<i32> = [5, 1, 3].into_iter().collect();
//! assert!(!set.insert(3));
//! assert!(set.delete(&1));
//!
//! let elements: Vec<&i32> = set.iter().collect();
//! assert_eq!(elements, vec![&3, &5]);
//! assert_eq!(set.floor(&4), Some(&3));
//! ```

use std::fmt;

use compare::{Compare, Natural};
use tracing::debug;

use super::map::Placement;
use super::{DuplicatePolicy, OrderedMap, Traversal, TraversalOrder, TreeConfig, TreeError};

/// An ordered set backed by an unbalanced binary search tree.
#[derive(Clone)]
pub struct OrderedSet<T, C = Natural<T>> {
    map: OrderedMap<T, (), C>,
}

impl<T: Ord> OrderedSet<T> {
    /// Creates an empty set ordered by the natural order of its elements.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TreeConfig::for_set())
    }

    /// Creates an empty, naturally ordered set with the given configuration.
    #[inline]
    #[must_use]
    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            map: OrderedMap::with_config(config),
        }
    }
}

impl<T, C> OrderedSet<T, C>
where
    C: Compare<T>,
{
    /// Creates an empty set ordered by `comparator`.
    #[inline]
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_comparator_and_config(comparator, TreeConfig::for_set())
    }

    /// Creates an empty set ordered by `comparator` with the given configuration.
    #[inline]
    #[must_use]
    pub fn with_comparator_and_config(comparator: C, config: TreeConfig) -> Self {
        Self {
            map: OrderedMap::with_comparator_and_config(comparator, config),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the comparator ordering this set.
    #[inline]
    pub const fn comparator(&self) -> &C {
        self.map.comparator()
    }

    /// Returns the configuration of this set.
    #[inline]
    pub const fn config(&self) -> TreeConfig {
        self.map.config()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns `true` if the set contains an element equal to `element`.
    pub fn contains(&self, element: &T) -> bool {
        self.map.contains(element)
    }

    /// Adds an element, returning `true` if it was not already present.
    ///
    /// When an equal element is present the configured [`DuplicatePolicy`]
    /// decides which of the two is kept; `Reject` (the default) keeps the
    /// stored one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::tree::{DuplicatePolicy, OrderedSet, TreeConfig};
    /// use bstree::tree::ordering::by_key;
    ///
    /// let config = TreeConfig::for_set().with_duplicate_policy(DuplicatePolicy::Replace);
    /// let mut set = OrderedSet::with_comparator_and_config(by_key(|word: &&str| word.len()), config);
    /// assert!(set.insert("one"));
    /// assert!(!set.insert("two"));
    /// assert_eq!(set.first(), Some(&"two"));
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        match self.map.place(element, ()) {
            Placement::Attached => true,
            Placement::Occupied { id, key, .. } => {
                let policy = self.map.config().duplicate_policy;
                if policy == DuplicatePolicy::Replace {
                    self.map.replace_key(id, key);
                }
                debug!(%policy, "insert found existing element");
                false
            }
        }
    }

    /// Adds an element only if no equal element is present.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::DuplicateKey`] and leaves the set untouched if an
    /// equal element is present.
    pub fn try_insert(&mut self, element: T) -> Result<(), TreeError> {
        self.map.try_insert(element, ())
    }

    /// Removes the element equal to `element`, returning `true` if it was present.
    pub fn delete(&mut self, element: &T) -> bool {
        self.map.delete(element)
    }

    /// Removes and returns the stored element equal to `element`.
    pub fn take(&mut self, element: &T) -> Option<T> {
        self.map.remove_entry(element).map(|(stored, ())| stored)
    }

    /// Returns the smallest element.
    pub fn first(&self) -> Option<&T> {
        self.map.first().map(|(element, ())| element)
    }

    /// Returns the largest element.
    pub fn last(&self) -> Option<&T> {
        self.map.last().map(|(element, ())| element)
    }

    /// Returns the least element greater than or equal to `element`.
    pub fn ceiling(&self, element: &T) -> Option<&T> {
        self.map.ceiling(element).map(|(stored, ())| stored)
    }

    /// Returns the greatest element less than or equal to `element`.
    pub fn floor(&self, element: &T) -> Option<&T> {
        self.map.floor(element).map(|(stored, ())| stored)
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.map.height()
    }

    /// Returns a lazy traversal of the elements in the given order.
    pub fn traverse(&self, order: TraversalOrder) -> OrderedSetIterator<'_, T> {
        OrderedSetIterator {
            inner: self.map.traverse(order),
        }
    }

    /// Returns an iterator over the elements in ascending order.
    pub fn iter(&self) -> OrderedSetIterator<'_, T> {
        self.traverse(TraversalOrder::InOrder)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// An iterator over the elements of an [`OrderedSet`].
pub struct OrderedSetIterator<'a, T> {
    inner: Traversal<'a, T, ()>,
}

impl<T> Clone for OrderedSetIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for OrderedSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(element, ())| element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for OrderedSetIterator<'_, T> {}

impl<T> std::iter::FusedIterator for OrderedSetIterator<'_, T> {}

/// An owning iterator over the elements of an [`OrderedSet`], in ascending order.
pub struct OrderedSetIntoIterator<T> {
    inner: super::OrderedMapIntoIterator<T, ()>,
}

impl<T> Iterator for OrderedSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| entry.into_pair().0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for OrderedSetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Ord> Default for OrderedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T, C: Compare<T>> Extend<T> for OrderedSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T, C: Compare<T>> IntoIterator for OrderedSet<T, C> {
    type Item = T;
    type IntoIter = OrderedSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        OrderedSetIntoIterator {
            inner: self.map.into_entries(TraversalOrder::InOrder),
        }
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a OrderedSet<T, C> {
    type Item = &'a T;
    type IntoIter = OrderedSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq, C: Compare<T>> PartialEq for OrderedSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<T: Eq, C: Compare<T>> Eq for OrderedSet<T, C> {}

impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for OrderedSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, C: Compare<T>> fmt::Display for OrderedSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T, C> serde::Serialize for OrderedSet<T, C>
where
    T: serde::Serialize,
    C: Compare<T>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for OrderedSet<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = Vec::<T>::deserialize(deserializer)?;
        Ok(elements.into_iter().collect())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ordering::by_key;
    use rstest::rstest;

    #[rstest]
    fn test_new_set_rejects_duplicates_by_default() {
        let set: OrderedSet<i32> = OrderedSet::new();
        assert_eq!(set.config().duplicate_policy, DuplicatePolicy::Reject);
    }

    #[rstest]
    fn test_insert_and_contains() {
        let mut set = OrderedSet::new();
        assert!(set.insert(2));
        assert!(set.insert(1));
        assert!(!set.insert(2));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&1));
        assert!(!set.contains(&3));
    }

    #[rstest]
    #[case(DuplicatePolicy::Reject, "ab")]
    #[case(DuplicatePolicy::Replace, "cd")]
    fn test_duplicate_policy_decides_stored_element(
        #[case] policy: DuplicatePolicy,
        #[case] expected: &str,
    ) {
        let config = TreeConfig::for_set().with_duplicate_policy(policy);
        let mut set =
            OrderedSet::with_comparator_and_config(by_key(|word: &String| word.len()), config);
        assert!(set.insert("ab".to_string()));
        assert!(!set.insert("cd".to_string()));
        assert_eq!(set.len(), 1);
        assert_eq!(set.first().map(String::as_str), Some(expected));
    }

    #[rstest]
    fn test_try_insert_reports_duplicate() {
        let mut set: OrderedSet<i32> = [1, 2].into_iter().collect();
        assert_eq!(set.try_insert(2), Err(TreeError::DuplicateKey));
        assert_eq!(set.try_insert(3), Ok(()));
        assert_eq!(set.len(), 3);
    }

    #[rstest]
    fn test_take_returns_stored_element() {
        let mut set =
            OrderedSet::with_comparator(|left: &String, right: &String| {
                left.to_lowercase().cmp(&right.to_lowercase())
            });
        set.insert("Monday".to_string());
        assert_eq!(set.take(&"MONDAY".to_string()), Some("Monday".to_string()));
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_navigation() {
        let mut set: OrderedSet<i32> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
        assert_eq!(set.first(), Some(&20));
        assert_eq!(set.last(), Some(&80));
        assert_eq!(set.ceiling(&45), Some(&50));
        assert_eq!(set.floor(&45), Some(&40));
        assert_eq!(set.ceiling(&81), None);
        assert_eq!(set.floor(&19), None);
        assert_eq!(set.height(), 3);

        assert!(set.delete(&50));
        assert_eq!(set.ceiling(&45), Some(&60));
        assert_eq!(set.floor(&45), Some(&40));
    }

    #[rstest]
    fn test_traversal_orders() {
        let set: OrderedSet<i32> = [2, 1, 3].into_iter().collect();
        let collect = |order| set.traverse(order).copied().collect::<Vec<_>>();
        assert_eq!(collect(TraversalOrder::InOrder), vec![1, 2, 3]);
        assert_eq!(collect(TraversalOrder::PreOrder), vec![2, 1, 3]);
        assert_eq!(collect(TraversalOrder::PostOrder), vec![1, 3, 2]);
    }

    #[rstest]
    fn test_into_iter_is_sorted() {
        let set: OrderedSet<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_display_and_debug() {
        let set: OrderedSet<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(format!("{set}"), "{1, 2, 3}");
        assert_eq!(format!("{set:?}"), "{1, 2, 3}");
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn test_serde_roundtrip() {
        let set: OrderedSet<i32> = [3, 1, 2, 3].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[1,2,3]");
        let restored: OrderedSet<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, set);
    }
}
