//! Shared, lock-protected ordered maps.
//!
//! [`OrderedMap`] mutates in place and is not internally synchronized.
//! [`SharedOrderedMap`] wraps one in an `Arc<parking_lot::RwLock<_>>`: every
//! mutation takes the write lock, and reads share the read lock. In-place
//! value replacement and the key/value move of a two-child deletion therefore
//! never interleave with a reader.
//!
//! Reads return owned clones because references cannot outlive the lock
//! guard. Use [`SharedOrderedMap::read`] to borrow the map for the duration
//! of a closure instead.
//!
//! # Examples
//!
//! ```rust
//! use bstree::sync::SharedOrderedMap;
//! use std::thread;
//!
//! let map = SharedOrderedMap::new();
//! let handles: Vec<_> = (0..4)
//!     .map(|worker| {
//!         let map = map.clone();
//!         thread::spawn(move || {
//!             for index in 0..25 {
//!                 map.insert(worker * 25 + index, worker);
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(map.len(), 100);
//! assert_eq!(map.first_cloned(), Some((0, 0)));
//! ```

use std::fmt;
use std::sync::Arc;

use compare::{Compare, Natural};
use parking_lot::RwLock;

use crate::tree::{OrderedMap, TreeConfig};

/// A cloneable handle to an [`OrderedMap`] guarded by a reader-writer lock.
pub struct SharedOrderedMap<K, V, C = Natural<K>> {
    inner: Arc<RwLock<OrderedMap<K, V, C>>>,
}

impl<K: Ord, V> SharedOrderedMap<K, V> {
    /// Creates an empty, naturally ordered shared map.
    #[must_use]
    pub fn new() -> Self {
        Self::from_map(OrderedMap::new())
    }

    /// Creates an empty, naturally ordered shared map with the given configuration.
    #[must_use]
    pub fn with_config(config: TreeConfig) -> Self {
        Self::from_map(OrderedMap::with_config(config))
    }
}

impl<K: Ord, V> Default for SharedOrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> Clone for SharedOrderedMap<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V, C: Compare<K>> SharedOrderedMap<K, V, C> {
    /// Wraps an existing map.
    #[must_use]
    pub fn from_map(map: OrderedMap<K, V, C>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    /// Runs `reader` with shared access to the map.
    pub fn read<R>(&self, reader: impl FnOnce(&OrderedMap<K, V, C>) -> R) -> R {
        reader(&self.inner.read())
    }

    /// Runs `writer` with exclusive access to the map.
    pub fn write<R>(&self, writer: impl FnOnce(&mut OrderedMap<K, V, C>) -> R) -> R {
        writer(&mut self.inner.write())
    }

    /// Inserts under the write lock. See [`OrderedMap::insert`].
    pub fn insert(&self, key: K, value: V) -> bool {
        self.inner.write().insert(key, value)
    }

    /// Deletes under the write lock. See [`OrderedMap::delete`].
    pub fn delete(&self, key: &K) -> bool {
        self.inner.write().delete(key)
    }

    /// Clears under the write lock.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Returns `true` if the map contains `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.read().contains(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns a clone of the value stored under `key`.
    pub fn get_cloned(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.read().get(key).cloned()
    }

    /// Returns a clone of the entry with the smallest key.
    pub fn first_cloned(&self) -> Option<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.inner.read().first().map(clone_entry)
    }

    /// Returns a clone of the entry with the largest key.
    pub fn last_cloned(&self) -> Option<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.inner.read().last().map(clone_entry)
    }

    /// Returns a clone of the entry with the least key greater than or equal to `key`.
    pub fn ceiling_cloned(&self, key: &K) -> Option<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.inner.read().ceiling(key).map(clone_entry)
    }

    /// Returns a clone of the entry with the greatest key less than or equal to `key`.
    pub fn floor_cloned(&self, key: &K) -> Option<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.inner.read().floor(key).map(clone_entry)
    }
}

fn clone_entry<K: Clone, V: Clone>((key, value): (&K, &V)) -> (K, V) {
    (key.clone(), value.clone())
}

impl<K: fmt::Debug, V: fmt::Debug, C: Compare<K>> fmt::Debug for SharedOrderedMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("SharedOrderedMap")
            .field(&*self.inner.read())
            .finish()
    }
}

static_assertions::assert_impl_all!(SharedOrderedMap<i32, String>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_clones_share_state() {
        let map = SharedOrderedMap::new();
        let other = map.clone();
        assert!(map.insert(1, "one"));
        assert!(other.contains(&1));
        assert!(other.delete(&1));
        assert!(map.is_empty());
    }

    #[rstest]
    fn test_read_and_write_closures() {
        let map: SharedOrderedMap<i32, i32> = SharedOrderedMap::new();
        map.write(|inner| {
            inner.insert(2, 20);
            inner.insert(1, 10);
        });
        let keys = map.read(|inner| inner.keys().copied().collect::<Vec<_>>());
        assert_eq!(keys, vec![1, 2]);
    }

    #[rstest]
    fn test_cloned_queries() {
        let inner: OrderedMap<i32, char> = [(10, 'a'), (20, 'b')].into_iter().collect();
        let map = SharedOrderedMap::from_map(inner);
        assert_eq!(map.get_cloned(&10), Some('a'));
        assert_eq!(map.ceiling_cloned(&15), Some((20, 'b')));
        assert_eq!(map.floor_cloned(&15), Some((10, 'a')));
        assert_eq!(map.last_cloned(), Some((20, 'b')));
        map.clear();
        assert_eq!(map.first_cloned(), None);
    }

    #[rstest]
    fn test_debug_shows_entries() {
        let map: SharedOrderedMap<i32, i32> = SharedOrderedMap::new();
        map.insert(1, 2);
        assert_eq!(format!("{map:?}"), "SharedOrderedMap({1: 2})");
    }
}
