//! Owned key-value pairs handed out to callers.

use std::fmt;

/// An owned key-value pair with an immutable key and a mutable value.
///
/// `MapEntry` is the carrier used when entries leave a tree, for example
/// through [`OrderedMap::into_entries`](super::OrderedMap::into_entries). Its
/// `Display` form is `(key,value)`.
///
/// # Examples
///
/// ```rust
/// use bstree::tree::MapEntry;
///
/// let mut entry = MapEntry::new("Monday", 65);
/// entry.set_value(70);
///
/// assert_eq!(entry.key(), &"Monday");
/// assert_eq!(entry.value(), &70);
/// assert_eq!(entry.to_string(), "(Monday,70)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MapEntry<K, V> {
    key: K,
    value: V,
}

impl<K, V> MapEntry<K, V> {
    /// Creates an entry from a key and a value.
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the key.
    #[inline]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Replaces the value, returning the previous one.
    #[inline]
    pub const fn set_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    /// Splits the entry into its key and value.
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for MapEntry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K: Clone, V: Clone> From<(&K, &V)> for MapEntry<K, V> {
    fn from((key, value): (&K, &V)) -> Self {
        Self::new(key.clone(), value.clone())
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for MapEntry<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({},{})", self.key, self.value)
    }
}
