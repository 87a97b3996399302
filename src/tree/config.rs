//! Runtime configuration of a tree.

use std::fmt;
use std::str::FromStr;

use super::TreeError;

/// What `insert` does when the key is already present.
///
/// Both policies leave the tree shape and length unchanged and make `insert`
/// return `false`; they differ only in whether the stored data is updated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DuplicatePolicy {
    /// Overwrite the stored value (for sets: the stored element).
    #[default]
    Replace,
    /// Keep the stored data untouched.
    Reject,
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace => formatter.write_str("replace"),
            Self::Reject => formatter.write_str("reject"),
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = TreeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "replace" | "update" => Ok(Self::Replace),
            "reject" | "keep" => Ok(Self::Reject),
            _ => Err(TreeError::invalid_input(
                "duplicate policy",
                format!("expected `replace` or `reject`, got `{input}`"),
            )),
        }
    }
}

/// Configuration shared by [`OrderedMap`](super::OrderedMap) and
/// [`OrderedSet`](super::OrderedSet).
///
/// # Examples
///
/// ```rust
/// use bstree::tree::{DuplicatePolicy, OrderedMap, TreeConfig};
///
/// let config = TreeConfig::for_map().with_duplicate_policy(DuplicatePolicy::Reject);
/// let mut map = OrderedMap::with_config(config);
///
/// assert!(map.insert(1, "one"));
/// assert!(!map.insert(1, "ONE"));
/// assert_eq!(map.get(&1), Some(&"one"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TreeConfig {
    /// Behavior of `insert` on an existing key.
    pub duplicate_policy: DuplicatePolicy,
}

impl TreeConfig {
    /// Map defaults: duplicate inserts update the value.
    #[must_use]
    pub const fn for_map() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Replace,
        }
    }

    /// Set defaults: duplicate inserts are rejected.
    #[must_use]
    pub const fn for_set() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Reject,
        }
    }

    /// Returns this configuration with the given duplicate policy.
    #[must_use]
    pub const fn with_duplicate_policy(mut self, duplicate_policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = duplicate_policy;
        self
    }
}
