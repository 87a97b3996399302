//! Error type for tree operations.
//!
//! Absence is never an error: lookups return `Option` and mutators report
//! "not found" / "already present" as `bool`. `TreeError` covers the strict
//! entry points that must reject their input.

/// Errors reported by fallible tree operations.
///
/// # Examples
///
/// ```rust
/// use bstree::tree::{OrderedMap, TreeError};
///
/// let mut map = OrderedMap::new();
/// assert_eq!(map.try_insert(1, "one"), Ok(()));
/// assert_eq!(map.try_insert(1, "ONE"), Err(TreeError::DuplicateKey));
/// assert_eq!(format!("{}", TreeError::DuplicateKey), "key is already present");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// A strict insert found the key already present.
    #[error("key is already present")]
    DuplicateKey,
    /// An argument could not be interpreted.
    #[error("invalid {parameter}: {reason}")]
    InvalidInput {
        /// The name of the rejected argument.
        parameter: &'static str,
        /// Why the argument was rejected.
        reason: String,
    },
}

impl TreeError {
    pub(crate) fn invalid_input(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            parameter,
            reason: reason.into(),
        }
    }
}
