//! Hooks of the HashSet.

use std::collections::hash_map::DefaultHasher;

use super::root::hash::{Hash, Hasher};

/// A deterministic hash function, deferring to the standard `DefaultHasher`.
///
/// Unlike `RandomState`, every call hashes with the same keys, so that equal
/// values hash identically across sets and across runs of the same binary.
///
/// #   Example
///
/// ```
/// #   use chainset::hashset::{default_hash, HashSet};
/// let mut set = HashSet::new(default_hash::<&str>);
/// set.add("Hello");
///
/// assert!(set.contains(&"Hello"));
/// assert_eq!(default_hash("Hello"), default_hash("Hello"));
/// ```
pub fn default_hash<T: ?Sized + Hash>(value: &T) -> usize {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish() as usize
}
