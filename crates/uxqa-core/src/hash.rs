//! Fast hash map and hash set type aliases.
//!
//! Re-exports the `rustc-hash` Fx collections used for indexing routes
//! and de-duplicating generated test titles. Keys are internal strings, so
//! denial-of-service resistance is not needed.
//!
//! # Examples
//!
//! ```
//! use uxqa_core::{FxHashSet, fx_hash_set_with_capacity};
//!
//! let mut seen: FxHashSet<&str> = fx_hash_set_with_capacity(4);
//! assert!(seen.insert("/login"));
//! assert!(!seen.insert("/login"));
//! ```

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// A [`HashSet`](std::collections::HashSet) using the Fx hash algorithm.
pub type FxHashSet<V> = rustc_hash::FxHashSet<V>;

/// Creates a new [`FxHashMap`] with the specified capacity.
#[inline]
#[must_use]
pub fn fx_hash_map_with_capacity<K, V>(capacity: usize) -> FxHashMap<K, V> {
    FxHashMap::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher)
}

/// Creates a new [`FxHashSet`] with the specified capacity.
#[inline]
#[must_use]
pub fn fx_hash_set_with_capacity<V>(capacity: usize) -> FxHashSet<V> {
    FxHashSet::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher)
}
