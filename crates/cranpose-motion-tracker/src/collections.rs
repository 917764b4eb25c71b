use indexmap::IndexMap;

#[cfg(feature = "std-hash")]
pub mod map {
    pub use std::collections::hash_map::RandomState as BuildHasher;
}

#[cfg(not(feature = "std-hash"))]
pub mod map {
    // fast branch
    pub use rustc_hash::FxBuildHasher as BuildHasher;
}

/// Insertion-ordered map used for pending records.
///
/// Insertion order doubles as creation order, which stale-event discarding
/// and capacity eviction rely on.
pub type OrderedMap<K, V> = IndexMap<K, V, map::BuildHasher>;

pub fn ordered_map<K, V>() -> OrderedMap<K, V> {
    IndexMap::with_hasher(map::BuildHasher::default())
}
