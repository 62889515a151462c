//! Collection type aliases.

use crate::hash::FastBuildHasher;

/// A hash set based on `hashbrown` ([`HashSet`][hashbrown::HashSet]) using [`FastHasher`][crate::hash::FastHasher].
pub type FastHashSet<T> = hashbrown::HashSet<T, FastBuildHasher>;

/// A hash map based on `hashbrown` ([`HashMap`][hashbrown::HashMap]) using [`FastHasher`][crate::hash::FastHasher].
pub type FastHashMap<K, V> = hashbrown::HashMap<K, V, FastBuildHasher>;

/// A concurrent hash map based on `papaya` ([`HashMap`][papaya::HashMap]) using [`FastHasher`][crate::hash::FastHasher].
pub type FastConcurrentHashMap<K, V> = papaya::HashMap<K, V, FastBuildHasher>;
