// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bounded least-recently-used cache for pure functions of one key.
//!
//! Eviction only costs recomputation; cached values are pure functions of
//! their keys, so a hit and a miss always agree.

use lru::LruCache;
use std::fmt;
use std::hash::Hash;
use std::num::NonZeroUsize;

/// Smallest capacity any cache is given.
pub const MIN_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1024) {
    Some(capacity) => capacity,
    None => panic!("cache capacity must be non-zero"),
};

/// LRU cache over `Copy` values.
pub struct BoundedCache<K: Hash + Eq, V: Copy> {
    entries: LruCache<K, V>,
}

impl<K: Hash + Eq, V: Copy> BoundedCache<K, V> {
    /// Create a cache holding at least [`MIN_CACHE_CAPACITY`] entries.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .map_or(MIN_CACHE_CAPACITY, |c| c.max(MIN_CACHE_CAPACITY));
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Look up `key`, marking it most recently used.
    #[inline]
    pub fn get(&mut self, key: &K) -> Option<V> {
        self.entries.get(key).copied()
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.entries.put(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }
}

impl<K: Hash + Eq, V: Copy> fmt::Debug for BoundedCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
