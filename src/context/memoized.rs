// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memo tables owned by a counting context.

use crate::digits::Digits;
use crate::memo::{BlockTable, BoundedCache, MIN_CACHE_CAPACITY};

/// Default capacity of each LRU cache.
pub const DEFAULT_CACHE_CAPACITY: usize = MIN_CACHE_CAPACITY.get();

/// Capacities of the LRU caches.
///
/// Values below [`DEFAULT_CACHE_CAPACITY`] are raised to it. The block
/// table is not configurable: its size follows from the `u64` digit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Capacity of the digit and digit-sum caches.
    pub digit_capacity: usize,
    /// Capacity of the range-count cache keyed by (s, m).
    pub range_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            digit_capacity: DEFAULT_CACHE_CAPACITY,
            range_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Pure-function caches.
///
/// Every entry is a function of its key alone, so the tables are
/// append-only in meaning: they can be kept across searches of different
/// bounds and never need invalidation.
///
/// # Size
///
/// The block table is 36 200 `u64` slots (~283 KB); each LRU cache holds
/// its configured number of entries.
#[derive(Debug)]
pub struct MemoizedData {
    /// Block counts keyed by (s, k, p).
    pub blocks: BlockTable,

    /// Decompositions keyed by value.
    pub digits: BoundedCache<u64, Digits>,

    /// Digit sums keyed by value.
    pub digit_sums: BoundedCache<u64, u32>,

    /// Exact range counts keyed by (s, m).
    pub ranges: BoundedCache<(u32, u64), u64>,
}

impl MemoizedData {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            blocks: BlockTable::new(),
            digits: BoundedCache::new(config.digit_capacity),
            digit_sums: BoundedCache::new(config.digit_capacity),
            ranges: BoundedCache::new(config.range_capacity),
        }
    }
}

impl Default for MemoizedData {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
