// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counting context combining memo tables and statistics.
//!
//! Every memoized operation is a method on [`CountingContext`]; there is no
//! process-wide cache. Two contexts never share state, so independent
//! computations (for example parallel tests) cannot pollute each other.
//!
//! # Example
//!
//! ```
//! use digitsum_fixed_points::context::CountingContext;
//!
//! let mut ctx = CountingContext::new();
//! assert_eq!(ctx.count_fixed_points(9), Ok(9));
//!
//! // Warmed caches can be handed on to a fresh context.
//! let mut next = CountingContext::with_memo(ctx.into_memo());
//! assert_eq!(next.count_fixed_points(9), Ok(9));
//! ```

pub mod memoized;

pub use memoized::{CacheConfig, MemoizedData, DEFAULT_CACHE_CAPACITY};

use crate::digits::Digits;
use crate::statistics::{Counters, Statistics};

/// Memo tables plus the counters describing how they were used.
///
/// The block, range and fixed-point operations are implemented in
/// [`crate::counting`] and [`crate::search`] as methods on this type.
#[derive(Debug)]
pub struct CountingContext {
    /// Pure-function caches
    pub memo: MemoizedData,
    /// Cache and search counters
    pub statistics: Statistics,
}

impl CountingContext {
    /// Create a context with default cache capacities.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    pub fn with_config(config: CacheConfig) -> Self {
        Self::with_memo(MemoizedData::new(config))
    }

    /// Create a context over existing (possibly warmed) memo tables.
    pub fn with_memo(memo: MemoizedData) -> Self {
        Self {
            memo,
            statistics: Statistics::new(),
        }
    }

    /// Give up the memo tables, e.g. to seed another context.
    pub fn into_memo(self) -> MemoizedData {
        self.memo
    }

    /// Memoized [`crate::digits::decompose`].
    pub fn digits(&mut self, n: u64) -> Digits {
        if let Some(digits) = self.memo.digits.get(&n) {
            self.statistics.increment(Counters::DigitHits);
            return digits;
        }
        self.statistics.increment(Counters::DigitMisses);
        let digits = Digits::new(n);
        self.memo.digits.insert(n, digits);
        digits
    }

    /// Memoized [`crate::digits::digit_sum`].
    pub fn digit_sum(&mut self, n: u64) -> u32 {
        if let Some(sum) = self.memo.digit_sums.get(&n) {
            self.statistics.increment(Counters::DigitSumHits);
            return sum;
        }
        self.statistics.increment(Counters::DigitSumMisses);
        let sum = self.digits(n).sum();
        self.memo.digit_sums.insert(n, sum);
        sum
    }
}

impl Default for CountingContext {
    fn default() -> Self {
        Self::new()
    }
}
