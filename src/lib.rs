// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Count digit-sum rank fixed points.
//!
//! For a bound `n`, the rank of a digit sum `s` is the number of integers in
//! `[1, n]` whose digit sum is at most `s`. An integer `q <= n` is a fixed
//! point when the rank of `digitsum(q)` is `q` itself. This crate counts the
//! fixed points without enumerating `[1, n]`, so bounds up to
//! [`MAX_BOUND`] (`u64::MAX - 1`) are practical.
//!
//! # Architecture
//!
//! Four layers, each built on the one before:
//!
//! 1. **Digits** ([`digits`]): decomposition into base-10 digits and digit sums
//! 2. **Blocks** ([`counting::block`]): how many integers in
//!    `[k·10^p, (k+1)·10^p)` have digit sum `s`
//! 3. **Ranges** ([`counting::range`]): how many integers in `[1, m]` have
//!    digit sum `s`, by digit-DP prefix decomposition into blocks
//! 4. **Search** ([`search`]): cumulative counts per threshold, then a
//!    bisection per threshold for the fixed point
//!
//! ## Memo tables
//!
//! Every cached value is a pure function of its key. The caches live in a
//! [`CountingContext`] rather than in globals:
//! - Block counts: a fixed-capacity table indexed by (s, k, p)
//! - Digits, digit sums and range counts: LRU caches (at least 1024 entries)
//!
//! A context can be reused across bounds, and its warmed tables moved into
//! a new context with [`CountingContext::with_memo`].
//!
//! # Example
//!
//! ```
//! use digitsum_fixed_points::CountingContext;
//!
//! let mut ctx = CountingContext::new();
//! assert_eq!(ctx.count_fixed_points(1), Ok(1));
//! assert_eq!(ctx.count_fixed_points(9), Ok(9));
//! assert_eq!(ctx.count_fixed_points(1000), Ok(3));
//! ```

pub mod context;
pub mod counting;
pub mod digits;
pub mod memo;
pub mod search;
pub mod statistics;

// Re-export commonly used types
pub use context::{CacheConfig, CountingContext};
pub use digits::constants::MAX_BOUND;
pub use digits::{decompose, digit_sum, parse_bound, DigitError, Digits};
pub use search::count_fixed_points;
pub use statistics::{Counters, Statistics};
