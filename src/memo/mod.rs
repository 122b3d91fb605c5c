// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memo tables.
//!
//! - [`BlockTable`]: fixed-capacity table of block counts keyed by (s, k, p)
//! - [`BoundedCache`]: LRU cache for digits, digit sums and range counts
//!
//! Neither is global: a [`crate::context::CountingContext`] owns one of each.

pub mod blocks;
pub mod bounded;

pub use blocks::{BlockKey, BlockTable, BLOCK_TABLE_SIZE};
pub use bounded::{BoundedCache, MIN_CACHE_CAPACITY};
