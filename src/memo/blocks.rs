// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-capacity memo table for block counts.
//!
//! A block `(s, k, p)` is the range `[k·10^p, (k+1)·10^p)` together with a
//! target digit sum `s`. Its count depends only on the key, never on the
//! bound being searched, so entries stay valid for the lifetime of the table.

use crate::digits::constants::{BASE, MAX_DIGITS, MAX_DIGIT_SUM};

const SUMS: usize = MAX_DIGIT_SUM as usize + 1;
const LEADS: usize = BASE as usize;

/// Number of slots: every (sum, lead, positions) a `u64` bound can produce.
pub const BLOCK_TABLE_SIZE: usize = SUMS * LEADS * MAX_DIGITS;

/// No block holds `u64::MAX` numbers, so it marks an empty slot.
const UNKNOWN: u64 = u64::MAX;

/// Key of a block count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockKey {
    /// Target digit sum `s`.
    pub sum: u32,
    /// Leading digit `k` (0..=9).
    pub lead: u32,
    /// Free trailing positions `p`.
    pub positions: u32,
}

impl BlockKey {
    pub fn new(sum: u32, lead: u32, positions: u32) -> Self {
        Self {
            sum,
            lead,
            positions,
        }
    }

    /// Slot index, or `None` when the key lies outside the table.
    #[inline]
    fn slot(&self) -> Option<usize> {
        let (sum, lead, positions) = (
            self.sum as usize,
            self.lead as usize,
            self.positions as usize,
        );
        if sum >= SUMS || lead >= LEADS || positions >= MAX_DIGITS {
            return None;
        }
        Some((positions * LEADS + lead) * SUMS + sum)
    }
}

/// Flat table of block counts, pre-sized so it never grows.
#[derive(Debug, Clone)]
pub struct BlockTable {
    counts: Vec<u64>,
    filled: usize,
}

impl BlockTable {
    pub fn new() -> Self {
        Self {
            counts: vec![UNKNOWN; BLOCK_TABLE_SIZE],
            filled: 0,
        }
    }

    /// Cached count for `key`, if one was stored.
    #[inline]
    pub fn get(&self, key: BlockKey) -> Option<u64> {
        key.slot()
            .map(|slot| self.counts[slot])
            .filter(|&count| count != UNKNOWN)
    }

    /// Store a count. Keys outside the table are silently not cached.
    pub fn insert(&mut self, key: BlockKey, count: u64) {
        if let Some(slot) = key.slot() {
            if self.counts[slot] == UNKNOWN {
                self.filled += 1;
            }
            self.counts[slot] = count;
        }
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Total slots available.
    pub fn capacity(&self) -> usize {
        self.counts.len()
    }
}

impl Default for BlockTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        let table = BlockTable::new();
        assert!(table.is_empty());
        assert_eq!(table.capacity(), BLOCK_TABLE_SIZE);
        assert_eq!(table.get(BlockKey::new(5, 0, 2)), None);
    }

    #[test]
    fn test_insert_and_get() {
        let mut table = BlockTable::new();
        table.insert(BlockKey::new(5, 0, 2), 6);
        table.insert(BlockKey::new(5, 0, 2), 6);
        assert_eq!(table.get(BlockKey::new(5, 0, 2)), Some(6));
        assert_eq!(table.get(BlockKey::new(5, 1, 2)), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_zero_count_is_cached() {
        let mut table = BlockTable::new();
        table.insert(BlockKey::new(0, 3, 4), 0);
        assert_eq!(table.get(BlockKey::new(0, 3, 4)), Some(0));
    }

    #[test]
    fn test_out_of_range_keys_ignored() {
        let mut table = BlockTable::new();
        let wide = BlockKey::new(1, 0, MAX_DIGITS as u32);
        table.insert(wide, 1);
        assert_eq!(table.get(wide), None);
        assert!(table.is_empty());
    }

    #[test]
    fn test_distinct_slots() {
        let mut table = BlockTable::new();
        let last = BlockKey::new(MAX_DIGIT_SUM, BASE - 1, MAX_DIGITS as u32 - 1);
        table.insert(BlockKey::new(0, 0, 0), 1);
        table.insert(last, 7);
        assert_eq!(table.get(BlockKey::new(0, 0, 0)), Some(1));
        assert_eq!(table.get(last), Some(7));
    }
}
