// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cumulative digit-sum counts for one bound.

use crate::context::CountingContext;
use crate::digits::constants::MAX_DIGIT_SUM;
use tracing::debug;

/// `at_most(s)` is the number of integers in `[1, n]` with digit sum `<= s`.
///
/// Entry 0 is a sentinel 0: no positive integer has digit sum 0. The table
/// stops growing at the first threshold that adds nothing; digit sums of
/// `[1, n]` form a contiguous run starting at 1, so every later threshold
/// would add nothing too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativeTable {
    bound: u64,
    totals: Vec<u64>,
}

impl CumulativeTable {
    /// Build the table for `bound`.
    pub fn build(ctx: &mut CountingContext, bound: u64) -> Self {
        let mut totals = Vec::with_capacity(MAX_DIGIT_SUM as usize + 2);
        totals.push(0u64);
        loop {
            let sum = totals.len() as u32;
            let previous = totals[totals.len() - 1];
            let next = previous + ctx.count_exact(sum, bound);
            totals.push(next);
            if next == previous {
                break;
            }
        }
        debug!(bound, thresholds = totals.len(), "built cumulative table");
        Self { bound, totals }
    }

    pub fn bound(&self) -> u64 {
        self.bound
    }

    /// Count of integers in `[1, n]` with digit sum at most `sum`.
    ///
    /// Thresholds past the end of the table saturate at the last entry.
    pub fn at_most(&self, sum: u32) -> u64 {
        let last = self.totals.len() - 1;
        self.totals[(sum as usize).min(last)]
    }

    /// Index of the final entry, the first threshold that added nothing.
    pub fn stop(&self) -> u32 {
        (self.totals.len() - 1) as u32
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[u64] {
        &self.totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bound() {
        let mut ctx = CountingContext::new();
        let table = CumulativeTable::build(&mut ctx, 0);
        assert_eq!(table.as_slice(), &[0, 0]);
        assert_eq!(table.stop(), 1);
    }

    #[test]
    fn test_single_digits() {
        let mut ctx = CountingContext::new();
        let table = CumulativeTable::build(&mut ctx, 9);
        assert_eq!(table.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 9]);
        assert_eq!(table.stop(), 10);
        assert_eq!(table.at_most(50), 9);
    }

    #[test]
    fn test_two_digits() {
        let mut ctx = CountingContext::new();
        // 1..=20: digit sum 1 -> {1, 10}, 2 -> {2, 11, 20}, s -> {s, 9+s} for s in 3..=9,
        // 10 -> {19}.
        let table = CumulativeTable::build(&mut ctx, 20);
        assert_eq!(
            table.as_slice(),
            &[0, 2, 5, 7, 9, 11, 13, 15, 17, 19, 20, 20]
        );
    }

    #[test]
    fn test_last_entry_is_bound() {
        let mut ctx = CountingContext::new();
        for bound in [1, 10, 99, 1000, 123_456_789] {
            let table = CumulativeTable::build(&mut ctx, bound);
            assert_eq!(table.at_most(table.stop()), bound);
            assert_eq!(table.bound(), bound);
        }
    }
}
