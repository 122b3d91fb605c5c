// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Block counter.
//!
//! `count_block(s, k, p)` is the number of integers in `[k·10^p, (k+1)·10^p)`
//! whose digit sum is `s`: the number of `p`-digit strings (leading zeros
//! allowed) summing to `s - k`.
//!
//! # Algorithm
//!
//! After the closed forms, three reductions apply in order:
//!
//! 1. Reflection: `d ↦ 9 - d` maps strings summing to `t` onto strings
//!    summing to `9p - t`, so a key above the middle of the distribution is
//!    replaced by its mirror `2k + 9p - s`.
//! 2. Folding: the leading digit only offsets the target, so `(s, k, p)`
//!    becomes `(s - k, 0, p)`.
//! 3. Expansion: condition on the first free digit and recurse on `p - 1`.
//!
//! Reflection is applied only when it strictly lowers `s`, so a key is
//! never reflected twice.

use crate::context::CountingContext;
use crate::digits::constants::{BASE, MAX_DIGIT};
use crate::memo::BlockKey;
use crate::statistics::Counters;

/// Counts that need no table lookup.
///
/// Returns `None` when the general recursion is required.
pub fn closed_form(sum: u32, lead: u32, positions: u32) -> Option<u64> {
    if sum < lead || sum - lead > MAX_DIGIT * positions {
        return Some(0);
    }
    if positions == 0 {
        return Some(1);
    }
    closed_form_short(sum - lead, positions)
}

/// One or two free digits: flat and triangular distributions.
#[cfg(feature = "closed_forms")]
fn closed_form_short(target: u32, positions: u32) -> Option<u64> {
    match positions {
        1 => Some(1),
        2 => Some(u64::from(BASE - BASE.abs_diff(target + 1))),
        _ => None,
    }
}

#[cfg(not(feature = "closed_forms"))]
fn closed_form_short(_target: u32, _positions: u32) -> Option<u64> {
    None
}

impl CountingContext {
    /// Number of integers in `[lead·10^positions, (lead+1)·10^positions)`
    /// with digit sum `sum`.
    ///
    /// `lead` must be a single digit. Counts are exact while
    /// `positions < MAX_DIGITS`; wider blocks do not fit in `u64`.
    pub fn count_block(&mut self, sum: u32, lead: u32, positions: u32) -> u64 {
        debug_assert!(lead < BASE, "leading digit out of range: {}", lead);

        if let Some(count) = closed_form(sum, lead, positions) {
            return count;
        }

        let key = BlockKey::new(sum, lead, positions);
        if let Some(count) = self.memo.blocks.get(key) {
            self.statistics.increment(Counters::BlockHits);
            return count;
        }
        self.statistics.increment(Counters::BlockMisses);

        // closed_form guarantees sum <= lead + 9p, so the mirror is >= lead.
        let mirror = 2 * lead + MAX_DIGIT * positions - sum;
        let count = if mirror < sum {
            self.count_block(mirror, lead, positions)
        } else if lead != 0 {
            self.count_block(sum - lead, 0, positions)
        } else {
            (0..BASE)
                .filter_map(|digit| sum.checked_sub(digit))
                .map(|rest| self.count_block(rest, 0, positions - 1))
                .sum::<u64>()
        };

        self.memo.blocks.insert(key, count);
        count
    }
}
