// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-point search.
//!
//! For a bound `n`, a threshold `s` yields a fixed point when some `q` with
//! digit sum `s` equals the number of integers in `[1, n]` with digit sum
//! at most `s`.
//!
//! # Algorithm
//!
//! 1. Build the [`CumulativeTable`] for `n`.
//! 2. Count threshold 1 unconditionally.
//! 3. For each later threshold `s`, search `q` in
//!    `(table[s-1], table[s]]` for a zero of the excess
//!    `f(q) = q - count_exact(s, q) - table[s-1]`. Raising `q` by one raises
//!    `count_exact(s, q)` by at most one, so `f` is non-decreasing and the
//!    zero can be found by bisection.
//!
//! The excess is compared against zero as an [`Ordering`] rather than
//! computed as a signed value, so every quantity stays in `u64`.

pub mod table;

pub use table::CumulativeTable;

use crate::context::CountingContext;
use crate::digits::constants::MAX_BOUND;
use crate::digits::DigitError;
use crate::statistics::Counters;
use std::cmp::Ordering;
use tracing::{debug, trace};

impl CountingContext {
    /// Number of rank fixed points in `[1, bound]`.
    ///
    /// Threshold 1 always counts, so any `bound >= 1` yields at least 1.
    ///
    /// `bound == 0` yields 0 because `[1, 0]` is empty. Counting threshold 1
    /// unconditionally would report 1 here; returning 0 is intentional, do
    /// not fold this case into the general path.
    ///
    /// # Errors
    ///
    /// [`DigitError::OutOfRange`] if `bound > MAX_BOUND`.
    pub fn count_fixed_points(&mut self, bound: u64) -> Result<u64, DigitError> {
        if bound > MAX_BOUND {
            return Err(DigitError::OutOfRange {
                value: bound.to_string(),
                max: MAX_BOUND,
            });
        }
        if bound == 0 {
            return Ok(0);
        }

        let table = CumulativeTable::build(self, bound);
        let mut fixed_points = 1;
        for sum in 2..table.stop() {
            if self.threshold_has_fixed_point(sum, &table) {
                debug!(bound = table.bound(), sum, q_max = table.at_most(sum), "fixed point");
                fixed_points += 1;
            }
        }
        self.statistics.increment_by(Counters::FixedPoints, fixed_points);
        debug!(bound = table.bound(), thresholds = table.stop(), fixed_points, "search complete");
        Ok(fixed_points)
    }

    /// Sign of `f(q)` for threshold `sum`, where `below = table[sum - 1]`.
    fn excess(&mut self, sum: u32, q: u64, below: u64) -> Ordering {
        // count_exact(sum, q) counts a subset of [1, q].
        (q - self.count_exact(sum, q)).cmp(&below)
    }

    fn threshold_has_fixed_point(&mut self, sum: u32, table: &CumulativeTable) -> bool {
        let below = table.at_most(sum - 1);
        let mut hi = table.at_most(sum);

        match self.excess(sum, hi, below) {
            Ordering::Equal if self.digit_sum(hi) == sum => return true,
            Ordering::Less | Ordering::Equal => return false,
            Ordering::Greater => {}
        }

        let mut lo = below + 1;
        if self.excess(sum, lo, below) == Ordering::Equal
            && (self.digit_sum(lo) == sum || self.digit_sum(lo + 1) == sum)
        {
            return true;
        }

        while lo + 1 < hi {
            let mid = lo + (hi - lo) / 2;
            self.statistics.increment(Counters::BisectionSteps);
            trace!(sum, lo, mid, hi, "bisect");
            match self.excess(sum, mid, below) {
                Ordering::Less => lo = mid,
                Ordering::Greater => hi = mid,
                Ordering::Equal => {
                    return self.digit_sum(mid) == sum
                        || (self.digit_sum(mid + 1) == sum && mid < hi);
                }
            }
        }
        false
    }
}

/// Count rank fixed points in `[1, bound]` with a fresh context.
///
/// ```
/// assert_eq!(digitsum_fixed_points::count_fixed_points(100), Ok(3));
/// ```
pub fn count_fixed_points(bound: u64) -> Result<u64, DigitError> {
    CountingContext::new().count_fixed_points(bound)
}
