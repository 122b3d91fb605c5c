// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Range counter.
//!
//! `count_exact(s, m)` counts integers in `[1, m]` with digit sum exactly `s`
//! by the usual digit-DP prefix decomposition: every integer below `m`
//! agrees with `m` above some position, has a smaller digit at that
//! position, and is free below it. Each such family is one block.

use crate::context::CountingContext;
use crate::statistics::Counters;

impl CountingContext {
    /// Number of integers in `[1, bound]` whose digit sum is `sum`.
    ///
    /// Zero is not in the range, so `count_exact(0, m)` is 0 for every `m`.
    pub fn count_exact(&mut self, sum: u32, bound: u64) -> u64 {
        if sum == 0 {
            return 0;
        }
        if let Some(count) = self.memo.ranges.get(&(sum, bound)) {
            self.statistics.increment(Counters::RangeHits);
            return count;
        }
        self.statistics.increment(Counters::RangeMisses);

        let digits = self.digits(bound);
        // Sum of the digits strictly above the current position.
        let mut above = digits.sum();
        let mut count = u64::from(above == sum);
        for (position, digit) in digits.iter().enumerate() {
            above -= digit;
            let Some(rest) = sum.checked_sub(above) else {
                continue;
            };
            count += (0..digit)
                .map(|lead| self.count_block(rest, lead, position as u32))
                .sum::<u64>();
        }

        self.memo.ranges.insert((sum, bound), count);
        count
    }
}
