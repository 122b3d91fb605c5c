// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are stored in the context and incremented by the counting and
//! search code. They never influence results.

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};
use tracing::info;

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    BlockHits,
    BlockMisses,
    RangeHits,
    RangeMisses,
    DigitHits,
    DigitMisses,
    DigitSumHits,
    DigitSumMisses,
    BisectionSteps,
    FixedPoints,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    #[inline]
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    #[inline]
    pub(crate) fn increment_by(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Emit every counter as one `info` event.
    pub fn log_summary(&self) {
        for counter in Counters::iter() {
            let name: &'static str = counter.into();
            info!(counter = name, value = self.get(counter), "statistics");
        }
    }
}
