// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Brute-force helpers shared across integration tests.

#![allow(dead_code)]

/// Digit sum by repeated division.
pub fn slow_digit_sum(mut n: u64) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += (n % 10) as u32;
        n /= 10;
    }
    sum
}

/// Histogram of digit sums over `[1, bound]`, indexed by digit sum.
pub fn digit_sum_histogram(bound: u64) -> Vec<u64> {
    let mut histogram = vec![0u64; 200];
    for n in 1..=bound {
        histogram[slow_digit_sum(n) as usize] += 1;
    }
    histogram
}

/// Fixed-point counts for bounds 1..=40, pinned from a reference run.
pub const SMALL_BOUND_COUNTS: [u64; 40] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 1, 1, 1, 1, 1, 1, 1, 2, 3, 2, 2, 2, 1, 1, 1, 1, 1, 2, 3, 3, 1, 2,
    1, 1, 1, 1, 1, 2, 3, 3,
];

/// (bound, fixed points) pairs pinned from a reference run.
pub const LARGE_BOUND_COUNTS: &[(u64, u64)] = &[
    (55, 1),
    (99, 3),
    (100, 3),
    (101, 3),
    (123, 1),
    (500, 4),
    (999, 5),
    (1_000, 3),
    (1_001, 7),
    (2_024, 3),
    (9_999, 5),
    (12_345, 2),
    (100_000, 2),
    (314_159, 3),
    (1_000_000, 5),
    (10_000_000, 3),
    (987_654_321, 4),
    (1_000_000_000, 3),
    (4_294_967_296, 3),
    (1_000_000_000_000, 1),
    (1_000_000_000_000_000, 2),
    (1_000_000_000_000_000_000, 5),
    (4_611_686_018_427_387_904, 2),
    (18_446_744_073_709_551_614, 1),
];
