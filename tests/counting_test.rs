// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Block and range counters checked against brute force.

mod common;

use common::{digit_sum_histogram, slow_digit_sum};
use digitsum_fixed_points::digits::constants::{power, BASE, MAX_DIGIT};
use digitsum_fixed_points::{decompose, CountingContext};

#[test]
fn test_decompose_reconstructs() {
    for n in (0..=10_000u64).chain([u32::MAX as u64, 1 << 40, u64::MAX - 1, u64::MAX]) {
        let digits = decompose(n);
        let text: String = digits
            .as_slice()
            .iter()
            .rev()
            .map(|d| char::from(b'0' + d))
            .collect();
        assert_eq!(text, n.to_string());
        assert_eq!(digits.sum(), slow_digit_sum(n));
    }
}

#[test]
fn test_block_symmetry() {
    let mut ctx = CountingContext::new();
    for positions in 0..=6 {
        for lead in 0..BASE {
            for sum in lead..=(lead + MAX_DIGIT * positions) {
                let mirror = 2 * lead + MAX_DIGIT * positions - sum;
                assert_eq!(
                    ctx.count_block(sum, lead, positions),
                    ctx.count_block(mirror, lead, positions)
                );
            }
        }
    }
}

#[test]
fn test_block_partitions_power_of_ten() {
    let mut ctx = CountingContext::new();
    for positions in 0..=19 {
        let total: u64 = (0..=MAX_DIGIT * positions)
            .map(|sum| ctx.count_block(sum, 0, positions))
            .sum();
        assert_eq!(total, power(positions), "p = {}", positions);
    }
}

#[test]
fn test_block_lead_offsets_target() {
    let mut ctx = CountingContext::new();
    for positions in 1..=8 {
        for lead in 1..BASE {
            for sum in lead..=(lead + MAX_DIGIT * positions) {
                assert_eq!(
                    ctx.count_block(sum, lead, positions),
                    ctx.count_block(sum - lead, 0, positions)
                );
            }
        }
    }
}

#[test]
fn test_range_matches_histogram() {
    let mut ctx = CountingContext::new();
    for bound in [1u64, 9, 10, 11, 19, 20, 99, 100, 101, 555, 999, 1_000, 20_000, 54_321] {
        let histogram = digit_sum_histogram(bound);
        for (sum, &expected) in histogram.iter().enumerate() {
            assert_eq!(
                ctx.count_exact(sum as u32, bound),
                expected,
                "count_exact({}, {})",
                sum,
                bound
            );
        }
    }
}

#[test]
fn test_range_partitions_bound() {
    let mut ctx = CountingContext::new();
    for bound in [7u64, 1_234, 99_999, 10_000_000, 123_456_789_012, u64::MAX] {
        let width = decompose(bound).len() as u32;
        let total: u64 = (0..=MAX_DIGIT * width)
            .map(|sum| ctx.count_exact(sum, bound))
            .sum();
        assert_eq!(total, bound);
    }
}
