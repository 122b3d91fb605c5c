// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Numeric constants for base-10 digit arithmetic.
//!
//! Everything is sized for `u64` bounds: the widest value has
//! [`MAX_DIGITS`] digits, so every memo table derived from these constants
//! has a fixed, small size.

/// Radix of the digit decomposition.
pub const BASE: u32 = 10;

/// Largest single digit.
pub const MAX_DIGIT: u32 = BASE - 1;

/// Number of digits in `u64::MAX`.
pub const MAX_DIGITS: usize = count_digits(u64::MAX);

/// Largest digit sum any decomposition can reach (all nines).
pub const MAX_DIGIT_SUM: u32 = MAX_DIGIT * MAX_DIGITS as u32;

/// Largest bound accepted by the fixed-point search.
///
/// The search inspects `digit_sum(q + 1)` for candidates `q <= n`, so the
/// bound leaves room for one increment.
pub const MAX_BOUND: u64 = u64::MAX - 1;

/// Count decimal digits at compile time (0 has one digit).
const fn count_digits(mut n: u64) -> usize {
    let mut digits = 1;
    while n >= BASE as u64 {
        n /= BASE as u64;
        digits += 1;
    }
    digits
}

/// `BASE^exp` at compile time.
///
/// Overflows for `exp >= MAX_DIGITS`.
pub const fn power(exp: u32) -> u64 {
    let mut result = 1u64;
    let mut i = 0;
    while i < exp {
        result *= BASE as u64;
        i += 1;
    }
    result
}
