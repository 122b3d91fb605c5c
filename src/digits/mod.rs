// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Base-10 digit decomposition.
//!
//! A [`Digits`] value holds the digits of a non-negative integer,
//! least-significant first. Zero decomposes to the single digit `[0]`.
//!
//! # Examples
//!
//! ```
//! use digitsum_fixed_points::digits::{decompose, digit_sum};
//!
//! let digits = decompose(1205);
//! assert_eq!(digits.as_slice(), &[5, 0, 2, 1]);
//! assert_eq!(digits.sum(), 8);
//! assert_eq!(format!("{}", digits), "1205");
//! assert_eq!(digit_sum(0), 0);
//! ```

pub mod constants;
pub mod errors;

pub use errors::DigitError;

use constants::{BASE, MAX_DIGITS};
use std::fmt;

const RADIX: u64 = BASE as u64;

/// Digits of a non-negative integer, least-significant first.
///
/// Fixed-size and `Copy`, so it can be cached and handed out by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digits {
    digits: [u8; MAX_DIGITS],
    len: u8,
}

impl Digits {
    /// Decompose `n` into its digits.
    pub fn new(mut n: u64) -> Self {
        let mut digits = [0u8; MAX_DIGITS];
        let mut len = 0;
        loop {
            digits[len] = (n % RADIX) as u8;
            n /= RADIX;
            len += 1;
            if n == 0 {
                break;
            }
        }
        Self {
            digits,
            len: len as u8,
        }
    }

    /// Number of digits (at least 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false: zero still has one digit.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Digits as a slice, least-significant first.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.digits[..self.len()]
    }

    /// Iterate over the digits, least-significant first.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.as_slice().iter().map(|&d| u32::from(d))
    }

    /// Sum of the digits.
    pub fn sum(&self) -> u32 {
        self.iter().sum()
    }

    /// Reassemble the integer these digits represent.
    pub fn value(&self) -> u64 {
        self.as_slice()
            .iter()
            .rev()
            .fold(0, |acc, &d| acc * RADIX + u64::from(d))
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.as_slice().iter().rev() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl TryFrom<i128> for Digits {
    type Error = DigitError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(DigitError::Negative(value));
        }
        u64::try_from(value)
            .map(Digits::new)
            .map_err(|_| DigitError::OutOfRange {
                value: value.to_string(),
                max: u64::MAX,
            })
    }
}

impl TryFrom<i64> for Digits {
    type Error = DigitError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Digits::try_from(i128::from(value))
    }
}

/// Digits of `n`, least-significant first.
pub fn decompose(n: u64) -> Digits {
    Digits::new(n)
}

/// Sum of the digits of `n`.
pub fn digit_sum(n: u64) -> u32 {
    Digits::new(n).sum()
}

/// Parse a bound from text such as a line read from standard input.
///
/// Surrounding whitespace is ignored. Negative, fractional and
/// non-numeric text is rejected.
pub fn parse_bound(text: &str) -> Result<u64, DigitError> {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<u64>() {
        return Ok(value);
    }
    match trimmed.parse::<i128>() {
        Ok(value) if value < 0 => Err(DigitError::Negative(value)),
        Ok(_) => Err(DigitError::OutOfRange {
            value: trimmed.to_string(),
            max: u64::MAX,
        }),
        Err(_) => Err(DigitError::NotIntegral(trimmed.to_string())),
    }
}
