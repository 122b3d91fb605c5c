// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for digit decomposition and bound validation.

use thiserror::Error;

/// Invalid argument supplied where a non-negative integer was required.
///
/// The core only ever passes `u64` values around, so these surface at the
/// boundary: converting signed integers, parsing text, or asking for a
/// bound larger than the search supports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigitError {
    /// Value is below zero.
    #[error("expected a non-negative integer, got {0}")]
    Negative(i128),

    /// Text is not an integer (fractional, empty or not a number at all).
    #[error("expected an integer, got {0:?}")]
    NotIntegral(String),

    /// Value does not fit the supported range.
    #[error("{value} exceeds the largest supported bound {max}")]
    OutOfRange { value: String, max: u64 },
}
