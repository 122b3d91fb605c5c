// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Digit-sum counting.
//!
//! - `block`: [`CountingContext::count_block`], numbers with a given digit
//!   sum inside one block `[k·10^p, (k+1)·10^p)`
//! - `range`: [`CountingContext::count_exact`], numbers with a given digit
//!   sum inside `[1, m]`
//!
//! [`CountingContext::count_block`]: crate::context::CountingContext::count_block
//! [`CountingContext::count_exact`]: crate::context::CountingContext::count_exact

pub mod block;
pub mod range;

pub use block::closed_form;
