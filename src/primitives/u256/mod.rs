//! 256-bit unsigned integer primitive
//!
//! This module defines the `U256` type and everything built on it:
//! wrapping arithmetic, the long division, operators and conversions.

mod conv;
mod core;
mod div;
mod ops;

/// Fixed-size 256-bit unsigned integer.
pub use self::core::U256;
pub use self::div::div_256_by_128;
