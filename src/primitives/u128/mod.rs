//! 128-bit unsigned integer primitive
//!
//! This module defines the `U128` type, a two-limb unsigned integer with
//! wrapping arithmetic. It is both a public value type and the digit type
//! of the 256-bit long division.

mod conv;
mod core;
mod ops;

/// Fixed-size 128-bit unsigned integer.
pub use self::core::U128;
