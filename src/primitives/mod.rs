//! Primitive types
//!
//! This module defines the fixed-width unsigned integers of the crate and
//! the limb-level routines they are assembled from.
//!
//! Two disciplines are offered for each width:
//! - `U128`, `U256`: wrapping arithmetic modulo 2^width
//! - `SafeU128`, `SafeU256`: checked arithmetic that fails instead of
//!   wrapping
//!
//! Both are simple, fixed-size value types with well-defined semantics. They
//! do not attempt to replicate a full-featured big-integer library.
//!
//! The long-division building blocks are exported for callers that need a
//! narrowing division directly:
//! - [`div_128_by_64`]: 128-bit dividend, 64-bit divisor and quotient
//! - [`div_256_by_128`]: 256-bit dividend, 128-bit divisor and quotient

mod fmt;
pub mod limb;
pub mod safe;
mod source;
mod u128;
mod u256;

pub use limb::{div_128_by_64, shl_limb, shr_limb};
pub use safe::{SafeU128, SafeU256};
pub use source::{Endian, Source};

/// Fixed-size unsigned integer primitives.
pub use self::u128::U128;
pub use self::u256::{U256, div_256_by_128};
