//! Truncating construction of `U256` from floating point values.

use crate::error::UintResult;
use crate::primitives::U256;
use crate::primitives::source;

impl U256 {
    /// Truncates toward zero, reducing the magnitude modulo 2²⁵⁶.
    ///
    /// Every finite `f64` below 2²⁵⁶ converts exactly after truncation.
    /// Negative values become the two's complement of their truncated
    /// magnitude.
    ///
    /// # Errors
    ///
    /// Returns [`UintError::UnsupportedSource`](crate::UintError::UnsupportedSource)
    /// for NaN or infinite input.
    pub fn from_f64(value: f64) -> UintResult<Self> {
        source::float_to_limbs(value).map(Self::from_limbs)
    }

    pub fn from_f32(value: f32) -> UintResult<Self> {
        Self::from_f64(value as f64)
    }
}
