//! Truncating construction of `U128` from floating point values.

use crate::error::UintResult;
use crate::primitives::U128;
use crate::primitives::source;

impl U128 {
    /// Truncates toward zero, reducing the magnitude modulo 2¹²⁸.
    ///
    /// Negative values become the two's complement of their truncated
    /// magnitude, so `-1.5` maps to `U128::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`UintError::UnsupportedSource`](crate::UintError::UnsupportedSource)
    /// for NaN or infinite input.
    pub fn from_f64(value: f64) -> UintResult<Self> {
        source::float_to_limbs(value).map(Self::from_limbs)
    }

    /// Same as [`U128::from_f64`]; every `f32` widens to `f64` exactly.
    pub fn from_f32(value: f32) -> UintResult<Self> {
        Self::from_f64(value as f64)
    }
}
