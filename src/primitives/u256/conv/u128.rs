//! Conversions between `U256` and 128-bit integer representations
//!
//! These conversions support the division path, where a 256-bit value is
//! handled as two 128-bit digits, and interoperability with `U128` and the
//! native `u128`.

use crate::error::UintError;
use crate::primitives::{U128, U256};

/// Zero extends a `U128` to 256 bits.
impl From<U128> for U256 {
    fn from(value: U128) -> Self {
        U256::from_halves(value, U128::ZERO)
    }
}

/// Converts two 128-bit words into a `U256`.
///
/// The input array must be ordered as `[high, low]`, corresponding to the
/// most significant and least significant halves of the value.
impl From<[u128; 2]> for U256 {
    fn from(value: [u128; 2]) -> Self {
        U256::from_halves(U128::from(value[1]), U128::from(value[0]))
    }
}

/// Converts a `U256` into two 128-bit words ordered as `[high, low]`.
impl From<U256> for [u128; 2] {
    fn from(value: U256) -> Self {
        [value.high_half().into(), value.low_half().into()]
    }
}

/// Succeeds only if the upper 128 bits are zero.
impl TryFrom<U256> for U128 {
    type Error = UintError;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if !value.high_half().is_zero() {
            return Err(UintError::Truncation);
        }

        Ok(value.low_half())
    }
}

/// Succeeds only if the upper 128 bits are zero.
impl TryFrom<U256> for u128 {
    type Error = UintError;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        U128::try_from(value).map(u128::from)
    }
}

impl U256 {
    /// The low 128 bits; the upper half is discarded.
    pub const fn to_u128(&self) -> U128 {
        self.low_half()
    }

    /// The low 127 bits, with the sign taken from bit 255.
    pub fn to_i128(&self) -> i128 {
        let low = U128::new(
            self.lo1,
            (self.lo2 & 0x7FFF_FFFF_FFFF_FFFF) | (self.hi2 & 0x8000_0000_0000_0000),
        );

        u128::from(low) as i128
    }

    pub const fn to_u256(&self) -> U256 {
        *self
    }
}
