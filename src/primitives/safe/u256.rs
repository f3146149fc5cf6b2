//! Overflow-checked 256-bit integer.

use crate::error::{UintError, UintResult};
use crate::primitives::{SafeU128, U128, U256};

safe_uint!(SafeU256, U256, "256");

impl SafeU256 {
    /// The low 128 bits; the upper half is discarded.
    pub const fn to_u128(&self) -> U128 {
        self.0.to_u128()
    }

    pub const fn to_u256(&self) -> U256 {
        self.0
    }

    /// Narrows to a checked 128-bit value.
    ///
    /// # Errors
    ///
    /// Returns [`UintError::Truncation`] if any of the upper 128 bits is set.
    pub fn try_narrow(self) -> UintResult<SafeU128> {
        U128::try_from(self.0).map(SafeU128)
    }
}

impl From<SafeU128> for SafeU256 {
    fn from(value: SafeU128) -> Self {
        value.widen()
    }
}

impl TryFrom<SafeU256> for SafeU128 {
    type Error = UintError;

    fn try_from(value: SafeU256) -> Result<Self, Self::Error> {
        value.try_narrow()
    }
}
