//! Overflow-checked 128-bit integer.

use crate::primitives::{SafeU256, U128, U256};

safe_uint!(SafeU128, U128, "128");

impl SafeU128 {
    /// The value as a native `u128`.
    pub const fn to_u128(&self) -> u128 {
        self.0.to_u128()
    }

    /// Zero extends to 256 bits.
    pub const fn to_u256(&self) -> U256 {
        self.0.to_u256()
    }

    /// Widening never overflows, so the result stays checked.
    pub const fn widen(self) -> SafeU256 {
        SafeU256(self.0.to_u256())
    }
}

impl From<SafeU128> for u128 {
    fn from(value: SafeU128) -> Self {
        value.0.into()
    }
}
