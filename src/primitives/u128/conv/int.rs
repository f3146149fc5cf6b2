//! Conversions between `U128` and native integers.

use crate::error::UintError;
use crate::primitives::{U128, U256};

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for U128 {
                fn from(value: $t) -> Self {
                    U128::new(value as u64, 0)
                }
            }
        )*
    };
}

/// Negative values are sign extended across the high limb.
macro_rules! from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for U128 {
                fn from(value: $t) -> Self {
                    let value = value as i64;
                    U128::new(value as u64, (value >> 63) as u64)
                }
            }
        )*
    };
}

from_unsigned!(bool, u8, u16, u32, u64, usize);
from_signed!(i8, i16, i32, i64, isize);

impl From<u128> for U128 {
    fn from(value: u128) -> Self {
        U128::new(value as u64, (value >> 64) as u64)
    }
}

impl From<i128> for U128 {
    fn from(value: i128) -> Self {
        U128::from(value as u128)
    }
}

impl From<U128> for u128 {
    fn from(value: U128) -> Self {
        (value.hi as u128) << 64 | value.lo as u128
    }
}

macro_rules! try_into_narrow {
    ($($t:ty),*) => {
        $(
            /// Fails if any bit above the target width is set.
            impl TryFrom<U128> for $t {
                type Error = UintError;

                fn try_from(value: U128) -> Result<Self, Self::Error> {
                    if value.hi != 0 || value.lo > <$t>::MAX as u64 {
                        return Err(UintError::Truncation);
                    }

                    Ok(value.lo as $t)
                }
            }
        )*
    };
}

try_into_narrow!(u8, u16, u32, u64, usize);

impl U128 {
    /// The low 64 bits.
    pub const fn to_u64(&self) -> u64 {
        self.lo
    }

    /// The low 63 bits, with the sign taken from bit 127.
    pub const fn to_i64(&self) -> i64 {
        ((self.lo & 0x7FFF_FFFF_FFFF_FFFF) | (self.hi & 0x8000_0000_0000_0000)) as i64
    }

    /// The low 32 bits.
    pub const fn to_u32(&self) -> u32 {
        self.lo as u32
    }

    /// `to_i64` truncated to 32 bits.
    pub const fn to_i32(&self) -> i32 {
        self.to_i64() as i32
    }

    /// `true` for any non-zero value.
    pub const fn to_bool(&self) -> bool {
        !self.is_zero()
    }

    /// The value as a native `u128`.
    pub const fn to_u128(&self) -> u128 {
        (self.hi as u128) << 64 | self.lo as u128
    }

    /// The bits reinterpreted as a native `i128`.
    pub const fn to_i128(&self) -> i128 {
        self.to_u128() as i128
    }

    /// Zero extends to 256 bits.
    pub const fn to_u256(&self) -> U256 {
        U256::new(self.lo, self.hi, 0, 0)
    }
}
