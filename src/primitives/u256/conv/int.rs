//! Conversions between `U256` and native integers
//!
//! Widening is infallible. Signed values are sign extended, so `-1` maps to
//! [`U256::MAX`]. Narrowing either truncates through a named method or
//! fails with [`UintError::Truncation`] through `TryFrom`.

use crate::error::UintError;
use crate::primitives::U256;

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for U256 {
                fn from(value: $t) -> Self {
                    U256::new(value as u64, 0, 0, 0)
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for U256 {
                fn from(value: $t) -> Self {
                    let value = value as i64;
                    let fill = (value >> 63) as u64;
                    U256::new(value as u64, fill, fill, fill)
                }
            }
        )*
    };
}

from_unsigned!(bool, u8, u16, u32, u64, usize);
from_signed!(i8, i16, i32, i64, isize);

impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        U256::new(value as u64, (value >> 64) as u64, 0, 0)
    }
}

impl From<i128> for U256 {
    fn from(value: i128) -> Self {
        let fill = (value >> 127) as u64;
        U256::new(value as u64, (value >> 64) as u64, fill, fill)
    }
}

macro_rules! try_into_narrow {
    ($($t:ty),*) => {
        $(
            /// Fails if any bit above the target width is set.
            impl TryFrom<U256> for $t {
                type Error = UintError;

                fn try_from(value: U256) -> Result<Self, Self::Error> {
                    if (value.lo2 | value.hi1 | value.hi2) != 0 || value.lo1 > <$t>::MAX as u64 {
                        return Err(UintError::Truncation);
                    }

                    Ok(value.lo1 as $t)
                }
            }
        )*
    };
}

try_into_narrow!(u8, u16, u32, u64, usize);

impl U256 {
    /// The low 64 bits.
    pub const fn to_u64(&self) -> u64 {
        self.lo1
    }

    /// The low 63 bits, with the sign taken from bit 255.
    pub const fn to_i64(&self) -> i64 {
        ((self.lo1 & 0x7FFF_FFFF_FFFF_FFFF) | (self.hi2 & 0x8000_0000_0000_0000)) as i64
    }

    pub const fn to_u32(&self) -> u32 {
        self.lo1 as u32
    }

    pub const fn to_i32(&self) -> i32 {
        self.to_i64() as i32
    }

    /// `true` for any non-zero value.
    pub const fn to_bool(&self) -> bool {
        !self.is_zero()
    }
}
