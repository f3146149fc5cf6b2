//! Arithmetic and bitwise operators for `U256`
//!
//! Every operator delegates to a named method on [`U256`]. Arithmetic wraps
//! modulo 2²⁵⁶; division and remainder panic on a zero divisor, like the
//! native integer types.

use crate::primitives::U256;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

/// Limb-wise bitwise AND.
impl BitAnd for U256 {
    type Output = U256;

    fn bitand(self, rhs: U256) -> Self::Output {
        U256::new(self.lo1 & rhs.lo1, self.lo2 & rhs.lo2, self.hi1 & rhs.hi1, self.hi2 & rhs.hi2)
    }
}

impl BitOr for U256 {
    type Output = U256;

    fn bitor(self, rhs: U256) -> Self::Output {
        U256::new(self.lo1 | rhs.lo1, self.lo2 | rhs.lo2, self.hi1 | rhs.hi1, self.hi2 | rhs.hi2)
    }
}

impl BitXor for U256 {
    type Output = U256;

    fn bitxor(self, rhs: U256) -> Self::Output {
        U256::new(self.lo1 ^ rhs.lo1, self.lo2 ^ rhs.lo2, self.hi1 ^ rhs.hi1, self.hi2 ^ rhs.hi2)
    }
}

impl Not for U256 {
    type Output = U256;

    fn not(self) -> Self::Output {
        U256::new(!self.lo1, !self.lo2, !self.hi1, !self.hi2)
    }
}

/// Two's complement negation.
impl Neg for U256 {
    type Output = U256;

    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

/// Logical left shift. See [`U256::shl_by`].
impl Shl<i32> for U256 {
    type Output = U256;

    fn shl(self, rhs: i32) -> Self::Output {
        self.shl_by(rhs)
    }
}

/// Logical right shift. See [`U256::shr_by`].
impl Shr<i32> for U256 {
    type Output = U256;

    fn shr(self, rhs: i32) -> Self::Output {
        self.shr_by(rhs)
    }
}

/// Addition modulo 2²⁵⁶.
impl Add for U256 {
    type Output = U256;

    fn add(self, rhs: U256) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

/// Subtraction modulo 2²⁵⁶.
impl Sub for U256 {
    type Output = U256;

    fn sub(self, rhs: U256) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

/// Multiplication modulo 2²⁵⁶.
impl Mul for U256 {
    type Output = U256;

    fn mul(self, rhs: U256) -> Self::Output {
        self.wrapping_mul(rhs)
    }
}

/// Integer division (`/`) producing the quotient.
///
/// # Panics
///
/// Panics with `"division by zero"` if `rhs` is zero.
impl Div for U256 {
    type Output = U256;

    fn div(self, rhs: U256) -> Self::Output {
        match self.quo_rem(rhs) {
            Ok((quotient, _)) => quotient,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Remainder (`%`) of the integer division.
///
/// # Panics
///
/// Panics with `"division by zero"` if `rhs` is zero.
impl Rem for U256 {
    type Output = U256;

    fn rem(self, rhs: U256) -> Self::Output {
        match self.quo_rem(rhs) {
            Ok((_, remainder)) => remainder,
            Err(err) => panic!("{err}"),
        }
    }
}

macro_rules! assign_ops {
    ($($trait:ident $method:ident => $op:tt, $rhs:ty;)*) => {
        $(
            impl $trait<$rhs> for U256 {
                fn $method(&mut self, rhs: $rhs) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}

assign_ops! {
    AddAssign add_assign => +, U256;
    SubAssign sub_assign => -, U256;
    MulAssign mul_assign => *, U256;
    DivAssign div_assign => /, U256;
    RemAssign rem_assign => %, U256;
    BitAndAssign bitand_assign => &, U256;
    BitOrAssign bitor_assign => |, U256;
    BitXorAssign bitxor_assign => ^, U256;
    ShlAssign shl_assign => <<, i32;
    ShrAssign shr_assign => >>, i32;
}
