//! Arithmetic and bitwise operators for `U128`
//!
//! Every operator delegates to a named method on [`U128`]. Arithmetic wraps
//! modulo 2¹²⁸; division and remainder panic on a zero divisor, like the
//! native integer types.

use crate::primitives::u128::U128;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

impl BitAnd for U128 {
    type Output = U128;

    fn bitand(self, rhs: U128) -> Self::Output {
        U128::new(self.lo & rhs.lo, self.hi & rhs.hi)
    }
}

impl BitOr for U128 {
    type Output = U128;

    fn bitor(self, rhs: U128) -> Self::Output {
        U128::new(self.lo | rhs.lo, self.hi | rhs.hi)
    }
}

impl BitXor for U128 {
    type Output = U128;

    fn bitxor(self, rhs: U128) -> Self::Output {
        U128::new(self.lo ^ rhs.lo, self.hi ^ rhs.hi)
    }
}

impl Not for U128 {
    type Output = U128;

    fn not(self) -> Self::Output {
        U128::new(!self.lo, !self.hi)
    }
}

/// Two's complement negation.
impl Neg for U128 {
    type Output = U128;

    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

/// Logical left shift. See [`U128::shl_by`].
impl Shl<i32> for U128 {
    type Output = U128;

    fn shl(self, rhs: i32) -> Self::Output {
        self.shl_by(rhs)
    }
}

/// Logical right shift. See [`U128::shr_by`].
impl Shr<i32> for U128 {
    type Output = U128;

    fn shr(self, rhs: i32) -> Self::Output {
        self.shr_by(rhs)
    }
}

/// Addition modulo 2¹²⁸.
impl Add for U128 {
    type Output = U128;

    fn add(self, rhs: U128) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

/// Subtraction modulo 2¹²⁸.
impl Sub for U128 {
    type Output = U128;

    fn sub(self, rhs: U128) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

/// Multiplication modulo 2¹²⁸.
impl Mul for U128 {
    type Output = U128;

    fn mul(self, rhs: U128) -> Self::Output {
        self.wrapping_mul(rhs)
    }
}

impl Div for U128 {
    type Output = U128;

    fn div(self, rhs: U128) -> Self::Output {
        match self.quo_rem(rhs) {
            Ok((quotient, _)) => quotient,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Rem for U128 {
    type Output = U128;

    fn rem(self, rhs: U128) -> Self::Output {
        match self.quo_rem(rhs) {
            Ok((_, remainder)) => remainder,
            Err(err) => panic!("{err}"),
        }
    }
}

macro_rules! assign_ops {
    ($($trait:ident $method:ident => $op:tt, $rhs:ty;)*) => {
        $(
            impl $trait<$rhs> for U128 {
                fn $method(&mut self, rhs: $rhs) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}

assign_ops! {
    AddAssign add_assign => +, U128;
    SubAssign sub_assign => -, U128;
    MulAssign mul_assign => *, U128;
    DivAssign div_assign => /, U128;
    RemAssign rem_assign => %, U128;
    BitAndAssign bitand_assign => &, U128;
    BitOrAssign bitor_assign => |, U128;
    BitXorAssign bitxor_assign => ^, U128;
    ShlAssign shl_assign => <<, i32;
    ShrAssign shr_assign => >>, i32;
}
