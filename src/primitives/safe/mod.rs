//! Overflow-checked integers
//!
//! [`SafeU128`] and [`SafeU256`] hold the same storage as their wrapping
//! counterparts but refuse to produce a wrapped result. Every `+`, `-` and
//! `*` either yields the mathematically exact value or fails:
//!
//! - named methods (`try_add`, `try_mul`, ...) return a
//!   [`UintError`](crate::UintError)
//! - operators panic with that error's message, like native integers do
//!   in debug builds
//!
//! Callers pick a discipline by type, not by flag:
//!
//! ```rust
//! use fixuint::primitives::{SafeU256, U256};
//!
//! assert_eq!(U256::MAX + U256::ONE, U256::ZERO);
//! assert!(SafeU256::MAX.try_add(SafeU256::ONE).is_err());
//! ```
//!
//! Bitwise operators, shifts, comparison and rendering behave exactly as on
//! the wrapping types.

macro_rules! safe_uint {
    (@from $name:ident, $inner:ident: $($t:ty),*) => {
        $(
            impl From<$t> for $name {
                fn from(value: $t) -> Self {
                    Self($inner::from(value))
                }
            }
        )*
    };

    (@checked $name:ident: $($trait:ident $method:ident => $checked:ident,)*) => {
        $(
            /// # Panics
            ///
            /// Panics with the error's message where the named method fails.
            impl ::std::ops::$trait for $name {
                type Output = $name;

                fn $method(self, rhs: $name) -> Self::Output {
                    match self.$checked(rhs) {
                        Ok(value) => value,
                        Err(err) => panic!("{err}"),
                    }
                }
            }
        )*
    };

    (@assign $name:ident: $($trait:ident $method:ident => $op:tt, $rhs:ty;)*) => {
        $(
            impl ::std::ops::$trait<$rhs> for $name {
                fn $method(&mut self, rhs: $rhs) {
                    *self = *self $op rhs;
                }
            }
        )*
    };

    ($name:ident, $inner:ident, $label:literal) => {
        #[doc = concat!("Overflow-checked ", $label, "-bit unsigned integer.")]
        ///
        /// A transparent newtype over the wrapping type; see the
        /// [module documentation](crate::primitives::safe) for the checking
        /// rules.
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub(crate) $inner);

        impl $name {
            pub const BITS: u32 = $inner::BITS;
            pub const ZERO: Self = Self($inner::ZERO);
            pub const ONE: Self = Self($inner::ONE);
            pub const MIN: Self = Self($inner::MIN);
            pub const MAX: Self = Self($inner::MAX);

            /// Builds a value from any supported [`Source`](crate::primitives::Source).
            ///
            /// # Errors
            ///
            /// Same as the wrapping type's `from_source`.
            pub fn from_source<'a>(source: impl Into<$crate::primitives::Source<'a>>) -> $crate::UintResult<Self> {
                $inner::from_source(source).map(Self)
            }

            /// Returns the value under wrapping semantics.
            pub const fn into_wrapping(self) -> $inner {
                self.0
            }

            pub const fn is_zero(&self) -> bool {
                self.0.is_zero()
            }

            pub fn leading_zeros(&self) -> u32 {
                self.0.leading_zeros()
            }

            pub fn trailing_zeros(&self) -> u32 {
                self.0.trailing_zeros()
            }

            pub fn count_ones(&self) -> u32 {
                self.0.count_ones()
            }

            /// Number of significant bits.
            pub fn bits(&self) -> u32 {
                self.0.bits()
            }

            /// Adds, failing if the carry leaves the top limb.
            ///
            /// # Errors
            ///
            /// Returns [`UintError::Overflow`](crate::UintError::Overflow) if the sum exceeds the maximum.
            pub fn try_add(self, rhs: Self) -> $crate::UintResult<Self> {
                let (sum, carry) = self.0.overflowing_add(rhs.0);
                if carry {
                    ::tracing::trace!(ty = stringify!($name), lhs = %self.0, rhs = %rhs.0, "add overflow");
                    return Err($crate::UintError::Overflow { op: "add" });
                }

                Ok(Self(sum))
            }

            /// Subtracts, failing if a borrow leaves the top limb.
            ///
            /// # Errors
            ///
            /// Returns [`UintError::Underflow`](crate::UintError::Underflow) if `rhs > self`.
            pub fn try_sub(self, rhs: Self) -> $crate::UintResult<Self> {
                let (difference, borrow) = self.0.overflowing_sub(rhs.0);
                if borrow {
                    ::tracing::trace!(ty = stringify!($name), lhs = %self.0, rhs = %rhs.0, "sub underflow");
                    return Err($crate::UintError::Underflow { op: "sub" });
                }

                Ok(Self(difference))
            }

            /// Multiplies, failing if the product needs more than
            #[doc = concat!($label, " bits.")]
            ///
            /// The leading zero counts of both operands bound the product's
            /// width. Only when they sum to exactly `BITS - 1` is the full
            /// product inspected.
            ///
            /// # Errors
            ///
            /// Returns [`UintError::Overflow`](crate::UintError::Overflow) if the product exceeds the
            /// maximum.
            pub fn try_mul(self, rhs: Self) -> $crate::UintResult<Self> {
                if self.0.is_zero() || rhs.0.is_zero() {
                    return Ok(Self::ZERO);
                }

                let zeros = self.0.leading_zeros() + rhs.0.leading_zeros();

                let overflow = if zeros >= Self::BITS {
                    false
                } else if zeros < Self::BITS - 1 {
                    true
                } else {
                    self.0.overflowing_mul(rhs.0).1
                };

                if overflow {
                    ::tracing::trace!(ty = stringify!($name), lhs = %self.0, rhs = %rhs.0, zeros, "mul overflow");
                    return Err($crate::UintError::Overflow { op: "mul" });
                }

                Ok(Self(self.0.wrapping_mul(rhs.0)))
            }

            /// Returns `(self / divisor, self % divisor)`.
            ///
            /// # Errors
            ///
            /// Returns [`UintError::DivisionByZero`](crate::UintError::DivisionByZero) if `divisor` is zero.
            pub fn try_quo_rem(self, divisor: Self) -> $crate::UintResult<(Self, Self)> {
                let (quotient, remainder) = self.0.quo_rem(divisor.0)?;
                Ok((Self(quotient), Self(remainder)))
            }

            /// # Errors
            ///
            /// Returns [`UintError::DivisionByZero`](crate::UintError::DivisionByZero) if `divisor` is zero.
            pub fn try_div(self, divisor: Self) -> $crate::UintResult<Self> {
                self.try_quo_rem(divisor).map(|(q, _)| q)
            }

            /// # Errors
            ///
            /// Returns [`UintError::DivisionByZero`](crate::UintError::DivisionByZero) if `divisor` is zero.
            pub fn try_rem(self, divisor: Self) -> $crate::UintResult<Self> {
                self.try_quo_rem(divisor).map(|(_, r)| r)
            }

            /// Returns `self + 1`.
            ///
            /// # Errors
            ///
            /// Returns [`UintError::Overflow`](crate::UintError::Overflow) at the maximum.
            pub fn try_inc(self) -> $crate::UintResult<Self> {
                if self == Self::MAX {
                    ::tracing::trace!(ty = stringify!($name), "increment overflow");
                    return Err($crate::UintError::Overflow { op: "increment" });
                }

                Ok(Self(self.0.inc()))
            }

            /// Returns `self - 1`.
            ///
            /// # Errors
            ///
            /// Returns [`UintError::Underflow`](crate::UintError::Underflow) at zero.
            pub fn try_dec(self) -> $crate::UintResult<Self> {
                if self == Self::ZERO {
                    ::tracing::trace!(ty = stringify!($name), "decrement underflow");
                    return Err($crate::UintError::Underflow { op: "decrement" });
                }

                Ok(Self(self.0.dec()))
            }

            /// Adds one in place. On failure the value is left untouched.
            ///
            /// # Errors
            ///
            /// Returns [`UintError::Overflow`](crate::UintError::Overflow) at the maximum.
            pub fn increment(&mut self) -> $crate::UintResult<&mut Self> {
                *self = self.try_inc()?;
                Ok(self)
            }

            /// Subtracts one in place. On failure the value is left untouched.
            ///
            /// # Errors
            ///
            /// Returns [`UintError::Underflow`](crate::UintError::Underflow) at zero.
            pub fn decrement(&mut self) -> $crate::UintResult<&mut Self> {
                *self = self.try_dec()?;
                Ok(self)
            }

            /// Adds one in place and returns the previous value.
            ///
            /// # Errors
            ///
            /// Returns [`UintError::Overflow`](crate::UintError::Overflow) at the maximum,
            /// leaving the value untouched.
            pub fn post_increment(&mut self) -> $crate::UintResult<Self> {
                let previous = *self;
                *self = previous.try_inc()?;
                Ok(previous)
            }

            /// Subtracts one in place and returns the previous value.
            ///
            /// # Errors
            ///
            /// Returns [`UintError::Underflow`](crate::UintError::Underflow) at zero,
            /// leaving the value untouched.
            pub fn post_decrement(&mut self) -> $crate::UintResult<Self> {
                let previous = *self;
                *self = previous.try_dec()?;
                Ok(previous)
            }

            pub fn set(&mut self, value: Self) -> &mut Self {
                *self = value;
                self
            }

            pub const fn to_u64(&self) -> u64 {
                self.0.to_u64()
            }

            pub const fn to_i64(&self) -> i64 {
                self.0.to_i64()
            }

            pub const fn to_u32(&self) -> u32 {
                self.0.to_u32()
            }

            pub const fn to_i32(&self) -> i32 {
                self.0.to_i32()
            }

            pub const fn to_bool(&self) -> bool {
                self.0.to_bool()
            }

            pub fn to_i128(&self) -> i128 {
                self.0.to_i128()
            }

            pub fn to_bytes(&self, endian: $crate::primitives::Endian) -> [u8; $inner::BYTES] {
                self.0.to_bytes(endian)
            }

            pub fn to_vec(&self, endian: $crate::primitives::Endian) -> Vec<u8> {
                self.0.to_vec(endian)
            }

            /// # Errors
            ///
            /// Returns [`UintError::UnsupportedRadix`](crate::UintError::UnsupportedRadix) unless `radix` is 10
            /// or 16.
            pub fn to_str_radix(&self, radix: u32) -> $crate::UintResult<String> {
                self.0.to_str_radix(radix)
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $inner {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl From<$name> for $crate::primitives::Source<'_> {
            fn from(value: $name) -> Self {
                $crate::primitives::Source::from(value.0)
            }
        }

        safe_uint!(@from $name, $inner: bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

        safe_uint!(@checked $name:
            Add add => try_add,
            Sub sub => try_sub,
            Mul mul => try_mul,
            Div div => try_div,
            Rem rem => try_rem,
        );

        safe_uint!(@assign $name:
            AddAssign add_assign => +, $name;
            SubAssign sub_assign => -, $name;
            MulAssign mul_assign => *, $name;
            DivAssign div_assign => /, $name;
            RemAssign rem_assign => %, $name;
            BitAndAssign bitand_assign => &, $name;
            BitOrAssign bitor_assign => |, $name;
            BitXorAssign bitxor_assign => ^, $name;
            ShlAssign shl_assign => <<, i32;
            ShrAssign shr_assign => >>, i32;
        );

        impl ::std::ops::BitAnd for $name {
            type Output = $name;

            fn bitand(self, rhs: $name) -> Self::Output {
                Self(self.0 & rhs.0)
            }
        }

        impl ::std::ops::BitOr for $name {
            type Output = $name;

            fn bitor(self, rhs: $name) -> Self::Output {
                Self(self.0 | rhs.0)
            }
        }

        impl ::std::ops::BitXor for $name {
            type Output = $name;

            fn bitxor(self, rhs: $name) -> Self::Output {
                Self(self.0 ^ rhs.0)
            }
        }

        impl ::std::ops::Not for $name {
            type Output = $name;

            fn not(self) -> Self::Output {
                Self(!self.0)
            }
        }

        impl ::std::ops::Shl<i32> for $name {
            type Output = $name;

            fn shl(self, rhs: i32) -> Self::Output {
                Self(self.0 << rhs)
            }
        }

        impl ::std::ops::Shr<i32> for $name {
            type Output = $name;

            fn shr(self, rhs: i32) -> Self::Output {
                Self(self.0 >> rhs)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::std::fmt::LowerHex for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::LowerHex::fmt(&self.0, f)
            }
        }

        impl ::std::fmt::UpperHex for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::UpperHex::fmt(&self.0, f)
            }
        }
    };
}

mod u128;
mod u256;

pub use self::u128::SafeU128;
pub use self::u256::SafeU256;
