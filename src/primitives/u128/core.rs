//! 128-bit unsigned integer primitive
//!
//! `U128` stores its value as two 64-bit limbs, `lo` (bits 0-63) and `hi`
//! (bits 64-127). Rust has a native `u128`, but the limb form is what the
//! 256-bit division is built from: every quotient digit estimate divides a
//! `U128` by a single limb.
//!
//! All arithmetic on `U128` wraps modulo 2¹²⁸. The checked discipline lives
//! in [`SafeU128`](crate::primitives::SafeU128).

use crate::error::{UintError, UintResult};
use crate::primitives::limb::{self, LIMB_BITS};
use crate::primitives::fmt as render;
use crate::primitives::source::Source;

use std::cmp::Ordering;
use std::fmt::{Display, Formatter, LowerHex, Result, UpperHex};
use tracing::trace;

/// Fixed-size 128-bit unsigned integer with wrapping arithmetic.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct U128 {
    /// Bits 0-63.
    pub lo: u64,
    /// Bits 64-127.
    pub hi: u64,
}

impl U128 {
    /// Width in bits.
    pub const BITS: u32 = 128;

    /// The value zero.
    pub const ZERO: Self = Self::new(0, 0);

    /// The value one.
    pub const ONE: Self = Self::new(1, 0);

    /// The smallest representable value (zero).
    pub const MIN: Self = Self::ZERO;

    /// The maximum representable value (2¹²⁸ − 1).
    pub const MAX: Self = Self::new(u64::MAX, u64::MAX);

    /// Builds a value from its low and high limbs.
    pub const fn new(lo: u64, hi: u64) -> Self {
        Self { lo, hi }
    }

    /// Builds a value from limbs ordered least significant first.
    pub const fn from_limbs(limbs: [u64; 2]) -> Self {
        Self::new(limbs[0], limbs[1])
    }

    /// Returns the limbs, least significant first.
    pub const fn limbs(&self) -> [u64; 2] {
        [self.lo, self.hi]
    }

    /// Builds a value from four 32-bit words, least significant first.
    pub const fn from_u32_words(words: [u32; 4]) -> Self {
        Self::new(
            words[0] as u64 | (words[1] as u64) << 32,
            words[2] as u64 | (words[3] as u64) << 32,
        )
    }

    /// Builds a value from any supported [`Source`].
    ///
    /// # Errors
    ///
    /// - [`UintError::InvalidLength`] for a byte buffer that is empty or not a
    ///   multiple of 16 bytes
    /// - [`UintError::UnsupportedSource`] for a non-finite float
    pub fn from_source<'a>(source: impl Into<Source<'a>>) -> UintResult<Self> {
        match source.into() {
            Source::Bool(value) => Ok(Self::from(value)),
            Source::Signed(value) => Ok(Self::from(value)),
            Source::Unsigned(value) => Ok(Self::from(value)),
            Source::F32(value) => Self::from_f32(value),
            Source::F64(value) => Self::from_f64(value),
            Source::U128(value) => Ok(value),
            Source::U256(value) => Ok(value.to_u128()),
            Source::Bytes(bytes, endian) => Self::from_slice(bytes, endian),
        }
    }

    pub const fn is_zero(&self) -> bool {
        (self.lo | self.hi) == 0
    }

    /// Number of leading zero bits, in `0..=128`.
    pub fn leading_zeros(&self) -> u32 {
        limb::leading_zeros(&self.limbs())
    }

    /// Number of trailing zero bits, in `0..=128`.
    pub fn trailing_zeros(&self) -> u32 {
        limb::trailing_zeros(&self.limbs())
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> u32 {
        limb::count_ones(&self.limbs())
    }

    /// Number of significant bits.
    pub fn bits(&self) -> u32 {
        Self::BITS - self.leading_zeros()
    }

    /// Logical left shift.
    ///
    /// Shifts of 128 or more yield zero; non-positive shifts return the value
    /// unchanged.
    pub fn shl_by(self, shift: i32) -> Self {
        if shift <= 0 {
            return self;
        }

        self.shl_sat(shift.unsigned_abs())
    }

    /// Logical right shift.
    ///
    /// Shifts of 128 or more yield zero; non-positive shifts return the value
    /// unchanged.
    pub fn shr_by(self, shift: i32) -> Self {
        if shift <= 0 {
            return self;
        }

        self.shr_sat(shift.unsigned_abs())
    }

    pub(crate) const fn shl_sat(self, shift: u32) -> Self {
        if shift >= Self::BITS {
            return Self::ZERO;
        }

        if shift >= LIMB_BITS {
            return Self::new(0, limb::shl_sat(self.lo, shift - LIMB_BITS));
        }

        Self::new(
            limb::shl_sat(self.lo, shift),
            limb::shl_sat(self.hi, shift) | limb::shr_sat(self.lo, LIMB_BITS - shift),
        )
    }

    pub(crate) const fn shr_sat(self, shift: u32) -> Self {
        if shift >= Self::BITS {
            return Self::ZERO;
        }

        if shift >= LIMB_BITS {
            return Self::new(limb::shr_sat(self.hi, shift - LIMB_BITS), 0);
        }

        Self::new(
            limb::shr_sat(self.lo, shift) | limb::shl_sat(self.hi, LIMB_BITS - shift),
            limb::shr_sat(self.hi, shift),
        )
    }

    /// Addition modulo 2¹²⁸, with the carry out of the top limb.
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let (out, carry) = limb::add_limbs(&self.limbs(), &rhs.limbs());
        (Self::from_limbs(out), carry)
    }

    /// Subtraction modulo 2¹²⁸, with the borrow out of the top limb.
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let (out, borrow) = limb::sub_limbs(&self.limbs(), &rhs.limbs());
        (Self::from_limbs(out), borrow)
    }

    /// Multiplication modulo 2¹²⁸, flagging whether any product bit was lost.
    pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        let (out, overflow) = limb::overflowing_mul_limbs(&self.limbs(), &rhs.limbs());
        (Self::from_limbs(out), overflow)
    }

    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }

    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    pub fn wrapping_mul(self, rhs: Self) -> Self {
        self.overflowing_mul(rhs).0
    }

    /// Two's complement negation.
    pub fn wrapping_neg(self) -> Self {
        (!self).inc()
    }

    /// Returns `(self / divisor, self % divisor)`.
    ///
    /// # Errors
    ///
    /// Returns [`UintError::DivisionByZero`] if `divisor` is zero.
    pub fn quo_rem(self, divisor: Self) -> UintResult<(Self, Self)> {
        if divisor.is_zero() {
            trace!(dividend = ?self, "U128 division by zero");
            return Err(UintError::DivisionByZero);
        }

        if self < divisor {
            return Ok((Self::ZERO, self));
        }

        if divisor.hi == 0 {
            let (quotient, remainder) = self.div_limb(divisor.lo);
            return Ok((quotient, Self::from(remainder)));
        }

        // The quotient fits a limb. Estimate it from the normalized top limb
        // of the divisor against the halved dividend, then fix it up.
        let shift = divisor.hi.leading_zeros();
        let top = divisor.shl_sat(shift).hi;
        let halved = self.shr_sat(1);

        let (estimate, _) = limb::div_wide(halved.hi, halved.lo, top);
        let mut estimate = limb::shr_sat(estimate, LIMB_BITS - 1 - shift);
        if estimate != 0 {
            estimate -= 1;
        }

        let mut quotient = Self::from(estimate);
        let mut remainder = self.wrapping_sub(divisor.wrapping_mul(quotient));

        if remainder >= divisor {
            quotient = quotient.inc();
            remainder = remainder.wrapping_sub(divisor);
        }

        Ok((quotient, remainder))
    }

    /// Divides by a single limb, returning a 128-bit quotient and the limb
    /// remainder.
    ///
    /// # Errors
    ///
    /// Returns [`UintError::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem_limb(self, divisor: u64) -> UintResult<(Self, u64)> {
        if divisor == 0 {
            trace!(dividend = ?self, "U128 by limb division by zero");
            return Err(UintError::DivisionByZero);
        }

        Ok(self.div_limb(divisor))
    }

    /// Requires `divisor != 0`.
    pub(crate) fn div_limb(self, divisor: u64) -> (Self, u64) {
        let (q_hi, rem) = (self.hi / divisor, self.hi % divisor);
        let (q_lo, rem) = limb::div_wide(rem, self.lo, divisor);

        (Self::new(q_lo, q_hi), rem)
    }

    /// Returns `self / divisor`, or `None` if `divisor` is zero.
    pub fn checked_div(self, divisor: Self) -> Option<Self> {
        self.quo_rem(divisor).ok().map(|(q, _)| q)
    }

    /// Returns `self % divisor`, or `None` if `divisor` is zero.
    pub fn checked_rem(self, divisor: Self) -> Option<Self> {
        self.quo_rem(divisor).ok().map(|(_, r)| r)
    }

    /// Returns `self + 1`, wrapping at the maximum.
    pub fn inc(mut self) -> Self {
        self.increment();
        self
    }

    /// Returns `self - 1`, wrapping at zero.
    pub fn dec(mut self) -> Self {
        self.decrement();
        self
    }

    /// Adds one in place, wrapping at the maximum.
    pub fn increment(&mut self) -> &mut Self {
        let mut limbs = self.limbs();
        limb::inc_limbs(&mut limbs);
        *self = Self::from_limbs(limbs);
        self
    }

    /// Subtracts one in place, wrapping at zero.
    pub fn decrement(&mut self) -> &mut Self {
        let mut limbs = self.limbs();
        limb::dec_limbs(&mut limbs);
        *self = Self::from_limbs(limbs);
        self
    }

    /// Adds one in place and returns the previous value.
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.increment();
        previous
    }

    /// Subtracts one in place and returns the previous value.
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.decrement();
        previous
    }

    /// Overwrites the value.
    pub fn set(&mut self, value: Self) -> &mut Self {
        *self = value;
        self
    }

    pub fn set_u64(&mut self, value: u64) -> &mut Self {
        self.set(Self::from(value))
    }

    pub fn set_i64(&mut self, value: i64) -> &mut Self {
        self.set(Self::from(value))
    }

    /// Renders the value in radix 10 or 16.
    ///
    /// # Errors
    ///
    /// Returns [`UintError::UnsupportedRadix`] for any other radix.
    pub fn to_str_radix(&self, radix: u32) -> UintResult<String> {
        match radix {
            10 => Ok(render::to_decimal(self.limbs())),
            16 => Ok(render::to_hex(self.limbs(), false)),
            _ => Err(UintError::UnsupportedRadix(radix)),
        }
    }
}

impl Ord for U128 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hi.cmp(&other.hi).then(self.lo.cmp(&other.lo))
    }
}

impl PartialOrd for U128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for U128 {
    /// Formats the value in decimal.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.pad_integral(true, "", &render::to_decimal(self.limbs()))
    }
}

impl LowerHex for U128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.pad_integral(true, "0x", &render::to_hex(self.limbs(), false))
    }
}

impl UpperHex for U128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.pad_integral(true, "0x", &render::to_hex(self.limbs(), true))
    }
}
