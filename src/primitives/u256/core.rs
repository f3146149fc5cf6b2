//! 256-bit unsigned integer primitive
//!
//! This module defines a fixed-size 256-bit unsigned integer type (`U256`)
//! with wrapping arithmetic.
//!
//! It is designed as a **simple, explicit value type**: four 64-bit limbs,
//! every operation returning a new value, and overflow discarded modulo
//! 2²⁵⁶. The checked discipline lives in
//! [`SafeU256`](crate::primitives::SafeU256).
//!
//! Limbs are named by half: `lo1` (bits 0-63), `lo2` (64-127), `hi1`
//! (128-191) and `hi2` (192-255).

use crate::error::{UintError, UintResult};
use crate::primitives::fmt as render;
use crate::primitives::limb::{self, LIMB_BITS};
use crate::primitives::source::Source;
use crate::primitives::U128;

use std::cmp::Ordering;
use std::fmt::{Display, Formatter, LowerHex, Result, UpperHex};

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as four 64-bit limbs, least significant first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct U256 {
    pub lo1: u64,
    pub lo2: u64,
    pub hi1: u64,
    pub hi2: u64,
}

impl U256 {
    /// Width in bits.
    pub const BITS: u32 = 256;

    /// The value zero.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// The value one.
    pub const ONE: Self = Self::new(1, 0, 0, 0);

    /// The smallest representable value (zero).
    pub const MIN: Self = Self::ZERO;

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self::new(u64::MAX, u64::MAX, u64::MAX, u64::MAX);

    /// Builds a value from its limbs, least significant first.
    pub const fn new(lo1: u64, lo2: u64, hi1: u64, hi2: u64) -> Self {
        Self { lo1, lo2, hi1, hi2 }
    }

    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        Self::new(limbs[0], limbs[1], limbs[2], limbs[3])
    }

    /// Returns the limbs, least significant first.
    pub const fn limbs(&self) -> [u64; 4] {
        [self.lo1, self.lo2, self.hi1, self.hi2]
    }

    /// Builds a value from eight 32-bit words, least significant first.
    pub const fn from_u32_words(words: [u32; 8]) -> Self {
        Self::new(
            words[0] as u64 | (words[1] as u64) << 32,
            words[2] as u64 | (words[3] as u64) << 32,
            words[4] as u64 | (words[5] as u64) << 32,
            words[6] as u64 | (words[7] as u64) << 32,
        )
    }

    /// Joins two 128-bit halves.
    pub const fn from_halves(low: U128, high: U128) -> Self {
        Self::new(low.lo, low.hi, high.lo, high.hi)
    }

    /// Bits 0-127.
    pub const fn low_half(&self) -> U128 {
        U128::new(self.lo1, self.lo2)
    }

    /// Bits 128-255.
    pub const fn high_half(&self) -> U128 {
        U128::new(self.hi1, self.hi2)
    }

    /// Builds a value from any supported [`Source`].
    ///
    /// Signed sources are sign extended, so `-1` yields [`U256::MAX`].
    ///
    /// # Errors
    ///
    /// - [`UintError::InvalidLength`] for a
    ///   byte buffer that is empty or not a multiple of 32 bytes
    /// - [`UintError::UnsupportedSource`]
    ///   for a non-finite float
    pub fn from_source<'a>(source: impl Into<Source<'a>>) -> UintResult<Self> {
        match source.into() {
            Source::Bool(value) => Ok(Self::from(value)),
            Source::Signed(value) => Ok(Self::from(value)),
            Source::Unsigned(value) => Ok(Self::from(value)),
            Source::F32(value) => Self::from_f32(value),
            Source::F64(value) => Self::from_f64(value),
            Source::U128(value) => Ok(Self::from(value)),
            Source::U256(value) => Ok(value),
            Source::Bytes(bytes, endian) => Self::from_slice(bytes, endian),
        }
    }

    pub const fn is_zero(&self) -> bool {
        (self.lo1 | self.lo2 | self.hi1 | self.hi2) == 0
    }

    /// Counts the number of leading zero bits, in `0..=256`.
    ///
    /// Scans from the most significant limb, skipping zero limbs.
    pub fn leading_zeros(&self) -> u32 {
        limb::leading_zeros(&self.limbs())
    }

    /// Counts the number of trailing zero bits, in `0..=256`.
    pub fn trailing_zeros(&self) -> u32 {
        limb::trailing_zeros(&self.limbs())
    }

    /// Population count.
    pub fn count_ones(&self) -> u32 {
        limb::count_ones(&self.limbs())
    }

    /// Number of significant bits.
    pub fn bits(&self) -> u32 {
        Self::BITS - self.leading_zeros()
    }

    /// Logical left shift.
    ///
    /// When the shift value is >= 256 the result is zero. Non-positive
    /// shifts return the value unchanged.
    pub fn shl_by(self, shift: i32) -> Self {
        if shift <= 0 {
            return self;
        }

        self.shl_sat(shift.unsigned_abs())
    }

    /// Logical right shift.
    ///
    /// When the shift value is >= 256 the result is zero. Non-positive
    /// shifts return the value unchanged.
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

        if shift > 128 {
            let high = self.low_half().shl_sat(shift - 128);
            return Self::from_halves(U128::ZERO, high);
        }

        if shift > LIMB_BITS {
            let s = shift - LIMB_BITS;
            let c = 128 - shift;
            return Self::new(
                0,
                limb::shl_sat(self.lo1, s),
                limb::shl_sat(self.lo2, s) | limb::shr_sat(self.lo1, c),
                limb::shl_sat(self.hi1, s) | limb::shr_sat(self.lo2, c),
            );
        }

        let c = LIMB_BITS - shift;
        Self::new(
            limb::shl_sat(self.lo1, shift),
            limb::shl_sat(self.lo2, shift) | limb::shr_sat(self.lo1, c),
            limb::shl_sat(self.hi1, shift) | limb::shr_sat(self.lo2, c),
            limb::shl_sat(self.hi2, shift) | limb::shr_sat(self.hi1, c),
        )
    }

    pub(crate) const fn shr_sat(self, shift: u32) -> Self {
        if shift >= Self::BITS {
            return Self::ZERO;
        }

        if shift > 128 {
            let low = self.high_half().shr_sat(shift - 128);
            return Self::from_halves(low, U128::ZERO);
        }

        if shift > LIMB_BITS {
            let s = shift - LIMB_BITS;
            let c = 128 - shift;
            return Self::new(
                limb::shr_sat(self.lo2, s) | limb::shl_sat(self.hi1, c),
                limb::shr_sat(self.hi1, s) | limb::shl_sat(self.hi2, c),
                limb::shr_sat(self.hi2, s),
                0,
            );
        }

        let c = LIMB_BITS - shift;
        Self::new(
            limb::shr_sat(self.lo1, shift) | limb::shl_sat(self.lo2, c),
            limb::shr_sat(self.lo2, shift) | limb::shl_sat(self.hi1, c),
            limb::shr_sat(self.hi1, shift) | limb::shl_sat(self.hi2, c),
            limb::shr_sat(self.hi2, shift),
        )
    }

    /// Addition modulo 2²⁵⁶, with the carry out of `hi2`.
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let (out, carry) = limb::add_limbs(&self.limbs(), &rhs.limbs());
        (Self::from_limbs(out), carry)
    }

    /// Subtraction modulo 2²⁵⁶, with the borrow out of `hi2`.
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let (out, borrow) = limb::sub_limbs(&self.limbs(), &rhs.limbs());
        (Self::from_limbs(out), borrow)
    }

    /// Multiplication modulo 2²⁵⁶.
    ///
    /// The flag reports whether any bit of the full 512-bit product was
    /// discarded.
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

    /// Adds one in place with ripple carry, wrapping at the maximum.
    pub fn increment(&mut self) -> &mut Self {
        let mut limbs = self.limbs();
        limb::inc_limbs(&mut limbs);
        *self = Self::from_limbs(limbs);
        self
    }

    /// Subtracts one in place with ripple borrow, wrapping at zero.
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

    pub fn set(&mut self, value: Self) -> &mut Self {
        *self = value;
        self
    }

    pub fn set_u128(&mut self, value: U128) -> &mut Self {
        self.set(Self::from(value))
    }

    pub fn set_u64(&mut self, value: u64) -> &mut Self {
        self.set(Self::from(value))
    }

    /// Negative values are sign extended.
    pub fn set_i64(&mut self, value: i64) -> &mut Self {
        self.set(Self::from(value))
    }

    /// Renders the value in radix 10 or 16.
    ///
    /// # Errors
    ///
    /// Returns [`UintError::UnsupportedRadix`]
    /// for any other radix.
    pub fn to_str_radix(&self, radix: u32) -> UintResult<String> {
        match radix {
            10 => Ok(render::to_decimal(self.limbs())),
            16 => Ok(render::to_hex(self.limbs(), false)),
            _ => Err(UintError::UnsupportedRadix(radix)),
        }
    }
}

impl Ord for U256 {
    /// Lexicographic from the most significant limb.
    fn cmp(&self, other: &Self) -> Ordering {
        self.hi2
            .cmp(&other.hi2)
            .then(self.hi1.cmp(&other.hi1))
            .then(self.lo2.cmp(&other.lo2))
            .then(self.lo1.cmp(&other.lo1))
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for U256 {
    /// Formats the value in decimal.
    ///
    /// Width, fill and alignment flags are honoured.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.pad_integral(true, "", &render::to_decimal(self.limbs()))
    }
}

impl LowerHex for U256 {
    /// Formats the value as minimal lowercase hexadecimal (`{:#x}` adds `0x`).
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.pad_integral(true, "0x", &render::to_hex(self.limbs(), false))
    }
}

impl UpperHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.pad_integral(true, "0x", &render::to_hex(self.limbs(), true))
    }
}
