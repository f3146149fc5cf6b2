//! Long division for `U256`
//!
//! The 256-bit quotient and remainder are built from one primitive: dividing
//! a 256-bit value, given as two `U128` digits, by a `U128`. That primitive
//! is the limb-level 128-by-64 division lifted one level up. The divisor is
//! normalized so its top bit is set, then each 64-bit quotient limb is
//! estimated from the divisor's high limb and corrected against its low
//! limb.
//!
//! [`U256::quo_rem`] dispatches on the shape of the operands:
//!
//! - divisor fits 128 bits and the quotient does too: a single step
//! - divisor fits 128 bits: two chained steps, high digit first
//! - divisor wider than 128 bits: the quotient fits 128 bits and is
//!   estimated from the normalized top half of the divisor, then corrected
//!   at most once

use crate::error::{UintError, UintResult};
use crate::primitives::{U128, U256};
use tracing::trace;

/// Divides the 256-bit value `high * 2^128 + low` by a 128-bit divisor.
///
/// Returns `(quotient, remainder)`.
///
/// # Errors
///
/// - [`UintError::DivisionByZero`] if `divisor` is zero
/// - [`UintError::QuotientOverflow`] if `high >= divisor`, since the quotient
///   would then need more than 128 bits
pub fn div_256_by_128(high: U128, low: U128, divisor: U128) -> UintResult<(U128, U128)> {
    if divisor.is_zero() {
        trace!(%high, %low, "256-by-128 division by zero");
        return Err(UintError::DivisionByZero);
    }

    if high >= divisor {
        trace!(%high, %divisor, "256-by-128 quotient does not fit 128 bits");
        return Err(UintError::QuotientOverflow);
    }

    Ok(div_normalized(high, low, divisor))
}

/// Requires `divisor != 0` and `high < divisor`.
fn div_normalized(high: U128, low: U128, divisor: U128) -> (U128, U128) {
    let shift = divisor.leading_zeros();
    let divisor = divisor.shl_sat(shift);

    let top = high.shl_sat(shift) | low.shr_sat(U128::BITS - shift);
    let low = low.shl_sat(shift);

    let q1 = estimate_limb(top, low.hi, divisor);
    let rem = U128::new(low.hi, top.lo).wrapping_sub(divisor.wrapping_mul(U128::from(q1)));

    let q0 = estimate_limb(rem, low.lo, divisor);
    let rem = U128::new(low.lo, rem.lo).wrapping_sub(divisor.wrapping_mul(U128::from(q0)));

    (U128::new(q0, q1), rem.shr_sat(shift))
}

/// Estimates one quotient limb of `(top * 2^64 + next) / divisor` from the
/// divisor's high limb, correcting against its low limb. Loops at most twice.
///
/// Requires a normalized divisor and `top < divisor`.
#[inline]
fn estimate_limb(top: U128, next: u64, divisor: U128) -> u64 {
    let (mut q, r) = top.div_limb(divisor.hi);
    let mut r = U128::from(r);

    while q.hi != 0 || q.wrapping_mul(U128::from(divisor.lo)) > U128::new(next, r.lo) {
        q = q.dec();
        r = r.wrapping_add(U128::from(divisor.hi));

        if r.hi != 0 {
            break;
        }
    }

    q.lo
}

impl U256 {
    /// Divides by a 128-bit divisor, for dividends whose quotient fits
    /// 128 bits.
    ///
    /// # Errors
    ///
    /// Same as [`div_256_by_128`].
    pub fn div128(&self, divisor: U128) -> UintResult<(U128, U128)> {
        div_256_by_128(self.high_half(), self.low_half(), divisor)
    }

    /// Returns `(self / divisor, self % divisor)`.
    ///
    /// The results always satisfy `quotient * divisor + remainder == self`
    /// with `remainder < divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`UintError::DivisionByZero`] if `divisor` is zero.
    pub fn quo_rem(self, divisor: Self) -> UintResult<(Self, Self)> {
        if divisor.is_zero() {
            trace!(dividend = %self, "U256 division by zero");
            return Err(UintError::DivisionByZero);
        }

        if self < divisor {
            return Ok((Self::ZERO, self));
        }

        if divisor.high_half().is_zero() {
            let divisor = divisor.low_half();

            if self.high_half() < divisor {
                let (quotient, remainder) = self.div128(divisor)?;
                return Ok((quotient.into(), remainder.into()));
            }

            let (q_high, r_high) = div_256_by_128(U128::ZERO, self.high_half(), divisor)?;
            let (q_low, remainder) = div_256_by_128(r_high, self.low_half(), divisor)?;

            return Ok((Self::from_halves(q_low, q_high), remainder.into()));
        }

        // The quotient fits 128 bits. Halving the dividend keeps the first
        // step's quotient in range; the shift back undoes it, leaving an
        // estimate that is exact or one too small.
        let shift = divisor.leading_zeros();
        let top = divisor.shl_sat(shift).high_half();
        let halved = self.shr_sat(1);

        let (estimate, _) = div_256_by_128(halved.high_half(), halved.low_half(), top)?;
        let mut estimate = estimate.shr_sat(U128::BITS - 1 - shift);
        if !estimate.is_zero() {
            estimate = estimate.dec();
        }

        let mut quotient = Self::from(estimate);
        let mut remainder = self.wrapping_sub(divisor.wrapping_mul(quotient));

        if remainder >= divisor {
            quotient = quotient.inc();
            remainder = remainder.wrapping_sub(divisor);
        }

        Ok((quotient, remainder))
    }

    /// Returns `self / divisor`, or `None` if `divisor` is zero.
    pub fn checked_div(self, divisor: Self) -> Option<Self> {
        self.quo_rem(divisor).ok().map(|(q, _)| q)
    }

    /// Returns `self % divisor`, or `None` if `divisor` is zero.
    pub fn checked_rem(self, divisor: Self) -> Option<Self> {
        self.quo_rem(divisor).ok().map(|(_, r)| r)
    }
}
