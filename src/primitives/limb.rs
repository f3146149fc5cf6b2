//! Single-limb primitives
//!
//! A limb is one `u64` storage word of a multi-limb integer. This module
//! holds the building blocks every wider operation is assembled from:
//!
//! - saturating limb shifts, total for any shift amount
//! - the 128-by-64 long division step (Knuth Algorithm D, one digit pair)
//! - carry and borrow propagation across limb arrays
//! - the schoolbook limb multiply producing the low `N` limbs of a product
//!
//! Limb arrays are always ordered least significant limb first.

use crate::error::{UintError, UintResult};
use tracing::trace;

/// Number of bits in a limb.
pub const LIMB_BITS: u32 = u64::BITS;

const HALF: u64 = 1 << 32;
const HALF_MASK: u64 = HALF - 1;

/// Shifts a limb left, returning zero once the shift reaches the limb width.
///
/// # Errors
///
/// Returns [`UintError::NegativeShift`] if `shift` is negative.
pub fn shl_limb(value: u64, shift: i32) -> UintResult<u64> {
    if shift < 0 {
        return Err(UintError::NegativeShift(shift));
    }

    Ok(shl_sat(value, shift.unsigned_abs()))
}

/// Shifts a limb right, returning zero once the shift reaches the limb width.
///
/// # Errors
///
/// Returns [`UintError::NegativeShift`] if `shift` is negative.
pub fn shr_limb(value: u64, shift: i32) -> UintResult<u64> {
    if shift < 0 {
        return Err(UintError::NegativeShift(shift));
    }

    Ok(shr_sat(value, shift.unsigned_abs()))
}

#[inline(always)]
pub(crate) const fn shl_sat(value: u64, shift: u32) -> u64 {
    if shift >= LIMB_BITS { 0 } else { value << shift }
}

#[inline(always)]
pub(crate) const fn shr_sat(value: u64, shift: u32) -> u64 {
    if shift >= LIMB_BITS { 0 } else { value >> shift }
}

/// Divides the 128-bit value `high * 2^64 + low` by a limb.
///
/// Returns `(quotient, remainder)`.
///
/// # Errors
///
/// - [`UintError::DivisionByZero`] if `divisor` is zero
/// - [`UintError::QuotientOverflow`] if `high >= divisor`, since the quotient
///   would then need more than 64 bits
pub fn div_128_by_64(high: u64, low: u64, divisor: u64) -> UintResult<(u64, u64)> {
    if divisor == 0 {
        trace!(high, low, "128-by-64 division by zero");
        return Err(UintError::DivisionByZero);
    }

    if high >= divisor {
        trace!(high, low, divisor, "128-by-64 quotient does not fit a limb");
        return Err(UintError::QuotientOverflow);
    }

    Ok(div_wide(high, low, divisor))
}

/// 128-by-64 division on operands already known to be valid.
///
/// Requires `divisor != 0` and `high < divisor`.
pub(crate) fn div_wide(high: u64, low: u64, divisor: u64) -> (u64, u64) {
    debug_assert!(divisor != 0 && high < divisor);

    // Normalize so the divisor's top bit is set.
    let shift = divisor.leading_zeros();
    let divisor = divisor << shift;
    let (d1, d0) = (divisor >> 32, divisor & HALF_MASK);

    let top = (high << shift) | shr_sat(low, LIMB_BITS - shift);
    let low = low << shift;
    let (n1, n0) = (low >> 32, low & HALF_MASK);

    let q1 = estimate_half(top, n1, d1, d0);
    let rem = top
        .wrapping_mul(HALF)
        .wrapping_add(n1)
        .wrapping_sub(q1.wrapping_mul(divisor));

    let q0 = estimate_half(rem, n0, d1, d0);
    let rem = rem
        .wrapping_mul(HALF)
        .wrapping_add(n0)
        .wrapping_sub(q0.wrapping_mul(divisor));

    ((q1 << 32) | q0, rem >> shift)
}

/// Estimates one 32-bit quotient digit and corrects it against the low
/// half of the divisor. Loops at most twice.
#[inline(always)]
fn estimate_half(top: u64, next: u64, d1: u64, d0: u64) -> u64 {
    let mut q = top / d1;
    let mut r = top - q * d1;

    while q >= HALF || q * d0 > (r << 32) + next {
        q -= 1;
        r += d1;

        if r >= HALF {
            break;
        }
    }

    q
}

/// Adds two limb arrays, returning the wrapped sum and the carry out of the
/// most significant limb.
#[inline]
pub(crate) fn add_limbs<const N: usize>(a: &[u64; N], b: &[u64; N]) -> ([u64; N], bool) {
    let mut out = [0u64; N];
    let mut carry = 0u64;

    for ((o, &x), &y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
        let sum = x.wrapping_add(y).wrapping_add(carry);
        carry = ((x & y) | ((x | y) & !sum)) >> 63;
        *o = sum;
    }

    (out, carry != 0)
}

/// Subtracts two limb arrays, returning the wrapped difference and the
/// borrow out of the most significant limb.
#[inline]
pub(crate) fn sub_limbs<const N: usize>(a: &[u64; N], b: &[u64; N]) -> ([u64; N], bool) {
    let mut out = [0u64; N];
    let mut borrow = 0u64;

    for ((o, &x), &y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
        let diff = x.wrapping_sub(y).wrapping_sub(borrow);
        borrow = ((!x & y) | ((!x | y) & diff)) >> 63;
        *o = diff;
    }

    (out, borrow != 0)
}

/// Adds one to a limb array in place, returning the final carry.
#[inline]
pub(crate) fn inc_limbs<const N: usize>(limbs: &mut [u64; N]) -> bool {
    for limb in limbs.iter_mut() {
        let (next, carry) = limb.overflowing_add(1);
        *limb = next;

        if !carry {
            return false;
        }
    }

    true
}

/// Subtracts one from a limb array in place, returning the final borrow.
#[inline]
pub(crate) fn dec_limbs<const N: usize>(limbs: &mut [u64; N]) -> bool {
    for limb in limbs.iter_mut() {
        let (next, borrow) = limb.overflowing_sub(1);
        *limb = next;

        if !borrow {
            return false;
        }
    }

    true
}

/// Schoolbook multiply keeping the low `N` limbs of the product.
///
/// The flag is set when any bit of the full `2N`-limb product was
/// discarded, which makes it an exact overflow test.
pub(crate) fn overflowing_mul_limbs<const N: usize>(
    a: &[u64; N],
    b: &[u64; N],
) -> ([u64; N], bool) {
    let mut out = [0u64; N];
    let mut overflow = false;

    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }

        let mut carry = 0u64;

        for (j, &y) in b.iter().take(N - i).enumerate() {
            let t = x as u128 * y as u128 + out[i + j] as u128 + carry as u128;
            out[i + j] = t as u64;
            carry = (t >> 64) as u64;
        }

        // Anything landing at or above limb N is lost.
        if carry != 0 || b.iter().skip(N - i).any(|&y| y != 0) {
            overflow = true;
        }
    }

    (out, overflow)
}

#[inline]
pub(crate) fn leading_zeros<const N: usize>(limbs: &[u64; N]) -> u32 {
    for (i, &limb) in limbs.iter().enumerate().rev() {
        if limb != 0 {
            return limb.leading_zeros() + LIMB_BITS * (N - 1 - i) as u32;
        }
    }

    LIMB_BITS * N as u32
}

#[inline]
pub(crate) fn trailing_zeros<const N: usize>(limbs: &[u64; N]) -> u32 {
    for (i, &limb) in limbs.iter().enumerate() {
        if limb != 0 {
            return limb.trailing_zeros() + LIMB_BITS * i as u32;
        }
    }

    LIMB_BITS * N as u32
}

#[inline]
pub(crate) fn count_ones<const N: usize>(limbs: &[u64; N]) -> u32 {
    limbs.iter().map(|limb| limb.count_ones()).sum()
}

/// Divides a limb array in place by a non-zero limb, returning the remainder.
pub(crate) fn div_rem_small<const N: usize>(limbs: &mut [u64; N], divisor: u64) -> u64 {
    debug_assert!(divisor != 0);

    let mut rem = 0u64;
    for limb in limbs.iter_mut().rev() {
        let (q, r) = div_wide(rem, *limb, divisor);
        *limb = q;
        rem = r;
    }

    rem
}
