//! Construction sources
//!
//! Every integer in this crate can be built from a closed set of source
//! kinds. [`Source`] names them explicitly so that construction is a single
//! `match` on the discriminant, and the `From` impls below let callers pass
//! native values directly:
//!
//! ```rust
//! use fixuint::primitives::{Source, U256};
//!
//! let a = U256::from_source(42u8).unwrap();
//! let b = U256::from_source(Source::Signed(-1)).unwrap();
//!
//! assert_eq!(a, U256::from(42u8));
//! assert_eq!(b, U256::MAX);
//! ```
//!
//! This module also holds the byte and float decoding shared by both widths.

use super::limb;
use super::{U128, U256};
use crate::error::{UintError, UintResult};
use tracing::trace;

/// Byte order of a serialized integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

/// A value an integer can be constructed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Source<'a> {
    /// `false` is zero, `true` is one.
    Bool(bool),
    /// Any signed native integer, sign extended.
    Signed(i128),
    /// Any unsigned native integer, zero extended.
    Unsigned(u128),
    /// Truncated toward zero.
    F32(f32),
    /// Truncated toward zero.
    F64(f64),
    /// A 128-bit integer of this crate.
    U128(U128),
    /// A 256-bit integer of this crate.
    U256(U256),
    /// A serialized buffer whose length is a multiple of the target width.
    Bytes(&'a [u8], Endian),
}

macro_rules! source_from {
    ($variant:ident as $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Source<'_> {
                fn from(value: $t) -> Self {
                    Source::$variant(value as $wide)
                }
            }
        )*
    };
}

source_from!(Signed as i128: i8, i16, i32, i64, i128, isize);
source_from!(Unsigned as u128: u8, u16, u32, u64, u128, usize);

impl From<bool> for Source<'_> {
    fn from(value: bool) -> Self {
        Source::Bool(value)
    }
}

impl From<f32> for Source<'_> {
    fn from(value: f32) -> Self {
        Source::F32(value)
    }
}

impl From<f64> for Source<'_> {
    fn from(value: f64) -> Self {
        Source::F64(value)
    }
}

impl From<U128> for Source<'_> {
    fn from(value: U128) -> Self {
        Source::U128(value)
    }
}

impl From<U256> for Source<'_> {
    fn from(value: U256) -> Self {
        Source::U256(value)
    }
}

/// Byte slices are read as little-endian, the default byte order.
impl<'a> From<&'a [u8]> for Source<'a> {
    fn from(value: &'a [u8]) -> Self {
        Source::Bytes(value, Endian::Little)
    }
}

impl<'a, const L: usize> From<&'a [u8; L]> for Source<'a> {
    fn from(value: &'a [u8; L]) -> Self {
        Source::Bytes(value.as_slice(), Endian::Little)
    }
}

/// Checks that `len` is a non-zero multiple of `width` bytes.
pub(crate) fn check_length(len: usize, width: usize) -> UintResult<()> {
    if len == 0 || len % width != 0 {
        trace!(len, width, "rejected byte buffer");
        return Err(UintError::InvalidLength { len, width });
    }

    Ok(())
}

/// Reads `N` limbs from the first `8 * N` bytes of `bytes`.
///
/// The caller guarantees the slice is long enough.
#[cfg(not(feature = "speed"))]
pub(crate) fn read_limbs<const N: usize>(bytes: &[u8], endian: Endian) -> [u64; N] {
    let mut out = [0u64; N];

    for (i, chunk) in bytes.chunks_exact(8).take(N).enumerate() {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);

        match endian {
            Endian::Little => out[i] = u64::from_le_bytes(word),
            Endian::Big => out[N - 1 - i] = u64::from_be_bytes(word),
        }
    }

    out
}

/// Reads `N` limbs from the first `8 * N` bytes of `bytes` (unrolled fast path).
#[cfg(feature = "speed")]
pub(crate) fn read_limbs<const N: usize>(bytes: &[u8], endian: Endian) -> [u64; N] {
    let mut out = [0u64; N];

    for (i, o) in out.iter_mut().enumerate() {
        let at = match endian {
            Endian::Little => 8 * i,
            Endian::Big => 8 * (N - 1 - i),
        };
        let b = &bytes[at..at + 8];
        let word = [b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]];

        *o = match endian {
            Endian::Little => u64::from_le_bytes(word),
            Endian::Big => u64::from_be_bytes(word),
        };
    }

    out
}

/// Writes `N` limbs into `out`, which must hold exactly `8 * N` bytes.
pub(crate) fn write_limbs<const N: usize>(limbs: &[u64; N], endian: Endian, out: &mut [u8]) {
    debug_assert_eq!(out.len(), 8 * N);

    for (i, chunk) in out.chunks_exact_mut(8).enumerate() {
        match endian {
            Endian::Little => chunk.copy_from_slice(&limbs[i].to_le_bytes()),
            Endian::Big => chunk.copy_from_slice(&limbs[N - 1 - i].to_be_bytes()),
        }
    }
}

/// Decodes a float into `N` limbs, truncating toward zero.
///
/// The magnitude is taken exactly from the IEEE-754 fields and reduced
/// modulo `2^(64 * N)`. Negative inputs yield the two's complement of the
/// truncated magnitude.
pub(crate) fn float_to_limbs<const N: usize>(value: f64) -> UintResult<[u64; N]> {
    if !value.is_finite() {
        trace!(value, "rejected non-finite float");
        return Err(UintError::UnsupportedSource("non-finite float"));
    }

    let mut out = [0u64; N];
    let magnitude = value.abs().trunc();

    if magnitude < 1.0 {
        return Ok(out);
    }

    let bits = magnitude.to_bits();
    let exponent = ((bits >> 52) & 0x7FF) as i64 - 1075;
    let mantissa = (bits & ((1 << 52) - 1)) | (1 << 52);

    if exponent < 0 {
        // The truncation above cleared every fractional bit.
        out[0] = mantissa >> exponent.unsigned_abs();
    } else {
        let index = (exponent / 64) as usize;
        let offset = (exponent % 64) as u32;

        if index < N {
            out[index] = mantissa << offset;
        }
        if index + 1 < N {
            out[index + 1] = limb::shr_sat(mantissa, 64 - offset);
        }
    }

    if value.is_sign_negative() {
        out.iter_mut().for_each(|l| *l = !*l);
        limb::inc_limbs(&mut out);
    }

    Ok(out)
}
