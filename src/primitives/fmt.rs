//! Decimal and hexadecimal rendering for limb arrays.
//!
//! Decimal output peels off 19 digits at a time with the 128-by-64 limb
//! divider; hexadecimal output prints the limbs from the most significant
//! non-zero limb down.

use super::limb;

/// Largest power of ten that fits a limb.
const DECIMAL_CHUNK: u64 = 10_000_000_000_000_000_000;

pub(crate) fn to_decimal<const N: usize>(mut limbs: [u64; N]) -> String {
    let mut chunks = Vec::with_capacity(N + 1);

    loop {
        chunks.push(limb::div_rem_small(&mut limbs, DECIMAL_CHUNK));

        if limbs.iter().all(|&l| l == 0) {
            break;
        }
    }

    let mut iter = chunks.iter().rev();
    let mut out = iter.next().map(u64::to_string).unwrap_or_default();

    for chunk in iter {
        out.push_str(&format!("{chunk:019}"));
    }

    out
}

pub(crate) fn to_hex<const N: usize>(limbs: [u64; N], upper: bool) -> String {
    let mut iter = limbs.iter().rev().skip_while(|&&l| l == 0);

    let Some(first) = iter.next() else {
        return "0".to_string();
    };

    let mut out = if upper {
        format!("{first:X}")
    } else {
        format!("{first:x}")
    };

    for l in iter {
        if upper {
            out.push_str(&format!("{l:016X}"));
        } else {
            out.push_str(&format!("{l:016x}"));
        }
    }

    out
}
