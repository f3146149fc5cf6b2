use fixuint::UintError;
use fixuint::primitives::limb::{div_128_by_64, shl_limb, shr_limb};

#[test]
fn shl_limb_moves_bits_up() {
    assert_eq!(shl_limb(1, 0).unwrap(), 1);
    assert_eq!(shl_limb(1, 63).unwrap(), 1 << 63);
    assert_eq!(shl_limb(0xFF, 8).unwrap(), 0xFF00);
}

#[test]
fn shl_limb_saturates_at_limb_width() {
    for x in [0u64, 1, 0xDEAD_BEEF, u64::MAX] {
        assert_eq!(shl_limb(x, 64).unwrap(), 0);
        assert_eq!(shl_limb(x, 65).unwrap(), 0);
        assert_eq!(shl_limb(x, i32::MAX).unwrap(), 0);
    }
}

#[test]
fn shr_limb_moves_bits_down() {
    assert_eq!(shr_limb(1 << 63, 63).unwrap(), 1);
    assert_eq!(shr_limb(0xFF00, 8).unwrap(), 0xFF);
    assert_eq!(shr_limb(u64::MAX, 0).unwrap(), u64::MAX);
}

#[test]
fn shr_limb_saturates_at_limb_width() {
    for x in [0u64, 1, 0xDEAD_BEEF, u64::MAX] {
        assert_eq!(shr_limb(x, 64).unwrap(), 0);
        assert_eq!(shr_limb(x, 1000).unwrap(), 0);
    }
}

#[test]
fn limb_shifts_reject_negative_amounts() {
    assert_eq!(shl_limb(1, -1), Err(UintError::NegativeShift(-1)));
    assert_eq!(shr_limb(1, -64), Err(UintError::NegativeShift(-64)));
}

#[test]
fn div_128_by_64_small_values() {
    assert_eq!(div_128_by_64(0, 10, 3).unwrap(), (3, 1));
    assert_eq!(div_128_by_64(0, 0, 7).unwrap(), (0, 0));
    assert_eq!(div_128_by_64(1, 0, 2).unwrap(), (1 << 63, 0));
}

#[test]
fn div_128_by_64_matches_native_u128() {
    let divisors = [
        1u64,
        3,
        0xFFFF_FFFF,
        0x1_0000_0000,
        0x8000_0000_0000_0000,
        0x8000_0000_0000_0001,
        0xFFFF_FFFF_FFFF_FFFE,
        u64::MAX,
        0x0123_4567_89AB_CDEF,
    ];
    let lows = [0u64, 1, 0xFFFF_FFFF, 0x8000_0000_0000_0000, u64::MAX];

    for &d in &divisors {
        for high in [0, d / 2, d - 1] {
            for &low in &lows {
                let n = (high as u128) << 64 | low as u128;
                let (q, r) = div_128_by_64(high, low, d).unwrap();

                assert_eq!(q as u128, n / d as u128, "{high:x}:{low:x} / {d:x}");
                assert_eq!(r as u128, n % d as u128, "{high:x}:{low:x} % {d:x}");
            }
        }
    }
}

#[test]
fn div_128_by_64_rejects_zero_divisor() {
    assert_eq!(div_128_by_64(0, 1, 0), Err(UintError::DivisionByZero));
}

#[test]
fn div_128_by_64_rejects_wide_quotient() {
    assert_eq!(div_128_by_64(5, 0, 5), Err(UintError::QuotientOverflow));
    assert_eq!(div_128_by_64(u64::MAX, 0, 1), Err(UintError::QuotientOverflow));
}
