use fixuint::UintError;
use fixuint::primitives::{Endian, Source, U128, U256, div_256_by_128};

const MAX_U64: u64 = u64::MAX;

fn dividend() -> U256 {
    U256::new(
        6064648183073788001,
        18412591705276258226,
        18446744073709551615,
        9223372036854775807,
    )
}

fn subtrahend() -> U256 {
    U256::new(3061651127733543934, 42442096056813094, 0, 0)
}

#[test]
fn u256_constants() {
    assert_eq!(U256::ZERO.limbs(), [0; 4]);
    assert_eq!(U256::ONE.limbs(), [1, 0, 0, 0]);
    assert_eq!(U256::MIN, U256::ZERO);
    assert_eq!(U256::MAX.limbs(), [MAX_U64; 4]);
}

#[test]
fn u256_add_carries_into_next_limb() {
    assert_eq!(U256::ONE + U256::new(MAX_U64, 0, 0, 0), U256::new(0, 1, 0, 0));
}

#[test]
fn u256_add_carries_across_every_limb() {
    let x = U256::new(MAX_U64, MAX_U64, MAX_U64, 0);
    assert_eq!(x + U256::ONE, U256::new(0, 0, 0, 1));
    assert_eq!(U256::MAX + U256::ONE, U256::ZERO);
    assert!(U256::MAX.overflowing_add(U256::ONE).1);
}

#[test]
fn u256_sub_limb_wise() {
    assert_eq!(U256::new(2, 2, 2, 2) - U256::new(1, 1, 1, 1), U256::new(1, 1, 1, 1));
}

#[test]
fn u256_sub_borrows_and_wraps() {
    assert_eq!(U256::new(0, 0, 0, 1) - U256::ONE, U256::new(MAX_U64, MAX_U64, MAX_U64, 0));
    assert_eq!(U256::ZERO - U256::ONE, U256::MAX);
    assert!(U256::ZERO.overflowing_sub(U256::ONE).1);
}

#[test]
fn u256_sub_and_add_are_inverse() {
    let difference = dividend() - subtrahend();

    assert_eq!(
        difference,
        U256::new(
            3002997055340244067,
            18370149609219445132,
            18446744073709551615,
            9223372036854775807,
        )
    );
    assert_eq!(difference + subtrahend(), dividend());
}

#[test]
fn u256_mul_small_operands() {
    let product = U256::from(43545453452u64) * U256::from(2353454354u64);
    assert_eq!(product, U256::new(10248516654965971928, 5, 0, 0));
}

#[test]
fn u256_mul_at_leading_zero_boundary() {
    let a = U256::new(12919400065614042453, 180, 0, 0);
    let b = U256::new(2558044588346441728, 1801421225117016759, 88162076311671563, 0);

    assert_eq!(a.leading_zeros(), 184);
    assert_eq!(b.leading_zeros(), 71);

    let (product, overflow) = a.overflowing_mul(b);
    assert!(!overflow);
    assert_eq!(
        product,
        U256::new(
            5296233161787703296,
            17841151846691307288,
            5298105704908565946,
            15930919111324522770,
        )
    );
}

#[test]
fn u256_mul_wraps() {
    assert_eq!(U256::MAX * U256::MAX, U256::ONE);
    assert!(U256::MAX.overflowing_mul(U256::from(2u8)).1);
    assert_eq!(U256::new(0, 0, 0, 1) * U256::new(0, 1, 0, 0), U256::ZERO);
}

#[test]
fn u256_quo_rem_small_divisor() {
    let (q, r) = dividend().quo_rem(U256::from(10u8)).unwrap();
    assert_eq!(q * U256::from(10u8) + r, dividend());
    assert!(r < U256::from(10u8));
}

#[test]
fn u256_quo_rem_narrow_divisor() {
    let difference = dividend() - subtrahend();
    let (q, r) = difference.quo_rem(subtrahend()).unwrap();

    assert_eq!(q, U256::new(154492432731870719, 5840250002512840507, 217, 0));
    assert_eq!(r, U256::new(9010462459763162209, 24212058787338633, 0, 0));

    let (q, r) = dividend().quo_rem(subtrahend()).unwrap();
    assert_eq!(q, U256::new(154492432731870720, 5840250002512840507, 217, 0));
    assert_eq!(r, U256::new(9010462459763162209, 24212058787338633, 0, 0));
}

#[test]
fn u256_quo_rem_wide_divisor() {
    let (q, r) = dividend().quo_rem(U256::new(1, 2, 3, 0)).unwrap();

    assert_eq!(q, U256::new(10248191152060862008, 3074457345618258602, 0, 0));
    assert_eq!(r, U256::new(14263201104722477609, 13288496129245827223, 2, 0));

    let (q, r) = U256::MAX.quo_rem(U256::new(0, 0, 0, 1)).unwrap();
    assert_eq!(q, U256::new(MAX_U64, 0, 0, 0));
    assert_eq!(r, U256::new(MAX_U64, MAX_U64, MAX_U64, 0));
}

#[test]
fn u256_quo_rem_trivial_cases() {
    assert_eq!(U256::ONE.quo_rem(U256::MAX).unwrap(), (U256::ZERO, U256::ONE));
    assert_eq!(U256::MAX.quo_rem(U256::MAX).unwrap(), (U256::ONE, U256::ZERO));
    assert_eq!(U256::MAX.quo_rem(U256::ONE).unwrap(), (U256::MAX, U256::ZERO));
}

#[test]
fn u256_quo_rem_by_zero() {
    assert_eq!(U256::ONE.quo_rem(U256::ZERO), Err(UintError::DivisionByZero));
    assert_eq!(U256::ONE.checked_div(U256::ZERO), None);
}

#[test]
#[should_panic(expected = "division by zero")]
fn u256_div_by_zero_panics() {
    let _ = U256::from(10u8) / U256::ZERO;
}

#[test]
#[should_panic(expected = "division by zero")]
fn u256_rem_by_zero_panics() {
    let _ = U256::from(10u8) % U256::ZERO;
}

#[test]
fn u256_div_and_rem_operators() {
    let a = U256::from(1_000_000u64);
    let b = U256::from(7u8);

    assert_eq!(a / b, U256::from(142857u64));
    assert_eq!(a % b, U256::from(1u8));

    let mut c = a;
    c /= b;
    c %= U256::from(1000u16);
    assert_eq!(c, U256::from(857u16));
}

#[test]
fn div_256_by_128_two_digit_quotient() {
    let (q, r) = div_256_by_128(U128::new(5, 7), U128::new(11, 13), U128::new(17, 19)).unwrap();

    assert_eq!(q, U128::new(3628029997876393808, 6796168869261413753));
    assert_eq!(r, U128::new(12110466330939511739, 16));
}

#[test]
fn div_256_by_128_faults() {
    assert_eq!(
        div_256_by_128(U128::ONE, U128::ZERO, U128::ZERO),
        Err(UintError::DivisionByZero)
    );
    assert_eq!(
        div_256_by_128(U128::new(5, 0), U128::ZERO, U128::new(5, 0)),
        Err(UintError::QuotientOverflow)
    );
}

#[test]
fn u256_div128_agrees_with_quo_rem() {
    let x = U256::new(MAX_U64, 3, 1, 0);
    let d = U128::new(0, 2);

    let (q, r) = x.div128(d).unwrap();
    let (wq, wr) = x.quo_rem(U256::from(d)).unwrap();

    assert_eq!(U256::from(q), wq);
    assert_eq!(U256::from(r), wr);
}

#[test]
fn u256_shifts_within_lower_band() {
    let x = U256::new(MAX_U64, 0, 0, 0);

    assert_eq!(x << 1, U256::new(MAX_U64 - 1, 1, 0, 0));
    assert_eq!(x << 64, U256::new(0, MAX_U64, 0, 0));
    assert_eq!(U256::ONE << 200, U256::new(0, 0, 0, 256));
    assert_eq!((U256::ONE << 255) >> 255, U256::ONE);
}

#[test]
fn u256_shifts_across_bands() {
    let a = dividend();

    assert_eq!(
        a << 100,
        U256::new(0, 18252251530591731712, 3799203160625468991, 18446744073582324129)
    );
    assert_eq!(a >> 100, U256::new(18446744073709054633, MAX_U64, 134217727, 0));
    assert_eq!(a << 130, U256::new(0, 0, 5811848658585600388, 18310134599976378057));
    assert_eq!(a >> 130, U256::new(MAX_U64, 2305843009213693951, 0, 0));
    assert_eq!(a >> 128, U256::new(MAX_U64, 9223372036854775807, 0, 0));
    assert_eq!(a << 64, U256::new(0, a.lo1, a.lo2, a.hi1));
}

#[test]
fn u256_shift_edge_amounts() {
    let a = dividend();

    assert_eq!(a << 0, a);
    assert_eq!(a >> -1, a);
    assert_eq!(a << 256, U256::ZERO);
    assert_eq!(a >> 300, U256::ZERO);

    let mut b = a;
    b <<= 8;
    b >>= 8;
    assert_eq!(b, a & (U256::MAX >> 8));
}

#[test]
fn u256_comparison_is_most_significant_first() {
    assert!(U256::new(0, 0, 0, 1) > U256::new(MAX_U64, MAX_U64, MAX_U64, 0));
    assert!(U256::new(5, 0, 0, 0) < U256::new(0, 1, 0, 0));
    assert!(U256::ZERO <= U256::ZERO);
    assert_ne!(U256::ONE, U256::ZERO);
}

#[test]
fn u256_bitwise_ops() {
    let a = U256::new(0xFF, 0xF0, 0x0F, 0);
    let b = U256::new(0x0F, 0x0F, 0x0F, MAX_U64);

    assert_eq!(a & b, U256::new(0x0F, 0, 0x0F, 0));
    assert_eq!(a | b, U256::new(0xFF, 0xFF, 0x0F, MAX_U64));
    assert_eq!(a ^ b, U256::new(0xF0, 0xFF, 0, MAX_U64));
    assert_eq!(!U256::ZERO, U256::MAX);
    assert_eq!(-U256::ONE, U256::MAX);
}

#[test]
fn u256_increment_ripples() {
    let mut x = U256::new(MAX_U64, MAX_U64, 0, 0);
    x.increment();
    assert_eq!(x, U256::new(0, 0, 1, 0));

    x.decrement();
    assert_eq!(x, U256::new(MAX_U64, MAX_U64, 0, 0));

    assert_eq!(U256::MAX.inc(), U256::ZERO);
    assert_eq!(U256::ZERO.dec(), U256::MAX);

    let mut y = U256::ZERO;
    assert_eq!(y.post_decrement(), U256::ZERO);
    assert_eq!(y, U256::MAX);
    assert_eq!(y.post_increment(), U256::MAX);
    assert_eq!(y, U256::ZERO);
}

#[test]
fn u256_setters() {
    let mut x = U256::MAX;

    x.set_u64(42);
    assert_eq!(x, U256::from(42u8));

    x.set_i64(-1);
    assert_eq!(x, U256::MAX);

    x.set_u128(U128::new(1, 2));
    assert_eq!(x, U256::new(1, 2, 0, 0));

    x.set(U256::ONE);
    assert_eq!(x, U256::ONE);
}

#[test]
fn u256_counting_bits() {
    assert_eq!(U256::ZERO.leading_zeros(), 256);
    assert_eq!(U256::ONE.leading_zeros(), 255);
    assert_eq!(U256::new(0, 0, 0, 1 << 60).leading_zeros(), 3);
    assert_eq!(U256::new(0, 0, 1, 0).leading_zeros(), 127);
    assert_eq!(U256::new(0, 0, 1, 0).trailing_zeros(), 128);
    assert_eq!(U256::ZERO.trailing_zeros(), 256);
    assert_eq!(U256::MAX.count_ones(), 256);
    assert_eq!(U256::ONE.bits(), 1);
}

#[test]
fn u256_from_native_ints_sign_extends() {
    assert_eq!(U256::from(-1i8), U256::MAX);
    assert_eq!(U256::from(-2i64), U256::new(MAX_U64 - 1, MAX_U64, MAX_U64, MAX_U64));
    assert_eq!(U256::from(i128::MIN), U256::new(0, 1 << 63, MAX_U64, MAX_U64));
    assert_eq!(U256::from(u128::MAX), U256::new(MAX_U64, MAX_U64, 0, 0));
    assert_eq!(U256::from(true), U256::ONE);
}

#[test]
fn u256_from_source_dispatch() {
    assert_eq!(U256::from_source(42u8).unwrap(), U256::from(42u8));
    assert_eq!(U256::from_source(Source::Signed(-1)).unwrap(), U256::MAX);
    assert_eq!(U256::from_source(U128::MAX).unwrap(), U256::new(MAX_U64, MAX_U64, 0, 0));
    assert_eq!(U256::from_source(dividend()).unwrap(), dividend());
    assert_eq!(U256::from_source(true).unwrap(), U256::ONE);

    let mut be = [0u8; 32];
    be[31] = 1;
    assert_eq!(
        U256::from_source(Source::Bytes(&be, Endian::Big)).unwrap(),
        U256::ONE
    );
}

#[test]
fn u256_from_source_rejects_bad_input() {
    let odd = [0u8; 33];
    assert_eq!(
        U256::from_source(&odd),
        Err(UintError::InvalidLength { len: 33, width: 32 })
    );
    assert!(U256::from_source(f64::INFINITY).is_err());
    assert!(U256::from_source(f32::NAN).is_err());
}

#[test]
fn u256_from_floats_truncates() {
    assert_eq!(U256::from_f64(123456789.75).unwrap(), U256::from(123456789u32));
    assert_eq!(U256::from_f64(2f64.powi(200)).unwrap(), U256::ONE << 200);
    assert_eq!(U256::from_f64(0.999).unwrap(), U256::ZERO);
    assert_eq!(U256::from_f64(-1.0).unwrap(), U256::MAX);
    assert_eq!(U256::from_f32(16777216.0).unwrap(), U256::from(16777216u32));
    assert_eq!(U256::from_f64(2f64.powi(256)).unwrap(), U256::ZERO);
}

#[test]
fn u256_narrowing_conversions() {
    assert_eq!(U256::MAX.to_u64(), MAX_U64);
    assert_eq!(U256::MAX.to_i64(), -1);
    assert_eq!(U256::MAX.to_i128(), -1);
    assert_eq!(U256::new(7, 0, 0, 0).to_i64(), 7);
    assert_eq!(U256::new(0, 0, 0, 1 << 63).to_i64(), i64::MIN);
    assert_eq!(U256::new(1, 2, 3, 4).to_u128(), U128::new(1, 2));
    assert_eq!(U256::new(1, 2, 3, 4).to_u32(), 1);
    assert!(!U256::ZERO.to_bool());
    assert_eq!(dividend().to_u256(), dividend());
}

#[test]
fn u256_try_from_checks_width() {
    assert_eq!(u8::try_from(U256::from(0x12u8)), Ok(0x12));
    assert_eq!(u8::try_from(U256::from(0x100u16)), Err(UintError::Truncation));
    assert_eq!(u64::try_from(U256::from(MAX_U64)), Ok(MAX_U64));
    assert!(u64::try_from(U256::new(0, 0, 0, 1)).is_err());

    let x = U256::from(0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEFu128);
    assert_eq!(u128::try_from(x), Ok(0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEFu128));
    assert_eq!(U128::try_from(U256::new(0, 0, 1, 0)), Err(UintError::Truncation));

    let halves: [u128; 2] = x.into();
    assert_eq!(halves, [0, 0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEFu128]);
    assert_eq!(U256::from(halves), x);
}

#[test]
fn u256_bytes_round_trip() {
    let x = dividend();

    for endian in [Endian::Little, Endian::Big] {
        assert_eq!(U256::from_slice(&x.to_vec(endian), endian).unwrap(), x);
    }

    assert_eq!(U256::from_le_bytes(x.to_le_bytes()), x);
    assert_eq!(U256::from_be_bytes(x.to_be_bytes()), x);
    assert_eq!(x.to_be_bytes()[0], 0x7F);
    assert_eq!(x.to_le_bytes()[0], 0x61);

    let bytes: [u8; 32] = x.into();
    assert_eq!(U256::from(bytes), x);
}

#[test]
fn u256_from_slice_accepts_multiples() {
    let mut buf = vec![0u8; 64];
    buf[0] = 3;
    buf[32] = 0xFF;

    assert_eq!(U256::from_slice(&buf, Endian::Little).unwrap(), U256::from(3u8));
    assert!(U256::from_slice(&buf[..48], Endian::Little).is_err());
}

#[test]
fn u256_rendering() {
    assert_eq!(U256::ZERO.to_string(), "0");
    assert_eq!(
        U256::MAX.to_string(),
        "115792089237316195423570985008687907853269984665640564039457584007913129639935"
    );
    assert_eq!(U256::new(0, 1, 0, 0).to_string(), "18446744073709551616");
    assert_eq!(
        format!("{:x}", dividend()),
        "7fffffffffffffffffffffffffffffffff86aa9a134b97b25429f563ffd4d061"
    );
    assert_eq!(format!("{:X}", U256::from(0xBEEFu16)), "BEEF");
    assert_eq!(format!("{:#x}", U256::ZERO), "0x0");
    assert_eq!(U256::from(10u8).to_str_radix(10).unwrap(), "10");
    assert_eq!(U256::ONE.to_str_radix(8), Err(UintError::UnsupportedRadix(8)));
}

#[test]
fn u256_from_u32_words() {
    let x = U256::from_u32_words([1, 0, 0, 0, 0, 0, 0, 0x8000_0000]);
    assert_eq!(x, U256::new(1, 0, 0, 1 << 63));
}
