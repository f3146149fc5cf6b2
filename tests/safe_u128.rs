use fixuint::UintError;
use fixuint::primitives::{SafeU128, U128};

fn safe(lo: u64, hi: u64) -> SafeU128 {
    SafeU128::from(U128::new(lo, hi))
}

#[test]
fn safe_u128_add_and_sub_bounds() {
    assert_eq!(safe(u64::MAX, 0).try_add(SafeU128::ONE).unwrap(), safe(0, 1));
    assert_eq!(
        SafeU128::MAX.try_add(SafeU128::ONE),
        Err(UintError::Overflow { op: "add" })
    );
    assert_eq!(safe(0, 1).try_sub(SafeU128::ONE).unwrap(), safe(u64::MAX, 0));
    assert_eq!(
        SafeU128::ZERO.try_sub(SafeU128::ONE),
        Err(UintError::Underflow { op: "sub" })
    );
}

#[test]
fn safe_u128_mul_bounds() {
    // 2^64 * 2^63: leading zeros sum to 127 and the product fits.
    assert_eq!(safe(0, 1).try_mul(safe(1 << 63, 0)).unwrap(), safe(0, 1 << 63));

    // (2^65 - 1) * 3 * 2^62: same boundary, product too wide.
    assert!(safe(u64::MAX, 1).try_mul(safe(3 << 62, 0)).is_err());

    assert!(SafeU128::MAX.try_mul(SafeU128::MAX).is_err());
    assert_eq!(SafeU128::MAX.try_mul(SafeU128::ONE).unwrap(), SafeU128::MAX);
}

#[test]
fn safe_u128_mul_matches_native_checked() {
    let samples = [
        0u128,
        1,
        3,
        u64::MAX as u128,
        1 << 64,
        (1 << 65) - 1,
        3 << 62,
        1 << 127,
        u128::MAX,
    ];

    for &a in &samples {
        for &b in &samples {
            let checked = SafeU128::from(a).try_mul(SafeU128::from(b)).ok().map(u128::from);
            assert_eq!(checked, a.checked_mul(b), "{a:x} * {b:x}");
        }
    }
}

#[test]
fn safe_u128_division_is_checked_for_zero_only() {
    let a = SafeU128::from(u128::MAX);
    let b = SafeU128::from(10u8);

    assert_eq!(u128::from(a.try_div(b).unwrap()), u128::MAX / 10);
    assert_eq!(u128::from(a.try_rem(b).unwrap()), u128::MAX % 10);
    assert_eq!(a.try_div(SafeU128::ZERO), Err(UintError::DivisionByZero));
}

#[test]
fn safe_u128_increment_bounds() {
    assert_eq!(
        SafeU128::MAX.try_inc(),
        Err(UintError::Overflow { op: "increment" })
    );
    assert_eq!(safe(u64::MAX, 0).try_inc().unwrap(), safe(0, 1));
    assert_eq!(safe(0, 1).try_dec().unwrap(), safe(u64::MAX, 0));
    assert_eq!(
        SafeU128::ZERO.try_dec(),
        Err(UintError::Underflow { op: "decrement" })
    );
}

#[test]
#[should_panic(expected = "overflow during add")]
fn safe_u128_add_assign_panics() {
    let mut x = SafeU128::MAX;
    x += SafeU128::ONE;
}

#[test]
fn safe_u128_into_wrapping() {
    let x = SafeU128::from(5u8);
    assert_eq!(x.into_wrapping(), U128::from(5u8));
    assert_eq!(x.to_u256(), fixuint::U256::from(5u8));
    assert_eq!(x.widen().to_u64(), 5);
}

#[test]
fn safe_u128_post_increment_and_decrement() {
    let mut x = safe(u64::MAX, 0);

    assert_eq!(x.post_increment().unwrap(), safe(u64::MAX, 0));
    assert_eq!(x, safe(0, 1));
    assert_eq!(x.post_decrement().unwrap(), safe(0, 1));
    assert_eq!(x, safe(u64::MAX, 0));
}

#[test]
fn safe_u128_post_increment_faults_leave_value() {
    let mut max = SafeU128::MAX;
    assert_eq!(max.post_increment(), Err(UintError::Overflow { op: "increment" }));
    assert_eq!(max, SafeU128::MAX);

    let mut zero = SafeU128::ZERO;
    assert_eq!(zero.post_decrement(), Err(UintError::Underflow { op: "decrement" }));
    assert_eq!(zero, SafeU128::ZERO);
}

#[test]
fn safe_u128_queries_and_native_value() {
    let mut x = safe(0, 1);

    assert_eq!(x.trailing_zeros(), 64);
    assert_eq!(x.count_ones(), 1);
    assert_eq!(x.bits(), 65);
    assert_eq!(x.to_u128(), 1 << 64);

    x.set(SafeU128::from(7u8));
    assert_eq!(x.to_u128(), 7);
}
