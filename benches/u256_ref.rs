use criterion::{Criterion, criterion_group, criterion_main};
use num_bigint::BigUint;
use std::hint::black_box;

fn operands() -> (BigUint, BigUint) {
    let a = BigUint::from_slice(&[
        0xFFD4_D061, 0x5429_F563, 0x134B_97B2, 0xFF86_AA9A, 0xFFFF_FFFF, 0xFFFF_FFFF,
        0xFFFF_FFFF, 0x7FFF_FFFF,
    ]);
    let b = BigUint::from(3061651127733543934u64) + (BigUint::from(42442096056813094u64) << 64);

    (a, b)
}

pub fn bench_biguint_mul(c: &mut Criterion) {
    let (a, b) = operands();
    let modulus = BigUint::from(1u8) << 256;

    c.bench_function("num_bigint::BigUint mul mod 2^256", |bench| {
        bench.iter(|| (black_box(&a) * black_box(&b)) % &modulus)
    });
}

pub fn bench_biguint_div_rem(c: &mut Criterion) {
    let (a, b) = operands();

    c.bench_function("num_bigint::BigUint div_rem 128-bit divisor", |bench| {
        bench.iter(|| {
            let q = black_box(&a) / black_box(&b);
            let r = black_box(&a) % black_box(&b);
            (q, r)
        })
    });
}

criterion_group!(benches, bench_biguint_mul, bench_biguint_div_rem);
criterion_main!(benches);
