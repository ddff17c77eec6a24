//! ECDSA signing and recovery benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use hex_literal::hex;
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};
use skycoin_crypto::{
    Digest, SecretKey,
    ecdsa::{DigestMode, FixedNonce, Rfc6979Nonce, recover_public_key, sign_digest},
};
use std::hint::black_box;

fn test_secret_key() -> SecretKey {
    SecretKey::from_bytes(&hex!(
        "bb488aef416a41d7680d1cf01d70f59b60d7f5f77e30e78b8bf9d2d882f156a6"
    ))
    .unwrap()
}

fn test_digest() -> Digest {
    Digest::from(hex!(
        "e33580eb6ed022aed6af20d92237635e7c20c5f1bcd6aee88182ed7180f6e267"
    ))
}

fn bench_ecdsa(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa");
    let mut rng = ChaChaRng::from_seed([0; 32]);

    let d = test_secret_key();
    let z = test_digest();

    group.bench_function("sign_digest fixed nonce", |b| {
        b.iter(|| {
            sign_digest(
                black_box(&d),
                &black_box(z),
                &mut FixedNonce::from_u32(0xfe25),
                &mut rng,
            )
            .unwrap()
        })
    });

    group.bench_function("sign_digest rfc6979", |b| {
        b.iter(|| sign_digest(black_box(&d), &black_box(z), &mut Rfc6979Nonce, &mut rng).unwrap())
    });

    let s = sign_digest(&d, &z, &mut Rfc6979Nonce, &mut rng).unwrap();

    group.bench_function("recover_public_key", |b| {
        b.iter(|| {
            recover_public_key(&black_box(s), &black_box(z), DigestMode::Legacy, &mut rng).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_ecdsa);
criterion_main!(benches);
