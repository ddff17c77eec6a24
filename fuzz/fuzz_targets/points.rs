#![no_main]
// Decodes points and checks the group law on whatever parses
use libfuzzer_sys::fuzz_target;
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};
use skycoin_crypto::{AffinePoint, PublicKey, Scalar};

fn test_group(p1: AffinePoint, p2: AffinePoint, s: Scalar, rng: &mut ChaChaRng) {
    // Test that addition and doubling are consistent
    assert_eq!(p1.double(), p1.add(&p1));

    // Test that negation works correctly
    let sum = p1.add(&p2);
    assert!(bool::from(sum.add(&-sum).is_identity()));

    // Test scalar multiplication distributive property
    let scalar_mul = p1.mul(&s, rng);
    assert_eq!(scalar_mul.add(&scalar_mul), p1.mul(&(s + s), rng));
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 164 {
        return;
    }

    let mut rng = ChaChaRng::from_seed(data[0..32].try_into().unwrap());

    let p1 = Option::<AffinePoint>::from(AffinePoint::from_compressed(
        &data[32..65].try_into().unwrap(),
    ))
    .unwrap_or(AffinePoint::GENERATOR);
    let p2 = Option::<AffinePoint>::from(AffinePoint::from_uncompressed(
        &data[65..130].try_into().unwrap(),
    ))
    .unwrap_or(AffinePoint::GENERATOR.double());

    // Anything that parses must round-trip and be a valid public key
    if let Ok(pk) = PublicKey::from_sec1_bytes(&data[32..32 + usize::from(data[0] & 0x7f).min(65)]) {
        assert_eq!(PublicKey::from_bytes(&pk.to_bytes()), Ok(pk));
        assert!(bool::from(pk.as_affine().is_valid()));
    }

    let s = Scalar::reduce_bytes(&data[130..162].try_into().unwrap());
    test_group(p1, p2, s, &mut rng);
});
