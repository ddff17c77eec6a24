//! ECDSA signing and recovery tests

use hex_literal::hex;
use proptest::prelude::*;
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};
use skycoin_crypto::{
    Context, Digest, Options, SecretKey,
    ecdsa::{DigestMode, FixedNonce, RandomNonce, Signature, recover_public_key, sign_digest},
    firmware::{FirmwareSignatures, check_firmware_digest},
    message::{sign_message, verify_message_signature},
};

const SECRET: [u8; 32] = hex!("597e27368656cab3c82bfcf2fb074cefd8b6101781a27709ba1b326b738d2c5a");
const DIGEST: [u8; 32] = hex!("001aa9e416aff5f3a3c7f9ae0811757cf54f393d50df861f5c33747954341aa7");

fn rng() -> ChaChaRng {
    ChaChaRng::from_seed([0xec; 32])
}

#[test]
fn sign_with_explicit_nonce() {
    let sk = SecretKey::from_bytes(&SECRET).unwrap();
    let sig = sign_digest(&sk, &Digest::from(DIGEST), &mut FixedNonce::from_u32(0xfe25), &mut rng())
        .unwrap();
    assert_eq!(
        sig.to_bytes(),
        hex!(
            "ee38f27be5f3c4b8db875c0ffbc0232e93f622d16ede888508a4920ab51c3c99"
            "06ea7426c5e251e4bea76f06f554fa7798a49b7968b400fa981c51531a5748d8"
            "01"
        )
    );
}

#[test]
fn recover_zero_padded_message() {
    let sig = Signature::from_bytes(&hex!(
        "abc30130e2d9561fa8eb9871b75b13100689937dfc41c98d611b985ca25258c9"
        "60be25c0b45874e1255f053863f6e175300d7e788d8b93d6dcfa9377120e4d35"
        "00"
    ))
    .unwrap();
    let digest = Digest::from(hex!(
        "48656c6c6f20576f726c64210000000000000000000000000000000000000000"
    ));
    let pk = recover_public_key(&sig, &digest, DigestMode::Legacy, &mut rng()).unwrap();
    assert_eq!(
        pk.to_bytes(),
        hex!("02e5be89fa161bf6b0bc64ec9ec7fe27311fbb78949c3ef9739d4c73a84920d6e1")
    );

    let mut ctx = Context::with_rng(rng());
    assert_eq!(ctx.recover_public_key(&sig.to_bytes(), &digest), Ok(pk));

    let standard = Options {
        digest_mode: DigestMode::Standard,
        ..Options::default()
    };
    let mut ctx = Context::with_options(rng(), standard);
    assert_ne!(ctx.recover_public_key(&sig.to_bytes(), &digest), Ok(pk));
}

#[test]
fn message_signature() {
    let sk = SecretKey::from_bytes(&DIGEST).unwrap();
    let sig = sign_message(&sk, b"Hello World!", &mut FixedNonce::from_u32(0x1234), &mut rng())
        .unwrap();
    assert_eq!(
        sig,
        "5uoDbC8DJ8cpgN4ABFKkF7M2Dk9hijZY74w2Ums3C4gzryza2bULW3i3aHDBWp5VnDD3VMfSoURm9zPFndMK4L8jR"
    );
    assert!(
        verify_message_signature(
            "2EVNa4CK9SKosT4j1GEn8SuuUUEAXaHAMbM",
            b"Hello World!",
            &sig,
            DigestMode::Legacy,
            &mut rng()
        )
        .is_ok()
    );
}

#[test]
fn firmware_signatures() {
    let digest = Digest::from_hex("176b81623cf98f45879f3a48fa34af77dde44b2ffa0ddd2bf9edb386f76ec0ef")
        .unwrap();
    let signatures = FirmwareSignatures {
        indices: [5, 4, 3],
        signatures: [
            hex!(
                "864c6abf85214be99fed3dc37591a74282f566fb52fb56ab21dabc0d120f29b8"
                "48ffeb52a7843a49c411753c0edc12c0dedf6313266722bee982a0d3b384b626"
                "00"
            ),
            hex!(
                "631182b9722489eedd1a9eab36bf776c3e679aa2b1bd3fb346db0f776b982be2"
                "5bdd33d4e893aca619eff3013e087307d22ca30644c96ea0fbdef06396d1bf96"
                "00"
            ),
            hex!(
                "d2a8ec2b29ce3cf3e6048296188adff4b5dfcb337c1d1157f28654e445bb940b"
                "4e47d6b0c7ba43d072bf8618775f123a435e8d1a150cb39bbb1aa80da8c57ea1"
                "00"
            ),
        ],
    };
    assert!(check_firmware_digest(&digest, &signatures, &mut rng()).is_ok());
}

prop_compose! {
    fn secret_key()(bytes in any::<[u8; 32]>()) -> SecretKey {
        SecretKey::from_bytes(&bytes).unwrap_or_else(|_| SecretKey::from_bytes(&SECRET).unwrap())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn sign_and_recover(sk in secret_key(), message in any::<Vec<u8>>(), seed in any::<[u8; 32]>()) {
        let mut rng = rng();
        let digest = Digest::of(&message);
        let mut nonces = RandomNonce::new(ChaChaRng::from_seed(seed));
        let sig = sign_digest(&sk, &digest, &mut nonces, &mut rng).unwrap();
        prop_assert!(sig.is_low_s());

        let pk = recover_public_key(&sig, &digest, DigestMode::Standard, &mut rng).unwrap();
        prop_assert_eq!(pk, sk.public_key(&mut rng));
    }

    #[test]
    fn tampered_signature_recovers_other_key(sk in secret_key(), byte in 32usize..64, bit in 0usize..8) {
        let mut rng = rng();
        let digest = Digest::of(b"tamper");
        let mut bytes = sign_digest(&sk, &digest, &mut FixedNonce::from_u32(0x5eed), &mut rng)
            .unwrap()
            .to_bytes();
        bytes[byte] ^= 1 << bit;

        if let Ok(sig) = Signature::from_bytes(&bytes) {
            let recovered = recover_public_key(&sig, &digest, DigestMode::Standard, &mut rng);
            prop_assert_ne!(recovered, Ok(sk.public_key(&mut rng)));
        }
    }
}
