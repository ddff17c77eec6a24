#![no_main]
// Recovers public keys from arbitrary signatures and digests
use libfuzzer_sys::fuzz_target;
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};
use skycoin_crypto::{
    Digest,
    ecdsa::{DigestMode, Signature, recover_public_key},
    firmware::{FirmwareSignatures, check_firmware_digest},
};

fuzz_target!(|data: &[u8]| {
    if data.len() < 97 {
        return;
    }

    let mut rng = ChaChaRng::from_seed([0; 32]);
    let digest = Digest::from_slice(&data[..32]).unwrap();

    let Ok(sig) = Signature::from_slice(&data[32..97]) else {
        return;
    };
    assert_eq!(Signature::from_bytes(&sig.to_bytes()), Ok(sig));

    for mode in [DigestMode::Legacy, DigestMode::Standard] {
        if let Ok(pk) = recover_public_key(&sig, &digest, mode, &mut rng) {
            assert!(bool::from(pk.as_affine().is_valid()));
        }
    }

    let firmware = FirmwareSignatures {
        indices: [data[0], data[1], data[2]],
        signatures: [sig.to_bytes(); 3],
    };
    // Three identical signatures can never name three distinct keys
    assert!(check_firmware_digest(&digest, &firmware, &mut rng).is_err());
});
