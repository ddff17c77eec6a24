//! Chained key derivation tests

use hex_literal::hex;
use proptest::prelude::*;
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};
use skycoin_crypto::{
    Context, Error, Options,
    address::{AddressKind, address_from_pubkey},
    derive::{KeypairChain, keypair_at_index, keypair_from_seed},
};

fn rng() -> ChaChaRng {
    ChaChaRng::from_seed([0xd1; 32])
}

#[test]
fn first_keypairs_of_text_seed() {
    let mut rng = rng();
    let first = keypair_at_index(b"seed", 1, &mut rng).unwrap();
    assert_eq!(
        first.public_key().to_bytes(),
        hex!("02e5be89fa161bf6b0bc64ec9ec7fe27311fbb78949c3ef9739d4c73a84920d6e1")
    );
    assert_eq!(
        address_from_pubkey(first.public_key(), AddressKind::Native),
        "2EVNa4CK9SKosT4j1GEn8SuuUUEAXaHAMbM"
    );

    let second = keypair_at_index(b"seed", 2, &mut rng).unwrap();
    assert_eq!(
        *second.secret_key().to_bytes(),
        hex!("cc6c6e2581053dc6b405e460513ed2f0b59557ba60120d89c064287502cb3955")
    );
    assert_eq!(
        address_from_pubkey(second.public_key(), AddressKind::Native),
        "68enNSvabNYLf97xhb19vmLrrG3yqXPmkV"
    );
}

#[test]
fn skycoin5_seed() {
    let (next_seed, keypair) = keypair_from_seed(b"skycoin5", &mut rng()).unwrap();
    assert_ne!(*next_seed, [0u8; 32]);
    let again = keypair_at_index(b"skycoin5", 1, &mut rng()).unwrap();
    assert_eq!(keypair, again);
}

#[test]
fn chain_matches_indexing() {
    let mut rng = rng();
    let chain: Vec<_> = KeypairChain::new(b"random_seed", &mut rng)
        .take(4)
        .collect::<Result<_, _>>()
        .unwrap();

    for (i, keypair) in chain.iter().enumerate() {
        let indexed = keypair_at_index(b"random_seed", i as u32 + 1, &mut rng).unwrap();
        assert_eq!(&indexed, keypair);
    }
}

#[test]
fn context_bounds_index() {
    let options = Options {
        max_index: 2,
        ..Options::default()
    };
    let mut ctx = Context::with_options(rng(), options);
    assert!(ctx.derive_keypair_at_index(b"seed", 2).is_ok());
    assert_eq!(ctx.derive_keypair_at_index(b"seed", 3), Err(Error::InvalidIndex));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn derivation_is_deterministic(seed in proptest::collection::vec(any::<u8>(), 1..64), blind in any::<[u8; 32]>()) {
        let a = keypair_at_index(&seed, 2, &mut rng()).unwrap();
        let b = keypair_at_index(&seed, 2, &mut ChaChaRng::from_seed(blind)).unwrap();
        prop_assert_eq!(&a, &b);

        let c = keypair_at_index(&seed, 3, &mut rng()).unwrap();
        prop_assert_ne!(a, c);
    }
}
