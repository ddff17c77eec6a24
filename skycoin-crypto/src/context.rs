//! Caller-facing entry points bundled with their randomness and options.

use crate::{
    Digest, Error, Keypair, PublicKey, Result, SecretKey,
    address::{AddressKind, address_from_pubkey},
    derive::keypair_at_index,
    ecdh::{SharedSecret, shared_secret},
    ecdsa::{self, DEFAULT_SIGNING_ATTEMPTS, DigestMode, NonceSource, SIGNATURE_SIZE, Signature},
    firmware::{FirmwareSignatures, check_firmware},
    message,
};
use alloc::string::String;
use elliptic_curve::rand_core::CryptoRngCore;

#[cfg(feature = "rfc6979")]
use crate::ecdsa::Rfc6979Nonce;

/// Runtime options.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Options {
    /// Digest handling during public-key recovery.
    pub digest_mode: DigestMode,

    /// Nonces tried per signature.
    pub max_signing_attempts: u32,

    /// Highest derivation index accepted.
    pub max_index: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            digest_mode: DigestMode::default(),
            max_signing_attempts: DEFAULT_SIGNING_ATTEMPTS,
            max_index: u32::MAX,
        }
    }
}

/// Owns the random number generator used for point blinding, and the
/// options applied to every operation.
///
/// A context serves one operation at a time; callers sharing one across
/// threads must serialize access.
#[derive(Debug)]
pub struct Context<R> {
    rng: R,
    options: Options,
}

#[cfg(feature = "getrandom")]
impl Context<rand_core::OsRng> {
    /// Context backed by the operating system's random number generator.
    pub fn new() -> Self {
        Self::with_rng(rand_core::OsRng)
    }
}

#[cfg(feature = "getrandom")]
impl Default for Context<rand_core::OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CryptoRngCore> Context<R> {
    /// Context drawing randomness from `rng`, with default options.
    pub fn with_rng(rng: R) -> Self {
        Self::with_options(rng, Options::default())
    }

    /// Context drawing randomness from `rng`.
    pub fn with_options(rng: R, options: Options) -> Self {
        Self { rng, options }
    }

    /// Options in effect.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Derives the keypair at 1-based `index` of the chain rooted at
    /// `master_seed`.
    pub fn derive_keypair_at_index(&mut self, master_seed: &[u8], index: u32) -> Result<Keypair> {
        if index > self.options.max_index {
            return Err(Error::InvalidIndex);
        }
        keypair_at_index(master_seed, index, &mut self.rng)
    }

    /// Computes the public key of `secret`.
    pub fn public_key(&mut self, secret: &SecretKey) -> PublicKey {
        secret.public_key(&mut self.rng)
    }

    /// Signs `digest` with nonces drawn from `nonces`.
    pub fn sign_digest_with<N: NonceSource + ?Sized>(
        &mut self,
        secret: &SecretKey,
        digest: &Digest,
        nonces: &mut N,
    ) -> Result<[u8; SIGNATURE_SIZE]> {
        ecdsa::sign_digest_with_attempts(
            secret,
            digest,
            nonces,
            self.options.max_signing_attempts,
            &mut self.rng,
        )
        .map(|sig| sig.to_bytes())
    }

    /// Signs `digest` with RFC6979 nonces.
    #[cfg(feature = "rfc6979")]
    pub fn sign_digest(&mut self, secret: &SecretKey, digest: &Digest) -> Result<[u8; SIGNATURE_SIZE]> {
        self.sign_digest_with(secret, digest, &mut Rfc6979Nonce)
    }

    /// Recovers the public key behind a compact signature.
    pub fn recover_public_key(
        &mut self,
        signature: &[u8; SIGNATURE_SIZE],
        digest: &Digest,
    ) -> Result<PublicKey> {
        let signature = Signature::from_bytes(signature)?;
        ecdsa::recover_public_key(&signature, digest, self.options.digest_mode, &mut self.rng)
    }

    /// Renders the address of `public_key`.
    pub fn address_from_pubkey(&self, public_key: &PublicKey, kind: AddressKind) -> String {
        address_from_pubkey(public_key, kind)
    }

    /// Computes `SHA256(ecdh(secret, public))`.
    pub fn shared_secret(&mut self, secret: &SecretKey, public: &PublicKey) -> SharedSecret {
        shared_secret(secret, public, &mut self.rng)
    }

    /// Signs `SHA256(message)` with nonces drawn from `nonces`, rendering
    /// the signature in Base58.
    pub fn sign_message_with<N: NonceSource + ?Sized>(
        &mut self,
        secret: &SecretKey,
        message: &[u8],
        nonces: &mut N,
    ) -> Result<String> {
        self.sign_digest_with(secret, &Digest::of(message), nonces)
            .map(|sig| bs58::encode(sig).into_string())
    }

    /// Checks a Base58 message signature against a native address.
    pub fn verify_message_signature(
        &mut self,
        address: &str,
        message: &[u8],
        signature: &str,
    ) -> Result<()> {
        message::verify_message_signature(
            address,
            message,
            signature,
            self.options.digest_mode,
            &mut self.rng,
        )
    }

    /// Checks the maintainer signatures of a firmware image.
    pub fn check_firmware(
        &mut self,
        image: &[u8],
        signatures: &FirmwareSignatures,
    ) -> Result<Digest> {
        check_firmware(image, signatures, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::{Context, Options};
    use crate::{
        Digest, Error, PublicKey, SecretKey,
        address::AddressKind,
        ecdsa::{DigestMode, FixedNonce},
        test_vectors::{derive::DERIVE_TEST_VECTORS, ecdh::ECDH_TEST_VECTORS},
    };
    use hex_literal::hex;
    use rand_chacha::{ChaChaRng, rand_core::SeedableRng};

    fn context() -> Context<ChaChaRng> {
        Context::with_rng(ChaChaRng::from_seed([0x77; 32]))
    }

    #[test]
    fn default_options() {
        let ctx = context();
        assert_eq!(ctx.options().digest_mode, DigestMode::Legacy);
        assert_eq!(ctx.options().max_signing_attempts, 8);
        assert_eq!(ctx.options().max_index, u32::MAX);
    }

    #[test]
    fn derive_and_address() {
        let mut ctx = context();
        let keypair = ctx.derive_keypair_at_index(b"seed", 1).unwrap();
        assert_eq!(keypair.public_key().to_bytes(), DERIVE_TEST_VECTORS[0].public);
        assert_eq!(
            ctx.address_from_pubkey(keypair.public_key(), AddressKind::Native),
            "2EVNa4CK9SKosT4j1GEn8SuuUUEAXaHAMbM"
        );
    }

    #[test]
    fn max_index_is_enforced() {
        let options = Options {
            max_index: 3,
            ..Options::default()
        };
        let mut ctx = Context::with_options(ChaChaRng::from_seed([0x77; 32]), options);
        assert_eq!(ctx.derive_keypair_at_index(b"seed", 4), Err(Error::InvalidIndex));
        assert_eq!(ctx.derive_keypair_at_index(b"seed", 0), Err(Error::InvalidIndex));
    }

    #[test]
    fn sign_and_recover() {
        let mut ctx = context();
        let sk = SecretKey::from_bytes(&hex!(
            "597e27368656cab3c82bfcf2fb074cefd8b6101781a27709ba1b326b738d2c5a"
        ))
        .unwrap();
        let digest = Digest::from(hex!(
            "001aa9e416aff5f3a3c7f9ae0811757cf54f393d50df861f5c33747954341aa7"
        ));
        let sig = ctx
            .sign_digest_with(&sk, &digest, &mut FixedNonce::from_u32(0xfe25))
            .unwrap();
        let pk = ctx.recover_public_key(&sig, &digest).unwrap();
        assert_eq!(pk, ctx.public_key(&sk));
    }

    #[cfg(feature = "rfc6979")]
    #[test]
    fn sign_with_default_nonces() {
        let mut ctx = context();
        let sk = SecretKey::from_bytes(&[5; 32]).unwrap();
        let digest = Digest::of(b"rfc6979");
        let sig = ctx.sign_digest(&sk, &digest).unwrap();
        assert_eq!(ctx.sign_digest(&sk, &digest).unwrap(), sig);
    }

    #[test]
    fn shared_secret_is_symmetric() {
        let mut ctx = context();
        let vector = &ECDH_TEST_VECTORS[0];
        let sk = SecretKey::from_bytes(&vector.secret).unwrap();
        let pk = PublicKey::from_bytes(&vector.public).unwrap();
        let ours = ctx.shared_secret(&sk, &pk);

        let other = SecretKey::from_bytes(&[9; 32]).unwrap();
        let other_pk = ctx.public_key(&other);
        let a = ctx.shared_secret(&sk, &other_pk);
        let own_pk = ctx.public_key(&sk);
        let b = ctx.shared_secret(&other, &own_pk);
        assert_eq!(a.raw_secret_bytes(), b.raw_secret_bytes());
        assert_ne!(ours.raw_secret_bytes(), a.raw_secret_bytes());
    }

    #[test]
    fn message_round_trip() {
        let mut ctx = context();
        let sk = SecretKey::from_bytes(&[3; 32]).unwrap();
        let pk = ctx.public_key(&sk);
        let address = ctx.address_from_pubkey(&pk, AddressKind::Native);
        let sig = ctx
            .sign_message_with(&sk, b"round trip", &mut FixedNonce::from_u32(77))
            .unwrap();
        // SHA256("round trip") ends in 0x75, so legacy recovery leaves it as is
        assert_eq!(ctx.verify_message_signature(&address, b"round trip", &sig), Ok(()));
    }
}
