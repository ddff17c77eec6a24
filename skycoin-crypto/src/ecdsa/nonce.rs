//! Nonce sources for signing.

use crate::{Digest, Scalar, SecretKey};
use elliptic_curve::{
    rand_core::CryptoRngCore,
    zeroize::{Zeroize, ZeroizeOnDrop},
};

#[cfg(feature = "rfc6979")]
use {
    crate::ORDER,
    elliptic_curve::{
        bigint::Encoding,
        generic_array::{GenericArray, typenum::U32},
        zeroize::Zeroizing,
    },
    sha2::Sha256,
};

/// Supplies the ephemeral scalar `k` for each signing attempt.
///
/// Signing asks for a fresh nonce whenever the previous one produced a zero
/// `r` or `s`. Returning `None` ends the attempts.
pub trait NonceSource {
    /// Nonce for the given zero-based attempt.
    fn nonce(&mut self, secret: &SecretKey, digest: &Digest, attempt: u32) -> Option<Scalar>;
}

/// A single caller-chosen nonce.
///
/// Reproduces signatures made by firmware that takes the nonce from its
/// caller. A nonce must never be reused with a different digest under the
/// same key: two such signatures reveal the key.
pub struct FixedNonce(Scalar);

impl FixedNonce {
    /// Uses `k` as the nonce.
    pub fn new(k: Scalar) -> Self {
        Self(k)
    }

    /// Uses a small integer as the nonce.
    pub fn from_u32(k: u32) -> Self {
        Self(Scalar::from_u64(k.into()))
    }
}

impl NonceSource for FixedNonce {
    fn nonce(&mut self, _secret: &SecretKey, _digest: &Digest, attempt: u32) -> Option<Scalar> {
        (attempt == 0).then_some(self.0)
    }
}

impl Drop for FixedNonce {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl ZeroizeOnDrop for FixedNonce {}

/// Deterministic nonces as described in [RFC6979 § 3.2], using
/// HMAC-SHA256.
///
/// Attempts after the first feed the attempt number in as additional data
/// (RFC6979 § 3.6), so each retry draws an unrelated nonce.
///
/// [RFC6979 § 3.2]: https://tools.ietf.org/html/rfc6979#section-3
#[cfg(feature = "rfc6979")]
#[derive(Clone, Copy, Debug, Default)]
pub struct Rfc6979Nonce;

#[cfg(feature = "rfc6979")]
impl NonceSource for Rfc6979Nonce {
    fn nonce(&mut self, secret: &SecretKey, digest: &Digest, attempt: u32) -> Option<Scalar> {
        let mut x = GenericArray::<u8, U32>::clone_from_slice(&*secret.to_bytes());
        let n = GenericArray::<u8, U32>::clone_from_slice(&ORDER.to_be_bytes());
        let h = GenericArray::<u8, U32>::clone_from_slice(&digest.to_scalar().to_bytes());

        let counter = attempt.to_be_bytes();
        let data: &[u8] = if attempt == 0 { &[] } else { &counter };

        let mut k = rfc6979::generate_k::<Sha256, U32>(&x, &n, &h, data);
        x.as_mut_slice().zeroize();

        let mut bytes = Zeroizing::new([0u8; 32]);
        bytes.copy_from_slice(&k);
        k.as_mut_slice().zeroize();
        Scalar::from_bytes(&bytes).into()
    }
}

/// Nonces drawn from a cryptographically secure random number generator.
pub struct RandomNonce<R> {
    rng: R,
}

impl<R: CryptoRngCore> RandomNonce<R> {
    /// Draws nonces from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: CryptoRngCore> NonceSource for RandomNonce<R> {
    fn nonce(&mut self, _secret: &SecretKey, _digest: &Digest, _attempt: u32) -> Option<Scalar> {
        Some(Scalar::random(&mut self.rng))
    }
}
