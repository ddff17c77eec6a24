//! Elliptic Curve Diffie-Hellman.
//!
//! The shared point `d * Q` is exchanged in compressed form; the shared
//! secret handed to callers is the SHA-256 of those 33 bytes.

use crate::{AffinePoint, COMPRESSED_POINT_SIZE, PublicKey, Scalar, SecretKey, hash::sha256};
use elliptic_curve::{
    rand_core::CryptoRngCore,
    zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing},
};

/// Computes the compressed shared point `secret * public`.
///
/// The bytes are wiped when the returned buffer is dropped.
pub fn ecdh<R: CryptoRngCore + ?Sized>(
    secret: &SecretKey,
    public: &PublicKey,
    rng: &mut R,
) -> Zeroizing<[u8; COMPRESSED_POINT_SIZE]> {
    shared_point(secret.as_scalar(), public.as_affine(), rng)
}

/// Computes `SHA256(ecdh(secret, public))`.
pub fn shared_secret<R: CryptoRngCore + ?Sized>(
    secret: &SecretKey,
    public: &PublicKey,
    rng: &mut R,
) -> SharedSecret {
    let point = ecdh(secret, public, rng);
    SharedSecret(sha256(&*point))
}

/// `k * p` in compressed form, for multipliers that are not full secret keys.
pub(crate) fn shared_point<R: CryptoRngCore + ?Sized>(
    k: &Scalar,
    p: &AffinePoint,
    rng: &mut R,
) -> Zeroizing<[u8; COMPRESSED_POINT_SIZE]> {
    Zeroizing::new(p.mul(k, rng).to_compressed())
}

/// Shared secret value computed via ECDH key agreement.
pub struct SharedSecret([u8; 32]);

impl SharedSecret {
    /// Shared secret value.
    ///
    /// Uniformly distributed only to the extent SHA-256 is a random oracle;
    /// feed it through a KDF before keying a cipher with it.
    pub fn raw_secret_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl ZeroizeOnDrop for SharedSecret {}
