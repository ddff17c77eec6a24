//! Secret keys, public keys and keypairs.

use crate::{
    AffinePoint, COMPRESSED_POINT_SIZE, Error, Result, Scalar, UNCOMPRESSED_POINT_SIZE,
};
use core::fmt;
use elliptic_curve::{
    rand_core::CryptoRngCore,
    subtle::{Choice, ConstantTimeEq},
    zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing},
};

/// Size of a serialized secret key in bytes.
pub const SECRET_KEY_SIZE: usize = 32;

/// A secp256k1 secret key: a scalar in `[1, n - 1]`.
///
/// Wiped from memory on drop.
#[derive(Clone)]
pub struct SecretKey {
    inner: Scalar,
}

impl SecretKey {
    /// Parses a big-endian secret key, rejecting zero and values not below
    /// the group order.
    pub fn from_bytes(bytes: &[u8; SECRET_KEY_SIZE]) -> Result<Self> {
        let scalar = Scalar::from_bytes(bytes);
        let valid = scalar.is_some() & !scalar.unwrap_or(Scalar::ZERO).is_zero();
        if bool::from(valid) {
            Ok(Self {
                inner: scalar.unwrap_or(Scalar::ZERO),
            })
        } else {
            Err(Error::InvalidSecretKey)
        }
    }

    /// Parses a secret key from a slice which must be exactly 32 bytes long.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let bytes = Zeroizing::new(
            <[u8; SECRET_KEY_SIZE]>::try_from(slice).map_err(|_| Error::InvalidSecretKey)?,
        );
        Self::from_bytes(&bytes)
    }

    /// Generates a uniformly random secret key.
    pub fn random<R: CryptoRngCore + ?Sized>(rng: &mut R) -> Self {
        loop {
            let inner = Scalar::random(rng);
            if !bool::from(inner.is_zero()) {
                return Self { inner };
            }
        }
    }

    /// Serializes this key as big-endian bytes.
    pub fn to_bytes(&self) -> Zeroizing<[u8; SECRET_KEY_SIZE]> {
        Zeroizing::new(self.inner.to_bytes())
    }

    /// Borrows the underlying scalar.
    pub fn as_scalar(&self) -> &Scalar {
        &self.inner
    }

    /// Computes the public key `self * G`.
    pub fn public_key<R: CryptoRngCore + ?Sized>(&self, rng: &mut R) -> PublicKey {
        PublicKey {
            point: AffinePoint::mul_base(&self.inner, rng),
        }
    }
}

impl ConstantTimeEq for SecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.inner.ct_eq(&other.inner)
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SecretKey {}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl ZeroizeOnDrop for SecretKey {}

impl TryFrom<&[u8]> for SecretKey {
    type Error = Error;

    fn try_from(slice: &[u8]) -> Result<Self> {
        Self::from_slice(slice)
    }
}

/// A secp256k1 public key: a finite point on the curve.
#[derive(Clone, Copy, Debug)]
pub struct PublicKey {
    point: AffinePoint,
}

impl PublicKey {
    /// Wraps a point, rejecting the identity and points off the curve.
    pub fn from_affine(point: AffinePoint) -> Result<Self> {
        if bool::from(point.is_valid()) {
            Ok(Self { point })
        } else {
            Err(Error::InvalidPublicKey)
        }
    }

    /// Parses a 33-byte compressed public key.
    pub fn from_bytes(bytes: &[u8; COMPRESSED_POINT_SIZE]) -> Result<Self> {
        Option::<AffinePoint>::from(AffinePoint::from_compressed(bytes))
            .ok_or(Error::InvalidPublicKey)
            .and_then(Self::from_affine)
    }

    /// Parses a SEC1-encoded public key, either compressed (33 bytes) or
    /// uncompressed (65 bytes).
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        let point = match bytes.len() {
            COMPRESSED_POINT_SIZE => {
                let mut buf = [0u8; COMPRESSED_POINT_SIZE];
                buf.copy_from_slice(bytes);
                AffinePoint::from_compressed(&buf)
            }
            UNCOMPRESSED_POINT_SIZE => {
                let mut buf = [0u8; UNCOMPRESSED_POINT_SIZE];
                buf.copy_from_slice(bytes);
                AffinePoint::from_uncompressed(&buf)
            }
            _ => return Err(Error::InvalidPublicKey),
        };
        Option::<AffinePoint>::from(point)
            .ok_or(Error::InvalidPublicKey)
            .and_then(Self::from_affine)
    }

    /// Borrows the underlying point.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }

    /// Compressed SEC1 encoding.
    pub fn to_bytes(&self) -> [u8; COMPRESSED_POINT_SIZE] {
        self.point.to_compressed()
    }

    /// Uncompressed SEC1 encoding.
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_POINT_SIZE] {
        self.point.to_uncompressed()
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl Eq for PublicKey {}

impl From<PublicKey> for AffinePoint {
    fn from(public_key: PublicKey) -> AffinePoint {
        public_key.point
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_sec1_bytes(bytes)
    }
}

/// A secret key together with its public key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Keypair {
    secret: SecretKey,
    public: PublicKey,
}

impl Keypair {
    /// Derives the public half of `secret`.
    pub fn new<R: CryptoRngCore + ?Sized>(secret: SecretKey, rng: &mut R) -> Self {
        let public = secret.public_key(rng);
        Self { secret, public }
    }

    /// Secret half.
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret
    }

    /// Public half.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Splits into secret and public halves.
    pub fn into_parts(self) -> (SecretKey, PublicKey) {
        (self.secret, self.public)
    }
}

#[cfg(test)]
mod tests {
    use super::{Keypair, PublicKey, SecretKey};
    use crate::{AffinePoint, Error};
    use hex_literal::hex;
    use rand_chacha::{ChaChaRng, rand_core::SeedableRng};

    #[test]
    fn secret_key_range() {
        assert_eq!(SecretKey::from_bytes(&[0; 32]), Err(Error::InvalidSecretKey));
        assert_eq!(
            SecretKey::from_bytes(&hex!(
                "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"
            )),
            Err(Error::InvalidSecretKey)
        );
        assert!(
            SecretKey::from_bytes(&hex!(
                "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140"
            ))
            .is_ok()
        );
        assert_eq!(SecretKey::from_slice(&[1; 31]), Err(Error::InvalidSecretKey));
    }

    #[test]
    fn secret_key_debug_is_redacted() {
        let sk = SecretKey::from_bytes(&[0x11; 32]).unwrap();
        assert_eq!(alloc::format!("{:?}", sk), "SecretKey { .. }");
    }

    #[test]
    fn public_key_vectors() {
        let mut rng = ChaChaRng::from_seed([0; 32]);
        for (sk, pk) in [
            (
                hex!("a7e130694166cdb95b1e1bbce3f21e4dbd63f46df42b48c5a1f8295033d57d04"),
                hex!("0244350faa76799fec03de2f324acd077fd1b686c3a89babc0ef47096ccc5a13fa"),
            ),
            (
                hex!("c89b70a1f7b960c08068de9f2d3b32287833b26372935aa5042f7cc1dc985335"),
                hex!("03b17c7b7c564385be66f9c1b9da6a0b5aea56f0cb70548e6528a2f4f7b27245d8"),
            ),
        ] {
            let keypair = Keypair::new(SecretKey::from_bytes(&sk).unwrap(), &mut rng);
            assert_eq!(keypair.public_key().to_bytes(), pk);
            assert_eq!(*keypair.secret_key().to_bytes(), sk);
        }
    }

    #[test]
    fn public_key_parsing() {
        let compressed = hex!("0244350faa76799fec03de2f324acd077fd1b686c3a89babc0ef47096ccc5a13fa");
        let pk = PublicKey::from_bytes(&compressed).unwrap();
        assert_eq!(PublicKey::from_sec1_bytes(&pk.to_uncompressed()).unwrap(), pk);
        assert_eq!(PublicKey::from_sec1_bytes(&compressed[..32]), Err(Error::InvalidPublicKey));
        assert_eq!(
            PublicKey::from_affine(AffinePoint::IDENTITY),
            Err(Error::InvalidPublicKey)
        );

        let mut bad_tag = compressed;
        bad_tag[0] = 0x05;
        assert_eq!(PublicKey::from_bytes(&bad_tag), Err(Error::InvalidPublicKey));
    }
}
