//! Elliptic Curve Digital Signature Algorithm (ECDSA) with public-key recovery.
//!
//! Signatures are 65 bytes: `r || s || v`, where `v` is a [`RecoveryId`]
//! identifying which of up to four candidate points was the ephemeral
//! point `k * G`. Signatures are always produced in low-`s` form.
//!
//! ## Signing/Recovery Example
//!
//! ```
//! use skycoin_crypto::{Digest, SecretKey, ecdsa::{self, DigestMode, FixedNonce}};
//! use rand_core::OsRng; // requires 'getrandom' feature
//!
//! let secret = SecretKey::random(&mut OsRng);
//! let digest = Digest::of(b"example message");
//!
//! let signature = ecdsa::sign_digest(&secret, &digest, &mut FixedNonce::from_u32(0xfe25), &mut OsRng)?;
//! let signer = ecdsa::recover_public_key(&signature, &digest, DigestMode::Standard, &mut OsRng)?;
//!
//! assert_eq!(signer, secret.public_key(&mut OsRng));
//! # Ok::<(), skycoin_crypto::Error>(())
//! ```

mod nonce;
mod recover;
mod sign;

pub use self::{
    nonce::{FixedNonce, NonceSource, RandomNonce},
    recover::recover_public_key,
    sign::{DEFAULT_SIGNING_ATTEMPTS, sign_digest, sign_digest_with_attempts, sign_digest_with_nonce},
};

#[cfg(feature = "rfc6979")]
pub use self::nonce::Rfc6979Nonce;

use crate::{Error, Result, Scalar};
use alloc::string::String;
use elliptic_curve::subtle::ConditionallySelectable;

/// Size of a compact recoverable signature in bytes.
pub const SIGNATURE_SIZE: usize = 65;

/// How the digest is turned into an integer during public-key recovery.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DigestMode {
    /// Trailing zero bytes of the digest are shifted out before use.
    ///
    /// This is how existing wallets and firmware images check signatures,
    /// and it differs from what the signer used whenever the digest ends in
    /// a zero byte.
    #[default]
    Legacy,

    /// The digest is used as-is, matching what the signer used.
    Standard,
}

/// Recovery identifier: bit 0 is the parity of the ephemeral point's
/// y-coordinate, bit 1 is set when its x-coordinate was reduced modulo the
/// group order to obtain `r`.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct RecoveryId(u8);

impl RecoveryId {
    /// Maximum supported value for the recovery ID (inclusive).
    pub const MAX: u8 = 3;

    /// Create a new [`RecoveryId`] from its two flags.
    pub const fn new(is_y_odd: bool, is_x_reduced: bool) -> Self {
        Self((is_x_reduced as u8) << 1 | (is_y_odd as u8))
    }

    /// Is the y-coordinate of the ephemeral point odd?
    pub const fn is_y_odd(self) -> bool {
        (self.0 & 1) != 0
    }

    /// Was the x-coordinate of the ephemeral point reduced to obtain `r`?
    pub const fn is_x_reduced(self) -> bool {
        (self.0 & 0b10) != 0
    }

    /// Convert a `u8` into a [`RecoveryId`].
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte <= Self::MAX {
            Some(Self(byte))
        } else {
            None
        }
    }

    /// Convert this [`RecoveryId`] into a `u8`.
    pub const fn to_byte(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for RecoveryId {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self> {
        Self::from_byte(byte).ok_or(Error::InvalidRecoveryId)
    }
}

impl From<RecoveryId> for u8 {
    fn from(id: RecoveryId) -> u8 {
        id.0
    }
}

/// A compact recoverable ECDSA/secp256k1 signature.
///
/// Both `r` and `s` lie in `[1, n - 1]`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Signature {
    r: Scalar,
    s: Scalar,
    recovery_id: RecoveryId,
}

impl Signature {
    /// Builds a signature from its components, rejecting zero scalars.
    pub fn from_scalars(r: Scalar, s: Scalar, recovery_id: RecoveryId) -> Result<Self> {
        if bool::from(r.is_zero() | s.is_zero()) {
            return Err(Error::InvalidSignature);
        }
        Ok(Self { r, s, recovery_id })
    }

    /// Parses `r || s || v`.
    pub fn from_bytes(bytes: &[u8; SIGNATURE_SIZE]) -> Result<Self> {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);

        let r = Option::<Scalar>::from(Scalar::from_bytes(&r)).ok_or(Error::InvalidSignature)?;
        let s = Option::<Scalar>::from(Scalar::from_bytes(&s)).ok_or(Error::InvalidSignature)?;
        let recovery_id = RecoveryId::try_from(bytes[64])?;
        Self::from_scalars(r, s, recovery_id)
    }

    /// Parses a slice which must be exactly 65 bytes long.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let bytes = <&[u8; SIGNATURE_SIZE]>::try_from(slice).map_err(|_| Error::InvalidSignature)?;
        Self::from_bytes(bytes)
    }

    /// Parses the Base58 rendering of a signature.
    pub fn from_base58(s: &str) -> Result<Self> {
        let bytes = bs58::decode(s).into_vec()?;
        Self::from_slice(&bytes)
    }

    /// Serializes as `r || s || v`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut bytes = [0u8; SIGNATURE_SIZE];
        bytes[..32].copy_from_slice(&self.r.to_bytes());
        bytes[32..64].copy_from_slice(&self.s.to_bytes());
        bytes[64] = self.recovery_id.to_byte();
        bytes
    }

    /// Renders the serialized signature in Base58.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.to_bytes()).into_string()
    }

    /// The `r` component.
    pub fn r(&self) -> Scalar {
        self.r
    }

    /// The `s` component.
    pub fn s(&self) -> Scalar {
        self.s
    }

    /// The recovery identifier.
    pub fn recovery_id(&self) -> RecoveryId {
        self.recovery_id
    }

    /// Is `s` at most `n / 2`?
    pub fn is_low_s(&self) -> bool {
        !bool::from(self.s.is_high())
    }

    /// Normalize signature into "low S" form as described in
    /// [BIP 0062: Dealing with Malleability][1].
    ///
    /// Negating `s` corresponds to negating the ephemeral point, so the
    /// y-parity bit of the recovery identifier is flipped along with it.
    ///
    /// [1]: https://github.com/bitcoin/bips/blob/master/bip-0062.mediawiki
    pub fn normalize_s(&self) -> Self {
        let high = self.s.is_high();
        let s = Scalar::conditional_select(&self.s, &-self.s, high);
        let recovery_id = RecoveryId::new(
            self.recovery_id.is_y_odd() ^ bool::from(high),
            self.recovery_id.is_x_reduced(),
        );
        Self {
            r: self.r,
            s,
            recovery_id,
        }
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(slice: &[u8]) -> Result<Self> {
        Self::from_slice(slice)
    }
}

impl From<Signature> for [u8; SIGNATURE_SIZE] {
    fn from(signature: Signature) -> [u8; SIGNATURE_SIZE] {
        signature.to_bytes()
    }
}
