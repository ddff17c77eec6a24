//! SHA-256 helpers and the 32-byte message digest type.

use crate::{Error, Result, Scalar};
use sha2::{Digest as _, Sha256};

/// Size of a SHA-256 digest in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Computes `SHA256(data)`.
pub fn sha256(data: &[u8]) -> [u8; DIGEST_SIZE] {
    Sha256::digest(data).into()
}

/// Computes `SHA256(SHA256(data))`.
pub fn sha256d(data: &[u8]) -> [u8; DIGEST_SIZE] {
    sha256(&sha256(data))
}

/// Computes `SHA256(a || b)` without materializing the concatenation.
pub(crate) fn sha256_concat(a: &[u8], b: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut hasher = Sha256::new();
    hasher.update(a);
    hasher.update(b);
    hasher.finalize().into()
}

/// Is `s` exactly 64 hexadecimal characters?
pub fn is_digest(s: &str) -> bool {
    s.len() == 2 * DIGEST_SIZE && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// A 32-byte message digest, the input to signing and recovery.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// Wraps raw digest bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    /// Wraps a slice which must be exactly 32 bytes long.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        <[u8; DIGEST_SIZE]>::try_from(slice)
            .map(Self)
            .map_err(|_| Error::InvalidDigest)
    }

    /// Parses a digest supplied as 64 hexadecimal characters.
    pub fn from_hex(s: &str) -> Result<Self> {
        if !is_digest(s) {
            return Err(Error::InvalidDigest);
        }
        let mut bytes = [0u8; DIGEST_SIZE];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| Error::InvalidDigest)?;
        Ok(Self(bytes))
    }

    /// Hashes a message with SHA-256.
    pub fn of(message: &[u8]) -> Self {
        Self(sha256(message))
    }

    /// Digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Digest as an integer reduced modulo the group order.
    pub(crate) fn to_scalar(self) -> Scalar {
        Scalar::reduce_bytes(&self.0)
    }

    /// Digest with trailing zero bytes shifted out, as an integer reduced
    /// modulo the group order.
    ///
    /// Signatures produced by existing wallets are checked against this
    /// value: while the integer is nonzero and its least significant byte is
    /// zero, it is shifted right by eight bits. Signing never applies it.
    pub(crate) fn to_scalar_stripped(self) -> Scalar {
        let zeros = self.0.iter().rev().take_while(|&&b| b == 0).count();
        if zeros == DIGEST_SIZE {
            return Scalar::ZERO;
        }

        let mut shifted = [0u8; DIGEST_SIZE];
        shifted[zeros..].copy_from_slice(&self.0[..DIGEST_SIZE - zeros]);
        Scalar::reduce_bytes(&shifted)
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Digest, is_digest, sha256, sha256d};
    use crate::{Error, Scalar};
    use hex_literal::hex;

    #[test]
    fn sha256_vectors() {
        assert_eq!(
            sha256(b"seed"),
            hex!("19b25856e1c150ca834cffc8b59b23adbd0ec0389e58eb22b3b64768098d002b")
        );
        assert_eq!(
            sha256(b"random_seed"),
            hex!("7b491face15c5be43df3affe42e6e4aab48522a3b564043de464e8de50184a5d")
        );
        assert_eq!(
            sha256(b"024f7fd15da6c7fc7d0410d184073ef702104f82452da9b3e3792db01a8b7907c3"),
            hex!("a5daa8c9d03a9ec500088bdf0123a9d865725b03895b1291f25500737298e0a9")
        );
    }

    #[test]
    fn sha256d_is_nested() {
        assert_eq!(sha256d(b"seed"), sha256(&sha256(b"seed")));
    }

    #[test]
    fn digest_strings() {
        assert!(is_digest(
            "02df09821cff4874198a1dbdc462d224bd99728eeed024185879225762376132"
        ));
        // too short
        assert!(!is_digest(
            "02df09821cff4874198a1dbdc462d224bd99728eeed0241858792257623761"
        ));
        // too long
        assert!(!is_digest(
            "02df09821cff4874198a1dbdc462d224bd99728eeed0241858792257623761256"
        ));
        // non hex digits
        assert!(!is_digest(
            "02df09821cff4874198a1dbdc462d224bd99728eeed0241858792257623761r"
        ));
    }

    #[test]
    fn from_hex() {
        let digest =
            Digest::from_hex("001aa9e416aff5f3a3c7f9ae0811757cf54f393d50df861f5c33747954341aa7")
                .unwrap();
        assert_eq!(
            digest.as_bytes(),
            &hex!("001aa9e416aff5f3a3c7f9ae0811757cf54f393d50df861f5c33747954341aa7")
        );
        assert_eq!(Digest::from_hex("00"), Err(Error::InvalidDigest));
        assert_eq!(Digest::from_slice(&[0u8; 31]), Err(Error::InvalidDigest));
    }

    #[test]
    fn stripping_shifts_out_trailing_zero_bytes() {
        let mut bytes = [0u8; 32];
        bytes[..3].copy_from_slice(b"abc");
        let expected = Scalar::from_u64(0x61_62_63);
        assert_eq!(Digest::from(bytes).to_scalar_stripped(), expected);

        let full = hex!("176b81623cf98f45879f3a48fa34af77dde44b2ffa0ddd2bf9edb386f76ec0ef");
        assert_eq!(
            Digest::from(full).to_scalar_stripped(),
            Digest::from(full).to_scalar()
        );
        assert_eq!(Digest::default().to_scalar_stripped(), Scalar::ZERO);
    }
}
