//! Firmware image signature check.
//!
//! An image is accepted when three distinct maintainers, named by 1-based
//! slot indices into [`FIRMWARE_KEYS`], have each signed the SHA-256 of the
//! image.

use crate::{
    COMPRESSED_POINT_SIZE, Digest, Error, Result,
    ecdsa::{DigestMode, SIGNATURE_SIZE, Signature, recover_public_key},
};
use elliptic_curve::rand_core::CryptoRngCore;
use hex_literal::hex;

/// Number of maintainer keys.
pub const FIRMWARE_KEY_COUNT: usize = 5;

/// Number of signatures an image must carry.
pub const FIRMWARE_SIGNATURE_COUNT: usize = 3;

/// Maintainer public keys, addressed by slot indices `1..=5`.
pub const FIRMWARE_KEYS: [[u8; COMPRESSED_POINT_SIZE]; FIRMWARE_KEY_COUNT] = [
    hex!("025839078e6c11c09ad4b00092f5feefd566f92af60f2c71facfb01d2b84c043d4"),
    hex!("029170192c2fdefb4d377af9e196e06d1176f86f733523d3950f90ff84c0cd02d3"),
    hex!("03338ffc0ff42df07d27b0b4131cd96ffdfa4685b5566aafc7aa71ed10fd1cbd6f"),
    hex!("039f12c93645e35e5274dc38f191be0b6d1321ec35d2d2a3ddf7d13ed12f6da85b"),
    hex!("03b17c7b7c564385be66f9c1b9da6a0b5aea56f0cb70548e6528a2f4f7b27245d8"),
];

/// Signature metadata stored alongside a firmware image.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FirmwareSignatures {
    /// 1-based slot of the key behind each signature.
    pub indices: [u8; FIRMWARE_SIGNATURE_COUNT],

    /// Compact signatures over the image digest.
    pub signatures: [[u8; SIGNATURE_SIZE]; FIRMWARE_SIGNATURE_COUNT],
}

impl FirmwareSignatures {
    fn check_indices(&self) -> Result<()> {
        let [a, b, c] = self.indices;
        let in_range = self
            .indices
            .iter()
            .all(|&i| (1..=FIRMWARE_KEY_COUNT as u8).contains(&i));

        if in_range && a != b && a != c && b != c {
            Ok(())
        } else {
            Err(Error::FirmwareSignature)
        }
    }
}

/// Checks the signatures over an image digest.
pub fn check_firmware_digest<R: CryptoRngCore + ?Sized>(
    digest: &Digest,
    signatures: &FirmwareSignatures,
    rng: &mut R,
) -> Result<()> {
    signatures.check_indices()?;

    for (&index, bytes) in signatures.indices.iter().zip(&signatures.signatures) {
        let expected = &FIRMWARE_KEYS[usize::from(index) - 1];
        let signer = Signature::from_bytes(bytes)
            .and_then(|sig| recover_public_key(&sig, digest, DigestMode::Legacy, rng));

        match signer {
            Ok(pk) if &pk.to_bytes() == expected => {}
            _ => {
                #[cfg(feature = "log")]
                log::warn!("firmware signature for slot {} rejected", index);

                return Err(Error::FirmwareSignature);
            }
        }
    }

    Ok(())
}

/// Hashes `image` and checks its signatures, returning the image digest.
pub fn check_firmware<R: CryptoRngCore + ?Sized>(
    image: &[u8],
    signatures: &FirmwareSignatures,
    rng: &mut R,
) -> Result<Digest> {
    let digest = Digest::of(image);
    check_firmware_digest(&digest, signatures, rng)?;
    Ok(digest)
}
