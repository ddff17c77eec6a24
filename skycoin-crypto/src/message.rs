//! Signed messages.
//!
//! A message is signed over its SHA-256 digest and the signature travels as
//! Base58 text. Checking a signature recovers the signer and compares its
//! native address with the one claimed.

use crate::{
    Digest, Error, PublicKey, Result, SecretKey,
    address::{AddressKind, address_from_pubkey},
    ecdsa::{self, DigestMode, NonceSource, Signature},
};
use alloc::string::String;
use elliptic_curve::rand_core::CryptoRngCore;

/// Signs `SHA256(message)` and renders the signature in Base58.
pub fn sign_message<N, R>(
    secret: &SecretKey,
    message: &[u8],
    nonces: &mut N,
    rng: &mut R,
) -> Result<String>
where
    N: NonceSource + ?Sized,
    R: CryptoRngCore + ?Sized,
{
    let signature = ecdsa::sign_digest(secret, &Digest::of(message), nonces, rng)?;
    Ok(signature.to_base58())
}

/// Recovers the public key behind a Base58 message signature.
pub fn recover_message_signer<R: CryptoRngCore + ?Sized>(
    message: &[u8],
    signature: &str,
    mode: DigestMode,
    rng: &mut R,
) -> Result<PublicKey> {
    let signature = Signature::from_base58(signature)?;
    ecdsa::recover_public_key(&signature, &Digest::of(message), mode, rng)
}

/// Checks that `signature` over `message` was made by the owner of the
/// native `address`.
pub fn verify_message_signature<R: CryptoRngCore + ?Sized>(
    address: &str,
    message: &[u8],
    signature: &str,
    mode: DigestMode,
    rng: &mut R,
) -> Result<()> {
    let signer = recover_message_signer(message, signature, mode, rng)?;
    if address_from_pubkey(&signer, AddressKind::Native) == address {
        Ok(())
    } else {
        #[cfg(feature = "log")]
        log::debug!("message signer does not match {}", address);

        Err(Error::AddressMismatch)
    }
}
