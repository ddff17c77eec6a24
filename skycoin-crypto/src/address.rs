//! Base58Check addresses and wallet import format.
//!
//! Two address layouts exist, both 25 bytes before Base58 encoding:
//!
//! ```text
//! native:  RIPEMD160(SHA256(SHA256(pk))) || 0x00 || SHA256(first 21 bytes)[..4]
//! bitcoin: 0x00 || RIPEMD160(SHA256(pk)) || SHA256d(first 21 bytes)[..4]
//! ```
//!
//! Secret keys are exported as `0x80 || sk || 0x01 || SHA256d(first 34 bytes)[..4]`.

use crate::{
    Error, PublicKey, Result, SecretKey,
    hash::{sha256, sha256d},
};
use alloc::{string::String, vec::Vec};
use elliptic_curve::zeroize::{Zeroize, Zeroizing};
use ripemd::{Digest as _, Ripemd160};

/// Size of a decoded address in bytes.
pub const ADDRESS_SIZE: usize = 25;

/// Size of a public key hash in bytes.
pub const PUBKEY_HASH_SIZE: usize = 20;

/// Size of a decoded WIF string in bytes.
pub const WIF_SIZE: usize = 38;

const CHECKSUM_SIZE: usize = 4;
const ADDRESS_VERSION: u8 = 0x00;
const WIF_VERSION: u8 = 0x80;
const WIF_COMPRESSED: u8 = 0x01;

/// Address layout.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum AddressKind {
    /// Skycoin addresses.
    #[default]
    Native,

    /// Bitcoin pay-to-pubkey-hash addresses for compressed keys.
    Bitcoin,
}

impl AddressKind {
    fn pubkey_hash(self, public_key: &PublicKey) -> [u8; PUBKEY_HASH_SIZE] {
        let sha = match self {
            AddressKind::Native => sha256d(&public_key.to_bytes()),
            AddressKind::Bitcoin => sha256(&public_key.to_bytes()),
        };
        Ripemd160::digest(sha).into()
    }

    fn checksum(self, payload: &[u8]) -> [u8; CHECKSUM_SIZE] {
        let hash = match self {
            AddressKind::Native => sha256(payload),
            AddressKind::Bitcoin => sha256d(payload),
        };
        let mut checksum = [0u8; CHECKSUM_SIZE];
        checksum.copy_from_slice(&hash[..CHECKSUM_SIZE]);
        checksum
    }

    /// Position of the public key hash and of the version byte.
    fn layout(self) -> (usize, usize) {
        match self {
            AddressKind::Native => (0, PUBKEY_HASH_SIZE),
            AddressKind::Bitcoin => (1, 0),
        }
    }
}

/// Builds the 25 address bytes for `public_key`.
pub fn address_bytes(public_key: &PublicKey, kind: AddressKind) -> [u8; ADDRESS_SIZE] {
    let (hash_at, version_at) = kind.layout();
    let mut out = [0u8; ADDRESS_SIZE];
    out[hash_at..hash_at + PUBKEY_HASH_SIZE].copy_from_slice(&kind.pubkey_hash(public_key));
    out[version_at] = ADDRESS_VERSION;

    let checksum = kind.checksum(&out[..ADDRESS_SIZE - CHECKSUM_SIZE]);
    out[ADDRESS_SIZE - CHECKSUM_SIZE..].copy_from_slice(&checksum);
    out
}

/// Renders the address of `public_key` in Base58.
pub fn address_from_pubkey(public_key: &PublicKey, kind: AddressKind) -> String {
    bs58::encode(address_bytes(public_key, kind)).into_string()
}

/// Decodes an address and verifies its version byte and checksum,
/// returning the public key hash.
pub fn decode_address(address: &str, kind: AddressKind) -> Result<[u8; PUBKEY_HASH_SIZE]> {
    let bytes = decode_base58(address)?;
    let bytes = <[u8; ADDRESS_SIZE]>::try_from(bytes.as_slice()).map_err(|_| Error::InvalidEncoding)?;

    let (hash_at, version_at) = kind.layout();
    let checksum = kind.checksum(&bytes[..ADDRESS_SIZE - CHECKSUM_SIZE]);
    if bytes[ADDRESS_SIZE - CHECKSUM_SIZE..] != checksum || bytes[version_at] != ADDRESS_VERSION {
        return Err(Error::Checksum);
    }

    let mut hash = [0u8; PUBKEY_HASH_SIZE];
    hash.copy_from_slice(&bytes[hash_at..hash_at + PUBKEY_HASH_SIZE]);
    Ok(hash)
}

/// Exports a secret key in wallet import format, flagged as having a
/// compressed public key.
pub fn wif_from_secret_key(secret: &SecretKey) -> Zeroizing<String> {
    let mut bytes = Zeroizing::new([0u8; WIF_SIZE]);
    bytes[0] = WIF_VERSION;
    bytes[1..33].copy_from_slice(&*secret.to_bytes());
    bytes[33] = WIF_COMPRESSED;

    let checksum = sha256d(&bytes[..WIF_SIZE - CHECKSUM_SIZE]);
    bytes[WIF_SIZE - CHECKSUM_SIZE..].copy_from_slice(&checksum[..CHECKSUM_SIZE]);
    Zeroizing::new(bs58::encode(&*bytes).into_string())
}

/// Imports a secret key from wallet import format.
pub fn decode_wif(wif: &str) -> Result<SecretKey> {
    let mut decoded = decode_base58(wif)?;
    let result = parse_wif(&decoded);
    decoded.zeroize();
    result
}

fn parse_wif(bytes: &[u8]) -> Result<SecretKey> {
    if bytes.len() != WIF_SIZE {
        return Err(Error::InvalidEncoding);
    }

    let checksum = sha256d(&bytes[..WIF_SIZE - CHECKSUM_SIZE]);
    if bytes[WIF_SIZE - CHECKSUM_SIZE..] != checksum[..CHECKSUM_SIZE] {
        return Err(Error::Checksum);
    }
    if bytes[0] != WIF_VERSION || bytes[33] != WIF_COMPRESSED {
        return Err(Error::InvalidEncoding);
    }

    SecretKey::from_slice(&bytes[1..33])
}

/// Decodes Base58 text without interpreting it.
pub fn decode_base58(s: &str) -> Result<Vec<u8>> {
    Ok(bs58::decode(s).into_vec()?)
}
