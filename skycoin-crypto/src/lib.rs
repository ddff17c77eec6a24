//! Cryptographic core of the Skycoin hardware wallet.
//!
//! Pure-Rust secp256k1 arithmetic with blinded constant-time scalar
//! multiplication, and the protocols built on it:
//!
//! - [`derive`]: the chained deterministic key derivation behind Skycoin
//!   wallets;
//! - [`ecdsa`]: signing with caller-chosen nonce sources, and public-key
//!   recovery from 65-byte compact signatures;
//! - [`ecdh`]: shared secrets;
//! - [`address`]: Base58Check addresses and wallet import format;
//! - [`message`] and [`firmware`]: signed messages and firmware images.
//!
//! [`Context`] bundles these behind a single random number generator and a
//! set of [`Options`].
//!
//! ## Usage
//!
//! ```
//! use skycoin_crypto::{Context, Digest, address::AddressKind};
//!
//! let mut ctx = Context::new(); // requires 'getrandom' feature
//! let keypair = ctx.derive_keypair_at_index(b"seed", 1)?;
//! let address = ctx.address_from_pubkey(keypair.public_key(), AddressKind::Native);
//! assert_eq!(address, "2EVNa4CK9SKosT4j1GEn8SuuUUEAXaHAMbM");
//!
//! let digest = Digest::of(b"example message");
//! let signature = ctx.sign_digest(keypair.secret_key(), &digest)?; // requires 'rfc6979' feature
//! assert_eq!(&ctx.recover_public_key(&signature, &digest)?, keypair.public_key());
//! # Ok::<(), skycoin_crypto::Error>(())
//! ```
//!
//! ## Minimum Supported Rust Version
//!
//! Rust **1.85** or higher.
//!
//! Minimum supported Rust version can be changed in the future, but it will be
//! done with a minor version bump.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod address;
pub mod arithmetic;
pub mod curve;
pub mod derive;
pub mod ecdh;
pub mod ecdsa;
pub mod firmware;
pub mod hash;
pub mod keys;
pub mod message;

mod context;
mod error;

#[cfg(any(feature = "test-vectors", test))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-vectors")))]
pub mod test_vectors;

pub use crate::{
    arithmetic::{AffinePoint, COMPRESSED_POINT_SIZE, FieldElement, ORDER, Scalar, UNCOMPRESSED_POINT_SIZE},
    context::{Context, Options},
    curve::Curve,
    error::{Error, Result},
    hash::Digest,
    keys::{Keypair, PublicKey, SecretKey},
};

pub use elliptic_curve;
