//! Curve descriptors.
//!
//! Wallet nodes name their curve; only secp256k1 has the short Weierstrass
//! parameters this crate's point engine works with. Edwards curves are
//! listed so callers can dispatch on them, but their public keys are
//! derived elsewhere.

use crate::{AffinePoint, Error, ORDER, PublicKey, Result, SecretKey, arithmetic::field::MODULUS};
use elliptic_curve::{bigint::U256, rand_core::CryptoRngCore};

/// Short Weierstrass parameters of a curve `y² = x³ + ax + b`.
#[derive(Clone, Copy, Debug)]
pub struct CurveParams {
    /// Field prime.
    pub prime: U256,

    /// Group order.
    pub order: U256,

    /// `order / 2`, the bound for low-`s` signatures.
    pub order_half: U256,

    /// Coefficient `a`.
    pub a: i32,

    /// Coefficient `b`.
    pub b: U256,

    /// Base point.
    pub generator: AffinePoint,
}

/// secp256k1 parameters.
pub const SECP256K1: CurveParams = CurveParams {
    prime: MODULUS,
    order: ORDER,
    order_half: U256::from_be_hex(
        "7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF5D576E7357A4501DDFE92F46681B20A0",
    ),
    a: 0,
    b: U256::from_u64(7),
    generator: AffinePoint::GENERATOR,
};

/// A curve a wallet node may be bound to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Curve {
    /// secp256k1, a short Weierstrass curve.
    Secp256k1,

    /// Ed25519, a twisted Edwards curve.
    Ed25519,
}

impl Curve {
    /// Name a wallet node uses to refer to the curve.
    pub fn name(self) -> &'static str {
        match self {
            Curve::Secp256k1 => "secp256k1",
            Curve::Ed25519 => "ed25519",
        }
    }

    /// Looks a curve up by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "secp256k1" => Some(Curve::Secp256k1),
            "ed25519" => Some(Curve::Ed25519),
            _ => None,
        }
    }

    /// Does this curve carry short Weierstrass parameters?
    pub fn has_weierstrass_params(self) -> bool {
        self.weierstrass().is_some()
    }

    /// Short Weierstrass parameters, if this is a Weierstrass curve.
    pub fn weierstrass(self) -> Option<&'static CurveParams> {
        match self {
            Curve::Secp256k1 => Some(&SECP256K1),
            Curve::Ed25519 => None,
        }
    }

    /// Computes the public key for `secret` on this curve.
    ///
    /// Edwards curves derive public keys from a hashed seed rather than a
    /// scalar, which this crate does not implement.
    pub fn derive_public<R: CryptoRngCore + ?Sized>(
        self,
        secret: &SecretKey,
        rng: &mut R,
    ) -> Result<PublicKey> {
        match self {
            Curve::Secp256k1 => Ok(secret.public_key(rng)),
            Curve::Ed25519 => Err(Error::UnsupportedCurve),
        }
    }
}
