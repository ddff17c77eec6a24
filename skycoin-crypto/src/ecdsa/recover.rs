//! Public-key recovery from a compact signature.

use super::{DigestMode, Signature};
use crate::{
    AffinePoint, Digest, Error, ORDER, PublicKey, Result, Scalar, arithmetic::field::MODULUS,
};
use elliptic_curve::{
    bigint::{Encoding, Limb},
    rand_core::CryptoRngCore,
    subtle::{Choice, ConstantTimeLess},
};

/// Recovers the public key that produced `signature` over `digest`.
///
/// Computes `r⁻¹ (s R - e G)`, where `R` is the ephemeral point named by the
/// signature's recovery identifier and `e` is the digest interpreted under
/// `mode`. Only public values are involved, so the variable-time affine
/// formulas are used for the final sum.
#[allow(non_snake_case)]
pub fn recover_public_key<R: CryptoRngCore + ?Sized>(
    signature: &Signature,
    digest: &Digest,
    mode: DigestMode,
    rng: &mut R,
) -> Result<PublicKey> {
    let r = signature.r();
    let s = signature.s();
    let recovery_id = signature.recovery_id();

    // Undo the reduction of `R.x` modulo `n` if the signer reported one
    let mut x = r.to_uint();
    if recovery_id.is_x_reduced() {
        let (sum, carry) = x.adc(&ORDER, Limb::ZERO);
        if carry.0 != 0 || !bool::from(sum.ct_lt(&MODULUS)) {
            return Err(Error::InvalidSignature);
        }
        x = sum;
    }

    let R = Option::<AffinePoint>::from(AffinePoint::decompress(
        &x.to_be_bytes(),
        Choice::from(recovery_id.is_y_odd() as u8),
    ))
    .ok_or(Error::InvalidSignature)?;

    let e = match mode {
        DigestMode::Legacy => digest.to_scalar_stripped(),
        DigestMode::Standard => digest.to_scalar(),
    };

    let r_inv = Option::<Scalar>::from(r.invert()).ok_or(Error::InvalidSignature)?;
    let u1 = -(r_inv * e);
    let u2 = r_inv * s;

    let point = R.mul(&u2, rng).add(&AffinePoint::mul_base(&u1, rng));
    PublicKey::from_affine(point).map_err(|_| Error::InvalidSignature)
}
