//! ECDSA signing.

use super::{NonceSource, RecoveryId, Signature};
use crate::{AffinePoint, Digest, Error, ORDER, Result, Scalar, SecretKey};
use elliptic_curve::{
    rand_core::CryptoRngCore,
    subtle::{ConditionallySelectable, ConstantTimeLess},
    zeroize::Zeroize,
};

/// Number of nonces tried by [`sign_digest`] before giving up.
pub const DEFAULT_SIGNING_ATTEMPTS: u32 = 8;

/// Signs `digest` with the nonce `k`.
///
/// Fails with [`Error::DegenerateNonce`] when `k`, `r` or `s` is zero; the
/// caller must then pick another nonce.
#[allow(non_snake_case)]
pub fn sign_digest_with_nonce<R: CryptoRngCore + ?Sized>(
    secret: &SecretKey,
    digest: &Digest,
    k: &Scalar,
    rng: &mut R,
) -> Result<Signature> {
    if bool::from(k.is_zero()) {
        return Err(Error::DegenerateNonce);
    }

    // Compute `x`-coordinate of affine point 𝑘×𝑮
    let R = AffinePoint::mul_base(k, rng);
    let x = R.x.to_uint();

    // Lift `x` (element of base field) to an element of the scalar field,
    // remembering whether it wrapped
    let x_reduced = !x.ct_lt(&ORDER);
    let r = Scalar::reduce(&x);
    if bool::from(r.is_zero()) {
        return Err(Error::DegenerateNonce);
    }

    let z = digest.to_scalar();
    let mut k_inv = k.invert().unwrap_or(Scalar::ZERO);
    let mut rd = r * secret.as_scalar();

    // Compute `s` as a signature over `r` and `z`
    let s = k_inv * (z + rd);
    k_inv.zeroize();
    rd.zeroize();
    if bool::from(s.is_zero()) {
        return Err(Error::DegenerateNonce);
    }

    // Negate `s` if it's within the upper half of the modulus; the negated
    // signature belongs to `-R`, whose y-parity is flipped
    let high = s.is_high();
    let s = Scalar::conditional_select(&s, &-s, high);
    let recovery_id = RecoveryId::new(
        bool::from(R.y.is_odd() ^ high),
        bool::from(x_reduced),
    );

    Signature::from_scalars(r, s, recovery_id)
}

/// Signs `digest`, drawing up to [`DEFAULT_SIGNING_ATTEMPTS`] nonces from
/// `nonces`.
pub fn sign_digest<N, R>(
    secret: &SecretKey,
    digest: &Digest,
    nonces: &mut N,
    rng: &mut R,
) -> Result<Signature>
where
    N: NonceSource + ?Sized,
    R: CryptoRngCore + ?Sized,
{
    sign_digest_with_attempts(secret, digest, nonces, DEFAULT_SIGNING_ATTEMPTS, rng)
}

/// Signs `digest`, drawing up to `max_attempts` nonces from `nonces`.
///
/// A nonce source that runs dry ends the attempts early: with the last
/// nonce's error if one was tried, [`Error::NonceExhausted`] otherwise.
/// Running out of attempts is [`Error::RetryBudgetExhausted`].
pub fn sign_digest_with_attempts<N, R>(
    secret: &SecretKey,
    digest: &Digest,
    nonces: &mut N,
    max_attempts: u32,
    rng: &mut R,
) -> Result<Signature>
where
    N: NonceSource + ?Sized,
    R: CryptoRngCore + ?Sized,
{
    let mut last_error = Error::NonceExhausted;

    for attempt in 0..max_attempts {
        let Some(mut k) = nonces.nonce(secret, digest, attempt) else {
            return Err(last_error);
        };

        let result = sign_digest_with_nonce(secret, digest, &k, rng);
        k.zeroize();

        match result {
            Err(Error::DegenerateNonce) => {
                #[cfg(feature = "log")]
                log::warn!("degenerate nonce on signing attempt {}", attempt);

                last_error = Error::DegenerateNonce;
            }
            other => return other,
        }
    }

    Err(Error::RetryBudgetExhausted)
}
