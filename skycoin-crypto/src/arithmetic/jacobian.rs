//! Jacobian points, a transient representation for scalar multiplication

use super::{AffinePoint, FieldElement};
use elliptic_curve::{
    rand_core::CryptoRngCore,
    subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq},
    zeroize::{DefaultIsZeroes, Zeroize},
};

/// A point `(X, Y, Z)` representing the affine point `(X/Z², Y/Z³)`.
///
/// Never leaves the multiplication routine; `Z = 0` marks the identity.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct JacobianPoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl JacobianPoint {
    /// Lifts an affine point using a random `Z`, so repeated multiplications
    /// of the same point never share intermediate values.
    pub fn from_affine_blinded<R: CryptoRngCore + ?Sized>(p: &AffinePoint, rng: &mut R) -> Self {
        let mut z = FieldElement::random(rng);
        let z2 = z.square();
        let point = Self {
            x: p.x * z2,
            y: p.y * z2 * z,
            z,
        };
        z.zeroize();
        point
    }

    /// Returns to affine coordinates with a single inversion.
    pub fn to_affine(&self) -> AffinePoint {
        self.z
            .invert()
            .map(|zinv| {
                let zinv2 = zinv.square();
                AffinePoint {
                    x: self.x * zinv2,
                    y: self.y * zinv2 * zinv,
                }
            })
            .unwrap_or(AffinePoint::IDENTITY)
    }

    /// Negates the represented point when `choice` is set, by negating `Z`.
    pub fn conditional_negate(&mut self, choice: Choice) {
        self.z.conditional_negate(choice);
    }

    /// Doubling for `a = 0`, with the tangent slope pre-halved:
    /// `M = 3X²/2`, `X' = M² - 2XY²`, `Y' = M(XY² - X') - Y⁴`, `Z' = YZ`.
    pub fn double(&self) -> Self {
        let m = (self.x.square() * FieldElement::from_u64(3)).half();
        let ysq = self.y.square();
        let xysq = self.x * ysq;
        let x = m.square() - xysq.double();
        let y = m * (xysq - x) - ysq.square();
        let z = self.y * self.z;
        Self { x, y, z }
    }

    /// Mixed addition `self + p` with `p` affine.
    ///
    /// When both operands are the same point the tangent slope is selected
    /// in place of the chord slope, so the formula shape never depends on
    /// the inputs.
    pub fn add_mixed(&self, p: &AffinePoint) -> Self {
        let zz = self.z.square();
        let zzz = zz * self.z;

        // Scale the affine operand into this point's projective frame.
        let x1 = p.x * zz;
        let y1 = p.y * zzz;

        let mut h = x1 - self.x;
        let xsum = x1 + self.x;
        let is_doubling = h.ct_eq(&FieldElement::ZERO);

        let mut r = y1 - self.y;
        let ysum = y1 + self.y;

        let tangent = self.x.square() * FieldElement::from_u64(3);
        r.conditional_assign(&tangent, is_doubling);
        h.conditional_assign(&ysum, is_doubling);

        let hsq = h.square();
        let hsqx = hsq * xsum;
        let hcby = hsq * h * ysum;

        let x = r.square() - hsqx;
        let y = (r * (hsqx - x.double()) - hcby).half();
        let z = h * self.z;
        Self { x, y, z }
    }
}

impl DefaultIsZeroes for JacobianPoint {}
