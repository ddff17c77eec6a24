//! Affine points

use super::{CURVE_EQUATION_B, FieldElement};
use core::ops::Neg;
use elliptic_curve::{
    bigint::U256,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption},
};

/// Size of a compressed point in bytes: a parity tag followed by the x-coordinate.
pub const COMPRESSED_POINT_SIZE: usize = 33;

/// Size of an uncompressed point in bytes: `0x04 || x || y`.
pub const UNCOMPRESSED_POINT_SIZE: usize = 65;

/// secp256k1 curve point expressed in affine coordinates.
///
/// The point at infinity is represented by the coordinates `(0, 0)`, which
/// do not satisfy the curve equation.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl AffinePoint {
    /// Additive identity of the group: the point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ZERO,
    };

    /// Base point of secp256k1.
    ///
    /// ```text
    /// Gₓ = 79be667e f9dcbbac 55a06295 ce870b07 029bfcdb 2dce28d9 59f2815b 16f81798
    /// Gᵧ = 483ada77 26a3c465 5da4fbfc 0e1108a8 fd17b448 a6855419 9c47d08f fb10d4b8
    /// ```
    pub const GENERATOR: Self = Self {
        x: FieldElement::from_uint_unchecked(U256::from_be_hex(
            "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
        )),
        y: FieldElement::from_uint_unchecked(U256::from_be_hex(
            "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
        )),
    };

    /// Builds a point from big-endian coordinates, checking that both are
    /// below the field prime and that the point lies on the curve.
    pub fn from_coordinates(x: &[u8; 32], y: &[u8; 32]) -> CtOption<Self> {
        let x = FieldElement::from_bytes(x);
        let y = FieldElement::from_bytes(y);
        let in_range = x.is_some() & y.is_some();
        let point = Self {
            x: x.unwrap_or(FieldElement::ZERO),
            y: y.unwrap_or(FieldElement::ZERO),
        };
        CtOption::new(point, in_range & point.is_valid())
    }

    /// Big-endian x-coordinate.
    pub fn x(&self) -> [u8; 32] {
        self.x.to_bytes()
    }

    /// Big-endian y-coordinate.
    pub fn y(&self) -> [u8; 32] {
        self.y.to_bytes()
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> Choice {
        self.x.is_zero() & self.y.is_zero()
    }

    /// Does this point satisfy `y² = x³ + 7`?
    pub fn is_on_curve(&self) -> Choice {
        self.y.square().ct_eq(&(self.x.square() * self.x + CURVE_EQUATION_B))
    }

    /// Is this a finite point on the curve? Points from untrusted input must
    /// pass this check before they are used.
    pub fn is_valid(&self) -> Choice {
        !self.is_identity() & self.is_on_curve()
    }

    /// Recovers the point with the given x-coordinate whose y-coordinate has
    /// the requested parity.
    ///
    /// Returns `None` when `x` is not below the field prime or `x³ + 7` has no
    /// square root.
    pub fn decompress(x: &[u8; 32], y_is_odd: Choice) -> CtOption<Self> {
        FieldElement::from_bytes(x).and_then(|x| {
            let alpha = x.square() * x + CURVE_EQUATION_B;
            alpha.sqrt().map(|beta| {
                let y = FieldElement::conditional_select(
                    &beta,
                    &-beta,
                    beta.is_odd() ^ y_is_odd,
                );
                Self { x, y }
            })
        })
    }

    /// Parses a 33-byte compressed point (`0x02`/`0x03` tag, then x).
    pub fn from_compressed(bytes: &[u8; COMPRESSED_POINT_SIZE]) -> CtOption<Self> {
        let tag = bytes[0];
        let tag_ok = tag.ct_eq(&0x02) | tag.ct_eq(&0x03);
        let mut x = [0u8; 32];
        x.copy_from_slice(&bytes[1..]);
        Self::decompress(&x, Choice::from(tag & 1)).and_then(|p| CtOption::new(p, tag_ok))
    }

    /// Parses a 65-byte uncompressed point (`0x04` tag, then x and y).
    pub fn from_uncompressed(bytes: &[u8; UNCOMPRESSED_POINT_SIZE]) -> CtOption<Self> {
        let tag_ok = bytes[0].ct_eq(&0x04);
        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        x.copy_from_slice(&bytes[1..33]);
        y.copy_from_slice(&bytes[33..]);
        Self::from_coordinates(&x, &y).and_then(|p| CtOption::new(p, tag_ok))
    }

    /// Compressed encoding: `0x02 | y parity`, followed by the x-coordinate.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_POINT_SIZE] {
        let mut out = [0u8; COMPRESSED_POINT_SIZE];
        out[0] = 0x02 | self.y.is_odd().unwrap_u8();
        out[1..].copy_from_slice(&self.x.to_bytes());
        out
    }

    /// Uncompressed encoding: `0x04 || x || y`.
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_POINT_SIZE] {
        let mut out = [0u8; UNCOMPRESSED_POINT_SIZE];
        out[0] = 0x04;
        out[1..33].copy_from_slice(&self.x.to_bytes());
        out[33..].copy_from_slice(&self.y.to_bytes());
        out
    }

    /// Is `other` the negation of this point?
    pub fn is_negation_of(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&-other.y)
    }

    /// Chord-and-tangent addition.
    ///
    /// Branches on the special cases, so it must only see public points.
    pub fn add(&self, other: &Self) -> Self {
        if bool::from(self.is_identity()) {
            return *other;
        }
        if bool::from(other.is_identity()) {
            return *self;
        }
        if bool::from(self.x.ct_eq(&other.x)) {
            if bool::from(self.y.ct_eq(&other.y)) {
                return self.double();
            }
            return Self::IDENTITY;
        }

        let dx = (other.x - self.x).invert().unwrap_or(FieldElement::ZERO);
        let lambda = (other.y - self.y) * dx;
        let x = lambda.square() - self.x - other.x;
        let y = lambda * (self.x - x) - self.y;
        Self { x, y }
    }

    /// Tangent doubling. Points with `y = 0` (including the identity) double
    /// to the point at infinity.
    pub fn double(&self) -> Self {
        if bool::from(self.y.is_zero()) {
            return Self::IDENTITY;
        }

        let inv_2y = self.y.double().invert().unwrap_or(FieldElement::ZERO);
        let lambda = self.x.square() * FieldElement::from_u64(3) * inv_2y;
        let x = lambda.square() - self.x.double();
        let y = lambda * (self.x - x) - self.y;
        Self { x, y }
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for AffinePoint {}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Neg for AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        AffinePoint {
            x: self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AffinePoint;
    use elliptic_curve::subtle::Choice;
    use hex_literal::hex;

    const UNCOMPRESSED_BASEPOINT: &[u8; 65] = &hex!(
        "0479BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798
         483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"
    );
    const COMPRESSED_BASEPOINT: &[u8; 33] =
        &hex!("0279BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");

    // 2G
    const COMPRESSED_DOUBLE_BASEPOINT: &[u8; 33] =
        &hex!("02C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5");

    #[test]
    fn uncompressed_round_trip() {
        let point = AffinePoint::from_uncompressed(UNCOMPRESSED_BASEPOINT).unwrap();
        assert_eq!(point, AffinePoint::GENERATOR);
        assert_eq!(&point.to_uncompressed(), UNCOMPRESSED_BASEPOINT);
    }

    #[test]
    fn compressed_round_trip() {
        let point = AffinePoint::from_compressed(COMPRESSED_BASEPOINT).unwrap();
        assert_eq!(point, AffinePoint::GENERATOR);
        assert_eq!(&point.to_compressed(), COMPRESSED_BASEPOINT);

        let mut odd = *COMPRESSED_BASEPOINT;
        odd[0] = 0x03;
        let neg = AffinePoint::from_compressed(&odd).unwrap();
        assert_eq!(neg, -AffinePoint::GENERATOR);
    }

    #[test]
    fn rejects_bad_tag() {
        let mut bytes = *COMPRESSED_BASEPOINT;
        bytes[0] = 0x04;
        assert!(bool::from(AffinePoint::from_compressed(&bytes).is_none()));

        let mut bytes = *UNCOMPRESSED_BASEPOINT;
        bytes[0] = 0x02;
        assert!(bool::from(AffinePoint::from_uncompressed(&bytes).is_none()));
    }

    #[test]
    fn rejects_off_curve() {
        let mut bytes = *UNCOMPRESSED_BASEPOINT;
        bytes[64] ^= 1;
        assert!(bool::from(AffinePoint::from_uncompressed(&bytes).is_none()));
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let x = [0xff; 32];
        assert!(bool::from(AffinePoint::decompress(&x, Choice::from(0)).is_none()));
        assert!(bool::from(
            AffinePoint::from_coordinates(&x, &AffinePoint::GENERATOR.y()).is_none()
        ));
    }

    #[test]
    fn rejects_non_residue() {
        // x = 0: 0³ + 7 is not a square modulo p
        assert!(bool::from(AffinePoint::decompress(&[0; 32], Choice::from(0)).is_none()));
        // x = 5: 5³ + 7 = 132 is not a square modulo p either
        let mut x = [0u8; 32];
        x[31] = 5;
        assert!(bool::from(AffinePoint::decompress(&x, Choice::from(1)).is_none()));
    }

    #[test]
    fn identity_is_not_valid() {
        let identity = AffinePoint::IDENTITY;
        assert!(bool::from(identity.is_identity()));
        assert!(!bool::from(identity.is_on_curve()));
        assert!(!bool::from(identity.is_valid()));
        assert!(bool::from(AffinePoint::GENERATOR.is_valid()));
    }

    #[test]
    fn add_special_cases() {
        let g = AffinePoint::GENERATOR;
        let id = AffinePoint::IDENTITY;
        assert_eq!(g.add(&id), g);
        assert_eq!(id.add(&g), g);
        assert_eq!(g.add(&-g), id);
        assert!(bool::from(g.is_negation_of(&-g)));
        assert!(!bool::from(g.is_negation_of(&g)));

        let two_g = AffinePoint::from_compressed(COMPRESSED_DOUBLE_BASEPOINT).unwrap();
        assert_eq!(g.add(&g), two_g);
        assert_eq!(g.double(), two_g);
        assert_eq!(id.double(), id);
    }

    #[test]
    fn add_is_commutative_and_associative() {
        let g = AffinePoint::GENERATOR;
        let two_g = g.double();
        let three_g = two_g.add(&g);
        assert_eq!(g.add(&two_g), three_g);
        assert_eq!(three_g.add(&g), two_g.double());
        assert_eq!(three_g.add(&-g), two_g);
        assert!(bool::from(three_g.is_valid()));
    }
}
