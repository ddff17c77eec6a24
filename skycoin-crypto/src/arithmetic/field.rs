//! Field arithmetic modulo p = 2^256 - 2^32 - 977

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use elliptic_curve::{
    bigint::{Encoding, U256, impl_modulus, modular::constant_mod::Residue},
    rand_core::CryptoRngCore,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess, CtOption},
    zeroize::DefaultIsZeroes,
};

impl_modulus!(
    FieldModulus,
    U256,
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"
);

type FieldResidue = Residue<FieldModulus, { U256::LIMBS }>;

/// Field modulus `p`.
pub(crate) const MODULUS: U256 =
    U256::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");

/// `p - 2`, the Fermat inversion exponent.
const P_MINUS_2: U256 =
    U256::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2D");

/// `(p + 1) / 4`; `p ≡ 3 (mod 4)` so this exponent yields a square root.
const SQRT_EXP: U256 =
    U256::from_be_hex("3FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFBFFFFF0C");

/// `2^-1 mod p`
const INV_TWO: FieldElement = FieldElement(FieldResidue::new(&U256::from_be_hex(
    "7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF7FFFFE18",
)));

/// An element in the finite field used for curve coordinates.
#[derive(Clone, Copy, Debug)]
pub struct FieldElement(FieldResidue);

impl FieldElement {
    /// Zero element.
    pub const ZERO: Self = Self(FieldResidue::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self(FieldResidue::ONE);

    /// Create a field element from an integer already known to be below `p`.
    pub(crate) const fn from_uint_unchecked(w: U256) -> Self {
        Self(FieldResidue::new(&w))
    }

    /// Create a field element from a small integer.
    pub const fn from_u64(w: u64) -> Self {
        Self::from_uint_unchecked(U256::from_u64(w))
    }

    /// Attempts to parse the given big endian byte array as a field element.
    ///
    /// Returns None if the byte array does not contain a big-endian integer in the range
    /// [0, p).
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Self> {
        let w = U256::from_be_bytes(*bytes);
        CtOption::new(Self::from_uint_unchecked(w), w.ct_lt(&MODULUS))
    }

    /// Returns the big-endian encoding of this field element.
    pub fn to_bytes(self) -> [u8; 32] {
        self.0.retrieve().to_be_bytes()
    }

    /// Returns the canonical integer value of this field element.
    pub(crate) fn to_uint(self) -> U256 {
        self.0.retrieve()
    }

    /// Returns a uniformly random non-zero element, used for blinding.
    pub fn random<R: CryptoRngCore + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 32];
        loop {
            rng.fill_bytes(&mut bytes);
            let candidate = Self::from_bytes(&bytes);
            if bool::from(candidate.is_some()) {
                let fe = candidate.unwrap_or(Self::ZERO);
                if !bool::from(fe.is_zero()) {
                    bytes.fill(0);
                    return fe;
                }
            }
        }
    }

    /// Determine if this `FieldElement` is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Determine if this `FieldElement` is odd in the SEC1 sense: `self mod 2 == 1`.
    pub fn is_odd(&self) -> Choice {
        Choice::from(self.to_bytes()[31] & 1)
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        Self(self.0 + self.0)
    }

    /// Returns `self / 2`.
    pub fn half(&self) -> Self {
        *self * INV_TWO
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Returns `self^exp`.
    pub fn pow(&self, exp: &U256) -> Self {
        Self(self.0.pow(exp))
    }

    /// Returns the multiplicative inverse of self, if self is non-zero.
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(self.pow(&P_MINUS_2), !self.is_zero())
    }

    /// Returns the square root of self mod p, or `None` if no square root exists.
    pub fn sqrt(&self) -> CtOption<Self> {
        let root = self.pow(&SQRT_EXP);
        CtOption::new(root, root.square().ct_eq(self))
    }
}

impl Default for FieldElement {
    fn default() -> Self {
        Self::ZERO
    }
}

impl DefaultIsZeroes for FieldElement {}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(FieldResidue::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl Add<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, other: FieldElement) -> FieldElement {
        FieldElement(self.0 + other.0)
    }
}

impl Add<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0 + other.0)
    }
}

impl AddAssign<FieldElement> for FieldElement {
    fn add_assign(&mut self, rhs: FieldElement) {
        *self = *self + rhs;
    }
}

impl Sub<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: FieldElement) -> FieldElement {
        FieldElement(self.0 - other.0)
    }
}

impl Sub<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0 - other.0)
    }
}

impl SubAssign<FieldElement> for FieldElement {
    fn sub_assign(&mut self, rhs: FieldElement) {
        *self = *self - rhs;
    }
}

impl Mul<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: FieldElement) -> FieldElement {
        FieldElement(self.0 * other.0)
    }
}

impl Mul<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0 * other.0)
    }
}

impl MulAssign<FieldElement> for FieldElement {
    fn mul_assign(&mut self, rhs: FieldElement) {
        *self = *self * rhs;
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement(-self.0)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use proptest::prelude::*;

    use super::{FieldElement, MODULUS};
    use crate::test_vectors::field::DBL_TEST_VECTORS;
    use elliptic_curve::bigint::Encoding;

    fn modulus() -> BigUint {
        BigUint::from_bytes_be(&MODULUS.to_be_bytes())
    }

    fn to_biguint(fe: &FieldElement) -> BigUint {
        BigUint::from_bytes_be(&fe.to_bytes())
    }

    fn from_biguint(x: &BigUint) -> FieldElement {
        let bytes = x.to_bytes_be();
        let mut padded = [0u8; 32];
        padded[32 - bytes.len()..].copy_from_slice(&bytes);
        FieldElement::from_bytes(&padded).unwrap()
    }

    #[test]
    fn zero_is_additive_identity() {
        let zero = FieldElement::ZERO;
        let one = FieldElement::ONE;
        assert_eq!(zero + zero, zero);
        assert_eq!(one + zero, one);
    }

    #[test]
    fn one_is_multiplicative_identity() {
        let one = FieldElement::ONE;
        assert_eq!(one * one, one);
    }

    #[test]
    fn from_bytes() {
        assert_eq!(
            FieldElement::from_bytes(&[0; 32]).unwrap(),
            FieldElement::ZERO
        );
        let mut one = [0u8; 32];
        one[31] = 1;
        assert_eq!(FieldElement::from_bytes(&one).unwrap(), FieldElement::ONE);
        assert!(bool::from(FieldElement::from_bytes(&[0xff; 32]).is_none()));
        assert!(bool::from(
            FieldElement::from_bytes(&MODULUS.to_be_bytes()).is_none()
        ));
    }

    #[test]
    fn repeated_double() {
        let mut r = FieldElement::ONE;
        for vector in DBL_TEST_VECTORS {
            assert_eq!(r.to_bytes(), *vector);
            r = r.double();
        }
    }

    #[test]
    fn repeated_mul() {
        let mut r = FieldElement::ONE;
        let two = r + r;
        for vector in DBL_TEST_VECTORS {
            assert_eq!(r.to_bytes(), *vector);
            r = r * two;
        }
    }

    #[test]
    fn negation() {
        let two = FieldElement::ONE.double();
        let neg_two = -two;
        assert_eq!(two + neg_two, FieldElement::ZERO);
        assert_eq!(-neg_two, two);
        assert_eq!(-FieldElement::ZERO, FieldElement::ZERO);
    }

    #[test]
    fn half() {
        let three = FieldElement::from_u64(3);
        assert_eq!(three.half().double(), three);
        assert_eq!(FieldElement::from_u64(8).half(), FieldElement::from_u64(4));
    }

    #[test]
    fn invert() {
        assert!(bool::from(FieldElement::ZERO.invert().is_none()));

        let one = FieldElement::ONE;
        assert_eq!(one.invert().unwrap(), one);

        let two = one + one;
        let inv_two = two.invert().unwrap();
        assert_eq!(two * inv_two, one);
    }

    #[test]
    fn sqrt() {
        let two = FieldElement::from_u64(2);
        let four = two.square();
        let root = four.sqrt().unwrap();
        assert!(root == two || root == -two);

        // 3 is not a quadratic residue modulo p
        assert!(bool::from(FieldElement::from_u64(3).sqrt().is_none()));
    }

    prop_compose! {
        fn field_element()(bytes in any::<[u8; 32]>()) -> FieldElement {
            let mut res = BigUint::from_bytes_be(&bytes);
            let m = modulus();
            // Modulus is 256 bit long, same as the maximum `res`,
            // so this is guaranteed to land us in the correct range.
            if res >= m {
                res -= m;
            }
            from_biguint(&res)
        }
    }

    proptest! {
        #[test]
        fn fuzzy_add(a in field_element(), b in field_element()) {
            let res_bi = (to_biguint(&a) + to_biguint(&b)) % modulus();
            prop_assert_eq!(a + b, from_biguint(&res_bi));
        }

        #[test]
        fn fuzzy_sub(a in field_element(), b in field_element()) {
            let res_bi = (modulus() + to_biguint(&a) - to_biguint(&b)) % modulus();
            prop_assert_eq!(a - b, from_biguint(&res_bi));
        }

        #[test]
        fn fuzzy_mul(a in field_element(), b in field_element()) {
            let res_bi = (to_biguint(&a) * to_biguint(&b)) % modulus();
            prop_assert_eq!(a * b, from_biguint(&res_bi));
        }

        #[test]
        fn fuzzy_square(a in field_element()) {
            prop_assert_eq!(a.square(), a * a);
        }

        #[test]
        fn fuzzy_invert(a in field_element()) {
            let a = if bool::from(a.is_zero()) { FieldElement::ONE } else { a };
            prop_assert_eq!(a * a.invert().unwrap(), FieldElement::ONE);
        }

        #[test]
        fn fuzzy_sqrt(a in field_element()) {
            let sq = a.square();
            let root = sq.sqrt().unwrap();
            prop_assert!(root == a || root == -a);
        }
    }
}
