//! Scalar field arithmetic modulo n = 115792089237316195423570985008687907852837564279074904382605163141518161494337

use core::ops::{Add, Mul, Neg, Sub};
use elliptic_curve::{
    bigint::{Encoding, U256, impl_modulus, modular::constant_mod::Residue},
    rand_core::CryptoRngCore,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess, CtOption},
    zeroize::DefaultIsZeroes,
};

impl_modulus!(
    OrderModulus,
    U256,
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"
);

type ScalarResidue = Residue<OrderModulus, { U256::LIMBS }>;

/// Constant representing the modulus
/// n = FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141
pub const ORDER: U256 =
    U256::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

/// `n / 2`, rounded down. Signatures with `s` above this value are "high".
const FRAC_MODULUS_2: U256 =
    U256::from_be_hex("7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF5D576E7357A4501DDFE92F46681B20A0");

const ORDER_MINUS_2: U256 =
    U256::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD036413F");

/// Scalars are elements in the finite field modulo n.
#[derive(Clone, Copy, Debug)]
pub struct Scalar(ScalarResidue);

impl Scalar {
    /// Zero scalar.
    pub const ZERO: Self = Self(ScalarResidue::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self(ScalarResidue::ONE);

    /// Create a scalar from a small integer.
    pub const fn from_u64(w: u64) -> Self {
        Self(ScalarResidue::new(&U256::from_u64(w)))
    }

    /// Attempts to parse the given big endian byte array as a scalar.
    ///
    /// Returns None if the byte array does not contain a big-endian integer in the range
    /// [0, n).
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Self> {
        let w = U256::from_be_bytes(*bytes);
        CtOption::new(Self(ScalarResidue::new(&w)), w.ct_lt(&ORDER))
    }

    /// Interprets the given big endian bytes as an integer and reduces it modulo n.
    pub fn reduce_bytes(bytes: &[u8; 32]) -> Self {
        Self::reduce(&U256::from_be_bytes(*bytes))
    }

    /// Reduces an integer modulo n. A single subtraction suffices since `2^256 < 2n`.
    pub(crate) fn reduce(w: &U256) -> Self {
        let reduced = U256::conditional_select(&w.wrapping_sub(&ORDER), w, w.ct_lt(&ORDER));
        Self(ScalarResidue::new(&reduced))
    }

    /// Returns the big-endian encoding of this scalar.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.retrieve().to_be_bytes()
    }

    /// Returns the canonical integer value of this scalar.
    pub(crate) fn to_uint(self) -> U256 {
        self.0.retrieve()
    }

    /// Returns a uniformly random scalar, which may be zero.
    pub fn random<R: CryptoRngCore + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 32];
        loop {
            rng.fill_bytes(&mut bytes);
            let candidate = Self::from_bytes(&bytes);
            if bool::from(candidate.is_some()) {
                bytes.fill(0);
                return candidate.unwrap_or(Self::ZERO);
            }
        }
    }

    /// Determine if this `Scalar` is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Is this scalar greater than n / 2?
    pub fn is_high(&self) -> Choice {
        FRAC_MODULUS_2.ct_lt(&self.to_uint())
    }

    /// Is this scalar even?
    pub fn is_even(&self) -> Choice {
        !Choice::from(self.to_bytes()[31] & 1)
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Returns the multiplicative inverse of self, if self is non-zero.
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(Self(self.0.pow(&ORDER_MINUS_2)), !self.is_zero())
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self::ZERO
    }
}

impl DefaultIsZeroes for Scalar {}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(ScalarResidue::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl Add<Scalar> for Scalar {
    type Output = Scalar;

    fn add(self, other: Scalar) -> Scalar {
        Scalar(self.0 + other.0)
    }
}

impl Add<&Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, other: &Scalar) -> Scalar {
        Scalar(self.0 + other.0)
    }
}

impl Sub<Scalar> for Scalar {
    type Output = Scalar;

    fn sub(self, other: Scalar) -> Scalar {
        Scalar(self.0 - other.0)
    }
}

impl Mul<Scalar> for Scalar {
    type Output = Scalar;

    fn mul(self, other: Scalar) -> Scalar {
        Scalar(self.0 * other.0)
    }
}

impl Mul<&Scalar> for Scalar {
    type Output = Scalar;

    fn mul(self, other: &Scalar) -> Scalar {
        Scalar(self.0 * other.0)
    }
}

impl Mul<&Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, other: &Scalar) -> Scalar {
        Scalar(self.0 * other.0)
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar(-self.0)
    }
}

impl From<u32> for Scalar {
    fn from(k: u32) -> Self {
        Self::from_u64(k.into())
    }
}
