//! Blinded fixed-window scalar multiplication.
//!
//! The scalar `k` is first mapped to the odd 257-bit integer
//! `a = k + 2^256 - (n if k is even)`, which is congruent to `k + 2^256`
//! modulo the group order. Every 4-bit window of `a` is then read as an odd
//! signed digit in `[-15, 15]`, with the sign taken from the low bit of the
//! next window up, so each window costs exactly four doublings and one
//! addition of a precomputed odd multiple of the input point.

use super::{AffinePoint, Scalar, jacobian::JacobianPoint};
use elliptic_curve::{
    bigint::{Encoding, Limb, U256},
    rand_core::CryptoRngCore,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq},
    zeroize::Zeroize,
};

/// Number of 4-bit windows in a 257-bit integer, counting the top bit.
const WINDOWS: usize = 65;

/// `2^256 - n`
const ORDER_COMPLEMENT: U256 =
    U256::from_be_hex("000000000000000000000000000000014551231950B75FC4402DA1732FC9BEBF");

/// Lookup table containing precomputed odd multiples `[p, 3p, 5p, ..., 15p]`.
struct LookupTable([AffinePoint; 8]);

impl From<&AffinePoint> for LookupTable {
    fn from(p: &AffinePoint) -> Self {
        let mut points = [*p; 8];
        let double = p.double();
        for j in 0..7 {
            points[j + 1] = double.add(&points[j]);
        }
        LookupTable(points)
    }
}

impl LookupTable {
    /// Given `0 <= index < 8`, returns `(2 * index + 1) * p` in constant time.
    fn select(&self, index: u8) -> AffinePoint {
        debug_assert!(index < 8);

        let mut t = AffinePoint::IDENTITY;
        for (j, point) in self.0.iter().enumerate() {
            let c = index.ct_eq(&(j as u8));
            t.conditional_assign(point, c);
        }
        t
    }
}

/// Returns the nibbles of `a = k + 2^256 - (n if k is even)` from least to
/// most significant. The last entry holds bit 256 alone.
fn recode(k: &Scalar) -> [u8; WINDOWS] {
    let even = k.is_even();

    let addend = U256::conditional_select(&U256::ZERO, &ORDER_COMPLEMENT, even);
    let (mut low, carry) = k.to_uint().adc(&addend, Limb::ZERO);
    let top = u8::conditional_select(&1, &((carry.0 & 1) as u8), even);

    let mut output = [0u8; WINDOWS];
    let mut bytes = low.to_le_bytes();
    for (i, byte) in bytes.iter().enumerate() {
        output[2 * i] = byte & 0xf;
        output[2 * i + 1] = byte >> 4;
    }
    output[WINDOWS - 1] = top;
    bytes.zeroize();
    low.zeroize();
    output
}

/// The 5-bit window starting at nibble `i`: the nibble itself plus the low
/// bit of the nibble above it, which carries the digit's sign.
#[inline(always)]
fn window(nibbles: &[u8; WINDOWS], i: usize) -> u8 {
    nibbles[i] | ((nibbles[i + 1] & 1) << 4)
}

/// Splits a window into its sign (set when negative) and table index.
#[inline(always)]
fn signed_digit(window: u8) -> (Choice, u8) {
    let negative = Choice::from(((window >> 4) & 1) ^ 1);
    let mask = 0u8.wrapping_sub(negative.unwrap_u8());
    (negative, ((window ^ mask) & 0xf) >> 1)
}

/// Computes `k * p`.
///
/// The operation sequence depends only on the bit length of `a`, which is
/// fixed; table lookups and sign corrections are branchless. A random
/// projective `Z` hides the intermediate representation. A zero scalar or
/// the identity point short-circuits to the identity.
pub(crate) fn mul<R: CryptoRngCore + ?Sized>(
    p: &AffinePoint,
    k: &Scalar,
    rng: &mut R,
) -> AffinePoint {
    if bool::from(k.is_zero() | p.is_identity()) {
        return AffinePoint::IDENTITY;
    }

    let mut nibbles = recode(k);
    let table = LookupTable::from(p);

    let (mut sign, index) = signed_digit(window(&nibbles, WINDOWS - 2));
    let mut acc = JacobianPoint::from_affine_blinded(&table.select(index), rng);

    for i in (0..WINDOWS - 2).rev() {
        for _ in 0..4 {
            acc = acc.double();
        }

        let (negative, index) = signed_digit(window(&nibbles, i));
        // Flip the accumulator into the sign of the incoming digit.
        acc.conditional_negate(sign ^ negative);
        acc = acc.add_mixed(&table.select(index));
        sign = negative;
    }

    acc.conditional_negate(sign);
    let result = acc.to_affine();

    nibbles.zeroize();
    acc.zeroize();
    result
}

impl AffinePoint {
    /// Computes `k * self`, drawing the blinding factor from `rng`.
    pub fn mul<R: CryptoRngCore + ?Sized>(&self, k: &Scalar, rng: &mut R) -> AffinePoint {
        mul(self, k, rng)
    }

    /// Computes `k * G`.
    pub fn mul_base<R: CryptoRngCore + ?Sized>(k: &Scalar, rng: &mut R) -> AffinePoint {
        mul(&AffinePoint::GENERATOR, k, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::{WINDOWS, recode, signed_digit, window};
    use crate::arithmetic::{AffinePoint, Scalar};
    use hex_literal::hex;
    use num_bigint::{BigInt, BigUint};
    use proptest::prelude::*;
    use rand_chacha::{ChaChaRng, rand_core::SeedableRng};

    fn rng() -> ChaChaRng {
        ChaChaRng::from_seed([0x5c; 32])
    }

    /// Double-and-add reference over the affine formulas.
    fn reference_mul(p: &AffinePoint, k: &Scalar) -> AffinePoint {
        let mut acc = AffinePoint::IDENTITY;
        for byte in k.to_bytes() {
            for bit in (0..8).rev() {
                acc = acc.double();
                if (byte >> bit) & 1 == 1 {
                    acc = acc.add(p);
                }
            }
        }
        acc
    }

    /// Sums the signed digits back into an integer.
    fn digits_value(k: &Scalar) -> BigInt {
        let nibbles = recode(k);
        let mut value = BigInt::from(0);
        let (negative, index) = signed_digit(window(&nibbles, WINDOWS - 2));
        let mut digit = BigInt::from(2 * index + 1);
        if bool::from(negative) {
            digit = -digit;
        }
        value += digit;
        for i in (0..WINDOWS - 2).rev() {
            value *= 16;
            let (negative, index) = signed_digit(window(&nibbles, i));
            let mut digit = BigInt::from(2 * index + 1);
            if bool::from(negative) {
                digit = -digit;
            }
            value += digit;
        }
        value
    }

    #[test]
    fn recoded_digits_are_congruent() {
        let order = BigInt::from(BigUint::from_bytes_be(&hex!(
            "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"
        )));
        for k in [
            Scalar::ONE,
            Scalar::from_u64(2),
            Scalar::from_u64(0xfe25),
            -Scalar::ONE,
            -Scalar::from_u64(2),
        ] {
            let expected = BigInt::from(BigUint::from_bytes_be(&k.to_bytes()));
            let value = digits_value(&k);
            assert_eq!(((value - expected) % &order + &order) % &order, BigInt::from(0));
        }
    }

    #[test]
    fn small_multiples() {
        let g = AffinePoint::GENERATOR;
        let mut rng = rng();
        assert_eq!(g.mul(&Scalar::ZERO, &mut rng), AffinePoint::IDENTITY);
        assert_eq!(g.mul(&Scalar::ONE, &mut rng), g);
        assert_eq!(g.mul(&Scalar::from_u64(2), &mut rng), g.double());
        assert_eq!(g.mul(&Scalar::from_u64(3), &mut rng), g.double().add(&g));
        assert_eq!(g.mul(&-Scalar::ONE, &mut rng), -g);
        assert_eq!(g.mul(&-Scalar::from_u64(2), &mut rng), -g.double());
    }

    #[test]
    fn identity_point() {
        let mut rng = rng();
        assert_eq!(
            AffinePoint::IDENTITY.mul(&Scalar::from_u64(5), &mut rng),
            AffinePoint::IDENTITY
        );
    }

    #[test]
    fn public_key_vector() {
        let mut rng = rng();
        let k = Scalar::from_bytes(&hex!(
            "a7e130694166cdb95b1e1bbce3f21e4dbd63f46df42b48c5a1f8295033d57d04"
        ))
        .unwrap();
        assert_eq!(
            AffinePoint::mul_base(&k, &mut rng).to_compressed(),
            hex!("0244350faa76799fec03de2f324acd077fd1b686c3a89babc0ef47096ccc5a13fa")
        );
    }

    prop_compose! {
        fn scalar()(bytes in any::<[u8; 32]>()) -> Scalar {
            Scalar::reduce_bytes(&bytes)
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn matches_double_and_add(k in scalar()) {
            let g = AffinePoint::GENERATOR;
            prop_assert_eq!(g.mul(&k, &mut rng()), reference_mul(&g, &k));
        }

        #[test]
        fn linearity(a in scalar(), b in scalar()) {
            let mut rng = rng();
            let sum = AffinePoint::mul_base(&(a + b), &mut rng);
            let parts = AffinePoint::mul_base(&a, &mut rng).add(&AffinePoint::mul_base(&b, &mut rng));
            prop_assert_eq!(sum, parts);
        }

        #[test]
        fn blinding_does_not_change_result(k in scalar(), seed in any::<[u8; 32]>()) {
            let g = AffinePoint::GENERATOR;
            let mut other = ChaChaRng::from_seed(seed);
            prop_assert_eq!(g.mul(&k, &mut rng()), g.mul(&k, &mut other));
        }
    }
}
