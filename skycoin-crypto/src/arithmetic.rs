//! A pure-Rust implementation of group operations on secp256k1.

pub(crate) mod affine;
pub(crate) mod field;
mod jacobian;
mod mul;
pub(crate) mod scalar;

pub use self::{
    affine::{AffinePoint, COMPRESSED_POINT_SIZE, UNCOMPRESSED_POINT_SIZE},
    field::FieldElement,
    scalar::{ORDER, Scalar},
};

const CURVE_EQUATION_B_SINGLE: u64 = 7u64;

/// `b` in the curve equation `y² = x³ + b`; `a` is zero.
pub(crate) const CURVE_EQUATION_B: FieldElement = FieldElement::from_u64(CURVE_EQUATION_B_SINGLE);
