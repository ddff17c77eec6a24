//! Test vectors.

pub mod address;
pub mod derive;
pub mod ecdh;
pub mod ecdsa;
pub mod field;
