//! Error types.

use core::fmt;

/// Error type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Secret key is zero or not below the group order.
    InvalidSecretKey,

    /// Public key is malformed, off the curve, or the point at infinity.
    InvalidPublicKey,

    /// Signature `r` or `s` is out of range, or its ephemeral point is invalid.
    InvalidSignature,

    /// Recovery byte has bits set above bit 1.
    InvalidRecoveryId,

    /// Digest is not 32 bytes (or 64 hexadecimal characters).
    InvalidDigest,

    /// Derivation index is zero or above the configured bound.
    InvalidIndex,

    /// Base58 text could not be decoded, or decoded to the wrong length.
    InvalidEncoding,

    /// Base58Check checksum does not match the payload.
    Checksum,

    /// Nonce is zero, or produced a zero `r` or `s`.
    DegenerateNonce,

    /// Nonce source produced no further candidates.
    NonceExhausted,

    /// Rejection sampling ran out of attempts.
    RetryBudgetExhausted,

    /// Recovered signer does not match the expected address.
    AddressMismatch,

    /// Firmware signature slots or signatures are invalid.
    FirmwareSignature,

    /// Curve has no short Weierstrass parameters.
    UnsupportedCurve,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::InvalidSecretKey => "invalid secret key",
            Error::InvalidPublicKey => "invalid public key",
            Error::InvalidSignature => "invalid signature",
            Error::InvalidRecoveryId => "invalid recovery id",
            Error::InvalidDigest => "invalid digest",
            Error::InvalidIndex => "invalid derivation index",
            Error::InvalidEncoding => "invalid base58 encoding",
            Error::Checksum => "checksum mismatch",
            Error::DegenerateNonce => "degenerate nonce",
            Error::NonceExhausted => "nonce source exhausted",
            Error::RetryBudgetExhausted => "retry budget exhausted",
            Error::AddressMismatch => "address mismatch",
            Error::FirmwareSignature => "firmware signature check failed",
            Error::UnsupportedCurve => "curve has no weierstrass parameters",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for Error {}

impl From<bs58::decode::Error> for Error {
    fn from(_: bs58::decode::Error) -> Error {
        Error::InvalidEncoding
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
