//! Chained deterministic key derivation.
//!
//! A wallet seed is turned into an unbounded sequence of keypairs. Each step
//! hashes the current seed through one scalar multiplication (the "seed
//! hash") to obtain the next seed, and derives the keypair at this position
//! from the current seed and the next one:
//!
//! ```text
//! h1        = SHA256(seed)
//! probe     = SHA256(h1)
//! dummy     = SHA256(probe) * G
//! next_seed = SHA256(h1 || compress(probe * dummy))
//! secret    = SHA256(SHA256(seed || next_seed))
//! ```
//!
//! There is no direct indexing: the `n`th keypair costs `n` steps.

use crate::{
    Error, Keypair, Result, Scalar, SecretKey,
    ecdh::shared_point,
    hash::{DIGEST_SIZE, sha256, sha256_concat},
};
use elliptic_curve::{
    rand_core::CryptoRngCore,
    zeroize::{Zeroize, Zeroizing},
};

/// Number of times a hash that is not a valid secret key is re-hashed
/// before giving up.
const REHASH_LIMIT: usize = 16;

/// Interprets a hash as a secret key, re-hashing it while it falls outside
/// `[1, n - 1]`.
fn secret_from_hash(hash: Zeroizing<[u8; DIGEST_SIZE]>) -> Result<SecretKey> {
    let mut candidate = hash;
    for _attempt in 0..=REHASH_LIMIT {
        if let Ok(secret) = SecretKey::from_bytes(&candidate) {
            return Ok(secret);
        }

        #[cfg(feature = "log")]
        log::warn!("derived scalar out of range, re-hashing (attempt {})", _attempt + 1);

        candidate = Zeroizing::new(sha256(&*candidate));
    }
    Err(Error::RetryBudgetExhausted)
}

/// Derives a keypair whose secret key is `SHA256(seed)`.
pub fn deterministic_keypair<R: CryptoRngCore + ?Sized>(
    seed: &[u8],
    rng: &mut R,
) -> Result<Keypair> {
    let secret = secret_from_hash(Zeroizing::new(sha256(seed)))?;
    Ok(Keypair::new(secret, rng))
}

/// Advances a seed by one step of the chain.
pub fn seed_hash<R: CryptoRngCore + ?Sized>(
    seed: &[u8],
    rng: &mut R,
) -> Result<Zeroizing<[u8; DIGEST_SIZE]>> {
    let h1 = Zeroizing::new(sha256(seed));
    let probe = Zeroizing::new(sha256(&*h1));
    let dummy = deterministic_keypair(&*probe, rng)?;

    let mut k = Scalar::reduce_bytes(&probe);
    let point = shared_point(&k, dummy.public_key().as_affine(), rng);
    k.zeroize();

    Ok(Zeroizing::new(sha256_concat(&*h1, &*point)))
}

/// Derives the keypair at `seed`, returning the next seed along with it.
pub fn keypair_from_seed<R: CryptoRngCore + ?Sized>(
    seed: &[u8],
    rng: &mut R,
) -> Result<(Zeroizing<[u8; DIGEST_SIZE]>, Keypair)> {
    let next_seed = seed_hash(seed, rng)?;
    let mix = Zeroizing::new(sha256_concat(seed, &*next_seed));
    let keypair = deterministic_keypair(&*mix, rng)?;
    Ok((next_seed, keypair))
}

/// Derives the keypair at 1-based position `index` of the chain rooted at
/// `master_seed`.
///
/// Runs `index` derivation steps; callers on constrained devices should
/// bound `index`.
pub fn keypair_at_index<R: CryptoRngCore + ?Sized>(
    master_seed: &[u8],
    index: u32,
    rng: &mut R,
) -> Result<Keypair> {
    let skip = index.checked_sub(1).ok_or(Error::InvalidIndex)?;

    #[cfg(feature = "log")]
    log::debug!("deriving keypair at index {}", index);

    KeypairChain::new(master_seed, rng)
        .nth(skip as usize)
        .unwrap_or(Err(Error::InvalidIndex))
}

/// Iterator over the keypairs of a seed chain, starting at index 1.
///
/// Stops after the first error.
pub struct KeypairChain<'a, R: ?Sized> {
    master_seed: Option<&'a [u8]>,
    seed: Zeroizing<[u8; DIGEST_SIZE]>,
    rng: &'a mut R,
    failed: bool,
}

impl<'a, R: CryptoRngCore + ?Sized> KeypairChain<'a, R> {
    /// Starts a chain at `master_seed`.
    pub fn new(master_seed: &'a [u8], rng: &'a mut R) -> Self {
        Self {
            master_seed: Some(master_seed),
            seed: Zeroizing::new([0u8; DIGEST_SIZE]),
            rng,
            failed: false,
        }
    }
}

impl<R: CryptoRngCore + ?Sized> Iterator for KeypairChain<'_, R> {
    type Item = Result<Keypair>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let step = match self.master_seed.take() {
            Some(master) => keypair_from_seed(master, self.rng),
            None => keypair_from_seed(&*self.seed, self.rng),
        };

        match step {
            Ok((next_seed, keypair)) => {
                self.seed = next_seed;
                Some(Ok(keypair))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}
