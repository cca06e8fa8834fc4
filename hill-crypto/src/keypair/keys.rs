use crate::errors::HillCryptoError;
use crate::keypair::candidate::Candidate;
use crate::keypair::elimination::{reduce, split_blocks};
use crate::ring::matrix_ops::{identity_matrix, matrix_mul};
use crate::ring::{Matrix, Ring};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use serde::{Deserialize, Serialize};

/// Smallest key order the synthesizer draws; a 1×1 key is a plain
/// substitution and not worth generating.
pub const MIN_ORDER: usize = 2;
/// Largest key order the synthesizer draws.
pub const MAX_ORDER: usize = 9;
/// Default cap on rejected candidates per synthesis call. Random matrices
/// over Z/26Z are invertible often enough that hitting this cap points at a
/// broken randomness source rather than bad luck.
pub const MAX_SYNTHESIS_ATTEMPTS: usize = 100_000;

/// A matched Hill cipher key pair: `encrypt_key * decrypt_key` and
/// `decrypt_key * encrypt_key` are both the identity mod 26.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    /// Matrix order n, identical for both keys.
    pub order: usize,
    /// The invertible candidate K, as originally drawn.
    pub encrypt_key: Matrix,
    /// K^-1 mod 26, extracted from the reduced tableau.
    pub decrypt_key: Matrix,
}

impl KeyPair {
    /// Synthesizes a key pair deterministically from a seed.
    ///
    /// The same seed always yields the same order and the same pair.
    pub fn generate(seed: u64) -> Result<Self, HillCryptoError> {
        let mut rng = StdRng::seed_from_u64(seed);
        synthesize(&mut rng)
    }

    /// Checks the defining invariant: both products equal the identity.
    pub fn verify(&self, ring: &Ring) -> Result<bool, HillCryptoError> {
        let identity = identity_matrix(self.order);
        let forward = matrix_mul(&self.encrypt_key, &self.decrypt_key, ring)?;
        let backward = matrix_mul(&self.decrypt_key, &self.encrypt_key, ring)?;
        Ok(forward == identity && backward == identity)
    }

    /// Exports the key pair to a JSON string.
    pub fn to_json(&self) -> Result<String, HillCryptoError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Imports a key pair from a JSON string, validating its shape.
    pub fn from_json(json_str: &str) -> Result<Self, HillCryptoError> {
        let pair: KeyPair = serde_json::from_str(json_str)?;
        pair.validate_shape()?;
        Ok(pair)
    }

    fn validate_shape(&self) -> Result<(), HillCryptoError> {
        if !(MIN_ORDER..=MAX_ORDER).contains(&self.order) {
            return Err(HillCryptoError::InvalidOrder(format!(
                "Key order must be in [{}, {}], got {}",
                MIN_ORDER, MAX_ORDER, self.order
            )));
        }
        for (name, matrix) in [("encrypt", &self.encrypt_key), ("decrypt", &self.decrypt_key)] {
            if matrix.len() != self.order
                || matrix.iter().any(|row| row.len() != self.order)
            {
                return Err(HillCryptoError::DimensionMismatch(format!(
                    "The {} key is not a {}x{} matrix",
                    name, self.order, self.order
                )));
            }
            let modulus = Ring::alphabet().modulus() as i64;
            if matrix
                .iter()
                .any(|row| row.iter().any(|&v| !(0..modulus).contains(&v)))
            {
                return Err(HillCryptoError::DimensionMismatch(format!(
                    "The {} key has an entry outside [0, {})",
                    name, modulus
                )));
            }
        }
        Ok(())
    }
}

/// Draws a fresh order uniformly from `[MIN_ORDER, MAX_ORDER]` and
/// synthesizes a pair of that order.
pub fn synthesize(rng: &mut impl Rng) -> Result<KeyPair, HillCryptoError> {
    let order = rng.random_range(MIN_ORDER..=MAX_ORDER);
    synthesize_with_order(order, rng)
}

/// Synthesizes a key pair of the given order with the default attempt cap.
pub fn synthesize_with_order(order: usize, rng: &mut impl Rng) -> Result<KeyPair, HillCryptoError> {
    synthesize_with_limit(order, MAX_SYNTHESIS_ATTEMPTS, rng)
}

/// Synthesizes a key pair of the given order, retrying rejected candidates
/// up to `max_attempts` times.
///
/// Each attempt draws a fresh candidate, runs the full Gauss-Jordan pass on
/// its tableau, and either extracts the pair or discards everything and
/// retries. Rejection is a routine outcome, logged at trace level only.
///
/// # Errors
///
/// Returns `HillCryptoError::InvalidOrder` for orders outside
/// `[MIN_ORDER, MAX_ORDER]` and `HillCryptoError::SearchExhausted` when no
/// invertible candidate appears within `max_attempts` draws.
pub fn synthesize_with_limit(
    order: usize,
    max_attempts: usize,
    rng: &mut impl Rng,
) -> Result<KeyPair, HillCryptoError> {
    if !(MIN_ORDER..=MAX_ORDER).contains(&order) {
        return Err(HillCryptoError::InvalidOrder(format!(
            "Key order must be in [{}, {}], got {}",
            MIN_ORDER, MAX_ORDER, order
        )));
    }

    let ring = Ring::alphabet();
    for attempt in 1..=max_attempts {
        let Candidate { key, mut tableau } = Candidate::random(order, &ring, rng);
        match reduce(&mut tableau, &ring) {
            Ok(()) => {
                log::debug!(
                    "Invertible candidate of order {} found on attempt {}",
                    order,
                    attempt
                );
                let (_, decrypt_key) = split_blocks(&tableau);
                return Ok(KeyPair {
                    order,
                    encrypt_key: key,
                    decrypt_key,
                });
            }
            Err(HillCryptoError::SingularMatrix(_)) => {
                log::trace!("Candidate rejected as singular on attempt {}", attempt);
            }
            Err(e) => return Err(e),
        }
    }

    Err(HillCryptoError::SearchExhausted(format!(
        "No invertible candidate of order {} after {} attempts",
        order, max_attempts
    )))
}
