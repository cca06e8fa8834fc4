use crate::ring::{Matrix, Ring};

use rand::Rng;

/// A freshly drawn key candidate: the n×n draw itself plus its n×2n
/// augmentation `[K | I]` used as the elimination workspace.
///
/// Both matrices are owned by the current synthesis attempt and dropped
/// together when the candidate turns out to be singular.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// The candidate key K, captured before elimination mutates the tableau.
    pub key: Matrix,
    /// The augmented tableau `[K | I]`.
    pub tableau: Matrix,
}

impl Candidate {
    /// Draws an n×n matrix with entries uniform over `[0, modulus)` and
    /// builds the augmented tableau in the same pass.
    ///
    /// The randomness source is injected so candidate generation is
    /// reproducible given a seeded rng.
    pub fn random(n: usize, ring: &Ring, rng: &mut impl Rng) -> Self {
        let width = 2 * n;
        let mut key = vec![vec![0i64; n]; n];
        let mut tableau = vec![vec![0i64; width]; n];

        for i in 0..n {
            for j in 0..n {
                let entry = rng.random_range(0..ring.modulus()) as i64;
                key[i][j] = entry;
                tableau[i][j] = entry;
            }
            // Right half of [K | I] starts as the identity.
            tableau[i][i + n] = 1;
        }

        Candidate { key, tableau }
    }
}
