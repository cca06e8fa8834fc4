//! Gauss-Jordan elimination over Z/26Z.
//!
//! Mod 26 a pivot must be *invertible*, not merely non-zero: an entry
//! sharing a factor with the modulus (2 or 13) cannot normalize its row, so
//! the pivot search skips it and looks further down the column.

use crate::errors::HillCryptoError;
use crate::ring::{Matrix, Ring};

/// Reduces an n×2n tableau `[K | I]` to `[I | K^-1]` over the ring, in place.
///
/// For each pivot column p from 0 to n-1:
/// 1. scan rows p..n for the first entry in column p with a modular inverse;
/// 2. swap that row into position p if it is not already there;
/// 3. scale row p by the pivot's inverse so the pivot becomes 1;
/// 4. subtract the right multiple of row p from every other row, zeroing
///    column p outside the pivot.
///
/// Eliminating above and below the pivot in the same pass means the left
/// block is exactly the identity once the last column is processed; there is
/// no back-substitution phase.
///
/// # Errors
///
/// Returns `HillCryptoError::SingularMatrix` when some column has no
/// invertible pivot candidate. The tableau is left partially reduced and
/// must be discarded by the caller; a singular candidate is never repaired.
pub fn reduce(tableau: &mut Matrix, ring: &Ring) -> Result<(), HillCryptoError> {
    let n = tableau.len();
    if n == 0 {
        return Ok(());
    }
    let width = 2 * n;
    for (i, row) in tableau.iter().enumerate() {
        if row.len() != width {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Tableau row {} has length {}, expected {}",
                i,
                row.len(),
                width
            )));
        }
    }

    for p in 0..n {
        let mut pivot_inv = None;
        for i in p..n {
            if let Ok(inv) = ring.inv(tableau[i][p]) {
                if i != p {
                    tableau.swap(i, p);
                }
                pivot_inv = Some(inv);
                break;
            }
        }
        let inv = match pivot_inv {
            Some(inv) => inv,
            None => {
                return Err(HillCryptoError::SingularMatrix(format!(
                    "No invertible pivot in column {} mod {}",
                    p,
                    ring.modulus()
                )));
            }
        };

        for j in 0..width {
            tableau[p][j] = ring.mul(tableau[p][j], inv);
        }

        for i in 0..n {
            if i == p {
                continue;
            }
            let factor = tableau[i][p];
            if factor == 0 {
                continue;
            }
            for j in 0..width {
                let term = ring.mul(factor, tableau[p][j]);
                tableau[i][j] = ring.sub(tableau[i][j], term);
            }
        }
    }

    Ok(())
}

/// Splits an n×2n tableau into its left and right n×n blocks.
pub fn split_blocks(tableau: &Matrix) -> (Matrix, Matrix) {
    let n = tableau.len();
    let left = tableau.iter().map(|row| row[..n].to_vec()).collect();
    let right = tableau.iter().map(|row| row[n..].to_vec()).collect();
    (left, right)
}

/// Inverts a square matrix over the ring by Gauss-Jordan on `[M | I]`.
///
/// # Errors
///
/// Returns `HillCryptoError::DimensionMismatch` if the matrix is not square
/// and `HillCryptoError::SingularMatrix` if it has no inverse mod the ring
/// modulus.
pub fn invert(matrix: &Matrix, ring: &Ring) -> Result<Matrix, HillCryptoError> {
    let n = matrix.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Matrix row {} has length {}, expected {} for inversion",
                i,
                row.len(),
                n
            )));
        }
    }

    let mut tableau = vec![vec![0i64; 2 * n]; n];
    for i in 0..n {
        for j in 0..n {
            tableau[i][j] = ring.normalize(matrix[i][j]);
        }
        tableau[i][i + n] = 1;
    }

    reduce(&mut tableau, ring)?;

    let (_, inverse) = split_blocks(&tableau);
    Ok(inverse)
}
